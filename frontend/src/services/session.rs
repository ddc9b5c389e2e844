use crate::services::api::ApiError;
use shared::Identity;

/// Client-side session lifecycle. Starts `Unknown` until the one-shot
/// `/auth/check` resolves, then only ever moves between `Authenticated`
/// and `Anonymous`.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Unknown,
    Authenticated(Identity),
    Anonymous,
}

impl SessionState {
    /// True only before the startup check has resolved. Protected views
    /// must not render (or redirect) while this holds.
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Unknown)
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionState::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    /// Fold the startup check outcome into a resolved state. Any failure,
    /// authorization failures included, means anonymous.
    pub fn resolved(outcome: Result<Identity, ApiError>) -> Self {
        match outcome {
            Ok(identity) => SessionState::Authenticated(identity),
            Err(_) => SessionState::Anonymous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            username: "a@b.com".to_string(),
            email: None,
        }
    }

    #[test]
    fn test_initial_state_is_loading_with_no_identity() {
        let state = SessionState::Unknown;
        assert!(state.is_loading());
        assert!(state.identity().is_none());
    }

    #[test]
    fn test_successful_check_resolves_to_authenticated() {
        let state = SessionState::resolved(Ok(identity()));
        assert!(!state.is_loading());
        assert_eq!(state.identity().map(|i| i.username.as_str()), Some("a@b.com"));
    }

    #[test]
    fn test_failed_check_resolves_to_anonymous() {
        let state = SessionState::resolved(Err(ApiError::Network("offline".to_string())));
        assert!(!state.is_loading());
        assert!(state.identity().is_none());
    }

    #[test]
    fn test_unauthorized_check_resolves_to_anonymous() {
        let state = SessionState::resolved(Err(ApiError::Unauthorized));
        assert_eq!(state, SessionState::Anonymous);
    }
}
