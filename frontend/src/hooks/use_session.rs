use yew::prelude::*;

use crate::components::session_provider::SessionHandle;
use crate::services::api::ApiClient;

/// Session accessor. Panics outside a [`SessionProvider`] scope; a missing
/// provider is a wiring bug, not a runtime condition.
///
/// [`SessionProvider`]: crate::components::session_provider::SessionProvider
#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
        .expect("use_session must be called inside a SessionProvider")
}

/// Shared API client carrying the app-wide unauthorized policy.
#[hook]
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("use_api must be called inside a SessionProvider")
}
