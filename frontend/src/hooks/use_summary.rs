use shared::Summary;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_api;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct SummaryState {
    pub summary: Summary,
    pub loading: bool,
}

/// Read-only summary aggregate, fetched fresh on every view activation.
/// Nothing is cached across view exits.
#[hook]
pub fn use_summary() -> SummaryState {
    let api = use_api();
    let summary = use_state(Summary::default);
    let loading = use_state(|| true);

    let alive = use_mut_ref(|| true);
    use_effect_with((), {
        let alive = alive.clone();
        move |_| {
            move || {
                *alive.borrow_mut() = false;
            }
        }
    });

    use_effect_with((), {
        let api = api.clone();
        let summary = summary.clone();
        let loading = loading.clone();
        let alive = alive.clone();

        move |_| {
            spawn_local(async move {
                match api.summary().await {
                    Ok(fetched) => {
                        if *alive.borrow() {
                            summary.set(fetched);
                        }
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "summary",
                            &format!("failed to fetch summary: {}", e),
                        );
                    }
                }
                if *alive.borrow() {
                    loading.set(false);
                }
            });
            || ()
        }
    });

    SummaryState {
        summary: (*summary).clone(),
        loading: *loading,
    }
}
