use shared::ExchangeRateSnapshot;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_api;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct ExchangeRatesState {
    pub snapshot: Option<ExchangeRateSnapshot>,
    /// In-flight flag for disabling the refresh control; overlapping
    /// refreshes are not blocked at the data layer
    pub refreshing: bool,
}

pub struct UseExchangeRatesResult {
    pub state: ExchangeRatesState,
    pub refresh: Callback<()>,
}

/// Advisory exchange-rate snapshot, fetched on view load and on demand.
/// Independent of the transaction list lifecycle.
#[hook]
pub fn use_exchange_rates() -> UseExchangeRatesResult {
    let api = use_api();
    let snapshot = use_state(|| Option::<ExchangeRateSnapshot>::None);
    let refreshing = use_state(|| false);

    let alive = use_mut_ref(|| true);
    use_effect_with((), {
        let alive = alive.clone();
        move |_| {
            move || {
                *alive.borrow_mut() = false;
            }
        }
    });

    let refresh = {
        let api = api.clone();
        let snapshot = snapshot.clone();
        let refreshing = refreshing.clone();
        let alive = alive.clone();

        use_callback((), move |_, _| {
            let api = api.clone();
            let snapshot = snapshot.clone();
            let refreshing = refreshing.clone();
            let alive = alive.clone();

            spawn_local(async move {
                refreshing.set(true);
                match api.exchange_rate().await {
                    Ok(fetched) => {
                        if *alive.borrow() {
                            snapshot.set(Some(fetched));
                        }
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "exchange-rates",
                            &format!("failed to fetch exchange rates: {}", e),
                        );
                    }
                }
                if *alive.borrow() {
                    refreshing.set(false);
                }
            });
        })
    };

    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let state = ExchangeRatesState {
        snapshot: (*snapshot).clone(),
        refreshing: *refreshing,
    };

    UseExchangeRatesResult { state, refresh }
}
