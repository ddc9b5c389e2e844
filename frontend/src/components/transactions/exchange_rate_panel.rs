use shared::ExchangeRateSnapshot;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExchangeRatePanelProps {
    pub snapshot: Option<ExchangeRateSnapshot>,
    pub refreshing: bool,
    pub on_refresh: Callback<()>,
}

/// Advisory USD exchange-rate panel with a manual refresh control.
#[function_component(ExchangeRatePanel)]
pub fn exchange_rate_panel(props: &ExchangeRatePanelProps) -> Html {
    let on_refresh = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };

    let body = match &props.snapshot {
        Some(snapshot) => {
            let rows: Html = snapshot
                .rates
                .iter()
                .map(|(code, rate)| {
                    html! {
                        <tr key={code.clone()}>
                            <td class="rate-code">{ code.clone() }</td>
                            <td class="rate-value">{ format!("{:.4}", rate) }</td>
                        </tr>
                    }
                })
                .collect();
            html! {
                <>
                    <table class="rate-table">
                        <thead>
                            <tr>
                                <th>{"Currency"}</th>
                                <th>{"Per USD"}</th>
                            </tr>
                        </thead>
                        <tbody>{ rows }</tbody>
                    </table>
                    <p class="rate-caption">
                        { format!("As of {}", snapshot.fetched_at_display()) }
                    </p>
                </>
            }
        }
        None => html! {
            <p class="rate-placeholder">{"Exchange rates unavailable."}</p>
        },
    };

    html! {
        <section class="panel exchange-rate-panel">
            <div class="panel-header">
                <h3 class="panel-title">{"Exchange Rates"}</h3>
                <button
                    type="button"
                    class="panel-action"
                    disabled={props.refreshing}
                    onclick={on_refresh}
                >
                    { if props.refreshing { "Refreshing..." } else { "Refresh" } }
                </button>
            </div>
            { body }
        </section>
    }
}
