pub mod trend_chart;

use yew::prelude::*;

use crate::hooks::use_summary;
use crate::services::format;
use trend_chart::{TrendChart, TrendPoint};

/// Demo trend series shown until the transactions API grows a monthly
/// aggregate endpoint.
fn demo_trend_points() -> Vec<TrendPoint> {
    vec![
        TrendPoint { month: "Jan", expense: 1500.0, income: 4000.0 },
        TrendPoint { month: "Feb", expense: 1800.0, income: 4000.0 },
        TrendPoint { month: "Mar", expense: 1200.0, income: 4200.0 },
        TrendPoint { month: "Apr", expense: 2100.0, income: 4200.0 },
        TrendPoint { month: "May", expense: 1600.0, income: 4500.0 },
        TrendPoint { month: "Jun", expense: 1900.0, income: 4500.0 },
    ]
}

/// Illustrative asset split rendered as horizontal bars.
const ASSET_ALLOCATION: &[(&str, f64)] = &[
    ("Stocks", 25_000.0),
    ("Cash", 10_000.0),
    ("Real Estate", 150_000.0),
    ("Crypto", 5_000.0),
    ("Bonds", 15_000.0),
];

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let state = use_summary();
    let summary = &state.summary;

    let total_assets: f64 = ASSET_ALLOCATION.iter().map(|(_, value)| value).sum();

    let allocation_rows: Html = ASSET_ALLOCATION
        .iter()
        .map(|(label, value)| {
            let fraction = if total_assets > 0.0 {
                value / total_assets
            } else {
                0.0
            };
            let width = format!("width: {}%", (fraction * 100.0).round());
            html! {
                <div class="allocation-row" key={*label}>
                    <span class="allocation-label">{ *label }</span>
                    <div class="allocation-track">
                        <div class="allocation-fill" style={width} />
                    </div>
                    <span class="allocation-value">
                        { format!("{} ({})", format::currency(*value), format::percent(fraction)) }
                    </span>
                </div>
            }
        })
        .collect();

    html! {
        <div class="dashboard">
            <div class="summary-cards">
                <div class="summary-card">
                    <span class="summary-card-label">{"Total Transactions"}</span>
                    <span class="summary-card-value">
                        { if state.loading {
                            "...".to_string()
                        } else {
                            summary.total_transactions.to_string()
                        }}
                    </span>
                </div>
                <div class="summary-card">
                    <span class="summary-card-label">{"Total Income"}</span>
                    <span class="summary-card-value amount-income">
                        { if state.loading {
                            "...".to_string()
                        } else {
                            format::currency(summary.total_income)
                        }}
                    </span>
                </div>
                <div class="summary-card">
                    <span class="summary-card-label">{"Total Expenses"}</span>
                    <span class="summary-card-value amount-expense">
                        { if state.loading {
                            "...".to_string()
                        } else {
                            format::currency(summary.total_expense)
                        }}
                    </span>
                </div>
            </div>

            <div class="dashboard-panels">
                <section class="panel">
                    <h3 class="panel-title">{"Income vs Expenses"}</h3>
                    <TrendChart points={demo_trend_points()} />
                </section>
                <section class="panel">
                    <h3 class="panel-title">{"Asset Allocation"}</h3>
                    <div class="allocation-list">
                        { allocation_rows }
                    </div>
                </section>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_series_covers_first_half_of_year() {
        let points = demo_trend_points();
        assert_eq!(points.len(), 6);
        assert_eq!(points[0].month, "Jan");
        assert_eq!(points[5].month, "Jun");
    }

    #[test]
    fn test_allocation_fractions_sum_to_one() {
        let total: f64 = ASSET_ALLOCATION.iter().map(|(_, v)| v).sum();
        let sum: f64 = ASSET_ALLOCATION.iter().map(|(_, v)| v / total).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }
}
