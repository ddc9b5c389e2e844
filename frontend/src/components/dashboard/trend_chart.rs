use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::services::logging::Logger;

const EXPENSE_COLOR: RGBColor = RGBColor(239, 68, 68);
const INCOME_COLOR: RGBColor = RGBColor(34, 197, 94);

/// One month on the income/expense trend line.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub month: &'static str,
    pub expense: f64,
    pub income: f64,
}

#[derive(Properties, PartialEq)]
pub struct TrendChartProps {
    pub points: Vec<TrendPoint>,
}

/// Canvas line chart of monthly income versus expenses. A struct component
/// so drawing can happen after the canvas node exists in the DOM.
pub struct TrendChart {
    canvas_ref: NodeRef,
}

impl Component for TrendChart {
    type Message = ();
    type Properties = TrendChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.draw(ctx);
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw(ctx);
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <canvas
                ref={self.canvas_ref.clone()}
                class="trend-chart-canvas"
                width="640"
                height="320"
            />
        }
    }
}

impl TrendChart {
    fn draw(&self, ctx: &Context<Self>) {
        if let Err(e) = self.try_draw(&ctx.props().points) {
            Logger::error_with_component("trend-chart", &format!("failed to draw: {}", e));
        }
    }

    fn try_draw(&self, points: &[TrendPoint]) -> Result<(), Box<dyn std::error::Error>> {
        let canvas: HtmlCanvasElement = match self.canvas_ref.cast() {
            Some(canvas) => canvas,
            None => return Ok(()),
        };
        if points.is_empty() {
            return Ok(());
        }

        let backend = CanvasBackend::with_canvas_object(canvas)
            .ok_or("canvas backend unavailable")?;
        let root = backend.into_drawing_area();
        root.fill(&WHITE)?;

        let max_value = points
            .iter()
            .flat_map(|p| [p.expense, p.income])
            .fold(0.0_f64, f64::max);
        let y_max = if max_value > 0.0 { max_value * 1.15 } else { 1.0 };
        let x_max = (points.len() - 1).max(1);

        let mut chart = ChartBuilder::on(&root)
            .margin(12)
            .x_label_area_size(28)
            .y_label_area_size(56)
            .build_cartesian_2d(0usize..x_max, 0.0_f64..y_max)?;

        let months: Vec<&'static str> = points.iter().map(|p| p.month).collect();
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(points.len())
            .x_label_formatter(&|idx| {
                months.get(*idx).copied().unwrap_or("").to_string()
            })
            .y_label_formatter(&|value| crate::services::format::currency(*value))
            .label_style(("sans-serif", 12))
            .draw()?;

        chart
            .draw_series(LineSeries::new(
                points.iter().enumerate().map(|(i, p)| (i, p.expense)),
                EXPENSE_COLOR.stroke_width(2),
            ))?
            .label("Expenses")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], EXPENSE_COLOR));

        chart
            .draw_series(LineSeries::new(
                points.iter().enumerate().map(|(i, p)| (i, p.income)),
                INCOME_COLOR.stroke_width(2),
            ))?
            .label("Income")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], INCOME_COLOR));

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK.mix(0.3))
            .position(SeriesLabelPosition::UpperLeft)
            .draw()?;

        root.present()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_point_equality_drives_rerender() {
        let a = TrendPoint {
            month: "Jan",
            expense: 1500.0,
            income: 4000.0,
        };
        let b = TrendPoint {
            month: "Jan",
            expense: 1500.0,
            income: 4000.0,
        };
        assert_eq!(a, b);

        let c = TrendPoint {
            expense: 1800.0,
            ..a.clone()
        };
        assert_ne!(a, c);
    }

    #[test]
    fn test_draw_skips_without_canvas() {
        // No DOM in plain tests; a chart with an unattached ref must not fail
        let chart = TrendChart {
            canvas_ref: NodeRef::default(),
        };
        let points = vec![TrendPoint {
            month: "Jan",
            expense: 1500.0,
            income: 4000.0,
        }];
        assert!(chart.try_draw(&points).is_ok());
        assert!(chart.try_draw(&[]).is_ok());
    }
}
