//! Dashboard overview chart.
//!
//! The chart model is plain data built from the summary endpoints;
//! only the rendering side touches ECharts, which keeps the bar math
//! and color assignment testable off the browser.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use leptos::prelude::*;

use crate::net::types::{MonthlySummary, ShortSummary, TransactionType};

pub const INCOME_COLOR: &str = "#0088FE";
pub const EXPENSE_COLOR: &str = "#00C49F";
pub const SAVING_COLOR: &str = "#FFBB28";

#[cfg(feature = "csr")]
const CHART_WIDTH: u32 = 560;
#[cfg(feature = "csr")]
const CHART_HEIGHT: u32 = 320;

/// Badge and chart color for a transaction kind.
pub fn color_for(kind: TransactionType) -> &'static str {
    match kind {
        TransactionType::Income => INCOME_COLOR,
        TransactionType::Expense => EXPENSE_COLOR,
        TransactionType::Saving => SAVING_COLOR,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartBar {
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
}

/// The month-overview bar chart as plain data.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub bars: [ChartBar; 3],
}

impl ChartSpec {
    fn from_totals(income: f64, expense: f64, saving: f64) -> Self {
        Self {
            bars: [
                ChartBar {
                    label: TransactionType::Income.label(),
                    value: income,
                    color: INCOME_COLOR,
                },
                ChartBar {
                    label: TransactionType::Expense.label(),
                    value: expense,
                    color: EXPENSE_COLOR,
                },
                ChartBar {
                    label: TransactionType::Saving.label(),
                    value: saving,
                    color: SAVING_COLOR,
                },
            ],
        }
    }

    pub fn from_short_summary(summary: &ShortSummary) -> Self {
        Self::from_totals(
            summary.income_amount(),
            summary.expense_amount(),
            summary.saving_amount(),
        )
    }

    pub fn from_monthly_summary(summary: &MonthlySummary) -> Self {
        Self::from_totals(
            summary.total_income,
            summary.total_expense,
            summary.total_saving,
        )
    }

    /// True when every bar is zero, in which case the dashboard shows
    /// a placeholder instead of an empty chart.
    pub fn is_empty(&self) -> bool {
        self.bars.iter().all(|bar| bar.value == 0.0)
    }

    pub fn labels(&self) -> Vec<String> {
        self.bars.iter().map(|bar| bar.label.to_owned()).collect()
    }
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self::from_short_summary(&ShortSummary::default())
    }
}

#[cfg(feature = "csr")]
fn build_chart(spec: &ChartSpec) -> charming::Chart {
    use charming::Chart;
    use charming::component::{Axis, Grid};
    use charming::datatype::DataPointItem;
    use charming::element::{AxisType, ItemStyle, Tooltip, Trigger};
    use charming::series::bar;

    let data = spec
        .bars
        .iter()
        .map(|b| DataPointItem::new(b.value).item_style(ItemStyle::new().color(b.color)))
        .collect::<Vec<_>>();

    Chart::new()
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(spec.labels()))
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(bar::Bar::new().name("This month").data(data))
}

/// Bar chart of the month's income, expenses, and savings.
#[component]
pub fn OverviewChart(#[prop(into)] spec: Signal<ChartSpec>) -> impl IntoView {
    let container_id = format!("overview-chart-{}", uuid::Uuid::new_v4());

    #[cfg(feature = "csr")]
    {
        let echarts: StoredValue<Option<charming::Echarts>, LocalStorage> =
            StoredValue::new_local(None);
        let target = container_id.clone();

        // Render once the container exists, update in place afterward
        // so month switches do not flash an empty chart.
        Effect::new(move || {
            let chart = build_chart(&spec.get());
            let rendered = echarts.with_value(Option::is_some);
            if rendered {
                echarts.with_value(|instance| {
                    if let Some(instance) = instance {
                        charming::WasmRenderer::update(instance, &chart);
                    }
                });
            } else {
                match charming::WasmRenderer::new(CHART_WIDTH, CHART_HEIGHT).render(&target, &chart)
                {
                    Ok(instance) => echarts.set_value(Some(instance)),
                    Err(err) => log::warn!("chart render failed: {err:?}"),
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = &spec;
    }

    view! { <div class="overview-chart" id=container_id></div> }
}
