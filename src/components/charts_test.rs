use super::*;

fn summary(income: &str, expense: &str, saving: &str) -> ShortSummary {
    ShortSummary {
        income: income.to_owned(),
        expense: expense.to_owned(),
        saving: saving.to_owned(),
    }
}

// ============================================================================
// Chart model
// ============================================================================

#[test]
fn bars_follow_the_summary_amounts() {
    let spec = ChartSpec::from_short_summary(&summary("1200.50", "350", "234"));

    assert_eq!(spec.bars[0].label, "Income");
    assert_eq!(spec.bars[0].value, 1200.5);
    assert_eq!(spec.bars[1].value, 350.0);
    assert_eq!(spec.bars[2].value, 234.0);
}

#[test]
fn bar_colors_match_the_kind_palette() {
    let spec = ChartSpec::from_short_summary(&summary("1", "2", "3"));

    assert_eq!(spec.bars[0].color, color_for(TransactionType::Income));
    assert_eq!(spec.bars[1].color, color_for(TransactionType::Expense));
    assert_eq!(spec.bars[2].color, color_for(TransactionType::Saving));
}

#[test]
fn unparsable_amounts_become_zero_bars() {
    let spec = ChartSpec::from_short_summary(&summary("oops", "", "12"));
    assert_eq!(spec.bars[0].value, 0.0);
    assert_eq!(spec.bars[1].value, 0.0);
    assert_eq!(spec.bars[2].value, 12.0);
}

#[test]
fn empty_summary_makes_an_empty_chart() {
    assert!(ChartSpec::default().is_empty());
    assert!(ChartSpec::from_short_summary(&summary("0", "0", "0")).is_empty());
    assert!(!ChartSpec::from_short_summary(&summary("0", "5", "0")).is_empty());
}

#[test]
fn labels_line_up_with_the_bars() {
    let spec = ChartSpec::default();
    assert_eq!(spec.labels(), vec!["Income", "Expense", "Saving"]);
}

#[test]
fn monthly_totals_feed_the_same_bars() {
    let monthly = MonthlySummary {
        transactions: Vec::new(),
        total_income: 900.0,
        total_expense: 420.5,
        total_saving: 100.0,
    };

    let spec = ChartSpec::from_monthly_summary(&monthly);
    assert_eq!(spec.bars[0].value, 900.0);
    assert_eq!(spec.bars[1].value, 420.5);
    assert_eq!(spec.bars[2].value, 100.0);
    assert_eq!(spec.labels(), vec!["Income", "Expense", "Saving"]);
}
