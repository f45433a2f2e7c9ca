//! Money formatting for tables, cards, and goal progress.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

use numfmt::{Formatter, Precision};

/// Display symbol for the currency codes the app offers. Unknown
/// codes fall back to the code itself as a prefix.
pub fn symbol_for(currency: &str) -> &str {
    match currency {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "PLN" => "zł",
        other => other,
    }
}

/// Format an amount with its currency symbol, thousands separators,
/// and exactly two decimals.
pub fn format_amount(amount: f64, currency: &str) -> String {
    let symbol = symbol_for(currency);

    // Zero is hardcoded: numfmt renders it as a bare "0".
    if amount == 0.0 {
        return format!("{symbol}0.00");
    }

    let (prefix, value) = if amount < 0.0 {
        (format!("-{symbol}"), amount.abs())
    } else {
        (symbol.to_owned(), amount)
    };

    let Ok(formatter) = Formatter::currency(&prefix) else {
        return format!("{prefix}{value:.2}");
    };
    let mut formatted = formatter.precision(Precision::Decimals(2)).fmt_string(value);

    // numfmt omits the last trailing zero ("12.30" comes back as
    // "12.3"), so restore it.
    if formatted.len() >= 3 && formatted.as_bytes()[formatted.len() - 3] != b'.' {
        formatted = format!("{formatted}0");
    }
    formatted
}
