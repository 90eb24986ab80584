//! Formatting utilities used for CLI and export outputs.

use super::colors::{RESET, color_for_wage};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `109440` → `109'440` (Swiss thousands separator).
pub fn format_money(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\'');
        }
        out.push(c);
    }

    if amount < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

pub fn colorize_wage(amount: i64, currency: &str) -> String {
    format!(
        "{}{} {}{}",
        color_for_wage(amount),
        format_money(amount),
        currency,
        RESET
    )
}
