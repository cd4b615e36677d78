use super::SENTINEL;

/// Formats a dinar amount with Serbian grouping: `.` between thousands, `,` before
/// exactly two decimals. Cents round half-up. Zero, missing and non-finite
/// amounts become the sentinel.
pub fn format_rsd(amount: Option<f64>) -> String {
    let Some(amount) = amount.filter(|value| value.is_finite() && *value != 0.0) else {
        return SENTINEL.to_string();
    };

    let negative = amount < 0.0;
    // Absorbs binary representation error on exact half cents.
    let cents = (amount.abs() * 100.0 + 1e-7).round() as u128;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{fraction:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_periods() {
        assert_eq!(format_rsd(Some(55000.0)), "55.000,00");
        assert_eq!(format_rsd(Some(1_234_567.891)), "1.234.567,89");
        assert_eq!(format_rsd(Some(999.5)), "999,50");
        assert_eq!(format_rsd(Some(100_000.0)), "100.000,00");
    }

    #[test]
    fn rounds_cents_half_up() {
        assert_eq!(format_rsd(Some(0.125)), "0,13");
        assert_eq!(format_rsd(Some(1999.995)), "2.000,00");
    }

    #[test]
    fn degenerate_amounts_become_the_sentinel() {
        assert_eq!(format_rsd(None), SENTINEL);
        assert_eq!(format_rsd(Some(0.0)), SENTINEL);
        assert_eq!(format_rsd(Some(f64::NAN)), SENTINEL);
        assert_eq!(format_rsd(Some(f64::INFINITY)), SENTINEL);
    }
}
