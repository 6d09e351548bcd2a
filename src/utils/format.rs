/// Price display formatting.
///
/// Estimates are kept unrounded while the form is being filled; truncation to
/// whole rubles happens only here, at presentation time.
pub fn format_price(price: f64) -> String {
    format!("{}", price.trunc() as i64)
}

/// Price with the currency sign, as shown in cards and tables.
pub fn format_rub(price: f64) -> String {
    format!("{} ₽", format_price(price))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_fractional_estimates() {
        assert_eq!(format_price(4200.96), "4200");
        assert_eq!(format_price(4200.0), "4200");
    }

    #[test]
    fn whole_prices_unchanged() {
        assert_eq!(format_price(3500.0), "3500");
        assert_eq!(format_rub(3500.0), "3500 ₽");
    }
}
