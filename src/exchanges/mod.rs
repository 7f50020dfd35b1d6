pub mod bittrex;
pub mod poloniex;

/// Fixed-point rendering for rates and amounts.
///
/// Both supported exchanges reject exponent notation, which Rust's default
/// float formatting produces for small values; eight decimals covers the
/// satoshi resolution they quote in.
pub(crate) fn format_amount(value: f64) -> String {
    format!("{value:.8}")
}

#[cfg(test)]
mod tests {
    use super::format_amount;

    #[test]
    fn format_amount_avoids_exponent_notation() {
        assert_eq!(format_amount(0.000_001), "0.00000100");
        assert_eq!(format_amount(0.072), "0.07200000");
        assert_eq!(format_amount(1.0), "1.00000000");
    }
}
