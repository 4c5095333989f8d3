use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};

/// "9999.00 USD"
pub fn format_money(amount: Decimal, currency: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2} {}", rounded, currency)
}

/// Date part only, e.g. "2025-03-14"
pub fn format_date(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%d").to_string()
}

pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// First 8 characters of a transaction reference, for cards
pub fn short_reference(reference: &str) -> String {
    reference.chars().take(8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_money_always_two_decimals() {
        assert_eq!(format_money(Decimal::from(9999), "USD"), "9999.00 USD");
        assert_eq!(format_money(Decimal::from_str("12.5").unwrap(), "EUR"), "12.50 EUR");
        assert_eq!(format_money(Decimal::from_str("0.999").unwrap(), "GBP"), "1.00 GBP");
    }

    #[test]
    fn test_dates() {
        let value = NaiveDateTime::parse_from_str("2025-03-14 09:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(format_date(&value), "2025-03-14");
        assert_eq!(format_datetime(&value), "2025-03-14 09:30");
    }

    #[test]
    fn test_short_reference() {
        assert_eq!(short_reference("TXN-1A2B3C4D5E"), "TXN-1A2B");
        assert_eq!(short_reference("abc"), "abc");
    }
}
