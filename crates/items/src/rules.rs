//! Per-field rules for items.
//!
//! Every rule is a pure function over an already-trimmed value and reports at
//! most one [`Violation`]. Full validation and partial updates share them, so a
//! field is judged the same way on every path.

use chrono::NaiveDate;
use thiserror::Error;

use crate::category::{Category, is_valid_category};

/// Maximum length of `name`, in characters.
pub const NAME_MAX_CHARS: usize = 100;

/// Maximum length of `brand`, in characters.
pub const BRAND_MAX_CHARS: usize = 100;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single broken field rule.
///
/// The `Display` text is part of the external contract; consumers match on it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    #[error("name is required")]
    NameRequired,
    #[error("name must be 100 characters or less")]
    NameTooLong,
    #[error("category is required")]
    CategoryRequired,
    #[error("category must be one of: {}", Category::joined_labels())]
    CategoryNotListed,
    #[error("brand is required")]
    BrandRequired,
    #[error("brand must be 100 characters or less")]
    BrandTooLong,
    #[error("purchase_price must be 0 or greater")]
    NegativePrice,
    #[error("purchase_date is required")]
    PurchaseDateRequired,
    #[error("purchase_date must be in YYYY-MM-DD format")]
    MalformedPurchaseDate,
    #[error("updated_at must not be earlier than created_at")]
    UpdatedBeforeCreated,
}

fn exceeds(value: &str, max_chars: usize) -> bool {
    value.chars().count() > max_chars
}

pub fn validate_name(name: &str) -> Result<(), Violation> {
    if name.is_empty() {
        Err(Violation::NameRequired)
    } else if exceeds(name, NAME_MAX_CHARS) {
        Err(Violation::NameTooLong)
    } else {
        Ok(())
    }
}

pub fn validate_category(category: &str) -> Result<(), Violation> {
    if category.is_empty() {
        Err(Violation::CategoryRequired)
    } else if !is_valid_category(category) {
        Err(Violation::CategoryNotListed)
    } else {
        Ok(())
    }
}

pub fn validate_brand(brand: &str) -> Result<(), Violation> {
    if brand.is_empty() {
        Err(Violation::BrandRequired)
    } else if exceeds(brand, BRAND_MAX_CHARS) {
        Err(Violation::BrandTooLong)
    } else {
        Ok(())
    }
}

pub fn validate_purchase_price(price: i64) -> Result<(), Violation> {
    if price < 0 {
        Err(Violation::NegativePrice)
    } else {
        Ok(())
    }
}

pub fn validate_purchase_date(date: &str) -> Result<(), Violation> {
    if date.is_empty() {
        Err(Violation::PurchaseDateRequired)
    } else if !is_valid_date_format(date) {
        Err(Violation::MalformedPurchaseDate)
    } else {
        Ok(())
    }
}

/// Parses a strict `YYYY-MM-DD` date.
///
/// chrono accepts single-digit months and days and signed years for `%Y-%m-%d`,
/// so the shape is checked first: ten bytes, dashes at 4 and 7, digits elsewhere.
pub fn parse_purchase_date(date: &str) -> Option<NaiveDate> {
    let bytes = date.as_bytes();
    if bytes.len() != 10 {
        return None;
    }
    let well_formed = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}

/// Whether `date` is a real calendar date written as `YYYY-MM-DD`.
pub fn is_valid_date_format(date: &str) -> bool {
    parse_purchase_date(date).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_format_cases() {
        let cases = [
            ("2023-01-15", true),
            ("2023-12-31", true),
            ("2024-02-29", true),
            ("2000-02-29", true),
            ("2023-02-29", false),
            ("1900-02-29", false),
            ("2023-02-30", false),
            ("2023-13-01", false),
            ("2023-00-10", false),
            ("2023-01-00", false),
            ("2023/01/15", false),
            ("2023-1-15", false),
            ("2023-01-5", false),
            ("15-01-2023", false),
            ("+2023-01-1", false),
            ("２０２３-01-15", false),
            ("2023-01-15T00:00:00", false),
            ("invalid", false),
            ("", false),
        ];
        for (input, expected) in cases {
            assert_eq!(is_valid_date_format(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn parsed_date_matches_components() {
        let date = parse_purchase_date("2024-02-29").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn name_rule_counts_characters_not_bytes() {
        // 100 three-byte characters are within the limit.
        let hundred = "時".repeat(100);
        assert_eq!(validate_name(&hundred), Ok(()));
        assert_eq!(
            validate_name(&"時".repeat(101)),
            Err(Violation::NameTooLong)
        );
        assert_eq!(validate_name(""), Err(Violation::NameRequired));
    }

    #[test]
    fn brand_rule_boundaries() {
        assert_eq!(validate_brand(&"a".repeat(100)), Ok(()));
        assert_eq!(validate_brand(&"a".repeat(101)), Err(Violation::BrandTooLong));
        assert_eq!(validate_brand(""), Err(Violation::BrandRequired));
    }

    #[test]
    fn price_rule_allows_zero() {
        assert_eq!(validate_purchase_price(0), Ok(()));
        assert_eq!(validate_purchase_price(1_500_000), Ok(()));
        assert_eq!(validate_purchase_price(-1), Err(Violation::NegativePrice));
    }

    #[test]
    fn empty_values_only_report_required() {
        assert_eq!(validate_category(""), Err(Violation::CategoryRequired));
        assert_eq!(
            validate_purchase_date(""),
            Err(Violation::PurchaseDateRequired)
        );
    }

    #[test]
    fn violation_messages_are_stable() {
        assert_eq!(
            Violation::CategoryNotListed.to_string(),
            "category must be one of: 時計, バッグ, ジュエリー, 靴, その他"
        );
        assert_eq!(
            Violation::MalformedPurchaseDate.to_string(),
            "purchase_date must be in YYYY-MM-DD format"
        );
        assert_eq!(
            Violation::NegativePrice.to_string(),
            "purchase_price must be 0 or greater"
        );
    }
}
