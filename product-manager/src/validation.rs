//! Parse-and-validate boundary between the raw text draft and a typed
//! product.
//!
//! Checks run in a fixed order and stop at the first failure:
//! product code, intake date, quantity. Price is parsed but never rejected.

use std::sync::LazyLock;

use regex::Regex;
use time::{macros::format_description, Date};

use crate::{
    error::ValidationError,
    models::product::{Category, CreateProductRequest},
};

// ASCII digits only; `\d` would also accept other Unicode decimal digits.
static PRODUCT_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^PROD-[0-9]{4}$").unwrap());

// Date input value: no sign, four-digit year, two-digit month and day.
static INPUT_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// A draft that passed every check, with typed fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProduct {
    pub code: String,
    pub name: String,
    pub category: Category,
    pub quantity: i64,
    pub price: f64,
    pub intake_date: Date,
}

pub fn validate_draft(
    draft: &CreateProductRequest,
    today: Date,
) -> Result<ValidatedProduct, ValidationError> {
    check_code(&draft.code)?;
    let intake_date = check_intake_date(&draft.intake_date, today)?;
    let quantity = check_quantity(&draft.quantity)?;

    Ok(ValidatedProduct {
        code: draft.code.clone(),
        name: draft.name.clone(),
        category: draft.category,
        quantity,
        price: parse_price(&draft.price),
        intake_date,
    })
}

/// The code is matched as typed, without trimming.
pub fn check_code(code: &str) -> Result<(), ValidationError> {
    if PRODUCT_CODE_RE.is_match(code) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCodeFormat)
    }
}

/// Unparseable dates are reported as `FutureIntakeDate` as well: the check
/// is "a real date no later than today".
pub fn check_intake_date(raw: &str, today: Date) -> Result<Date, ValidationError> {
    let raw = raw.trim();
    if !INPUT_DATE_RE.is_match(raw) {
        return Err(ValidationError::FutureIntakeDate);
    }
    let date = Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .map_err(|_| ValidationError::FutureIntakeDate)?;
    if date > today {
        return Err(ValidationError::FutureIntakeDate);
    }
    Ok(date)
}

pub fn check_quantity(raw: &str) -> Result<i64, ValidationError> {
    match raw.trim().parse::<i64>() {
        Ok(quantity) if quantity > 0 => Ok(quantity),
        _ => Err(ValidationError::InvalidQuantity),
    }
}

/// Lenient: anything that does not parse becomes NaN and is stored as is.
pub fn parse_price(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or_else(|_| {
        tracing::warn!("Price {:?} is not a number, storing NaN", raw);
        f64::NAN
    })
}

/// `DD/MM/YYYY`
pub fn display_date(date: Date) -> String {
    format!(
        "{:02}/{:02}/{:04}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn code_requires_exactly_four_ascii_digits() {
        assert!(check_code("PROD-0001").is_ok());
        assert!(check_code("PROD-12").is_err());
        assert!(check_code("PROD-12345").is_err());
        assert!(check_code("XXXX-1234").is_err());
        assert!(check_code("prod-1234").is_err());
        assert!(check_code(" PROD-1234").is_err());
        assert!(check_code("PROD-١٢٣٤").is_err());
    }

    #[test]
    fn intake_date_boundaries() {
        let today = date!(2024 - 06 - 15);
        assert_eq!(check_intake_date("2024-06-15", today), Ok(today));
        assert_eq!(check_intake_date("2024-01-01", today), Ok(date!(2024 - 01 - 01)));
        assert_eq!(
            check_intake_date("2024-06-16", today),
            Err(ValidationError::FutureIntakeDate)
        );
        assert_eq!(
            check_intake_date("2024-02-30", today),
            Err(ValidationError::FutureIntakeDate)
        );
        assert_eq!(check_intake_date("", today), Err(ValidationError::FutureIntakeDate));
    }

    #[test]
    fn intake_date_accepts_only_date_input_shape() {
        let today = date!(2024 - 06 - 15);
        for raw in ["+2024-01-01", "-2024-01-01", "2024-1-01", "02024-01-01", "01/01/2024"] {
            assert_eq!(
                check_intake_date(raw, today),
                Err(ValidationError::FutureIntakeDate),
                "{raw}"
            );
        }
        assert_eq!(check_intake_date(" 2024-01-01 ", today), Ok(date!(2024 - 01 - 01)));
    }

    #[test]
    fn quantity_must_be_positive_integer() {
        assert_eq!(check_quantity("1"), Ok(1));
        assert_eq!(check_quantity(" 42 "), Ok(42));
        for bad in ["0", "-5", "abc", "1.5", ""] {
            assert_eq!(check_quantity(bad), Err(ValidationError::InvalidQuantity), "{bad}");
        }
    }

    #[test]
    fn price_is_permissive() {
        assert_eq!(parse_price("5.5"), 5.5);
        assert_eq!(parse_price("-3"), -3.0);
        assert!(parse_price("n/a").is_nan());
    }

    #[test]
    fn display_date_pads_day_and_month() {
        assert_eq!(display_date(date!(2024 - 01 - 01)), "01/01/2024");
        assert_eq!(display_date(date!(2023 - 12 - 31)), "31/12/2023");
    }
}
