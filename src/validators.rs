//! Input validation helpers shared by the GUI forms and the CLI.
//!
//! Forms keep every field as a raw string until the user commits, so each
//! tool funnels its fields through these parsers before touching the core
//! math. Errors are user-facing strings, surfaced as notification banners.

/// Parses a decimal number from a form field.
///
/// # Errors
///
/// Returns `Err` if the field is empty or not a finite number.
pub fn parse_number(field: &str, input: &str) -> Result<f64, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("Please enter {field}"));
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("{field} must be a valid number")),
    }
}

/// Parses a number that must be strictly greater than zero.
///
/// # Errors
///
/// Returns `Err` if the field is empty, non-numeric, or not positive.
pub fn parse_positive(field: &str, input: &str) -> Result<f64, String> {
    let value = parse_number(field, input)?;
    if value <= 0.0 {
        return Err(format!("{field} must be greater than zero"));
    }
    Ok(value)
}

/// Parses a number that must be zero or greater.
///
/// # Errors
///
/// Returns `Err` if the field is empty, non-numeric, or negative.
pub fn parse_non_negative(field: &str, input: &str) -> Result<f64, String> {
    let value = parse_number(field, input)?;
    if value < 0.0 {
        return Err(format!("{field} cannot be negative"));
    }
    Ok(value)
}

/// Parses a whole number within an inclusive range.
///
/// # Errors
///
/// Returns `Err` if the field is empty, not an integer, or out of range.
pub fn parse_integer_in_range(
    field: &str,
    input: &str,
    range: std::ops::RangeInclusive<u32>,
) -> Result<u32, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("Please enter {field}"));
    }
    let value: u32 = trimmed
        .parse()
        .map_err(|_| format!("{field} must be a whole number"))?;
    if !range.contains(&value) {
        return Err(format!(
            "{field} must be between {} and {}",
            range.start(),
            range.end()
        ));
    }
    Ok(value)
}

/// Parses a calendar date in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns `Err` if the field is empty or not a valid date.
pub fn parse_date(field: &str, input: &str) -> Result<chrono::NaiveDate, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("Please enter {field}"));
    }
    chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| format!("{field} must be a date in YYYY-MM-DD form"))
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_parse_number_round_trips(value in -1e12f64..1e12) {
            let parsed = parse_number("x", &value.to_string()).unwrap();
            prop_assert!((parsed - value).abs() <= value.abs() * 1e-12);
        }

        #[test]
        fn test_parse_positive_sign_invariant(value in any::<f64>()) {
            let result = parse_positive("x", &value.to_string());
            if value.is_finite() && value > 0.0 {
                prop_assert!(result.is_ok());
            } else {
                prop_assert!(result.is_err());
            }
        }

        #[test]
        fn test_parse_integer_range_containment(value in 0u32..1000, lo in 0u32..500, span in 0u32..500) {
            let range = lo..=(lo + span);
            let result = parse_integer_in_range("x", &value.to_string(), range.clone());
            prop_assert_eq!(result.is_ok(), range.contains(&value));
        }
    }
}
