use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CURRENCY_CODE: Regex =
        Regex::new(r"^[A-Z]{3}$").expect("currency pattern is valid");
}

#[derive(Debug, PartialEq)]
pub enum ValidationError {
    NotFinite(&'static str),
    Negative(&'static str),
    NotPositive(&'static str),
    InvalidCurrency(String),
    InvalidDateRange,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NotFinite(field) => write!(f, "{} must be a finite number", field),
            ValidationError::Negative(field) => write!(f, "{} cannot be negative", field),
            ValidationError::NotPositive(field) => write!(f, "{} must be greater than zero", field),
            ValidationError::InvalidCurrency(code) => {
                write!(f, "Invalid currency code: {}", code)
            }
            ValidationError::InvalidDateRange => {
                write!(f, "checkOutDate must be after checkInDate")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Finite and not below zero
pub fn non_negative(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite(field));
    }
    if value < 0.0 {
        return Err(ValidationError::Negative(field));
    }
    Ok(value)
}

/// Finite and strictly above zero
pub fn positive(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    let value = non_negative(field, value)?;
    if value == 0.0 {
        return Err(ValidationError::NotPositive(field));
    }
    Ok(value)
}

/// ISO 4217 style code: three uppercase ASCII letters
pub fn currency_code(code: &str) -> Result<String, ValidationError> {
    if CURRENCY_CODE.is_match(code) {
        Ok(code.to_string())
    } else {
        Err(ValidationError::InvalidCurrency(code.to_string()))
    }
}
