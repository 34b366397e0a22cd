//! Card brand detection and expiry validation.
//!
//! Brand detection only drives input formatting and the brand icon next to
//! the card number field. It is not a validity check: there is no Luhn
//! digit, no issuer verification, and no payment gateway behind it.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Card brand, classified from the number's leading digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardBrand {
    Visa,
    Mastercard,
    Amex,
}

impl CardBrand {
    /// Classify a card number by prefix, ignoring whitespace.
    ///
    /// `4` is Visa; `51`-`55` and `22`-`27` are Mastercard; `34` and `37`
    /// are Amex. Anything else is unclassified.
    #[must_use]
    pub fn detect(card_number: &str) -> Option<Self> {
        let cleaned: String = card_number.chars().filter(|c| !c.is_whitespace()).collect();

        if cleaned.starts_with('4') {
            return Some(Self::Visa);
        }
        if let Some(prefix) = cleaned.get(..2) {
            if let Ok(pair) = prefix.parse::<u8>() {
                if (51..=55).contains(&pair) || (22..=27).contains(&pair) {
                    return Some(Self::Mastercard);
                }
            }
            if prefix == "34" || prefix == "37" {
                return Some(Self::Amex);
            }
        }
        None
    }

    /// Maximum number of digits for the brand: Amex numbers have 15,
    /// everything else 16.
    #[must_use]
    pub const fn max_digits(self) -> usize {
        match self {
            Self::Amex => 15,
            Self::Visa | Self::Mastercard => 16,
        }
    }

    /// CVV length for the brand: 4 for Amex, 3 otherwise.
    #[must_use]
    pub const fn cvv_digits(self) -> usize {
        match self {
            Self::Amex => 4,
            Self::Visa | Self::Mastercard => 3,
        }
    }

    /// Display name for the brand icon's alt text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
        }
    }
}

/// Why a card number was rejected. Messages are user-facing inline text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardNumberError {
    #[error("El número de tarjeta no puede superar los {0} dígitos")]
    TooLong(usize),
}

/// Why a security code was rejected. Messages are user-facing inline text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CvvError {
    #[error("El código de seguridad debe tener {0} dígitos")]
    WrongLength(usize),
}

/// Validate a card number's digit count against the brand's maximum.
///
/// Returns the detected brand on success. Amex numbers cap at 15 digits,
/// Visa and Mastercard at 16; unclassified numbers cap at 16 as well.
/// Shorter input is fine, it reads as still-typing.
pub fn validate_number(input: &str) -> Result<Option<CardBrand>, CardNumberError> {
    let brand = CardBrand::detect(input);
    let digits = input.chars().filter(char::is_ascii_digit).count();
    let max = brand.map_or(16, CardBrand::max_digits);
    if digits > max {
        return Err(CardNumberError::TooLong(max));
    }
    Ok(brand)
}

/// Validate a security code against the brand's expected length (4 for
/// Amex, 3 otherwise; 3 when the brand is not yet recognizable).
///
/// Shorter numeric input is provisionally valid; too many digits or
/// non-digit characters fail.
pub fn validate_cvv(input: &str, brand: Option<CardBrand>) -> Result<(), CvvError> {
    let expected = brand.map_or(3, CardBrand::cvv_digits);
    if input.len() > expected || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(CvvError::WrongLength(expected));
    }
    Ok(())
}

/// Why an expiry date was rejected. Messages are user-facing inline text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExpiryError {
    #[error("El mes debe estar entre 01 y 12")]
    InvalidMonth,
    #[error("La fecha de vencimiento no puede ser anterior a la fecha actual")]
    Expired,
}

/// Validate an `MM/YY` expiry against `today`.
///
/// Partial input (fewer than 5 characters, or pieces that are not yet two
/// digits) is provisionally valid so the user is never flagged mid-typing.
/// A full date must have a month in `[1, 12]` and a month/year (interpreted
/// as 2000+YY) not strictly before today's.
///
/// `today` is passed in rather than read from the clock so callers and tests
/// control the reference date.
pub fn validate_expiry(input: &str, today: NaiveDate) -> Result<(), ExpiryError> {
    if input.len() < 5 {
        return Ok(());
    }

    let Some((month_part, year_part)) = input.split_once('/') else {
        return Ok(());
    };
    if month_part.len() != 2 || year_part.len() != 2 {
        return Ok(());
    }
    let (Ok(month), Ok(year)) = (month_part.parse::<u32>(), year_part.parse::<i32>()) else {
        return Ok(());
    };

    if !(1..=12).contains(&month) {
        return Err(ExpiryError::InvalidMonth);
    }

    let expiry_year = 2000 + year;
    let (current_year, current_month) = (today.year(), today.month());
    if expiry_year < current_year
        || (expiry_year == current_year && month < current_month)
    {
        return Err(ExpiryError::Expired);
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, 15).unwrap()
    }

    #[test]
    fn test_detect_visa() {
        assert_eq!(CardBrand::detect("4111111111111111"), Some(CardBrand::Visa));
        assert_eq!(CardBrand::detect("4111 1111 1111 1111"), Some(CardBrand::Visa));
    }

    #[test]
    fn test_detect_mastercard_ranges() {
        for prefix in ["51", "55", "22", "27"] {
            let number = format!("{prefix}00000000000000");
            assert_eq!(
                CardBrand::detect(&number),
                Some(CardBrand::Mastercard),
                "prefix {prefix}"
            );
        }
        // Just outside both ranges.
        assert_eq!(CardBrand::detect("5600000000000000"), None);
        assert_eq!(CardBrand::detect("2800000000000000"), None);
    }

    #[test]
    fn test_detect_amex_and_lengths() {
        let brand = CardBrand::detect("371449635398431").unwrap();
        assert_eq!(brand, CardBrand::Amex);
        assert_eq!(brand.max_digits(), 15);
        assert_eq!(brand.cvv_digits(), 4);
        assert_eq!(CardBrand::Visa.max_digits(), 16);
        assert_eq!(CardBrand::Visa.cvv_digits(), 3);
    }

    #[test]
    fn test_detect_unclassified() {
        assert_eq!(CardBrand::detect(""), None);
        assert_eq!(CardBrand::detect("6011000000000000"), None);
        assert_eq!(CardBrand::detect("1"), None);
    }

    #[test]
    fn test_number_length_caps_at_brand_max() {
        // 15 digits is the ceiling for Amex.
        assert_eq!(
            validate_number("371449635398431"),
            Ok(Some(CardBrand::Amex))
        );
        assert_eq!(
            validate_number("3714496353984310"),
            Err(CardNumberError::TooLong(15))
        );
        // Visa and unclassified numbers cap at 16.
        assert_eq!(
            validate_number("4111 1111 1111 1111"),
            Ok(Some(CardBrand::Visa))
        );
        assert_eq!(
            validate_number("41111111111111112"),
            Err(CardNumberError::TooLong(16))
        );
        assert_eq!(validate_number(""), Ok(None));
        assert_eq!(
            validate_number("60110000000000001"),
            Err(CardNumberError::TooLong(16))
        );
    }

    #[test]
    fn test_cvv_length_follows_brand() {
        assert_eq!(validate_cvv("123", Some(CardBrand::Visa)), Ok(()));
        assert_eq!(
            validate_cvv("1234", Some(CardBrand::Visa)),
            Err(CvvError::WrongLength(3))
        );
        assert_eq!(validate_cvv("1234", Some(CardBrand::Amex)), Ok(()));
        assert_eq!(validate_cvv("12", None), Ok(()));
        assert_eq!(validate_cvv("", None), Ok(()));
        assert_eq!(validate_cvv("12a", None), Err(CvvError::WrongLength(3)));
    }

    #[test]
    fn test_expiry_partial_input_passes() {
        let today = date(2025, 6);
        for partial in ["", "0", "01", "01/", "01/2"] {
            assert_eq!(validate_expiry(partial, today), Ok(()), "input {partial:?}");
        }
    }

    #[test]
    fn test_expiry_past_date_fails() {
        let today = date(2025, 6);
        assert_eq!(validate_expiry("01/20", today), Err(ExpiryError::Expired));
        assert_eq!(validate_expiry("05/25", today), Err(ExpiryError::Expired));
    }

    #[test]
    fn test_expiry_current_month_passes() {
        let today = date(2025, 6);
        assert_eq!(validate_expiry("06/25", today), Ok(()));
        assert_eq!(validate_expiry("12/30", today), Ok(()));
    }

    #[test]
    fn test_expiry_month_out_of_range() {
        let today = date(2025, 6);
        assert_eq!(validate_expiry("13/30", today), Err(ExpiryError::InvalidMonth));
        assert_eq!(validate_expiry("00/30", today), Err(ExpiryError::InvalidMonth));
    }

    #[test]
    fn test_expiry_garbage_full_input_is_provisional() {
        // Non-numeric pieces never error, they read as still-typing.
        let today = date(2025, 6);
        assert_eq!(validate_expiry("ab/cd", today), Ok(()));
        assert_eq!(validate_expiry("1/234", today), Ok(()));
    }
}
