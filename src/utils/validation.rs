//! Centralized validation and helper functions.

use thiserror::Error;

/// Number of separators in an `R,G,B` color
pub const RGB_SEPARATOR_COUNT: usize = 2;

/// Why an `itemRgb` value was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidColorFormat {
    #[error("expected {RGB_SEPARATOR_COUNT} commas in color, found {0}")]
    WrongSeparatorCount(usize),

    #[error("color contains non-numeric components")]
    NonNumeric,
}

/// Validate that a string looks like an `R,G,B` color triplet.
///
/// The string must contain exactly two commas and, once they are removed, consist
/// solely of ASCII digits. Component ranges are not checked and color names are
/// rejected.
///
/// # Examples
///
/// ```
/// use circos_bands::utils::validation::{validate_rgb_triplet, InvalidColorFormat};
///
/// assert!(validate_rgb_triplet("255,0,0").is_ok());
/// assert_eq!(validate_rgb_triplet("red"), Err(InvalidColorFormat::WrongSeparatorCount(0)));
/// assert_eq!(validate_rgb_triplet("a,b,c"), Err(InvalidColorFormat::NonNumeric));
/// ```
///
/// # Errors
///
/// Returns `InvalidColorFormat::WrongSeparatorCount` if the comma count is not two,
/// or `InvalidColorFormat::NonNumeric` if anything other than digits remains.
pub fn validate_rgb_triplet(color: &str) -> Result<(), InvalidColorFormat> {
    let commas = color.matches(',').count();
    if commas != RGB_SEPARATOR_COUNT {
        return Err(InvalidColorFormat::WrongSeparatorCount(commas));
    }

    // Digits only, so no sign, decimal point or exponent; length is unbounded
    let mut digits = color.chars().filter(|&c| c != ',').peekable();
    if digits.peek().is_none() || !digits.all(|c| c.is_ascii_digit()) {
        return Err(InvalidColorFormat::NonNumeric);
    }

    Ok(())
}

#[must_use]
pub fn is_valid_rgb_triplet(color: &str) -> bool {
    validate_rgb_triplet(color).is_ok()
}
