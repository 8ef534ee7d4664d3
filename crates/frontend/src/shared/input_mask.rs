//! Input masking for the national-ID field.

use contracts::domain::customer::validation::NATIONAL_ID_LEN;

/// Reduce raw input to the digits of a national ID (CPF), dropping
/// punctuation and capping at the CPF length.
///
/// # Example
/// ```rust
/// # use frontend::shared::input_mask::mask_national_id;
/// assert_eq!(mask_national_id("123.456.789-01"), "12345678901");
/// ```
pub fn mask_national_id(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(NATIONAL_ID_LEN)
        .collect()
}
