//! Length section - checks password minimum length.

use super::SectionResult;

pub const MIN_LENGTH: usize = 12;

/// Checks if the password has at least [`MIN_LENGTH`] characters.
///
/// Counts `char`s, so multi-byte characters count once.
pub fn length_section(password: &str) -> SectionResult {
    if password.chars().count() < MIN_LENGTH {
        return Some("Use at least 12 characters");
    }
    None
}
