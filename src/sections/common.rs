//! Common-password section - checks the denylist.

use super::SectionResult;
use crate::denylist::Denylist;

/// Checks if the password is on the denylist of common passwords.
///
/// # Returns
/// - `Some(suggestion)` if password is denied
/// - `None` if password is not listed
pub fn common_section(password: &str, denylist: &Denylist) -> SectionResult {
    if denylist.contains(password) {
        return Some("Avoid common passwords");
    }
    None
}
