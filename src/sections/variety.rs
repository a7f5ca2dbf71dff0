//! Character variety sections - one check per character class.

use super::SectionResult;

pub fn uppercase_section(password: &str) -> SectionResult {
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Add uppercase letters (A-Z)");
    }
    None
}

pub fn lowercase_section(password: &str) -> SectionResult {
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Add lowercase letters (a-z)");
    }
    None
}

pub fn number_section(password: &str) -> SectionResult {
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Include numbers (0-9)");
    }
    None
}

/// Anything outside `A-Z`, `a-z`, `0-9` counts as a symbol, including
/// whitespace and non-ASCII letters.
pub fn symbol_section(password: &str) -> SectionResult {
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        return Some("Add special characters (!@#$%...)");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variety_section_missing_uppercase() {
        let result = uppercase_section("lowercase123!");
        assert!(result.is_some_and(|r| r.contains("uppercase")));
        assert_eq!(uppercase_section("Upper"), None);
    }

    #[test]
    fn test_variety_section_missing_lowercase() {
        let result = lowercase_section("UPPERCASE123!");
        assert!(result.is_some_and(|r| r.contains("lowercase")));
        assert_eq!(lowercase_section("lOWER"), None);
    }

    #[test]
    fn test_variety_section_missing_numbers() {
        let result = number_section("NoNumbers!");
        assert!(result.is_some_and(|r| r.contains("numbers")));
        assert_eq!(number_section("n0"), None);
    }

    #[test]
    fn test_variety_section_missing_special() {
        let result = symbol_section("NoSpecial123");
        assert!(result.is_some_and(|r| r.contains("special")));
        assert_eq!(symbol_section("a#"), None);
    }

    #[test]
    fn test_variety_section_non_ascii() {
        // Non-ASCII letters are neither upper nor lower, but count as symbols
        assert!(uppercase_section("ÄÖÜ").is_some());
        assert!(lowercase_section("äöü").is_some());
        assert_eq!(symbol_section("äöü"), None);
        assert_eq!(symbol_section("two words"), None);
    }

    #[test]
    fn test_variety_section_all_categories() {
        let pwd = "HasAll123!@#";
        assert_eq!(uppercase_section(pwd), None);
        assert_eq!(lowercase_section(pwd), None);
        assert_eq!(number_section(pwd), None);
        assert_eq!(symbol_section(pwd), None);
    }
}
