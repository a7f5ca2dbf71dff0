//! Value types returned by the analyzer.

use std::fmt;

/// Highest score a password can reach (one point per criterion).
pub const MAX_SCORE: u8 = 6;

/// A single binary strength check.
///
/// Variants are declared in feedback priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Length,
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
    NotCommon,
}

impl Criterion {
    /// All criteria, in the order feedback is reported.
    pub const ALL: [Criterion; 6] = [
        Criterion::Length,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Numbers,
        Criterion::Symbols,
        Criterion::NotCommon,
    ];

    /// Stable identifier, e.g. for keyed rendering in a checklist.
    pub fn name(&self) -> &'static str {
        match self {
            Criterion::Length => "length",
            Criterion::Uppercase => "uppercase",
            Criterion::Lowercase => "lowercase",
            Criterion::Numbers => "numbers",
            Criterion::Symbols => "symbols",
            Criterion::NotCommon => "notCommon",
        }
    }

    /// Checklist label shown next to the pass/fail mark.
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Length => "At least 12 characters",
            Criterion::Uppercase => "Uppercase letters",
            Criterion::Lowercase => "Lowercase letters",
            Criterion::Numbers => "Numbers",
            Criterion::Symbols => "Special characters",
            Criterion::NotCommon => "Not a common password",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of every criterion for one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Criteria {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub not_common: bool,
}

impl Criteria {
    pub fn get(&self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::Length => self.length,
            Criterion::Uppercase => self.uppercase,
            Criterion::Lowercase => self.lowercase,
            Criterion::Numbers => self.numbers,
            Criterion::Symbols => self.symbols,
            Criterion::NotCommon => self.not_common,
        }
    }

    pub(crate) fn set(&mut self, criterion: Criterion, met: bool) {
        let slot = match criterion {
            Criterion::Length => &mut self.length,
            Criterion::Uppercase => &mut self.uppercase,
            Criterion::Lowercase => &mut self.lowercase,
            Criterion::Numbers => &mut self.numbers,
            Criterion::Symbols => &mut self.symbols,
            Criterion::NotCommon => &mut self.not_common,
        };
        *slot = met;
    }

    /// Iterates `(criterion, met)` pairs in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, bool)> + '_ {
        Criterion::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Number of satisfied criteria.
    pub fn count_met(&self) -> u8 {
        self.iter().filter(|(_, met)| *met).count() as u8
    }
}

/// Discrete strength classification derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Excellent,
}

impl StrengthTier {
    /// Maps a 0-6 score onto a tier. Scores above the maximum saturate.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthTier::VeryWeak,
            3 => StrengthTier::Weak,
            4 => StrengthTier::Fair,
            5 => StrengthTier::Good,
            _ => StrengthTier::Excellent,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "Very Weak",
            StrengthTier::Weak => "Weak",
            StrengthTier::Fair => "Fair",
            StrengthTier::Good => "Good",
            StrengthTier::Excellent => "Excellent",
        }
    }

    /// Colour hint for meters and badges.
    pub fn color(&self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "red",
            StrengthTier::Weak => "orange",
            StrengthTier::Fair => "yellow",
            StrengthTier::Good => "lime",
            StrengthTier::Excellent => "green",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Full analysis of one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthResult {
    /// Count of satisfied criteria, 0-6.
    pub score: u8,
    pub tier: StrengthTier,
    pub criteria: Criteria,
    /// One suggestion per unmet criterion, or a single affirmative
    /// message when every criterion is met.
    pub feedback: Vec<String>,
}

impl StrengthResult {
    /// Meter fill, 0-100.
    pub fn percent(&self) -> u8 {
        (u16::from(self.score.min(MAX_SCORE)) * 100 / u16::from(MAX_SCORE)) as u8
    }

    pub fn is_max(&self) -> bool {
        self.score == MAX_SCORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_breakpoints() {
        assert_eq!(StrengthTier::from_score(0), StrengthTier::VeryWeak);
        assert_eq!(StrengthTier::from_score(2), StrengthTier::VeryWeak);
        assert_eq!(StrengthTier::from_score(3), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_score(4), StrengthTier::Fair);
        assert_eq!(StrengthTier::from_score(5), StrengthTier::Good);
        assert_eq!(StrengthTier::from_score(6), StrengthTier::Excellent);
        assert_eq!(StrengthTier::from_score(200), StrengthTier::Excellent);
    }

    #[test]
    fn test_tier_ordering() {
        assert!(StrengthTier::VeryWeak < StrengthTier::Weak);
        assert!(StrengthTier::Good < StrengthTier::Excellent);
    }

    #[test]
    fn test_tier_labels_and_colors() {
        let expected = [
            (StrengthTier::VeryWeak, "Very Weak", "red"),
            (StrengthTier::Weak, "Weak", "orange"),
            (StrengthTier::Fair, "Fair", "yellow"),
            (StrengthTier::Good, "Good", "lime"),
            (StrengthTier::Excellent, "Excellent", "green"),
        ];

        for (tier, label, color) in expected {
            assert_eq!(tier.label(), label);
            assert_eq!(tier.color(), color);
            assert_eq!(tier.to_string(), tier.label());
        }
    }

    #[test]
    fn test_criterion_labels() {
        let labels: Vec<_> = Criterion::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            [
                "At least 12 characters",
                "Uppercase letters",
                "Lowercase letters",
                "Numbers",
                "Special characters",
                "Not a common password",
            ]
        );

        for criterion in Criterion::ALL {
            assert_eq!(criterion.to_string(), criterion.name());
        }
    }

    #[test]
    fn test_criteria_set_and_count() {
        let mut criteria = Criteria::default();
        assert_eq!(criteria.count_met(), 0);

        criteria.set(Criterion::Symbols, true);
        criteria.set(Criterion::NotCommon, true);
        assert!(criteria.get(Criterion::Symbols));
        assert!(!criteria.get(Criterion::Length));
        assert_eq!(criteria.count_met(), 2);
    }

    #[test]
    fn test_criteria_iter_follows_priority_order() {
        let names: Vec<_> = Criteria::default().iter().map(|(c, _)| c.name()).collect();
        assert_eq!(
            names,
            ["length", "uppercase", "lowercase", "numbers", "symbols", "notCommon"]
        );
    }

    #[test]
    fn test_percent() {
        let result = StrengthResult {
            score: 3,
            tier: StrengthTier::Weak,
            criteria: Criteria::default(),
            feedback: Vec::new(),
        };
        assert_eq!(result.percent(), 50);
        assert!(!result.is_max());
    }
}
