//! Password strength analyzer - runs every section and builds the result.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::denylist::Denylist;
use crate::sections::{
    SectionResult, common_section, length_section, lowercase_section, number_section,
    symbol_section, uppercase_section,
};
use crate::types::{Criteria, Criterion, MAX_SCORE, StrengthResult, StrengthTier};

/// Message shown instead of suggestions when every criterion is met.
pub const PERFECT_MESSAGE: &str = "Perfect! This is a very strong password.";

/// Delay before [`PasswordAnalyzer::analyze_tx`] evaluates, so that fast
/// typing cancels stale requests.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Analyzes `password` against the built-in denylist.
///
/// Total over all inputs: empty, unicode or very long strings all
/// produce a valid result.
pub fn analyze(password: &str) -> StrengthResult {
    analyze_with(password, Denylist::builtin_ref())
}

/// Secret-typed variant of [`analyze`].
pub fn analyze_secret(password: &SecretString) -> StrengthResult {
    analyze(password.expose_secret())
}

fn run_section(criterion: Criterion, password: &str, denylist: &Denylist) -> SectionResult {
    match criterion {
        Criterion::Length => length_section(password),
        Criterion::Uppercase => uppercase_section(password),
        Criterion::Lowercase => lowercase_section(password),
        Criterion::Numbers => number_section(password),
        Criterion::Symbols => symbol_section(password),
        Criterion::NotCommon => common_section(password, denylist),
    }
}

fn analyze_with(password: &str, denylist: &Denylist) -> StrengthResult {
    let mut criteria = Criteria::default();
    let mut feedback = Vec::new();

    // Criterion::ALL is already in feedback priority order
    for criterion in Criterion::ALL {
        match run_section(criterion, password, denylist) {
            Some(suggestion) => feedback.push(suggestion.to_string()),
            None => criteria.set(criterion, true),
        }
    }

    let score = criteria.count_met();
    if score == MAX_SCORE {
        feedback.push(PERFECT_MESSAGE.to_string());
    }

    StrengthResult {
        score,
        tier: StrengthTier::from_score(score),
        criteria,
        feedback,
    }
}

/// Analyzer bound to a specific denylist.
#[derive(Debug, Clone, Default)]
pub struct PasswordAnalyzer {
    denylist: Denylist,
}

impl PasswordAnalyzer {
    pub fn new(denylist: Denylist) -> Self {
        Self { denylist }
    }

    pub fn denylist(&self) -> &Denylist {
        &self.denylist
    }

    pub fn analyze(&self, password: &str) -> StrengthResult {
        analyze_with(password, &self.denylist)
    }

    pub fn analyze_secret(&self, password: &SecretString) -> StrengthResult {
        self.analyze(password.expose_secret())
    }

    /// Waits [`DEBOUNCE`], then sends the analysis through `tx`.
    ///
    /// Nothing is sent if `token` is cancelled before the delay elapses.
    #[cfg(feature = "async")]
    pub async fn analyze_tx(
        &self,
        password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<StrengthResult>,
    ) {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::debug!("analysis cancelled before start");
                return;
            }
            _ = tokio::time::sleep(DEBOUNCE) => {}
        }

        let result = self.analyze_secret(password);

        #[cfg(feature = "tracing")]
        tracing::debug!("analysis finished: score {}, tier {}", result.score, result.tier);

        if let Err(_e) = tx.send(result).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password analysis result: {}", _e);
        }
    }
}
