use crate::analyzer::FeatureCounts;
use serde::{Serialize, Serializer};
use std::fmt;

/// Classification label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Spanish,
    English,
    /// Code-switched text: neither language clears the threshold.
    Mixed,
    Undetermined,
}

impl Language {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Language::Spanish => "spanish",
            Language::English => "english",
            Language::Mixed => "mixed",
            Language::Undetermined => "undetermined",
        }
    }

    /// Console label shown by the command-line front end.
    pub const fn label(&self) -> &'static str {
        match self {
            Language::Spanish => "🇪🇸 Español",
            Language::English => "🇺🇸 Inglés",
            Language::Mixed => "Mixto/Spanglish",
            Language::Undetermined => "Indeterminado",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a result is [`Language::Undetermined`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    TooShort,
    NoPatterns,
}

impl Reason {
    pub const fn message(&self) -> &'static str {
        match self {
            Reason::TooShort => "text too short for analysis",
            Reason::NoPatterns => "no recognizable patterns found",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for Reason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Weighted score totals before normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct WeightedScores {
    pub spanish: f64,
    pub english: f64,
}

impl WeightedScores {
    #[inline]
    pub fn total(&self) -> f64 {
        self.spanish + self.english
    }

    /// `(spanish%, english%)`, unrounded; `None` when there is no evidence.
    pub fn percentages(&self) -> Option<(f64, f64)> {
        let total = self.total();
        if total <= 0.0 {
            return None;
        }
        Some((100.0 * self.spanish / total, 100.0 * self.english / total))
    }
}

/// Diagnostic payload: raw analyzer output plus the weighted totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Details {
    #[serde(flatten)]
    pub features: FeatureCounts,
    pub scores: WeightedScores,
}

/// Outcome of classifying one text.
///
/// `confidence` means dominance for Spanish or English, but for
/// [`Language::Mixed`] it is the gap between the two shares: an even
/// 50/50 split yields 0, the most clearly mixed case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection {
    pub language: Language,
    pub confidence: u8,
    pub spanish: u8,
    pub english: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Details>,
}

impl Detection {
    pub fn undetermined(reason: Reason) -> Self {
        Self {
            language: Language::Undetermined,
            confidence: 0,
            spanish: 0,
            english: 0,
            reason: Some(reason),
            details: None,
        }
    }

    #[inline]
    pub fn is_undetermined(&self) -> bool {
        self.language == Language::Undetermined
    }

    /// Unrounded `(spanish%, english%)`, available when details were kept
    /// and there was evidence to weigh.
    pub fn percentages(&self) -> Option<(f64, f64)> {
        self.details.and_then(|d| d.scores.percentages())
    }
}

/// Round a percentage to the nearest integer, halves away from zero.
#[inline]
pub(crate) fn round_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
