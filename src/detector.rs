use crate::{
    analyzer::FeatureCounts,
    config::{ConfigError, DetectorConfig, Weights},
    detection::{Details, Detection, Language, Reason, WeightedScores, round_percent},
    unicode::trimmed_len,
};
use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};
use std::{borrow::Cow, sync::LazyLock};

static ICU4X_NFC: LazyLock<ComposingNormalizerBorrowed<'static>> =
    LazyLock::new(ComposingNormalizer::new_nfc);

/// The decision engine: runs the analyzers and turns their counts into a
/// [`Detection`].
///
/// Holds only immutable configuration, so one instance can be shared by any
/// number of threads.
#[derive(Debug, Clone, Default)]
pub struct Detector {
    config: DetectorConfig,
}

impl Detector {
    pub fn builder() -> DetectorBuilder {
        DetectorBuilder::default()
    }

    pub fn new(config: DetectorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Classify `text`. Total over all inputs: edge cases come back as
    /// [`Language::Undetermined`] with a [`Reason`].
    pub fn detect(&self, text: &str) -> Detection {
        if trimmed_len(text) < self.config.min_length {
            log::debug!("input too short for analysis");
            return Detection::undetermined(Reason::TooShort);
        }

        let text = self.prepare(text);
        let features = FeatureCounts::extract(&text);
        log::trace!("features: {features:?}");

        let scores = weigh(&self.config.weights, &features);
        let details = self
            .config
            .include_details
            .then_some(Details { features, scores });
        let Some((spanish, english)) = scores.percentages() else {
            log::debug!("no recognizable patterns in {} bytes", text.len());
            return Detection {
                details,
                ..Detection::undetermined(Reason::NoPatterns)
            };
        };

        let (language, confidence) = self.classify(spanish, english);
        log::debug!(
            "classified as {language} (confidence {confidence:.2}, es {spanish:.2}%, en {english:.2}%)"
        );

        Detection {
            language,
            confidence: round_percent(confidence),
            spanish: round_percent(spanish),
            english: round_percent(english),
            reason: None,
            details,
        }
    }

    /// Threshold rule over normalized shares. Returns the label and its
    /// unrounded confidence.
    ///
    /// The comparison is strict, so a share of exactly the threshold is
    /// `Mixed`. For `Mixed` the confidence is `|spanish - english|`, which
    /// is lowest for the most even split.
    pub fn classify(&self, spanish: f64, english: f64) -> (Language, f64) {
        let threshold = self.config.threshold;
        if spanish > threshold {
            (Language::Spanish, spanish)
        } else if english > threshold {
            (Language::English, english)
        } else {
            (Language::Mixed, (spanish - english).abs())
        }
    }

    fn prepare<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.config.compose && !ICU4X_NFC.is_normalized(text) {
            return ICU4X_NFC.normalize(text);
        }
        Cow::Borrowed(text)
    }
}

/// Apply the linear weights. Character evidence only ever favours Spanish.
pub fn weigh(weights: &Weights, features: &FeatureCounts) -> WeightedScores {
    let spanish = features.spanish_chars as f64 * weights.characters
        + features.stop_words.spanish_count as f64 * weights.stop_words
        + features.bigrams.spanish_score as f64 * weights.bigrams
        + features.endings.spanish_ending_count as f64 * weights.endings;
    let english = features.stop_words.english_count as f64 * weights.stop_words
        + features.bigrams.english_score as f64 * weights.bigrams
        + features.endings.english_ending_count as f64 * weights.endings;
    WeightedScores { spanish, english }
}

#[derive(Debug, Default)]
pub struct DetectorBuilder {
    config: DetectorConfig,
}

impl DetectorBuilder {
    pub fn config(mut self, config: DetectorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.config.min_length = min_length;
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.config.threshold = threshold;
        self
    }

    pub fn weights(mut self, weights: Weights) -> Self {
        self.config.weights = weights;
        self
    }

    pub fn compose(mut self, compose: bool) -> Self {
        self.config.compose = compose;
        self
    }

    pub fn include_details(mut self, include_details: bool) -> Self {
        self.config.include_details = include_details;
        self
    }

    pub fn build(self) -> Result<Detector, ConfigError> {
        Detector::new(self.config)
    }
}
