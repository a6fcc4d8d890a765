pub mod analyzer;
pub mod cli;
pub mod config;
pub mod detection;
pub mod detector;
pub mod lang;
pub mod unicode;

pub use config::{ConfigError, DetectorConfig, Weights};
pub use detection::{Detection, Language, Reason};
pub use detector::{Detector, DetectorBuilder};
pub use lang::Lang;
pub use lang::data::{ENG, SPA, all_langs};

use std::sync::LazyLock;

static DEFAULT_DETECTOR: LazyLock<Detector> = LazyLock::new(Detector::default);

/// Classify `text` with the default weights and thresholds.
#[inline]
pub fn detect_language(text: &str) -> Detection {
    DEFAULT_DETECTOR.detect(text)
}
