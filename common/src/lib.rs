//! Retina Screening Common Library
//!
//! CLIと解析ワーカーで共有される型と推奨事項テーブル

pub mod error;
pub mod recommendation;
pub mod severity;
pub mod types;

pub use error::{Error, Result};
pub use recommendation::{Recommendation, DISCLAIMER, RECOMMENDATIONS};
pub use severity::SeverityClass;
pub use types::{ClassificationBasis, ClassificationResult, FeatureSummary, ImageReference};
