//! Retina Screen
//!
//! 眼底写真から糖尿病網膜症の重症度を推定するデモ用ライブラリ。
//! 判定はファイル名ヒントと輝度統計のヒューリスティックで行う。

pub mod batch;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod export;
pub mod features;
pub mod interactive;
pub mod model;
pub mod report;
pub mod scanner;
pub mod session;

pub use classifier::{HeuristicClassifier, Prediction};
pub use retina_common::{
    ClassificationBasis, ClassificationResult, FeatureSummary, ImageReference, Recommendation,
    SeverityClass,
};
pub use session::{AnalysisSession, SessionOptions};
