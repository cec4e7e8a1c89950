//! 解析結果の型定義
//!
//! - FeatureSummary: 画像1枚から計算する一時的な特徴量
//! - ImageReference: 解析対象画像の参照情報
//! - ClassificationResult: 解析1回ごとの最終出力（作成後は不変）

use crate::recommendation::Recommendation;
use crate::severity::SeverityClass;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// 輝度統計（分類1回の間だけ存在する）
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FeatureSummary {
    pub mean_brightness: f64,
    pub brightness_std: f64,
    /// 輝度 < 0.4 × 平均 の画素割合（出血・微小動脈瘤）
    pub dark_ratio: f64,
    /// 輝度 > 1.6 × 平均 の画素割合（硬性白斑）
    pub bright_ratio: f64,
    pub contrast: f64,
}

/// 判定の根拠
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClassificationBasis {
    FilenameHint,
    ImageFeatures,
    Fallback,
}

impl ClassificationBasis {
    pub fn describe(self) -> &'static str {
        match self {
            ClassificationBasis::FilenameHint => "filename hint",
            ClassificationBasis::ImageFeatures => "image feature analysis",
            ClassificationBasis::Fallback => "fallback estimate",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReference {
    pub path: String,

    #[serde(default)]
    pub file_name: String,

    /// SHA-256（読み込めなかった場合はNone）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,

    /// 撮影日時（EXIF DateTimeOriginal）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<String>,
}

impl ImageReference {
    pub fn from_path(path: &std::path::Path) -> Self {
        Self {
            path: path.to_string_lossy().to_string(),
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            digest: None,
            captured_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub severity: SeverityClass,
    pub confidence: f64,
    pub basis: ClassificationBasis,
    pub source: ImageReference,
    pub timestamp: DateTime<Local>,
}

impl ClassificationResult {
    /// confidenceは[0, 1]に丸める
    pub fn new(
        severity: SeverityClass,
        confidence: f64,
        basis: ClassificationBasis,
        source: ImageReference,
        timestamp: DateTime<Local>,
    ) -> Self {
        let confidence = if confidence.is_finite() { confidence.clamp(0.0, 1.0) } else { 0.0 };
        Self {
            severity,
            confidence,
            basis,
            source,
            timestamp,
        }
    }

    pub fn recommendation(&self) -> &'static Recommendation {
        Recommendation::for_class(self.severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn sample(confidence: f64) -> ClassificationResult {
        ClassificationResult::new(
            SeverityClass::Moderate,
            confidence,
            ClassificationBasis::ImageFeatures,
            ImageReference::from_path(Path::new("/data/eyes/left.png")),
            Local::now(),
        )
    }

    #[test]
    fn test_image_reference_from_path() {
        let r = ImageReference::from_path(Path::new("/data/eyes/left.png"));
        assert_eq!(r.file_name, "left.png");
        assert!(r.path.ends_with("left.png"));
        assert!(r.digest.is_none());
    }

    #[test]
    fn test_confidence_is_clamped() {
        assert_eq!(sample(1.7).confidence, 1.0);
        assert_eq!(sample(-0.2).confidence, 0.0);
        assert_eq!(sample(f64::NAN).confidence, 0.0);
        assert!((sample(0.78).confidence - 0.78).abs() < 1e-12);
    }

    #[test]
    fn test_result_serialize() {
        let json = serde_json::to_string(&sample(0.8)).expect("シリアライズ失敗");
        assert!(json.contains("\"severity\":\"moderate\""));
        assert!(json.contains("\"basis\":\"imageFeatures\""));
        assert!(json.contains("\"fileName\":\"left.png\""));
        assert!(!json.contains("digest"));
    }

    #[test]
    fn test_result_roundtrip() {
        let original = sample(0.75);
        let json = serde_json::to_string_pretty(&original).unwrap();
        let back: ClassificationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.severity, original.severity);
        assert_eq!(back.source, original.source);
        assert_eq!(back.timestamp, original.timestamp);
    }

    #[test]
    fn test_recommendation_matches_severity() {
        assert_eq!(sample(0.8).recommendation().label, "Moderate");
    }
}
