//! 特徴量のしきい値判定と最終フォールバック

use super::band::ConfidenceBand;
use super::Prediction;
use rand::seq::SliceRandom;
use rand::Rng;
use retina_common::{ClassificationBasis, FeatureSummary, SeverityClass};

pub const PROLIFERATIVE_BAND: ConfidenceBand = ConfidenceBand::new(0.75, 0.85);
pub const SEVERE_BAND: ConfidenceBand = ConfidenceBand::new(0.70, 0.80);
pub const MODERATE_BAND: ConfidenceBand = ConfidenceBand::new(0.72, 0.82);
pub const MILD_BAND: ConfidenceBand = ConfidenceBand::new(0.70, 0.80);
pub const NORMAL_BAND: ConfidenceBand = ConfidenceBand::new(0.80, 0.90);
pub const NOISY_MILD_BAND: ConfidenceBand = ConfidenceBand::new(0.65, 0.75);
pub const FALLBACK_BAND: ConfidenceBand = ConfidenceBand::new(0.65, 0.85);

/// 所見なし画像をNormalとする確率（残りはMild）
pub const NORMAL_PROBABILITY: f64 = 0.7;

/// Normal寄りの重み付き候補
const FALLBACK_CLASSES: [SeverityClass; 8] = [
    SeverityClass::Normal,
    SeverityClass::Normal,
    SeverityClass::Normal,
    SeverityClass::Mild,
    SeverityClass::Mild,
    SeverityClass::Moderate,
    SeverityClass::Severe,
    SeverityClass::Proliferative,
];

/// 上から順に評価し、最初に成立した分岐を採用する
pub fn grade<R: Rng + ?Sized>(f: &FeatureSummary, rng: &mut R) -> Prediction {
    let (severity, band) = if f.dark_ratio > 0.25 || f.bright_ratio > 0.20 {
        if f.dark_ratio > 0.35 || f.bright_ratio > 0.30 {
            (SeverityClass::Proliferative, PROLIFERATIVE_BAND)
        } else {
            (SeverityClass::Severe, SEVERE_BAND)
        }
    } else if f.dark_ratio > 0.15 || f.bright_ratio > 0.10 {
        (SeverityClass::Moderate, MODERATE_BAND)
    } else if f.dark_ratio > 0.08 || f.bright_ratio > 0.05 || f.contrast < 0.15 {
        (SeverityClass::Mild, MILD_BAND)
    } else if rng.gen_bool(NORMAL_PROBABILITY) {
        (SeverityClass::Normal, NORMAL_BAND)
    } else {
        (SeverityClass::Mild, NOISY_MILD_BAND)
    };

    Prediction {
        severity,
        confidence: band.sample(rng),
        basis: ClassificationBasis::ImageFeatures,
    }
}

pub fn fallback<R: Rng + ?Sized>(rng: &mut R) -> Prediction {
    let severity = FALLBACK_CLASSES
        .choose(rng)
        .copied()
        .unwrap_or(SeverityClass::Normal);

    Prediction {
        severity,
        confidence: FALLBACK_BAND.sample(rng),
        basis: ClassificationBasis::Fallback,
    }
}
