//! ヒューリスティック重症度分類
//!
//! 判定は次の順に行う:
//! 1. ファイル名のキーワード（デモ・テスト用）
//! 2. 輝度統計によるしきい値判定
//! 3. 読み込み・特徴量計算に失敗した場合は重み付きランダム
//!
//! どの経路でも必ず結果を返し、エラーを呼び出し元に伝播しない。
//! 乱数源は呼び出し側から渡す。

mod band;
pub mod hint;
pub mod rules;

pub use band::ConfidenceBand;

use crate::error::Result;
use crate::features;
use image::RgbImage;
use rand::Rng;
use retina_common::{ClassificationBasis, SeverityClass};
use std::path::Path;

/// 分類器の生の出力
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub severity: SeverityClass,
    pub confidence: f64,
    pub basis: ClassificationBasis,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    pub fn new() -> Self {
        Self
    }

    /// デコード済み画像を分類する
    pub fn classify<R: Rng + ?Sized>(&self, image: &RgbImage, path: &Path, rng: &mut R) -> Prediction {
        if let Some(prediction) = filename_hint(path, rng) {
            return prediction;
        }

        match features::summarize(image) {
            Ok(summary) => {
                log::debug!("{}: {:?}", path.display(), summary);
                rules::grade(&summary, rng)
            }
            Err(e) => {
                log::warn!("特徴量の計算に失敗 ({}): {}", path.display(), e);
                rules::fallback(rng)
            }
        }
    }

    /// ファイルを読み込んで分類する
    pub fn classify_path<R: Rng + ?Sized>(&self, path: &Path, rng: &mut R) -> Prediction {
        if let Some(prediction) = filename_hint(path, rng) {
            return prediction;
        }

        match load_rgb(path) {
            Ok(image) => self.classify(&image, path, rng),
            Err(e) => {
                log::warn!("画像を読み込めません ({}): {}", path.display(), e);
                rules::fallback(rng)
            }
        }
    }
}

fn filename_hint<R: Rng + ?Sized>(path: &Path, rng: &mut R) -> Option<Prediction> {
    hint::severity_from_path(path).map(|severity| Prediction {
        severity,
        confidence: hint::band_for(severity).sample(rng),
        basis: ClassificationBasis::FilenameHint,
    })
}

pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    Ok(image::open(path)?.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_hint_short_circuits_pixels() {
        // 画素は真っ黒でもファイル名が優先される
        let img = RgbImage::new(4, 4);
        let mut rng = StdRng::seed_from_u64(1);
        let p = HeuristicClassifier::new().classify(&img, Path::new("Normal_01.png"), &mut rng);
        assert_eq!(p.severity, SeverityClass::Normal);
        assert_eq!(p.basis, ClassificationBasis::FilenameHint);
    }

    #[test]
    fn test_gray_image_without_hint_is_mild() {
        let img = RgbImage::from_pixel(16, 16, Rgb([128, 128, 128]));
        let mut rng = StdRng::seed_from_u64(1);
        let p = HeuristicClassifier::new().classify(&img, Path::new("scan_0042.png"), &mut rng);
        assert_eq!(p.severity, SeverityClass::Mild);
        assert_eq!(p.basis, ClassificationBasis::ImageFeatures);
    }

    #[test]
    fn test_empty_image_falls_back() {
        let img = RgbImage::new(0, 0);
        let mut rng = StdRng::seed_from_u64(1);
        let p = HeuristicClassifier::new().classify(&img, Path::new("scan.png"), &mut rng);
        assert_eq!(p.basis, ClassificationBasis::Fallback);
        assert!(rules::FALLBACK_BAND.contains(p.confidence));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = HeuristicClassifier::new().classify_path(Path::new("/nonexistent/scan.png"), &mut rng);
        assert_eq!(p.basis, ClassificationBasis::Fallback);
    }

    #[test]
    fn test_missing_file_with_hint_uses_hint() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = HeuristicClassifier::new()
            .classify_path(Path::new("/nonexistent/class_3.png"), &mut rng);
        assert_eq!(p.severity, SeverityClass::Severe);
        assert_eq!(p.basis, ClassificationBasis::FilenameHint);
    }

    #[test]
    fn test_same_seed_same_prediction() {
        let img = RgbImage::from_fn(10, 10, |x, _| {
            if x < 5 { Rgb([100, 100, 100]) } else { Rgb([140, 140, 140]) }
        });
        let classifier = HeuristicClassifier::new();
        let a = classifier.classify(&img, Path::new("a.png"), &mut StdRng::seed_from_u64(5));
        let b = classifier.classify(&img, Path::new("a.png"), &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }
}
