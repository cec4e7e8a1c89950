//! 輝度ベースの特徴量抽出
//!
//! RGB画像を輝度マップ（3チャネルの平均）に変換し、分類に使う統計量を計算する。

use crate::error::{RetinaError, Result};
use image::RgbImage;
use retina_common::FeatureSummary;

/// 暗部判定の係数（平均輝度に対する比）
pub const DARK_FACTOR: f64 = 0.4;
/// 明部判定の係数
pub const BRIGHT_FACTOR: f64 = 1.6;

pub fn luminance_map(image: &RgbImage) -> Vec<f64> {
    image
        .pixels()
        .map(|p| (p[0] as f64 + p[1] as f64 + p[2] as f64) / 3.0)
        .collect()
}

pub fn summarize(image: &RgbImage) -> Result<FeatureSummary> {
    let luminance = luminance_map(image);
    if luminance.is_empty() {
        return Err(RetinaError::ImageLoad(format!(
            "画素がありません ({}x{})",
            image.width(),
            image.height()
        )));
    }

    let n = luminance.len() as f64;
    let mean = luminance.iter().sum::<f64>() / n;
    let variance = luminance.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();

    let dark_threshold = mean * DARK_FACTOR;
    let bright_threshold = mean * BRIGHT_FACTOR;
    let dark = luminance.iter().filter(|&&v| v < dark_threshold).count();
    let bright = luminance.iter().filter(|&&v| v > bright_threshold).count();

    let contrast = if mean > 0.0 { std / mean } else { 0.0 };

    Ok(FeatureSummary {
        mean_brightness: mean,
        brightness_std: std,
        dark_ratio: dark as f64 / n,
        bright_ratio: bright as f64 / n,
        contrast,
    })
}
