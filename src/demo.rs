//! デモ用の合成眼底画像
//!
//! `demo_retina_{n}_class_{n}.png` という名前で5枚生成する。
//! ファイル名にクラスが含まれるので、各重症度の表示をそのまま確認できる。

use crate::error::Result;
use image::{Rgb, RgbImage};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use retina_common::SeverityClass;
use std::path::{Path, PathBuf};

const SIZE: u32 = 256;
const FUNDUS_RADIUS: f64 = 118.0;
const DISC_RADIUS: f64 = 16.0;

pub fn demo_file_name(class: SeverityClass) -> String {
    format!("demo_retina_{}_class_{}.png", class.index(), class.index())
}

pub fn generate_demo_images(dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut paths = Vec::with_capacity(SeverityClass::ALL.len());
    for class in SeverityClass::ALL {
        let path = dir.join(demo_file_name(class));
        render_fundus(class).save(&path)?;
        log::debug!("デモ画像を生成: {}", path.display());
        paths.push(path);
    }
    Ok(paths)
}

pub fn pick_demo_image<'a, R: Rng + ?Sized>(paths: &'a [PathBuf], rng: &mut R) -> Option<&'a PathBuf> {
    paths.choose(rng)
}

/// 橙色の眼底・黄色い視神経乳頭に、重症度に応じた出血（暗点）と白斑（明点）を描く
pub fn render_fundus(class: SeverityClass) -> RgbImage {
    let center = SIZE as f64 / 2.0;
    let disc = (center + 50.0, center - 10.0);

    let mut img = RgbImage::from_fn(SIZE, SIZE, |x, y| {
        let dx = x as f64 - center;
        let dy = y as f64 - center;
        let r = (dx * dx + dy * dy).sqrt();
        if r > FUNDUS_RADIUS {
            return Rgb([0, 0, 0]);
        }

        let ddx = x as f64 - disc.0;
        let ddy = y as f64 - disc.1;
        if (ddx * ddx + ddy * ddy).sqrt() < DISC_RADIUS {
            return Rgb([250, 225, 150]);
        }

        // 周辺減光
        let falloff = 1.0 - 0.35 * (r / FUNDUS_RADIUS);
        Rgb([
            (200.0 * falloff) as u8,
            (95.0 * falloff) as u8,
            (45.0 * falloff) as u8,
        ])
    });

    let mut rng = StdRng::seed_from_u64(class.index() as u64);
    let lesions = class.index() as usize * 6;
    for i in 0..lesions {
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        let dist = rng.gen_range(0.0..FUNDUS_RADIUS * 0.8);
        let cx = center + dist * angle.cos();
        let cy = center + dist * angle.sin();
        let radius = rng.gen_range(2.0..5.0);
        let color = if i % 2 == 0 { Rgb([60, 10, 10]) } else { Rgb([255, 250, 205]) };
        fill_circle(&mut img, cx, cy, radius, color);
    }

    img
}

fn fill_circle(img: &mut RgbImage, cx: f64, cy: f64, radius: f64, color: Rgb<u8>) {
    let x0 = (cx - radius).floor().max(0.0) as u32;
    let y0 = (cy - radius).floor().max(0.0) as u32;
    let x1 = ((cx + radius).ceil() as u32).min(img.width().saturating_sub(1));
    let y1 = ((cy + radius).ceil() as u32).min(img.height().saturating_sub(1));

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            if dx * dx + dy * dy <= radius * radius {
                img.put_pixel(x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_file_name() {
        assert_eq!(demo_file_name(SeverityClass::Severe), "demo_retina_3_class_3.png");
    }

    #[test]
    fn test_pick_demo_image() {
        let paths: Vec<PathBuf> = SeverityClass::ALL
            .iter()
            .map(|&c| PathBuf::from(demo_file_name(c)))
            .collect();

        let first = pick_demo_image(&paths, &mut StdRng::seed_from_u64(11));
        let again = pick_demo_image(&paths, &mut StdRng::seed_from_u64(11));
        assert!(first.is_some());
        assert_eq!(first, again);
        assert_eq!(pick_demo_image(&[], &mut StdRng::seed_from_u64(11)), None);
    }

    #[test]
    fn test_render_size_and_background() {
        let img = render_fundus(SeverityClass::Normal);
        assert_eq!(img.dimensions(), (SIZE, SIZE));
        assert_eq!(img.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_ne!(img.get_pixel(SIZE / 2, SIZE / 2), &Rgb([0, 0, 0]));
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(
            render_fundus(SeverityClass::Moderate),
            render_fundus(SeverityClass::Moderate)
        );
    }
}
