//! ファイル名によるデモ用の判定
//!
//! ファイル名に重症度キーワード（"normal", "class_4" など）が含まれていれば、
//! 画像を読まずにそのクラスを返す。フォルダ名は見ない。

use super::band::ConfidenceBand;
use regex::Regex;
use retina_common::SeverityClass;
use std::path::Path;

lazy_static::lazy_static! {
    // クラス順（0→4）に評価し、最初の一致を採用
    static ref HINT_PATTERNS: Vec<(SeverityClass, Regex)> = SeverityClass::ALL
        .iter()
        .map(|&class| {
            let pattern = class
                .keywords()
                .iter()
                .map(|k| regex::escape(k))
                .collect::<Vec<_>>()
                .join("|");
            (class, Regex::new(&pattern).unwrap())
        })
        .collect();
}

/// ファイル名部分だけを対象に、大文字小文字を区別せずキーワードを探す
pub fn severity_from_path(path: &Path) -> Option<SeverityClass> {
    let lowered = path.file_name()?.to_string_lossy().to_lowercase();
    HINT_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(&lowered))
        .map(|(class, _)| *class)
}

pub fn band_for(class: SeverityClass) -> ConfidenceBand {
    match class {
        SeverityClass::Normal => ConfidenceBand::new(0.85, 0.95),
        SeverityClass::Mild => ConfidenceBand::new(0.80, 0.90),
        SeverityClass::Moderate => ConfidenceBand::new(0.75, 0.85),
        SeverityClass::Severe => ConfidenceBand::new(0.70, 0.80),
        SeverityClass::Proliferative => ConfidenceBand::new(0.75, 0.85),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_names() {
        assert_eq!(severity_from_path(Path::new("normal_eye.png")), Some(SeverityClass::Normal));
        assert_eq!(severity_from_path(Path::new("x/MILD.jpg")), Some(SeverityClass::Mild));
        assert_eq!(severity_from_path(Path::new("Moderate-01.bmp")), Some(SeverityClass::Moderate));
        assert_eq!(severity_from_path(Path::new("severe.tif")), Some(SeverityClass::Severe));
        assert_eq!(
            severity_from_path(Path::new("Proliferative.jpeg")),
            Some(SeverityClass::Proliferative)
        );
    }

    #[test]
    fn test_numeric_aliases() {
        for class in SeverityClass::ALL {
            let name = format!("demo_retina_{}_class_{}.png", class.index(), class.index());
            assert_eq!(severity_from_path(Path::new(&name)), Some(class));
        }
    }

    #[test]
    fn test_no_keyword() {
        assert_eq!(severity_from_path(Path::new("/scans/patient_17_left.png")), None);
        assert_eq!(severity_from_path(Path::new("class_9.png")), None);
    }

    #[test]
    fn test_directory_names_ignored() {
        assert_eq!(severity_from_path(Path::new("/scans/abnormal/patient_17.png")), None);
        assert_eq!(severity_from_path(Path::new("/home/mildred/eye.png")), None);
        assert_eq!(severity_from_path(Path::new("/data/severe_cohort/p1.png")), None);
        assert_eq!(
            severity_from_path(Path::new("/data/severe_cohort/class_2.png")),
            Some(SeverityClass::Moderate)
        );
        assert_eq!(severity_from_path(Path::new("/")), None);
    }

    #[test]
    fn test_first_class_wins() {
        // normal と severe の両方を含む場合は緊急度の低い方から評価される
        assert_eq!(
            severity_from_path(Path::new("severe_vs_normal.png")),
            Some(SeverityClass::Normal)
        );
    }

    #[test]
    fn test_bands_within_unit_interval() {
        for class in SeverityClass::ALL {
            let band = band_for(class);
            assert!(band.low >= 0.0 && band.high <= 1.0 && band.low < band.high);
        }
    }
}
