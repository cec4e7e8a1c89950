//! フォルダ一括解析
//!
//! rayonで並列に分類する。画像ごとに `seed + index` で乱数を初期化するので、
//! 実行順に関係なく同じシードなら同じ結果になる。

use crate::classifier::HeuristicClassifier;
use crate::scanner::ImageInfo;
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use retina_common::{ClassificationResult, SeverityClass};

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub seed: u64,
    pub show_progress: bool,
}

pub fn analyze_batch(images: &[ImageInfo], options: &BatchOptions) -> Vec<ClassificationResult> {
    let progress = if options.show_progress {
        let pb = ProgressBar::new(images.len() as u64);
        if let Ok(style) = ProgressStyle::with_template("  {bar:40.cyan/blue} {pos}/{len} {msg}") {
            pb.set_style(style);
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let classifier = HeuristicClassifier::new();
    let results: Vec<ClassificationResult> = images
        .par_iter()
        .enumerate()
        .map(|(index, image)| {
            let mut rng = StdRng::seed_from_u64(options.seed.wrapping_add(index as u64));
            let prediction = classifier.classify_path(&image.path, &mut rng);
            progress.inc(1);

            ClassificationResult::new(
                prediction.severity,
                prediction.confidence,
                prediction.basis,
                image.reference(),
                Local::now(),
            )
        })
        .collect();

    progress.finish_and_clear();
    results
}

/// クラス別の件数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub counts: [usize; 5],
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn count(&self, class: SeverityClass) -> usize {
        self.counts[class.index() as usize]
    }

    /// Moderate以上（専門医受診が必要）
    pub fn referable(&self) -> usize {
        SeverityClass::ALL
            .iter()
            .filter(|&&c| c >= SeverityClass::Moderate)
            .map(|&c| self.count(c))
            .sum()
    }
}

pub fn summarize(results: &[ClassificationResult]) -> BatchSummary {
    let mut summary = BatchSummary::default();
    for result in results {
        summary.counts[result.severity.index() as usize] += 1;
    }
    summary
}
