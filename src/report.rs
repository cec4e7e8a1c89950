//! 解析結果・履歴のテキスト表示

use crate::model::ModelStatus;
use retina_common::{ClassificationResult, DISCLAIMER};

/// 24bitカラーのANSIエスケープで着色
pub fn paint(text: &str, rgb: [u8; 3]) -> String {
    format!("\x1b[1;38;2;{};{};{}m{}\x1b[0m", rgb[0], rgb[1], rgb[2], text)
}

pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

pub fn render_result(result: &ClassificationResult, model: &ModelStatus) -> String {
    let rec = result.recommendation();

    let mut out = String::from("ANALYSIS COMPLETE\n\n");
    out.push_str(&format!("DIAGNOSIS:     {}\n", rec.diagnosis));
    out.push_str(&format!("CONFIDENCE:    {}\n", format_confidence(result.confidence)));
    out.push_str(&format!("IMAGE:         {}\n", result.source.file_name));
    if let Some(captured) = &result.source.captured_at {
        out.push_str(&format!("CAPTURED:      {}\n", captured));
    }
    out.push_str(&format!("MODEL:         {}\n", model));
    out.push_str(&format!("BASIS:         {}\n", result.basis.describe()));
    out.push_str(&format!(
        "ANALYSIS TIME: {}\n",
        result.timestamp.format("%Y-%m-%d %H:%M:%S")
    ));

    out.push_str(&format!("\nASSESSMENT: {}\n", rec.headline));
    for line in rec.details {
        out.push_str(&format!("  • {}\n", line));
    }
    out.push_str(&format!("\n{}\n", DISCLAIMER));

    out
}

/// 新しい順に最大 `limit` 件。番号は通し番号（古いものが #1）
pub fn render_history(history: &[ClassificationResult], limit: usize) -> String {
    if history.is_empty() {
        return "No analysis history yet.\nUpload and analyze images to see results here.\n".to_string();
    }

    let total = history.len();
    history
        .iter()
        .rev()
        .take(limit)
        .enumerate()
        .map(|(i, result)| {
            let rec = result.recommendation();
            format!(
                "Analysis #{} - {}\n  {} ({})\n  Confidence: {}\n",
                total - i,
                result.timestamp.format("%Y-%m-%d %H:%M"),
                rec.diagnosis,
                result.source.file_name,
                format_confidence(result.confidence)
            )
        })
        .collect()
}
