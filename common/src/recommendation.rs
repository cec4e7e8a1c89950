//! 重症度ごとの表示ラベル・アクセント色・推奨事項
//!
//! テーブルは静的で、クラスごとにちょうど1エントリ。

use crate::error::{Error, Result};
use crate::severity::SeverityClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub severity: SeverityClass,
    pub label: &'static str,
    pub diagnosis: &'static str,
    /// アクセント色 (#rrggbb)
    pub color: &'static str,
    pub headline: &'static str,
    /// 一行の推奨事項
    pub advisory: &'static str,
    pub details: &'static [&'static str],
}

pub static RECOMMENDATIONS: [Recommendation; 5] = [
    Recommendation {
        severity: SeverityClass::Normal,
        label: "Normal",
        diagnosis: "Normal - Healthy Eye",
        color: "#27ae60",
        headline: "NORMAL FINDINGS",
        advisory: "No signs of diabetic retinopathy detected. Continue regular eye exams.",
        details: &[
            "No signs of diabetic retinopathy detected",
            "Continue regular eye examinations",
            "Annual screening recommended",
        ],
    },
    Recommendation {
        severity: SeverityClass::Mild,
        label: "Mild",
        diagnosis: "Mild - Minor Signs Present",
        color: "#f1c40f",
        headline: "MILD DIABETIC RETINOPATHY",
        advisory: "Mild signs detected. Schedule follow-up in 6-12 months.",
        details: &[
            "Minor blood vessel changes detected",
            "Schedule follow-up in 6-12 months",
            "Monitor blood sugar levels closely",
        ],
    },
    Recommendation {
        severity: SeverityClass::Moderate,
        label: "Moderate",
        diagnosis: "Moderate - Needs Medical Attention",
        color: "#e67e22",
        headline: "MODERATE DIABETIC RETINOPATHY",
        advisory: "Moderate changes found. Consult ophthalmologist within 3-6 months.",
        details: &[
            "Noticeable blood vessel damage present",
            "Ophthalmologist consultation within 3-6 months",
            "Enhanced diabetes management required",
        ],
    },
    Recommendation {
        severity: SeverityClass::Severe,
        label: "Severe",
        diagnosis: "Severe - Requires Immediate Treatment",
        color: "#e74c3c",
        headline: "SEVERE DIABETIC RETINOPATHY",
        advisory: "Severe retinopathy detected. Seek immediate medical attention.",
        details: &[
            "Significant retinal damage detected",
            "IMMEDIATE medical attention required",
            "Urgent ophthalmologist referral needed",
        ],
    },
    Recommendation {
        severity: SeverityClass::Proliferative,
        label: "Proliferative",
        diagnosis: "Proliferative - URGENT Medical Care",
        color: "#8e44ad",
        headline: "PROLIFERATIVE DIABETIC RETINOPATHY",
        advisory: "Advanced retinopathy. URGENT: See specialist immediately!",
        details: &[
            "Advanced stage with new blood vessel growth",
            "EMERGENCY ophthalmologist consultation",
            "Immediate treatment required",
        ],
    },
];

pub const DISCLAIMER: &str = "IMPORTANT MEDICAL DISCLAIMER:\n\
This analysis is for screening purposes only.\n\
Always consult qualified ophthalmologists for proper\n\
medical diagnosis and treatment decisions.";

impl Recommendation {
    pub fn for_class(severity: SeverityClass) -> &'static Recommendation {
        // テーブルはSeverityClassの判別値順に並んでいる
        &RECOMMENDATIONS[severity.index() as usize]
    }

    /// 数値クラスから引く。0-4以外は InvalidSeverity
    pub fn lookup(index: i64) -> Result<&'static Recommendation> {
        usize::try_from(index)
            .ok()
            .and_then(|i| RECOMMENDATIONS.get(i))
            .ok_or(Error::InvalidSeverity(index))
    }

    /// "#rrggbb" を [r, g, b] に変換
    pub fn rgb(&self) -> [u8; 3] {
        let hex = self.color.trim_start_matches('#');
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .unwrap_or(0)
        };
        [channel(0), channel(2), channel(4)]
    }
}
