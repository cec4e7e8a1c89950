//! 糖尿病網膜症の重症度分類
//!
//! 0 (Normal) から 4 (Proliferative) まで、臨床的な緊急度の昇順。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum SeverityClass {
    Normal = 0,
    Mild = 1,
    Moderate = 2,
    Severe = 3,
    Proliferative = 4,
}

impl SeverityClass {
    /// 全クラス（緊急度順）
    pub const ALL: [SeverityClass; 5] = [
        SeverityClass::Normal,
        SeverityClass::Mild,
        SeverityClass::Moderate,
        SeverityClass::Severe,
        SeverityClass::Proliferative,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(Error::InvalidSeverity(index as i64))
    }

    pub fn label(self) -> &'static str {
        match self {
            SeverityClass::Normal => "Normal",
            SeverityClass::Mild => "Mild",
            SeverityClass::Moderate => "Moderate",
            SeverityClass::Severe => "Severe",
            SeverityClass::Proliferative => "Proliferative",
        }
    }

    /// ファイル名判定に使うキーワード（名称 + 数値エイリアス）
    pub fn keywords(self) -> [&'static str; 2] {
        match self {
            SeverityClass::Normal => ["normal", "class_0"],
            SeverityClass::Mild => ["mild", "class_1"],
            SeverityClass::Moderate => ["moderate", "class_2"],
            SeverityClass::Severe => ["severe", "class_3"],
            SeverityClass::Proliferative => ["proliferative", "class_4"],
        }
    }
}

impl TryFrom<u8> for SeverityClass {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::from_index(value as usize)
    }
}

impl fmt::Display for SeverityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
