//! チェックポイントの確認
//!
//! 学習済みチェックポイントの有無を表示用に調べるだけで、分類は
//! チェックポイントに依存しない。見つからなくても警告に留める。

use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelStatus {
    Checkpoint(PathBuf),
    PretrainedFeatures,
}

impl ModelStatus {
    /// 候補を順に探し、最初に見つかった空でないファイルを採用
    pub fn probe<S: AsRef<str>>(dir: &Path, candidates: &[S]) -> Self {
        for name in candidates {
            let path = dir.join(name.as_ref());
            match std::fs::metadata(&path) {
                Ok(meta) if meta.is_file() && meta.len() > 0 => {
                    log::info!("チェックポイントを検出: {}", path.display());
                    return ModelStatus::Checkpoint(path);
                }
                Ok(_) => log::warn!("チェックポイントが空または不正: {}", path.display()),
                Err(_) => log::debug!("チェックポイントなし: {}", path.display()),
            }
        }

        log::warn!("チェックポイントが見つかりません。画像特徴ヒューリスティックで判定します");
        ModelStatus::PretrainedFeatures
    }

    pub fn is_checkpoint(&self) -> bool {
        matches!(self, ModelStatus::Checkpoint(_))
    }
}

impl fmt::Display for ModelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelStatus::Checkpoint(path) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                write!(f, "Checkpoint loaded ({})", name)
            }
            ModelStatus::PretrainedFeatures => write!(f, "Using ImageNet pre-trained features"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const NAMES: [&str; 2] = ["enhanced.pth", "base.pth"];

    #[test]
    fn test_probe_missing() {
        let dir = tempdir().unwrap();
        let status = ModelStatus::probe(dir.path(), &NAMES);
        assert_eq!(status, ModelStatus::PretrainedFeatures);
        assert!(!status.is_checkpoint());
    }

    #[test]
    fn test_probe_prefers_first_candidate() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("enhanced.pth"), b"weights").unwrap();
        std::fs::write(dir.path().join("base.pth"), b"weights").unwrap();

        let status = ModelStatus::probe(dir.path(), &NAMES);
        assert_eq!(status, ModelStatus::Checkpoint(dir.path().join("enhanced.pth")));
        assert_eq!(status.to_string(), "Checkpoint loaded (enhanced.pth)");
    }

    #[test]
    fn test_probe_skips_empty_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("enhanced.pth"), b"").unwrap();
        std::fs::write(dir.path().join("base.pth"), b"weights").unwrap();

        let status = ModelStatus::probe(dir.path(), &NAMES);
        assert_eq!(status, ModelStatus::Checkpoint(dir.path().join("base.pth")));
    }
}
