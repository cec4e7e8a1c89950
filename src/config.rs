use crate::error::{RetinaError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const SEED_ENV_VAR: &str = "RETINA_SCREEN_SEED";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 解析中の擬似処理時間（ミリ秒）
    pub processing_delay_ms: u64,
    /// 履歴表示の最大件数
    pub history_display_limit: usize,
    pub seed: Option<u64>,
    /// チェックポイントを探すディレクトリ（省略時はカレント）
    pub model_dir: Option<PathBuf>,
    pub checkpoint_names: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            processing_delay_ms: 2000,
            history_display_limit: 10,
            seed: None,
            model_dir: None,
            checkpoint_names: vec![
                "enhanced_diabetic_retinopathy_model.pth".into(),
                "diabetic_retinopathy_model.pth".into(),
            ],
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RetinaError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("retina-screen").join("config.json"))
    }

    /// 優先順位: CLI引数 > 環境変数 > 設定ファイル
    pub fn effective_seed(&self, cli_seed: Option<u64>) -> Result<Option<u64>> {
        if cli_seed.is_some() {
            return Ok(cli_seed);
        }

        if let Ok(raw) = std::env::var(SEED_ENV_VAR) {
            let seed = raw.trim().parse::<u64>().map_err(|_| {
                RetinaError::Config(format!("{} が数値ではありません: {}", SEED_ENV_VAR, raw))
            })?;
            return Ok(Some(seed));
        }

        Ok(self.seed)
    }

    pub fn model_dir(&self) -> PathBuf {
        self.model_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.processing_delay_ms, 2000);
        assert_eq!(config.history_display_limit, 10);
        assert_eq!(config.checkpoint_names.len(), 2);
        assert_eq!(config.model_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"seed": 42}"#).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.processing_delay_ms, 2000);
    }

    #[test]
    fn test_cli_seed_wins() {
        let config = Config {
            seed: Some(1),
            ..Default::default()
        };
        assert_eq!(config.effective_seed(Some(99)).unwrap(), Some(99));
    }
}
