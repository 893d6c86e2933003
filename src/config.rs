use crate::cli::OutputFormat;
use crate::error::{CompanyInfoError, Result};
use company_info_common::ErrorMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// エラーモードを上書きする環境変数
pub const ERROR_MODE_ENV: &str = "COMPANY_INFO_ERROR_MODE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub error_mode: ErrorMode,
    pub parallel: bool,
    pub default_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::FailFast,
            parallel: true,
            default_format: OutputFormat::Json,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込む（ファイルがなければデフォルト）
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
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
            .ok_or_else(|| CompanyInfoError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("company-info").join("config.json"))
    }

    /// 有効なエラーモード（環境変数を優先）
    pub fn effective_error_mode(&self) -> Result<ErrorMode> {
        self.error_mode_with_override(std::env::var(ERROR_MODE_ENV).ok().as_deref())
    }

    fn error_mode_with_override(&self, value: Option<&str>) -> Result<ErrorMode> {
        match value {
            Some(value) => value
                .parse::<ErrorMode>()
                .map_err(|e| CompanyInfoError::Config(e.to_string())),
            None => Ok(self.error_mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.error_mode, ErrorMode::FailFast);
        assert!(config.parallel);
        assert_eq!(config.default_format, OutputFormat::Json);
    }

    #[test]
    fn test_config_partial_json() {
        let config: Config = serde_json::from_str(r#"{"error_mode": "accumulate"}"#).unwrap();
        assert_eq!(config.error_mode, ErrorMode::Accumulate);
        assert!(config.parallel);
    }

    #[test]
    fn test_config_roundtrip_keys() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("\"error_mode\":\"fail_fast\""));
        assert!(json.contains("\"default_format\":\"json\""));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"error_mode": "accumulate", "parallel": false}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.error_mode, ErrorMode::Accumulate);
        assert!(!config.parallel);
        assert_eq!(config.default_format, OutputFormat::Json);
    }

    #[test]
    fn test_load_from_broken_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(CompanyInfoError::JsonParse(_))));
    }

    #[test]
    fn test_error_mode_override() {
        let config = Config::default();
        assert_eq!(config.error_mode_with_override(None).unwrap(), ErrorMode::FailFast);
        assert_eq!(
            config.error_mode_with_override(Some("accumulate")).unwrap(),
            ErrorMode::Accumulate
        );

        let result = config.error_mode_with_override(Some("sometimes"));
        assert!(matches!(result, Err(CompanyInfoError::Config(_))));
    }

    #[test]
    fn test_effective_error_mode_reads_env() {
        let config = Config {
            error_mode: ErrorMode::Accumulate,
            ..Default::default()
        };

        // 環境変数はこのテストでのみ操作する
        std::env::set_var(ERROR_MODE_ENV, "fail_fast");
        let overridden = config.effective_error_mode();
        std::env::set_var(ERROR_MODE_ENV, "invalid");
        let invalid = config.effective_error_mode();
        std::env::remove_var(ERROR_MODE_ENV);
        let fallback = config.effective_error_mode();

        assert_eq!(overridden.unwrap(), ErrorMode::FailFast);
        assert!(matches!(invalid, Err(CompanyInfoError::Config(_))));
        assert_eq!(fallback.unwrap(), ErrorMode::Accumulate);
    }
}
