use crate::ai_provider::AiProvider;
use crate::error::{PillarError, Result};
use hr_pillar_common::Locale;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 環境変数でプロバイダを上書き
pub const PROVIDER_ENV: &str = "HR_PILLAR_AI_PROVIDER";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ai_provider: AiProvider,
    pub source_locale: Locale,
    pub target_locale: Locale,
    /// ストップワードを残す（旧ツールと同じ語彙）
    pub keep_stop_words: bool,
    pub translate_by_default: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ai_provider: AiProvider::Claude,
            source_locale: Locale::ZhCn,
            target_locale: Locale::En,
            keep_stop_words: false,
            translate_by_default: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default()
        };

        // 環境変数を優先
        if let Ok(value) = std::env::var(PROVIDER_ENV) {
            config.ai_provider = value
                .parse()
                .map_err(|e| PillarError::Config(format!("{}: {}", PROVIDER_ENV, e)))?;
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// 翻訳の有無と (入力言語, カタログ言語) を決める
    ///
    /// `--source` / `--target` の指定は翻訳を有効にする。翻訳しない場合は
    /// 入力をカタログ言語とみなす。
    pub fn resolve_locales(
        &self,
        translate: bool,
        source: Option<Locale>,
        target: Option<Locale>,
    ) -> (bool, Locale, Locale) {
        let translate =
            translate || self.translate_by_default || source.is_some() || target.is_some();
        if !translate {
            return (false, self.target_locale.clone(), self.target_locale.clone());
        }
        (
            true,
            source.unwrap_or_else(|| self.source_locale.clone()),
            target.unwrap_or_else(|| self.target_locale.clone()),
        )
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PillarError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("hr-pillar").join("config.json"))
    }
}
