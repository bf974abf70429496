use crate::error::{Result, SkillGapError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const JOBS_ENV: &str = "SKILL_GAP_JOBS";
pub const PROGRAMS_ENV: &str = "SKILL_GAP_PROGRAMS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 職種テーブル（Field, Job Title, Technical skills, General Skills）
    pub jobs_path: PathBuf,
    /// プログラム別スキルテーブル（Program Unit, Skill）
    pub programs_path: PathBuf,
    /// レポートの保存先
    pub report_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jobs_path: PathBuf::from("jobs.csv"),
            programs_path: PathBuf::from("program_skills.csv"),
            report_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SkillGapError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("skill-gap").join("config.json"))
    }

    /// 職種テーブルのパス（環境変数を優先）
    pub fn jobs_path(&self) -> PathBuf {
        std::env::var_os(JOBS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| self.jobs_path.clone())
    }

    /// プログラム別スキルテーブルのパス（環境変数を優先）
    pub fn programs_path(&self) -> PathBuf {
        std::env::var_os(PROGRAMS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| self.programs_path.clone())
    }
}
