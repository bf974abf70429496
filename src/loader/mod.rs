//! 入力テーブルの読み込み
//!
//! 起動時に1回だけ読み込み、以降は読み取り専用で各処理に渡す。

mod spreadsheet;

use crate::error::{Result, SkillGapError};
use skill_gap_common::{jobs_from_table, program_skills_from_table, JobRecord, ProgramSkillRecord, RawTable};
use std::path::Path;
use tracing::{debug, info};

const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods"];

/// 読み込み済みの2テーブル
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub jobs: Vec<JobRecord>,
    pub program_skills: Vec<ProgramSkillRecord>,
}

impl Dataset {
    pub fn load(jobs_path: &Path, programs_path: &Path) -> Result<Self> {
        Ok(Self {
            jobs: load_jobs(jobs_path)?,
            program_skills: load_program_skills(programs_path)?,
        })
    }
}

pub fn load_jobs(path: &Path) -> Result<Vec<JobRecord>> {
    let table = read_table(path)?;
    let jobs = jobs_from_table(&table)?;
    info!(path = %path.display(), rows = jobs.len(), "職種テーブル読み込み");
    Ok(jobs)
}

pub fn load_program_skills(path: &Path) -> Result<Vec<ProgramSkillRecord>> {
    let table = read_table(path)?;
    let records = program_skills_from_table(&table)?;
    info!(path = %path.display(), rows = records.len(), "プログラム別スキル読み込み");
    Ok(records)
}

/// 拡張子で読み込み方法を切り替える
pub fn read_table(path: &Path) -> Result<RawTable> {
    if !path.exists() {
        return Err(SkillGapError::FileNotFound(path.display().to_string()));
    }

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    debug!(path = %path.display(), ext = %ext, "テーブル読み込み");

    if ext == "csv" {
        let content = std::fs::read_to_string(path)?;
        Ok(RawTable::from_csv_str(&content)?)
    } else if SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) {
        spreadsheet::read_first_sheet(path)
    } else {
        Err(SkillGapError::UnsupportedFormat(path.display().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_table_not_found() {
        let result = read_table(Path::new("/nonexistent/jobs.csv"));
        assert!(matches!(result, Err(SkillGapError::FileNotFound(_))));
    }

    #[test]
    fn test_read_table_unsupported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jobs.json");
        std::fs::write(&path, "[]").unwrap();
        assert!(matches!(read_table(&path), Err(SkillGapError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_load_jobs_csv_uppercase_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("JOBS.CSV");
        std::fs::write(
            &path,
            "Field,Job Title,Technical skills,General Skills\nEngineering,Backend Developer,\"Python, SQL\",Teamwork\n",
        )
        .unwrap();

        let jobs = load_jobs(&path).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].technical_skills_raw.as_deref(), Some("Python, SQL"));
    }
}
