//! Excel生成（CLI版）
//!
//! 共通ライブラリでバッファを作り、ファイルに書き出す。

use crate::error::{Result, SkillGapError};
use skill_gap_common::export::excel_core::generate_excel_buffer;
use skill_gap_common::JobSkillView;
use std::path::{Path, PathBuf};

pub fn excel_file_name(job_title: &str) -> String {
    super::safe_file_name(&format!("{}_skills.xlsx", job_title))
}

/// `{職種}_skills.xlsx` を保存する（該当行がなければ `None`）
pub fn generate_excel(views: &[JobSkillView], output_dir: &Path) -> Result<Option<PathBuf>> {
    let Some(first) = views.first() else {
        return Ok(None);
    };

    let buffer = generate_excel_buffer(views)
        .map_err(|e| SkillGapError::ExcelGeneration(e.to_string()))?;

    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(excel_file_name(&first.job_title));
    std::fs::write(&path, buffer)?;

    Ok(Some(path))
}
