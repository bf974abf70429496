pub mod excel;

use crate::error::Result;
use skill_gap_common::{report_file_name, JobSkillView, REPORT_MIME_TYPE};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 複数行が該当した場合の区切り
const REPORT_SEPARATOR: &str = "\n---\n\n";

/// パス区切り文字をファイル名から除く
fn safe_file_name(name: &str) -> String {
    name.replace(['/', '\\'], "_")
}

/// 該当行すべてのレポートを1つのテキストにまとめる
pub fn combined_report(views: &[JobSkillView]) -> String {
    views
        .iter()
        .map(JobSkillView::report)
        .collect::<Vec<_>>()
        .join(REPORT_SEPARATOR)
}

/// レポートを `{職種}_skills_report.txt` として保存する
///
/// 該当行がなければ何も書かずに `None`。
pub fn save_report(views: &[JobSkillView], output_dir: &Path) -> Result<Option<PathBuf>> {
    let Some(first) = views.first() else {
        return Ok(None);
    };

    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(safe_file_name(&report_file_name(&first.job_title)));
    let content = combined_report(views);
    debug!(path = %path.display(), mime = REPORT_MIME_TYPE, bytes = content.len(), "レポート保存");
    std::fs::write(&path, content)?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_file_name() {
        assert_eq!(safe_file_name("CI/CD Engineer_skills_report.txt"), "CI_CD Engineer_skills_report.txt");
        assert_eq!(safe_file_name("Backend Developer"), "Backend Developer");
    }
}
