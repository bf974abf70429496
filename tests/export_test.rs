//! レポート/Excel出力の統合テスト

use skill_gap::export::{self, excel};
use skill_gap_common::{evaluate, JobRecord, JobSkillView, ProgramSkillRecord, Selection};
use tempfile::tempdir;

fn job(title: &str, tech: &str) -> JobRecord {
    JobRecord {
        field: Some("Engineering".to_string()),
        job_title: Some(title.to_string()),
        technical_skills_raw: Some(tech.to_string()),
        general_skills_raw: Some("Communication".to_string()),
    }
}

fn views(jobs: &[JobRecord], title: &str, program: Option<&str>) -> Vec<JobSkillView> {
    let programs = vec![
        ProgramSkillRecord { program_unit: Some("CS101".into()), skill: Some("Python".into()) },
        ProgramSkillRecord { program_unit: Some("CS101".into()), skill: Some("Leadership".into()) },
    ];
    let selection = Selection::new(
        Some("Engineering".into()),
        Some(title.into()),
        program.map(Into::into),
    );
    evaluate(jobs, &programs, &selection).views().to_vec()
}

#[test]
fn test_save_report() {
    let dir = tempdir().expect("Failed to create temp dir");
    let jobs = vec![job("Backend Developer", "Python, SQL")];
    let views = views(&jobs, "Backend Developer", Some("CS101"));

    let path = export::save_report(&views, dir.path())
        .expect("レポート保存に失敗")
        .expect("レポートが作られていない");

    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("Backend Developer_skills_report.txt")
    );

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, views[0].report());
    assert!(content.contains("Matching Skill: Python"));
    assert!(content.contains("Extra Skill: Leadership"));
}

#[test]
fn test_save_report_multiple_rows() {
    let dir = tempdir().expect("Failed to create temp dir");
    let jobs = vec![job("Backend Developer", "Python"), job("Backend Developer", "Go")];
    let views = views(&jobs, "Backend Developer", None);
    assert_eq!(views.len(), 2);

    let path = export::save_report(&views, dir.path()).unwrap().unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    assert_eq!(content.matches("Job Skills Report").count(), 2);
    assert!(content.contains("\n---\n"));
    assert!(content.find("- Python").unwrap() < content.find("- Go").unwrap());
}

#[test]
fn test_save_report_creates_output_dir() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("reports").join("2026");
    let jobs = vec![job("CI/CD Engineer", "Jenkins")];
    let views = views(&jobs, "CI/CD Engineer", None);

    let path = export::save_report(&views, &output).unwrap().unwrap();
    assert!(path.starts_with(&output));
    assert!(path.exists());
}

#[test]
fn test_save_report_no_rows() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = export::save_report(&[], dir.path()).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_excel_generation() {
    let dir = tempdir().expect("Failed to create temp dir");
    let jobs = vec![job("Backend Developer", "Python, SQL")];
    let views = views(&jobs, "Backend Developer", Some("CS101"));

    let path = excel::generate_excel(&views, dir.path())
        .expect("Excel生成に失敗")
        .expect("Excelが作られていない");

    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("Backend Developer_skills.xlsx")
    );
    let metadata = std::fs::metadata(&path).expect("ファイルメタデータ取得失敗");
    assert!(metadata.len() > 0, "Excelファイルが空");
}
