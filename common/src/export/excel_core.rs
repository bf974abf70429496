//! Excel生成（共通ライブラリ）
//!
//! 職種ごとに1シート、スキルと比較ステータスを1行ずつ書き出す。
//! 対話表示と同じく不足スキルも含める。

use crate::error::{Error, Result};
use crate::normalizer::title_case;
use crate::report::NOT_SELECTED;
use crate::types::SkillToken;
use crate::view::JobSkillView;
use rust_xlsxwriter::*;

const SKILL_COL_WIDTH: f64 = 32.0;
const CATEGORY_COL_WIDTH: f64 = 14.0;
const STATUS_COL_WIDTH: f64 = 12.0;

/// 1行分（スキル・区分・ステータス）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRow {
    pub skill: String,
    pub category: &'static str,
    pub status: &'static str,
}

/// シートに書き出す行を組み立てる
///
/// 比較がない場合のステータスは "-"。
pub fn skill_rows(view: &JobSkillView) -> Vec<SkillRow> {
    let status_of = |skill: &SkillToken| match &view.comparison {
        Some(c) if c.matched.contains(skill) => "Matched",
        Some(_) => "Missing",
        None => "-",
    };

    let mut rows: Vec<SkillRow> = view
        .technical
        .iter()
        .map(|s| (s, "Technical"))
        .chain(view.general.iter().map(|s| (s, "General")))
        .map(|(skill, category)| SkillRow {
            skill: title_case(skill),
            category,
            status: status_of(skill),
        })
        .collect();

    if let Some(comparison) = &view.comparison {
        rows.extend(comparison.extra.iter().map(|skill| SkillRow {
            skill: title_case(skill),
            category: "Program",
            status: "Extra",
        }));
    }

    rows
}

/// Excelをバッファに生成
pub fn generate_excel_buffer(views: &[JobSkillView]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let label_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xAAAAAA));

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(0x4472C4))
        .set_align(FormatAlign::Center);

    let value_format = Format::new()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    for (index, view) in views.iter().enumerate() {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(format!("{}", index + 1))
            .map_err(|e| Error::Export(format!("シート名設定エラー: {}", e)))?;

        for (col, width) in [SKILL_COL_WIDTH, CATEGORY_COL_WIDTH, STATUS_COL_WIDTH].into_iter().enumerate() {
            worksheet
                .set_column_width(col as u16, width)
                .map_err(|e| Error::Export(format!("列幅設定エラー: {}", e)))?;
        }

        let header = [
            ("Field", view.field.as_str()),
            ("Job Title", view.job_title.as_str()),
            ("Program Unit", view.program_unit.as_deref().unwrap_or(NOT_SELECTED)),
        ];
        for (row, (label, value)) in header.iter().enumerate() {
            let row = row as u32;
            worksheet
                .write_string_with_format(row, 0, *label, &label_format)
                .map_err(|e| Error::Export(format!("ラベル書き込みエラー: {}", e)))?;
            worksheet
                .write_string_with_format(row, 1, *value, &value_format)
                .map_err(|e| Error::Export(format!("値書き込みエラー: {}", e)))?;
        }

        let table_start = header.len() as u32 + 1;
        for (col, title) in ["Skill", "Category", "Status"].iter().enumerate() {
            worksheet
                .write_string_with_format(table_start, col as u16, *title, &header_format)
                .map_err(|e| Error::Export(format!("見出し書き込みエラー: {}", e)))?;
        }

        for (offset, row) in skill_rows(view).iter().enumerate() {
            let r = table_start + 1 + offset as u32;
            for (col, value) in [row.skill.as_str(), row.category, row.status].iter().enumerate() {
                worksheet
                    .write_string_with_format(r, col as u16, *value, &value_format)
                    .map_err(|e| Error::Export(format!("値書き込みエラー: {}", e)))?;
            }
        }
    }

    if views.is_empty() {
        workbook.add_worksheet();
    }

    workbook
        .save_to_buffer()
        .map_err(|e| Error::Export(format!("Excel保存エラー: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{JobRecord, ProgramSkillRecord, Selection};
    use crate::view::evaluate;

    fn view(program: Option<&str>) -> JobSkillView {
        let jobs = vec![JobRecord {
            field: Some("Engineering".into()),
            job_title: Some("Backend Developer".into()),
            technical_skills_raw: Some("Python, SQL".into()),
            general_skills_raw: Some("Teamwork".into()),
        }];
        let programs = vec![
            ProgramSkillRecord { program_unit: Some("CS101".into()), skill: Some("Python".into()) },
            ProgramSkillRecord { program_unit: Some("CS101".into()), skill: Some("Ethics".into()) },
        ];
        let selection = Selection::new(
            Some("Engineering".into()),
            Some("Backend Developer".into()),
            program.map(Into::into),
        );
        evaluate(&jobs, &programs, &selection).views()[0].clone()
    }

    #[test]
    fn test_skill_rows_with_comparison() {
        let rows = skill_rows(&view(Some("CS101")));
        let summary: Vec<(&str, &str, &str)> = rows
            .iter()
            .map(|r| (r.skill.as_str(), r.category, r.status))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Python", "Technical", "Matched"),
                ("Sql", "Technical", "Missing"),
                ("Teamwork", "General", "Missing"),
                ("Ethics", "Program", "Extra"),
            ]
        );
    }

    #[test]
    fn test_skill_rows_without_comparison() {
        let rows = skill_rows(&view(None));
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.status == "-"));
    }

    #[test]
    fn test_generate_excel_buffer() {
        let buffer = generate_excel_buffer(&[view(Some("CS101")), view(None)]).unwrap();
        // xlsx は zip
        assert!(buffer.starts_with(b"PK"));
    }

    #[test]
    fn test_generate_excel_buffer_empty() {
        let buffer = generate_excel_buffer(&[]).unwrap();
        assert!(!buffer.is_empty());
    }
}
