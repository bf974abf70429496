//! 対話式の選択モジュール
//!
//! 分野 → 職種 → プログラムの順に選択し、結果を表示してレポート保存を確認する。
//! 先頭の「--Select ...--」は未選択（`None`）として扱う。

use crate::display::render_evaluation;
use crate::error::{Result, SkillGapError};
use crate::export;
use crate::loader::Dataset;
use dialoguer::{Confirm, Select};
use skill_gap_common::{evaluate, list_distinct, list_job_titles, list_program_units, JobColumn, Selection};
use std::path::Path;
use tracing::debug;

pub const SELECT_FIELD: &str = "--Select field--";
pub const SELECT_JOB: &str = "--Select job--";
pub const SELECT_PROGRAM: &str = "--Select program unit--";

/// 先頭に未選択項目を付けた選択肢
pub fn with_placeholder(placeholder: &str, options: &[String]) -> Vec<String> {
    std::iter::once(placeholder.to_string())
        .chain(options.iter().cloned())
        .collect()
}

/// 選択番号を値に変換（0番は未選択）
pub fn choice_at(options: &[String], index: usize) -> Option<String> {
    match index {
        0 => None,
        n => options.get(n - 1).cloned(),
    }
}

fn prompt_choice(prompt: &str, placeholder: &str, options: &[String]) -> Result<Option<String>> {
    let items = with_placeholder(placeholder, options);
    let index = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| SkillGapError::Prompt(e.to_string()))?;
    Ok(choice_at(options, index))
}

/// 対話式で選択する
pub fn select_interactive(dataset: &Dataset) -> Result<Selection> {
    let mut selection = Selection::default();

    let fields = list_distinct(&dataset.jobs, JobColumn::Field);
    selection.field = prompt_choice("Select a field", SELECT_FIELD, &fields)?;
    let Some(field) = selection.field.clone() else {
        return Ok(selection);
    };

    let titles = list_job_titles(&dataset.jobs, &field);
    selection.job_title = prompt_choice("Select a job title", SELECT_JOB, &titles)?;
    if selection.job_title.is_none() {
        return Ok(selection);
    }

    let units = list_program_units(&dataset.program_skills);
    selection.program_unit = prompt_choice("Select a program unit", SELECT_PROGRAM, &units)?;

    debug!(?selection, "選択完了");
    Ok(selection)
}

/// 選択 → 表示 → レポート保存
pub fn run_interactive(dataset: &Dataset, output_dir: &Path) -> Result<()> {
    let selection = select_interactive(dataset)?;
    let evaluation = evaluate(&dataset.jobs, &dataset.program_skills, &selection);

    println!();
    print!("{}", render_evaluation(&evaluation));

    let views = evaluation.views();
    if views.is_empty() {
        return Ok(());
    }

    let save = Confirm::new()
        .with_prompt("レポートを保存しますか?")
        .default(false)
        .interact()
        .map_err(|e| SkillGapError::Prompt(e.to_string()))?;

    if save {
        if let Some(path) = export::save_report(views, output_dir)? {
            println!("✔ レポートを保存: {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["CS101".to_string(), "CS102".to_string()]
    }

    #[test]
    fn test_with_placeholder() {
        let items = with_placeholder(SELECT_PROGRAM, &options());
        assert_eq!(items, vec![SELECT_PROGRAM, "CS101", "CS102"]);
    }

    #[test]
    fn test_choice_at() {
        assert_eq!(choice_at(&options(), 0), None);
        assert_eq!(choice_at(&options(), 1).as_deref(), Some("CS101"));
        assert_eq!(choice_at(&options(), 2).as_deref(), Some("CS102"));
        assert_eq!(choice_at(&options(), 3), None);
    }

    #[test]
    fn test_placeholder_text_is_not_a_value() {
        // 実データに同名の値があっても番号で区別される
        let options = vec![SELECT_PROGRAM.to_string()];
        assert_eq!(choice_at(&options, 0), None);
        assert_eq!(choice_at(&options, 1).as_deref(), Some(SELECT_PROGRAM));
    }
}
