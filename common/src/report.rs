//! テキストレポート生成
//!
//! ダウンロード用のプレーンテキストを組み立てる（I/Oなし）。
//! 不足スキルはレポートに含めない。レポートは一致・追加スキルの確認用で、
//! 不足スキルは対話表示（view）側でのみ表示する。

use crate::normalizer::title_case;
use crate::types::{ComparisonResult, SkillToken};
use std::fmt::Write;

/// レポートのMIMEタイプ
pub const REPORT_MIME_TYPE: &str = "text/plain";

/// プログラム未選択時の表記
pub const NOT_SELECTED: &str = "Not selected";

/// 保存時のファイル名
pub fn report_file_name(job_title: &str) -> String {
    format!("{}_skills_report.txt", job_title)
}

/// レポート本文を生成する
pub fn compose_report(
    field: &str,
    job_title: &str,
    program_unit: Option<&str>,
    tech: &[SkillToken],
    general: &[SkillToken],
    comparison: Option<&ComparisonResult>,
) -> String {
    let mut out = String::new();

    // String への書き込みは失敗しない
    let _ = writeln!(out, "Job Skills Report");
    let _ = writeln!(out, "=================");
    let _ = writeln!(out, "Field: {}", field);
    let _ = writeln!(out, "Job Title: {}", job_title);
    let _ = writeln!(out, "Program Unit: {}", program_unit.unwrap_or(NOT_SELECTED));
    out.push('\n');

    write_skill_list(&mut out, "Required Technical Skills:", tech);
    out.push('\n');
    write_skill_list(&mut out, "Required General Skills:", general);

    if let Some(comparison) = comparison {
        out.push('\n');
        let _ = writeln!(out, "Program Skills Comparison:");
        for skill in &comparison.matched {
            let _ = writeln!(out, "Matching Skill: {}", title_case(skill));
        }
        for skill in &comparison.extra {
            let _ = writeln!(out, "Extra Skill: {}", title_case(skill));
        }
    }

    out
}

fn write_skill_list(out: &mut String, heading: &str, skills: &[SkillToken]) {
    let _ = writeln!(out, "{}", heading);
    for skill in skills {
        let _ = writeln!(out, "- {}", title_case(skill));
    }
}
