//! 選択の評価と対話表示
//!
//! 選択ごとに 絞り込み → 正規化 → 比較 を1回通し、職種行ごとの結果を返す。
//! 表示には不足スキルを含める（レポートには含めない）。

use crate::comparator::compare;
use crate::filter::{filter_jobs, filter_program_skills};
use crate::normalizer::{normalize, title_case};
use crate::report::compose_report;
use crate::types::{ComparisonResult, JobRecord, ProgramSkillRecord, Selection, SkillToken};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::Write;

/// 職種1行分の表示データ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSkillView {
    pub field: String,
    pub job_title: String,
    pub program_unit: Option<String>,
    pub technical: Vec<SkillToken>,
    pub general: Vec<SkillToken>,
    pub comparison: Option<ComparisonResult>,
}

impl JobSkillView {
    /// ダウンロード用レポート
    pub fn report(&self) -> String {
        compose_report(
            &self.field,
            &self.job_title,
            self.program_unit.as_deref(),
            &self.technical,
            &self.general,
            self.comparison.as_ref(),
        )
    }
}

/// 選択の評価結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "jobs", rename_all = "camelCase")]
pub enum Evaluation {
    /// 分野または職種が未選択
    Incomplete,
    /// 該当する職種行なし
    NoMatch,
    /// 該当行（元の順序）
    Matches(Vec<JobSkillView>),
}

impl Evaluation {
    pub fn views(&self) -> &[JobSkillView] {
        match self {
            Evaluation::Matches(views) => views,
            _ => &[],
        }
    }
}

/// 選択を評価する
///
/// プログラム未選択なら比較は行わない。
pub fn evaluate(
    jobs: &[JobRecord],
    program_skills: &[ProgramSkillRecord],
    selection: &Selection,
) -> Evaluation {
    let Some((field, job_title)) = selection.job_key() else {
        return Evaluation::Incomplete;
    };

    let matches = filter_jobs(jobs, field, job_title);
    if matches.is_empty() {
        return Evaluation::NoMatch;
    }

    let program_unit = selection.program_unit.as_deref();
    let taught: Option<BTreeSet<SkillToken>> =
        program_unit.map(|unit| filter_program_skills(program_skills, Some(unit)));

    let views = matches
        .into_iter()
        .map(|job| {
            let technical = normalize(job.technical_skills_raw.as_deref());
            let general = normalize(job.general_skills_raw.as_deref());
            let comparison = taught
                .as_ref()
                .map(|taught| compare(&technical, &general, taught));

            JobSkillView {
                field: field.to_string(),
                job_title: job_title.to_string(),
                program_unit: program_unit.map(str::to_string),
                technical,
                general,
                comparison,
            }
        })
        .collect();

    Evaluation::Matches(views)
}

/// 端末表示用テキスト（不足スキルを含む）
pub fn render_view(view: &JobSkillView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Skills for: {} in {}", view.job_title, view.field);
    out.push('\n');
    write_list(&mut out, "Technical Skills:", view.technical.iter());
    write_list(&mut out, "General Skills:", view.general.iter());

    // プログラム未選択の案内は呼び出し側で1回だけ出す
    if let Some(comparison) = &view.comparison {
        let _ = writeln!(
            out,
            "Program Skills Comparison ({})",
            view.program_unit.as_deref().unwrap_or_default()
        );
        write_list(&mut out, "Matching Skills:", comparison.matched.iter());
        write_list(&mut out, "Missing Skills (Required but not taught):", comparison.missing.iter());
        write_list(&mut out, "Extra Skills (Taught but not required):", comparison.extra.iter());
    }

    out
}

fn write_list<'a>(out: &mut String, heading: &str, skills: impl ExactSizeIterator<Item = &'a SkillToken>) {
    let _ = writeln!(out, "{}", heading);
    if skills.len() == 0 {
        let _ = writeln!(out, "  None");
    }
    for skill in skills {
        let _ = writeln!(out, "  - {}", title_case(skill));
    }
    out.push('\n');
}
