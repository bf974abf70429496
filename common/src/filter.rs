//! 選択による絞り込み
//!
//! 分野 → 職種 → プログラムの順に選択肢を列挙し、該当行を抽出する。
//! 照合は生の値の完全一致（大文字小文字を区別）。

use crate::normalizer::normalize_token;
use crate::types::{JobColumn, JobRecord, ProgramSkillRecord, SkillToken};
use std::collections::{BTreeSet, HashSet};

/// 分野・職種が一致する行を元の順序で返す
pub fn filter_jobs<'a>(jobs: &'a [JobRecord], field: &str, job_title: &str) -> Vec<&'a JobRecord> {
    jobs.iter()
        .filter(|job| {
            job.field.as_deref() == Some(field) && job.job_title.as_deref() == Some(job_title)
        })
        .collect()
}

/// 列の重複なし・空でない値を辞書順で返す
pub fn list_distinct(jobs: &[JobRecord], column: JobColumn) -> Vec<String> {
    sorted_distinct(jobs.iter().filter_map(|job| column.value(job)))
}

/// 分野内の職種一覧
pub fn list_job_titles(jobs: &[JobRecord], field: &str) -> Vec<String> {
    sorted_distinct(
        jobs.iter()
            .filter(|job| job.field.as_deref() == Some(field))
            .filter_map(|job| job.job_title.as_deref()),
    )
}

/// プログラム一覧
pub fn list_program_units(program_skills: &[ProgramSkillRecord]) -> Vec<String> {
    sorted_distinct(program_skills.iter().filter_map(|r| r.program_unit.as_deref()))
}

/// 選択したプログラムで教えるスキル集合
///
/// 未選択・該当なしは空集合。スキル欄が空の行は無視する。
pub fn filter_program_skills(
    program_skills: &[ProgramSkillRecord],
    program_unit: Option<&str>,
) -> BTreeSet<SkillToken> {
    let Some(program_unit) = program_unit else {
        return BTreeSet::new();
    };

    program_skills
        .iter()
        .filter(|r| r.program_unit.as_deref() == Some(program_unit))
        .filter_map(|r| r.skill.as_deref())
        .map(normalize_token)
        .filter(|token| !token.is_empty())
        .collect()
}

fn sorted_distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let unique: HashSet<&str> = values.filter(|v| !v.is_empty()).collect();
    let mut v: Vec<String> = unique.into_iter().map(str::to_string).collect();
    v.sort();
    v
}
