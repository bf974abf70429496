//! スキル比較の型定義
//!
//! CLIとライブラリで共有される型:
//! - JobRecord / ProgramSkillRecord: 入力テーブルの1行
//! - SkillToken: 正規化済みスキル
//! - Selection: 分野 → 職種 → プログラムの選択状態
//! - ComparisonResult: 比較結果（一致・不足・追加）

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// 正規化済みスキル（前後空白除去・小文字化）
///
/// 正規化は冪等: `SkillToken::new(t.as_str()) == t`。
/// 順序は正規化後の文字列の辞書順。
/// 逆シリアライズ時も `new` を通す。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SkillToken(String);

impl SkillToken {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SkillToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SkillToken {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for SkillToken {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<SkillToken> for String {
    fn from(token: SkillToken) -> Self {
        token.0
    }
}

/// 職種テーブルの1行
///
/// 空セルは `None`。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobRecord {
    pub field: Option<String>,
    pub job_title: Option<String>,
    pub technical_skills_raw: Option<String>,
    pub general_skills_raw: Option<String>,
}

/// プログラム別スキルテーブルの1行
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramSkillRecord {
    pub program_unit: Option<String>,
    pub skill: Option<String>,
}

/// 職種テーブルの列（選択肢の列挙に使用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobColumn {
    Field,
    JobTitle,
}

impl JobColumn {
    pub fn value<'a>(&self, record: &'a JobRecord) -> Option<&'a str> {
        match self {
            JobColumn::Field => record.field.as_deref(),
            JobColumn::JobTitle => record.job_title.as_deref(),
        }
    }
}

/// ユーザーの選択状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub field: Option<String>,
    pub job_title: Option<String>,
    pub program_unit: Option<String>,
}

impl Selection {
    pub fn new(
        field: Option<String>,
        job_title: Option<String>,
        program_unit: Option<String>,
    ) -> Self {
        Self { field, job_title, program_unit }
    }

    /// 分野と職種が揃っていれば比較可能
    pub fn job_key(&self) -> Option<(&str, &str)> {
        match (self.field.as_deref(), self.job_title.as_deref()) {
            (Some(field), Some(job_title)) => Some((field, job_title)),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.job_key().is_some()
    }
}

/// 比較結果
///
/// - matched = required ∩ taught
/// - missing = required − taught
/// - extra   = taught − required
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    pub matched: BTreeSet<SkillToken>,
    pub missing: BTreeSet<SkillToken>,
    pub extra: BTreeSet<SkillToken>,
}
