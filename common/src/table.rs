//! 表形式データの読み込み
//!
//! CSV文字列（またはスプレッドシートから読んだセル列）を `RawTable` にし、
//! 列名で `JobRecord` / `ProgramSkillRecord` に変換する。
//! 列名は前後空白を除去して照合する。

use crate::error::{Error, Result};
use crate::types::{JobRecord, ProgramSkillRecord};

pub const FIELD_COLUMN: &str = "Field";
pub const JOB_TITLE_COLUMN: &str = "Job Title";
pub const TECHNICAL_SKILLS_COLUMN: &str = "Technical skills";
pub const GENERAL_SKILLS_COLUMN: &str = "General Skills";
pub const PROGRAM_UNIT_COLUMN: &str = "Program Unit";
pub const SKILL_COLUMN: &str = "Skill";

/// ヘッダー付きの生テーブル（空セルは `None`）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    /// ヘッダーとセル列から構築する
    ///
    /// ヘッダーは trim され、ヘッダーより短い行は `None` で埋める。
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        let headers: Vec<String> = headers.into_iter().map(|h| h.trim().to_string()).collect();
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                if row.len() < width {
                    row.resize(width, None);
                }
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// CSV文字列から読み込み（1行目はヘッダー）
    pub fn from_csv_str(content: &str) -> Result<Self> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut records = parse_csv(content)?.into_iter();

        let Some(headers) = records.next() else {
            return Ok(Self::default());
        };

        let rows = records
            .map(|record| {
                record
                    .into_iter()
                    .map(|cell| if cell.is_empty() { None } else { Some(cell) })
                    .collect()
            })
            .collect();

        Ok(Self::new(headers, rows))
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 列名から列番号を取得
    pub fn column(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::MissingColumn(name.to_string()))
    }

    /// セル値を取得（範囲外・空セルは `None`）
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column)?.as_deref()
    }

    fn owned_cell(&self, row: usize, column: usize) -> Option<String> {
        self.cell(row, column).map(str::to_string)
    }
}

/// 職種テーブルに変換
pub fn jobs_from_table(table: &RawTable) -> Result<Vec<JobRecord>> {
    let field = table.column(FIELD_COLUMN)?;
    let job_title = table.column(JOB_TITLE_COLUMN)?;
    let technical = table.column(TECHNICAL_SKILLS_COLUMN)?;
    let general = table.column(GENERAL_SKILLS_COLUMN)?;

    Ok((0..table.len())
        .map(|row| JobRecord {
            field: table.owned_cell(row, field),
            job_title: table.owned_cell(row, job_title),
            technical_skills_raw: table.owned_cell(row, technical),
            general_skills_raw: table.owned_cell(row, general),
        })
        .collect())
}

/// プログラム別スキルテーブルに変換
pub fn program_skills_from_table(table: &RawTable) -> Result<Vec<ProgramSkillRecord>> {
    let program_unit = table.column(PROGRAM_UNIT_COLUMN)?;
    let skill = table.column(SKILL_COLUMN)?;

    Ok((0..table.len())
        .map(|row| ProgramSkillRecord {
            program_unit: table.owned_cell(row, program_unit),
            skill: table.owned_cell(row, skill),
        })
        .collect())
}

/// CSVをレコード列に分解する
///
/// ダブルクォート内のカンマ・改行、`""` エスケープ、CRLFに対応。
/// 空行は読み飛ばす。
fn parse_csv(content: &str) -> Result<Vec<Vec<String>>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut field_quoted = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            '"' if field.is_empty() && !field_quoted => {
                in_quotes = true;
                field_quoted = true;
            }
            ',' => {
                record.push(std::mem::take(&mut field));
                field_quoted = false;
            }
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                record.push(std::mem::take(&mut field));
                field_quoted = false;
                push_record(&mut records, std::mem::take(&mut record));
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(Error::Parse("unterminated quoted field".to_string()));
    }

    if !field.is_empty() || field_quoted || !record.is_empty() {
        record.push(field);
        push_record(&mut records, record);
    }

    Ok(records)
}

fn push_record(records: &mut Vec<Vec<String>>, record: Vec<String>) {
    // 空行
    if record.len() == 1 && record[0].is_empty() {
        return;
    }
    records.push(record);
}
