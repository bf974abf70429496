//! スプレッドシート（xlsx/xls/ods）の読み込み
//!
//! 先頭シートの1行目をヘッダーとして `RawTable` に変換する。

use crate::error::{Result, SkillGapError};
use calamine::{open_workbook_auto, Data, Reader};
use skill_gap_common::RawTable;
use std::path::Path;

pub fn read_first_sheet(path: &Path) -> Result<RawTable> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| SkillGapError::Spreadsheet(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SkillGapError::Spreadsheet(format!("{}: シートがありません", path.display())))?
        .map_err(|e| SkillGapError::Spreadsheet(format!("{}: {}", path.display(), e)))?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(RawTable::default());
    };

    let headers = header_row.iter().map(|cell| cell_text(cell).unwrap_or_default()).collect();
    let body = rows
        .map(|row| row.iter().map(cell_text).collect())
        .filter(|row: &Vec<Option<String>>| row.iter().any(Option::is_some))
        .collect();

    Ok(RawTable::new(headers, body))
}

/// セルを文字列に（空セルは `None`）
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        other => Some(other.to_string()),
    }
}
