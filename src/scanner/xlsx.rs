//! Excel（.xlsx）からの候補レコード読み込み
//!
//! 先頭シートの1行目をヘッダーとして扱う。ヘッダーは英語のキー名
//! （company, tel …）か日本語ラベル（会社名, 電話番号 …）。

use crate::error::{CompanyInfoError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use company_info_common::{CandidateRecord, Field};
use std::path::Path;

/// セル値を文字列に変換（空セルは `None`）
fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        // 整数値の浮動小数点は小数部を付けない
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => Some(format!("{}", *f as i64)),
        other => Some(other.to_string()),
    }
}

/// 行番号（シート上の1始まり）付きで候補レコードを読み込む
pub fn read_candidates(path: &Path) -> Result<Vec<(usize, CandidateRecord)>> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| CompanyInfoError::ExcelRead(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| CompanyInfoError::ExcelRead(format!("{}: シートがありません", path.display())))?
        .map_err(|e| CompanyInfoError::ExcelRead(format!("{}: {}", path.display(), e)))?;

    let mut rows = range.rows();
    let header = match rows.next() {
        Some(header) => header,
        None => return Ok(Vec::new()),
    };

    let columns: Vec<Option<Field>> = header
        .iter()
        .map(|cell| cell_to_string(cell).and_then(|label| Field::from_label(&label)))
        .collect();

    if columns.iter().all(Option::is_none) {
        return Err(CompanyInfoError::ExcelRead(format!(
            "{}: ヘッダー行に認識できる列がありません",
            path.display()
        )));
    }

    let mut candidates = Vec::new();
    for (idx, row) in rows.enumerate() {
        let mut candidate = CandidateRecord::default();
        for (cell, field) in row.iter().zip(&columns) {
            if let Some(field) = field {
                candidate.set(*field, cell_to_string(cell));
            }
        }

        // 空行はスキップ
        if !candidate.is_empty() {
            candidates.push((idx + 2, candidate));
        }
    }

    Ok(candidates)
}
