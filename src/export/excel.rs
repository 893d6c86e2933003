//! Excel出力（CLI版）
//!
//! 共通ライブラリの excel_core でバッファを作り、ファイルに保存する

use crate::batch::RecordOutcome;
use crate::error::{CompanyInfoError, Result};
use company_info_common::export::excel_core::generate_excel_buffer;
use std::path::Path;

pub fn generate_excel(outcomes: &[RecordOutcome], output_path: &Path) -> Result<()> {
    let buffer = generate_excel_buffer(outcomes).map_err(CompanyInfoError::ExcelGeneration)?;

    std::fs::write(output_path, buffer)
        .map_err(|e| CompanyInfoError::ExcelGeneration(format!("Excel保存エラー: {}", e)))?;

    Ok(())
}
