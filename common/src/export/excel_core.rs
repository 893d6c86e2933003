//! Excel生成（共通ライブラリ）
//!
//! 検証結果を2シート構成のExcelにする
//! - 「検証済み」: 受理したレコード（1行1件）
//! - 「棄却」: 棄却理由（1行1フィールド）

use crate::rejection::Rejection;
use crate::types::{Field, ValidatedRecord};
use rust_xlsxwriter::*;

const ACCEPTED_SHEET: &str = "検証済み";
const REJECTED_SHEET: &str = "棄却";

/// 検証結果1件分のデータ（CLI側の結果型ごとに実装する）
pub trait OutcomeRow {
    /// 入力元（ファイル名・行番号など）
    fn source(&self) -> &str;
    /// 受理した場合のレコード
    fn record(&self) -> Option<&ValidatedRecord>;
    /// 棄却理由（受理した場合は空）
    fn rejections(&self) -> &[Rejection];
}

/// 列幅（Excel単位）
fn column_width(field: Field) -> f64 {
    match field {
        Field::Company | Field::Address => 36.0,
        Field::Url | Field::ContactUrl | Field::Genre => 40.0,
        Field::Tel | Field::FirstName => 16.0,
        Field::Business => 20.0,
    }
}

/// Excelをバッファに生成
///
/// # Arguments
/// * `outcomes` - 検証結果（OutcomeRowトレイトを実装した型）
pub fn generate_excel_buffer<T: OutcomeRow>(outcomes: &[T]) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_size(10.0)
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let value_format = Format::new()
        .set_font_size(11.0)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    // 検証済みシート
    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(ACCEPTED_SHEET)
            .map_err(|e| format!("シート名設定エラー: {}", e))?;

        worksheet.write_string_with_format(0, 0, "入力元", &header_format)
            .map_err(|e| format!("ヘッダー書き込みエラー: {}", e))?;
        worksheet.set_column_width(0, 24.0)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;

        for (i, field) in Field::ALL.iter().enumerate() {
            let col = (i + 1) as u16;
            worksheet.write_string_with_format(0, col, field.to_string(), &header_format)
                .map_err(|e| format!("ヘッダー書き込みエラー: {}", e))?;
            worksheet.set_column_width(col, column_width(*field))
                .map_err(|e| format!("列幅設定エラー: {}", e))?;
        }
        worksheet.set_freeze_panes(1, 0)
            .map_err(|e| format!("ウィンドウ枠固定エラー: {}", e))?;

        let accepted = outcomes
            .iter()
            .filter_map(|o| o.record().map(|r| (o.source(), r)));

        for (row_idx, (source, record)) in accepted.enumerate() {
            let row = (row_idx + 1) as u32;
            worksheet.write_string_with_format(row, 0, source, &value_format)
                .map_err(|e| format!("値書き込みエラー: {}", e))?;

            for (i, field) in Field::ALL.iter().enumerate() {
                let value = record.get(*field).unwrap_or("");
                worksheet.write_string_with_format(row, (i + 1) as u16, value, &value_format)
                    .map_err(|e| format!("値書き込みエラー: {}", e))?;
            }
        }
    }

    // 棄却シート
    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(REJECTED_SHEET)
            .map_err(|e| format!("シート名設定エラー: {}", e))?;

        let headers = [("入力元", 24.0), ("フィールド", 14.0), ("コード", 28.0), ("理由", 80.0)];
        for (col, (label, width)) in headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *label, &header_format)
                .map_err(|e| format!("ヘッダー書き込みエラー: {}", e))?;
            worksheet.set_column_width(col as u16, *width)
                .map_err(|e| format!("列幅設定エラー: {}", e))?;
        }
        worksheet.set_freeze_panes(1, 0)
            .map_err(|e| format!("ウィンドウ枠固定エラー: {}", e))?;

        let rejected = outcomes
            .iter()
            .flat_map(|o| o.rejections().iter().map(move |r| (o.source(), r)));

        for (row_idx, (source, rejection)) in rejected.enumerate() {
            let row = (row_idx + 1) as u32;
            let cells = [
                source.to_string(),
                rejection.field.to_string(),
                rejection.code.to_string(),
                rejection.message.clone(),
            ];
            for (col, value) in cells.iter().enumerate() {
                worksheet.write_string_with_format(row, col as u16, value, &value_format)
                    .map_err(|e| format!("値書き込みエラー: {}", e))?;
            }
        }
    }

    // バッファに書き出し
    workbook.save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}
