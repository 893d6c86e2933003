//! 電話番号の検証

use crate::rejection::{Rejection, RejectionCode};
use crate::types::Field;

const FORMAT_MESSAGE: &str =
    "電話番号の形式が不正です。半角数字とハイフンのみ、ハイフンを含み、数字のみ/括弧付きは不可です。";

const PARENTHESES: [char; 4] = ['(', ')', '（', '）'];

/// 半角数字とハイフンのみ、ハイフンと数字を1つ以上含み、括弧を含まない
pub fn validate_tel_format(value: &str) -> bool {
    !value.contains(PARENTHESES)
        && value.chars().all(|c| c.is_ascii_digit() || c == '-')
        && value.contains('-')
        && value.chars().any(|c| c.is_ascii_digit())
}

fn failure_detail(value: &str) -> &'static str {
    if value.contains(PARENTHESES) {
        "括弧を含みます"
    } else if !value.chars().all(|c| c.is_ascii_digit() || c == '-') {
        "数字とハイフン以外の文字を含みます"
    } else if !value.contains('-') {
        "ハイフンがありません"
    } else {
        "数字がありません"
    }
}

/// 電話番号を検証する（未設定は常に受理）
pub fn validate_tel(normalized: Option<String>) -> Result<Option<String>, Rejection> {
    match normalized {
        None => Ok(None),
        Some(value) if validate_tel_format(&value) => Ok(Some(value)),
        Some(value) => Err(Rejection::new(
            Field::Tel,
            RejectionCode::InvalidTelFormat,
            format!("{}（{}: {}）", FORMAT_MESSAGE, failure_detail(&value), value),
        )),
    }
}
