//! 検証エラー（棄却）の型定義
//!
//! 全て入力値の形式エラーであり、再試行で解消するものではない。

use crate::types::Field;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 機械可読なエラーコード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectionCode {
    InvalidCompanyFormat,
    InvalidTelFormat,
    InvalidAddressFormat,
}

impl RejectionCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionCode::InvalidCompanyFormat => "INVALID_COMPANY_FORMAT",
            RejectionCode::InvalidTelFormat => "INVALID_TEL_FORMAT",
            RejectionCode::InvalidAddressFormat => "INVALID_ADDRESS_FORMAT",
        }
    }
}

impl std::fmt::Display for RejectionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 1フィールドの棄却理由
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{field}: {message} ({code})")]
pub struct Rejection {
    pub field: Field,
    pub code: RejectionCode,
    pub message: String,
}

impl Rejection {
    pub fn new(field: Field, code: RejectionCode, message: impl Into<String>) -> Self {
        Self {
            field,
            code,
            message: message.into(),
        }
    }

    /// 必須フィールドが未設定
    pub(crate) fn missing(field: Field, code: RejectionCode) -> Self {
        Self::new(field, code, format!("{}がありません。", field))
    }
}

/// 全フィールドの棄却理由（宣言順）
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{}", summarize(.rejections))]
pub struct RejectionReport {
    pub rejections: Vec<Rejection>,
}

impl RejectionReport {
    /// 最初の棄却理由（fail-fast時に返るものと同じ）
    pub fn first(&self) -> Option<&Rejection> {
        self.rejections.first()
    }

    pub fn fields(&self) -> Vec<Field> {
        self.rejections.iter().map(|r| r.field).collect()
    }
}

impl From<Rejection> for RejectionReport {
    fn from(rejection: Rejection) -> Self {
        Self {
            rejections: vec![rejection],
        }
    }
}

fn summarize(rejections: &[Rejection]) -> String {
    let codes = rejections
        .iter()
        .map(|r| r.code.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}件のフィールドが不正です: {}", rejections.len(), codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_serde() {
        let json = serde_json::to_string(&RejectionCode::InvalidTelFormat).unwrap();
        assert_eq!(json, "\"INVALID_TEL_FORMAT\"");
        assert_eq!(RejectionCode::InvalidTelFormat.as_str(), "INVALID_TEL_FORMAT");
    }

    #[test]
    fn test_rejection_display() {
        let rejection = Rejection::new(
            Field::Address,
            RejectionCode::InvalidAddressFormat,
            "住所の形式が不正です。",
        );
        assert_eq!(
            format!("{}", rejection),
            "住所: 住所の形式が不正です。 (INVALID_ADDRESS_FORMAT)"
        );
    }

    #[test]
    fn test_rejection_missing_message() {
        let rejection = Rejection::missing(Field::Company, RejectionCode::InvalidCompanyFormat);
        assert_eq!(rejection.message, "会社名がありません。");
    }

    #[test]
    fn test_report_display_and_first() {
        let report = RejectionReport {
            rejections: vec![
                Rejection::new(Field::Company, RejectionCode::InvalidCompanyFormat, "a"),
                Rejection::new(Field::Address, RejectionCode::InvalidAddressFormat, "b"),
            ],
        };
        assert_eq!(report.first().map(|r| r.field), Some(Field::Company));
        assert_eq!(report.fields(), vec![Field::Company, Field::Address]);
        assert_eq!(
            format!("{}", report),
            "2件のフィールドが不正です: INVALID_COMPANY_FORMAT, INVALID_ADDRESS_FORMAT"
        );
    }
}
