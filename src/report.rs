//! 検証レポート（JSON）
//!
//! レコードごとに `{ success, data, error }` の形で結果を出力する。

use crate::batch::RecordOutcome;
use crate::error::Result;
use company_info_common::{ErrorMode, Field, Rejection, RejectionCode, ValidatedRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 棄却理由（出力用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub field: Field,
    pub code: RejectionCode,
    pub message: String,
}

impl From<&Rejection> for ErrorDetail {
    fn from(rejection: &Rejection) -> Self {
        Self {
            field: rejection.field,
            code: rejection.code,
            message: rejection.message.clone(),
        }
    }
}

/// 1件分の出力
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeEnvelope {
    pub source: String,
    pub fingerprint: String,
    pub success: bool,
    pub data: Option<ValidatedRecord>,
    /// 最初の棄却理由
    pub error: Option<ErrorDetail>,
    /// 全ての棄却理由（accumulate時に2件以上になりうる）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorDetail>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl From<&RecordOutcome> for OutcomeEnvelope {
    fn from(outcome: &RecordOutcome) -> Self {
        let errors: Vec<ErrorDetail> = outcome.rejections.iter().map(ErrorDetail::from).collect();
        Self {
            source: outcome.source.clone(),
            fingerprint: outcome.fingerprint.clone(),
            success: outcome.is_accepted(),
            data: outcome.record.clone(),
            error: errors.first().cloned(),
            errors,
            warnings: outcome.warnings.iter().map(|w| w.to_string()).collect(),
        }
    }
}

/// 検証レポート
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// 生成日時（RFC3339）
    pub generated_at: String,
    pub error_mode: ErrorMode,
    pub total: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub outcomes: Vec<OutcomeEnvelope>,
}

impl ValidationReport {
    pub fn build(outcomes: &[RecordOutcome], error_mode: ErrorMode) -> Self {
        let accepted = outcomes.iter().filter(|o| o.is_accepted()).count();
        Self {
            generated_at: chrono::Local::now().to_rfc3339(),
            error_mode,
            total: outcomes.len(),
            accepted,
            rejected: outcomes.len() - accepted,
            outcomes: outcomes.iter().map(OutcomeEnvelope::from).collect(),
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// 棄却理由の集計（コード → 件数、コード順）
    pub fn rejection_counts(&self) -> Vec<(RejectionCode, usize)> {
        let mut counts: std::collections::BTreeMap<&'static str, (RejectionCode, usize)> =
            std::collections::BTreeMap::new();
        for detail in self.outcomes.iter().flat_map(|o| o.errors.iter()) {
            counts.entry(detail.code.as_str()).or_insert((detail.code, 0)).1 += 1;
        }
        counts.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepted_outcome() -> RecordOutcome {
        RecordOutcome {
            source: "a.json".to_string(),
            fingerprint: "abc".to_string(),
            record: Some(ValidatedRecord {
                company: "株式会社テスト".to_string(),
                tel: None,
                address: "東京都渋谷区1-1-1".to_string(),
                first_name: None,
                url: None,
                contact_url: None,
                business: None,
                genre: None,
            }),
            rejections: vec![],
            warnings: vec![],
        }
    }

    fn rejected_outcome() -> RecordOutcome {
        RecordOutcome {
            source: "b.json".to_string(),
            fingerprint: "def".to_string(),
            record: None,
            rejections: vec![
                Rejection::new(Field::Company, RejectionCode::InvalidCompanyFormat, "会社名"),
                Rejection::new(Field::Address, RejectionCode::InvalidAddressFormat, "住所"),
            ],
            warnings: vec![],
        }
    }

    #[test]
    fn test_build_counts() {
        let report = ValidationReport::build(
            &[accepted_outcome(), rejected_outcome()],
            ErrorMode::Accumulate,
        );
        assert_eq!(report.total, 2);
        assert_eq!(report.accepted, 1);
        assert_eq!(report.rejected, 1);
        assert_eq!(
            report.rejection_counts(),
            vec![
                (RejectionCode::InvalidAddressFormat, 1),
                (RejectionCode::InvalidCompanyFormat, 1),
            ]
        );
    }

    #[test]
    fn test_envelope_shape() {
        let envelope = OutcomeEnvelope::from(&rejected_outcome());
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.error.as_ref().map(|e| e.field), Some(Field::Company));
        assert_eq!(envelope.errors.len(), 2);

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["error"]["code"], "INVALID_COMPANY_FORMAT");
        assert_eq!(json["error"]["field"], "company");
    }

    #[test]
    fn test_envelope_success_omits_errors() {
        let json = serde_json::to_value(OutcomeEnvelope::from(&accepted_outcome())).unwrap();
        assert_eq!(json["success"], true);
        assert!(json["error"].is_null());
        assert!(json.get("errors").is_none());
        assert_eq!(json["data"]["company"], "株式会社テスト");
    }
}
