//! レコード検証パイプライン
//!
//! フィールドごとに「正規化 → 検証」を行い、全て通過した場合のみ
//! `ValidatedRecord` を構築する。
//!
//! ## 検証順（宣言順）
//! 1. 会社名（必須）
//! 2. 電話番号（任意、値があれば形式を検証）
//! 3. 住所（必須）
//! 4. 担当者名（整形のみ）
//! 5. 問い合わせURL（整形のみ）
//!
//! URL・業種・事業内容はそのまま通す。

use crate::formatter::{format_contact_url, format_first_name};
use crate::normalizer::{normalize_address, normalize_company_name, normalize_tel_number};
use crate::rejection::{Rejection, RejectionCode, RejectionReport};
use crate::types::{CandidateRecord, Field, ValidatedRecord};
use crate::validator::{validate_address, validate_company, validate_tel};
use serde::{Deserialize, Serialize};

/// エラーの返し方
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMode {
    /// 最初の不正フィールドで打ち切る
    #[default]
    FailFast,
    /// 全フィールドを検証して不正なものを全て返す
    Accumulate,
}

impl std::str::FromStr for ErrorMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "fail_fast" | "failfast" => Ok(ErrorMode::FailFast),
            "accumulate" | "all" => Ok(ErrorMode::Accumulate),
            _ => Err(crate::Error::Config(format!(
                "不明なエラーモード: {} (fail_fast/accumulate)",
                s
            ))),
        }
    }
}

impl std::fmt::Display for ErrorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorMode::FailFast => write!(f, "fail_fast"),
            ErrorMode::Accumulate => write!(f, "accumulate"),
        }
    }
}

fn company_stage(candidate: &CandidateRecord) -> Result<String, Rejection> {
    let raw = candidate
        .company
        .as_deref()
        .ok_or_else(|| Rejection::missing(Field::Company, RejectionCode::InvalidCompanyFormat))?;
    validate_company(normalize_company_name(raw))
}

fn tel_stage(candidate: &CandidateRecord) -> Result<Option<String>, Rejection> {
    // 空白のみの値は未設定と同じ扱い
    let normalized = candidate
        .tel
        .as_deref()
        .map(normalize_tel_number)
        .filter(|tel| !tel.is_empty());
    validate_tel(normalized)
}

fn address_stage(candidate: &CandidateRecord) -> Result<String, Rejection> {
    let raw = candidate
        .address
        .as_deref()
        .ok_or_else(|| Rejection::missing(Field::Address, RejectionCode::InvalidAddressFormat))?;
    validate_address(normalize_address(raw))
}

fn assemble(
    candidate: &CandidateRecord,
    company: String,
    tel: Option<String>,
    address: String,
) -> ValidatedRecord {
    ValidatedRecord {
        company,
        tel,
        address,
        first_name: format_first_name(candidate.first_name.as_deref()),
        url: candidate.url.clone(),
        contact_url: format_contact_url(candidate.contact_url.as_deref()),
        business: candidate.business.clone(),
        genre: candidate.genre.clone(),
    }
}

fn log_rejection(rejection: &Rejection) {
    tracing::warn!(
        field = rejection.field.key(),
        code = rejection.code.as_str(),
        message = %rejection.message,
        "レコードを棄却"
    );
}

/// 候補レコードを検証する（fail-fast）
///
/// 最初に不正と判定されたフィールドの理由のみを返す。
///
/// ```
/// use company_info_common::{validate_record, CandidateRecord, Field, RejectionCode};
///
/// let candidate = CandidateRecord {
///     company: Some("株式会社テスト".into()),
///     tel: Some("03-1234-5678".into()),
///     address: Some("東京都渋谷区1-1-1".into()),
///     first_name: Some("代表取締役山田太郎".into()),
///     ..Default::default()
/// };
/// let record = validate_record(&candidate).unwrap();
/// assert_eq!(record.first_name.as_deref(), Some("山田太郎"));
///
/// let invalid = CandidateRecord {
///     company: Some("株式会社テスト".into()),
///     address: Some("渋谷区1-1-1".into()),
///     ..Default::default()
/// };
/// let rejection = validate_record(&invalid).unwrap_err();
/// assert_eq!(rejection.field, Field::Address);
/// assert_eq!(rejection.code, RejectionCode::InvalidAddressFormat);
/// ```
pub fn validate_record(candidate: &CandidateRecord) -> Result<ValidatedRecord, Rejection> {
    let result = run_in_order(candidate);

    if let Err(rejection) = &result {
        log_rejection(rejection);
    }

    result
}

fn run_in_order(candidate: &CandidateRecord) -> Result<ValidatedRecord, Rejection> {
    let company = company_stage(candidate)?;
    let tel = tel_stage(candidate)?;
    let address = address_stage(candidate)?;
    Ok(assemble(candidate, company, tel, address))
}

/// 候補レコードを検証する（全フィールドの不正を集約）
///
/// 不正なフィールドを宣言順に全て返す。先頭は `validate_record` の結果と一致する。
pub fn validate_record_all(candidate: &CandidateRecord) -> Result<ValidatedRecord, RejectionReport> {
    let company = company_stage(candidate);
    let tel = tel_stage(candidate);
    let address = address_stage(candidate);

    match (company, tel, address) {
        (Ok(company), Ok(tel), Ok(address)) => Ok(assemble(candidate, company, tel, address)),
        (company, tel, address) => {
            let rejections: Vec<Rejection> = [company.err(), tel.err(), address.err()]
                .into_iter()
                .flatten()
                .collect();
            rejections.iter().for_each(log_rejection);
            Err(RejectionReport { rejections })
        }
    }
}

/// エラーモードに応じて検証する
pub fn validate_with_mode(
    candidate: &CandidateRecord,
    mode: ErrorMode,
) -> Result<ValidatedRecord, RejectionReport> {
    match mode {
        ErrorMode::FailFast => validate_record(candidate).map_err(RejectionReport::from),
        ErrorMode::Accumulate => validate_record_all(candidate),
    }
}
