//! 会社名の検証
//!
//! 1. 空白を除いた比較用文字列で、法人格をちょうど1つ含み、法人格以外の名称があり、
//!    禁止語を含まないか（主判定）
//! 2. 主判定に落ちた場合、禁止語を含まず、元の文字列が許容文字のみで構成されているか（救済判定）

use crate::rejection::{Rejection, RejectionCode};
use crate::types::Field;
use regex::Regex;

/// 法人格
pub const ENTITY_MARKERS: &[&str] = &[
    "株式会社",
    "有限会社",
    "合同会社",
    "医療法人",
    "一般社団法人",
    "合資会社",
    "法律事務所",
    "行政書士",
    "社会福祉",
];

/// 会社名に含めてはいけない語（支店名・括弧書き）
pub const FORBIDDEN_WORDS: &[&str] = &["支店", "営業所", "（", "）", "(", ")"];

const FORMAT_MESSAGE: &str =
    "会社名の形式が不正です。主要な法人格を含み、支店・営業所・括弧を含まない必要があります。";

/// どの判定で受理されたか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyAcceptance {
    /// 法人格を含む
    Primary,
    /// 法人格は見つからないが許容文字のみ
    Fallback,
}

/// 不合格の理由
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyFailure {
    /// 禁止語を含む
    ForbiddenWord(&'static str),
    /// 法人格が1つでなく、許容外の文字を含む
    Charset { markers: usize },
}

impl CompanyFailure {
    fn detail(&self) -> String {
        match self {
            CompanyFailure::ForbiddenWord(word) => format!("禁止語「{}」を含みます", word),
            CompanyFailure::Charset { markers: 0 } => {
                "法人格が見つからず、使用できない文字を含みます".to_string()
            }
            CompanyFailure::Charset { markers } => {
                format!("法人格が{}個含まれ、使用できない文字を含みます", markers)
            }
        }
    }
}

/// 半角・全角スペースを除去した比較用文字列
pub fn strip_spaces(value: &str) -> String {
    value.replace([' ', '\u{3000}'], "")
}

/// 法人格の出現数（全種類の合計）
pub fn count_entity_markers(stripped: &str) -> usize {
    ENTITY_MARKERS
        .iter()
        .map(|marker| stripped.matches(marker).count())
        .sum()
}

/// 法人格を除いた名称部分があるか
fn has_name_besides_marker(stripped: &str) -> bool {
    let name = ENTITY_MARKERS
        .iter()
        .fold(stripped.to_string(), |rest, marker| rest.replace(marker, ""));
    !name.is_empty()
}

/// 最初に見つかった禁止語
pub fn find_forbidden_word(stripped: &str) -> Option<&'static str> {
    FORBIDDEN_WORDS
        .iter()
        .copied()
        .find(|word| stripped.contains(word))
}

/// 主判定: 法人格をちょうど1つと名称を含み、禁止語を含まない
pub fn validate_company_format(stripped: &str) -> bool {
    count_entity_markers(stripped) == 1
        && has_name_besides_marker(stripped)
        && find_forbidden_word(stripped).is_none()
}

/// 救済判定用の許容文字（英数字・ひらがな・カタカナ・漢字・々・ー・&._- ・空白）
pub fn matches_relaxed_charset(value: &str) -> bool {
    lazy_static::lazy_static! {
        static ref RELAXED_RE: Regex =
            Regex::new(r"^[A-Za-z0-9\x{3040}-\x{30FF}\x{4E00}-\x{9FFF}\x{3005}\x{30FC}・&._\-\s]+$")
                .unwrap();
    }
    RELAXED_RE.is_match(value)
}

/// 正規化済みの会社名を判定する
pub fn check_company(normalized: &str) -> Result<CompanyAcceptance, CompanyFailure> {
    let stripped = strip_spaces(normalized);

    if validate_company_format(&stripped) {
        return Ok(CompanyAcceptance::Primary);
    }

    if let Some(word) = find_forbidden_word(&stripped) {
        return Err(CompanyFailure::ForbiddenWord(word));
    }

    if matches_relaxed_charset(normalized) {
        tracing::debug!(company = normalized, "法人格なし、許容文字のみのため受理");
        return Ok(CompanyAcceptance::Fallback);
    }

    Err(CompanyFailure::Charset {
        markers: count_entity_markers(&stripped),
    })
}

/// 会社名を検証し、受理した値をそのまま返す
pub fn validate_company(normalized: String) -> Result<String, Rejection> {
    match check_company(&normalized) {
        Ok(_) => Ok(normalized),
        Err(failure) => Err(Rejection::new(
            Field::Company,
            RejectionCode::InvalidCompanyFormat,
            format!("{}（{}）", FORMAT_MESSAGE, failure.detail()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_accepts_entity() {
        assert_eq!(check_company("株式会社テスト"), Ok(CompanyAcceptance::Primary));
        assert_eq!(check_company("テスト合同会社"), Ok(CompanyAcceptance::Primary));
        assert_eq!(check_company("社会福祉法人 さくら会"), Ok(CompanyAcceptance::Primary));
        assert_eq!(check_company("一般社団法人 日本テスト協会"), Ok(CompanyAcceptance::Primary));
    }

    #[test]
    fn test_primary_accepts_symbols_outside_relaxed_set() {
        // 法人格があれば許容文字の制限は受けない
        assert_eq!(check_company("株式会社テスト!"), Ok(CompanyAcceptance::Primary));
    }

    #[test]
    fn test_forbidden_words_rejected() {
        assert_eq!(
            check_company("テスト株式会社支店"),
            Err(CompanyFailure::ForbiddenWord("支店"))
        );
        assert_eq!(
            check_company("株式会社テスト 渋谷営業所"),
            Err(CompanyFailure::ForbiddenWord("営業所"))
        );
        assert_eq!(
            check_company("テスト(株)"),
            Err(CompanyFailure::ForbiddenWord("("))
        );
        assert_eq!(
            check_company("株式会社テスト（東京）"),
            Err(CompanyFailure::ForbiddenWord("（"))
        );
    }

    #[test]
    fn test_forbidden_word_split_by_spaces() {
        assert_eq!(
            check_company("株式会社 テスト 支 店"),
            Err(CompanyFailure::ForbiddenWord("支店"))
        );
        assert_eq!(
            check_company("株式会社 テスト　支店"),
            Err(CompanyFailure::ForbiddenWord("支店"))
        );
    }

    #[test]
    fn test_fallback_accepts_plain_name() {
        assert_eq!(check_company("テスト商事"), Ok(CompanyAcceptance::Fallback));
        assert_eq!(check_company("ABC Holdings"), Ok(CompanyAcceptance::Fallback));
        assert_eq!(check_company("佐々木工務店"), Ok(CompanyAcceptance::Fallback));
    }

    #[test]
    fn test_fallback_for_multiple_markers() {
        assert_eq!(count_entity_markers("株式会社テスト有限会社"), 2);
        assert_eq!(check_company("株式会社テスト有限会社"), Ok(CompanyAcceptance::Fallback));
    }

    #[test]
    fn test_charset_rejected() {
        assert_eq!(check_company("テスト商事!"), Err(CompanyFailure::Charset { markers: 0 }));
        assert_eq!(
            check_company("株式会社A 有限会社B!"),
            Err(CompanyFailure::Charset { markers: 2 })
        );
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(check_company(""), Err(CompanyFailure::Charset { markers: 0 }));
    }

    #[test]
    fn test_marker_only_not_primary() {
        assert!(!validate_company_format("株式会社"));
        assert!(!validate_company_format("合同会社"));
        assert_eq!(check_company("株式会社"), Ok(CompanyAcceptance::Fallback));
        assert_eq!(check_company("株式会社 "), Ok(CompanyAcceptance::Fallback));
    }

    #[test]
    fn test_validate_company_rejection() {
        let err = validate_company("テスト株式会社支店".to_string()).unwrap_err();
        assert_eq!(err.field, Field::Company);
        assert_eq!(err.code, RejectionCode::InvalidCompanyFormat);
        assert!(err.message.contains("支店"));
    }

    #[test]
    fn test_validate_company_passes_value() {
        assert_eq!(
            validate_company("株式会社テスト".to_string()),
            Ok("株式会社テスト".to_string())
        );
    }
}
