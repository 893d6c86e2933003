//! 抽出レスポンスパーサー
//!
//! LLMなどの抽出処理のレスポンスからJSONを取り出し、
//! 候補レコードとしてパースする

use crate::error::{Error, Result};
use crate::types::CandidateRecord;
use serde_json::Value;

/// ```json ... ``` ブロックの中身
fn fenced_block(response: &str) -> Option<&str> {
    let start = response.find("```json")? + "```json".len();
    let end = start + response[start..].find("```")?;
    Some(response[start..end].trim())
}

/// 最初の `open` から最後の `close` までの範囲
fn bracket_span(text: &str, open: char, close: char) -> Option<(usize, usize)> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    (end > start).then_some((start, end))
}

/// レスポンスからJSON部分を抽出
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. 最初の `{` から最後の `}` まで
///    （`[` ... `]` がその範囲を包んでいる場合のみ配列として扱う）
/// 3. エラー
///
/// 本文中の `[1]` のような注記は配列とみなさない。
///
/// # Examples
/// ```
/// use company_info_common::extract_json;
///
/// let response = "結果: {\"company\": \"株式会社テスト\"} 以上";
/// let json = extract_json(response).unwrap();
/// assert_eq!(json, "{\"company\": \"株式会社テスト\"}");
///
/// let cited = "調査結果[1]: {\"company\": \"株式会社A\"}";
/// assert_eq!(extract_json(cited).unwrap(), "{\"company\": \"株式会社A\"}");
/// ```
pub fn extract_json(response: &str) -> Result<&str> {
    if let Some(block) = fenced_block(response) {
        return Ok(block);
    }

    let object = bracket_span(response, '{', '}');
    let array = bracket_span(response, '[', ']');
    let span = match (object, array) {
        (Some(o), Some(a)) if a.0 < o.0 && a.1 > o.1 => Some(a),
        (Some(o), _) => Some(o),
        (None, a) => a,
    };

    span.map(|(start, end)| &response[start..=end])
        .ok_or_else(|| Error::Parse("JSONが見つかりません".into()))
}

/// レスポンスからJSONオブジェクト部分だけを抽出
fn extract_object(response: &str) -> Result<&str> {
    let scope = fenced_block(response).unwrap_or(response);
    bracket_span(scope, '{', '}')
        .map(|(start, end)| &scope[start..=end])
        .ok_or_else(|| Error::Parse("JSONオブジェクトが見つかりません".into()))
}

/// レスポンスを1件の候補レコードとしてパース
pub fn parse_candidate_response(response: &str) -> Result<CandidateRecord> {
    let json_str = extract_object(response)?;
    let record: CandidateRecord = serde_json::from_str(json_str)
        .map_err(|e| Error::Parse(format!("候補レコード JSONパースエラー: {}", e)))?;
    Ok(record)
}

/// レスポンスを候補レコードの配列としてパース
///
/// 単一オブジェクトの場合は1件の配列として返す
pub fn parse_candidate_list(response: &str) -> Result<Vec<CandidateRecord>> {
    let json_str = extract_json(response)?;
    let value: Value = serde_json::from_str(json_str)
        .map_err(|e| Error::Parse(format!("候補レコード JSONパースエラー: {}", e)))?;

    let records = match value {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<Vec<CandidateRecord>, _>>()?,
        Value::Object(_) => vec![serde_json::from_value(value)?],
        other => {
            return Err(Error::Parse(format!(
                "候補レコードはオブジェクトまたは配列である必要があります: {}",
                other
            )))
        }
    };

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // extract_json テスト
    // =============================================

    #[test]
    fn test_extract_json_with_block() {
        let response = r#"抽出結果です:
```json
{"company": "株式会社テスト", "tel": "03-1234-5678"}
```
以上です。"#;

        let json = extract_json(response).unwrap();
        assert_eq!(json, r#"{"company": "株式会社テスト", "tel": "03-1234-5678"}"#);
    }

    #[test]
    fn test_extract_json_raw_object() {
        let response = r#"{"company": "株式会社テスト"}"#;
        assert_eq!(extract_json(response).unwrap(), response);
    }

    #[test]
    fn test_extract_json_array_before_object() {
        let response = r#"結果: [{"company": "A"}, {"company": "B"}]"#;
        assert_eq!(
            extract_json(response).unwrap(),
            r#"[{"company": "A"}, {"company": "B"}]"#
        );
    }

    #[test]
    fn test_extract_json_ignores_citation_before_object() {
        let response = r#"調査結果[1]: {"company": "株式会社A", "address": "東京都港区"}"#;
        assert_eq!(
            extract_json(response).unwrap(),
            r#"{"company": "株式会社A", "address": "東京都港区"}"#
        );
    }

    #[test]
    fn test_extract_json_nested_array_inside_object() {
        let response = r#"[注] {"company": "株式会社A", "tags": ["x"]}"#;
        assert_eq!(
            extract_json(response).unwrap(),
            r#"{"company": "株式会社A", "tags": ["x"]}"#
        );
    }

    #[test]
    fn test_extract_json_array_only() {
        assert_eq!(extract_json("一覧: [1, 2]").unwrap(), "[1, 2]");
    }

    #[test]
    fn test_extract_json_error() {
        let result = extract_json("JSONはありません");
        if let Err(Error::Parse(msg)) = result {
            assert!(msg.contains("JSONが見つかりません"));
        } else {
            panic!("Expected Parse error");
        }
    }

    #[test]
    fn test_extract_json_empty_response() {
        assert!(extract_json("").is_err());
        assert!(extract_json("} {").is_err());
    }

    // =============================================
    // parse_candidate_response テスト
    // =============================================

    #[test]
    fn test_parse_candidate_response() {
        let response = r#"```json
{
  "company": "株式会社テスト",
  "tel": "03-1234-5678",
  "address": "東京都渋谷区1-1-1",
  "first_name": "不明",
  "url": null,
  "business": "IT"
}
```"#;

        let record = parse_candidate_response(response).unwrap();
        assert_eq!(record.company.as_deref(), Some("株式会社テスト"));
        assert_eq!(record.tel.as_deref(), Some("03-1234-5678"));
        assert_eq!(record.first_name.as_deref(), Some("不明"));
        assert_eq!(record.url, None);
        assert_eq!(record.contact_url, None);
        assert_eq!(record.business.as_deref(), Some("IT"));
    }

    #[test]
    fn test_parse_candidate_response_invalid_json() {
        let result = parse_candidate_response("{company: 株式会社}");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_candidate_response_with_citation() {
        let response = r#"調査結果[1]: {"company": "株式会社A", "address": "東京都港区"}"#;
        let record = parse_candidate_response(response).unwrap();
        assert_eq!(record.company.as_deref(), Some("株式会社A"));
        assert_eq!(record.address.as_deref(), Some("東京都港区"));
    }

    #[test]
    fn test_parse_candidate_response_rejects_array_only() {
        let result = parse_candidate_response("[1]");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_candidate_list_with_citation() {
        let records = parse_candidate_list(r#"[注] {"company": "株式会社A", "tags": ["x"]}"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].company.as_deref(), Some("株式会社A"));
    }

    #[test]
    fn test_parse_candidate_list() {
        let response = r#"[{"company": "株式会社A"}, {"company": "株式会社B", "tel": 312345678}]"#;
        let records = parse_candidate_list(response).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].tel.as_deref(), Some("312345678"));
    }

    #[test]
    fn test_parse_candidate_list_single_object() {
        let records = parse_candidate_list(r#"{"company": "株式会社A"}"#).unwrap();
        assert_eq!(records.len(), 1);
    }
}
