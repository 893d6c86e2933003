//! 会社情報レコードの型定義
//!
//! - CandidateRecord: 抽出処理（LLM等）から受け取る生の値
//! - ValidatedRecord: 正規化・検証を通過した最終出力

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// レコードのフィールド（宣言順 = 検証順）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Company,
    Tel,
    Address,
    FirstName,
    Url,
    ContactUrl,
    Business,
    Genre,
}

impl Field {
    /// 全フィールド（宣言順）
    pub const ALL: [Field; 8] = [
        Field::Company,
        Field::Tel,
        Field::Address,
        Field::FirstName,
        Field::Url,
        Field::ContactUrl,
        Field::Business,
        Field::Genre,
    ];

    /// JSONキー名
    pub fn key(&self) -> &'static str {
        match self {
            Field::Company => "company",
            Field::Tel => "tel",
            Field::Address => "address",
            Field::FirstName => "first_name",
            Field::Url => "url",
            Field::ContactUrl => "contact_url",
            Field::Business => "business",
            Field::Genre => "genre",
        }
    }

    /// キー名または日本語ラベルからフィールドを引く
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Field::ALL
            .iter()
            .copied()
            .find(|f| f.key().eq_ignore_ascii_case(label) || f.to_string() == label)
            .or(match label {
                "代表者名" | "担当者" | "代表者" => Some(Field::FirstName),
                "会社URL" | "公式サイト" => Some(Field::Url),
                "お問い合わせURL" | "問合せURL" => Some(Field::ContactUrl),
                _ => None,
            })
    }

    /// 必須フィールドか
    pub fn is_required(&self) -> bool {
        matches!(self, Field::Company | Field::Address)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Company => write!(f, "会社名"),
            Field::Tel => write!(f, "電話番号"),
            Field::Address => write!(f, "住所"),
            Field::FirstName => write!(f, "担当者名"),
            Field::Url => write!(f, "URL"),
            Field::ContactUrl => write!(f, "問い合わせURL"),
            Field::Business => write!(f, "業種"),
            Field::Genre => write!(f, "事業内容"),
        }
    }
}

/// 抽出処理から受け取る生の会社情報
///
/// 数値や真偽値は文字列に変換して受け取る。`null`・キー欠落は `None`。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub tel: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub contact_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub business: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub genre: Option<String>,
}

impl CandidateRecord {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Company => self.company.as_deref(),
            Field::Tel => self.tel.as_deref(),
            Field::Address => self.address.as_deref(),
            Field::FirstName => self.first_name.as_deref(),
            Field::Url => self.url.as_deref(),
            Field::ContactUrl => self.contact_url.as_deref(),
            Field::Business => self.business.as_deref(),
            Field::Genre => self.genre.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, value: Option<String>) {
        let slot = match field {
            Field::Company => &mut self.company,
            Field::Tel => &mut self.tel,
            Field::Address => &mut self.address,
            Field::FirstName => &mut self.first_name,
            Field::Url => &mut self.url,
            Field::ContactUrl => &mut self.contact_url,
            Field::Business => &mut self.business,
            Field::Genre => &mut self.genre,
        };
        *slot = value;
    }

    /// 全フィールドが未設定か
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_none())
    }
}

/// 検証済みの会社情報
///
/// パイプラインを全て通過した場合のみ構築される。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedRecord {
    pub company: String,
    pub tel: Option<String>,
    pub address: String,
    pub first_name: Option<String>,
    pub url: Option<String>,
    pub contact_url: Option<String>,
    pub business: Option<String>,
    pub genre: Option<String>,
}

impl ValidatedRecord {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Company => Some(self.company.as_str()),
            Field::Tel => self.tel.as_deref(),
            Field::Address => Some(self.address.as_str()),
            Field::FirstName => self.first_name.as_deref(),
            Field::Url => self.url.as_deref(),
            Field::ContactUrl => self.contact_url.as_deref(),
            Field::Business => self.business.as_deref(),
            Field::Genre => self.genre.as_deref(),
        }
    }
}

/// 文字列以外のスカラー値も文字列として受け取る
fn deserialize_scalar<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_from_json_with_missing_and_null() {
        let json = r#"{"company": "株式会社テスト", "tel": null}"#;
        let record: CandidateRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.company.as_deref(), Some("株式会社テスト"));
        assert_eq!(record.tel, None);
        assert_eq!(record.address, None);
    }

    #[test]
    fn test_candidate_coerces_scalars() {
        let json = r#"{"first_name": 12345, "business": true}"#;
        let record: CandidateRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.first_name.as_deref(), Some("12345"));
        assert_eq!(record.business.as_deref(), Some("true"));
    }

    #[test]
    fn test_candidate_get_set() {
        let mut record = CandidateRecord::default();
        assert!(record.is_empty());
        record.set(Field::ContactUrl, Some("https://example.com".into()));
        assert_eq!(record.get(Field::ContactUrl), Some("https://example.com"));
        assert!(!record.is_empty());
    }

    #[test]
    fn test_field_from_label() {
        assert_eq!(Field::from_label("company"), Some(Field::Company));
        assert_eq!(Field::from_label("TEL"), Some(Field::Tel));
        assert_eq!(Field::from_label("住所"), Some(Field::Address));
        assert_eq!(Field::from_label("代表者名"), Some(Field::FirstName));
        assert_eq!(Field::from_label("備考"), None);
    }

    #[test]
    fn test_field_serde_key() {
        let json = serde_json::to_string(&Field::ContactUrl).unwrap();
        assert_eq!(json, "\"contact_url\"");
        assert_eq!(Field::ContactUrl.key(), "contact_url");
    }
}
