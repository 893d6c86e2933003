//! 業種・事業内容の指定語チェック
//!
//! 抽出依頼に業種・事業内容の指定がある場合、検証済みレコードが
//! 指定語のいずれかを含むか確認する。結果は警告として扱い、棄却はしない。

use crate::types::{Field, ValidatedRecord};
use serde::{Deserialize, Serialize};

/// 抽出依頼で指定された語
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredKeywords {
    #[serde(default)]
    pub required_businesses: Vec<String>,
    #[serde(default)]
    pub required_genre: Vec<String>,
}

/// 指定語を満たさなかったフィールド
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementMiss {
    pub field: Field,
    pub expected: Vec<String>,
    pub actual: Option<String>,
}

impl std::fmt::Display for RequirementMiss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}が指定語（{}）を含みません: {}",
            self.field,
            self.expected.join("/"),
            self.actual.as_deref().unwrap_or("(なし)")
        )
    }
}

impl RequiredKeywords {
    /// 指定語を満たさないフィールドを返す（指定のないフィールドは対象外）
    pub fn check(&self, record: &ValidatedRecord) -> Vec<RequirementMiss> {
        [
            (Field::Business, &self.required_businesses),
            (Field::Genre, &self.required_genre),
        ]
        .into_iter()
        .filter(|(_, expected)| !expected.is_empty())
        .filter_map(|(field, expected)| {
            let actual = record.get(field);
            let satisfied = actual
                .map(|value| expected.iter().any(|kw| value.contains(kw.as_str())))
                .unwrap_or(false);
            (!satisfied).then(|| RequirementMiss {
                field,
                expected: expected.clone(),
                actual: actual.map(str::to_string),
            })
        })
        .collect()
    }
}
