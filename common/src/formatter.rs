//! 任意フィールドの整形
//!
//! 担当者名・問い合わせURLは整形そのものが検証を兼ねる。
//! 「不明」や空文字は値なし（`None`）として扱う。

use regex::Regex;

/// 値なしを意味する文字列
pub const UNKNOWN_SENTINELS: &[&str] = &["", "不明"];

/// 担当者名から除去する肩書（先に並ぶものを優先して照合）
pub const HONORIFICS: &[&str] = &[
    "代表取締役",
    "取締役",
    "社長",
    "会長",
    "専務",
    "常務",
    "理事長",
    "院長",
    "所長",
    "代表",
];

/// 問い合わせURLとして受け付ける接頭辞
pub const URL_PREFIX: &str = "http";

pub fn is_unknown(value: &str) -> bool {
    UNKNOWN_SENTINELS.contains(&value)
}

/// 担当者名を整形する
///
/// 前後の空白を除き、肩書（後続の空白を含む）を全て取り除く。
/// 「不明」・空文字・肩書のみの場合は `None`。
pub fn format_first_name(raw: Option<&str>) -> Option<String> {
    lazy_static::lazy_static! {
        static ref HONORIFIC_RE: Regex = {
            let alternation = HONORIFICS
                .iter()
                .map(|h| regex::escape(h))
                .collect::<Vec<_>>()
                .join("|");
            Regex::new(&format!(r"(?:{})\s*", alternation)).unwrap()
        };
    }

    let trimmed = raw?.trim();
    if is_unknown(trimmed) {
        return None;
    }

    let stripped = HONORIFIC_RE.replace_all(trimmed, "");
    let name = stripped.trim();
    if name.is_empty() {
        return None;
    }

    Some(name.to_string())
}

/// 問い合わせURLを整形する
///
/// `http` で始まらない値は誤りとせず `None` にする。
pub fn format_contact_url(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if is_unknown(trimmed) || !trimmed.starts_with(URL_PREFIX) {
        return None;
    }

    Some(trimmed.to_string())
}
