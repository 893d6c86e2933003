//! 会社名の正規化
//!
//! 支店・営業所などの語は削除せず残す（検証で不合格にする）。

use super::{collapse_whitespace, to_half_width};

/// 会社名を正規化する
///
/// - 全角英数字・記号 → 半角、半角カナ → 全角
/// - 空白の連続を半角スペース1つに統一
/// - 前後の空白を除去
pub fn normalize_company_name(raw: &str) -> String {
    let normalized = collapse_whitespace(&to_half_width(raw));

    if normalized != raw {
        tracing::debug!(raw, normalized = %normalized, "会社名を正規化");
    }

    normalized
}
