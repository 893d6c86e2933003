//! 電話番号の正規化
//!
//! 括弧は削除せず残す（検証で不合格にする）。

use super::{is_dash_variant, to_half_width};
use regex::Regex;

/// 電話番号を正規化する
///
/// - 全角数字・ハイフン → 半角
/// - ハイフン類似文字（長音記号を含む）→ `-`
/// - 空白を全て除去
/// - 先頭の `TEL:` `電話:` 等のラベルを除去
pub fn normalize_tel_number(raw: &str) -> String {
    lazy_static::lazy_static! {
        static ref LABEL_RE: Regex =
            Regex::new(r"^(?:(?:(?i:tel|phone)\.?|電話番号|電話)[:]?)+").unwrap();
    }

    let unified: String = to_half_width(raw)
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if is_dash_variant(c) || c == 'ー' { '-' } else { c })
        .collect();

    let normalized = LABEL_RE.replace(&unified, "").to_string();

    if normalized != raw {
        tracing::debug!(raw, normalized = %normalized, "電話番号を正規化");
    }

    normalized
}
