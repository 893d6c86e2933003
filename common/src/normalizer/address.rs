//! 住所の正規化
//!
//! 都道府県の文字はそのまま残す。

use super::{collapse_whitespace, is_dash_variant, to_half_width};

/// 住所を正規化する
///
/// - 全角英数字・記号 → 半角、半角カナ → 全角
/// - ハイフン類似文字 → `-`
/// - 数字に挟まれた長音記号（`1ー2`）→ `-`
/// - 空白の連続を半角スペース1つに統一し、前後をトリム
pub fn normalize_address(raw: &str) -> String {
    let unified: String = to_half_width(raw)
        .chars()
        .map(|c| if is_dash_variant(c) { '-' } else { c })
        .collect();

    let normalized = collapse_whitespace(&fix_chome_dashes(&unified));

    if normalized != raw {
        tracing::debug!(raw, normalized = %normalized, "住所を正規化");
    }

    normalized
}

/// 番地中の長音記号をハイフンに置換
fn fix_chome_dashes(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();

    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let prev_is_digit = i > 0 && chars[i - 1].is_ascii_digit();
            let next_is_digit = i + 1 < chars.len() && chars[i + 1].is_ascii_digit();
            if c == 'ー' && prev_is_digit && next_is_digit {
                '-'
            } else {
                c
            }
        })
        .collect()
}
