//! 正規化モジュール
//!
//! 抽出された生の値をフィールドごとの正規形に変換する。
//! いずれの関数も副作用を持たず、同じ入力には同じ出力を返す。
//!
//! ## 処理内容
//! 1. 全角英数字・記号 → 半角
//! 2. 半角カナ → 全角カナ（濁点・半濁点は合成）
//! 3. 空白の連続を半角スペース1つに統一し、前後をトリム

pub mod address;
pub mod company;
pub mod tel;

pub use address::normalize_address;
pub use company::normalize_company_name;
pub use tel::normalize_tel_number;

/// 半角カナ（U+FF61〜U+FF9F）に対応する全角文字
const HALF_WIDTH_KANA: &str = "。「」、・ヲァィゥェォャュョッーアイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワン゛゜";

/// 濁点を付けられる全角カナ（+1で濁音）
const VOICEABLE: &str = "カキクケコサシスセソタチツテトハヒフヘホ";

/// 半濁点を付けられる全角カナ（+2で半濁音）
const SEMI_VOICEABLE: &str = "ハヒフヘホ";

const HALF_VOICED_MARK: char = '\u{FF9E}';
const HALF_SEMI_VOICED_MARK: char = '\u{FF9F}';

/// 全角ASCII（！〜～）を半角に変換する
fn fullwidth_ascii_to_half(c: char) -> char {
    match c {
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
        _ => c,
    }
}

/// 半角カナ1文字を全角に変換する
fn half_kana_to_full(c: char) -> Option<char> {
    match c {
        '\u{FF61}'..='\u{FF9F}' => HALF_WIDTH_KANA.chars().nth(c as usize - 0xFF61),
        _ => None,
    }
}

/// 濁点・半濁点を合成する
fn compose_mark(base: char, mark: char) -> Option<char> {
    match mark {
        HALF_VOICED_MARK if base == 'ウ' => Some('ヴ'),
        HALF_VOICED_MARK if VOICEABLE.contains(base) => char::from_u32(base as u32 + 1),
        HALF_SEMI_VOICED_MARK if SEMI_VOICEABLE.contains(base) => char::from_u32(base as u32 + 2),
        _ => None,
    }
}

/// 文字幅を統一する
///
/// - 全角英数字・記号 → 半角
/// - 半角カナ → 全角カナ
///
/// 全角スペースは空白として残す（`collapse_whitespace` で処理）
pub fn to_half_width(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(full) = half_kana_to_full(c) {
            if let Some(&next) = chars.peek() {
                if let Some(composed) = compose_mark(full, next) {
                    result.push(composed);
                    chars.next();
                    continue;
                }
            }
            result.push(full);
        } else {
            result.push(fullwidth_ascii_to_half(c));
        }
    }

    result
}

/// 空白（半角・全角・タブ・改行）の連続を半角スペース1つにまとめ、前後をトリムする
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// ハイフン類似文字か（長音記号 `ー` は含まない）
pub(crate) fn is_dash_variant(c: char) -> bool {
    matches!(
        c,
        '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2015}' | '\u{2212}'
    )
}
