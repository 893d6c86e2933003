//! 住所の検証

use crate::rejection::{Rejection, RejectionCode};
use crate::types::Field;

/// 都道府県レベルの行政区分を示す文字
pub const ADMINISTRATIVE_MARKERS: [char; 4] = ['都', '道', '府', '県'];

const FORMAT_MESSAGE: &str = "住所の形式が不正です。『都/道/府/県』のいずれかを含めてください。";

/// 空でなく、都/道/府/県のいずれかを含む
pub fn validate_address_format(value: &str) -> bool {
    !value.is_empty() && value.contains(ADMINISTRATIVE_MARKERS)
}

pub fn validate_address(normalized: String) -> Result<String, Rejection> {
    if validate_address_format(&normalized) {
        Ok(normalized)
    } else {
        Err(Rejection::new(
            Field::Address,
            RejectionCode::InvalidAddressFormat,
            FORMAT_MESSAGE,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_address() {
        assert!(validate_address_format("東京都渋谷区1-1-1"));
        assert!(validate_address_format("北海道札幌市中央区"));
        assert!(validate_address_format("大阪府大阪市北区"));
        assert!(validate_address_format("神奈川県横浜市"));
    }

    #[test]
    fn test_missing_marker_rejected() {
        assert!(!validate_address_format("渋谷区1-1-1"));
        assert!(!validate_address_format(""));
    }

    #[test]
    fn test_validate_address_rejection() {
        let err = validate_address("渋谷区1-1-1".to_string()).unwrap_err();
        assert_eq!(err.field, Field::Address);
        assert_eq!(err.code, RejectionCode::InvalidAddressFormat);
    }
}
