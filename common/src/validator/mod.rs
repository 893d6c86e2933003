//! 検証モジュール
//!
//! 正規化済みの値が各フィールドの形式を満たすか判定する。
//! 値は変更しない。

pub mod address;
pub mod company;
pub mod tel;

pub use address::{validate_address, validate_address_format};
pub use company::{check_company, validate_company, validate_company_format, CompanyAcceptance};
pub use tel::{validate_tel, validate_tel_format};
