//! Company Info Common Library
//!
//! 会社情報レコードの正規化・検証コア
//!
//! 生の候補値 → 正規化 → 検証 → 検証済みレコード または 棄却理由

pub mod types;
pub mod error;
pub mod rejection;
pub mod normalizer;
pub mod validator;
pub mod formatter;
pub mod pipeline;
pub mod parser;
pub mod requirement;
pub mod export;

pub use types::{CandidateRecord, Field, ValidatedRecord};
pub use error::{Error, Result};
pub use rejection::{Rejection, RejectionCode, RejectionReport};
pub use normalizer::{normalize_address, normalize_company_name, normalize_tel_number};
pub use formatter::{format_contact_url, format_first_name};
pub use pipeline::{validate_record, validate_record_all, validate_with_mode, ErrorMode};
pub use parser::{extract_json, parse_candidate_list, parse_candidate_response};
pub use requirement::{RequiredKeywords, RequirementMiss};
