//! 会社情報の正規化・検証ツール（CLI）
//!
//! 正規化・検証のコアは `company-info-common` にあり、
//! このクレートは入力の読み込み・一括検証・レポート出力を担う。

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod report;
pub mod scanner;
