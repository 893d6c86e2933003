use clap::{Parser, Subcommand, ValueEnum};
use company_info_common::ErrorMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "company-info")]
#[command(about = "会社情報の正規化・検証ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 候補レコード（JSON/TXT/XLSX、またはフォルダ）を一括検証
    Validate {
        /// 入力ファイルまたはフォルダ
        #[arg(required = true)]
        input: PathBuf,

        /// 出力先（デフォルト: 入力と同じ場所の validation_report.*）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (json/excel/both)。省略時は設定値
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// エラーモード (fail_fast/accumulate)。省略時は設定値
        #[arg(short = 'm', long)]
        error_mode: Option<ErrorMode>,

        /// 業種の指定語（複数指定可）
        #[arg(long = "business")]
        required_businesses: Vec<String>,

        /// 事業内容の指定語（複数指定可）
        #[arg(long = "genre")]
        required_genre: Vec<String>,

        /// 並列処理を無効化
        #[arg(long)]
        no_parallel: bool,
    },

    /// 1件のレコードを引数から検証
    Check {
        /// 会社名
        #[arg(long)]
        company: Option<String>,

        /// 電話番号
        #[arg(long)]
        tel: Option<String>,

        /// 住所
        #[arg(long)]
        address: Option<String>,

        /// 担当者名
        #[arg(long)]
        first_name: Option<String>,

        /// 公式サイトURL
        #[arg(long)]
        url: Option<String>,

        /// 問い合わせURL
        #[arg(long)]
        contact_url: Option<String>,

        /// 業種
        #[arg(long)]
        business: Option<String>,

        /// 事業内容
        #[arg(long)]
        genre: Option<String>,

        /// エラーモード (fail_fast/accumulate)。省略時は設定値
        #[arg(short = 'm', long)]
        error_mode: Option<ErrorMode>,
    },

    /// 1つの値を正規化して表示
    Normalize {
        /// 対象フィールド
        #[arg(value_enum)]
        field: NormalizeTarget,

        /// 正規化する値
        value: String,
    },

    /// 設定を表示/編集
    Config {
        /// エラーモードを設定 (fail_fast/accumulate)
        #[arg(long)]
        set_error_mode: Option<ErrorMode>,

        /// 並列処理の有効/無効を設定
        #[arg(long)]
        set_parallel: Option<bool>,

        /// デフォルト出力形式を設定 (json/excel/both)
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// `normalize` サブコマンドの対象
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum NormalizeTarget {
    Company,
    Tel,
    Address,
    FirstName,
    ContactUrl,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Excel,
    Both,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "excel" | "xlsx" => Ok(OutputFormat::Excel),
            "both" => Ok(OutputFormat::Both),
            _ => Err(format!("Unknown format: {}. Use json, excel, or both", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Excel => write!(f, "excel"),
            OutputFormat::Both => write!(f, "both"),
        }
    }
}
