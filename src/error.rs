use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompanyInfoError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("入力ファイルの解析に失敗: {0}")]
    InputParse(String),

    #[error("Excel読み込みエラー: {0}")]
    ExcelRead(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("候補レコードが見つかりません: {0}")]
    NoRecordsFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] company_info_common::Error),
}

pub type Result<T> = std::result::Result<T, CompanyInfoError>;
