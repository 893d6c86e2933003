mod xlsx;

use crate::error::{CompanyInfoError, Result};
use company_info_common::{parse_candidate_list, CandidateRecord};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 入力元付きの候補レコード
#[derive(Debug, Clone)]
pub struct SourcedCandidate {
    /// 入力元（`ファイル名` または `ファイル名#番号`）
    pub source: String,
    pub candidate: CandidateRecord,
}

const INPUT_EXTENSIONS: &[&str] = &["json", "txt", "xlsx"];

fn is_input_extension(ext: &str) -> bool {
    INPUT_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// 入力ファイルを列挙する
///
/// ファイルならそれ自体、フォルダなら直下の対応ファイル（ファイル名順）
pub fn scan_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    if !input.exists() {
        return Err(CompanyInfoError::FolderNotFound(input.display().to_string()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(input)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file())
        .filter(|p| {
            p.extension()
                .map(|ext| is_input_extension(&ext.to_string_lossy()))
                .unwrap_or(false)
        })
        .collect();

    // ファイル名でソート
    files.sort_by_key(|p| file_name(p));

    Ok(files)
}

/// 1ファイルから候補レコードを読み込む
pub fn load_file(path: &Path) -> Result<Vec<SourcedCandidate>> {
    if !path.exists() {
        return Err(CompanyInfoError::FileNotFound(path.display().to_string()));
    }

    let name = file_name(path);
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if ext == "xlsx" {
        let rows = xlsx::read_candidates(path)?;
        return Ok(rows
            .into_iter()
            .map(|(row, candidate)| SourcedCandidate {
                source: format!("{}#{}", name, row),
                candidate,
            })
            .collect());
    }

    // JSON・LLMレスポンス（テキスト）
    let content = std::fs::read_to_string(path)?;
    let records = parse_candidate_list(&content)
        .map_err(|e| CompanyInfoError::InputParse(format!("{}: {}", name, e)))?;

    let single = records.len() == 1;
    Ok(records
        .into_iter()
        .enumerate()
        .map(|(i, candidate)| SourcedCandidate {
            source: if single { name.clone() } else { format!("{}#{}", name, i + 1) },
            candidate,
        })
        .collect())
}

/// 入力（ファイルまたはフォルダ）から全候補レコードを読み込む
pub fn load_candidates(input: &Path) -> Result<Vec<SourcedCandidate>> {
    let mut candidates = Vec::new();
    for path in scan_inputs(input)? {
        tracing::debug!(path = %path.display(), "入力ファイルを読み込み");
        candidates.extend(load_file(&path)?);
    }
    Ok(candidates)
}
