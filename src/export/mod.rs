pub mod excel;

use crate::batch::RecordOutcome;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::report::ValidationReport;
use std::path::{Path, PathBuf};

/// レポートのデフォルトファイル名（拡張子なし）
pub const DEFAULT_REPORT_NAME: &str = "validation_report";

fn output_path_for_format(output: &Path, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", DEFAULT_REPORT_NAME, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        let json_path = output.join(format!("{}.json", DEFAULT_REPORT_NAME));
        let excel_path = output.join(format!("{}.xlsx", DEFAULT_REPORT_NAME));
        (json_path, excel_path)
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(DEFAULT_REPORT_NAME);
        let json_path = parent.join(format!("{}.json", stem));
        let excel_path = parent.join(format!("{}.xlsx", stem));
        (json_path, excel_path)
    }
}

/// 入力パスからデフォルトの出力先フォルダを決める
pub fn default_output_dir(input: &Path) -> PathBuf {
    if input.is_dir() {
        input.to_path_buf()
    } else {
        input
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// 検証結果を出力し、書き出したファイルのパスを返す
pub fn export_results(
    outcomes: &[RecordOutcome],
    report: &ValidationReport,
    format: OutputFormat,
    output: &Path,
) -> Result<Vec<PathBuf>> {
    let written = match format {
        OutputFormat::Json => {
            let json_path = output_path_for_format(output, "json");
            report.write_json(&json_path)?;
            vec![json_path]
        }
        OutputFormat::Excel => {
            let excel_path = output_path_for_format(output, "xlsx");
            excel::generate_excel(outcomes, &excel_path)?;
            vec![excel_path]
        }
        OutputFormat::Both => {
            let (json_path, excel_path) = output_paths_for_both(output);
            report.write_json(&json_path)?;
            excel::generate_excel(outcomes, &excel_path)?;
            vec![json_path, excel_path]
        }
    };

    for path in &written {
        tracing::info!(path = %path.display(), "レポートを出力");
    }

    Ok(written)
}
