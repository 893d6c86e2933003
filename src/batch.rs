//! 一括検証モジュール
//!
//! 読み込んだ候補レコードを検証し、入力順のまま結果を返す。
//! レコード同士は独立しているため、並列処理しても結果は変わらない。

use crate::scanner::SourcedCandidate;
use company_info_common::export::excel_core::OutcomeRow;
use company_info_common::{
    validate_with_mode, CandidateRecord, ErrorMode, Rejection, RequiredKeywords,
    RequirementMiss, ValidatedRecord,
};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// 1件分の検証結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordOutcome {
    pub source: String,
    /// 候補レコードのSHA-256（同一入力の突き合わせ用）
    pub fingerprint: String,
    pub record: Option<ValidatedRecord>,
    pub rejections: Vec<Rejection>,
    /// 指定語チェックの警告（棄却理由ではない）
    pub warnings: Vec<RequirementMiss>,
}

impl RecordOutcome {
    pub fn is_accepted(&self) -> bool {
        self.record.is_some()
    }
}

impl OutcomeRow for RecordOutcome {
    fn source(&self) -> &str {
        &self.source
    }

    fn record(&self) -> Option<&ValidatedRecord> {
        self.record.as_ref()
    }

    fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }
}

/// 一括検証オプション
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    pub error_mode: ErrorMode,
    pub parallel: bool,
    pub requirements: RequiredKeywords,
    pub show_progress: bool,
}

/// 候補レコードのフィンガープリント（JSON表現のSHA-256）
pub fn fingerprint(candidate: &CandidateRecord) -> String {
    let bytes = serde_json::to_vec(candidate).unwrap_or_default();
    hex::encode(Sha256::digest(&bytes))
}

/// 1件を検証する
pub fn validate_one(sourced: &SourcedCandidate, options: &BatchOptions) -> RecordOutcome {
    let fingerprint = fingerprint(&sourced.candidate);

    match validate_with_mode(&sourced.candidate, options.error_mode) {
        Ok(record) => {
            let warnings = options.requirements.check(&record);
            for warning in &warnings {
                tracing::warn!(source = %sourced.source, "{}", warning);
            }
            RecordOutcome {
                source: sourced.source.clone(),
                fingerprint,
                record: Some(record),
                rejections: Vec::new(),
                warnings,
            }
        }
        Err(report) => {
            tracing::debug!(source = %sourced.source, "{}", report);
            RecordOutcome {
                source: sourced.source.clone(),
                fingerprint,
                record: None,
                rejections: report.rejections,
                warnings: Vec::new(),
            }
        }
    }
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    pb
}

/// 全件を検証する（結果は入力順）
pub fn validate_batch(candidates: &[SourcedCandidate], options: &BatchOptions) -> Vec<RecordOutcome> {
    let pb = progress_bar(candidates.len(), options.show_progress);

    let outcomes: Vec<RecordOutcome> = if options.parallel {
        candidates
            .par_iter()
            .map(|c| {
                let outcome = validate_one(c, options);
                pb.inc(1);
                outcome
            })
            .collect()
    } else {
        candidates
            .iter()
            .map(|c| {
                let outcome = validate_one(c, options);
                pb.inc(1);
                outcome
            })
            .collect()
    };

    pb.finish_and_clear();

    let accepted = outcomes.iter().filter(|o| o.is_accepted()).count();
    tracing::info!(
        total = outcomes.len(),
        accepted,
        rejected = outcomes.len() - accepted,
        mode = %options.error_mode,
        "一括検証完了"
    );

    outcomes
}
