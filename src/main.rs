use anyhow::Context;
use clap::Parser;
use company_info_common::{
    format_contact_url, format_first_name, normalize_address, normalize_company_name,
    normalize_tel_number, CandidateRecord, RequiredKeywords,
};
use company_info_rust::{batch, cli, config, error, export, logging, report, scanner};
use batch::BatchOptions;
use cli::{Cli, Commands, NormalizeTarget};
use config::Config;
use report::{OutcomeEnvelope, ValidationReport};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let config = Config::load().context("設定ファイルの読み込みに失敗しました")?;

    match cli.command {
        Commands::Validate {
            input,
            output,
            format,
            error_mode,
            required_businesses,
            required_genre,
            no_parallel,
        } => {
            println!("🏢 company-info - 一括検証\n");

            // 1. 入力読み込み
            println!("[1/3] 入力を読み込み中...");
            let candidates = scanner::load_candidates(&input)
                .with_context(|| format!("入力の読み込みに失敗: {}", input.display()))?;
            println!("✔ {}件の候補レコードを検出\n", candidates.len());

            if candidates.is_empty() {
                return Err(error::CompanyInfoError::NoRecordsFound(
                    input.display().to_string()
                ).into());
            }

            // 2. 検証
            let error_mode = match error_mode {
                Some(mode) => mode,
                None => config.effective_error_mode()?,
            };
            println!("[2/3] 検証中... (モード: {})", error_mode);

            let options = BatchOptions {
                error_mode,
                parallel: config.parallel && !no_parallel,
                requirements: RequiredKeywords {
                    required_businesses,
                    required_genre,
                },
                show_progress: !cli.verbose,
            };
            let outcomes = batch::validate_batch(&candidates, &options);
            let report = ValidationReport::build(&outcomes, error_mode);

            println!("✔ 受理 {}件 / 棄却 {}件", report.accepted, report.rejected);
            for (code, count) in report.rejection_counts() {
                println!("  - {}: {}件", code, count);
            }
            let warned = outcomes.iter().filter(|o| !o.warnings.is_empty()).count();
            if warned > 0 {
                println!("  ⚠ 指定語を満たさないレコード: {}件", warned);
            }
            println!();

            // 3. 出力
            println!("[3/3] レポートを出力中...");
            let output = output.unwrap_or_else(|| export::default_output_dir(&input));
            let format = format.unwrap_or(config.default_format);
            let written = export::export_results(&outcomes, &report, format, &output)
                .context("レポートの出力に失敗しました")?;
            for path in written {
                println!("✔ 出力: {}", path.display());
            }

            println!("\n✅ 検証完了");
        }

        Commands::Check {
            company,
            tel,
            address,
            first_name,
            url,
            contact_url,
            business,
            genre,
            error_mode,
        } => {
            let error_mode = match error_mode {
                Some(mode) => mode,
                None => config.effective_error_mode()?,
            };

            let sourced = scanner::SourcedCandidate {
                source: "引数".to_string(),
                candidate: CandidateRecord {
                    company,
                    tel,
                    address,
                    first_name,
                    url,
                    contact_url,
                    business,
                    genre,
                },
            };
            let options = BatchOptions {
                error_mode,
                ..Default::default()
            };
            let outcome = batch::validate_one(&sourced, &options);
            let envelope = OutcomeEnvelope::from(&outcome);
            println!("{}", serde_json::to_string_pretty(&envelope)?);

            if !envelope.success {
                std::process::exit(1);
            }
        }

        Commands::Normalize { field, value } => {
            let normalized = match field {
                NormalizeTarget::Company => Some(normalize_company_name(&value)),
                NormalizeTarget::Tel => Some(normalize_tel_number(&value)),
                NormalizeTarget::Address => Some(normalize_address(&value)),
                NormalizeTarget::FirstName => format_first_name(Some(&value)),
                NormalizeTarget::ContactUrl => format_contact_url(Some(&value)),
            };

            match normalized {
                Some(v) => println!("{}", v),
                None => println!("(なし)"),
            }
        }

        Commands::Config { set_error_mode, set_parallel, set_format, show } => {
            let mut config = config;
            let changed = set_error_mode.is_some() || set_parallel.is_some() || set_format.is_some();

            if let Some(mode) = set_error_mode {
                config.error_mode = mode;
            }
            if let Some(parallel) = set_parallel {
                config.parallel = parallel;
            }
            if let Some(format) = set_format {
                config.default_format = format;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  エラーモード: {}", config.error_mode);
                println!("  並列処理: {}", if config.parallel { "有効" } else { "無効" });
                println!("  出力形式: {}", config.default_format);
                if let Ok(mode) = std::env::var(config::ERROR_MODE_ENV) {
                    println!("  ({} = {} が優先されます)", config::ERROR_MODE_ENV, mode);
                }
            }
        }
    }

    Ok(())
}
