use tracing_subscriber::EnvFilter;

/// 通常時のフィルタ（個別の棄却ログは出さない）
const DEFAULT_FILTER: &str = "company_info_rust=info,company_info_common=error";

/// `--verbose` 時のフィルタ
const VERBOSE_FILTER: &str = "company_info_rust=debug,company_info_common=debug";

/// ログを初期化する（`RUST_LOG` があればそちらを優先）
///
/// 標準出力は結果表示に使うため、ログは標準エラーに出す。
pub fn init_logging(verbose: bool) {
    let default = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // テスト等で二重に初期化された場合は無視する
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
