//! ログ出力設定
//!
//! 結果は stdout、ログは stderr に分ける。

use tracing_subscriber::filter::LevelFilter;

/// `--verbose` 指定時は DEBUG、通常は WARN 以上
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    }
}

/// stderr 向けの fmt サブスクライバを登録する（二回目以降は何もしない）
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level_for(verbose))
        .with_target(false)
        .try_init();
}
