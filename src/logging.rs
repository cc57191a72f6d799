//! 開発用トレースログ
//!
//! `RUST_LOG` で出力レベルを指定（未指定時は `warn`）。`--verbose` なら `debug`。
//! 出力先はstderr。ゲーム画面（stdout）とは混ざらない。

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
