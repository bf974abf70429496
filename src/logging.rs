//! ログ初期化
//!
//! `RUST_LOG` があればそれを使い、なければ `--verbose` で debug、通常は warn。

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn init(verbose: bool) {
    let default_filter = if verbose { "skill_gap=debug" } else { "warn" };

    // 二重初期化は無視
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
