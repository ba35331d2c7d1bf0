use std::io;

use anyhow::Context;
use wildestone_gtp::{Config, GtpSession};

fn main() -> anyhow::Result<()> {
    // stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wildestone=info,wildestone_gtp=info".into()),
        )
        .init();

    let config = Config::from_env()
        .map_err(anyhow::Error::msg)
        .context("invalid configuration")?;
    tracing::info!(
        "starting wildestone on a {0}x{0} board, komi {1}, {2} ko",
        config.board_size,
        config.komi,
        config.rules.ko
    );

    let mut session = GtpSession::new(&config);
    wildestone_gtp::run(&mut session, io::stdin().lock(), io::stdout().lock())
        .context("GTP session I/O failed")?;

    Ok(())
}
