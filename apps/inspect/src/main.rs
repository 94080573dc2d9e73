//! Resolves the layered settings exactly as a service would at startup and
//! prints the merged tree, so operators can see what a deployment actually
//! gets for the current `ROOST_ENVIRONMENT` / `ROOST_SETTINGS_PATH` pair.

use anyhow::Context;
use roost_logger::{LevelFilter, Logger};
use roost_settings::Settings;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the WARN default.
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).level(LevelFilter::WARN).init()?;

    let settings =
        Settings::builder().load_value().context("Critical: Settings are malformed")?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &settings).context("Failed to render settings")?;
    writeln!(stdout)?;

    Ok(())
}
