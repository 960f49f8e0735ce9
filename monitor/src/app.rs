use std::io;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::{info, warn};

use edgemon_common::{report, MonitorProfile, RunMode, SensorSimulator};

use crate::session;

pub async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut stdout = io::stdout();

    report::menu(&mut stdout).context("failed to write mode menu")?;
    let Some(mode) = prompt_mode().await? else {
        report::goodbye(&mut stdout).context("failed to write goodbye")?;
        return Ok(());
    };

    let mut profile = MonitorProfile::for_mode(mode);
    profile.sanitize();
    info!(
        mode = mode.as_str(),
        tick_ms = profile.tick_ms,
        "starting monitor session"
    );

    let mut source = SensorSimulator::new(profile.ranges);
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            // Keep the sender alive so the session loop never sees a
            // closed channel as an interrupt.
            warn!("failed to listen for interrupt: {err}");
            std::future::pending::<()>().await;
        }
        let _ = shutdown_tx.send(true);
    });

    let summary = session::run(&profile, &mut source, &mut stdout, &mut shutdown_rx).await?;
    info!(
        readings = summary.readings,
        alerts = summary.alerts,
        trend_alerts = summary.trend_alerts,
        "session finished"
    );
    Ok(())
}

/// `None` means the user interrupted at the prompt.
async fn prompt_mode() -> anyhow::Result<Option<RunMode>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    tokio::select! {
        line = lines.next_line() => {
            let line = line.context("failed to read mode selection")?;
            // Anything other than an explicit "2" (including end of input)
            // falls back to the basic profile.
            let mode = match line.as_deref().map(str::trim) {
                Some("2") => RunMode::Advanced,
                _ => RunMode::Basic,
            };
            Ok(Some(mode))
        }
        _ = tokio::signal::ctrl_c() => Ok(None),
    }
}
