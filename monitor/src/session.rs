use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use tokio::sync::watch;
use tracing::{info, warn};

use edgemon_common::{report, EdgeEngine, MonitorProfile, ReadingSource, RunSummary};

/// Paced generate/decide/report loop. Runs until the profile's reading cap
/// is reached, the source runs dry, or the shutdown channel fires.
pub async fn run(
    profile: &MonitorProfile,
    source: &mut impl ReadingSource,
    out: &mut impl Write,
    shutdown: &mut watch::Receiver<bool>,
) -> anyhow::Result<RunSummary> {
    let mut engine = EdgeEngine::new(profile.engine);
    report::banner(out, profile).context("failed to write session banner")?;

    let mut interval = tokio::time::interval(Duration::from_millis(profile.tick_ms));

    loop {
        if reached_cap(profile, &engine) {
            break;
        }

        tokio::select! {
            // Pending interrupts win over an already-elapsed tick.
            biased;
            _ = shutdown.changed() => {
                info!("interrupt received, stopping session");
                break;
            }
            _ = interval.tick() => {}
        }

        let Some(reading) = source.next_reading() else {
            break;
        };

        if let Err(err) = reading.validate() {
            warn!("discarding implausible reading: {err}");
            continue;
        }

        let decision = engine.observe(&reading);
        report::reading_report(out, profile, &reading, &decision)
            .context("failed to write reading report")?;

        if let Some(every) = profile.stats_every {
            if engine.readings() % u64::from(every) == 0 {
                report::stats_block(out, engine.readings(), engine.alerts())
                    .context("failed to write stats block")?;
            }
        }

        report::divider(out).context("failed to write divider")?;
    }

    let summary = engine.summary();
    report::summary(out, profile.mode, &summary).context("failed to write session summary")?;
    Ok(summary)
}

fn reached_cap(profile: &MonitorProfile, engine: &EdgeEngine) -> bool {
    profile
        .max_readings
        .map(|max| engine.readings() >= u64::from(max))
        .unwrap_or(false)
}
