use std::io::{self, Write};

use crate::config::MonitorProfile;
use crate::engine::Decision;
use crate::types::{Classification, EngineAction, Reading, RunMode, RunSummary};

const RULE: &str = "==================================================";

pub fn menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "choose demo mode:")?;
    writeln!(out, "  1. basic edge monitoring")?;
    writeln!(out, "  2. advanced edge analytics")?;
    write!(out, "enter choice (1 or 2): ")?;
    out.flush()
}

pub fn banner(out: &mut impl Write, profile: &MonitorProfile) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    match profile.mode {
        RunMode::Basic => {
            writeln!(out, "edge monitor starting (basic)")?;
            writeln!(out, "simulating an IoT temperature/humidity sensor")?;
            writeln!(out, "readings are processed locally, no cloud round trip")?;
        }
        RunMode::Advanced => {
            writeln!(out, "edge monitor starting (advanced analytics)")?;
            if let Some(max) = profile.max_readings {
                writeln!(out, "fixed run of {max} readings with trend detection")?;
            }
        }
    }
    writeln!(out, "{RULE}")
}

/// Status line for one reading, followed by whatever the engine decided.
pub fn reading_report(
    out: &mut impl Write,
    profile: &MonitorProfile,
    reading: &Reading,
    decision: &Decision,
) -> io::Result<()> {
    write!(
        out,
        "{} | temp {:.1} C | humidity {:.1} %",
        reading.taken_at.format("%H:%M:%S"),
        reading.temperature_c,
        reading.humidity_pct,
    )?;
    if let Some(pressure) = reading.pressure_hpa {
        write!(out, " | pressure {pressure:.1} hPa")?;
    }
    writeln!(out)?;

    if let Some(mean) = decision.rolling_mean_c {
        let window = profile.engine.trend.map(|trend| trend.window).unwrap_or(1);
        writeln!(out, "{window}-reading average temp: {mean:.1} C")?;
    }

    if let Some(classification) = decision.classification {
        match classification {
            Classification::HighAlert => writeln!(out, "ALERT: high temperature detected")?,
            Classification::Low => writeln!(out, "cold temperature detected")?,
            Classification::Normal => writeln!(out, "temperature normal, no action needed")?,
        }
    }

    for action in &decision.actions {
        writeln!(out, "   -> {}", action_label(*action))?;
    }

    Ok(())
}

fn action_label(action: EngineAction) -> &'static str {
    match action {
        EngineAction::ActivateCooling => "activating cooling system",
        EngineAction::LogIncident => "logging incident locally",
        EngineAction::ActivateHeating => "activating heating system",
        EngineAction::PreemptiveCooling => "temperature trending high, preemptive cooling",
    }
}

pub fn stats_block(out: &mut impl Write, readings: u64, alerts: u64) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "EDGE STATS: {readings} readings processed locally")?;
    writeln!(out, "response time: <10ms local (cloud round trip: 100-500ms)")?;
    writeln!(out, "privacy: all data processed on device")?;
    writeln!(out, "alerts triggered: {alerts}")?;
    writeln!(out, "{RULE}")?;
    writeln!(out)
}

pub fn divider(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(60))
}

pub fn summary(out: &mut impl Write, mode: RunMode, summary: &RunSummary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "monitor stopped")?;
    writeln!(out, "total readings processed: {}", summary.readings)?;
    match mode {
        RunMode::Basic => writeln!(out, "total alerts: {}", summary.alerts),
        RunMode::Advanced => writeln!(out, "trend alerts: {}", summary.trend_alerts),
    }
}

pub fn goodbye(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "goodbye")
}
