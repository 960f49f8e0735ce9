use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RunMode {
    Basic,
    Advanced,
}

impl RunMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "BASIC",
            Self::Advanced => "ADVANCED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    HighAlert,
    Low,
    Normal,
}

impl Classification {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HighAlert => "HIGH_ALERT",
            Self::Low => "LOW",
            Self::Normal => "NORMAL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineAction {
    ActivateCooling,
    LogIncident,
    ActivateHeating,
    PreemptiveCooling,
}

/// One synthetic sensor sample. Pressure is only sampled in the advanced
/// profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub temperature_c: f32,
    pub humidity_pct: f32,
    pub pressure_hpa: Option<f32>,
    pub taken_at: DateTime<Local>,
}

impl Reading {
    pub fn new(
        temperature_c: f32,
        humidity_pct: f32,
        pressure_hpa: Option<f32>,
        taken_at: DateTime<Local>,
    ) -> Self {
        Self {
            temperature_c,
            humidity_pct,
            pressure_hpa,
            taken_at,
        }
    }

    /// Rejects values outside the physical envelope of the simulated
    /// hardware before they reach the engine.
    pub fn validate(&self) -> Result<(), ReadingError> {
        check_field("temperature", self.temperature_c, -40.0, 85.0)?;
        check_field("humidity", self.humidity_pct, 0.0, 100.0)?;
        if let Some(pressure) = self.pressure_hpa {
            check_field("pressure", pressure, 300.0, 1100.0)?;
        }
        Ok(())
    }
}

fn check_field(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), ReadingError> {
    if !value.is_finite() {
        return Err(ReadingError::NonFinite { field });
    }
    if !(min..=max).contains(&value) {
        return Err(ReadingError::OutOfRange { field, value });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ReadingError {
    #[error("non-finite {field} value")]
    NonFinite { field: &'static str },
    #[error("{field} value {value} outside plausible sensor range")]
    OutOfRange { field: &'static str, value: f32 },
}

/// Totals reported when a session ends, whatever ended it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub readings: u64,
    pub alerts: u64,
    pub trend_alerts: u64,
}
