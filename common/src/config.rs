use serde::{Deserialize, Serialize};

use crate::types::RunMode;

/// Uniform sampling bounds for the simulated sensor, per channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingRanges {
    pub temperature_c: (f32, f32),
    pub humidity_pct: (f32, f32),
    pub pressure_hpa: Option<(f32, f32)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertThresholds {
    /// Strictly above triggers HIGH_ALERT.
    pub high_c: f32,
    /// Strictly below triggers LOW.
    pub low_c: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendConfig {
    pub window: usize,
    /// A full-window mean strictly above this emits preemptive cooling.
    pub high_mean_c: f32,
}

/// Decision-engine half of a profile: which checks run for a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineProfile {
    pub thresholds: Option<AlertThresholds>,
    pub trend: Option<TrendConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonitorProfile {
    pub mode: RunMode,
    pub ranges: SamplingRanges,
    pub engine: EngineProfile,
    pub tick_ms: u64,
    /// Stop after this many readings; unbounded when absent.
    pub max_readings: Option<u32>,
    /// Emit the aggregate stats block every N readings.
    pub stats_every: Option<u32>,
}

impl MonitorProfile {
    pub fn basic() -> Self {
        Self {
            mode: RunMode::Basic,
            ranges: SamplingRanges {
                temperature_c: (18.0, 32.0),
                humidity_pct: (40.0, 80.0),
                pressure_hpa: None,
            },
            engine: EngineProfile {
                thresholds: Some(AlertThresholds {
                    high_c: 28.0,
                    low_c: 20.0,
                }),
                trend: None,
            },
            tick_ms: 3_000,
            max_readings: None,
            stats_every: Some(10),
        }
    }

    pub fn advanced() -> Self {
        Self {
            mode: RunMode::Advanced,
            ranges: SamplingRanges {
                temperature_c: (20.0, 30.0),
                humidity_pct: (40.0, 80.0),
                pressure_hpa: Some((950.0, 1050.0)),
            },
            engine: EngineProfile {
                thresholds: None,
                trend: Some(TrendConfig {
                    window: 5,
                    high_mean_c: 27.0,
                }),
            },
            tick_ms: 1_000,
            max_readings: Some(20),
            stats_every: None,
        }
    }

    pub fn for_mode(mode: RunMode) -> Self {
        match mode {
            RunMode::Basic => Self::basic(),
            RunMode::Advanced => Self::advanced(),
        }
    }

    pub fn sanitize(&mut self) {
        self.ranges.sanitize();
        if let Some(thresholds) = &mut self.engine.thresholds {
            if thresholds.low_c > thresholds.high_c {
                std::mem::swap(&mut thresholds.low_c, &mut thresholds.high_c);
            }
        }
        if let Some(trend) = &mut self.engine.trend {
            trend.window = trend.window.max(1);
        }
        self.tick_ms = self.tick_ms.max(1);
        self.stats_every = self.stats_every.map(|every| every.max(1));
    }
}

impl SamplingRanges {
    pub fn sanitize(&mut self) {
        sort_bounds(&mut self.temperature_c);
        sort_bounds(&mut self.humidity_pct);
        if let Some(pressure) = &mut self.pressure_hpa {
            sort_bounds(pressure);
        }
    }
}

fn sort_bounds(bounds: &mut (f32, f32)) {
    if bounds.0 > bounds.1 {
        std::mem::swap(&mut bounds.0, &mut bounds.1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_profile_matches_demo_constants() {
        let profile = MonitorProfile::basic();
        assert_eq!(profile.ranges.temperature_c, (18.0, 32.0));
        assert_eq!(profile.ranges.pressure_hpa, None);
        assert_eq!(profile.tick_ms, 3_000);
        assert_eq!(profile.stats_every, Some(10));
        assert!(profile.engine.trend.is_none());
    }

    #[test]
    fn advanced_profile_matches_demo_constants() {
        let profile = MonitorProfile::advanced();
        assert_eq!(profile.ranges.temperature_c, (20.0, 30.0));
        assert_eq!(profile.ranges.pressure_hpa, Some((950.0, 1050.0)));
        assert_eq!(profile.max_readings, Some(20));
        assert!(profile.engine.thresholds.is_none());
        assert_eq!(
            profile.engine.trend,
            Some(TrendConfig {
                window: 5,
                high_mean_c: 27.0,
            })
        );
    }

    #[test]
    fn sanitize_repairs_inverted_bounds_and_zero_window() {
        let mut profile = MonitorProfile::advanced();
        profile.ranges.temperature_c = (30.0, 20.0);
        profile.engine.trend = Some(TrendConfig {
            window: 0,
            high_mean_c: 27.0,
        });
        profile.tick_ms = 0;

        profile.sanitize();

        assert_eq!(profile.ranges.temperature_c, (20.0, 30.0));
        assert_eq!(profile.engine.trend.unwrap().window, 1);
        assert_eq!(profile.tick_ms, 1);
    }

    #[test]
    fn sanitize_swaps_inverted_thresholds() {
        let mut profile = MonitorProfile::basic();
        profile.engine.thresholds = Some(AlertThresholds {
            high_c: 20.0,
            low_c: 28.0,
        });

        profile.sanitize();

        assert_eq!(
            profile.engine.thresholds,
            Some(AlertThresholds {
                high_c: 28.0,
                low_c: 20.0,
            })
        );
    }
}
