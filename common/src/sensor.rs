use std::collections::VecDeque;

use chrono::Local;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::config::SamplingRanges;
use crate::types::Reading;

/// Seam between the session loop and wherever readings come from. The
/// simulator is the production source; tests replay fixed sequences.
pub trait ReadingSource {
    /// `None` means the source is exhausted and the session should end.
    fn next_reading(&mut self) -> Option<Reading>;
}

/// Synthetic sensor drawing uniformly within the profile's ranges.
#[derive(Debug)]
pub struct SensorSimulator<R = StdRng> {
    rng: R,
    ranges: SamplingRanges,
}

impl SensorSimulator<StdRng> {
    pub fn new(ranges: SamplingRanges) -> Self {
        Self::with_rng(ranges, StdRng::from_entropy())
    }

    pub fn seeded(ranges: SamplingRanges, seed: u64) -> Self {
        Self::with_rng(ranges, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SensorSimulator<R> {
    pub fn with_rng(ranges: SamplingRanges, rng: R) -> Self {
        Self { rng, ranges }
    }

    fn sample(&mut self) -> Reading {
        let (temp_lo, temp_hi) = self.ranges.temperature_c;
        let (hum_lo, hum_hi) = self.ranges.humidity_pct;

        let temperature_c = self.rng.gen_range(temp_lo..=temp_hi);
        let humidity_pct = self.rng.gen_range(hum_lo..=hum_hi);
        let pressure_hpa = self
            .ranges
            .pressure_hpa
            .map(|(lo, hi)| self.rng.gen_range(lo..=hi));

        Reading::new(temperature_c, humidity_pct, pressure_hpa, Local::now())
    }
}

impl<R: Rng> ReadingSource for SensorSimulator<R> {
    fn next_reading(&mut self) -> Option<Reading> {
        Some(self.sample())
    }
}

/// Replays a fixed sequence of readings, then runs dry.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    readings: VecDeque<Reading>,
}

impl ScriptedSource {
    pub fn new(readings: impl IntoIterator<Item = Reading>) -> Self {
        Self {
            readings: readings.into_iter().collect(),
        }
    }
}

impl ReadingSource for ScriptedSource {
    fn next_reading(&mut self) -> Option<Reading> {
        self.readings.pop_front()
    }
}
