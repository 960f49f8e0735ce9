use crate::config::{AlertThresholds, EngineProfile};
use crate::types::{Classification, EngineAction, Reading, RunSummary};
use crate::window::RollingWindow;

/// What the engine decided about a single reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    /// Absent when the profile runs without per-reading alerting.
    pub classification: Option<Classification>,
    /// The full-window mean, once enough readings have accumulated.
    pub rolling_mean_c: Option<f32>,
    pub actions: Vec<EngineAction>,
}

/// Local decision engine. Synchronous and deterministic: everything it
/// knows arrives through `observe`, so tests drive it with fixed readings.
#[derive(Debug, Clone)]
pub struct EdgeEngine {
    profile: EngineProfile,
    window: Option<RollingWindow>,
    readings: u64,
    alerts: u64,
    trend_alerts: u64,
}

impl EdgeEngine {
    pub fn new(profile: EngineProfile) -> Self {
        let window = profile
            .trend
            .map(|trend| RollingWindow::new(trend.window));
        Self {
            profile,
            window,
            readings: 0,
            alerts: 0,
            trend_alerts: 0,
        }
    }

    pub fn readings(&self) -> u64 {
        self.readings
    }

    pub fn alerts(&self) -> u64 {
        self.alerts
    }

    pub fn trend_alerts(&self) -> u64 {
        self.trend_alerts
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            readings: self.readings,
            alerts: self.alerts,
            trend_alerts: self.trend_alerts,
        }
    }

    pub fn observe(&mut self, reading: &Reading) -> Decision {
        self.readings = self.readings.saturating_add(1);

        let mut actions = Vec::new();
        let classification = match self.profile.thresholds {
            Some(thresholds) => {
                Some(self.classify(reading.temperature_c, thresholds, &mut actions))
            }
            None => None,
        };

        let rolling_mean_c = self.update_trend(reading.temperature_c, &mut actions);

        Decision {
            classification,
            rolling_mean_c,
            actions,
        }
    }

    // Exactly one branch per reading; both boundaries are exclusive, so
    // 28.0 and 20.0 land on Normal.
    fn classify(
        &mut self,
        temperature_c: f32,
        thresholds: AlertThresholds,
        actions: &mut Vec<EngineAction>,
    ) -> Classification {
        if temperature_c > thresholds.high_c {
            self.alerts = self.alerts.saturating_add(1);
            actions.push(EngineAction::ActivateCooling);
            actions.push(EngineAction::LogIncident);
            Classification::HighAlert
        } else if temperature_c < thresholds.low_c {
            actions.push(EngineAction::ActivateHeating);
            Classification::Low
        } else {
            Classification::Normal
        }
    }

    fn update_trend(&mut self, temperature_c: f32, actions: &mut Vec<EngineAction>) -> Option<f32> {
        let trend = self.profile.trend?;
        let window = self.window.as_mut()?;

        window.push(temperature_c);
        let mean = window.mean()?;

        if mean > trend.high_mean_c {
            self.trend_alerts = self.trend_alerts.saturating_add(1);
            actions.push(EngineAction::PreemptiveCooling);
        }

        Some(mean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MonitorProfile;
    use approx::assert_relative_eq;
    use chrono::{Local, TimeZone};

    fn reading(temperature_c: f32) -> Reading {
        let taken_at = Local.with_ymd_and_hms(2026, 1, 5, 8, 30, 0).unwrap();
        Reading::new(temperature_c, 55.0, None, taken_at)
    }

    fn basic_engine() -> EdgeEngine {
        EdgeEngine::new(MonitorProfile::basic().engine)
    }

    fn advanced_engine() -> EdgeEngine {
        EdgeEngine::new(MonitorProfile::advanced().engine)
    }

    #[test]
    fn high_temperature_raises_alert_with_both_actions() {
        let mut engine = basic_engine();
        let decision = engine.observe(&reading(28.1));

        assert_eq!(decision.classification, Some(Classification::HighAlert));
        assert_eq!(decision.classification.unwrap().as_str(), "HIGH_ALERT");
        assert_eq!(
            decision.actions,
            vec![EngineAction::ActivateCooling, EngineAction::LogIncident]
        );
        assert_eq!(engine.alerts(), 1);
    }

    #[test]
    fn low_temperature_requests_heating_without_alerting() {
        let mut engine = basic_engine();
        let decision = engine.observe(&reading(19.9));

        assert_eq!(decision.classification, Some(Classification::Low));
        assert_eq!(decision.actions, vec![EngineAction::ActivateHeating]);
        assert_eq!(engine.alerts(), 0);
    }

    #[test]
    fn threshold_boundaries_are_exclusive() {
        let mut engine = basic_engine();

        assert_eq!(
            engine.observe(&reading(28.0)).classification,
            Some(Classification::Normal)
        );
        assert_eq!(
            engine.observe(&reading(20.0)).classification,
            Some(Classification::Normal)
        );
        assert_eq!(engine.alerts(), 0);
    }

    #[test]
    fn normal_reading_takes_no_action() {
        let mut engine = basic_engine();
        let decision = engine.observe(&reading(24.0));

        assert_eq!(decision.classification, Some(Classification::Normal));
        assert!(decision.actions.is_empty());
        assert_eq!(decision.rolling_mean_c, None);
    }

    #[test]
    fn alert_counter_tracks_high_alerts_only() {
        let mut engine = basic_engine();
        for temperature in [29.0, 18.5, 25.0, 31.0, 28.0] {
            engine.observe(&reading(temperature));
        }

        assert_eq!(engine.readings(), 5);
        assert_eq!(engine.alerts(), 2);
        assert!(engine.alerts() <= engine.readings());
    }

    #[test]
    fn advanced_profile_skips_per_reading_classification() {
        let mut engine = advanced_engine();
        let decision = engine.observe(&reading(29.9));

        assert_eq!(decision.classification, None);
        assert!(decision.actions.is_empty());
        assert_eq!(engine.alerts(), 0);
    }

    #[test]
    fn rolling_mean_appears_after_five_readings() {
        let mut engine = advanced_engine();

        for temperature in [30.0, 31.0, 29.0, 27.0] {
            let decision = engine.observe(&reading(temperature));
            assert_eq!(decision.rolling_mean_c, None);
            assert!(decision.actions.is_empty());
        }

        let decision = engine.observe(&reading(26.0));
        assert_relative_eq!(decision.rolling_mean_c.unwrap(), 28.6);
        assert_eq!(decision.actions, vec![EngineAction::PreemptiveCooling]);
        assert_eq!(engine.trend_alerts(), 1);
        assert_eq!(engine.alerts(), 0);
    }

    #[test]
    fn cool_trend_stays_quiet() {
        let mut engine = advanced_engine();
        for temperature in [25.0, 26.0, 25.5, 24.0, 26.5] {
            let decision = engine.observe(&reading(temperature));
            assert!(decision.actions.is_empty());
        }

        assert_eq!(engine.trend_alerts(), 0);
    }

    #[test]
    fn summary_reflects_counters() {
        let mut engine = basic_engine();
        for temperature in [29.0, 24.0, 30.5] {
            engine.observe(&reading(temperature));
        }

        assert_eq!(
            engine.summary(),
            RunSummary {
                readings: 3,
                alerts: 2,
                trend_alerts: 0,
            }
        );
    }
}
