pub mod config;
pub mod engine;
pub mod report;
pub mod sensor;
pub mod types;
pub mod window;

pub use config::{AlertThresholds, EngineProfile, MonitorProfile, SamplingRanges, TrendConfig};
pub use engine::{Decision, EdgeEngine};
pub use sensor::{ReadingSource, ScriptedSource, SensorSimulator};
pub use types::{Classification, EngineAction, Reading, ReadingError, RunMode, RunSummary};
pub use window::RollingWindow;
