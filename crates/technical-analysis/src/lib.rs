pub mod indicators;
pub mod signals;

pub use indicators::{relative_strength, sma};
pub use signals::{OscillatorSignal, TechnicalSummary, Trend};
