//! # velum-telemetry
//!
//! Event bus for simulation telemetry. The scene emits structured
//! events (frame timing, per-body constraint energies, pick and drag
//! lifecycle, degradation notices) that pluggable sinks consume.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
