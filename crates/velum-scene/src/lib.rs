//! # velum-scene
//!
//! Scene assembly and per-frame orchestration.
//!
//! The scene owns a body arena addressed through `BodyId`, dispatches
//! one solver task per dynamic body per frame (joined before results
//! are observed), manages the single mouse-drag binding, and loads
//! bodies from TOML configuration. A body that fails to load or step
//! is dropped or degraded; siblings are unaffected.

pub mod body;
pub mod config;
pub mod scene;

pub use body::{Body, BodyKind};
pub use config::{BodyConfig, SceneConfig};
pub use scene::{PickResult, Scene};
