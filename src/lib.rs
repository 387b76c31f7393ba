//! surface-rs: drag/resize interaction engine for bounded 2D surfaces.
//!
//! This crate normalizes mouse and touch input into one pointer stream,
//! classifies pointer-downs against resize handle zones, runs a single
//! drag/resize gesture state machine, and clamps every committed geometry
//! into the live surface frame. It owns element geometry only; what an
//! element means is the host's business.

pub mod api;
pub mod core;
pub mod error;
pub mod input;
pub mod interaction;
pub mod telemetry;

pub use api::{SurfaceEngine, SurfaceEngineConfig};
pub use error::{SurfaceError, SurfaceResult};
