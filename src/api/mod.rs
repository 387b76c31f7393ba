pub mod behavior;
pub mod engine;
pub mod engine_config;
pub mod events;

pub use behavior::InteractionInputBehavior;
pub use engine::{CommittedGeometry, PointerDispatch, SurfaceEngine};
pub use engine_config::SurfaceEngineConfig;
pub use events::{EngineEvent, EngineObserver, ObserverContext};
