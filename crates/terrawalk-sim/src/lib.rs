//! Tick-driven simulation: player movement over streamed terrain, block
//! edits, visibility and the collaborator hooks around them.
#![forbid(unsafe_code)]

pub mod collab;
pub mod config;
pub mod input;
pub mod persist;
pub mod player;
mod session;
pub mod state;
pub mod step;
pub mod visibility;

pub use collab::{InventoryStore, NullRenderer, RenderSink};
pub use config::{PlayerParams, SimConfig, SlopeParams, load_config_from_path};
pub use input::{InputEvent, InputFrame, MoveKeys};
pub use persist::{MemoryInventoryStore, TomlInventoryStore};
pub use player::{GroundProbe, MotionState, PlayerController, PlayerState, SlopeResolution, StepReport};
pub use session::Simulation;
pub use state::SimulationState;
pub use step::{TickReport, tick};
pub use visibility::Visibility;
