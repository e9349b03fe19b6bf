//! ECS world setup, frame clock, action input, and the ordered stage runner
//! that drives per-frame effect and debug systems.

mod input;
mod schedule;
mod time;
mod world;

pub use input::{ActionBindings, InputState};
pub use schedule::{EngineSchedule, EngineSchedules};
pub use time::{SimulationSpeed, TimeRes};
pub use world::{create_world, register_core_resources};
