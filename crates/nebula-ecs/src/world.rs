//! World factory function and core resource registration.

use bevy_ecs::prelude::*;

use crate::{ActionBindings, InputState, SimulationSpeed, TimeRes};

/// Registers the per-frame resources every system expects, with defaults.
pub fn register_core_resources(world: &mut World) {
    world.insert_resource(TimeRes::default());
    world.insert_resource(SimulationSpeed::default());
    world.insert_resource(InputState::default());
    world.insert_resource(ActionBindings::default());
}

/// Creates a world with [`TimeRes`], [`SimulationSpeed`], [`InputState`] and
/// [`ActionBindings`] pre-inserted.
pub fn create_world() -> World {
    let mut world = World::new();
    register_core_resources(&mut world);
    world
}
