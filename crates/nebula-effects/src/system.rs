//! ECS wiring: spawning, per-frame animation, and uniform packing.

use bevy_ecs::prelude::*;
use nebula_ecs::TimeRes;
use nebula_materials::MaterialParams;

use crate::ids;
use crate::lightning::LightningEffect;

/// Packed lightning uniform block, refreshed when the material changes.
#[derive(Component, Debug, Clone, Default)]
pub struct LightningUniforms {
    /// Std140 bytes in [`ids::uniform_layout`] order.
    pub bytes: Vec<u8>,
    /// Material generation the bytes were packed from.
    pub generation: u64,
}

/// Activate `effect` against `params` and spawn them as one entity.
///
/// `params` may carry authored defaults (noise, colour); setup overwrites
/// only the values the effect owns.
pub fn spawn_lightning(
    world: &mut World,
    mut effect: LightningEffect,
    mut params: MaterialParams,
) -> Entity {
    effect.activate(&mut params);
    world
        .spawn((effect, params, LightningUniforms::default()))
        .id()
}

/// Advance every lightning effect by the current frame's scaled delta.
pub fn lightning_system(
    time: Res<'_, TimeRes>,
    mut effects: Query<'_, '_, (&mut LightningEffect, &mut MaterialParams)>,
) {
    for (mut effect, mut params) in &mut effects {
        effect.tick(&time, &mut *params);
    }
}

/// Repack uniforms for lightning materials written since the last pack.
pub fn lightning_uniform_system(
    mut materials: Query<
        '_,
        '_,
        (&MaterialParams, &mut LightningUniforms),
        With<LightningEffect>,
    >,
) {
    let layout = ids::uniform_layout();
    for (params, mut uniforms) in &mut materials {
        if !uniforms.bytes.is_empty() && uniforms.generation == params.generation() {
            continue;
        }
        match layout.pack_bytes(params) {
            Ok(bytes) => {
                uniforms.bytes = bytes;
                uniforms.generation = params.generation();
            }
            Err(err) => tracing::warn!(%err, "failed to pack lightning uniforms"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LightningConfig;
    use nebula_ecs::{EngineSchedule, EngineSchedules, create_world};

    fn schedules() -> EngineSchedules {
        let mut schedules = EngineSchedules::new();
        schedules.add_system(EngineSchedule::Update, lightning_system);
        schedules.add_system(EngineSchedule::Render, lightning_uniform_system);
        schedules
    }

    #[test]
    fn test_spawn_runs_setup() {
        let mut world = create_world();
        let effect = LightningEffect::new(LightningConfig::default(), Some(1)).unwrap();
        let entity = spawn_lightning(&mut world, effect, MaterialParams::new());

        let params = world.get::<MaterialParams>(entity).unwrap();
        assert_eq!(params.float(ids::PROGRESS), Some(0.0));
        assert_eq!(
            params.vector(ids::START_POSITION),
            Some(LightningConfig::default().start)
        );
        assert!(world.get::<LightningEffect>(entity).unwrap().is_active());
    }

    #[test]
    fn test_system_advances_effects_and_packs_uniforms() {
        let mut world = create_world();
        let effect = LightningEffect::new(LightningConfig::default(), Some(1)).unwrap();
        let entity = spawn_lightning(&mut world, effect, MaterialParams::new());
        let mut schedules = schedules();

        schedules.run(&mut world, 0.1);

        let params = world.get::<MaterialParams>(entity).unwrap();
        let progress = params.float(ids::PROGRESS).unwrap();
        assert!(progress > 0.0 && progress < 1.0);
        assert_eq!(params.float(ids::NOISE_OFFSET), Some(0.1));

        let uniforms = world.get::<LightningUniforms>(entity).unwrap();
        assert_eq!(uniforms.bytes.len(), ids::uniform_layout().byte_size());
        assert_eq!(uniforms.generation, params.generation());
    }

    #[test]
    fn test_uniforms_skip_unchanged_materials() {
        let mut world = create_world();
        let effect = LightningEffect::new(LightningConfig::default(), Some(1)).unwrap();
        let entity = spawn_lightning(&mut world, effect, MaterialParams::new());
        world.get_mut::<LightningEffect>(entity).unwrap().deactivate();
        let mut schedules = schedules();

        schedules.run(&mut world, 0.1);
        world.get_mut::<LightningUniforms>(entity).unwrap().bytes = vec![7];
        schedules.run(&mut world, 0.1);

        assert_eq!(world.get::<LightningUniforms>(entity).unwrap().bytes, vec![7]);
    }

    #[test]
    fn test_effects_are_independent() {
        let mut world = create_world();
        let slow = LightningConfig {
            appear_duration: 10.0,
            ..LightningConfig::default()
        };
        let a = spawn_lightning(
            &mut world,
            LightningEffect::new(LightningConfig::default(), Some(1)).unwrap(),
            MaterialParams::new(),
        );
        let b = spawn_lightning(
            &mut world,
            LightningEffect::new(slow, Some(2)).unwrap(),
            MaterialParams::new(),
        );
        let mut schedules = schedules();
        for _ in 0..10 {
            schedules.run(&mut world, 0.1);
        }

        assert_eq!(world.get::<LightningEffect>(a).unwrap().strike_count(), 1);
        assert_eq!(world.get::<LightningEffect>(b).unwrap().strike_count(), 0);
    }
}
