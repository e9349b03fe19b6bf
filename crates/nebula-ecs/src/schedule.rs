//! Engine stage labels and the ordered per-frame runner.

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::{IntoSystemConfigs, ScheduleLabel};

use crate::{InputState, SimulationSpeed, TimeRes};

/// Labels for each per-frame execution stage.
///
/// Stages run in the order listed, top to bottom, every frame.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EngineSchedule {
    /// Input handling and debug controls.
    PreUpdate,
    /// Gameplay and effect animation.
    Update,
    /// Overlay drawing and parameter upload.
    Render,
}

/// Ordered collection of [`Schedule`]s that drives one frame.
///
/// Before any stage runs, [`TimeRes`] is advanced by the raw frame time
/// scaled by the current [`SimulationSpeed`]. After the last stage, input
/// edges are cleared.
pub struct EngineSchedules {
    schedules: Vec<(EngineSchedule, Schedule)>,
}

impl EngineSchedules {
    /// Create an empty set of engine stages.
    pub fn new() -> Self {
        let schedules = [
            EngineSchedule::PreUpdate,
            EngineSchedule::Update,
            EngineSchedule::Render,
        ]
        .into_iter()
        .map(|label| (label, Schedule::default()))
        .collect();

        Self { schedules }
    }

    /// Register a system (or system tuple) into a specific stage.
    pub fn add_system<M>(&mut self, stage: EngineSchedule, system: impl IntoSystemConfigs<M>) {
        if let Some(schedule) = self.get_schedule_mut(&stage) {
            schedule.add_systems(system);
        }
    }

    /// Run all stages in order for one frame of `frame_dt` wall-clock seconds.
    pub fn run(&mut self, world: &mut World, frame_dt: f32) {
        let speed = world
            .get_resource::<SimulationSpeed>()
            .copied()
            .unwrap_or_default();
        if let Some(mut time) = world.get_resource_mut::<TimeRes>() {
            time.advance(frame_dt, speed);
            tracing::trace!(tick = time.tick, delta = time.delta, "frame start");
        }

        for (_label, schedule) in &mut self.schedules {
            schedule.run(world);
        }

        if let Some(mut input) = world.get_resource_mut::<InputState>() {
            input.clear_transients();
        }
    }

    /// Returns a mutable reference to the schedule for a given stage.
    pub fn get_schedule_mut(&mut self, stage: &EngineSchedule) -> Option<&mut Schedule> {
        self.schedules
            .iter_mut()
            .find(|(label, _)| label == stage)
            .map(|(_, schedule)| schedule)
    }
}

impl Default for EngineSchedules {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_world;

    #[derive(Resource, Default)]
    struct ExecutionLog {
        stages: Vec<String>,
    }

    fn log_system(stage_name: &'static str) -> impl Fn(ResMut<'_, ExecutionLog>) {
        move |mut log: ResMut<'_, ExecutionLog>| {
            log.stages.push(stage_name.to_string());
        }
    }

    #[test]
    fn test_schedule_runs_all_stages_in_order() {
        let mut world = create_world();
        world.insert_resource(ExecutionLog::default());

        let mut schedules = EngineSchedules::new();
        schedules.add_system(EngineSchedule::Render, log_system("Render"));
        schedules.add_system(EngineSchedule::PreUpdate, log_system("PreUpdate"));
        schedules.add_system(EngineSchedule::Update, log_system("Update"));

        schedules.run(&mut world, 1.0 / 60.0);

        let log = world.resource::<ExecutionLog>();
        assert_eq!(log.stages, vec!["PreUpdate", "Update", "Render"]);
    }

    #[test]
    fn test_time_is_advanced_before_update() {
        let mut world = create_world();
        world.insert_resource(SimulationSpeed::new(0.5));

        #[derive(Resource, Default)]
        struct SeenDelta(f32);
        world.insert_resource(SeenDelta::default());

        let mut schedules = EngineSchedules::new();
        schedules.add_system(
            EngineSchedule::Update,
            |time: Res<'_, TimeRes>, mut seen: ResMut<'_, SeenDelta>| {
                seen.0 = time.delta;
            },
        );

        schedules.run(&mut world, 0.2);
        assert_eq!(world.resource::<SeenDelta>().0, 0.1);
        assert_eq!(world.resource::<TimeRes>().tick, 1);
    }

    #[test]
    fn test_input_edges_cleared_after_frame() {
        let mut world = create_world();
        world.resource_mut::<InputState>().press("time_scale_up");

        #[derive(Resource, Default)]
        struct SawEdge(bool);
        world.insert_resource(SawEdge::default());

        let mut schedules = EngineSchedules::new();
        schedules.add_system(
            EngineSchedule::PreUpdate,
            |input: Res<'_, InputState>, mut saw: ResMut<'_, SawEdge>| {
                saw.0 = input.just_pressed("time_scale_up");
            },
        );

        schedules.run(&mut world, 0.016);
        assert!(world.resource::<SawEdge>().0);
        assert!(!world.resource::<InputState>().just_pressed("time_scale_up"));
    }
}
