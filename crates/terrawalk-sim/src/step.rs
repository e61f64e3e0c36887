//! The fixed per-tick pipeline.

use terrawalk_edit::{EditWorld, PlacementOutcome, break_at, look_direction, place, placement_target};
use terrawalk_spatial::ObjectId;
use terrawalk_world::HeightResolver;

use crate::collab::RenderSink;
use crate::input::{InputEvent, InputFrame};
use crate::player::{PlayerController, StepReport};
use crate::state::SimulationState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Click {
    Place,
    Break,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    pub step: StepReport,
    pub placements: Vec<PlacementOutcome>,
    pub broken: Vec<ObjectId>,
    /// Chunks created by streaming this tick.
    pub streamed: usize,
    pub visibility_flips: usize,
}

impl TickReport {
    /// Whether any click changed the hotbar.
    pub fn placed_any(&self) -> bool {
        self.placements
            .iter()
            .any(|p| matches!(p, PlacementOutcome::Placed { .. }))
    }
}

/// Runs one tick: input, target and clicks, movement, streaming, visibility.
pub fn tick(state: &mut SimulationState, input: &InputFrame, sink: &mut dyn RenderSink) -> TickReport {
    state.tick += 1;
    let world_size = state.config.worldgen.world.size;
    let tolerance = state.config.worldgen.world.ground_tolerance;

    // Input.
    PlayerController::new(&state.config.player, &state.config.slope, world_size).apply_look(
        &mut state.player,
        input.look_delta.0,
        input.look_delta.1,
    );
    let mut clicks = Vec::new();
    for event in &input.events {
        match *event {
            InputEvent::SelectSlot(digit) => state.inventory.select_key(digit),
            InputEvent::CycleSlot(delta) => state.inventory.cycle(delta),
            InputEvent::ToggleFly => {
                state.player.toggle_flight();
                log::debug!(target: "tick", "flight toggled: {:?}", state.player.motion);
            }
            InputEvent::PrimaryClick => clicks.push(Click::Place),
            InputEvent::SecondaryClick => clicks.push(Click::Break),
        }
    }

    // Target and clicks.
    let (eye, yaw, pitch) = (state.player.position, state.player.yaw, state.player.pitch);
    let reach = state.config.placement.interaction_distance;
    let target = placement_target(&mut state.resolver(), eye, yaw, pitch, reach);
    state.target = target;
    let mut placements = Vec::new();
    let mut broken = Vec::new();
    for click in clicks {
        match click {
            Click::Place => {
                let mut world = EditWorld {
                    field: state.chunks.field_mut(),
                    objects: &mut state.objects,
                    world_size,
                    ground_tolerance: tolerance,
                };
                let outcome = place(
                    &mut world,
                    &mut state.inventory,
                    &state.catalog,
                    &state.config.placement,
                    target,
                    look_direction(yaw, pitch),
                );
                if let PlacementOutcome::Placed { id, .. } = &outcome {
                    if let Some(object) = state.objects.get(*id) {
                        sink.on_object_added(object);
                    }
                }
                placements.push(outcome);
            }
            Click::Break => {
                if let Some(object) = break_at(&mut state.objects, &state.config.placement, target) {
                    sink.on_object_removed(&object);
                    broken.push(object.id());
                }
            }
        }
    }

    // Movement.
    let step = {
        let controller = PlayerController::new(&state.config.player, &state.config.slope, world_size);
        let mut ground = HeightResolver::new(state.chunks.field_mut(), &state.objects, world_size, tolerance);
        controller.step(&mut state.player, input.keys, &mut ground)
    };

    // Streaming.
    let pos = state.player.position;
    let here = state.chunks.chunk_at(pos.x, pos.z);
    let mut streamed = 0;
    if state.current_chunk != Some(here) {
        let radius = state.config.worldgen.world.stream_radius;
        let reports = state.chunks.stream_around(here, radius, &mut state.objects);
        for report in &reports {
            if let Some(chunk) = state.chunks.get(report.coord) {
                sink.on_chunk_ready(chunk);
            }
            for id in &report.spawned {
                if let Some(object) = state.objects.get(*id) {
                    sink.on_object_added(object);
                }
            }
        }
        streamed = reports.len();
        state.current_chunk = Some(here);
    }

    // Visibility.
    let visibility_flips = state
        .visibility
        .update(state.player.position, &state.chunks, &state.objects, sink);

    log::trace!(
        target: "tick",
        "tick {} at ({:.2}, {:.2}, {:.2}) {:?} target ({}, {}, {})",
        state.tick,
        pos.x,
        state.player.position.y,
        pos.z,
        state.player.motion,
        target.x,
        target.y,
        target.z
    );

    TickReport {
        tick: state.tick,
        step,
        placements,
        broken,
        streamed,
        visibility_flips,
    }
}
