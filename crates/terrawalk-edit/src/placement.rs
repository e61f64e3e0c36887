//! Placing blocks from the hotbar and breaking player-placed blocks.

use serde::Deserialize;
use terrawalk_geom::{Aabb, Vec3};
use terrawalk_spatial::{ObjectId, Owner, Shape, SpatialIndex, SurfaceObject};
use terrawalk_world::biome::jittered_color;
use terrawalk_world::worldgen::Tint;
use terrawalk_world::{HeightResolver, TerrainField};

use crate::inventory::Inventory;
use crate::items::ItemCatalog;

#[derive(Clone, Debug, Deserialize)]
pub struct PlacementParams {
    #[serde(default = "default_interaction_distance")]
    pub interaction_distance: f64,
    /// Cells tried along the snapped axis before giving up.
    #[serde(default = "default_max_steps")]
    pub max_steps: u32,
    /// Multiplies the snapped view axis; negative walks back toward the viewer.
    #[serde(default = "default_correction_offset")]
    pub correction_offset: f64,
    #[serde(default = "default_occupancy_tolerance")]
    pub occupancy_tolerance: f64,
    #[serde(default = "default_break_tolerance")]
    pub break_tolerance: f64,
}
fn default_interaction_distance() -> f64 {
    5.0
}
fn default_max_steps() -> u32 {
    5
}
fn default_correction_offset() -> f64 {
    -1.0
}
fn default_occupancy_tolerance() -> f64 {
    0.1
}
fn default_break_tolerance() -> f64 {
    1.0
}
impl Default for PlacementParams {
    fn default() -> Self {
        Self {
            interaction_distance: default_interaction_distance(),
            max_steps: default_max_steps(),
            correction_offset: default_correction_offset(),
            occupancy_tolerance: default_occupancy_tolerance(),
            break_tolerance: default_break_tolerance(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementRejection {
    NothingSelected,
    EmptySlot,
    NotPlaceable,
    /// The selected item has no block profile.
    UnknownItem(String),
    /// Every candidate cell was occupied.
    NoFreeCell { steps: u32 },
}

#[derive(Clone, Debug, PartialEq)]
pub enum PlacementOutcome {
    Placed { id: ObjectId, position: Vec3 },
    Rejected(PlacementRejection),
}

/// Terrain and objects an edit reads and writes.
pub struct EditWorld<'a> {
    pub field: &'a mut TerrainField,
    pub objects: &'a mut SpatialIndex,
    pub world_size: i32,
    pub ground_tolerance: f64,
}

impl EditWorld<'_> {
    pub fn resolver(&mut self) -> HeightResolver<'_> {
        HeightResolver::new(self.field, self.objects, self.world_size, self.ground_tolerance)
    }
}

/// Places the selected hotbar item at or near `target`.
///
/// Occupied cells are skipped by stepping along the dominant axis of
/// `forward`, at most `max_steps` times. The block is then lifted onto the
/// terrain if it would sit below it. Rejections have no side effects.
pub fn place(
    world: &mut EditWorld<'_>,
    inventory: &mut Inventory,
    catalog: &ItemCatalog,
    params: &PlacementParams,
    target: Vec3,
    forward: Vec3,
) -> PlacementOutcome {
    let item = match inventory.selected_slot() {
        None => return PlacementOutcome::Rejected(PlacementRejection::NothingSelected),
        Some(slot) if slot.is_empty() => return PlacementOutcome::Rejected(PlacementRejection::EmptySlot),
        Some(slot) if !slot.placeable => return PlacementOutcome::Rejected(PlacementRejection::NotPlaceable),
        Some(slot) => slot.id.clone(),
    };
    let Some(profile) = catalog.get(&item) else {
        log::warn!(target: "edit", "no block profile for item {}", item);
        return PlacementOutcome::Rejected(PlacementRejection::UnknownItem(item));
    };

    let step = forward.dominant_axis_step() * params.correction_offset;
    let mut cell = target;
    let mut steps = 0;
    while world.objects.is_occupied(cell, params.occupancy_tolerance) && steps < params.max_steps {
        cell += step;
        steps += 1;
    }

    let ground = world.resolver().ground_level(cell.x, cell.y, cell.z, false).round();
    if ground > cell.y {
        cell.y = ground;
    }
    if world.objects.is_occupied(cell, params.occupancy_tolerance) {
        log::debug!(target: "edit", "no free cell near ({}, {}, {}) after {} steps", target.x, target.y, target.z, steps);
        return PlacementOutcome::Rejected(PlacementRejection::NoFreeCell { steps });
    }

    let tint = Tint {
        color: profile.color,
        variance: profile.variance,
    };
    let salt = world.objects.revision() as u32;
    let color = jittered_color(tint, 0, cell.x as i32, cell.z as i32, salt);
    let shape = Shape::Box(Aabb::from_center_size(cell, profile.extent()));
    let id = world
        .objects
        .insert(SurfaceObject::new(cell, shape, Owner::Player, item.as_str(), color));
    inventory.consume_selected();
    log::info!(target: "edit", "placed {} at ({}, {}, {})", item, cell.x, cell.y, cell.z);
    PlacementOutcome::Placed { id, position: cell }
}

/// Removes the most recently placed player block within `break_tolerance` of
/// `target` on every axis. Natural objects are never removed.
pub fn break_at(objects: &mut SpatialIndex, params: &PlacementParams, target: Vec3) -> Option<SurfaceObject> {
    let id = objects.latest_near(target, params.break_tolerance, Owner::Player)?;
    let removed = objects.remove(id)?;
    log::info!(
        target: "edit",
        "broke {} at ({}, {}, {})",
        removed.label,
        removed.position.x,
        removed.position.y,
        removed.position.z
    );
    Some(removed)
}
