use std::error::Error;

use terrawalk_edit::Inventory;

use crate::collab::{InventoryStore, RenderSink};
use crate::config::SimConfig;
use crate::input::InputFrame;
use crate::state::SimulationState;
use crate::step::{TickReport, tick};

/// A running session: the state plus the store its hotbar is kept in.
pub struct Simulation<S: InventoryStore> {
    state: SimulationState,
    store: S,
}

impl<S: InventoryStore> Simulation<S> {
    /// Restores the hotbar from `store`; unreadable data falls back to the
    /// default hotbar.
    pub fn new(config: SimConfig, mut store: S) -> Self {
        let inventory = match store.load() {
            Ok(Some(snapshot)) => Inventory::from_snapshot(snapshot),
            Ok(None) => Inventory::default(),
            Err(e) => {
                log::warn!("failed to load inventory: {}; using default hotbar", e);
                Inventory::default()
            }
        };
        Self {
            state: SimulationState::new(config, inventory),
            store,
        }
    }

    /// Runs one tick and saves the hotbar if it changed.
    pub fn tick(&mut self, input: &InputFrame, sink: &mut dyn RenderSink) -> TickReport {
        let before = self.state.inventory.snapshot();
        let report = tick(&mut self.state, input, sink);
        if self.state.inventory.snapshot() != before {
            if let Err(e) = self.save() {
                log::warn!("failed to save inventory: {}", e);
            }
        }
        report
    }

    pub fn save(&mut self) -> Result<(), Box<dyn Error>> {
        self.store.save(&self.state.inventory.snapshot())
    }

    #[inline]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    #[inline]
    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }
}
