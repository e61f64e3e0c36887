use serde::{Deserialize, Serialize};

pub const HOTBAR_SLOTS: usize = 8;

/// Item id of an unused slot.
pub const EMPTY_ITEM: &str = "empty";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: String,
    #[serde(default)]
    pub amount: u32,
    #[serde(default)]
    pub placeable: bool,
}

impl Slot {
    pub fn empty() -> Self {
        Self {
            id: EMPTY_ITEM.to_string(),
            amount: 0,
            placeable: false,
        }
    }

    pub fn stack(id: impl Into<String>, amount: u32, placeable: bool) -> Self {
        Self {
            id: id.into(),
            amount,
            placeable,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.id == EMPTY_ITEM || self.amount == 0
    }
}

/// Hotbar contents and selection; the only state that is persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<usize>,
    pub hotbar: Vec<Slot>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inventory {
    slots: Vec<Slot>,
    selected: Option<usize>,
}

impl Default for Inventory {
    fn default() -> Self {
        let mut slots = vec![Slot::empty(); HOTBAR_SLOTS];
        slots[3] = Slot::stack("pineFoundation", 10, true);
        Self {
            slots,
            selected: None,
        }
    }
}

impl Inventory {
    /// Restores a snapshot; a malformed hotbar falls back to the default.
    pub fn from_snapshot(snapshot: InventorySnapshot) -> Self {
        if snapshot.hotbar.len() != HOTBAR_SLOTS {
            log::warn!(
                "inventory snapshot has {} hotbar slots, expected {}; using default hotbar",
                snapshot.hotbar.len(),
                HOTBAR_SLOTS
            );
            return Self::default();
        }
        let selected = snapshot.selected.filter(|&i| i < HOTBAR_SLOTS);
        Self {
            slots: snapshot.hotbar,
            selected,
        }
    }

    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            hotbar: self.slots.clone(),
            selected: self.selected,
        }
    }

    #[inline]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_slot(&self) -> Option<&Slot> {
        self.selected.and_then(|i| self.slots.get(i))
    }

    /// Out-of-range indices clear the selection.
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.slots.len());
    }

    /// Number-key selection: `1..=8` pick a slot, anything else deselects.
    pub fn select_key(&mut self, digit: u8) {
        self.select((digit as usize).checked_sub(1));
    }

    /// Steps the selection through "none" and every slot, wrapping.
    pub fn cycle(&mut self, delta: i32) {
        let states = self.slots.len() as i32 + 1;
        let current = self.selected.map_or(0, |i| i as i32 + 1);
        let next = (current + delta).rem_euclid(states);
        self.selected = (next > 0).then(|| (next - 1) as usize);
    }

    /// The selected item id if it can be placed right now.
    pub fn placeable_selection(&self) -> Option<&str> {
        self.selected_slot()
            .filter(|s| s.placeable && !s.is_empty())
            .map(|s| s.id.as_str())
    }

    /// Uses one unit of the selected stack. An exhausted stack becomes empty.
    pub fn consume_selected(&mut self) -> bool {
        let Some(slot) = self.selected.and_then(|i| self.slots.get_mut(i)) else {
            return false;
        };
        if slot.is_empty() {
            return false;
        }
        slot.amount -= 1;
        if slot.amount == 0 {
            *slot = Slot::empty();
        }
        true
    }
}
