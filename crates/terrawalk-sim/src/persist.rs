use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use terrawalk_edit::InventorySnapshot;

use crate::collab::InventoryStore;

/// Stores the hotbar as a TOML document at a fixed path.
#[derive(Clone, Debug)]
pub struct TomlInventoryStore {
    path: PathBuf,
}

impl TomlInventoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InventoryStore for TomlInventoryStore {
    fn load(&mut self) -> Result<Option<InventorySnapshot>, Box<dyn Error>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let s = fs::read_to_string(&self.path)?;
        let snapshot: InventorySnapshot = toml::from_str(&s)?;
        Ok(Some(snapshot))
    }

    fn save(&mut self, snapshot: &InventorySnapshot) -> Result<(), Box<dyn Error>> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, toml::to_string_pretty(snapshot)?)?;
        Ok(())
    }
}

/// In-process store, for tests and throwaway sessions.
#[derive(Clone, Debug, Default)]
pub struct MemoryInventoryStore {
    snapshot: Option<InventorySnapshot>,
    saves: usize,
}

impl MemoryInventoryStore {
    pub fn with_snapshot(snapshot: InventorySnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
            saves: 0,
        }
    }

    #[inline]
    pub fn snapshot(&self) -> Option<&InventorySnapshot> {
        self.snapshot.as_ref()
    }

    #[inline]
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl InventoryStore for MemoryInventoryStore {
    fn load(&mut self) -> Result<Option<InventorySnapshot>, Box<dyn Error>> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, snapshot: &InventorySnapshot) -> Result<(), Box<dyn Error>> {
        self.snapshot = Some(snapshot.clone());
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrawalk_edit::{Inventory, Slot};

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("terrawalk-persist-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn missing_file_loads_nothing() {
        let mut store = TomlInventoryStore::new(scratch("absent.toml"));
        assert!(store.load().expect("load").is_none());
    }

    #[test]
    fn toml_store_roundtrip() {
        let path = scratch("hotbar.toml");
        let mut inv = Inventory::default();
        inv.select(Some(3));
        inv.consume_selected();

        let mut store = TomlInventoryStore::new(&path);
        store.save(&inv.snapshot()).expect("save");
        let loaded = TomlInventoryStore::new(&path).load().expect("load").expect("saved");
        assert_eq!(loaded.selected, Some(3));
        assert_eq!(loaded.hotbar[3], Slot::stack("pineFoundation", 9, true));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let path = scratch("corrupt.toml");
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(&path, "hotbar = 7").expect("write");
        assert!(TomlInventoryStore::new(&path).load().is_err());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn memory_store_counts_saves() {
        let mut store = MemoryInventoryStore::default();
        assert!(store.load().expect("load").is_none());
        store.save(&Inventory::default().snapshot()).expect("save");
        assert_eq!(store.saves(), 1);
        assert_eq!(store.load().expect("load"), Some(Inventory::default().snapshot()));
    }
}
