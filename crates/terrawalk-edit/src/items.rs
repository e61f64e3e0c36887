use serde::Deserialize;
use std::collections::HashMap;
use terrawalk_geom::{Rgb, Vec3};

/// How an item looks once placed as a block.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BlockProfile {
    pub id: String,
    #[serde(default = "default_size")]
    pub size: [f64; 3],
    pub color: Rgb,
    #[serde(default = "default_variance")]
    pub variance: f32,
}
fn default_size() -> [f64; 3] {
    [2.0, 2.0, 2.0]
}
fn default_variance() -> f32 {
    0.1
}

impl BlockProfile {
    pub fn new(id: &str, color: u32, variance: f32) -> Self {
        Self {
            id: id.to_string(),
            size: default_size(),
            color: Rgb::from_hex(color),
            variance,
        }
    }

    #[inline]
    pub fn extent(&self) -> Vec3 {
        Vec3::new(self.size[0], self.size[1], self.size[2])
    }
}

#[derive(Clone, Debug)]
pub struct ItemCatalog {
    profiles: HashMap<String, BlockProfile>,
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::from_profiles(default_profiles())
    }
}

pub fn default_profiles() -> Vec<BlockProfile> {
    vec![
        BlockProfile::new("pineFoundation", 0xdeb887, 0.1),
        BlockProfile::new("foundation", 0xa9a9a9, 0.2),
    ]
}

impl ItemCatalog {
    /// Later profiles with the same id replace earlier ones.
    pub fn from_profiles(profiles: impl IntoIterator<Item = BlockProfile>) -> Self {
        Self {
            profiles: profiles.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<&BlockProfile> {
        self.profiles.get(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Doc {
        items: Vec<BlockProfile>,
    }

    #[test]
    fn defaults_cover_both_foundations() {
        let cat = ItemCatalog::default();
        assert_eq!(cat.len(), 2);
        let pine = cat.get("pineFoundation").expect("pine");
        assert_eq!(pine.color.to_hex(), 0xdeb887);
        assert_eq!(pine.extent(), Vec3::new(2.0, 2.0, 2.0));
        assert!((cat.get("foundation").expect("stone").variance - 0.2).abs() < 1e-6);
    }

    #[test]
    fn profiles_parse_from_toml() {
        let doc: Doc = toml::from_str(
            r#"
            [[items]]
            id = "brick"
            color = 0xb22222
            size = [1.0, 1.0, 1.0]
            "#,
        )
        .expect("parse");
        let cat = ItemCatalog::from_profiles(doc.items);
        let brick = cat.get("brick").expect("brick");
        assert_eq!(brick.extent(), Vec3::new(1.0, 1.0, 1.0));
        assert!((brick.variance - 0.1).abs() < 1e-6);
    }
}
