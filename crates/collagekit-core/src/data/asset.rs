//! Asset metadata and id-keyed lookup.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{AssetError, Result};

/// Image metadata as provided by the host's asset store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub src: String,
    /// Natural pixel width.
    pub width: u32,
    /// Natural pixel height.
    pub height: u32,
}

impl Asset {
    pub fn new(id: impl Into<String>, src: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            src: src.into(),
            width,
            height,
        }
    }

    /// Width over height. Fails for zero-sized assets instead of yielding NaN.
    pub fn aspect_ratio(&self) -> Result<f64> {
        if self.width == 0 || self.height == 0 {
            return Err(AssetError::InvalidDimensions {
                id: self.id.clone(),
                width: self.width,
                height: self.height,
            }
            .into());
        }
        Ok(self.width as f64 / self.height as f64)
    }
}

/// O(1) asset lookup keyed by asset id.
#[derive(Debug, Clone, Default)]
pub struct AssetStore {
    assets: HashMap<String, Asset>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, asset: Asset) {
        self.assets.insert(asset.id.clone(), asset);
    }

    /// Looks up an asset, failing fast when the id is unknown.
    pub fn get(&self, id: &str) -> Result<&Asset> {
        self.assets.get(id).ok_or_else(|| {
            AssetError::NotFound {
                id: id.to_string(),
            }
            .into()
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.assets.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl From<Vec<Asset>> for AssetStore {
    fn from(assets: Vec<Asset>) -> Self {
        Self {
            assets: assets.into_iter().map(|a| (a.id.clone(), a)).collect(),
        }
    }
}

impl FromIterator<Asset> for AssetStore {
    fn from_iter<I: IntoIterator<Item = Asset>>(iter: I) -> Self {
        Self {
            assets: iter.into_iter().map(|a| (a.id.clone(), a)).collect(),
        }
    }
}
