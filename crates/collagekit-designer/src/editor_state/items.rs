//! Item operations (add, delete, stacking, effects) for editor state.

use collagekit_core::{AssetStore, Item, Point};

use super::EditorState;
use crate::error::Result;

impl EditorState {
    /// Drops an asset onto the active breakpoint and returns the new item's id.
    ///
    /// The item is stacked above everything already placed.
    pub fn add_asset(&mut self, assets: &AssetStore, asset_id: &str, drop: Point) -> Result<String> {
        let asset = assets.get(asset_id)?;
        let layout = self.layout();
        let item = Item::from_asset(asset, layout.width, drop, layout.next_z())?;
        let id = item.id.clone();
        let next = layout.with_added(item);
        self.replace_layout("Add photo", next);
        Ok(id)
    }

    /// Removes an item from the active breakpoint.
    pub fn delete_item(&mut self, id: &str) -> Result<()> {
        let next = self.layout().without_item(id)?;
        self.replace_layout("Delete photo", next);
        Ok(())
    }

    /// Removes every listed item that the active breakpoint places.
    ///
    /// Returns the number of items removed.
    pub fn delete_items(&mut self, ids: &[String]) -> usize {
        let layout = self.layout();
        let next = collagekit_core::Layout::new(
            layout.width,
            layout
                .items
                .iter()
                .filter(|i| !ids.contains(&i.id))
                .cloned()
                .collect(),
        );
        let removed = layout.items.len() - next.items.len();
        if removed > 0 {
            self.replace_layout("Delete photos", next);
        }
        removed
    }

    pub fn bring_to_front(&mut self, id: &str) -> Result<()> {
        let next = self.layout().bring_to_front(id)?;
        self.replace_layout("Bring to front", next);
        Ok(())
    }

    /// Sets or clears an item's transition effect.
    pub fn set_effect(&mut self, id: &str, effect: Option<String>) -> Result<()> {
        let next = self.layout().with_effect(id, effect)?;
        self.replace_layout("Set effect", next);
        Ok(())
    }
}
