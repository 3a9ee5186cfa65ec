//! Per-breakpoint layouts and the three-breakpoint template.
//!
//! Every mutation returns a new value. A layout's height is never stored: it is
//! derived from its items on demand, so it cannot drift out of sync.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::item::Item;
use crate::error::{GeometryError, LayoutError, Result};
use crate::geometry::{ensure_finite, Rect};

/// Responsive breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Desktop,
    Tablet,
    Mobile,
}

impl Breakpoint {
    /// All breakpoints, widest first.
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Desktop, Breakpoint::Tablet, Breakpoint::Mobile];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Tablet => "tablet",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Items placed on one breakpoint's surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LayoutRepr", into = "LayoutRepr")]
pub struct Layout {
    pub width: f64,
    pub items: Vec<Item>,
}

/// Wire form. `height` is emitted for hosts but ignored on read.
#[derive(Clone, Serialize, Deserialize)]
struct LayoutRepr {
    width: f64,
    #[serde(default)]
    height: f64,
    #[serde(default)]
    items: Vec<Item>,
}

impl From<LayoutRepr> for Layout {
    fn from(repr: LayoutRepr) -> Self {
        Self {
            width: repr.width,
            items: repr.items,
        }
    }
}

impl From<Layout> for LayoutRepr {
    fn from(layout: Layout) -> Self {
        Self {
            width: layout.width,
            height: layout.height(),
            items: layout.items,
        }
    }
}

impl Layout {
    pub fn new(width: f64, items: Vec<Item>) -> Self {
        Self { width, items }
    }

    pub fn empty(width: f64) -> Self {
        Self::new(width, Vec::new())
    }

    /// Bottom edge of the lowest item, or zero for an empty layout.
    pub fn height(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.y + i.h)
            .fold(0.0, f64::max)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.item(id).is_some()
    }

    /// Fails with [`LayoutError::UnknownItem`] when `id` is absent.
    pub fn require(&self, id: &str) -> Result<&Item> {
        self.item(id).ok_or_else(|| {
            LayoutError::UnknownItem {
                id: id.to_string(),
            }
            .into()
        })
    }

    /// z value that places a new item above every existing one.
    pub fn next_z(&self) -> i32 {
        self.items.iter().map(|i| i.z).max().map_or(0, |z| z + 1)
    }

    /// Replaces the item with the same id.
    pub fn with_item(&self, item: Item) -> Result<Layout> {
        self.require(&item.id)?;
        let items = self
            .items
            .iter()
            .map(|i| if i.id == item.id { item.clone() } else { i.clone() })
            .collect();
        Ok(Layout::new(self.width, items))
    }

    /// Replaces every item whose id appears in `updates`; other items are kept.
    pub fn with_items(&self, updates: &[Item]) -> Result<Layout> {
        for update in updates {
            self.require(&update.id)?;
        }
        let items = self
            .items
            .iter()
            .map(|i| {
                updates
                    .iter()
                    .find(|u| u.id == i.id)
                    .cloned()
                    .unwrap_or_else(|| i.clone())
            })
            .collect();
        Ok(Layout::new(self.width, items))
    }

    pub fn with_added(&self, item: Item) -> Layout {
        let mut items = self.items.clone();
        items.push(item);
        Layout::new(self.width, items)
    }

    pub fn without_item(&self, id: &str) -> Result<Layout> {
        self.require(id)?;
        Ok(Layout::new(
            self.width,
            self.items.iter().filter(|i| i.id != id).cloned().collect(),
        ))
    }

    /// Raises the item above all others.
    pub fn bring_to_front(&self, id: &str) -> Result<Layout> {
        let item = self.require(id)?;
        let top = self
            .items
            .iter()
            .filter(|i| i.id != id)
            .map(|i| i.z)
            .max();
        match top {
            Some(z) if z >= item.z => self.with_item(Item {
                z: z + 1,
                ..item.clone()
            }),
            _ => Ok(self.clone()),
        }
    }

    pub fn with_effect(&self, id: &str, effect: Option<String>) -> Result<Layout> {
        let item = self.require(id)?.with_effect(effect);
        self.with_item(item)
    }

    /// Items in paint order: ascending z, ties kept in array order.
    pub fn stacking_order(&self) -> Vec<&Item> {
        let mut ordered: Vec<&Item> = self.items.iter().collect();
        ordered.sort_by_key(|i| i.z);
        ordered
    }

    /// Bounding box of the listed items, `None` when none of them are present.
    pub fn bounds_of(&self, ids: &[String]) -> Option<Rect> {
        self.items
            .iter()
            .filter(|i| ids.contains(&i.id))
            .map(Item::rect)
            .reduce(|acc, r| acc.union(&r))
    }

    /// Boxes of every item not listed, used as snap candidates.
    pub fn neighbours_of(&self, ids: &[String]) -> Vec<Rect> {
        self.items
            .iter()
            .filter(|i| !ids.contains(&i.id))
            .map(Item::rect)
            .collect()
    }

    /// Projects this layout onto a surface of `width`, scaling every box uniformly.
    pub fn scaled_to_width(&self, width: f64) -> Result<Layout> {
        ensure_finite(width, "width")?;
        if self.width <= 0.0 || width <= 0.0 {
            return Err(GeometryError::InvalidContainer {
                width: self.width.min(width),
                height: 0.0,
            }
            .into());
        }
        let factor = width / self.width;
        let items = self
            .items
            .iter()
            .map(|i| {
                i.with_rect(Rect::new(
                    i.x * factor,
                    i.y * factor,
                    i.w * factor,
                    i.h * factor,
                ))
            })
            .collect();
        Ok(Layout::new(width, items))
    }
}

/// The same conceptual content arranged at three breakpoints.
///
/// Items are correlated across layouts by id. An item may be missing from some
/// breakpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub desktop: Layout,
    pub tablet: Layout,
    pub mobile: Layout,
}

impl Template {
    pub fn new(desktop: Layout, tablet: Layout, mobile: Layout) -> Self {
        Self {
            desktop,
            tablet,
            mobile,
        }
    }

    pub fn layout(&self, breakpoint: Breakpoint) -> &Layout {
        match breakpoint {
            Breakpoint::Desktop => &self.desktop,
            Breakpoint::Tablet => &self.tablet,
            Breakpoint::Mobile => &self.mobile,
        }
    }

    pub fn with_layout(&self, breakpoint: Breakpoint, layout: Layout) -> Template {
        let mut next = self.clone();
        match breakpoint {
            Breakpoint::Desktop => next.desktop = layout,
            Breakpoint::Tablet => next.tablet = layout,
            Breakpoint::Mobile => next.mobile = layout,
        }
        next
    }

    /// Breakpoints on which an item id is placed.
    pub fn breakpoints_of(&self, id: &str) -> Vec<Breakpoint> {
        Breakpoint::ALL
            .into_iter()
            .filter(|bp| self.layout(*bp).contains(id))
            .collect()
    }

    pub fn from_json(json: &str) -> Result<Template> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
