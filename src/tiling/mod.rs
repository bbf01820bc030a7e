//! Infinite tiling of a transform area's content.

mod layout;

pub use layout::{tile_css_transform, TileLayout};

use crate::area::{AreaChange, AreaConfig, TransformArea};
use crate::input::{GestureError, GestureEvent};

/// Transform area whose content repeats forever in every direction.
#[derive(Debug)]
pub struct InfiniteArea {
    area: TransformArea,
}

impl InfiniteArea {
    /// Returns a new infinite area.
    pub fn new(config: AreaConfig) -> Self {
        Self {
            area: TransformArea::new(config),
        }
    }

    /// Returns the underlying transform area.
    pub fn area(&self) -> &TransformArea {
        &self.area
    }
    /// Returns the underlying transform area mutably.
    pub fn area_mut(&mut self) -> &mut TransformArea {
        &mut self.area
    }

    /// Applies a gesture event. See [`TransformArea::handle_event()`].
    pub fn handle_event(&mut self, event: GestureEvent) -> Result<Option<AreaChange>, GestureError> {
        self.area.handle_event(event)
    }

    /// Returns the tile window for the current display values.
    pub fn layout(&self) -> TileLayout {
        TileLayout::compute(self.area.display(), self.area.container())
    }
    /// Returns the CSS transform of the element holding all the tiles.
    pub fn css_transform(&self) -> String {
        self.area.display().css_transform()
    }
}
