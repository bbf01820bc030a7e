use cgmath::{Deg, Rad, Vector2};
use itertools::Itertools;
use std::convert::TryFrom;
use std::ops::RangeInclusive;

use crate::area::{ContainerSize, TransformValues};
use crate::math::rotate_about_origin;

/// Number of container-sized tiles needed on each side of the centre at a
/// scale of 1 to cover the view under any rotation.
const TILE_REACH: f64 = 2.0;

/// Window of tile copies that keeps the view covered for one display
/// transform.
///
/// Each tile is a copy of the content translated by whole container sizes
/// before the display transform is applied, so the grid needs no coordinate
/// system of its own.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TileLayout {
    /// Whole tiles the window is shifted by to follow the offset.
    shift: Vector2<i64>,
    /// Number of tiles on each side of the shifted centre.
    half_extent: i64,
}

impl TileLayout {
    /// Computes the tile window for a display transform.
    pub fn compute(display: TransformValues, container: ContainerSize) -> Self {
        // The tiles sit inside the rotated element, so measure the offset in
        // the element's own frame.
        let unrotated = rotate_about_origin(display.offset(), Rad::from(Deg(-display.rotation)));
        let shift = Vector2::new(
            tile_shift(unrotated.x, container.width() * display.scale),
            tile_shift(unrotated.y, container.height() * display.scale),
        );
        // Float-to-int casts saturate, so extreme zoom-out gives `i64::MAX`.
        let half_extent = (TILE_REACH / display.scale).ceil() as i64;
        Self { shift, half_extent }
    }

    /// Returns the number of whole tiles the window is shifted by.
    pub fn shift(self) -> Vector2<i64> {
        self.shift
    }
    /// Returns the number of tiles on each side of the shifted centre.
    pub fn half_extent(self) -> i64 {
        self.half_extent
    }

    /// Returns the range of horizontal tile indices.
    pub fn columns(self) -> RangeInclusive<i64> {
        axis_range(self.shift.x, self.half_extent)
    }
    /// Returns the range of vertical tile indices.
    pub fn rows(self) -> RangeInclusive<i64> {
        axis_range(self.shift.y, self.half_extent)
    }
    /// Returns the number of tiles in the window, saturating at
    /// `usize::MAX`.
    pub fn len(self) -> usize {
        let side = |range: RangeInclusive<i64>| {
            (i128::from(*range.end()) - i128::from(*range.start()) + 1).max(0) as u128
        };
        let len = side(self.columns()).saturating_mul(side(self.rows()));
        usize::try_from(len).unwrap_or(usize::MAX)
    }
    /// Returns whether the window holds no tiles.
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
    /// Iterates over the `(column, row)` index of every tile, column-major.
    pub fn tiles(self) -> impl Iterator<Item = (i64, i64)> {
        self.columns().cartesian_product(self.rows())
    }
}

/// Returns the CSS transform that places the tile at `(column, row)`.
pub fn tile_css_transform(column: i64, row: i64) -> String {
    format!(
        "translateX({}%) translateY({}%)",
        i128::from(column) * 100,
        i128::from(row) * 100,
    )
}

/// Returns the indices within `half_extent` of `centre`, cut off at the ends
/// of `i64`.
fn axis_range(centre: i64, half_extent: i64) -> RangeInclusive<i64> {
    centre.saturating_sub(half_extent)..=centre.saturating_add(half_extent)
}

/// Returns how many whole tiles to shift along one axis: the number of tile
/// sizes the offset covers, rounded toward zero, against the offset.
fn tile_shift(offset: f64, tile_size: f64) -> i64 {
    // Negate before the saturating cast; `-(i64::MIN)` would overflow.
    (-(offset / tile_size).trunc()) as i64
}
