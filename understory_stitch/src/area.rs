// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area queries: find one solid tile in a rectangle, or enumerate every tile in it.
//!
//! Both walks enter the area at its upper-left corner and descend along the left
//! edge, so they only touch tiles that overlap the area plus a handful on its
//! border.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::stitch::Stitch;
use crate::types::{Tile, TileId};

impl Stitch {
    /// The query area for `rect`, if it is well formed and lies within the plane.
    pub(crate) fn query_area(&self, rect: Rect) -> Option<Tile> {
        let area = Tile::area(rect)?;
        self.plane_tile().contains_tile(&area).then_some(area)
    }

    /// The tile overlapping `area` at its upper-left corner.
    pub(crate) fn area_entry(&self, area: &Tile, seed: Option<TileId>) -> Option<TileId> {
        let id = self.point_find(area.upper_left(), seed)?;
        if self.tiles.tile(id).overlaps(area) {
            Some(id)
        } else {
            self.next_below(id, area)
        }
    }

    /// The first tile below `id` that overlaps `area`, scanning left to right.
    fn next_below(&self, id: TileId, area: &Tile) -> Option<TileId> {
        self.bottom_neighbors(id)
            .take_while(|&n| self.tiles.tile(n).left() < area.right())
            .find(|&n| self.tiles.tile(n).overlaps(area))
    }

    /// Find a solid tile overlapping `area`.
    ///
    /// Returns `None` if `area` has no solid tile, or if it is malformed: origin
    /// outside quadrant I, non-positive size, or not contained in the plane.
    /// The walk starts from `seed` when it is live.
    pub fn area_search(&self, area: Rect, seed: Option<TileId>) -> Option<TileId> {
        let area = self.query_area(area)?;
        self.search(&area, seed)
    }

    pub(crate) fn search(&self, area: &Tile, seed: Option<TileId>) -> Option<TileId> {
        let mut id = self.area_entry(area, seed)?;
        loop {
            let t = self.tiles.tile(id);
            if !t.is_space {
                return Some(id);
            }
            if area.overlaps_vertical_line(t.right(), t.bottom(), t.top()) {
                let hit = self.right_neighbors(id).find(|&n| {
                    let nt = self.tiles.tile(n);
                    !nt.is_space && nt.overlaps(area)
                });
                if hit.is_some() {
                    return hit;
                }
            }
            id = self.next_below(id, area)?;
        }
    }

    /// Every tile overlapping `area`.
    ///
    /// Tiles are reported so that each one follows every tile above it and to its
    /// left within the area. A malformed area yields an empty list.
    pub fn area_enum(&self, area: Rect, seed: Option<TileId>) -> Vec<TileId> {
        let mut out = Vec::new();
        let Some(area) = self.query_area(area) else {
            return out;
        };
        let mut next = self.area_entry(&area, seed);
        let mut stack = Vec::new();
        while let Some(id) = next {
            self.enumerate_from(id, &area, &mut out, &mut stack);
            next = self
                .bottom_neighbors(id)
                .take_while(|&n| self.tiles.tile(n).left() <= area.left())
                .find(|&n| {
                    self.tiles
                        .tile(n)
                        .overlaps_vertical_line(area.left(), area.bottom(), area.top())
                });
        }
        out
    }

    /// Visit `root` and, depth first, the right neighbors it owns within `area`.
    ///
    /// A right neighbor belongs to the tile whose right edge holds its lower-left
    /// corner, or to both tiles when the bottom of the area cuts through them.
    fn enumerate_from(
        &self,
        root: TileId,
        area: &Tile,
        out: &mut Vec<TileId>,
        stack: &mut Vec<TileId>,
    ) {
        stack.push(root);
        while let Some(id) = stack.pop() {
            out.push(id);
            let t = *self.tiles.tile(id);
            if t.right() >= area.right() {
                continue;
            }
            let on_bottom = |tile: &Tile| {
                tile.overlaps_horizontal_line(area.bottom(), area.left(), area.right())
            };
            let start = stack.len();
            for n in self.right_neighbors(id) {
                let nt = self.tiles.tile(n);
                if !nt.overlaps(area) {
                    continue;
                }
                let corner_on_edge = t.right() == nt.left()
                    && t.cmp_y(nt.bottom()) == core::cmp::Ordering::Equal;
                if corner_on_edge || (on_bottom(&t) && on_bottom(nt)) {
                    stack.push(n);
                }
            }
            stack[start..].reverse();
        }
    }
}
