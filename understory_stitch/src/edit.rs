// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inserting and deleting solid tiles.
//!
//! Both edits restore the canonical space layout: every space tile is a maximal
//! horizontal strip, so its left and right neighbors are solid (or the plane edge)
//! and no space tile sits directly on another with the same horizontal span. For a
//! given set of solid tiles this layout is unique, which is what makes a delete
//! undo an insert exactly.

use alloc::vec::Vec;

use kurbo::Rect;
use log::{debug, trace};

use crate::stitch::Stitch;
use crate::types::{Tile, TileId};

impl Stitch {
    /// Turn the space covered by `area` into a single solid tile.
    ///
    /// Returns `None`, leaving the plane untouched, if `area` is malformed, extends
    /// past the plane, or overlaps an existing solid tile. On success the new tile
    /// becomes the default seed for later walks.
    pub fn insert(&mut self, area: Rect) -> Option<TileId> {
        let Some(a) = self.query_area(area) else {
            trace!("insert {area:?}: not a valid area in the plane");
            return None;
        };
        if let Some(hit) = self.search(&a, None) {
            trace!("insert {area:?}: overlaps solid tile {hit:?}");
            return None;
        }
        let mut top = self.area_entry(&a, None)?;
        let bottom = self.point_find(a.lower_left(), Some(top))?;

        // Every tile in the area is space and spans its full width, so the area is
        // covered by a vertical stack of space tiles from `top` down to `bottom`.
        self.horizontal_split(top, a.top());
        if let Some(upper) = self.horizontal_split(bottom, a.bottom()) {
            if bottom == top {
                top = upper;
            }
        }

        let mut merged: Option<TileId> = None;
        let mut last_left = None;
        let mut last_right = None;
        let mut next = Some(top);
        while let Some(mut mid) = next {
            last_left = None;
            last_right = None;
            if let Some(right) = self.vertical_split(mid, a.left()) {
                if let Some(above) = self.tiles.tile(mid).rt {
                    self.horizontal_merge(mid, above);
                }
                last_left = Some(mid);
                mid = right;
            }
            if let Some(right) = self.vertical_split(mid, a.right()) {
                if let Some(above) = self.tiles.tile(right).rt {
                    self.horizontal_merge(right, above);
                }
                last_right = Some(right);
            }
            let t = self.tiles.tile(mid);
            next = if t.bottom() > a.bottom() { t.lb } else { None };
            if let Some(upper) = merged {
                self.horizontal_merge(mid, upper);
            }
            merged = Some(mid);
        }
        for side in [last_left, last_right].into_iter().flatten() {
            if let Some(below) = self.tiles.tile(side).lb {
                self.horizontal_merge(below, side);
            }
        }

        let id = merged?;
        self.tiles.tile_mut(id).is_space = false;
        self.last_inserted = Some(id);
        debug!("insert {area:?} -> {id:?} ({} tiles)", self.tiles.len());
        Some(id)
    }

    /// Turn the solid tile `id` back into space.
    ///
    /// Returns the tile as it was before the delete, or `None` if `id` is stale or
    /// names a space tile. The freed space is merged with the surrounding space so
    /// the plane ends up exactly as if the tile had never been inserted.
    pub fn delete(&mut self, id: TileId) -> Option<Tile> {
        let removed = match self.tiles.get(id) {
            Some(t) if !t.is_space => *t,
            Some(_) => {
                trace!("delete {id:?}: already space");
                return None;
            }
            None => {
                trace!("delete {id:?}: no such tile");
                return None;
            }
        };
        self.tiles.tile_mut(id).is_space = true;
        if self.last_inserted == Some(id) {
            self.last_inserted = None;
        }

        let (bottom, top) = (removed.bottom(), removed.top());
        let sides: Vec<TileId> = self
            .left_neighbors(id)
            .chain(self.right_neighbors(id))
            .collect();
        let mut cuts: Vec<f64> = sides
            .iter()
            .flat_map(|&n| {
                let t = self.tiles.tile(n);
                [t.bottom(), t.top()]
            })
            .filter(|&y| bottom < y && y < top)
            .collect();
        cuts.sort_by(f64::total_cmp);
        cuts.dedup();

        // Cut the space beside the tile into pieces that line up with the bands
        // between consecutive cuts.
        for n in sides {
            if !self.tiles.tile(n).is_space {
                continue;
            }
            let mut piece = self.horizontal_split(n, bottom).unwrap_or(n);
            self.horizontal_split(piece, top);
            for &y in &cuts {
                if let Some(upper) = self.horizontal_split(piece, y) {
                    piece = upper;
                }
            }
        }

        let mut bands = Vec::with_capacity(cuts.len() + 1);
        bands.push(id);
        let mut current = id;
        for &y in &cuts {
            if let Some(upper) = self.horizontal_split(current, y) {
                bands.push(upper);
                current = upper;
            }
        }

        for band in &mut bands {
            if let Some(left) = self.tiles.tile(*band).bl {
                if self.tiles.tile(left).is_space {
                    if let Some(survivor) = self.vertical_merge(left, *band) {
                        *band = survivor;
                    }
                }
            }
            if let Some(right) = self.tiles.tile(*band).tr {
                if self.tiles.tile(right).is_space {
                    self.vertical_merge(*band, right);
                }
            }
        }

        let mut current = bands[0];
        if let Some(below) = self.tiles.tile(current).lb {
            if let Some(survivor) = self.horizontal_merge(below, current) {
                current = survivor;
            }
        }
        for &band in &bands[1..] {
            current = self.horizontal_merge(current, band).unwrap_or(band);
        }
        if let Some(above) = self.tiles.tile(current).rt {
            self.horizontal_merge(current, above);
        }

        debug!("delete {id:?} ({} tiles)", self.tiles.len());
        Some(removed)
    }
}
