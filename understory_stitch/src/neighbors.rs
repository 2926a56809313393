// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Neighbor enumeration along a tile edge.
//!
//! Each side starts at the stitch stored for it and follows one other stitch:
//!
//! | side   | start | step | order         |
//! |--------|-------|------|---------------|
//! | right  | `tr`  | `lb` | top to bottom |
//! | left   | `bl`  | `rt` | bottom to top |
//! | top    | `rt`  | `bl` | right to left |
//! | bottom | `lb`  | `tr` | left to right |
//!
//! The walk stops at the first tile that no longer touches the edge, so the cost is
//! proportional to the number of neighbors.

use core::iter::FusedIterator;

use crate::stitch::Stitch;
use crate::types::{Side, Tile, TileId};

/// Iterator over the tiles touching one edge of a tile.
///
/// Returned by [`Stitch::neighbors`] and the per-side helpers.
#[derive(Clone, Debug)]
pub struct Neighbors<'a> {
    stitch: &'a Stitch,
    origin: Option<Tile>,
    side: Side,
    next: Option<TileId>,
}

impl Iterator for Neighbors<'_> {
    type Item = TileId;

    fn next(&mut self) -> Option<TileId> {
        let origin = self.origin.as_ref()?;
        let id = self.next.take()?;
        let t = self.stitch.tiles.get(id)?;
        if !t.is_neighbor_to(self.side, origin) {
            return None;
        }
        self.next = t.stitch(self.side.walk());
        Some(id)
    }
}

impl FusedIterator for Neighbors<'_> {}

impl Stitch {
    /// Tiles touching the `side` edge of `id`.
    ///
    /// A stale or unknown handle yields nothing.
    pub fn neighbors(&self, id: TileId, side: Side) -> Neighbors<'_> {
        let origin = self.get(id);
        Neighbors {
            stitch: self,
            origin,
            side,
            next: origin.and_then(|t| t.stitch(side)),
        }
    }

    /// Tiles touching the right edge of `id`, top to bottom.
    pub fn right_neighbors(&self, id: TileId) -> Neighbors<'_> {
        self.neighbors(id, Side::Right)
    }

    /// Tiles touching the left edge of `id`, bottom to top.
    pub fn left_neighbors(&self, id: TileId) -> Neighbors<'_> {
        self.neighbors(id, Side::Left)
    }

    /// Tiles touching the top edge of `id`, right to left.
    pub fn top_neighbors(&self, id: TileId) -> Neighbors<'_> {
        self.neighbors(id, Side::Top)
    }

    /// Tiles touching the bottom edge of `id`, left to right.
    pub fn bottom_neighbors(&self, id: TileId) -> Neighbors<'_> {
        self.neighbors(id, Side::Bottom)
    }
}
