// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Split and merge primitives.
//!
//! Every edit is a sequence of these four operations. Each one validates its
//! arguments before touching the mesh and leaves all stitches consistent, so a
//! rejected call is a no-op. Splits keep the incoming handle on the left (or lower)
//! piece; merges keep the left (or lower) handle and free the other.

use alloc::vec::Vec;
use core::cmp::Ordering;

use kurbo::Rect;

use crate::stitch::Stitch;
use crate::types::{Tile, TileId};

impl Stitch {
    /// Cut `id` at the vertical line `x`, returning the new right piece.
    pub(crate) fn vertical_split(&mut self, id: TileId, x: f64) -> Option<TileId> {
        let t = *self.tiles.get(id)?;
        if t.cmp_x(x) != Ordering::Equal || x == t.left() {
            return None;
        }
        let rights: Vec<_> = self.right_neighbors(id).collect();
        let bottoms: Vec<_> = self.bottom_neighbors(id).collect();
        let tops: Vec<_> = self.top_neighbors(id).collect();

        let right = self.tiles.alloc(Tile {
            bounds: Rect::new(x, t.bottom(), t.right(), t.top()),
            bl: Some(id),
            lb: None,
            tr: t.tr,
            rt: t.rt,
            is_space: t.is_space,
        });
        let left = self.tiles.tile_mut(id);
        left.bounds.x1 = x;
        left.tr = Some(right);
        left.rt = None;

        for n in rights {
            let nt = self.tiles.tile_mut(n);
            if nt.bl == Some(id) {
                nt.bl = Some(right);
            }
        }

        let right_tile = *self.tiles.tile(right);
        let mut lb = None;
        for n in bottoms {
            let nt = *self.tiles.tile(n);
            if nt.is_bottom_neighbor_to(&right_tile) {
                lb = lb.or(Some(n));
                if nt.rt == Some(id) {
                    self.tiles.tile_mut(n).rt = Some(right);
                }
            }
        }
        self.tiles.tile_mut(right).lb = lb;

        let left_tile = *self.tiles.tile(id);
        let mut rt = None;
        for n in tops {
            let nt = *self.tiles.tile(n);
            if nt.is_top_neighbor_to(&left_tile) {
                rt = rt.or(Some(n));
            } else if nt.lb == Some(id) {
                self.tiles.tile_mut(n).lb = Some(right);
            }
        }
        self.tiles.tile_mut(id).rt = rt;
        Some(right)
    }

    /// Cut `id` at the horizontal line `y`, returning the new upper piece.
    pub(crate) fn horizontal_split(&mut self, id: TileId, y: f64) -> Option<TileId> {
        let t = *self.tiles.get(id)?;
        if t.cmp_y(y) != Ordering::Equal || y == t.bottom() {
            return None;
        }
        let tops: Vec<_> = self.top_neighbors(id).collect();
        let lefts: Vec<_> = self.left_neighbors(id).collect();
        let rights: Vec<_> = self.right_neighbors(id).collect();

        let upper = self.tiles.alloc(Tile {
            bounds: Rect::new(t.left(), y, t.right(), t.top()),
            bl: None,
            lb: Some(id),
            tr: t.tr,
            rt: t.rt,
            is_space: t.is_space,
        });
        let lower = self.tiles.tile_mut(id);
        lower.bounds.y1 = y;
        lower.rt = Some(upper);
        lower.tr = None;

        for n in tops {
            let nt = self.tiles.tile_mut(n);
            if nt.lb == Some(id) {
                nt.lb = Some(upper);
            }
        }

        let upper_tile = *self.tiles.tile(upper);
        let mut bl = None;
        for n in lefts {
            let nt = *self.tiles.tile(n);
            if nt.is_left_neighbor_to(&upper_tile) {
                bl = bl.or(Some(n));
                if nt.tr == Some(id) {
                    self.tiles.tile_mut(n).tr = Some(upper);
                }
            }
        }
        self.tiles.tile_mut(upper).bl = bl;

        let lower_tile = *self.tiles.tile(id);
        let mut tr = None;
        for n in rights {
            let nt = *self.tiles.tile(n);
            if nt.is_right_neighbor_to(&lower_tile) {
                tr = tr.or(Some(n));
            } else if nt.bl == Some(id) {
                self.tiles.tile_mut(n).bl = Some(upper);
            }
        }
        self.tiles.tile_mut(id).tr = tr;
        Some(upper)
    }

    /// Join `right` into `left`, returning the surviving `left` handle.
    ///
    /// Both tiles must be live, of the same type, share their vertical span, and
    /// touch along `left`'s right edge.
    pub(crate) fn vertical_merge(&mut self, left: TileId, right: TileId) -> Option<TileId> {
        if left == right {
            return None;
        }
        let l = *self.tiles.get(left)?;
        let r = *self.tiles.get(right)?;
        if l.is_space != r.is_space
            || l.bottom() != r.bottom()
            || l.top() != r.top()
            || l.right() != r.left()
        {
            return None;
        }
        let tops: Vec<_> = self.top_neighbors(right).collect();
        let bottoms: Vec<_> = self.bottom_neighbors(right).collect();
        let rights: Vec<_> = self.right_neighbors(right).collect();
        for n in tops {
            let nt = self.tiles.tile_mut(n);
            if nt.lb == Some(right) {
                nt.lb = Some(left);
            }
        }
        for n in bottoms {
            let nt = self.tiles.tile_mut(n);
            if nt.rt == Some(right) {
                nt.rt = Some(left);
            }
        }
        for n in rights {
            let nt = self.tiles.tile_mut(n);
            if nt.bl == Some(right) {
                nt.bl = Some(left);
            }
        }
        let survivor = self.tiles.tile_mut(left);
        survivor.bounds.x1 = r.right();
        survivor.tr = r.tr;
        survivor.rt = r.rt;
        self.tiles.free(right);
        Some(left)
    }

    /// Join `upper` into `lower`, returning the surviving `lower` handle.
    ///
    /// Both tiles must be live, of the same type, share their horizontal span, and
    /// touch along `lower`'s top edge.
    pub(crate) fn horizontal_merge(&mut self, lower: TileId, upper: TileId) -> Option<TileId> {
        if lower == upper {
            return None;
        }
        let lo = *self.tiles.get(lower)?;
        let up = *self.tiles.get(upper)?;
        if lo.is_space != up.is_space
            || lo.left() != up.left()
            || lo.right() != up.right()
            || lo.top() != up.bottom()
        {
            return None;
        }
        let rights: Vec<_> = self.right_neighbors(upper).collect();
        let lefts: Vec<_> = self.left_neighbors(upper).collect();
        let tops: Vec<_> = self.top_neighbors(upper).collect();
        for n in rights {
            let nt = self.tiles.tile_mut(n);
            if nt.bl == Some(upper) {
                nt.bl = Some(lower);
            }
        }
        for n in lefts {
            let nt = self.tiles.tile_mut(n);
            if nt.tr == Some(upper) {
                nt.tr = Some(lower);
            }
        }
        for n in tops {
            let nt = self.tiles.tile_mut(n);
            if nt.lb == Some(upper) {
                nt.lb = Some(lower);
            }
        }
        let survivor = self.tiles.tile_mut(lower);
        survivor.bounds.y1 = up.top();
        survivor.tr = up.tr;
        survivor.rt = up.rt;
        self.tiles.free(upper);
        Some(lower)
    }
}
