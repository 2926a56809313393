// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tile plane: storage, accessors, and point finding.

use core::cmp::Ordering;

use kurbo::{Point, Rect, Size};

use crate::arena::Arena;
use crate::types::{Tile, TileId, in_quadrant_i, is_size};

/// A corner-stitched plane of solid and space tiles.
///
/// The plane is a fixed rectangle, always exactly covered by non-overlapping tiles.
/// A fresh plane holds a single space tile; [`insert`](Self::insert) carves solid
/// tiles out of the space and [`delete`](Self::delete) turns them back into space.
/// Space is kept as maximal horizontal strips, so the decomposition for a given set
/// of solid tiles is unique.
#[derive(Clone)]
pub struct Stitch {
    bounds: Rect,
    pub(crate) tiles: Arena,
    pub(crate) last_inserted: Option<TileId>,
}

impl core::fmt::Debug for Stitch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let solid = self.tiles.iter().filter(|(_, t)| !t.is_space).count();
        f.debug_struct("Stitch")
            .field("plane", &self.plane())
            .field("tiles_alive", &self.tiles.len())
            .field("solid", &solid)
            .field("last_inserted", &self.last_inserted)
            .finish_non_exhaustive()
    }
}

impl Stitch {
    /// Create a plane covering `origin .. origin + size`, filled with one space tile.
    ///
    /// # Panics
    ///
    /// Panics if `origin` lies outside quadrant I or `size` is not a legal extent
    /// (see [`is_size`](crate::is_size)).
    pub fn new(origin: Point, size: Size) -> Self {
        assert!(in_quadrant_i(origin), "plane origin must lie in quadrant I");
        assert!(is_size(size, origin), "illegal plane size");
        let bounds = Rect::from_origin_size(origin, size);
        let mut tiles = Arena::default();
        tiles.alloc(Tile::unchecked(bounds, true));
        Self {
            bounds,
            tiles,
            last_inserted: None,
        }
    }

    /// Lower-left corner of the plane.
    pub fn origin(&self) -> Point {
        self.bounds.origin()
    }

    /// Extent of the plane.
    pub fn size(&self) -> Size {
        self.bounds.size()
    }

    /// The plane as a rectangle.
    pub fn plane(&self) -> Rect {
        self.bounds
    }

    pub(crate) fn plane_tile(&self) -> Tile {
        Tile::unchecked(self.bounds, true)
    }

    /// Number of live tiles, solid and space.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Returns true if `id` refers to a live tile.
    ///
    /// See [`TileId`] for the generational semantics.
    pub fn is_alive(&self, id: TileId) -> bool {
        self.tiles.is_alive(id)
    }

    /// A copy of the tile named by `id`, if it is live.
    pub fn get(&self, id: TileId) -> Option<Tile> {
        self.tiles.get(id).copied()
    }

    /// Iterate over all live tiles.
    pub fn tiles(&self) -> impl Iterator<Item = (TileId, &Tile)> + '_ {
        self.tiles.iter()
    }

    /// The tile produced by the most recent successful insert, while it is still solid.
    pub fn last_inserted(&self) -> Option<TileId> {
        self.last_inserted.filter(|&id| self.tiles.is_alive(id))
    }

    /// Starting tile for a walk: `hint` if live, else the last inserted tile, else any.
    pub(crate) fn seed(&self, hint: Option<TileId>) -> TileId {
        hint.filter(|&id| self.tiles.is_alive(id))
            .or_else(|| self.last_inserted())
            .or_else(|| self.tiles.last_alive())
            .expect("a plane always holds at least one tile")
    }

    /// Find the tile containing `p`, walking the stitches from `seed`.
    ///
    /// The walk starts at `seed` when it is live, otherwise at the last inserted tile.
    /// Points on the top or right edge of the plane resolve to the tile on that edge.
    /// Returns `None` if `p` lies outside the closed plane rectangle.
    ///
    /// The walk alternates vertical moves (`rt`/`lb`) and horizontal moves
    /// (`tr`/`bl`), so its cost grows with the stitch distance between the seed and
    /// the target rather than with the number of tiles.
    pub fn point_find(&self, p: Point, seed: Option<TileId>) -> Option<TileId> {
        let plane = self.plane();
        if !(plane.x0 <= p.x && p.x <= plane.x1 && plane.y0 <= p.y && p.y <= plane.y1) {
            return None;
        }
        let mut id = self.seed(seed);
        loop {
            let prev = id;
            loop {
                let t = self.tiles.tile(id);
                let next = match t.cmp_y(p.y) {
                    Ordering::Less => t.lb,
                    Ordering::Greater => t.rt,
                    Ordering::Equal => None,
                };
                match next {
                    Some(n) => id = n,
                    None => break,
                }
            }
            loop {
                let t = self.tiles.tile(id);
                let next = match t.cmp_x(p.x) {
                    Ordering::Less => t.bl,
                    Ordering::Greater => t.tr,
                    Ordering::Equal => None,
                };
                match next {
                    Some(n) => id = n,
                    None => break,
                }
            }
            if id == prev || self.tiles.tile(id).contains(p) {
                return Some(id);
            }
        }
    }

    /// A plane assembled from prebuilt tiles; slot `n` gets `TileId::new(n, 1)`.
    #[cfg(test)]
    pub(crate) fn from_parts(
        bounds: Rect,
        tiles: alloc::vec::Vec<Tile>,
        last_inserted: Option<TileId>,
    ) -> Self {
        Self {
            bounds,
            tiles: Arena::from_tiles(tiles),
            last_inserted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{id, reference};
    use kurbo::Vec2;

    #[test]
    fn new_plane_is_one_space_tile() {
        let s = Stitch::new(Point::new(1.0, 2.0), Size::new(10.0, 5.0));
        assert_eq!(s.tile_count(), 1);
        let (only, t) = s.tiles().next().expect("one tile");
        assert!(t.is_space);
        assert_eq!(t.rect(), Rect::new(1.0, 2.0, 11.0, 7.0));
        assert_eq!(s.plane(), t.rect());
        assert_eq!(s.last_inserted(), None);
        assert_eq!(s.point_find(Point::new(5.0, 5.0), None), Some(only));
        assert_eq!(s.point_find(Point::new(11.0, 7.0), None), Some(only));
        assert_eq!(s.point_find(Point::new(0.5, 5.0), None), None);
        assert_eq!(s.point_find(Point::new(5.0, 7.5), None), None);
    }

    #[test]
    #[should_panic(expected = "illegal plane size")]
    fn new_rejects_empty_plane() {
        let _ = Stitch::new(Point::ZERO, Size::new(3.0, 0.0));
    }

    #[test]
    fn point_find_from_every_seed() {
        let s = reference();
        for (target, t) in s.tiles() {
            let points = [
                t.coord(),
                t.coord() + Vec2::new(0.1, 0.1),
                t.upper_right() - Vec2::new(0.1, 0.1),
                t.rect().center(),
            ];
            for seed in s.tiles().map(|(seed, _)| seed) {
                for p in points {
                    assert_eq!(
                        s.point_find(p, Some(seed)),
                        Some(target),
                        "{p:?} from {seed:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn point_find_at_corners() {
        let s = reference();
        for (me, t) in s.tiles() {
            let lower_right = s.point_find(t.lower_right(), Some(me));
            let upper_left = s.point_find(t.upper_left(), Some(me));
            let upper_right = s.point_find(t.upper_right(), Some(me));
            match (t.rt, t.tr) {
                (None, None) => assert_eq!(upper_right, Some(me), "{me:?}"),
                (Some(_), None) => {
                    assert_eq!(lower_right, Some(me), "{me:?}");
                    assert_ne!(upper_left, Some(me), "{me:?}");
                    assert_ne!(upper_right, Some(me), "{me:?}");
                }
                (None, Some(_)) => {
                    assert_ne!(lower_right, Some(me), "{me:?}");
                    assert_eq!(upper_left, Some(me), "{me:?}");
                    assert_ne!(upper_right, Some(me), "{me:?}");
                }
                (Some(_), Some(_)) => {
                    assert_ne!(lower_right, Some(me), "{me:?}");
                    assert_ne!(upper_left, Some(me), "{me:?}");
                    assert_ne!(upper_right, Some(me), "{me:?}");
                }
            }
        }
    }

    #[test]
    fn stale_seed_falls_back_to_last_inserted() {
        let s = reference();
        let stale = TileId::new(3, 7);
        assert!(!s.is_alive(stale));
        assert_eq!(s.last_inserted(), Some(id(11)));
        assert_eq!(s.point_find(Point::new(1.0, 1.0), Some(stale)), Some(id(0)));
        assert_eq!(s.get(stale), None);
        assert!(s.get(id(11)).is_some_and(|t| !t.is_space));
    }

    #[test]
    fn debug_is_a_summary() {
        let s = reference();
        let text = alloc::format!("{s:?}");
        assert!(text.contains("tiles_alive: 21"), "{text}");
        assert!(text.contains("solid: 6"), "{text}");
    }
}
