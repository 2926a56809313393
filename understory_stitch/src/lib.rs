// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Stitch: a corner-stitched plane of solid and space tiles.
//!
//! Corner stitching partitions a fixed rectangle into non-overlapping, axis-aligned
//! tiles. Solid tiles are the objects you insert; the rest of the plane is covered by
//! space tiles. Every tile carries four "corner stitches", links to one neighbor on
//! each side, which is enough to answer local geometric questions by walking the
//! mesh instead of scanning every tile.
//!
//! - Point location from a nearby seed tile.
//! - Neighbor enumeration along any edge.
//! - "Is this area empty?" and "which tiles overlap this area?".
//! - Inserting and deleting solid rectangles while keeping the space decomposition
//!   canonical (maximal horizontal strips).
//!
//! Typical uses are layout and placement engines, VLSI-style design-rule checks,
//! and free-space bookkeeping for packing.
//!
//! ## API overview
//!
//! - [`Stitch`]: the plane. Owns all tiles and every query and edit.
//! - [`Tile`]: a copy of one tile's geometry, type, and stitches.
//! - [`TileId`]: generational handle of a tile.
//! - [`Side`]: names an edge for [`Stitch::neighbors`].
//! - [`Invariants`] and [`Violation`]: brute-force self checks via [`Stitch::validate`].
//!
//! Key operations:
//! - [`Stitch::insert`] → [`TileId`] of the new solid tile.
//! - [`Stitch::delete`] → the removed [`Tile`].
//! - [`Stitch::point_find`], [`Stitch::area_search`], and [`Stitch::area_enum`].
//!
//! ## Coordinates and handles
//!
//! The plane lives in quadrant I with `y` growing upward, so a tile's
//! [`coord`](Tile::coord) is its lower-left corner. Tile spans are half-open: a point
//! on a shared edge belongs to the tile above or to the right of it. Rectangles
//! passed to queries use [`kurbo::Rect`] and must have strictly positive width and
//! height.
//!
//! Tiles keep their edges exactly as given. Every edge in the plane is one of the
//! coordinates passed to [`Stitch::new`] or [`Stitch::insert`], so arbitrary decimal
//! coordinates line up without rounding drift.
//!
//! Edits split and merge space tiles freely. Handles of solid tiles stay valid until
//! the tile is deleted; handles of space tiles should be treated as short-lived.
//! Stale handles are detected through their generation and rejected.
//!
//! ## Logging
//!
//! Edits emit `trace` and `debug` records through the [`log`] facade. The crate
//! never installs a logger.
//!
//! ## Example
//!
//! ```rust
//! use understory_stitch::{Invariants, Side, Stitch};
//! use kurbo::{Point, Rect, Size};
//!
//! let mut plane = Stitch::new(Point::ZERO, Size::new(30.0, 24.0));
//!
//! let a = plane.insert(Rect::new(4.0, 5.0, 9.0, 13.0)).unwrap();
//! let b = plane.insert(Rect::new(15.0, 2.0, 20.0, 7.0)).unwrap();
//!
//! // Overlapping inserts are rejected and leave the plane unchanged.
//! assert!(plane.insert(Rect::new(8.0, 8.0, 12.0, 12.0)).is_none());
//!
//! // Point location and area queries.
//! assert_eq!(plane.point_find(Point::new(5.0, 6.0), None), Some(a));
//! assert_eq!(plane.area_search(Rect::new(14.0, 0.0, 30.0, 4.0), None), Some(b));
//! assert!(plane.area_search(Rect::new(0.0, 14.0, 30.0, 24.0), None).is_none());
//!
//! // Nothing solid touches the right edge of `a`.
//! let right: Vec<_> = plane.neighbors(a, Side::Right).collect();
//! assert!(right.iter().all(|&n| plane.get(n).is_some_and(|t| t.is_space)));
//!
//! plane.delete(a).unwrap();
//! plane.delete(b).unwrap();
//! assert_eq!(plane.tile_count(), 1);
//! assert_eq!(plane.validate(Invariants::ALL), Ok(()));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod arena;
mod area;
mod check;
mod edit;
mod neighbors;
mod split;
mod stitch;
mod types;

#[cfg(test)]
mod testing;

pub use check::{Invariants, Violation};
pub use neighbors::Neighbors;
pub use stitch::Stitch;
pub use types::{Side, Tile, TileId, in_quadrant_i, is_size};
