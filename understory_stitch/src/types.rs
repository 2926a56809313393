// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry primitives: tile handles, tiles, and the comparison, overlap and
//! adjacency predicates the rest of the crate is built on.
//!
//! Coordinates follow the usual layout convention where `y` grows upward, so the
//! "lower-left" corner of a tile is its origin. Tile spans are half-open,
//! `[x0, x1)` and `[y0, y1)`.

use core::cmp::Ordering;

use kurbo::{Point, Rect, Size};

/// Identifier for a tile in a [`Stitch`](crate::Stitch).
///
/// A small, copyable handle made of a slot index and a generation counter.
///
/// ## Semantics
///
/// - A fresh slot starts at generation `1`.
/// - When a tile is merged away (or a delete frees it), its slot is freed and every
///   `TileId` pointing at it becomes stale.
/// - Freed slots are reused last-in first-out; reuse increments the generation, so a
///   stale `TileId` never aliases the tile that now occupies its slot.
///
/// Use [`Stitch::is_alive`](crate::Stitch::is_alive) to check whether a handle still
/// refers to a live tile. Edits split and merge tiles freely, so handles other than
/// the one returned by [`Stitch::insert`](crate::Stitch::insert) should be treated
/// as short-lived.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TileId(pub(crate) u32, pub(crate) u32);

impl TileId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Slot index of this handle.
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Generation of the slot at the time this handle was issued.
    pub const fn generation(self) -> u32 {
        self.1
    }
}

/// One of the four edges of a tile.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// The edge at `x0`.
    Left,
    /// The edge at `y0`.
    Bottom,
    /// The edge at `x1`.
    Right,
    /// The edge at `y1`.
    Top,
}

impl Side {
    /// All four sides, in `Left, Bottom, Right, Top` order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Bottom, Self::Right, Self::Top];

    /// The stitch followed from one neighbor to the next when walking this side.
    pub(crate) const fn walk(self) -> Self {
        match self {
            Self::Left => Self::Top,
            Self::Top => Self::Left,
            Self::Right => Self::Bottom,
            Self::Bottom => Self::Right,
        }
    }
}

/// True if both components are non-negative.
pub fn in_quadrant_i(p: Point) -> bool {
    p.x >= 0.0 && p.y >= 0.0
}

/// True if `size` is a legal tile extent at `origin`: strictly positive on both axes
/// and small enough that `origin + size` does not overflow.
pub fn is_size(size: Size, origin: Point) -> bool {
    size.width > 0.0
        && size.height > 0.0
        && size.width <= f64::MAX - origin.x
        && size.height <= f64::MAX - origin.y
}

/// An axis-aligned tile with its four corner stitches.
///
/// The geometry is stored as the four edge coordinates, never as an origin plus
/// an extent. Splits and merges only copy edges around, so every edge in a plane
/// is exactly one of the coordinates passed to [`Stitch::new`](crate::Stitch::new)
/// or [`Stitch::insert`](crate::Stitch::insert).
///
/// `bl`, `lb`, `tr` and `rt` name the first neighbor on each side, in the order
/// produced by the neighbor iterators:
///
/// - `bl`: bottom-most tile touching the left edge,
/// - `lb`: left-most tile touching the bottom edge,
/// - `tr`: top-most tile touching the right edge,
/// - `rt`: right-most tile touching the top edge.
///
/// A link is `None` when that edge lies on the plane boundary.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tile {
    /// Edges of the tile: `x0 < x1` and `y0 < y1`.
    pub bounds: Rect,
    /// Bottom-most left neighbor.
    pub bl: Option<TileId>,
    /// Left-most bottom neighbor.
    pub lb: Option<TileId>,
    /// Top-most right neighbor.
    pub tr: Option<TileId>,
    /// Right-most top neighbor.
    pub rt: Option<TileId>,
    /// Empty space (`true`) or solid material (`false`).
    pub is_space: bool,
}

impl Tile {
    /// Create an unlinked tile at `coord` with extent `size`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` lies outside quadrant I or `size` is not a legal extent
    /// (see [`is_size`]).
    pub fn new(coord: Point, size: Size, is_space: bool) -> Self {
        assert!(in_quadrant_i(coord), "tile origin must lie in quadrant I");
        assert!(is_size(size, coord), "illegal tile size");
        Self::unchecked(Rect::from_origin_size(coord, size), is_space)
    }

    /// A tile without geometry checks; also used for degenerate line segments.
    pub(crate) const fn unchecked(bounds: Rect, is_space: bool) -> Self {
        Self {
            bounds,
            bl: None,
            lb: None,
            tr: None,
            rt: None,
            is_space,
        }
    }

    /// A query area from a rectangle, or `None` if its origin leaves quadrant I or
    /// its extent is not a legal size.
    pub(crate) fn area(rect: Rect) -> Option<Self> {
        let coord = Point::new(rect.x0, rect.y0);
        (in_quadrant_i(coord) && is_size(rect.size(), coord))
            .then_some(Self::unchecked(rect, true))
    }

    /// The rectangle covered by this tile.
    pub fn rect(&self) -> Rect {
        self.bounds
    }

    /// Lower-left corner, the tile's origin.
    pub fn coord(&self) -> Point {
        Point::new(self.bounds.x0, self.bounds.y0)
    }

    /// Width and height.
    pub fn size(&self) -> Size {
        self.bounds.size()
    }

    /// X coordinate of the left edge.
    pub fn left(&self) -> f64 {
        self.bounds.x0
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.bounds.y0
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.bounds.x1
    }

    /// Y coordinate of the top edge.
    pub fn top(&self) -> f64 {
        self.bounds.y1
    }

    /// Area of the tile.
    pub fn area_size(&self) -> f64 {
        self.bounds.area()
    }

    /// Lower-left corner (the origin).
    pub fn lower_left(&self) -> Point {
        self.coord()
    }

    /// Lower-right corner.
    pub fn lower_right(&self) -> Point {
        Point::new(self.bounds.x1, self.bounds.y0)
    }

    /// Upper-left corner.
    pub fn upper_left(&self) -> Point {
        Point::new(self.bounds.x0, self.bounds.y1)
    }

    /// Upper-right corner.
    pub fn upper_right(&self) -> Point {
        Point::new(self.bounds.x1, self.bounds.y1)
    }

    /// The stitch stored for `side`.
    pub fn stitch(&self, side: Side) -> Option<TileId> {
        match side {
            Side::Left => self.bl,
            Side::Bottom => self.lb,
            Side::Right => self.tr,
            Side::Top => self.rt,
        }
    }

    /// Where `x` falls relative to the half-open span `[left, right)`.
    pub fn cmp_x(&self, x: f64) -> Ordering {
        if x < self.left() {
            Ordering::Less
        } else if self.right() <= x {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Where `y` falls relative to the half-open span `[bottom, top)`.
    pub fn cmp_y(&self, y: f64) -> Ordering {
        if y < self.bottom() {
            Ordering::Less
        } else if self.top() <= y {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Whether `p` lies inside the tile (upper and right edges excluded).
    pub fn contains(&self, p: Point) -> bool {
        self.cmp_x(p.x) == Ordering::Equal && self.cmp_y(p.y) == Ordering::Equal
    }

    /// Whether `other` lies within this tile, edges included.
    pub fn contains_tile(&self, other: &Self) -> bool {
        self.left() <= other.left()
            && self.bottom() <= other.bottom()
            && other.right() <= self.right()
            && other.top() <= self.top()
    }

    /// Positive-length overlap along the x axis.
    pub fn overlaps_x(&self, other: &Self) -> bool {
        self.cmp_x(other.left()) == Ordering::Equal || other.cmp_x(self.left()) == Ordering::Equal
    }

    /// Positive-length overlap along the y axis.
    pub fn overlaps_y(&self, other: &Self) -> bool {
        self.cmp_y(other.bottom()) == Ordering::Equal
            || other.cmp_y(self.bottom()) == Ordering::Equal
    }

    /// Positive-area intersection.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.overlaps_x(other) && self.overlaps_y(other)
    }

    /// Whether the vertical segment at `x` from `y0` up to `y1` crosses this tile.
    /// `x` must fall inside the tile's half-open span.
    pub fn overlaps_vertical_line(&self, x: f64, y0: f64, y1: f64) -> bool {
        self.overlaps(&Self::unchecked(Rect::new(x, y0, x, y1), true))
    }

    /// Whether the horizontal segment at `y` from `x0` right to `x1` crosses this
    /// tile. `y` must fall inside the tile's half-open span.
    pub fn overlaps_horizontal_line(&self, y: f64, x0: f64, x1: f64) -> bool {
        self.overlaps(&Self::unchecked(Rect::new(x0, y, x1, y), true))
    }

    /// This tile touches the right edge of `other` along a segment of positive
    /// length. Tiles meeting only at a corner are not neighbors.
    pub fn is_right_neighbor_to(&self, other: &Self) -> bool {
        self.left() == other.right() && self.overlaps_y(other)
    }

    /// This tile touches the left edge of `other` along a segment of positive
    /// length. Tiles meeting only at a corner are not neighbors.
    pub fn is_left_neighbor_to(&self, other: &Self) -> bool {
        self.right() == other.left() && self.overlaps_y(other)
    }

    /// This tile touches the top edge of `other` along a segment of positive
    /// length. Tiles meeting only at a corner are not neighbors.
    pub fn is_top_neighbor_to(&self, other: &Self) -> bool {
        self.bottom() == other.top() && self.overlaps_x(other)
    }

    /// This tile touches the bottom edge of `other` along a segment of positive
    /// length. Tiles meeting only at a corner are not neighbors.
    pub fn is_bottom_neighbor_to(&self, other: &Self) -> bool {
        self.top() == other.bottom() && self.overlaps_x(other)
    }

    /// This tile touches the `side` edge of `other`, corner contact excluded.
    pub fn is_neighbor_to(&self, side: Side, other: &Self) -> bool {
        match side {
            Side::Left => self.is_left_neighbor_to(other),
            Side::Bottom => self.is_bottom_neighbor_to(other),
            Side::Right => self.is_right_neighbor_to(other),
            Side::Top => self.is_top_neighbor_to(other),
        }
    }
}
