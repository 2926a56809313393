// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for unit tests.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::types::{Tile, TileId};
use crate::{Invariants, Stitch};

/// Handle of slot `n` in a fixture built by [`reference`].
pub(crate) const fn id(n: u32) -> TileId {
    TileId::new(n, 1)
}

/// Slot numbers of a list of handles, for compact assertions.
pub(crate) fn slots(ids: impl IntoIterator<Item = TileId>) -> Vec<u32> {
    ids.into_iter().map(TileId::index).collect()
}

const NONE: i32 = -1;

// (x, y, w, h, bl, lb, tr, rt, space)
type Row = (f64, f64, f64, f64, i32, i32, i32, i32, bool);

const REFERENCE: [Row; 21] = [
    (0., 0., 30., 2., NONE, NONE, NONE, 4, true),
    (0., 2., 15., 3., NONE, 0, 2, 7, true),
    (15., 2., 5., 5., 1, 0, 8, 9, false),
    (20., 2., 8., 2., 2, 0, 4, 8, false),
    (28., 2., 2., 2., 3, 0, NONE, 8, true),
    (0., 5., 4., 8., NONE, 1, 6, 13, true),
    (4., 5., 5., 8., 5, 1, 10, 13, false),
    (9., 5., 6., 2., 6, 1, 2, 9, true),
    (20., 4., 10., 3., 2, 3, NONE, 9, true),
    (9., 7., 21., 4., 6, 7, NONE, 12, true),
    (9., 11., 2., 2., 6, 9, 11, 13, true),
    (11., 11., 8., 4., 10, 9, 14, 16, false),
    (19., 11., 11., 3., 11, 9, NONE, 15, true),
    (0., 13., 11., 2., NONE, 5, 11, 16, true),
    (19., 14., 6., 4., 11, 12, 15, 19, false),
    (25., 14., 5., 4., 14, 12, NONE, 19, true),
    (0., 15., 19., 3., NONE, 13, 14, 19, true),
    (0., 18., 7., 4., NONE, 16, 18, 20, true),
    (7., 18., 6., 4., 17, 16, 19, 20, false),
    (13., 18., 17., 4., 18, 16, NONE, 20, true),
    (0., 22., 30., 2., NONE, 17, NONE, NONE, true),
];

fn link(n: i32) -> Option<TileId> {
    u32::try_from(n).ok().map(id)
}

/// A hand-stitched 21-tile mesh over `(0, 0) .. (30, 24)` holding six solid tiles,
/// with tile `11` cached as the last insert.
pub(crate) fn reference() -> Stitch {
    let tiles = REFERENCE
        .iter()
        .map(|&(x, y, w, h, bl, lb, tr, rt, space)| Tile {
            bounds: Rect::from_origin_size(Point::new(x, y), Size::new(w, h)),
            bl: link(bl),
            lb: link(lb),
            tr: link(tr),
            rt: link(rt),
            is_space: space,
        })
        .collect();
    let s = Stitch::from_parts(Rect::new(0.0, 0.0, 30.0, 24.0), tiles, Some(id(11)));
    debug_assert_eq!(s.validate(Invariants::ALL), Ok(()), "reference mesh is valid");
    s
}

/// The six solid rectangles of [`reference`], as `(x, y, w, h)`.
pub(crate) const REFERENCE_SOLIDS: [(f64, f64, f64, f64); 6] = [
    (15., 2., 5., 5.),
    (20., 2., 8., 2.),
    (4., 5., 5., 8.),
    (11., 11., 8., 4.),
    (19., 14., 6., 4.),
    (7., 18., 6., 4.),
];

/// Geometry of every tile, sorted, for comparing meshes regardless of slot layout.
pub(crate) fn shapes(s: &Stitch) -> Vec<(u64, u64, u64, u64, bool)> {
    let mut out: Vec<_> = s
        .tiles()
        .map(|(_, t)| {
            (
                t.bounds.x0.to_bits(),
                t.bounds.y0.to_bits(),
                t.bounds.x1.to_bits(),
                t.bounds.y1.to_bits(),
                t.is_space,
            )
        })
        .collect();
    out.sort_unstable();
    out
}
