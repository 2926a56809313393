// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corner stitching basics.
//!
//! Insert a few solid blocks, walk their neighbors, run area queries, and delete
//! them again.
//!
//! Run:
//! - `cargo run -p understory_examples --example stitch_basics`

use kurbo::{Point, Rect, Size};
use understory_stitch::{Invariants, Side, Stitch, TileId};

fn describe(plane: &Stitch, id: TileId) -> String {
    match plane.get(id) {
        Some(t) => format!(
            "{:?} {} {:?}",
            id,
            if t.is_space { "space" } else { "solid" },
            t.rect()
        ),
        None => format!("{id:?} (stale)"),
    }
}

fn main() {
    let mut plane = Stitch::new(Point::ZERO, Size::new(30.0, 24.0));

    let blocks = [
        Rect::new(15.0, 2.0, 20.0, 7.0),
        Rect::new(20.0, 2.0, 28.0, 4.0),
        Rect::new(4.0, 5.0, 9.0, 13.0),
        Rect::new(11.0, 11.0, 19.0, 15.0),
        Rect::new(19.0, 14.0, 25.0, 18.0),
        Rect::new(7.0, 18.0, 13.0, 22.0),
    ];
    let ids: Vec<TileId> = blocks
        .iter()
        .map(|&r| plane.insert(r).expect("blocks are disjoint"))
        .collect();
    println!("{} tiles after {} inserts", plane.tile_count(), ids.len());

    // Overlapping blocks are refused.
    let clash = Rect::new(6.0, 6.0, 12.0, 12.0);
    println!("insert {clash:?} -> {:?}", plane.insert(clash));

    // Walk around one block.
    let center = ids[3];
    println!("around {}:", describe(&plane, center));
    for side in Side::ALL {
        for n in plane.neighbors(center, side) {
            println!("  {side:?}: {}", describe(&plane, n));
        }
    }

    // Point location and area queries.
    let p = Point::new(12.0, 12.0);
    if let Some(id) = plane.point_find(p, None) {
        println!("{p:?} is in {}", describe(&plane, id));
    }
    let window = Rect::new(0.0, 10.0, 30.0, 16.0);
    println!("tiles overlapping {window:?}:");
    for id in plane.area_enum(window, None) {
        println!("  {}", describe(&plane, id));
    }
    let band = Rect::new(0.0, 22.0, 30.0, 24.0);
    println!("solid in {band:?}: {:?}", plane.area_search(band, None));

    // Deleting everything leaves one space tile again.
    for id in ids {
        plane.delete(id);
    }
    println!("{} tile(s) after deleting everything", plane.tile_count());
    assert_eq!(plane.validate(Invariants::ALL), Ok(()));
}
