// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! First-fit placement using a corner-stitched plane as a free-space map.
//!
//! Each item is dropped at the lowest, then left-most, spot where it fits. Candidate
//! spots are the lower-left corners of space tiles, and `area_search` tells whether
//! the item would collide with anything already placed.
//!
//! Run:
//! - `cargo run -p understory_examples --example stitch_first_fit`

use kurbo::{Point, Rect, Size};
use understory_stitch::{Invariants, Stitch, TileId};

const SHEET: Size = Size::new(40.0, 30.0);

fn place(sheet: &mut Stitch, item: Size) -> Option<TileId> {
    let mut spots: Vec<Point> = sheet
        .tiles()
        .filter(|(_, t)| t.is_space)
        .map(|(_, t)| t.coord())
        .collect();
    spots.sort_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));
    spots.into_iter().find_map(|p| {
        let r = Rect::from_origin_size(p, item);
        if r.x1 > SHEET.width || r.y1 > SHEET.height {
            return None;
        }
        match sheet.area_search(r, sheet.last_inserted()) {
            Some(_) => None,
            None => sheet.insert(r),
        }
    })
}

fn main() {
    let mut sheet = Stitch::new(Point::ZERO, SHEET);
    let items = [
        Size::new(12.0, 8.0),
        Size::new(10.0, 10.0),
        Size::new(20.0, 6.0),
        Size::new(6.0, 14.0),
        Size::new(8.0, 8.0),
        Size::new(15.0, 5.0),
        Size::new(30.0, 20.0),
    ];
    let mut used = 0.0;
    for item in items {
        match place(&mut sheet, item) {
            Some(id) => {
                let r = sheet.get(id).map(|t| t.rect()).unwrap_or_default();
                used += r.area();
                println!("placed {item:?} at {:?}", r.origin());
            }
            None => println!("no room for {item:?}"),
        }
    }
    println!(
        "{:.0}% of the sheet used, {} tiles",
        100.0 * used / SHEET.area(),
        sheet.tile_count()
    );
    assert_eq!(sheet.validate(Invariants::ALL), Ok(()));
}
