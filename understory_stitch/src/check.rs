// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Brute-force checks of the plane's structural invariants.
//!
//! These are meant for tests and debugging: each check looks at every tile (and
//! the partition check at every pair of tiles), so they are far slower than the
//! queries they verify.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use crate::stitch::Stitch;
use crate::types::{Side, Tile, TileId};

bitflags::bitflags! {
    /// Selects which invariants [`Stitch::validate`] checks.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Invariants: u8 {
        /// Tiles lie inside the plane, do not overlap, and cover it.
        const PARTITION = 0b0000_0001;
        /// Every stitch points at the right neighbor and every neighbor walk
        /// reports exactly the tiles touching that edge.
        const STITCHES  = 0b0000_0010;
        /// Space tiles are maximal horizontal strips.
        const STRIPS    = 0b0000_0100;
        /// All of the above.
        const ALL = Self::PARTITION.bits() | Self::STITCHES.bits() | Self::STRIPS.bits();
    }
}

impl Default for Invariants {
    fn default() -> Self {
        Self::ALL
    }
}

/// A broken invariant found by [`Stitch::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Violation {
    /// The tile reaches outside the plane.
    OutOfPlane(TileId),
    /// Two tiles overlap.
    Overlap(TileId, TileId),
    /// Tile areas do not add up to the plane's area.
    Coverage {
        /// Sum of all tile areas.
        covered: f64,
        /// Area of the plane.
        plane: f64,
    },
    /// A stitch names a dead tile, or a tile that does not touch that edge.
    Stitch {
        /// Tile holding the stitch.
        tile: TileId,
        /// Which stitch.
        side: Side,
    },
    /// Walking the stitches along an edge disagrees with the tiles touching it.
    Neighbors {
        /// Tile whose edge was walked.
        tile: TileId,
        /// Which edge.
        side: Side,
    },
    /// A space tile has a space tile beside it.
    Strip {
        /// The space tile.
        tile: TileId,
        /// Its space neighbor on the left or right.
        neighbor: TileId,
    },
    /// A space tile sits on another with the same horizontal span.
    Unmerged {
        /// The lower tile.
        lower: TileId,
        /// The upper tile.
        upper: TileId,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfPlane(id) => write!(f, "tile {id:?} reaches outside the plane"),
            Self::Overlap(a, b) => write!(f, "tiles {a:?} and {b:?} overlap"),
            Self::Coverage { covered, plane } => {
                write!(f, "tiles cover {covered} of a plane of area {plane}")
            }
            Self::Stitch { tile, side } => {
                write!(f, "{side:?} stitch of tile {tile:?} is wrong")
            }
            Self::Neighbors { tile, side } => {
                write!(f, "{side:?} neighbors of tile {tile:?} do not match the mesh")
            }
            Self::Strip { tile, neighbor } => {
                write!(f, "space tile {tile:?} has space neighbor {neighbor:?} beside it")
            }
            Self::Unmerged { lower, upper } => {
                write!(f, "space tiles {lower:?} and {upper:?} should be one strip")
            }
        }
    }
}

impl core::error::Error for Violation {}

impl Stitch {
    /// Check the selected invariants, reporting the first violation found.
    pub fn validate(&self, checks: Invariants) -> Result<(), Violation> {
        let tiles: Vec<(TileId, Tile)> = self.tiles.iter().map(|(id, t)| (id, *t)).collect();
        if checks.contains(Invariants::PARTITION) {
            self.check_partition(&tiles)?;
        }
        if checks.contains(Invariants::STITCHES) {
            self.check_stitches(&tiles)?;
        }
        if checks.contains(Invariants::STRIPS) {
            self.check_strips(&tiles)?;
        }
        Ok(())
    }

    fn check_partition(&self, tiles: &[(TileId, Tile)]) -> Result<(), Violation> {
        let plane = self.plane_tile();
        let mut covered = 0.0;
        for (i, (a, ta)) in tiles.iter().enumerate() {
            if !plane.contains_tile(ta) {
                return Err(Violation::OutOfPlane(*a));
            }
            if let Some((b, _)) = tiles[i + 1..].iter().find(|(_, tb)| ta.overlaps(tb)) {
                return Err(Violation::Overlap(*a, *b));
            }
            covered += ta.area_size();
        }
        let area = plane.area_size();
        if (covered - area).abs() > area * 1e-9 {
            return Err(Violation::Coverage {
                covered,
                plane: area,
            });
        }
        Ok(())
    }

    fn check_stitches(&self, tiles: &[(TileId, Tile)]) -> Result<(), Violation> {
        for &(id, t) in tiles {
            for side in Side::ALL {
                let mut want: Vec<(TileId, Tile)> = tiles
                    .iter()
                    .filter(|(_, n)| n.is_neighbor_to(side, &t))
                    .copied()
                    .collect();
                want.sort_by(|(_, a), (_, b)| walk_order(side, a, b));
                let first = want.first().map(|&(n, _)| n);
                if t.stitch(side) != first {
                    return Err(Violation::Stitch { tile: id, side });
                }
                if !self
                    .neighbors(id, side)
                    .eq(want.iter().map(|&(n, _)| n))
                {
                    return Err(Violation::Neighbors { tile: id, side });
                }
            }
        }
        Ok(())
    }

    fn check_strips(&self, tiles: &[(TileId, Tile)]) -> Result<(), Violation> {
        for &(id, t) in tiles.iter().filter(|(_, t)| t.is_space) {
            let mut beside = self.left_neighbors(id).chain(self.right_neighbors(id));
            if let Some(n) = beside.find(|&n| self.tiles.tile(n).is_space) {
                return Err(Violation::Strip {
                    tile: id,
                    neighbor: n,
                });
            }
            let aligned = self.top_neighbors(id).find(|&n| {
                let up = self.tiles.tile(n);
                up.is_space && up.left() == t.left() && up.right() == t.right()
            });
            if let Some(upper) = aligned {
                return Err(Violation::Unmerged { lower: id, upper });
            }
        }
        Ok(())
    }
}

/// Order in which the neighbor walk along `side` reports tiles.
fn walk_order(side: Side, a: &Tile, b: &Tile) -> Ordering {
    match side {
        Side::Left => a.bottom().total_cmp(&b.bottom()),
        Side::Right => b.bottom().total_cmp(&a.bottom()),
        Side::Top => b.left().total_cmp(&a.left()),
        Side::Bottom => a.left().total_cmp(&b.left()),
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use kurbo::{Point, Size};

    use super::*;
    use crate::testing::{id, reference};

    #[test]
    fn reference_mesh_is_valid() {
        assert_eq!(reference().validate(Invariants::ALL), Ok(()));
        assert_eq!(Invariants::default(), Invariants::ALL);
    }

    #[test]
    fn broken_stitch_is_reported() {
        let mut s = reference();
        s.tiles.tile_mut(id(6)).tr = Some(id(9));
        assert_eq!(s.validate(Invariants::PARTITION | Invariants::STRIPS), Ok(()));
        assert_eq!(
            s.validate(Invariants::STITCHES),
            Err(Violation::Stitch {
                tile: id(6),
                side: Side::Right
            })
        );
    }

    #[test]
    fn overlap_and_coverage_are_reported() {
        let mut s = reference();
        s.tiles.tile_mut(id(0)).bounds.y1 = 3.0;
        assert!(matches!(
            s.validate(Invariants::PARTITION),
            Err(Violation::Overlap(..))
        ));

        let mut s = reference();
        s.tiles.tile_mut(id(0)).bounds.y1 = 1.0;
        assert!(matches!(
            s.validate(Invariants::PARTITION),
            Err(Violation::Coverage { .. })
        ));

        let mut s = reference();
        s.tiles.tile_mut(id(20)).bounds.y1 = 25.0;
        assert_eq!(
            s.validate(Invariants::PARTITION),
            Err(Violation::OutOfPlane(id(20)))
        );
    }

    #[test]
    fn unmerged_space_is_reported() {
        let mut s = Stitch::new(Point::ZERO, Size::new(10.0, 10.0));
        let (only, _) = s.tiles().next().expect("one tile");
        let upper = s.horizontal_split(only, 5.0).expect("split");
        assert_eq!(s.validate(Invariants::PARTITION | Invariants::STITCHES), Ok(()));
        let err = s.validate(Invariants::ALL).expect_err("two stacked strips");
        assert_eq!(err, Violation::Unmerged { lower: only, upper });
        assert!(err.to_string().contains("one strip"));

        let mut s = Stitch::new(Point::ZERO, Size::new(10.0, 10.0));
        let right = s.vertical_split(only, 5.0).expect("split");
        assert_eq!(
            s.validate(Invariants::STRIPS),
            Err(Violation::Strip {
                tile: only,
                neighbor: right
            })
        );
    }
}
