// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generational slot storage for tiles.

use alloc::vec::Vec;

use crate::types::{Tile, TileId};

/// Slots of tiles addressed by [`TileId`].
#[derive(Clone, Default)]
pub(crate) struct Arena {
    slots: Vec<Option<Tile>>,
    generations: Vec<u32>, // last generation per slot (persists across frees)
    free_list: Vec<usize>,
}

impl core::fmt::Debug for Arena {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Arena")
            .field("slots_total", &self.slots.len())
            .field("slots_alive", &self.len())
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl Arena {
    /// Store `tile` and return its handle, reusing a freed slot when one exists.
    pub(crate) fn alloc(&mut self, tile: Tile) -> TileId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(tile);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "TileId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(tile));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "TileId uses 32-bit indices by design."
            )]
            ((self.slots.len() - 1) as u32, generation)
        };
        TileId::new(idx, generation)
    }

    /// Release the slot of `id`, returning the tile it held.
    pub(crate) fn free(&mut self, id: TileId) -> Option<Tile> {
        if !self.is_alive(id) {
            return None;
        }
        let tile = self.slots[id.idx()].take();
        self.free_list.push(id.idx());
        tile
    }

    /// Returns true if `id` refers to a live tile.
    pub(crate) fn is_alive(&self, id: TileId) -> bool {
        matches!(self.slots.get(id.idx()), Some(Some(_)))
            && self.generations.get(id.idx()) == Some(&id.1)
    }

    pub(crate) fn get(&self, id: TileId) -> Option<&Tile> {
        if !self.is_alive(id) {
            return None;
        }
        self.slots[id.idx()].as_ref()
    }

    /// Unchecked access for handles taken from live stitches.
    pub(crate) fn tile(&self, id: TileId) -> &Tile {
        self.get(id).expect("dangling TileId")
    }

    pub(crate) fn tile_mut(&mut self, id: TileId) -> &mut Tile {
        assert!(self.is_alive(id), "dangling TileId");
        self.slots[id.idx()].as_mut().expect("dangling TileId")
    }

    /// Number of live tiles.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    /// Live tiles in slot order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (TileId, &Tile)> + '_ {
        self.slots.iter().enumerate().filter_map(|(idx, slot)| {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "TileId uses 32-bit indices by design."
            )]
            let id = TileId::new(idx as u32, self.generations[idx]);
            slot.as_ref().map(|t| (id, t))
        })
    }

    /// The live tile in the highest slot.
    pub(crate) fn last_alive(&self) -> Option<TileId> {
        self.iter().last().map(|(id, _)| id)
    }

    /// Build an arena whose slot `n` holds `tiles[n]` at generation `1`.
    #[cfg(test)]
    pub(crate) fn from_tiles(tiles: Vec<Tile>) -> Self {
        let generations = alloc::vec![1; tiles.len()];
        Self {
            slots: tiles.into_iter().map(Some).collect(),
            generations,
            free_list: Vec::new(),
        }
    }
}
