//! Back-to-front sector ordering (painter's algorithm).
//!
//! Each sector is reduced to its centroid, so overlapping sectors can still
//! be drawn in the wrong order. There is no per-pixel depth test to fix it.

use std::cmp::Ordering;

use crate::world::World;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectorDepth {
    pub sector: usize,
    /// Squared planar distance from the eye to the sector centroid.
    pub depth: f32,
}

/// Per-frame draw order. Sector records in the [`World`] are never touched;
/// the order lives in this scratch list and is reused between frames.
#[derive(Clone, Debug, Default)]
pub struct DrawOrder {
    entries: Vec<SectorDepth>,
}

impl DrawOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute every sector's depth from `eye` (world x, y). The current
    /// order is kept; it is only reset when the sector count changes.
    pub fn update_depths(&mut self, world: &World, eye: [f32; 2]) {
        let sectors = world.sectors();
        if self.entries.len() != sectors.len() {
            self.entries.clear();
            self.entries.extend((0..sectors.len()).map(|sector| SectorDepth {
                sector,
                depth: 0.0,
            }));
        }
        for e in &mut self.entries {
            e.depth = squared_distance(eye, sectors[e.sector].centroid);
        }
    }

    /// Farthest first.
    pub fn sort_back_to_front(&mut self) {
        self.entries.sort_by(|a, b| {
            b.depth.partial_cmp(&a.depth).unwrap_or(Ordering::Equal)
        });
    }

    pub fn entries(&self) -> &[SectorDepth] {
        &self.entries
    }

    pub fn sectors(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|e| e.sector)
    }
}

#[inline]
pub fn squared_distance(a: [f32; 2], b: [f32; 2]) -> f32 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    dx * dx + dy * dy
}
