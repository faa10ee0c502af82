use std::ops::Range;

use tracing::debug;

use crate::color::Rgb;
use crate::error::MapError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wall {
    pub start: [f32; 2], // (x, y) start point in world space
    pub end: [f32; 2],   // (x, y) end point in world space
    pub color: Rgb,
}

impl Wall {
    pub const fn new(start: [f32; 2], end: [f32; 2], color: Rgb) -> Self {
        Self { start, end, color }
    }

    #[inline]
    pub fn midpoint(&self) -> [f32; 2] {
        [
            (self.start[0] + self.end[0]) * 0.5,
            (self.start[1] + self.end[1]) * 0.5,
        ]
    }
}

/// Sector as authored: which walls it owns and its vertical extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectorDef {
    pub walls: (usize, usize), // [start, end) into the wall array
    pub base_level: f32,
    pub height: f32,
}

impl SectorDef {
    pub const fn new(start: usize, end: usize, base_level: f32, height: f32) -> Self {
        Self {
            walls: (start, end),
            base_level,
            height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sector {
    pub first_wall: usize,
    pub wall_count: usize,
    pub base_level: f32, // floor elevation
    pub height: f32,     // ceiling = base_level + height
    pub centroid: [f32; 2],
}

impl Sector {
    #[inline]
    pub fn wall_range(&self) -> Range<usize> {
        self.first_wall..self.first_wall + self.wall_count
    }

    #[inline]
    pub fn ceiling(&self) -> f32 {
        self.base_level + self.height
    }
}

/// The level: one wall arena plus sectors indexing into it.
///
/// Ranges are validated once in [`World::build`], so the renderer indexes
/// the arena without further checks.
#[derive(Clone, Debug, Default)]
pub struct World {
    walls: Vec<Wall>,
    sectors: Vec<Sector>,
}

impl World {
    pub fn build(walls: Vec<Wall>, defs: &[SectorDef]) -> Result<Self, MapError> {
        let mut sectors = Vec::with_capacity(defs.len());

        for (i, def) in defs.iter().enumerate() {
            let (start, end) = def.walls;
            if start > end {
                return Err(MapError::InvertedWallRange {
                    sector: i,
                    start,
                    end,
                });
            }
            if end > walls.len() {
                return Err(MapError::WallRangeOutOfBounds {
                    sector: i,
                    start,
                    end,
                    wall_count: walls.len(),
                });
            }

            let centroid = centroid(&walls[start..end]);
            debug!(
                sector = i,
                walls = end - start,
                cx = centroid[0],
                cy = centroid[1],
                "built sector"
            );

            sectors.push(Sector {
                first_wall: start,
                wall_count: end - start,
                base_level: def.base_level,
                height: def.height,
                centroid,
            });
        }

        Ok(Self { walls, sectors })
    }

    #[inline]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    #[inline]
    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    #[inline]
    pub fn sector_walls(&self, sector: &Sector) -> &[Wall] {
        &self.walls[sector.wall_range()]
    }
}

/// Mean of the wall midpoints. An empty slice yields the unnormalised sum,
/// which is the origin.
fn centroid(walls: &[Wall]) -> [f32; 2] {
    let mut sum = [0.0f32; 2];
    for w in walls {
        let m = w.midpoint();
        sum[0] += m[0];
        sum[1] += m[1];
    }
    if walls.is_empty() {
        return sum;
    }
    let n = walls.len() as f32;
    [sum[0] / n, sum[1] / n]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLUE, RED};
    use approx::assert_relative_eq;

    fn square(x: f32, y: f32, size: f32) -> Vec<Wall> {
        vec![
            Wall::new([x, y + size], [x + size, y + size], RED),
            Wall::new([x + size, y + size], [x + size, y], BLUE),
            Wall::new([x + size, y], [x, y], RED),
            Wall::new([x, y], [x, y + size], BLUE),
        ]
    }

    #[test]
    fn centroid_is_mean_of_wall_midpoints() {
        let world = World::build(square(100.0, 100.0, 32.0), &[SectorDef::new(0, 4, 0.0, 40.0)])
            .unwrap();
        let c = world.sectors()[0].centroid;
        assert_relative_eq!(c[0], 116.0);
        assert_relative_eq!(c[1], 116.0);
    }

    #[test]
    fn empty_range_keeps_zero_centroid() {
        let world = World::build(square(0.0, 0.0, 1.0), &[SectorDef::new(2, 2, 0.0, 10.0)])
            .unwrap();
        let s = world.sectors()[0];
        assert_eq!(s.centroid, [0.0, 0.0]);
        assert!(world.sector_walls(&s).is_empty());
    }

    #[test]
    fn range_past_the_arena_is_rejected() {
        let err = World::build(square(0.0, 0.0, 1.0), &[SectorDef::new(2, 6, 0.0, 10.0)])
            .unwrap_err();
        assert_eq!(
            err,
            MapError::WallRangeOutOfBounds {
                sector: 0,
                start: 2,
                end: 6,
                wall_count: 4
            }
        );
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = World::build(square(0.0, 0.0, 1.0), &[
            SectorDef::new(0, 4, 0.0, 10.0),
            SectorDef::new(3, 1, 0.0, 10.0),
        ])
        .unwrap_err();
        assert!(matches!(err, MapError::InvertedWallRange { sector: 1, .. }));
    }

    #[test]
    fn sector_walls_follow_the_range() {
        let mut walls = square(0.0, 0.0, 1.0);
        walls.extend(square(10.0, 10.0, 2.0));
        let world = World::build(walls, &[
            SectorDef::new(0, 4, 0.0, 10.0),
            SectorDef::new(4, 8, 5.0, 20.0),
        ])
        .unwrap();
        let s = world.sectors()[1];
        assert_eq!(world.sector_walls(&s)[0].start, [10.0, 12.0]);
        assert_relative_eq!(s.ceiling(), 25.0);
    }
}
