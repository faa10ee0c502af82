use std::f32::consts::PI;

use crate::camera::Camera;
use crate::color::*;
use crate::error::MapError;
use crate::world::{SectorDef, Wall, World};

const SECTORS: [SectorDef; 5] = [
    SectorDef::new(0, 4, 0.0, 40.0),
    SectorDef::new(4, 8, 0.0, 40.0),
    SectorDef::new(8, 12, 0.0, 40.0),
    SectorDef::new(12, 16, 0.0, 40.0),
    SectorDef::new(16, 20, 0.0, 80.0),
];

const WALLS: [Wall; 20] = [
    Wall::new([100.0, 132.0], [132.0, 132.0], RED),
    Wall::new([132.0, 132.0], [132.0, 100.0], MAROON),
    Wall::new([132.0, 100.0], [100.0, 100.0], RED),
    Wall::new([100.0, 100.0], [100.0, 132.0], MAROON),
    //
    Wall::new([164.0, 132.0], [196.0, 132.0], YELLOW),
    Wall::new([196.0, 132.0], [196.0, 100.0], GOLD),
    Wall::new([196.0, 100.0], [164.0, 100.0], YELLOW),
    Wall::new([164.0, 100.0], [164.0, 132.0], GOLD),
    //
    Wall::new([164.0, 196.0], [196.0, 196.0], GREEN),
    Wall::new([196.0, 196.0], [196.0, 164.0], LIME),
    Wall::new([196.0, 164.0], [164.0, 164.0], GREEN),
    Wall::new([164.0, 164.0], [164.0, 196.0], LIME),
    //
    Wall::new([100.0, 196.0], [132.0, 196.0], PURPLE),
    Wall::new([132.0, 196.0], [132.0, 164.0], VIOLET),
    Wall::new([132.0, 164.0], [100.0, 164.0], PURPLE),
    Wall::new([100.0, 164.0], [100.0, 196.0], VIOLET),
    // non-convex
    Wall::new([250.0, 250.0], [400.0, 250.0], BLUE),
    Wall::new([400.0, 250.0], [270.0, 270.0], DARK_BLUE),
    Wall::new([270.0, 270.0], [250.0, 400.0], BLUE),
    Wall::new([250.0, 400.0], [250.0, 250.0], DARK_BLUE),
];

/// Four square rooms around the spawn point and one taller non-convex room.
pub fn test_level() -> Result<World, MapError> {
    World::build(WALLS.to_vec(), &SECTORS)
}

pub fn spawn_camera() -> Camera {
    Camera {
        pos: [120.0, 150.0, 30.0],
        yaw: PI,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_builds_every_sector() {
        let world = test_level().unwrap();
        assert_eq!(world.walls().len(), 20);
        assert_eq!(world.sectors().len(), 5);
        assert_eq!(world.sectors()[0].centroid, [116.0, 116.0]);
        assert_eq!(world.sectors()[4].height, 80.0);
    }
}
