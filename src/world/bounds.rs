//! Bounding boxes for room entities.

use bevy::math::bounding::{Aabb2d, IntersectsVolume};
use bevy::prelude::*;

/// Anything in a room that occupies a rectangle of the screen.
pub trait Bounded {
    fn bounds(&self) -> Rect;

    fn position(&self) -> Vec2 {
        self.bounds().center()
    }

    fn aabb(&self) -> Aabb2d {
        let bounds = self.bounds();
        Aabb2d::new(bounds.center(), bounds.half_size())
    }

    /// Boxes that only touch along an edge count as overlapping.
    fn overlaps(&self, other: &Aabb2d) -> bool {
        self.aabb().intersects(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tile(Rect);

    impl Bounded for Tile {
        fn bounds(&self) -> Rect {
            self.0
        }
    }

    #[test]
    fn touching_edges_overlap() {
        let tile = Tile(Rect::new(0.0, 0.0, 40.0, 40.0));
        assert_eq!(tile.position(), Vec2::new(20.0, 20.0));
        assert!(tile.overlaps(&Aabb2d::new(Vec2::new(56.0, 20.0), Vec2::splat(16.0))));
        assert!(!tile.overlaps(&Aabb2d::new(Vec2::new(57.0, 20.0), Vec2::splat(16.0))));
    }
}
