pub mod boat;
pub mod house;
pub mod tree;

use crate::app_state::AppState;
use crate::geometry::{Point, Rgb, Shape};
use self::boat::Boat;
use self::house::House;
use self::tree::Tree;

const DAY_SKY: Rgb = Rgb::new(102, 204, 255);
const NIGHT_SKY: Rgb = Rgb::new(0, 0, 38);
const SUN: Rgb = Rgb::new(255, 255, 0);
const MOON: Rgb = Rgb::new(230, 230, 230);
const CLOUD: Rgb = Rgb::new(255, 255, 255);
const MOUNTAIN: Rgb = Rgb::new(204, 128, 51);
const LAND: Rgb = Rgb::new(102, 204, 51);
const RIVER: Rgb = Rgb::new(102, 153, 230);

/// The fixed scene content. Everything except the boat offset and the
/// day/night flag is literal geometry.
pub struct WorldScene {
    houses: [House; 2],
    trees: [Tree; 4],
    boat: Boat,
}

impl WorldScene {
    pub fn new() -> Self {
        Self {
            houses: [House::new(-0.8, -0.3, true), House::new(0.4, -0.3, false)],
            trees: [
                Tree::new(-0.3, -0.3, 1.0),
                Tree::new(-0.1, -0.3, 1.2),
                Tree::new(0.7, -0.3, 1.1),
                Tree::new(-0.5, -0.3, 0.7),
            ],
            boat: Boat,
        }
    }

    /// Composes one complete frame, back to front. A pure read of the
    /// state: painting the returned list in order replaces whatever the
    /// previous frame showed.
    pub fn compose(&self, state: &AppState) -> Vec<Shape> {
        let mut shapes = Vec::new();

        if state.is_night {
            shapes.push(Shape::rect(NIGHT_SKY, -1.0, 0.0, 2.0, 1.0));
            shapes.push(Shape::circle(MOON, 0.6, 0.8, 0.1));
        } else {
            shapes.push(Shape::rect(DAY_SKY, -1.0, 0.0, 2.0, 1.0));
            shapes.push(Shape::circle(SUN, 0.6, 0.8, 0.1));

            // Clouds only show during the day.
            push_cloud(&mut shapes, -0.7, 0.8);
            push_cloud(&mut shapes, 0.3, 0.85);
        }

        push_mountains(&mut shapes);
        shapes.push(Shape::rect(LAND, -1.0, -0.4, 2.0, 0.4));

        for house in &self.houses {
            house.push_shapes(&mut shapes, state.is_night);
        }
        for tree in &self.trees {
            tree.push_shapes(&mut shapes);
        }

        shapes.push(Shape::rect(RIVER, -1.0, -1.0, 2.0, 0.6));
        self.boat
            .push_shapes(&mut shapes, state.boat_offset, state.is_night);

        shapes
    }
}

impl Default for WorldScene {
    fn default() -> Self {
        Self::new()
    }
}

/// Three overlapping puffs make one cloud.
fn push_cloud(shapes: &mut Vec<Shape>, x: f32, y: f32) {
    shapes.push(Shape::circle(CLOUD, x, y, 0.07));
    shapes.push(Shape::circle(CLOUD, x + 0.07, y + 0.02, 0.07));
    shapes.push(Shape::circle(CLOUD, x - 0.07, y + 0.02, 0.07));
}

fn push_mountains(shapes: &mut Vec<Shape>) {
    shapes.push(Shape::triangle(
        MOUNTAIN,
        Point::new(-1.0, 0.0),
        Point::new(-0.7, 0.5),
        Point::new(-0.4, 0.0),
    ));
    shapes.push(Shape::triangle(
        MOUNTAIN,
        Point::new(-0.3, 0.0),
        Point::new(0.0, 0.5),
        Point::new(0.3, 0.0),
    ));
    shapes.push(Shape::triangle(
        MOUNTAIN,
        Point::new(0.2, 0.0),
        Point::new(0.5, 0.5),
        Point::new(0.8, 0.0),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CIRCLE_SEGMENTS;

    fn cloud_circles(shapes: &[Shape]) -> usize {
        shapes
            .iter()
            .filter(|s| s.color == CLOUD && s.points.len() == CIRCLE_SEGMENTS)
            .count()
    }

    #[test]
    fn test_day_frame_has_two_cloud_clusters() {
        let scene = WorldScene::new();
        let shapes = scene.compose(&AppState::new(false));
        assert_eq!(cloud_circles(&shapes), 6);
    }

    #[test]
    fn test_night_frame_has_no_clouds() {
        let scene = WorldScene::new();
        let shapes = scene.compose(&AppState::new(true));
        assert_eq!(cloud_circles(&shapes), 0);
    }

    #[test]
    fn test_sky_is_painted_first() {
        let scene = WorldScene::new();

        let day = scene.compose(&AppState::new(false));
        assert_eq!(day[0].color, DAY_SKY);
        assert_eq!(day[0].points.len(), 4);

        let night = scene.compose(&AppState::new(true));
        assert_eq!(night[0].color, NIGHT_SKY);
    }

    #[test]
    fn test_celestial_body_follows_mode() {
        let scene = WorldScene::new();
        assert_eq!(scene.compose(&AppState::new(false))[1].color, SUN);
        assert_eq!(scene.compose(&AppState::new(true))[1].color, MOON);
    }

    #[test]
    fn test_river_painted_after_land_and_before_boat() {
        let scene = WorldScene::new();
        let shapes = scene.compose(&AppState::new(false));

        let land = shapes.iter().position(|s| s.color == LAND).unwrap();
        let river = shapes.iter().position(|s| s.color == RIVER).unwrap();
        assert!(land < river);
        // Only the boat comes after the river.
        assert_eq!(shapes.len() - river - 1, 2);
    }
}
