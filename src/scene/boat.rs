use crate::geometry::{Point, Rgb, Shape};

const HULL: Rgb = Rgb::new(0, 0, 128);
const CABIN: Rgb = Rgb::new(255, 0, 0);
const LIGHT: Rgb = Rgb::new(255, 255, 0);

/// Vertical offset of the boat's local frame into the river.
pub const WATERLINE_Y: f32 = -0.6;

#[derive(Default)]
pub struct Boat;

impl Boat {
    /// Hull and cabin are defined in a local frame; world position comes
    /// entirely from the offset translation.
    pub fn push_shapes(&self, shapes: &mut Vec<Shape>, offset: f32, is_night: bool) {
        shapes.push(
            Shape::polygon(
                HULL,
                vec![
                    Point::new(-0.1, 0.0),
                    Point::new(0.1, 0.0),
                    Point::new(0.07, -0.05),
                    Point::new(-0.07, -0.05),
                ],
            )
            .translate(offset, WATERLINE_Y),
        );
        shapes.push(Shape::rect(CABIN, -0.05, 0.0, 0.05, 0.05).translate(offset, WATERLINE_Y));

        // Running light, only visible at night.
        if is_night {
            shapes.push(Shape::circle(LIGHT, 0.0, 0.07, 0.015).translate(offset, WATERLINE_Y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boat_day_is_hull_and_cabin() {
        let mut shapes = Vec::new();
        Boat.push_shapes(&mut shapes, 0.0, false);
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].color, HULL);
        assert_eq!(shapes[1].color, CABIN);
    }

    #[test]
    fn test_boat_night_adds_running_light() {
        let mut shapes = Vec::new();
        Boat.push_shapes(&mut shapes, 0.0, true);
        assert_eq!(shapes.len(), 3);
        assert_eq!(shapes[2].color, LIGHT);
    }

    #[test]
    fn test_offset_translates_the_whole_boat() {
        let mut at_origin = Vec::new();
        let mut shifted = Vec::new();
        Boat.push_shapes(&mut at_origin, 0.0, false);
        Boat.push_shapes(&mut shifted, 0.5, false);

        for (a, b) in at_origin.iter().zip(&shifted) {
            for (pa, pb) in a.points.iter().zip(&b.points) {
                assert!((pb.x - pa.x - 0.5).abs() < 1e-6);
                assert_eq!(pa.y, pb.y);
            }
        }
    }

    #[test]
    fn test_boat_sits_on_the_waterline() {
        let mut shapes = Vec::new();
        Boat.push_shapes(&mut shapes, 0.0, false);
        // Hull top edge rides at the waterline.
        assert_eq!(shapes[0].points[0].y, WATERLINE_Y);
        assert_eq!(shapes[0].points[1].y, WATERLINE_Y);
    }
}
