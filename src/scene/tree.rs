use crate::geometry::{Point, Rgb, Shape};

const TRUNK: Rgb = Rgb::new(140, 69, 18);
const CANOPY: Rgb = Rgb::new(0, 128, 0);

pub struct Tree {
    x: f32,
    y: f32,
    size: f32,
}

impl Tree {
    pub fn new(x: f32, y: f32, size: f32) -> Self {
        Self { x, y, size }
    }

    /// Trunk plus a canopy whose apex height and base half-width scale
    /// linearly with the size multiplier.
    pub fn push_shapes(&self, shapes: &mut Vec<Shape>) {
        let (x, y) = (self.x, self.y);

        shapes.push(Shape::rect(TRUNK, x - 0.01, y, 0.02, 0.05));
        shapes.push(Shape::triangle(
            CANOPY,
            Point::new(x, y + 0.13 * self.size),
            Point::new(x - 0.05 * self.size, y + 0.05),
            Point::new(x + 0.05 * self.size, y + 0.05),
        ));
    }
}
