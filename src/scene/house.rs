use crate::geometry::{Point, Rgb, Shape};

const WARM_WALL: Rgb = Rgb::new(255, 69, 0);
const COOL_WALL: Rgb = Rgb::new(0, 178, 153);
const ROOF: Rgb = Rgb::new(102, 51, 0);
const DOOR: Rgb = Rgb::new(0, 77, 77);
const LIT_WINDOW: Rgb = Rgb::new(255, 255, 0);

pub struct House {
    x: f32,
    y: f32,
    warm: bool,
}

impl House {
    pub fn new(x: f32, y: f32, warm: bool) -> Self {
        Self { x, y, warm }
    }

    pub fn wall_color(&self) -> Rgb {
        if self.warm { WARM_WALL } else { COOL_WALL }
    }

    /// Windows light up at night regardless of the wall palette; by day
    /// they share the door's dark teal.
    pub fn window_color(&self, is_night: bool) -> Rgb {
        if is_night { LIT_WINDOW } else { DOOR }
    }

    pub fn push_shapes(&self, shapes: &mut Vec<Shape>, is_night: bool) {
        let (x, y) = (self.x, self.y);

        shapes.push(Shape::rect(self.wall_color(), x, y, 0.2, 0.15));
        shapes.push(Shape::triangle(
            ROOF,
            Point::new(x - 0.02, y + 0.15),
            Point::new(x + 0.1, y + 0.22),
            Point::new(x + 0.22, y + 0.15),
        ));
        shapes.push(Shape::rect(DOOR, x + 0.08, y, 0.04, 0.08));

        let window = self.window_color(is_night);
        shapes.push(Shape::rect(window, x + 0.02, y + 0.1, 0.03, 0.03));
        shapes.push(Shape::rect(window, x + 0.15, y + 0.1, 0.03, 0.03));
    }
}
