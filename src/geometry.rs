use std::f32::consts::TAU;

/// Segment count used for every circle in the scene.
pub const CIRCLE_SEGMENTS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One filled convex polygon on the logical [-1, 1] x [-1, 1] surface, y up.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub color: Rgb,
    pub points: Vec<Point>,
}

impl Shape {
    pub fn polygon(color: Rgb, points: Vec<Point>) -> Self {
        Self { color, points }
    }

    pub fn rect(color: Rgb, x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::polygon(
            color,
            vec![
                Point::new(x, y),
                Point::new(x + w, y),
                Point::new(x + w, y + h),
                Point::new(x, y + h),
            ],
        )
    }

    pub fn triangle(color: Rgb, a: Point, b: Point, c: Point) -> Self {
        Self::polygon(color, vec![a, b, c])
    }

    pub fn circle(color: Rgb, cx: f32, cy: f32, r: f32) -> Self {
        Self::polygon(color, circle_points(cx, cy, r, CIRCLE_SEGMENTS))
    }

    pub fn translate(mut self, dx: f32, dy: f32) -> Self {
        for p in &mut self.points {
            p.x += dx;
            p.y += dy;
        }
        self
    }
}

/// Closed polygon approximating a circle: `segments` points evenly spaced
/// by angle, counter-clockwise starting at angle 0.
pub fn circle_points(cx: f32, cy: f32, r: f32, segments: usize) -> Vec<Point> {
    (0..segments)
        .map(|i| {
            let theta = TAU * i as f32 / segments as f32;
            Point::new(cx + r * theta.cos(), cy + r * theta.sin())
        })
        .collect()
}
