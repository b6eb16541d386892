use crate::geometry::{Rgb, Shape};

/// RGB pixel buffer the scene is rasterized into. Two pixel rows per
/// terminal cell row, so half-block cells double the vertical resolution.
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelGrid {
    pub fn new(width: usize, height: usize, background: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self, background: Rgb) {
        self.pixels.fill(background);
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        self.pixels[y * self.width + x]
    }

    /// Fills one shape, mapping the logical [-1, 1] surface (y up) onto the
    /// grid (y down). Later fills overdraw earlier ones.
    pub fn fill_shape(&mut self, shape: &Shape) {
        if shape.points.len() < 3 || self.width == 0 || self.height == 0 {
            return;
        }

        let pts: Vec<(f32, f32)> = shape
            .points
            .iter()
            .map(|p| {
                (
                    (p.x + 1.0) * 0.5 * self.width as f32,
                    (1.0 - p.y) * 0.5 * self.height as f32,
                )
            })
            .collect();

        self.fill_polygon(&pts, shape.color);
    }

    // Even-odd scanline fill sampled at pixel centers.
    fn fill_polygon(&mut self, pts: &[(f32, f32)], color: Rgb) {
        let y_min = pts.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
        let y_max = pts.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);

        let row_start = ((y_min - 0.5).ceil() as i64).max(0);
        let row_end = ((y_max - 0.5).floor() as i64).min(self.height as i64 - 1);

        let mut crossings: Vec<f32> = Vec::new();
        for row in row_start..=row_end {
            let cy = row as f32 + 0.5;

            crossings.clear();
            for i in 0..pts.len() {
                let (x0, y0) = pts[i];
                let (x1, y1) = pts[(i + 1) % pts.len()];
                if (y0 <= cy && y1 > cy) || (y1 <= cy && y0 > cy) {
                    let t = (cy - y0) / (y1 - y0);
                    crossings.push(x0 + t * (x1 - x0));
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));

            for span in crossings.chunks_exact(2) {
                let col_start = ((span[0] - 0.5).ceil() as i64).max(0);
                let col_end = ((span[1] - 0.5).floor() as i64).min(self.width as i64 - 1);
                for col in col_start..=col_end {
                    self.pixels[row as usize * self.width + col as usize] = color;
                }
            }
        }
    }
}
