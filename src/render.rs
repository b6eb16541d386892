use crate::geometry::{Rgb, Shape};
use crate::raster::PixelGrid;
use crossterm::style::{Color, Colors, Print, ResetColor, SetColors, SetForegroundColor};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use std::io::{self, Stdout, Write};

const BACKGROUND: Rgb = Rgb::new(0, 0, 0);

// Each cell shows two pixels: foreground paints the upper half, background
// the lower half.
const UPPER_HALF_BLOCK: char = '▀';

struct OverlayLine {
    x: u16,
    y: u16,
    text: String,
    color: Color,
}

pub struct TerminalRenderer {
    stdout: Stdout,
    width: u16,
    height: u16,
    grid: PixelGrid,
    overlays: Vec<OverlayLine>,
}

impl TerminalRenderer {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout: io::stdout(),
            width,
            height,
            grid: PixelGrid::new(width as usize, height as usize * 2, BACKGROUND),
            overlays: Vec::new(),
        })
    }

    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(self.stdout, EnterAlternateScreen, cursor::Hide)
    }

    pub fn cleanup(&mut self) -> io::Result<()> {
        execute!(self.stdout, LeaveAlternateScreen, cursor::Show)?;
        terminal::disable_raw_mode()
    }

    pub fn get_size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn manual_resize(&mut self, width: u16, height: u16) -> io::Result<()> {
        self.width = width;
        self.height = height;
        self.grid = PixelGrid::new(width as usize, height as usize * 2, BACKGROUND);
        Ok(())
    }

    /// Resets the back buffer; nothing reaches the terminal until `flush`.
    pub fn clear(&mut self) -> io::Result<()> {
        self.grid.clear(BACKGROUND);
        self.overlays.clear();
        Ok(())
    }

    pub fn draw_shapes(&mut self, shapes: &[Shape]) {
        for shape in shapes {
            self.grid.fill_shape(shape);
        }
    }

    /// Queues a text line painted over the scene when the frame is flushed.
    pub fn render_line_colored(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        color: Color,
    ) -> io::Result<()> {
        self.overlays.push(OverlayLine {
            x,
            y,
            text: text.to_string(),
            color,
        });
        Ok(())
    }

    /// Paints the whole back buffer in one pass and presents it.
    pub fn flush(&mut self) -> io::Result<()> {
        let mut last: Option<Colors> = None;

        for row in 0..self.height {
            queue!(self.stdout, cursor::MoveTo(0, row))?;
            for col in 0..self.width {
                let top = self.grid.pixel(col as usize, row as usize * 2);
                let bottom = self.grid.pixel(col as usize, row as usize * 2 + 1);
                let colors = Colors::new(to_color(top), to_color(bottom));
                if last != Some(colors) {
                    queue!(self.stdout, SetColors(colors))?;
                    last = Some(colors);
                }
                queue!(self.stdout, Print(UPPER_HALF_BLOCK))?;
            }
        }

        for line in &self.overlays {
            queue!(
                self.stdout,
                cursor::MoveTo(line.x, line.y),
                ResetColor,
                SetForegroundColor(line.color),
                Print(&line.text)
            )?;
        }

        queue!(self.stdout, ResetColor)?;
        self.stdout.flush()
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
