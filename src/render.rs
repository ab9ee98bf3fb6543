//! Frame renderer and the canvas collaborator it draws into.
//!
//! The renderer owns raster traversal only: rows top to bottom,
//! columns left to right, one [`shade`]d pixel per [`Canvas::draw`]
//! call. The vector path walks each row in groups of [`LANES`]
//! columns and evaluates a whole group with a single call; the scalar
//! path is the one-pixel-at-a-time reference.
//!
//! The canvas is an injected trait object boundary, so the math stays
//! headless; [`Framebuffer`] is the in-memory implementation used by
//! tests and the demo binary.

use crate::color::{shade, Rgba};
use crate::field::Field;
use crate::fractal::{Mandelbrot, View};
use crate::LANES;
use log::debug;
use std::time::Duration;

/// Minimal display surface the renderer draws into.
pub trait Canvas {
    /// Width in pixels.
    fn width(&self) -> u32;
    /// Height in pixels.
    fn height(&self) -> u32;
    /// Write one pixel. Callers stay within `width × height`.
    fn draw(&mut self, x: u32, y: u32, color: Rgba);
}

/// Render one frame using the 8-wide vector evaluator.
///
/// Canvas widths that are not a multiple of [`LANES`] are handled by
/// clipping: the trailing group is still evaluated full-width (the
/// evaluator is total for any column index), but lanes past the right
/// edge are never drawn.
pub fn render<C: Canvas + ?Sized>(canvas: &mut C, view: View) {
    let width = canvas.width();
    let height = canvas.height();
    if width == 0 || height == 0 {
        return;
    }

    let fractal = Mandelbrot::new(view, width);
    let mut counts = [0.0f32; LANES];

    for y in 0..height {
        let pixel_y = Field::splat(y as f32);
        let mut x = 0u32;
        while x < width {
            let pixel_x = Field::sequential(x as f32);
            let group = fractal.eval(pixel_x, pixel_y);
            group.store(&mut counts);

            let cols = (width - x).min(LANES as u32);
            for lane in 0..cols {
                canvas.draw(x + lane, y, shade(counts[lane as usize]));
            }
            x += LANES as u32;
        }
    }
}

/// Render one frame one pixel at a time.
///
/// Same output as [`render`]; kept as the reference path and for
/// targets where the vector width buys nothing.
pub fn render_scalar<C: Canvas + ?Sized>(canvas: &mut C, view: View) {
    let width = canvas.width();
    let height = canvas.height();
    if width == 0 || height == 0 {
        return;
    }

    let fractal = Mandelbrot::new(view, width);
    for y in 0..height {
        for x in 0..width {
            let count = fractal.eval_one(x as f32, y as f32);
            canvas.draw(x, y, shade(count));
        }
    }
}

/// One frame tick, as invoked by an external frame driver.
///
/// `elapsed` is the driver's frame delta; the fractal doesn't animate,
/// so it is unused. The return value is the continue signal — this
/// core never requests its own termination.
pub fn on_frame<C: Canvas + ?Sized>(canvas: &mut C, view: View, elapsed: Duration) -> bool {
    debug!("frame tick, elapsed {:?}", elapsed);
    render(canvas, view);
    true
}

/// Owned row-major pixel buffer implementing [`Canvas`].
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Framebuffer {
    /// Allocate a zeroed (transparent black) buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::default(); width as usize * height as usize],
        }
    }

    /// Read one pixel. Out-of-bounds coordinates return `None`.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// The whole buffer, row-major.
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }
}

impl Canvas for Framebuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn draw(&mut self, x: u32, y: u32, color: Rgba) {
        // Tolerate stray out-of-bounds draws rather than panicking.
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_canvas_is_a_no_op() {
        let mut fb = Framebuffer::new(0, 4);
        render(&mut fb, View::default());
        render_scalar(&mut fb, View::default());
        assert!(fb.pixels().is_empty());
    }

    #[test]
    fn vector_and_scalar_paths_agree() {
        let view = View {
            zoom: 1.5,
            max_iterations: 60.0,
        };
        let mut vectored = Framebuffer::new(24, 6);
        let mut scalar = Framebuffer::new(24, 6);
        render(&mut vectored, view);
        render_scalar(&mut scalar, view);
        assert_eq!(vectored.pixels(), scalar.pixels());
    }

    #[test]
    fn trailing_group_is_clipped() {
        // Width 10 leaves a partial group of 2; the other 6 lanes must
        // never land anywhere.
        let view = View {
            zoom: 1.5,
            max_iterations: 40.0,
        };
        let mut vectored = Framebuffer::new(10, 3);
        let mut scalar = Framebuffer::new(10, 3);
        render(&mut vectored, view);
        render_scalar(&mut scalar, view);
        assert_eq!(vectored.pixels(), scalar.pixels());
        assert_eq!(vectored.pixels().len(), 30);
    }

    #[test]
    fn on_frame_always_continues() {
        let mut fb = Framebuffer::new(8, 1);
        assert!(on_frame(&mut fb, View::default(), Duration::from_millis(16)));
    }

    #[test]
    fn framebuffer_bounds() {
        let mut fb = Framebuffer::new(2, 2);
        fb.draw(5, 5, Rgba::new(1, 2, 3, 4)); // ignored
        assert_eq!(fb.get(5, 5), None);
        fb.draw(1, 1, Rgba::new(1, 2, 3, 4));
        assert_eq!(fb.get(1, 1), Some(Rgba::new(1, 2, 3, 4)));
    }
}
