//! Mandelbrot escape-time evaluators.
//!
//! Two evaluators with identical numeric semantics: a scalar
//! per-pixel loop and an 8-wide lane-parallel loop with per-lane
//! retirement. The vector loop stops as soon as every lane has either
//! escaped or hit the iteration cap, instead of each lane paying the
//! full cap independently.
//!
//! The escape count is the number of completed `z = z² + c` steps: a
//! point already outside the escape radius after its first step counts
//! 1, and a point that never escapes counts exactly `max_iterations`.

use crate::field::Field;

/// Per-frame view parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    /// Scale of the affine pixel-to-plane map.
    pub zoom: f32,
    /// Iteration cap; escape counts never exceed it.
    pub max_iterations: f32,
}

impl Default for View {
    fn default() -> Self {
        View {
            zoom: 1.5,
            max_iterations: 1000.0,
        }
    }
}

/// Mandelbrot evaluator for one canvas: view parameters plus the
/// affine map from pixel coordinates to the complex plane.
///
/// Both axes are divided by half the canvas *width*, so non-square
/// canvases stretch vertically. That matches the map this renderer has
/// always used; keep it for numeric compatibility.
#[derive(Debug, Clone, Copy)]
pub struct Mandelbrot {
    half_width: f32,
    zoom: f32,
    max_iterations: f32,
}

impl Mandelbrot {
    /// Build an evaluator for a canvas of the given width.
    #[inline]
    pub fn new(view: View, canvas_width: u32) -> Self {
        Self {
            half_width: canvas_width as f32 * 0.5,
            zoom: view.zoom,
            max_iterations: view.max_iterations,
        }
    }

    /// Map one pixel coordinate onto the complex plane.
    #[inline(always)]
    fn plane(&self, pixel: f32) -> f32 {
        (pixel / self.half_width - 1.0) * self.zoom
    }

    /// Escape count for a single pixel.
    ///
    /// Pure and total; `zoom` and `max_iterations` are taken as given,
    /// degenerate values are the caller's problem.
    pub fn eval_one(&self, pixel_x: f32, pixel_y: f32) -> f32 {
        let cx = self.plane(pixel_x);
        let cy = self.plane(pixel_y);

        let mut x = 0.0f32;
        let mut y = 0.0f32;
        let mut i = 0.0f32;

        while i < self.max_iterations {
            let new_x = x * x - y * y + cx;
            let new_y = 2.0 * x * y + cy;
            x = new_x;
            y = new_y;
            i += 1.0;
            if x * x + y * y > 4.0 {
                break;
            }
        }
        i
    }

    /// Escape counts for eight pixels at once, one per lane.
    ///
    /// Each lane is numerically identical to [`eval_one`] on the same
    /// scalar inputs: the operation order matches, so equality is
    /// exact, not approximate.
    ///
    /// Two details carry the semantics:
    ///
    /// - The position update is deliberately unmasked. Retired lanes
    ///   keep iterating `z = z² + c`; only their counter is frozen, by
    ///   masking the increment. Masking the position instead would be
    ///   wasted blends.
    /// - The active mask is latched (`active & ...`), so a retired
    ///   lane whose overflowed position wanders back under the escape
    ///   radius can never resume counting. Overflow to NaN also
    ///   retires a lane, because the comparisons are ordered-quiet.
    ///
    /// [`eval_one`]: Self::eval_one
    pub fn eval(&self, pixel_x: Field, pixel_y: Field) -> Field {
        let half_width = Field::splat(self.half_width);
        let one = Field::splat(1.0);
        let two = Field::splat(2.0);
        let four = Field::splat(4.0);
        let zoom = Field::splat(self.zoom);
        let max = Field::splat(self.max_iterations);

        let cx = (pixel_x / half_width - one) * zoom;
        let cy = (pixel_y / half_width - one) * zoom;

        let mut x = Field::splat(0.0);
        let mut y = Field::splat(0.0);
        let mut iterations = Field::splat(0.0);

        // All-true unless the cap is already exhausted (max <= 0).
        let mut active = iterations.lt(max);

        // Bounded by ceil(max_iterations) + 1 passes: the cap term of the
        // mask retires every lane.
        while active.any() {
            let new_x = x * x - y * y + cx;
            let new_y = two * x * y + cy;
            x = new_x;
            y = new_y;

            iterations = iterations.add_masked(one, active);

            let magnitude_sq = x * x + y * y;
            active = active & magnitude_sq.lt(four) & iterations.lt(max);
        }

        iterations
    }
}
