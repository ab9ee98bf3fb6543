//! # fractalflow
//!
//! A SIMD escape-time Mandelbrot evaluator with a headless frame
//! renderer.
//!
//! The interesting part is the 8-wide iteration loop: eight escape-time
//! sequences run in lockstep, a per-lane mask retires lanes as they
//! escape (or hit the cap), and the whole group stops the moment no
//! lane is active. Per lane, the result is numerically identical to
//! the scalar loop.
//!
//! Rendering is decoupled from any windowing: the renderer draws into
//! a narrow [`Canvas`] trait, and [`Framebuffer`] provides an owned
//! in-memory implementation.
//!
//! ```
//! use fractalflow::{render, Framebuffer, View};
//!
//! let mut fb = Framebuffer::new(64, 64);
//! render(&mut fb, View::default());
//! assert_eq!(fb.pixels().len(), 64 * 64);
//! ```

#![warn(missing_docs)]

pub mod backend;
pub mod color;
pub mod config;
pub mod field;
pub mod fractal;
pub mod mask;
pub mod render;

pub use color::{shade, Rgba};
pub use config::RenderConfig;
pub use field::Field;
pub use fractal::{Mandelbrot, View};
pub use mask::Mask;
pub use render::{on_frame, render, render_scalar, Canvas, Framebuffer};

use backend::SimdOps;

/// Number of lanes in the packed vector on this platform.
pub const LANES: usize = <backend::NativeSimd as SimdOps>::LANES;
