//! Demo frame driver: render one Mandelbrot frame and write it to a
//! PPM file. Takes an optional JSON config path as the first argument.

use anyhow::Context;
use fractalflow::{on_frame, Framebuffer, RenderConfig};
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => RenderConfig::load(Path::new(&path))?,
        None => RenderConfig::default(),
    };
    info!(
        "rendering {}x{} zoom={} max_iterations={}",
        config.width, config.height, config.zoom, config.max_iterations
    );

    let mut framebuffer = Framebuffer::new(config.width, config.height);
    let start = Instant::now();
    // One tick of the frame loop; the continue signal is always true.
    let _continue = on_frame(&mut framebuffer, config.view(), Duration::ZERO);
    info!("frame rendered in {:?}", start.elapsed());

    write_ppm(&framebuffer, &config.output)
        .with_context(|| format!("failed to write {}", config.output.display()))?;
    info!("wrote {}", config.output.display());
    Ok(())
}

/// Write the framebuffer as a binary PPM (P6).
fn write_ppm(fb: &Framebuffer, path: &Path) -> anyhow::Result<()> {
    use fractalflow::Canvas;

    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write!(out, "P6\n{} {}\n255\n", fb.width(), fb.height())?;
    for pixel in fb.pixels() {
        out.write_all(&[pixel.r(), pixel.g(), pixel.b()])?;
    }
    out.flush()?;
    Ok(())
}
