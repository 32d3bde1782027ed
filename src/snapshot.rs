//! Headless rendering of a simulated radar, for docs and bug reports.

use crate::radar::{self, Radar, RadarConfig};
use cairo::{Context, Format, ImageSurface};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),
    #[error("Failed to write PNG: {0}")]
    Png(#[from] cairo::IoError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Synthetic frame pacing: a steady interval with an optional stall every `jank_every` frames.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    pub frames: usize,
    pub frame_ms: f64,
    pub jank_every: Option<usize>,
    pub jank_ms: f64,
}

impl Pacing {
    fn interval(&self, frame: usize) -> f64 {
        match self.jank_every {
            Some(k) if k > 0 && frame > 0 && frame % k == 0 => self.jank_ms,
            _ => self.frame_ms,
        }
    }
}

pub fn simulate(config: &RadarConfig, pacing: &Pacing) -> Radar {
    let mut radar = Radar::new(config, 0.0);
    let mut now = 0.0;
    for frame in 0..pacing.frames {
        if frame > 0 {
            now += pacing.interval(frame);
        }
        radar.advance(now);
    }
    radar
}

/// Writes SVG when `path` ends in `.svg`, PNG otherwise.
pub fn render(radar: &Radar, path: &Path) -> Result<(), SnapshotError> {
    let is_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if is_svg {
        fs_err::write(path, radar::view::to_svg(radar))?;
        log::info!("Wrote SVG snapshot to {}", path.display());
        Ok(())
    } else {
        render_png(radar, path)
    }
}

pub fn render_png(radar: &Radar, path: &Path) -> Result<(), SnapshotError> {
    let side = radar.geometry().size.ceil().max(1.0) as i32;
    let surface = ImageSurface::create(Format::ARgb32, side, side)?;
    {
        let cr = Context::new(&surface)?;
        radar::draw(&cr, radar)?;
    }
    let mut file = fs_err::File::create(path)?;
    surface.write_to_png(&mut file)?;
    log::info!("Wrote {}x{} snapshot to {}", side, side, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pacing(frames: usize, jank_every: Option<usize>) -> Pacing {
        Pacing {
            frames,
            frame_ms: 16.0,
            jank_every,
            jank_ms: 400.0,
        }
    }

    #[test]
    fn test_steady_pacing_stays_green() {
        let radar = simulate(&RadarConfig::default(), &pacing(60, None));
        assert!(radar.sweep().all(|(arc, _)| arc.hue.degrees() > 100.0));
    }

    #[test]
    fn test_jank_shows_up_red() {
        let radar = simulate(&RadarConfig::default(), &pacing(60, Some(10)));
        let slow = radar
            .sweep()
            .filter(|(arc, _)| arc.hue.degrees() < 30.0)
            .count();
        assert_eq!(slow, 5);
    }

    #[test]
    fn test_render_png() {
        let radar = simulate(
            &RadarConfig {
                size: 48.0,
                ..RadarConfig::default()
            },
            &pacing(20, Some(7)),
        );
        let path = std::env::temp_dir().join(format!("lagradar-test-{}.png", std::process::id()));
        render_png(&radar, &path).unwrap();

        let bytes = fs_err::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        let _ = fs_err::remove_file(&path);
    }

    #[test]
    fn test_render_svg_by_extension() {
        let radar = simulate(&RadarConfig::default(), &pacing(5, None));
        let path = std::env::temp_dir().join(format!("lagradar-test-{}.SVG", std::process::id()));
        render(&radar, &path).unwrap();

        let svg = fs_err::read_to_string(&path).unwrap();
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<path").count(), 6);
        let _ = fs_err::remove_file(&path);
    }
}
