use crate::config::Config;
use crate::gui::clock::{self, CairoMetrics, ClockState};
use cairo::{Context, Format, ImageSurface};
use chrono::{Local, NaiveTime};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid size {0}")]
    InvalidSize(f64),
    #[error(transparent)]
    Cairo(#[from] cairo::Error),
    #[error(transparent)]
    Png(#[from] cairo::IoError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub size: f64,
    pub show_hands: bool,
    pub time: Option<NaiveTime>,
}

/// Draws one frame onto an offscreen surface of the measured size.
pub fn render_surface(
    config: &Config,
    options: &RenderOptions,
) -> Result<ImageSurface, RenderError> {
    let mut config = config.clone();
    config.window.size = Some(options.size);
    config.window.show_hands = options.show_hands;

    let mut state = ClockState::new(&config);
    let size = state.preferred_size();
    let side = size.width.round();
    if !side.is_finite() || side < 1.0 || side > f64::from(i32::MAX) {
        return Err(RenderError::InvalidSize(size.width));
    }
    state.resize(side, side);

    let surface = ImageSurface::create(Format::ARgb32, side as i32, side as i32)?;
    {
        let cr = Context::new(&surface)?;
        let metrics = CairoMetrics::new(&cr);
        let time = options.time.unwrap_or_else(|| Local::now().time());
        let instructions = state.frame_at(&time, &metrics);
        clock::draw(&cr, &instructions, side, side)?;
    }
    surface.flush();
    Ok(surface)
}

pub fn render_png(
    config: &Config,
    options: &RenderOptions,
    output: &Path,
) -> Result<(), RenderError> {
    let surface = render_surface(config, options)?;
    let mut file = fs_err::File::create(output)?;
    surface.write_to_png(&mut file)?;
    log::info!(
        "Wrote {}x{} dial to {}",
        surface.width(),
        surface.height(),
        output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(size: f64) -> RenderOptions {
        RenderOptions {
            size,
            show_hands: true,
            time: NaiveTime::from_hms_opt(10, 10, 30),
        }
    }

    #[test]
    fn test_surface_has_requested_size() {
        let surface = render_surface(&Config::default(), &options(240.0)).unwrap();
        assert_eq!((surface.width(), surface.height()), (240, 240));
    }

    #[test]
    fn test_rejects_empty_surface() {
        assert!(matches!(
            render_surface(&Config::default(), &options(0.0)),
            Err(RenderError::InvalidSize(_))
        ));
    }

    #[test]
    fn test_tiny_surface_renders() {
        // smaller than twice the padding
        let surface = render_surface(&Config::default(), &options(12.0)).unwrap();
        assert_eq!(surface.width(), 12);
    }

    #[test]
    fn test_writes_png() {
        let path = std::env::temp_dir().join(format!("clockface-{}.png", std::process::id()));
        render_png(&Config::default(), &options(128.0), &path).unwrap();
        let bytes = fs_err::read(&path).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
        let _ = fs_err::remove_file(&path);
    }
}
