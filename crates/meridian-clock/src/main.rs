use std::path::Path;

use anyhow::Result;
use meridian_engine::logging::{init_logging, LoggingConfig};
use meridian_ui::prelude::*;

/// Zones shown left to right.
const ZONES: [&str; 3] = ["EST", "PST", "JST"];

/// Searched in order; the first file that reads becomes the body font.
const FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/open-sans/OpenSans-Regular.ttf",
    "/usr/share/fonts/open-sans/OpenSans-Regular.ttf",
    "/usr/share/fonts/TTF/OpenSans-Regular.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut app = Application::new()
        .title("International Clock")
        .size(1800.0, 700.0);
    match find_font(FONT_PATHS) {
        Some((path, bytes)) => {
            log::debug!("body font: {path}");
            app = app.font("body", bytes);
        }
        None => log::warn!("no system font found; clocks will draw without text"),
    }

    app.run_widget(|fonts: &FontMap| {
        let font = fonts.get("body");
        ZONES
            .iter()
            .fold(Grid::new(1, ZONES.len()), |grid, zone| grid.child(Clock::new(*zone).font(font)))
            .into()
    })
}

/// First readable, non-empty file among `paths`.
fn find_font<'p>(paths: &[&'p str]) -> Option<(&'p str, Vec<u8>)> {
    paths.iter().find_map(|&p| match std::fs::read(Path::new(p)) {
        Ok(bytes) if !bytes.is_empty() => Some((p, bytes)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fonts_yield_none() {
        assert!(find_font(&["/nonexistent/a.ttf", "/nonexistent/b.ttf"]).is_none());
    }

    #[test]
    fn first_readable_path_wins() {
        let dir = std::env::temp_dir().join(format!("meridian-font-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("face.ttf");
        std::fs::write(&file, b"not really a font").unwrap();
        let path = file.to_str().unwrap();

        let (found, bytes) = find_font(&["/nonexistent/a.ttf", path]).unwrap();
        assert_eq!(found, path);
        assert_eq!(bytes, b"not really a font");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn zones_resolve_to_distinct_places() {
        let names: Vec<_> = ZONES.iter().map(|z| Clock::new(*z).zone().to_string()).collect();
        assert_eq!(names, vec!["EST", "America/Los_Angeles", "Asia/Tokyo"]);
    }
}
