// File: crates/tidemark-render-skia/src/theme.rs
// Summary: Color themes for raster output.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub line_stroke: skia::Color,
}

impl Theme {
    /// White page, black axes, steelblue series.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: skia::Color::WHITE,
            axis_line: skia::Color::BLACK,
            axis_label: skia::Color::BLACK,
            line_stroke: skia::Color::from_argb(255, 70, 130, 180), // steelblue
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            line_stroke: skia::Color::from_argb(255, 32, 120, 200),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::classic() }
}

/// Built-in presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark(), Theme::light()]
}

/// Find a theme by `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
