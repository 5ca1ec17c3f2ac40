// File: crates/trend-svg/src/theme.rs
// Summary: Light/Dark color tables for the SVG renderer.

/// Colors for one rendering style. Values are SVG paint strings.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub grid: &'static str,
    pub tick_label: &'static str,
    pub text: &'static str,
    pub line: &'static str,
    pub line_active: &'static str,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            grid: "#28282d",
            tick_label: "#9696a0",
            text: "#ebebf5",
            line: "#40a0ff",
            line_active: "#ffe646",
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#fafafc",
            grid: "#e6e6eb",
            tick_label: "#64646e",
            text: "#14141e",
            line: "#2078c8",
            line_active: "#1e78f0",
        }
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}
