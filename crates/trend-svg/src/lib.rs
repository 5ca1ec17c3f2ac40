// File: crates/trend-svg/src/lib.rs
// Summary: SVG serializer: renders a Scene into a standalone SVG document.
//
// Pure string generation, no I/O. The element tree mirrors the chart scene:
// background, gridline + label per tick, one path per country, title and
// axis labels, invisible hover hit regions, highlight path last.

pub mod theme;

pub use theme::Theme;

use std::fmt::Write;

use trend_core::scene::Scene;

const LINE_WIDTH: f32 = 1.5;
const HIGHLIGHT_WIDTH: f32 = 2.5;
const X_TICK_PADDING: f32 = 18.0;
const Y_TICK_PADDING: f32 = 3.0;

/// Escape the five XML special characters for safe embedding in element
/// text content and attribute values.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Path data for a polyline: M then L segments. Single-point polylines
/// degrade to a bare move; empty ones produce no data.
fn path_data(points: &[(f32, f32)]) -> Option<String> {
    let mut iter = points.iter();
    let first = iter.next()?;
    let mut d = format!("M{:.1},{:.1}", first.0, first.1);
    for p in iter {
        let _ = write!(d, "L{:.1},{:.1}", p.0, p.1);
    }
    Some(d)
}

/// Closed path data for a region polygon.
fn region_data(points: &[(f32, f32)]) -> Option<String> {
    let mut d = path_data(points)?;
    d.push('Z');
    Some(d)
}

/// Render the scene with the given theme. Returns the full document text.
pub fn render_svg(scene: &Scene, theme: &Theme) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
        w = scene.width,
        h = scene.height,
    );
    let _ = writeln!(
        out,
        r#"  <rect width="{}" height="{}" fill="{}"/>"#,
        scene.width, scene.height, theme.background,
    );
    let _ = writeln!(
        out,
        r#"  <g transform="translate({},{})">"#,
        scene.origin.0, scene.origin.1,
    );

    // Bottom axis: gridline up through the plot, label below it.
    for tick in &scene.x_ticks {
        let _ = writeln!(
            out,
            r#"    <line x1="{x:.1}" y1="0" x2="{x:.1}" y2="{h:.1}" stroke="{grid}"/>"#,
            x = tick.position,
            h = scene.inner_height,
            grid = theme.grid,
        );
        let _ = writeln!(
            out,
            r#"    <text x="{x:.1}" y="{y:.1}" text-anchor="middle" fill="{fill}">{label}</text>"#,
            x = tick.position,
            y = scene.inner_height + X_TICK_PADDING,
            fill = theme.tick_label,
            label = xml_escape(&tick.label),
        );
    }

    // Left axis: gridline across the plot, label beside it.
    for tick in &scene.y_ticks {
        let _ = writeln!(
            out,
            r#"    <line x1="0" y1="{y:.1}" x2="{w:.1}" y2="{y:.1}" stroke="{grid}"/>"#,
            y = tick.position,
            w = scene.inner_width,
            grid = theme.grid,
        );
        let _ = writeln!(
            out,
            r#"    <text x="-{pad:.1}" y="{y:.1}" text-anchor="end" dy="0.32em" fill="{fill}">{label}</text>"#,
            pad = Y_TICK_PADDING,
            y = tick.position,
            fill = theme.tick_label,
            label = xml_escape(&tick.label),
        );
    }

    // One identically styled line per country.
    for line in &scene.lines {
        if let Some(d) = path_data(&line.points) {
            let _ = writeln!(
                out,
                r#"    <path d="{d}" fill="none" stroke="{stroke}" stroke-width="{LINE_WIDTH}"/>"#,
                stroke = theme.line,
            );
        }
    }

    // Static text: title, rotated count label, hanging time label.
    let _ = writeln!(
        out,
        r#"    <text transform="translate({cx:.1},0)" text-anchor="middle" fill="{fill}">{title}</text>"#,
        cx = scene.inner_width / 2.0,
        fill = theme.text,
        title = xml_escape(&scene.title),
    );
    let _ = writeln!(
        out,
        r#"    <text transform="translate(-40,{cy:.1}) rotate(-90)" text-anchor="middle" fill="{fill}">{label}</text>"#,
        cy = scene.inner_height / 2.0,
        fill = theme.text,
        label = xml_escape(&scene.y_label),
    );
    let _ = writeln!(
        out,
        r#"    <text transform="translate({cx:.1},{cy:.1})" text-anchor="middle" alignment-baseline="hanging" fill="{fill}">{label}</text>"#,
        cx = scene.inner_width / 2.0,
        cy = scene.inner_height + 40.0,
        fill = theme.text,
        label = xml_escape(&scene.x_label),
    );

    // Invisible hover hit shapes, one per projected point. A <title> child
    // gives static viewers a native tooltip with the country name.
    let _ = writeln!(out, r#"    <g pointer-events="all">"#);
    for region in &scene.hit_regions {
        if let Some(d) = region_data(&region.polygon) {
            let _ = writeln!(
                out,
                r#"      <path d="{d}" fill="none" stroke="none" data-point="{point}" data-country="{country}"><title>{country}</title></path>"#,
                point = region.point,
                country = xml_escape(&region.country_name),
            );
        }
    }
    let _ = writeln!(out, r#"    </g>"#);

    // The emphasized line redraws on top of everything else.
    if let Some(highlight) = &scene.highlight {
        if let Some(d) = path_data(&highlight.points) {
            let _ = writeln!(
                out,
                r#"    <path d="{d}" fill="none" stroke="{stroke}" stroke-width="{HIGHLIGHT_WIDTH}" data-country="{country}"/>"#,
                stroke = theme.line_active,
                country = xml_escape(&highlight.country_name),
            );
        }
    }

    let _ = writeln!(out, "  </g>");
    let _ = writeln!(out, "</svg>");
    out
}
