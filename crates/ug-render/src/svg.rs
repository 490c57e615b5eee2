use std::fmt::Write as _;

use ug_core::config::StyleConfig;
use ug_core::theme::ColorPair;

/// Escape `&`, `<` and `>` for use as XML text content.
///
/// # Example
/// ```
/// use ug_render::svg::escape_text;
/// assert_eq!(escape_text('<'), "&lt;");
/// assert_eq!(escape_text('A'), "A");
/// ```
#[must_use]
pub fn escape_text(ch: char) -> String {
    match ch {
        '&' => "&amp;".to_string(),
        '<' => "&lt;".to_string(),
        '>' => "&gt;".to_string(),
        _ => ch.to_string(),
    }
}

/// Document SVG carré : fond plein + caractère centré.
///
/// Pure function of its inputs; the same arguments always give the same bytes.
#[must_use]
pub fn render_svg(ch: char, style: &StyleConfig, colors: &ColorPair) -> String {
    let size = style.size;
    let mut out = String::with_capacity(384);
    // `write!` on a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}" xmlns="http://www.w3.org/2000/svg">"#
    );
    let _ = writeln!(
        out,
        r#"    <rect x="0" y="0" width="{size}" height="{size}" fill="{}"/>"#,
        colors.bg
    );
    let _ = writeln!(
        out,
        r#"    <text x="50%" y="50%" font-family="{}" font-size="{}" fill="{}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
        style.font_family,
        style.font_size,
        colors.fg,
        escape_text(ch)
    );
    out.push_str("</svg>\n");
    out
}
