//! ANSI styling for widget output

use crossterm::style::{force_color_output, Attribute, Color as TermColor, ContentStyle, Stylize};
use dashline_types::{Color, ColorMode};

/// Terminal style for a palette color
fn style_for(color: Color) -> ContentStyle {
    let style = ContentStyle::new();
    match color {
        Color::Dim => style.attribute(Attribute::Dim),
        Color::Bold => style.attribute(Attribute::Bold),
        Color::Red => style.with(TermColor::DarkRed),
        Color::Green => style.with(TermColor::DarkGreen),
        Color::Yellow => style.with(TermColor::DarkYellow),
        Color::Blue => style.with(TermColor::DarkBlue),
        Color::Magenta => style.with(TermColor::DarkMagenta),
        Color::Cyan => style.with(TermColor::DarkCyan),
        Color::Gray => style.with(TermColor::Grey),
    }
}

/// Wrap `text` in `color` followed by a reset, or return it untouched when
/// colors are disabled.
pub fn colorize(text: &str, color: Color, mode: ColorMode) -> String {
    if !mode.enabled() {
        return text.to_string();
    }
    // crossterm drops color codes on its own when NO_COLOR is set; the mode
    // has already been resolved, so its answer is final
    force_color_output(true);
    style_for(color).apply(text).to_string()
}
