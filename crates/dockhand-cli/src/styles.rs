use anstyle::{AnsiColor, Color, Style};

pub const HEADER: Style = Style::new()
    .fg_color(Some(Color::Ansi(AnsiColor::Green)))
    .bold();

pub const USAGE: Style = Style::new()
    .fg_color(Some(Color::Ansi(AnsiColor::Green)))
    .bold();

pub const LITERAL: Style = Style::new()
    .fg_color(Some(Color::Ansi(AnsiColor::Cyan)));

pub const ERROR: Style = Style::new()
    .fg_color(Some(Color::Ansi(AnsiColor::Red)))
    .bold();

pub const SUCCESS: Style = Style::new()
    .fg_color(Some(Color::Ansi(AnsiColor::Green)));

pub const WARNING: Style = Style::new()
    .fg_color(Some(Color::Ansi(AnsiColor::Yellow)));

pub fn success(text: &str) -> String {
    paint(SUCCESS, text)
}

pub fn warning(text: &str) -> String {
    paint(WARNING, text)
}

fn paint(style: Style, text: &str) -> String {
    format!("{}{}{}", style.render(), text, style.render_reset())
}

pub fn clap_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .header(HEADER)
        .usage(USAGE)
        .literal(LITERAL)
        .placeholder(LITERAL)
        .error(ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn painted_text_keeps_the_message() {
        let out = success("Started api");
        assert!(out.contains("Started api"));
        assert_ne!(out, "Started api");
    }

    #[test]
    fn warning_and_success_render_differently() {
        assert_ne!(success("x"), warning("x"));
    }
}
