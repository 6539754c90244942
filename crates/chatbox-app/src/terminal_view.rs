use std::io::Write;

use chatbox_client::ChatView;
use chatbox_types::{Fragment, MessageBlock, Sender, Theme, TurnView, LOADING_TEXT};
use colored::{Color, Colorize};

/// Colours used for one theme. The light theme is the default, so its
/// colours must read on dark terminal backgrounds too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub user: Color,
    pub ai: Color,
    pub error: Color,
    pub muted: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette {
                user: Color::Blue,
                ai: Color::Green,
                error: Color::Red,
                muted: Color::BrightBlack,
            },
            Theme::Dark => Palette {
                user: Color::BrightCyan,
                ai: Color::BrightWhite,
                error: Color::BrightRed,
                muted: Color::BrightBlack,
            },
        }
    }
}

/// Chat view writing message blocks to a terminal stream
pub struct TerminalView<W: Write> {
    out: W,
    theme: Theme,
    palette: Palette,
    loading: bool,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            theme: Theme::default(),
            palette: Palette::for_theme(Theme::default()),
            loading: false,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn label(sender: Sender) -> &'static str {
        match sender {
            Sender::User => "You:",
            Sender::Ai => "AI: ",
        }
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            log::debug!("Terminal write failed: {}", e);
        }
    }
}

impl<W: Write> TurnView for TerminalView<W> {
    fn append_block(&mut self, block: &MessageBlock) {
        let label = Self::label(block.sender);
        let color = match (block.sender, block.is_error) {
            (_, true) => self.palette.error,
            (Sender::User, false) => self.palette.user,
            (Sender::Ai, false) => self.palette.ai,
        };

        // Continuation lines line up under the first one
        let indent = " ".repeat(label.len() + 1);
        let mut rendered = format!("{} ", label.color(color).bold());
        for fragment in &block.fragments {
            match fragment {
                Fragment::Text(text) => rendered.push_str(&text.color(color).to_string()),
                Fragment::LineBreak => {
                    rendered.push('\n');
                    rendered.push_str(&indent);
                }
            }
        }
        rendered.push('\n');

        self.emit(&rendered);
    }
}

impl<W: Write> ChatView for TerminalView<W> {
    fn show_loading(&mut self) {
        self.loading = true;
        let text = format!("{}", LOADING_TEXT.color(self.palette.muted).italic());
        self.emit(&text);
    }

    fn hide_loading(&mut self) {
        if !self.loading {
            return;
        }
        self.loading = false;
        // Wipe the placeholder from the current line
        let blank = " ".repeat(LOADING_TEXT.len());
        self.emit(&format!("\r{}\r", blank));
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.palette = Palette::for_theme(theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatbox_types::ChatTurn;
    use pretty_assertions::assert_eq;

    fn plain_view() -> TerminalView<Vec<u8>> {
        colored::control::set_override(false);
        TerminalView::new(Vec::new())
    }

    fn output(view: TerminalView<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn test_multiline_block_is_indented() {
        let mut view = plain_view();
        view.append_block(&ChatTurn::ai("1. first\n2. second").to_block());

        assert_eq!(output(view), "AI:  1. first\n     2. second\n");
    }

    #[test]
    fn test_user_block() {
        let mut view = plain_view();
        view.append_block(&ChatTurn::user("hello").to_block());

        assert_eq!(output(view), "You: hello\n");
    }

    #[test]
    fn test_loading_is_wiped() {
        let mut view = plain_view();
        view.show_loading();
        assert!(view.is_loading());
        view.hide_loading();
        view.hide_loading();
        assert!(!view.is_loading());

        let out = output(view);
        assert!(out.starts_with("Typing..."));
        assert_eq!(out.matches('\r').count(), 2);
    }

    #[test]
    fn test_default_palette_avoids_background_colours() {
        let palette = Palette::for_theme(Theme::default());
        for color in [palette.user, palette.ai, palette.error] {
            assert!(!matches!(color, Color::Black | Color::White | Color::BrightWhite), "{:?}", color);
        }
    }

    #[test]
    fn test_theme_switches_palette() {
        let mut view = plain_view();
        view.apply_theme(Theme::Dark);
        assert_eq!(view.theme(), Theme::Dark);
        assert_eq!(view.palette, Palette::for_theme(Theme::Dark));
    }
}
