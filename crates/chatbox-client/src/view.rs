use chatbox_types::{Theme, TurnView};

/// Everything the conversation controller needs from a front-end.
///
/// Block rendering comes from [`TurnView`]; this adds the transient loading
/// indicator and the theme switch. Neither is ever persisted.
pub trait ChatView: TurnView {
    /// Show the "Typing..." placeholder while a request is outstanding
    fn show_loading(&mut self);

    /// Remove the placeholder; called exactly once per exchange
    fn hide_loading(&mut self);

    fn apply_theme(&mut self, theme: Theme);

    fn scroll_to_bottom(&mut self) {}
}

impl<V: ChatView + ?Sized> ChatView for &mut V {
    fn show_loading(&mut self) {
        (**self).show_loading()
    }

    fn hide_loading(&mut self) {
        (**self).hide_loading()
    }

    fn apply_theme(&mut self, theme: Theme) {
        (**self).apply_theme(theme)
    }

    fn scroll_to_bottom(&mut self) {
        (**self).scroll_to_bottom()
    }
}
