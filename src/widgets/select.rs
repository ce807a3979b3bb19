//! Dropdown replacement for a native `<select>`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomSelect {
    options: Vec<String>,
    selected: Option<usize>,
    open: bool,
    trigger_text: String,
}

impl CustomSelect {
    /// `placeholder` shows in the trigger until something is chosen.
    pub fn new<I, S>(placeholder: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            selected: None,
            open: false,
            trigger_text: placeholder.into(),
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn trigger_text(&self) -> &str {
        &self.trigger_text
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Pick option `index`: it becomes the only selected option, its text
    /// moves into the trigger and the list closes. Out of range is ignored.
    pub fn choose(&mut self, index: usize) {
        let Some(text) = self.options.get(index) else {
            return;
        };
        self.trigger_text.clone_from(text);
        self.selected = Some(index);
        self.open = false;
    }

    pub fn clicked_outside(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select() -> CustomSelect {
        CustomSelect::new("Pick a topic", ["General", "Support", "Press"])
    }

    #[test]
    fn test_choose_sets_text_and_closes() {
        let mut s = select();
        assert_eq!(s.trigger_text(), "Pick a topic");

        s.toggle();
        assert!(s.is_open());
        s.choose(1);
        assert_eq!(s.trigger_text(), "Support");
        assert_eq!(s.selected(), Some(1));
        assert!(!s.is_open());

        s.toggle();
        s.choose(2);
        assert_eq!(s.selected(), Some(2));
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut s = select();
        s.toggle();
        s.choose(7);
        assert_eq!(s.selected(), None);
        assert_eq!(s.trigger_text(), "Pick a topic");
        assert!(s.is_open());
    }

    #[test]
    fn test_outside_click_closes() {
        let mut s = select();
        s.toggle();
        s.clicked_outside();
        assert!(!s.is_open());
    }
}
