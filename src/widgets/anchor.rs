//! In-page `#id` links that smooth-scroll instead of jumping.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
    Center,
    End,
}

/// Request to smooth-scroll an element into view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollIntoView<T> {
    pub target: T,
    pub block: ScrollBlock,
}

/// Outcome of clicking a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorClick<T> {
    /// The browser's own navigation must not run.
    pub prevent_default: bool,
    pub scroll: Option<ScrollIntoView<T>>,
}

/// Handle a click on a link with `href`.
///
/// Links not starting with `#` are left alone. For `#` links default
/// navigation is always suppressed; `resolve` looks up the id (without the
/// `#`) and a hit scrolls the element's top into view.
pub fn follow_anchor<T, F>(href: &str, resolve: F) -> AnchorClick<T>
where
    F: FnOnce(&str) -> Option<T>,
{
    let Some(id) = href.strip_prefix('#') else {
        return AnchorClick {
            prevent_default: false,
            scroll: None,
        };
    };

    AnchorClick {
        prevent_default: true,
        scroll: resolve(id).map(|target| ScrollIntoView {
            target,
            block: ScrollBlock::Start,
        }),
    }
}
