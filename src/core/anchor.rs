/// What a click on an in-page anchor should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorAction<'a> {
    /// Bare `#` or not a fragment link: leave the browser alone.
    Ignore,
    /// Suppress navigation and scroll to the element with this id, if any.
    ScrollTo(&'a str),
    /// Suppress navigation; the fragment cannot name an element.
    Swallow,
}

pub fn anchor_action(href: &str) -> AnchorAction<'_> {
    let Some(frag) = href.strip_prefix('#') else {
        return AnchorAction::Ignore;
    };
    if frag.is_empty() {
        return AnchorAction::Ignore;
    }
    if frag.chars().any(char::is_whitespace) {
        return AnchorAction::Swallow;
    }
    AnchorAction::ScrollTo(frag)
}
