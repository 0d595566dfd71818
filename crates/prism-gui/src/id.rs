use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Stable identity of a widget or window across frames.
///
/// Ids are derived by hashing labels under a parent id, so the same label in
/// two different windows yields two different widgets.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Root id for a top-level window.
    pub fn new(label: impl Hash) -> Self {
        let mut h = DefaultHasher::new();
        label.hash(&mut h);
        Self(h.finish())
    }

    /// Child id of `self` for `label`.
    pub fn with(self, label: impl Hash) -> Self {
        let mut h = DefaultHasher::new();
        self.0.hash(&mut h);
        label.hash(&mut h);
        Self(h.finish())
    }
}

/// Visible part of a label. Everything from `##` on is only used for identity.
pub fn display_label(label: &str) -> &str {
    match label.find("##") {
        Some(i) => &label[..i],
        None => label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_suffix_is_not_displayed() {
        assert_eq!(display_label("Size##slider"), "Size");
        assert_eq!(display_label("##only id"), "");
        assert_eq!(display_label("Plain"), "Plain");
    }

    #[test]
    fn hidden_suffix_still_disambiguates() {
        let win = WidgetId::new("win");
        assert_ne!(win.with("Value##a"), win.with("Value##b"));
    }

    #[test]
    fn same_label_in_different_parents_differs() {
        let a = WidgetId::new("A").with("Size");
        let b = WidgetId::new("B").with("Size");
        assert_ne!(a, b);
        assert_eq!(a, WidgetId::new("A").with("Size"));
    }
}
