//! Navigation actions (vim-style cursor movement)

/// Generic cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Next item (j, down arrow)
    Next,
    /// Previous item (k, up arrow)
    Previous,
    /// First item (g, Home)
    ToTop,
    /// Last item (G, End)
    ToBottom,
}
