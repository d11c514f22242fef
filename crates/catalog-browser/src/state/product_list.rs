/// Product list view state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductListState {
    /// Cursor position in the product list
    pub selected: usize,
}
