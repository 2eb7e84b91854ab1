//! Edge insets.

/// Four-sided insets, in leading/trailing terms.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub top: f64,
    pub leading: f64,
    pub bottom: f64,
    pub trailing: f64,
}

impl EdgeInsets {
    /// Creates new insets.
    pub fn new(top: f64, leading: f64, bottom: f64, trailing: f64) -> EdgeInsets {
        EdgeInsets {
            top,
            leading,
            bottom,
            trailing,
        }
    }
}
