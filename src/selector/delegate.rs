use serde::{Deserialize, Serialize};

use crate::core::Range;

/// Part of the overlay a drag gesture grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragTarget {
    /// Handle bounding the selection from below.
    LowerHandle,
    /// Handle bounding the selection from above.
    UpperHandle,
    /// Shaded region between the handles; moves both bounds together.
    Selection,
}

/// User interaction that produced a selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeOrigin {
    Drag(DragTarget),
    Select,
}

/// Payload delivered to the delegate after a completed user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionChanged {
    pub selection: Range,
    pub origin: ChangeOrigin,
}

impl SelectionChanged {
    #[must_use]
    pub fn min(self) -> f64 {
        self.selection.min()
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.selection.max()
    }
}

/// Observer told when the user changes the selection.
///
/// Never invoked for programmatic range syncs, so a host chart can forward the
/// selection to its own visible range and push that range back without looping.
pub trait RangeSelectorDelegate {
    fn selection_changed(&mut self, change: SelectionChanged);
}

impl<F> RangeSelectorDelegate for F
where
    F: FnMut(SelectionChanged),
{
    fn selection_changed(&mut self, change: SelectionChanged) {
        self(change);
    }
}
