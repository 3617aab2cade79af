//! Range selector overlay state.
//!
//! The controller tracks a selection inside the range currently shown by the
//! host chart. The host pushes its range in with
//! [`RangeSelectorController::move_range_selector_to_range`]; user gestures
//! arrive through the drag API and [`RangeSelectorController::select_range`].
//! Only the latter reach the delegate.
//!
//! The controller is single-threaded and not reentrant: it is meant to be
//! driven from the UI thread, and callers sharing it across threads must
//! serialize access themselves.

pub mod clamp;
pub mod config;
pub mod delegate;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::Range;
use crate::error::{ChartError, ChartResult};

pub use clamp::{apply_drag, ensure_span_satisfiable, reconcile_selection};
pub use config::{DEFAULT_MINIMUM_SPAN, RangeSelectorConfig};
pub use delegate::{ChangeOrigin, DragTarget, RangeSelectorDelegate, SelectionChanged};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectorState {
    /// No chart range received yet; the selection, if any, is a seed.
    Uninitialized,
    Synced,
    Dragging,
}

/// Serializable view of the controller state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSelectorSnapshot {
    pub state: SelectorState,
    pub minimum_span: f64,
    pub current_range: Option<Range>,
    pub selection: Option<Range>,
}

impl RangeSelectorSnapshot {
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize range selector snapshot: {e}"))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    target: DragTarget,
    /// Selection when the gesture began; decides whether the delegate fires.
    start: Range,
    /// Selection the cumulative offset applies to.
    origin: Range,
    offset: f64,
}

pub struct RangeSelectorController {
    minimum_span: f64,
    current_range: Option<Range>,
    selection: Option<Range>,
    drag: Option<DragSession>,
    redraw_pending: bool,
    delegate: Option<Box<dyn RangeSelectorDelegate>>,
}

impl fmt::Debug for RangeSelectorController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSelectorController")
            .field("minimum_span", &self.minimum_span)
            .field("current_range", &self.current_range)
            .field("selection", &self.selection)
            .field("drag", &self.drag)
            .field("redraw_pending", &self.redraw_pending)
            .field("has_delegate", &self.delegate.is_some())
            .finish()
    }
}

impl Default for RangeSelectorController {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeSelectorController {
    /// Creates a controller using [`DEFAULT_MINIMUM_SPAN`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            minimum_span: DEFAULT_MINIMUM_SPAN,
            current_range: None,
            selection: None,
            drag: None,
            redraw_pending: false,
            delegate: None,
        }
    }

    pub fn with_minimum_span(minimum_span: f64) -> ChartResult<Self> {
        Self::from_config(RangeSelectorConfig::new().with_minimum_span(minimum_span))
    }

    pub fn from_config(config: RangeSelectorConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        debug!(
            minimum_span = config.minimum_span,
            seeded = config.initial_selection.is_some(),
            "create range selector"
        );
        Ok(Self {
            minimum_span: config.minimum_span,
            selection: config.initial_selection,
            ..Self::new()
        })
    }

    pub fn set_delegate(&mut self, delegate: Box<dyn RangeSelectorDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    #[must_use]
    pub fn minimum_span(&self) -> f64 {
        self.minimum_span
    }

    #[must_use]
    pub fn current_range(&self) -> Option<Range> {
        self.current_range
    }

    /// Current selection, or the seed while no chart range is known.
    #[must_use]
    pub fn selection(&self) -> Option<Range> {
        self.selection
    }

    #[must_use]
    pub fn state(&self) -> SelectorState {
        match (self.current_range, self.drag) {
            (None, _) => SelectorState::Uninitialized,
            (Some(_), None) => SelectorState::Synced,
            (Some(_), Some(_)) => SelectorState::Dragging,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> RangeSelectorSnapshot {
        RangeSelectorSnapshot {
            state: self.state(),
            minimum_span: self.minimum_span,
            current_range: self.current_range,
            selection: self.selection,
        }
    }

    /// Returns whether the overlay should be re-rendered and clears the request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_pending)
    }

    /// Syncs to the host chart's range and requests an overlay redraw.
    pub fn move_range_selector_to_range(&mut self, range: Range) -> ChartResult<()> {
        self.move_range_selector_to_range_with_redraw(range, true)
    }

    /// Syncs to the host chart's range.
    ///
    /// The selection is refitted with [`reconcile_selection`]. This is a
    /// programmatic update and never notifies the delegate. On error the
    /// controller is left untouched.
    pub fn move_range_selector_to_range_with_redraw(
        &mut self,
        range: Range,
        redraw: bool,
    ) -> ChartResult<()> {
        let selection = match reconcile_selection(self.selection, range, self.minimum_span) {
            Ok(selection) => selection,
            Err(err) => {
                warn!(
                    error = %err,
                    min = range.min(),
                    max = range.max(),
                    "rejecting range selector sync"
                );
                return Err(err);
            }
        };

        debug!(
            min = range.min(),
            max = range.max(),
            selection_min = selection.min(),
            selection_max = selection.max(),
            redraw,
            "sync range selector"
        );
        self.current_range = Some(range);
        self.selection = Some(selection);
        if let Some(drag) = self.drag.as_mut() {
            drag.origin = selection;
            drag.offset = 0.0;
        }
        self.redraw_pending |= redraw;
        Ok(())
    }

    /// Seeds the selection.
    ///
    /// Before the first sync the seed is held as-is; afterwards it is refitted
    /// into the current range straight away. Never notifies the delegate.
    pub fn set_initial_min_and_max(&mut self, min: f64, max: f64) -> ChartResult<()> {
        let seed = Range::new(min, max)?;
        if self.drag.is_some() {
            return Err(ChartError::InvalidData(
                "cannot seed range selector while a drag is in progress".to_owned(),
            ));
        }

        match self.current_range {
            None => {
                debug!(min, max, "seed range selector");
                self.selection = Some(seed);
            }
            Some(bounds) => {
                let selection = reconcile_selection(Some(seed), bounds, self.minimum_span)?;
                debug!(
                    min,
                    max,
                    selection_min = selection.min(),
                    selection_max = selection.max(),
                    "reseed synced range selector"
                );
                self.selection = Some(selection);
                self.redraw_pending = true;
            }
        }
        Ok(())
    }

    /// Starts a user drag on `target`.
    pub fn begin_drag(&mut self, target: DragTarget) -> ChartResult<()> {
        if self.drag.is_some() {
            return Err(ChartError::InvalidData(
                "range selector drag already in progress".to_owned(),
            ));
        }
        let (_, selection) = self.synced_parts()?;

        trace!(?target, "begin range selector drag");
        self.drag = Some(DragSession {
            target,
            start: selection,
            origin: selection,
            offset: 0.0,
        });
        Ok(())
    }

    /// Moves the dragged target by `delta` domain units.
    ///
    /// Returns the selection after clamping.
    pub fn drag_by(&mut self, delta: f64) -> ChartResult<Range> {
        if !delta.is_finite() {
            return Err(ChartError::InvalidData(
                "range selector drag delta must be finite".to_owned(),
            ));
        }
        let (bounds, _) = self.synced_parts()?;
        let Some(drag) = self.drag.as_mut() else {
            return Err(ChartError::InvalidData(
                "range selector drag has not begun".to_owned(),
            ));
        };

        drag.offset += delta;
        let selection = apply_drag(
            drag.target,
            drag.origin,
            drag.offset,
            bounds,
            self.minimum_span,
        );
        trace!(
            target = ?drag.target,
            offset = drag.offset,
            selection_min = selection.min(),
            selection_max = selection.max(),
            "drag range selector"
        );
        if self.selection != Some(selection) {
            self.redraw_pending = true;
        }
        self.selection = Some(selection);
        Ok(selection)
    }

    /// Completes the drag.
    ///
    /// Notifies the delegate once when the selection differs from the one the
    /// drag started with, and returns whether it did.
    pub fn end_drag(&mut self) -> ChartResult<bool> {
        let Some(drag) = self.drag.take() else {
            return Err(ChartError::InvalidData(
                "range selector drag has not begun".to_owned(),
            ));
        };
        let (_, selection) = self.synced_parts()?;

        if selection == drag.start {
            trace!(target = ?drag.target, "range selector drag ended without change");
            return Ok(false);
        }
        self.notify(SelectionChanged {
            selection,
            origin: ChangeOrigin::Drag(drag.target),
        });
        Ok(true)
    }

    /// Abandons the drag and restores the selection it started with.
    pub fn cancel_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            trace!(target = ?drag.target, "cancel range selector drag");
            // The host may have moved the range mid-drag.
            let restored = self
                .current_range
                .and_then(|bounds| {
                    reconcile_selection(Some(drag.start), bounds, self.minimum_span).ok()
                })
                .unwrap_or(drag.start);
            if self.selection != Some(restored) {
                self.redraw_pending = true;
            }
            self.selection = Some(restored);
        }
    }

    /// Applies a complete user selection in one step, such as a tap or a
    /// keyboard shortcut choosing a preset window.
    ///
    /// `requested` is fitted with [`reconcile_selection`]. Notifies the
    /// delegate once if the selection changed, and returns whether it did.
    pub fn select_range(&mut self, requested: Range) -> ChartResult<bool> {
        if self.drag.is_some() {
            return Err(ChartError::InvalidData(
                "cannot select a range while a drag is in progress".to_owned(),
            ));
        }
        let (bounds, previous) = self.synced_parts()?;
        let selection = reconcile_selection(Some(requested), bounds, self.minimum_span)?;
        if selection == previous {
            return Ok(false);
        }

        self.selection = Some(selection);
        self.redraw_pending = true;
        self.notify(SelectionChanged {
            selection,
            origin: ChangeOrigin::Select,
        });
        Ok(true)
    }

    fn synced_parts(&self) -> ChartResult<(Range, Range)> {
        match (self.current_range, self.selection) {
            (Some(bounds), Some(selection)) => Ok((bounds, selection)),
            _ => Err(ChartError::InvalidData(
                "range selector has not been synced to a chart range".to_owned(),
            )),
        }
    }

    fn notify(&mut self, change: SelectionChanged) {
        debug!(
            min = change.min(),
            max = change.max(),
            origin = ?change.origin,
            "range selector selection changed"
        );
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.selection_changed(change);
        }
    }
}
