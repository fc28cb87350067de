//! Lifecycle and event handling of the auto-resizing field.
//!
//! `FieldController` is the part of the component that does not need a
//! browser. It is generic over the pending-timer handle `T` and the resize
//! subscription `L`; both are expected to release their resource on drop.
//! The frontend instantiates it with a `gloo_timers` timeout and a window
//! listener, tests use plain probes.
//!
//! Host callbacks are passed in as closures and invoked from here, so the
//! order between state changes and forwarding is fixed in one place.

use crate::classes::{self, ClassInputs};
use crate::keys::KeyDisposition;
use crate::layout::{estimate, Measurement, RenderStyle};
use crate::model::{FieldAction, FieldState, RowBounds};
use crate::slot::Slot;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Mounted,
    Unmounted,
}

pub struct FieldController<T, L> {
    state: FieldState,
    rows: RowBounds,
    pending: Slot<T>,
    resize: Slot<L>,
    lifecycle: Lifecycle,
}

impl<T, L> Default for FieldController<T, L> {
    fn default() -> Self {
        Self::new(RowBounds::unbounded())
    }
}

impl<T, L> FieldController<T, L> {
    pub fn new(rows: RowBounds) -> Self {
        Self {
            state: FieldState::new(),
            rows,
            pending: Slot::new(),
            resize: Slot::new(),
            lifecycle: Lifecycle::Created,
        }
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    pub fn rows(&self) -> RowBounds {
        self.rows
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    pub fn has_pending_recompute(&self) -> bool {
        self.pending.is_occupied()
    }

    pub fn has_resize_listener(&self) -> bool {
        self.resize.is_occupied()
    }

    /// Registers the resize listener and performs the first measurement.
    ///
    /// `attach` is only called when no listener is held yet, so mounting
    /// twice never registers twice. Returns true when the state changed.
    pub fn mount(
        &mut self,
        attach: impl FnOnce() -> Option<L>,
        measurement: Option<Measurement>,
    ) -> bool {
        if !self.resize.fill_with(attach) && !self.resize.is_occupied() {
            log::warn!("resize listener unavailable; height follows edits and updates only");
        }
        self.lifecycle = Lifecycle::Mounted;
        self.recompute(measurement)
    }

    /// Called when the host hands in new configuration without an edit.
    ///
    /// The row bounds take effect immediately. The new content is not
    /// committed to the node yet, so the recompute is deferred to the handle
    /// `schedule` returns. Any earlier pending handle is dropped first; only
    /// the latest update gets measured.
    pub fn receive_updated_configuration(
        &mut self,
        rows: RowBounds,
        schedule: impl FnOnce() -> T,
    ) {
        if self.lifecycle == Lifecycle::Unmounted {
            return;
        }
        self.rows = rows;
        if self.pending.replace(schedule()) {
            log::trace!("superseded pending height recompute");
        }
    }

    /// Body of the scheduled recompute. Releases the pending slot and
    /// measures, unless the field was torn down in the meantime.
    pub fn run_scheduled(&mut self, measurement: Option<Measurement>) -> bool {
        self.pending.clear();
        self.recompute(measurement)
    }

    /// Cancels the pending recompute and detaches the resize listener.
    /// Safe to call any number of times.
    pub fn unmount(&mut self) {
        self.pending.clear();
        self.resize.clear();
        self.lifecycle = Lifecycle::Unmounted;
    }

    /// Re-runs the estimator on `measurement`. A missing measurement (node
    /// not in the document) keeps the previous state.
    pub fn recompute(&mut self, measurement: Option<Measurement>) -> bool {
        if self.lifecycle == Lifecycle::Unmounted {
            return false;
        }
        let Some(measurement) = measurement else {
            log::debug!("textarea not available; keeping previous height");
            return false;
        };
        self.apply(FieldAction::Measured(estimate(&measurement, self.rows)))
    }

    /// Focus handler. Non-editable fields neither take focus nor call
    /// `forward`.
    pub fn focus(&mut self, editable: bool, forward: impl FnOnce()) -> bool {
        if !editable {
            return false;
        }
        let changed = self.apply(FieldAction::Focus { editable });
        forward();
        changed
    }

    /// Blur handler; always clears focus and always forwards.
    pub fn blur(&mut self, forward: impl FnOnce()) -> bool {
        let changed = self.apply(FieldAction::Blur);
        forward();
        changed
    }

    /// Edit handler. The height is recomputed before `forward` runs, and
    /// `forward` sees the updated state.
    pub fn change(
        &mut self,
        measurement: Option<Measurement>,
        forward: impl FnOnce(&FieldState),
    ) -> bool {
        let changed = self.recompute(measurement);
        forward(&self.state);
        changed
    }

    /// Routes a classified key press: `on_enter` first when it was Enter,
    /// then `on_key` for every key.
    pub fn key_down(
        &self,
        disposition: KeyDisposition,
        on_enter: impl FnOnce(),
        on_key: impl FnOnce(),
    ) {
        if disposition.enter {
            on_enter();
        }
        on_key();
    }

    pub fn class_names(
        &self,
        inputs: &ClassInputs<'_>,
        validate: Option<&dyn Fn(&str) -> bool>,
    ) -> String {
        classes::class_names(&self.state, inputs, validate)
    }

    pub fn render_style(&self, style_max_height: Option<f64>) -> RenderStyle {
        RenderStyle::derive(&self.state, style_max_height)
    }

    fn apply(&mut self, action: FieldAction) -> bool {
        let next = self.state.reduce(action);
        let changed = next != self.state;
        self.state = next;
        changed
    }
}
