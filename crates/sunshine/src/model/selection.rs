//! Selection tracking for data-driven lists.
//!
//! This module provides [`SelectionTracker`], which records which rows of an
//! [`ItemAdapter`] are checked and keeps that state attached to the items'
//! stable ids when the adapter's data is inserted into, removed from or
//! reordered.
//!
//! Positions alone are not enough: when a row is inserted above a checked
//! row, a purely positional selection silently moves to whatever item now
//! occupies the old position. The tracker therefore keeps two maps:
//!
//! - position -> checked flag, used for rendering
//! - stable id -> last known position, used to rebuild the first map after a
//!   data change
//!
//! Rebuilding looks for each tracked id at its last known position and then
//! within a bounded window around it. Items that moved further than the
//! window (for instance after a full re-sort) are deselected.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use sunshine::model::{ChoiceMode, SelectionTracker, StableListModel};
//!
//! let model = Arc::new(StableListModel::with_binder(days, bind_day));
//! let tracker = Arc::new(Mutex::new(SelectionTracker::new(model.clone())));
//! let _connection = SelectionTracker::connect(&tracker);
//!
//! tracker.lock().set_mode(ChoiceMode::Single);
//! tracker.lock().on_item_activated(&mut row)?;
//!
//! // Inserting above the selection keeps the same item checked.
//! model.insert(0, yesterday);
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use sunshine_core::logging::{span_names, targets};
use sunshine_core::{ConnectionId, PerfSpan};

use super::state::InstanceState;
use super::traits::{ItemAdapter, ItemId, ItemView};
use crate::error::{SelectionError, SelectionResult};

/// Key under which [`SelectionTracker::save_instance_state`] stores its blob.
pub const SELECTED_ITEMS_KEY: &str = "sunshine.selected_items";

/// How many positions in either direction reconciliation searches for an
/// item that moved.
pub const DEFAULT_SEARCH_RADIUS: usize = 20;

/// Choice behavior of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChoiceMode {
    /// Rows cannot be checked (default).
    #[default]
    None,
    /// At most one row is checked at a time.
    Single,
    /// Any number of rows can be checked; activation toggles.
    Multiple,
    /// Multiple choice driven by a contextual action mode. Recognised but
    /// not supported: activations report [`SelectionError::Unimplemented`].
    MultipleModal,
}

/// Outcome of [`SelectionTracker::on_item_activated`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Nothing happened: no choice mode, or the row could not be resolved.
    Ignored,
    /// The row at this position is now checked.
    Checked(usize),
    /// The row at this position is now unchecked.
    Unchecked(usize),
    /// The row was already checked and stays checked.
    Unchanged(usize),
}

/// Serialisable selection state.
///
/// `positions` may hold explicit `false` entries (rows toggled off in
/// multiple mode); they round-trip like any other entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct SelectionState {
    positions: BTreeMap<usize, bool>,
    ids: BTreeMap<ItemId, usize>,
}

/// Tracks checked rows of an [`ItemAdapter`] across data changes.
///
/// The tracker is bound to one adapter for its whole life. All calls are
/// expected on the thread that owns the list; reentrant calls from adapter
/// signal slots while the tracker is borrowed are not supported.
pub struct SelectionTracker<A: ItemAdapter> {
    adapter: Arc<A>,
    mode: ChoiceMode,
    search_radius: usize,
    state: SelectionState,
}

impl<A: ItemAdapter> SelectionTracker<A> {
    /// Creates an empty tracker bound to `adapter`, in [`ChoiceMode::None`].
    pub fn new(adapter: Arc<A>) -> Self {
        Self {
            adapter,
            mode: ChoiceMode::default(),
            search_radius: DEFAULT_SEARCH_RADIUS,
            state: SelectionState::default(),
        }
    }

    /// Sets how far reconciliation searches for moved items.
    pub fn with_search_radius(mut self, radius: usize) -> Self {
        self.search_radius = radius;
        self
    }

    /// Returns the reconciliation search radius.
    pub fn search_radius(&self) -> usize {
        self.search_radius
    }

    /// Returns the adapter this tracker is bound to.
    pub fn adapter(&self) -> &Arc<A> {
        &self.adapter
    }

    // =========================================================================
    // Choice Mode
    // =========================================================================

    /// Gets the current choice mode.
    pub fn mode(&self) -> ChoiceMode {
        self.mode
    }

    /// Sets the choice mode.
    ///
    /// Switching to a different mode clears all selections. Setting the
    /// current mode again is a no-op.
    pub fn set_mode(&mut self, mode: ChoiceMode) {
        if self.mode != mode {
            tracing::debug!(target: targets::SELECTION, from = ?self.mode, to = ?mode, "choice mode changed");
            self.mode = mode;
            self.clear_selections();
        }
    }

    // =========================================================================
    // Activation
    // =========================================================================

    /// Handles a user activation (tap, click, Enter) of `view`.
    ///
    /// In [`ChoiceMode::Single`] an unchecked row becomes the only checked
    /// row; previously checked rows are asked to redraw through
    /// [`ItemAdapter::notify_item_changed`]. Activating the checked row again
    /// leaves it checked. In [`ChoiceMode::Multiple`] the row's flag toggles
    /// and the id map is left for the next data-change pass to synchronise.
    ///
    /// The activated row itself is always rebound directly rather than
    /// through `notify_item_changed`, so that it keeps input focus.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::Unimplemented`] in
    /// [`ChoiceMode::MultipleModal`]; state is left untouched.
    pub fn on_item_activated(&mut self, view: &mut A::View) -> SelectionResult<Activation> {
        match self.mode {
            ChoiceMode::None => return Ok(Activation::Ignored),
            ChoiceMode::MultipleModal => return Err(SelectionError::unimplemented(self.mode)),
            ChoiceMode::Single | ChoiceMode::Multiple => {}
        }

        let Some(position) = view.adapter_position() else {
            tracing::debug!(target: targets::SELECTION, "unable to set item state: row has no adapter position");
            return Ok(Activation::Ignored);
        };

        let activation = if self.mode == ChoiceMode::Single {
            self.activate_single(position)
        } else {
            self.activate_multiple(position)
        };

        if activation != Activation::Ignored {
            self.adapter.rebind_view(view, position);
            self.bind_visual_state(view, position);
        }

        tracing::debug!(target: targets::SELECTION, position, ?activation, "item activated");
        Ok(activation)
    }

    fn activate_single(&mut self, position: usize) -> Activation {
        if self.is_checked(position) {
            return Activation::Unchanged(position);
        }

        let Some(id) = self.adapter.item_id(position) else {
            tracing::debug!(target: targets::SELECTION, position, "unable to set item state: no item id at position");
            return Activation::Ignored;
        };

        let previous: Vec<usize> = self.state.positions.keys().copied().collect();
        for old in previous {
            self.adapter.notify_item_changed(old);
        }

        self.state.positions.clear();
        self.state.positions.insert(position, true);
        self.state.ids.clear();
        self.state.ids.insert(id, position);
        Activation::Checked(position)
    }

    fn activate_multiple(&mut self, position: usize) -> Activation {
        let checked = !self.is_checked(position);
        self.state.positions.insert(position, checked);
        if checked {
            Activation::Checked(position)
        } else {
            Activation::Unchecked(position)
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns whether the row at `position` is checked.
    ///
    /// Meaningful in single and multiple modes; always `false` otherwise
    /// since selections are cleared when the mode changes.
    pub fn is_checked(&self, position: usize) -> bool {
        self.state.positions.get(&position).copied().unwrap_or(false)
    }

    /// Returns the lowest checked position, or `None` if nothing is checked.
    pub fn selected_position(&self) -> Option<usize> {
        self.state
            .positions
            .iter()
            .find(|&(_, &checked)| checked)
            .map(|(&position, _)| position)
    }

    /// Returns all checked positions in ascending order.
    pub fn checked_positions(&self) -> Vec<usize> {
        self.state
            .positions
            .iter()
            .filter(|&(_, &checked)| checked)
            .map(|(&position, _)| position)
            .collect()
    }

    /// Returns the number of checked rows.
    pub fn checked_count(&self) -> usize {
        self.state.positions.values().filter(|&&checked| checked).count()
    }

    /// Returns the tracked `(id, last known position)` pairs, ordered by id.
    pub fn tracked_ids(&self) -> Vec<(ItemId, usize)> {
        self.state.ids.iter().map(|(&id, &position)| (id, position)).collect()
    }

    /// Returns `true` if any row is checked.
    pub fn has_selection(&self) -> bool {
        self.state.positions.values().any(|&checked| checked)
    }

    /// Applies the checked and activated attributes for `position` to `view`.
    pub fn bind_visual_state<V: ItemView + ?Sized>(&self, view: &mut V, position: usize) {
        let checked = self.is_checked(position);
        view.set_checked(checked);
        view.set_activated(checked);
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Clears all selections.
    pub fn clear_selections(&mut self) {
        self.state.positions.clear();
        self.state.ids.clear();
    }

    /// Handles the adapter's data-changed notification.
    ///
    /// Reconciles only when the adapter reports stable ids; otherwise the
    /// selection stays purely positional.
    pub fn on_data_set_changed(&mut self) {
        if self.adapter.has_stable_ids() {
            let count = self.adapter.item_count();
            self.reconcile_after_data_change(count);
        }
    }

    /// Records the stable id of every checked row that is not yet tracked.
    ///
    /// Must run before the adapter's data changes, so that the ids read are
    /// those of the rows the user actually checked. Rows toggled off since
    /// the last pass stop being tracked.
    pub fn prepare_for_data_change(&mut self) {
        if !self.adapter.has_stable_ids() {
            return;
        }

        self.prune_unchecked_ids();

        let tracked: BTreeSet<usize> = self.state.ids.values().copied().collect();
        let untracked: Vec<usize> = self
            .checked_positions()
            .into_iter()
            .filter(|position| !tracked.contains(position))
            .collect();

        for position in untracked {
            if let Some(id) = self.adapter.item_id(position) {
                self.state.ids.insert(id, position);
            }
        }
    }

    /// Rebuilds the checked positions from the tracked ids.
    ///
    /// For each tracked id: if the item is still at its last known position
    /// it stays checked there; otherwise positions within the search radius
    /// (clipped to `0..item_count`) are scanned in ascending order and the
    /// first match becomes the new position. Ids not found are dropped.
    pub fn reconcile_after_data_change(&mut self, item_count: usize) {
        let _span = PerfSpan::new(span_names::RECONCILE);

        self.prune_unchecked_ids();
        self.state.positions.clear();

        let tracked = std::mem::take(&mut self.state.ids);
        for (id, last_position) in tracked {
            match self.locate(id, last_position, item_count) {
                Some(position) => {
                    if position != last_position {
                        tracing::debug!(
                            target: targets::SELECTION,
                            id,
                            from = last_position,
                            to = position,
                            "checked item moved"
                        );
                    }
                    self.state.positions.insert(position, true);
                    self.state.ids.insert(id, position);
                }
                None => {
                    tracing::debug!(
                        target: targets::SELECTION,
                        id,
                        last_position,
                        radius = self.search_radius,
                        "checked item not found near its last position, unchecking"
                    );
                }
            }
        }
    }

    fn locate(&self, id: ItemId, last_position: usize, item_count: usize) -> Option<usize> {
        if item_count == 0 {
            return None;
        }
        if last_position < item_count && self.adapter.item_id(last_position) == Some(id) {
            return Some(last_position);
        }

        let start = last_position.saturating_sub(self.search_radius);
        let end = last_position
            .saturating_add(self.search_radius)
            .min(item_count - 1);
        (start..=end).find(|&position| self.adapter.item_id(position) == Some(id))
    }

    /// Drops tracked ids whose position is no longer checked.
    fn prune_unchecked_ids(&mut self) {
        let positions = &self.state.positions;
        self.state
            .ids
            .retain(|_, position| positions.get(&*position).copied().unwrap_or(false));
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Encodes the checked positions and tracked ids as an opaque blob.
    pub fn serialize_state(&self) -> SelectionResult<Vec<u8>> {
        serde_json::to_vec(&self.state).map_err(SelectionError::Encode)
    }

    /// Replaces the current state with one produced by
    /// [`serialize_state`](Self::serialize_state).
    ///
    /// The choice mode is not part of the blob and is left unchanged.
    pub fn restore_state(&mut self, bytes: &[u8]) -> SelectionResult<()> {
        let _span = PerfSpan::new(span_names::RESTORE);
        let state: SelectionState = serde_json::from_slice(bytes).map_err(SelectionError::Decode)?;
        tracing::debug!(
            target: targets::SELECTION,
            positions = state.positions.len(),
            ids = state.ids.len(),
            "selection state restored"
        );
        self.state = state;
        Ok(())
    }

    /// Stores the selection blob in `out` under [`SELECTED_ITEMS_KEY`].
    pub fn save_instance_state(&self, out: &mut InstanceState) -> SelectionResult<()> {
        out.put_bytes(SELECTED_ITEMS_KEY, self.serialize_state()?);
        Ok(())
    }

    /// Restores the selection from `saved`, if it holds a blob.
    ///
    /// Returns `Ok(false)` when no blob was stored.
    pub fn restore_instance_state(&mut self, saved: &InstanceState) -> SelectionResult<bool> {
        match saved.bytes(SELECTED_ITEMS_KEY) {
            Some(bytes) => {
                self.restore_state(bytes)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl<A: ItemAdapter + 'static> SelectionTracker<A> {
    /// Subscribes a shared tracker to its adapter's change notifications.
    ///
    /// `about_to_change` triggers [`prepare_for_data_change`](Self::prepare_for_data_change)
    /// and `changed` triggers [`on_data_set_changed`](Self::on_data_set_changed).
    /// The subscription lasts until the returned connection is dropped. The
    /// slots hold only a weak reference to the tracker.
    ///
    /// Do not hold the tracker's lock while mutating the adapter.
    pub fn connect(tracker: &Arc<Mutex<Self>>) -> TrackerConnection<A> {
        let adapter = tracker.lock().adapter.clone();
        let signals = adapter.signals();

        let weak = Arc::downgrade(tracker);
        let about_to_change = signals.about_to_change.connect(move |_| {
            if let Some(tracker) = weak.upgrade() {
                tracker.lock().prepare_for_data_change();
            }
        });

        let weak = Arc::downgrade(tracker);
        let changed = signals.changed.connect(move |_| {
            if let Some(tracker) = weak.upgrade() {
                tracker.lock().on_data_set_changed();
            }
        });

        TrackerConnection {
            adapter,
            about_to_change,
            changed,
        }
    }
}

impl<A: ItemAdapter> std::fmt::Debug for SelectionTracker<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionTracker")
            .field("mode", &self.mode)
            .field("search_radius", &self.search_radius)
            .field("positions", &self.state.positions)
            .field("ids", &self.state.ids)
            .finish()
    }
}

/// Subscription of a tracker to an adapter; disconnects when dropped.
#[must_use = "the tracker stops following data changes when the connection is dropped"]
pub struct TrackerConnection<A: ItemAdapter> {
    adapter: Arc<A>,
    about_to_change: ConnectionId,
    changed: ConnectionId,
}

impl<A: ItemAdapter> TrackerConnection<A> {
    /// Disconnects explicitly. Equivalent to dropping the connection.
    pub fn disconnect(self) {}
}

impl<A: ItemAdapter> Drop for TrackerConnection<A> {
    fn drop(&mut self) {
        let signals = self.adapter.signals();
        signals.about_to_change.disconnect(self.about_to_change);
        signals.changed.disconnect(self.changed);
    }
}
