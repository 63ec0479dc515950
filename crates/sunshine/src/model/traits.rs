//! Core traits for list owners and the rows they render.
//!
//! A list owner ([`ItemAdapter`]) exposes its items by position, reports a
//! stable identity for each position, re-renders rows on request, and
//! announces data changes through [`AdapterSignals`]. Rows implement
//! [`ItemView`] so selection state can be reflected on them.

use sunshine_core::Signal;

/// Stable identifier of a list item.
///
/// Unlike a position, an id does not change when rows are inserted, removed
/// or reordered around the item.
pub type ItemId = i64;

/// A renderable row bound to a position in an adapter.
pub trait ItemView {
    /// Returns the adapter position this row currently represents.
    ///
    /// `None` means the row is detached or its position is being
    /// recomputed, so it cannot be resolved to an item.
    fn adapter_position(&self) -> Option<usize>;

    /// Sets the "activated" visual attribute.
    fn set_activated(&mut self, activated: bool);

    /// Sets the "checked" visual attribute.
    ///
    /// Rows without a checkable control ignore this; the default does nothing.
    fn set_checked(&mut self, _checked: bool) {}
}

/// The list owner capability a selection tracker is bound to.
///
/// # Implementation Requirements
///
/// - `item_id` must return collision-free ids when `has_stable_ids` is true.
/// - `about_to_change` must be emitted before the underlying data is mutated,
///   and `changed` after, with no internal locks held during either emission.
/// - `notify_item_changed` must not emit `changed`; it only requests that a
///   single row be redrawn.
pub trait ItemAdapter: Send + Sync {
    /// The row type this adapter binds.
    type View: ItemView;

    /// Returns the number of items currently in the list.
    fn item_count(&self) -> usize;

    /// Returns `true` if `item_id` yields identities that survive data changes.
    fn has_stable_ids(&self) -> bool;

    /// Returns the stable id of the item at `position`, or `None` if the
    /// position is out of range.
    fn item_id(&self, position: usize) -> Option<ItemId>;

    /// Re-renders `view` for `position` immediately.
    fn rebind_view(&self, view: &mut Self::View, position: usize);

    /// Requests a (possibly batched) redraw of the row at `position`.
    fn notify_item_changed(&self, position: usize);

    /// Returns the change notifications for this adapter.
    fn signals(&self) -> &AdapterSignals;
}

/// Collection of signals emitted by item adapters.
///
/// # Signal Usage
///
/// - **Before modifications**: emit `about_to_change`
/// - **After modifications**: emit `changed`
/// - **Single row redraw requests**: emit `item_changed`
pub struct AdapterSignals {
    /// Emitted just before the data set is mutated.
    pub about_to_change: Signal<()>,

    /// Emitted after the data set changed shape or content.
    pub changed: Signal<()>,

    /// Emitted when one row should be redrawn. Args: position.
    pub item_changed: Signal<usize>,
}

impl Default for AdapterSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl AdapterSignals {
    /// Creates a new set of adapter signals.
    pub fn new() -> Self {
        Self {
            about_to_change: Signal::new(),
            changed: Signal::new(),
            item_changed: Signal::new(),
        }
    }

    /// Emits `about_to_change`, runs `change_fn`, then emits `changed`.
    ///
    /// `change_fn` must release any lock it takes before returning.
    pub fn emit_data_set_changed<F, R>(&self, change_fn: F) -> R
    where
        F: FnOnce() -> R,
    {
        self.about_to_change.emit(());
        let result = change_fn();
        self.changed.emit(());
        result
    }
}

impl std::fmt::Debug for AdapterSignals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterSignals")
            .field("about_to_change", &self.about_to_change)
            .field("changed", &self.changed)
            .field("item_changed", &self.item_changed)
            .finish()
    }
}
