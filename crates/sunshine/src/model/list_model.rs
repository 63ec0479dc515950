//! Vec-backed list adapter with stable item ids.
//!
//! `StableListModel<T, V>` owns a list of items that each report a stable
//! id, binds them onto rows of type `V` through a binder closure, and emits
//! [`AdapterSignals`] around every mutation so observers such as the
//! selection tracker can reconcile.

use parking_lot::RwLock;
use std::sync::Arc;

use sunshine_core::logging::targets;

use super::traits::{AdapterSignals, ItemAdapter, ItemId, ItemView};

/// Trait for items that carry their own stable identity.
///
/// # Example
///
/// ```ignore
/// use sunshine::model::{ItemId, StableItem};
///
/// struct Forecast {
///     row_id: i64,
///     summary: String,
/// }
///
/// impl StableItem for Forecast {
///     fn stable_id(&self) -> ItemId {
///         self.row_id
///     }
/// }
/// ```
pub trait StableItem: Send + Sync {
    /// Returns the identity of this item. Must not change while the item is
    /// in a model.
    fn stable_id(&self) -> ItemId;
}

/// Type alias for a view binder function.
pub type ViewBinder<T, V> = Arc<dyn Fn(&T, &mut V) + Send + Sync>;

/// A list adapter over `Vec<T>` with stable ids.
///
/// Every structural mutation emits `about_to_change` before and `changed`
/// after the data is modified. Content-only edits through
/// [`modify`](Self::modify) emit `item_changed` for the edited row.
///
/// # Example
///
/// ```ignore
/// use sunshine::model::StableListModel;
///
/// let model = StableListModel::with_binder(forecasts, |forecast, row: &mut ForecastRow| {
///     row.summary = forecast.summary.clone();
/// });
///
/// model.insert(0, today);
/// assert_eq!(model.position_of(today_id), Some(0));
/// ```
pub struct StableListModel<T, V> {
    items: RwLock<Vec<T>>,
    binder: Option<ViewBinder<T, V>>,
    signals: AdapterSignals,
}

impl<T: StableItem, V> StableListModel<T, V> {
    /// Creates a list model without a binder.
    ///
    /// `rebind_view` only refreshes selection attributes handled by the
    /// caller; row content is left untouched.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
            binder: None,
            signals: AdapterSignals::new(),
        }
    }

    /// Creates a list model whose rows are filled by `binder`.
    pub fn with_binder<F>(items: Vec<T>, binder: F) -> Self
    where
        F: Fn(&T, &mut V) + Send + Sync + 'static,
    {
        Self {
            items: RwLock::new(items),
            binder: Some(Arc::new(binder)),
            signals: AdapterSignals::new(),
        }
    }

    /// Creates an empty list model.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns the number of items in the model.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if the model is empty.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Returns a reference to the items (read-only access).
    pub fn items(&self) -> impl std::ops::Deref<Target = Vec<T>> + '_ {
        self.items.read()
    }

    /// Returns the current position of the item with `id`, if present.
    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.items
            .read()
            .iter()
            .position(|item| item.stable_id() == id)
    }

    /// Appends an item to the end of the list.
    pub fn push(&self, item: T) {
        self.signals.emit_data_set_changed(|| {
            self.items.write().push(item);
        });
    }

    /// Inserts an item at `index`, clamped to the end of the list.
    pub fn insert(&self, index: usize, item: T) {
        self.signals.emit_data_set_changed(|| {
            let mut items = self.items.write();
            let index = index.min(items.len());
            items.insert(index, item);
        });
    }

    /// Removes and returns the item at `index`.
    ///
    /// Returns `None` without emitting anything if `index` is out of range.
    pub fn remove(&self, index: usize) -> Option<T> {
        if index >= self.len() {
            return None;
        }
        self.signals.emit_data_set_changed(|| {
            let mut items = self.items.write();
            (index < items.len()).then(|| items.remove(index))
        })
    }

    /// Moves the item at `from` so that it ends up at `to`.
    ///
    /// Returns `false` if either position is out of range.
    pub fn move_item(&self, from: usize, to: usize) -> bool {
        let len = self.len();
        if from >= len || to >= len {
            return false;
        }
        if from == to {
            return true;
        }
        self.signals.emit_data_set_changed(|| {
            let mut items = self.items.write();
            let item = items.remove(from);
            items.insert(to, item);
        });
        true
    }

    /// Removes all items from the model.
    pub fn clear(&self) {
        self.signals.emit_data_set_changed(|| {
            self.items.write().clear();
        });
    }

    /// Replaces all items in the model.
    pub fn set_items(&self, items: Vec<T>) {
        self.signals.emit_data_set_changed(|| {
            *self.items.write() = items;
        });
    }

    /// Sorts the list using the provided comparator.
    pub fn sort_by<F>(&self, compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        self.signals.emit_data_set_changed(|| {
            self.items.write().sort_by(compare);
        });
    }

    /// Provides mutable access to an item via a closure.
    ///
    /// Emits `item_changed` after modification. The closure must not change
    /// the item's stable id.
    pub fn modify<F, R>(&self, index: usize, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let result = {
            let mut items = self.items.write();
            let item = items.get_mut(index)?;
            f(item)
        };
        self.signals.item_changed.emit(index);
        Some(result)
    }
}

impl<T: StableItem, V> Default for StableListModel<T, V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: StableItem, V: ItemView> ItemAdapter for StableListModel<T, V> {
    type View = V;

    fn item_count(&self) -> usize {
        self.items.read().len()
    }

    fn has_stable_ids(&self) -> bool {
        true
    }

    fn item_id(&self, position: usize) -> Option<ItemId> {
        self.items.read().get(position).map(StableItem::stable_id)
    }

    fn rebind_view(&self, view: &mut V, position: usize) {
        let Some(binder) = &self.binder else {
            return;
        };
        let items = self.items.read();
        match items.get(position) {
            Some(item) => binder(item, view),
            None => tracing::debug!(
                target: targets::ADAPTER,
                position,
                len = items.len(),
                "rebind requested for position outside the list"
            ),
        }
    }

    fn notify_item_changed(&self, position: usize) {
        tracing::trace!(target: targets::ADAPTER, position, "item changed");
        self.signals.item_changed.emit(position);
    }

    fn signals(&self) -> &AdapterSignals {
        &self.signals
    }
}
