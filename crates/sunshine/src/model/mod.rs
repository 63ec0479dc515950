//! List model and selection tracking for Sunshine.
//!
//! This module separates the data a list shows from the state of which rows
//! the user has checked:
//!
//! - An [`ItemAdapter`] owns the rows, reports a stable id per position and
//!   announces data changes through [`AdapterSignals`].
//! - A [`SelectionTracker`] records checked rows and, on every data change,
//!   re-attaches the selection to the same items by id.
//! - [`StableListModel`] is a ready-made adapter over a `Vec` of
//!   [`StableItem`]s.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use sunshine::model::{ChoiceMode, SelectionTracker, StableListModel};
//!
//! let model = Arc::new(StableListModel::with_binder(forecasts, bind_row));
//! let tracker = Arc::new(Mutex::new(SelectionTracker::new(model.clone())));
//! let _connection = SelectionTracker::connect(&tracker);
//! tracker.lock().set_mode(ChoiceMode::Single);
//! ```
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────┐ about_to_change ┌──────────────────┐
//! │ ItemAdapter  │────────────────>│ SelectionTracker │
//! │ (list owner) │    changed      │  position flags  │
//! │              │────────────────>│  id -> position  │
//! └──────────────┘                 └──────────────────┘
//!        ^  rebind_view / notify_item_changed  │
//!        └─────────────────────────────────────┘
//! ```

mod list_model;
pub mod selection;
mod state;
mod traits;

pub use list_model::{StableItem, StableListModel, ViewBinder};
pub use selection::{
    Activation, ChoiceMode, DEFAULT_SEARCH_RADIUS, SELECTED_ITEMS_KEY, SelectionTracker,
    TrackerConnection,
};
pub use state::InstanceState;
pub use traits::{AdapterSignals, ItemAdapter, ItemId, ItemView};
