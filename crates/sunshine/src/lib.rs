//! Sunshine: selection tracking and forecast presentation.
//!
//! The centrepiece is [`model::SelectionTracker`], which keeps the checked
//! rows of a list attached to the same items while the list's data is
//! inserted into, removed from or reordered. Around it sit a ready-made
//! list adapter, display settings loaded from TOML, and helpers that turn
//! stored forecast values into display text.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use sunshine::prelude::*;
//!
//! let model = Arc::new(StableListModel::with_binder(days, bind_row));
//! let tracker = Arc::new(Mutex::new(SelectionTracker::new(model.clone())));
//! let _connection = SelectionTracker::connect(&tracker);
//!
//! tracker.lock().set_mode(ChoiceMode::Single);
//! tracker.lock().on_item_activated(&mut row)?;
//! ```

pub mod error;
pub mod forecast;
pub mod model;
pub mod prelude;
pub mod settings;

pub use sunshine_core::*;

pub use error::{SelectionError, SelectionResult, SettingsError, SettingsResult};
