//! Prelude module for Sunshine.
//!
//! ```ignore
//! use sunshine::prelude::*;
//! ```

// ============================================================================
// Signal/Slot
// ============================================================================

pub use crate::signal::{ConnectionId, Signal};

// ============================================================================
// Model and Selection
// ============================================================================

pub use crate::model::{
    Activation, AdapterSignals, ChoiceMode, InstanceState, ItemAdapter, ItemId, ItemView,
    SelectionTracker, StableItem, StableListModel, TrackerConnection,
};

// ============================================================================
// Settings and Forecast Display
// ============================================================================

pub use crate::forecast::{WeatherAlert, WeatherCondition};
pub use crate::settings::{DisplaySettings, Units};

// ============================================================================
// Errors
// ============================================================================

pub use crate::error::{SelectionError, SelectionResult, SettingsError, SettingsResult};
