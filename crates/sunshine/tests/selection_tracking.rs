//! Integration tests for selection tracking over a forecast list.

use std::sync::Arc;

use chrono::{Days, NaiveDate};
use parking_lot::Mutex;
use sunshine::forecast::{WeatherCondition, format_high_low, friendly_day};
use sunshine::prelude::*;

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("sunshine=debug")
        .with_test_writer()
        .try_init();
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 6, 24).unwrap()
}

#[derive(Debug, Clone)]
struct DayForecast {
    row_id: ItemId,
    date: NaiveDate,
    high: f64,
    low: f64,
    weather_id: i32,
}

impl StableItem for DayForecast {
    fn stable_id(&self) -> ItemId {
        self.row_id
    }
}

#[derive(Debug, Default)]
struct ForecastRow {
    position: Option<usize>,
    day: String,
    temperatures: String,
    icon: &'static str,
    activated: bool,
}

impl ForecastRow {
    fn at(position: usize) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }
}

impl ItemView for ForecastRow {
    fn adapter_position(&self) -> Option<usize> {
        self.position
    }

    fn set_activated(&mut self, activated: bool) {
        self.activated = activated;
    }
}

type ForecastModel = StableListModel<DayForecast, ForecastRow>;

fn forecast(offset: u64) -> DayForecast {
    DayForecast {
        row_id: 1000 + offset as ItemId,
        date: today() + Days::new(offset),
        high: 20.0 + offset as f64,
        low: 10.0 + offset as f64,
        weather_id: if offset % 2 == 0 { 800 } else { 501 },
    }
}

fn week() -> Vec<DayForecast> {
    (0..7).map(forecast).collect()
}

fn forecast_model(items: Vec<DayForecast>) -> Arc<ForecastModel> {
    Arc::new(StableListModel::with_binder(
        items,
        |day: &DayForecast, row: &mut ForecastRow| {
            row.day = friendly_day(day.date, today());
            row.temperatures = format_high_low(day.high, day.low, Units::Metric);
            row.icon = WeatherCondition::from_owm_id(day.weather_id)
                .map(WeatherCondition::icon_name)
                .unwrap_or("");
        },
    ))
}

fn attach(
    model: &Arc<ForecastModel>,
    mode: ChoiceMode,
) -> (
    Arc<Mutex<SelectionTracker<ForecastModel>>>,
    TrackerConnection<ForecastModel>,
) {
    let tracker = Arc::new(Mutex::new(SelectionTracker::new(model.clone())));
    let connection = SelectionTracker::connect(&tracker);
    tracker.lock().set_mode(mode);
    (tracker, connection)
}

fn checked_ids(tracker: &Mutex<SelectionTracker<ForecastModel>>) -> Vec<ItemId> {
    tracker.lock().tracked_ids().into_iter().map(|(id, _)| id).collect()
}

#[test]
fn test_activation_rebinds_row() {
    setup();
    let model = forecast_model(week());
    let (tracker, _connection) = attach(&model, ChoiceMode::Single);

    let mut row = ForecastRow::at(1);
    let activation = tracker.lock().on_item_activated(&mut row).unwrap();

    assert_eq!(activation, Activation::Checked(1));
    assert!(row.activated);
    assert_eq!(row.day, "Tomorrow");
    assert_eq!(row.temperatures, "21° / 11°");
    assert_eq!(row.icon, "ic_rain");
}

#[test]
fn test_single_selection_follows_rolling_forecast() {
    setup();
    let model = forecast_model(week());
    let (tracker, _connection) = attach(&model, ChoiceMode::Single);

    tracker
        .lock()
        .on_item_activated(&mut ForecastRow::at(3))
        .unwrap();

    // A new day arrives and the oldest one expires.
    model.push(forecast(7));
    model.remove(0);

    let tracker = tracker.lock();
    assert_eq!(tracker.selected_position(), Some(2));
    assert_eq!(tracker.tracked_ids(), vec![(1003, 2)]);
}

#[test]
fn test_multiple_selection_survives_sort() {
    setup();
    let model = forecast_model(week());
    let (tracker, _connection) = attach(&model, ChoiceMode::Multiple);

    for position in [1, 2, 5] {
        tracker
            .lock()
            .on_item_activated(&mut ForecastRow::at(position))
            .unwrap();
    }
    // Toggle one back off before the data changes.
    tracker
        .lock()
        .on_item_activated(&mut ForecastRow::at(2))
        .unwrap();

    model.sort_by(|a, b| b.date.cmp(&a.date));

    assert_eq!(tracker.lock().checked_positions(), vec![1, 5]);
    assert_eq!(checked_ids(&tracker), vec![1001, 1005]);
    assert_eq!(model.position_of(1001), Some(5));
    assert_eq!(model.position_of(1005), Some(1));
}

#[test]
fn test_selection_dropped_when_item_moves_too_far() {
    setup();
    let model = forecast_model((0..12).map(forecast).collect());
    let tracker = Arc::new(Mutex::new(
        SelectionTracker::new(model.clone()).with_search_radius(3),
    ));
    let _connection = SelectionTracker::connect(&tracker);
    tracker.lock().set_mode(ChoiceMode::Multiple);

    for position in [0, 10] {
        tracker
            .lock()
            .on_item_activated(&mut ForecastRow::at(position))
            .unwrap();
    }

    assert!(model.move_item(0, 11));

    let tracker = tracker.lock();
    assert_eq!(tracker.checked_positions(), vec![9]);
    assert_eq!(tracker.tracked_ids(), vec![(1010, 9)]);
}

#[test]
fn test_selection_survives_recreation() {
    setup();
    let mut saved = InstanceState::new();

    {
        let model = forecast_model(week());
        let (tracker, _connection) = attach(&model, ChoiceMode::Single);
        tracker
            .lock()
            .on_item_activated(&mut ForecastRow::at(4))
            .unwrap();
        tracker.lock().save_instance_state(&mut saved).unwrap();
    }

    // Recreated list: same data, then a refresh that prepends yesterday.
    let model = forecast_model(week());
    let (tracker, _connection) = attach(&model, ChoiceMode::Single);
    assert!(tracker.lock().restore_instance_state(&saved).unwrap());
    assert_eq!(tracker.lock().selected_position(), Some(4));

    let mut refreshed = vec![DayForecast {
        row_id: 999,
        ..forecast(0)
    }];
    refreshed.extend(week());
    model.set_items(refreshed);

    assert_eq!(tracker.lock().selected_position(), Some(5));
    assert_eq!(checked_ids(&tracker), vec![1004]);
}

#[test]
fn test_modal_mode_reports_error_without_side_effects() {
    setup();
    let model = forecast_model(week());
    let (tracker, _connection) = attach(&model, ChoiceMode::MultipleModal);

    let mut row = ForecastRow::at(0);
    let err = tracker.lock().on_item_activated(&mut row).unwrap_err();

    assert!(err.is_programming_error());
    assert!(!tracker.lock().has_selection());
    assert!(row.day.is_empty());
}

#[test]
fn test_tracker_dropped_before_model() {
    setup();
    let model = forecast_model(week());
    let (tracker, connection) = attach(&model, ChoiceMode::Single);
    drop(tracker);

    // The slots only hold weak references; mutating the model is harmless.
    model.push(forecast(7));
    assert_eq!(model.len(), 8);

    drop(connection);
    assert_eq!(model.signals().changed.connection_count(), 0);
}
