//! Forecast list with a selection that survives data refreshes.
//!
//! Run with: cargo run -p sunshine --example forecast_list
//!
//! Set `RUST_LOG=sunshine=debug` to see the tracker's reconciliation events.

use std::sync::Arc;

use chrono::{Days, Local, NaiveDate};
use parking_lot::Mutex;
use sunshine::forecast::{describe, format_high_low, format_wind, friendly_day};
use sunshine::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct DayForecast {
    row_id: ItemId,
    date: NaiveDate,
    high: f64,
    low: f64,
    wind_kmh: f64,
    wind_degrees: f64,
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
    text: String,
    activated: bool,
}

impl ItemView for ForecastRow {
    fn adapter_position(&self) -> Option<usize> {
        self.position
    }

    fn set_activated(&mut self, activated: bool) {
        self.activated = activated;
    }
}

fn forecast_for(today: NaiveDate, offset: u64) -> DayForecast {
    const CODES: [i32; 5] = [800, 801, 500, 211, 741];
    let n = offset as f64;
    DayForecast {
        row_id: offset as ItemId,
        date: today + Days::new(offset),
        high: 18.0 + n,
        low: 9.0 + n / 2.0,
        wind_kmh: 6.0 + 2.0 * n,
        wind_degrees: 40.0 * n,
        weather_id: CODES[offset as usize % CODES.len()],
    }
}

fn print_list(
    model: &StableListModel<DayForecast, ForecastRow>,
    tracker: &SelectionTracker<StableListModel<DayForecast, ForecastRow>>,
) {
    for position in 0..model.item_count() {
        let mut row = ForecastRow {
            position: Some(position),
            ..ForecastRow::default()
        };
        model.rebind_view(&mut row, position);
        tracker.bind_visual_state(&mut row, position);
        let marker = if row.activated { '*' } else { ' ' };
        println!("{marker} {}", row.text);
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = DisplaySettings::from_toml_str(r#"units = "metric""#)?;
    let units = settings.units;
    let today = Local::now().date_naive();

    let days = (0..7).map(|offset| forecast_for(today, offset)).collect();
    let model = Arc::new(StableListModel::with_binder(
        days,
        move |day: &DayForecast, row: &mut ForecastRow| {
            row.text = format!(
                "{:<22} {:<12} {:<16} {}",
                friendly_day(day.date, today),
                describe(day.weather_id),
                format_high_low(day.high, day.low, units),
                format_wind(day.wind_kmh, day.wind_degrees, units),
            );
        },
    ));

    let tracker = Arc::new(Mutex::new(SelectionTracker::new(model.clone())));
    let _connection = SelectionTracker::connect(&tracker);
    tracker.lock().set_mode(ChoiceMode::Single);

    let mut row = ForecastRow {
        position: Some(2),
        ..ForecastRow::default()
    };
    tracker.lock().on_item_activated(&mut row)?;
    println!("Selected {}:", row.text.trim_end());
    print_list(&model, &tracker.lock());

    // Refresh: yesterday's forecast is dropped and a new day is appended.
    model.remove(0);
    model.push(forecast_for(today, 7));
    println!("After refresh, selection at {:?}:", tracker.lock().selected_position());
    print_list(&model, &tracker.lock());

    Ok(())
}
