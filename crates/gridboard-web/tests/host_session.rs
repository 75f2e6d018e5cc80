//! Host Session Tests
//!
//! Scripted dashboard sessions driven through [`DashboardHost`], checked
//! against headless snapshots.
//!
//! # Running Tests
//!
//! ```sh
//! cargo test -p gridboard-web --test host_session
//! ```

use core::time::Duration;
use std::sync::Arc;

use gridboard_core::{Bucket, DragEnd, HostEvent, SequentialIds, WidgetId};
use gridboard_layout::Breakpoints;
use gridboard_runtime::{
    DashboardController, LayoutStore, MemoryStorage, PersistentLayoutStore, StatusTone,
};
use gridboard_web::{DashboardHost, StatusSnapshot};
use gridboard_widgets::SeededRng;
use pretty_assertions::assert_eq;

type Host = DashboardHost<PersistentLayoutStore, SequentialIds>;

fn open(storage: &Arc<MemoryStorage>, width: u32) -> Host {
    let controller = DashboardController::with_parts(
        PersistentLayoutStore::new(Box::new(Arc::clone(storage))),
        SequentialIds::default(),
        Breakpoints::DEFAULT,
        width,
    );
    DashboardHost::with_rng(controller, Duration::from_secs(3), SeededRng::new(5))
}

fn run(host: &mut Host, events: impl IntoIterator<Item = HostEvent>) {
    for event in events {
        host.push_event(event);
    }
    host.step();
}

#[test]
fn fresh_session_shows_default_dashboard() {
    let storage = Arc::new(MemoryStorage::new());
    let host = open(&storage, 1280);
    let snap = host.snapshot();

    assert_eq!(snap.bucket, Bucket::Four);
    assert_eq!(snap.columns_label, "4 Columns (Auto)");
    assert_eq!(snap.widgets_label, "10 Widgets");
    assert_eq!(snap.status, None);

    let weather = &snap.tiles[0];
    assert_eq!(weather.title, "Weather");
    assert_eq!(weather.lines[0], "☀️ 22°C");

    let invoices = &snap.tiles[1];
    assert_eq!(invoices.view, "bar_chart");
    assert!(invoices.lines[2].ends_with("$3,200"));

    assert_eq!(snap.tiles[5].lines[1], "$5,000");
    assert_eq!(snap.tiles[6].lines[1], "$25,000");
    assert_eq!(snap.tiles[7].lines[0], "Pending Claims $877.74");
    assert_eq!(snap.tiles[8].lines, vec!["9", "Widget #9"]);
}

#[test]
fn each_bucket_keeps_its_own_order() {
    let storage = Arc::new(MemoryStorage::new());
    let mut host = open(&storage, 1280);

    run(&mut host, [HostEvent::Drag(DragEnd::new(0, 9))]);
    run(&mut host, [HostEvent::Resize { width: 400 }]);
    assert_eq!(host.snapshot().bucket, Bucket::One);
    assert_eq!(host.snapshot().numbers()[0], 1);

    run(&mut host, [HostEvent::Drag(DragEnd::new(1, 0))]);
    run(&mut host, [HostEvent::Resize { width: 1280 }]);
    assert_eq!(host.snapshot().numbers()[9], 1);

    run(&mut host, [HostEvent::Resize { width: 400 }]);
    assert_eq!(host.snapshot().numbers()[..2], [2, 1]);
}

#[test]
fn add_and_remove_report_fan_out() {
    let storage = Arc::new(MemoryStorage::new());
    let mut host = open(&storage, 1280);
    run(
        &mut host,
        [
            HostEvent::SetColumns(Bucket::One),
            HostEvent::SetColumns(Bucket::Two),
            HostEvent::AddWidget,
        ],
    );
    let snap = host.snapshot();
    assert_eq!(snap.columns_label, "2 Columns (Manual)");
    assert_eq!(snap.numbers().last(), Some(&11));
    assert_eq!(
        snap.status,
        Some(StatusSnapshot {
            text: "Widget added to 2 other layouts".into(),
            tone: StatusTone::Success,
        })
    );

    let added = snap.tiles[10].id.clone();
    run(&mut host, [HostEvent::RemoveWidget(added)]);
    assert_eq!(
        host.snapshot().status.map(|s| s.text),
        Some("Widget removed from 2 other layouts".to_owned())
    );
    assert_eq!(host.snapshot().widgets_label, "10 Widgets");
}

#[test]
fn override_defaults_session() {
    let storage = Arc::new(MemoryStorage::new());
    let mut host = open(&storage, 300);
    // Customize bucket 1, then move to bucket 3 via a manual pin.
    run(
        &mut host,
        [
            HostEvent::RemoveWidget(WidgetId::from("10")),
            HostEvent::SetColumns(Bucket::Three),
            HostEvent::Drag(DragEnd::new(0, 1)),
            HostEvent::SetOverrideDefaults(true),
            HostEvent::SaveLayout,
        ],
    );
    let snap = host.snapshot();
    assert!(snap.override_defaults);
    assert_eq!(
        snap.status.map(|s| s.text),
        Some("Layout saved and synced to 2 default layouts".to_owned())
    );

    let store = host.controller().store();
    assert_eq!(store.load_layout(Bucket::One).len(), 9);
    for bucket in [Bucket::Two, Bucket::Four] {
        let layout = store.load_layout(bucket);
        assert_eq!(layout[0].id.as_str(), "2");
        assert!(store.is_saved(bucket));
    }

    // Nothing left to fill.
    run(&mut host, [HostEvent::SaveLayout]);
    assert_eq!(
        host.snapshot().status,
        Some(StatusSnapshot {
            text: "Layout saved (no defaults to sync)".into(),
            tone: StatusTone::Info,
        })
    );
}

#[test]
fn reload_restores_previous_session() {
    let storage = Arc::new(MemoryStorage::new());
    {
        let mut host = open(&storage, 900);
        run(
            &mut host,
            [
                HostEvent::Drag(DragEnd::new(7, 0)),
                HostEvent::AddWidget,
                HostEvent::Debug,
            ],
        );
    }
    let host = open(&storage, 900);
    let snap = host.snapshot();
    assert_eq!(snap.numbers()[0], 8);
    assert_eq!(snap.numbers().last(), Some(&11));
    assert_eq!(snap.tiles[0].view, "expenses");
    // Live state is per session.
    assert_eq!(snap.status, None);
}

#[test]
fn clear_all_returns_to_auto_defaults() {
    let storage = Arc::new(MemoryStorage::new());
    let mut host = open(&storage, 700);
    run(
        &mut host,
        [
            HostEvent::SetColumns(Bucket::Four),
            HostEvent::SetOverrideDefaults(true),
            HostEvent::AddWidget,
            HostEvent::SaveLayout,
            HostEvent::ClearAll,
        ],
    );
    let snap = host.snapshot();
    assert_eq!(snap.bucket, Bucket::Two);
    assert_eq!(snap.columns_label, "2 Columns (Auto)");
    assert!(!snap.override_defaults);
    assert_eq!(snap.numbers(), (1..=10).collect::<Vec<_>>());
    for bucket in Bucket::ALL {
        assert!(!host.controller().store().is_saved(bucket));
    }
}

#[test]
fn weather_tile_updates_on_refresh() {
    let storage = Arc::new(MemoryStorage::new());
    let mut host = open(&storage, 1280);
    let before = host.snapshot().tiles[0].lines.clone();

    host.advance_time(Duration::from_secs(10));
    let result = host.step();
    assert!(result.weather_refreshed);

    let after = host.snapshot().tiles[0].lines.clone();
    assert_eq!(after.len(), before.len());
    assert_eq!(after[1], "Sunny");
    let reading = host
        .live()
        .weather(&WidgetId::from("1"))
        .expect("weather widget is live");
    assert!((18..=33).contains(&reading.temperature_c));
    assert_eq!(after[0], format!("☀️ {}°C", reading.temperature_c));
}

#[test]
fn text_dump_reflects_grid() {
    let storage = Arc::new(MemoryStorage::new());
    let mut host = open(&storage, 300);
    for w in 2..=10 {
        host.push_event(HostEvent::RemoveWidget(WidgetId::from(w.to_string())));
    }
    host.step();
    assert_eq!(
        host.snapshot().to_text(),
        "1 Column (Auto) | 1 Widget\n\
         [0,0] #1 Weather\n    \
         ☀️ 22°C\n    Sunny\n    Humidity 65%\n    Wind 12 km/h\n"
    );
}
