use chrono::{DateTime, FixedOffset, TimeZone};
use interval_selector::api::{IntervalSelector, IntervalSelectorConfig};
use interval_selector::core::{SharedInterval, TimeInterval, Viewport};
use interval_selector::render::NullRenderer;

fn at(day: u32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .expect("utc")
        .with_ymd_and_hms(2024, 1, day, hour, minute, 0)
        .single()
        .expect("valid instant")
}

fn selector() -> IntervalSelector<NullRenderer> {
    let config = IntervalSelectorConfig::new(Viewport::new(400, 35))
        .with_window_start(at(15, 8, 0))
        .with_display_utc_offset_seconds(0);
    IntervalSelector::new(NullRenderer::default(), config).expect("init")
}

fn shared(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> SharedInterval {
    SharedInterval::new(TimeInterval::new(start, end).expect("interval"))
}

#[test]
fn binding_visible_interval_keeps_window() {
    let mut selector = selector();
    selector
        .bind_interval(Some(shared(at(15, 9, 0), at(15, 10, 0))))
        .expect("bind");
    assert_eq!(selector.window_start(), at(15, 8, 0));
}

#[test]
fn binding_hidden_interval_recenters_one_hour_before_start() {
    let mut selector = selector();
    selector
        .bind_interval(Some(shared(at(16, 13, 0), at(16, 14, 0))))
        .expect("bind");
    assert_eq!(selector.window_start(), at(16, 12, 0));
    assert_eq!(selector.display_length_minutes(), 360);
}

#[test]
fn partially_visible_interval_also_recenters() {
    let mut selector = selector();
    selector
        .bind_interval(Some(shared(at(15, 13, 0), at(15, 15, 0))))
        .expect("bind");
    assert_eq!(selector.window_start(), at(15, 12, 0));
}

#[test]
fn show_interval_always_recenters() {
    let mut selector = selector();
    selector
        .bind_interval(Some(shared(at(15, 10, 0), at(15, 11, 0))))
        .expect("bind");
    assert_eq!(selector.window_start(), at(15, 8, 0));

    selector.show_interval().expect("show");
    assert_eq!(selector.window_start(), at(15, 9, 0));
}

#[test]
fn show_interval_without_binding_is_noop() {
    let mut selector = selector();
    selector.show_interval().expect("noop");
    assert_eq!(selector.window_start(), at(15, 8, 0));
}

#[test]
fn rebinding_moves_the_subscription() {
    let mut selector = selector();
    let first = shared(at(15, 9, 0), at(15, 10, 0));
    let second = shared(at(15, 11, 0), at(15, 12, 0));

    selector.bind_interval(Some(first.clone())).expect("bind first");
    assert_eq!(first.listener_count(), 1);

    selector
        .bind_interval(Some(second.clone()))
        .expect("bind second");
    assert_eq!(first.listener_count(), 0);
    assert_eq!(second.listener_count(), 1);
    assert!(selector.interval().expect("bound").ptr_eq(&second));

    selector.render().expect("render");
    first.set_end(at(15, 11, 0)).expect("edit old interval");
    assert!(!selector.needs_redraw());

    selector.bind_interval(None).expect("unbind");
    assert_eq!(second.listener_count(), 0);
    assert!(selector.interval().is_none());
}

#[test]
fn unbinding_clears_hit_test_geometry() {
    let mut selector = selector();
    selector
        .bind_interval(Some(shared(at(15, 9, 0), at(15, 10, 0))))
        .expect("bind");
    selector.render().expect("render");
    assert!(selector.geometry().is_some());

    selector.bind_interval(None).expect("unbind");
    assert!(selector.geometry().is_none());
    selector.render().expect("render");
    assert!(selector.geometry().is_none());
}

#[test]
fn dropping_selector_unsubscribes() {
    let interval = shared(at(15, 9, 0), at(15, 10, 0));
    {
        let mut selector = selector();
        selector
            .bind_interval(Some(interval.clone()))
            .expect("bind");
        assert_eq!(interval.listener_count(), 1);
    }
    assert_eq!(interval.listener_count(), 0);
}

#[test]
fn interval_edits_made_by_other_holders_are_drawn() {
    let mut selector = selector();
    let interval = shared(at(15, 9, 0), at(15, 10, 0));
    selector
        .bind_interval(Some(interval.clone()))
        .expect("bind");
    selector.render().expect("render");
    let before = selector.geometry().expect("geometry");

    interval.set_end_time(12, 0).expect("extend");
    assert!(selector.needs_redraw());
    selector.render().expect("render");
    let after = selector.geometry().expect("geometry");
    assert!(after.body.width > before.body.width);
    assert_eq!(after.body.x, before.body.x);
}
