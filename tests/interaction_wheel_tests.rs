use chrono::{FixedOffset, TimeZone};
use interval_selector::api::{IntervalSelector, IntervalSelectorConfig, WHEEL_STEP_MINUTES};
use interval_selector::core::Viewport;
use interval_selector::render::NullRenderer;

fn build_selector(display_length_minutes: u32) -> IntervalSelector<NullRenderer> {
    let start = FixedOffset::east_opt(0)
        .expect("utc")
        .with_ymd_and_hms(2024, 1, 15, 8, 0, 0)
        .single()
        .expect("start");
    let config = IntervalSelectorConfig::new(Viewport::new(400, 35))
        .with_window_start(start)
        .with_display_utc_offset_seconds(0)
        .with_display_length_minutes(display_length_minutes);
    IntervalSelector::new(NullRenderer::default(), config).expect("init")
}

#[test]
fn wheel_notch_changes_length_by_fifteen_minutes() {
    let mut selector = build_selector(360);
    let start = selector.window_start();

    assert!(selector.wheel(1));
    assert_eq!(
        selector.display_length_minutes(),
        360 + u32::try_from(WHEEL_STEP_MINUTES).expect("step")
    );

    assert!(selector.wheel(-2));
    assert_eq!(selector.display_length_minutes(), 345);
    assert_eq!(selector.window_start(), start);
}

#[test]
fn wheel_stops_at_range_limits() {
    let mut selector = build_selector(1440);
    assert!(!selector.wheel(1));
    assert_eq!(selector.display_length_minutes(), 1440);

    let mut selector = build_selector(180);
    assert!(!selector.wheel(-1));
    assert_eq!(selector.display_length_minutes(), 180);
    assert!(selector.wheel(1));
    assert_eq!(selector.display_length_minutes(), 195);
}

#[test]
fn wheel_step_crossing_limit_is_ignored_entirely() {
    let mut selector = build_selector(1430);
    assert!(!selector.wheel(1));
    assert_eq!(selector.display_length_minutes(), 1430);
}

#[test]
fn wheel_is_ignored_while_disabled_or_without_notches() {
    let mut selector = build_selector(360);
    assert!(!selector.wheel(0));

    selector.set_enabled(false);
    assert!(!selector.wheel(1));
    assert_eq!(selector.display_length_minutes(), 360);
}

#[test]
fn wheel_requests_redraw() {
    let mut selector = build_selector(360);
    selector.render().expect("render");
    assert!(!selector.needs_redraw());

    selector.wheel(1);
    assert!(selector.needs_redraw());
}
