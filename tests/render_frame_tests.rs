use chrono::{DateTime, FixedOffset, TimeZone};
use interval_selector::SelectorError;
use interval_selector::api::{
    BORDER_WIDTH_PX, INTERVAL_TOP_PX, IntervalSelector, IntervalSelectorConfig, KNOB_WIDTH_PX,
    RulerLineKind, SelectorStyle,
};
use interval_selector::core::{SharedInterval, TimeInterval, Viewport};
use interval_selector::render::{Color, FontWeight, NullRenderer, TextHAlign};

fn utc(day: u32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .expect("utc")
        .with_ymd_and_hms(2024, 1, day, hour, minute, 0)
        .single()
        .expect("valid instant")
}

fn selector_at(
    window_start: DateTime<FixedOffset>,
    offset_seconds: i32,
) -> IntervalSelector<NullRenderer> {
    let config = IntervalSelectorConfig::new(Viewport::new(400, 35))
        .with_window_start(window_start)
        .with_display_utc_offset_seconds(offset_seconds);
    IntervalSelector::new(NullRenderer::default(), config).expect("init")
}

#[test]
fn ruler_has_one_line_per_half_hour_and_hour_labels() {
    let selector = selector_at(utc(15, 8, 0), 0);
    let scene = selector.build_render_frame().expect("frame");

    assert_eq!(scene.frame.lines.len(), 13);
    assert_eq!(scene.frame.lines[0].x1, BORDER_WIDTH_PX);
    let style = SelectorStyle::default();
    assert_eq!(scene.frame.lines[0].color, style.hour_line_color);
    assert_eq!(scene.frame.lines[1].color, style.half_hour_line_color);
    // Half-hour lines start under the date band, hour lines at the top.
    assert_eq!(scene.frame.lines[0].y1, BORDER_WIDTH_PX);
    assert_eq!(scene.frame.lines[1].y1, BORDER_WIDTH_PX + 11.0);

    let labels: Vec<&str> = scene
        .frame
        .underlay_texts
        .iter()
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(
        labels,
        vec!["8", "9", "10", "11", "12", "13", "14", "15/01/2024"]
    );
    assert!(scene.frame.texts.is_empty());
    assert!(scene.geometry.is_none());
}

#[test]
fn date_label_defaults_to_left_edge_in_bold() {
    let selector = selector_at(utc(15, 8, 0), 0);
    let scene = selector.build_render_frame().expect("frame");
    let date = scene.frame.underlay_texts.last().expect("date label");

    assert_eq!(date.text, "15/01/2024");
    assert_eq!(date.x, 5.0);
    assert_eq!(date.weight, FontWeight::Bold);
    assert_eq!(date.color, SelectorStyle::default().day_line_color);
}

#[test]
fn day_boundary_moves_date_label_to_new_day() {
    let selector = selector_at(utc(15, 22, 0), 0);
    let lines = selector.ruler_lines().expect("lines");
    let day_line = lines
        .iter()
        .find(|line| line.kind == RulerLineKind::Day)
        .expect("midnight inside window");
    assert_eq!(day_line.instant, utc(16, 0, 0));
    assert_eq!(day_line.x, 133.0);

    let scene = selector.build_render_frame().expect("frame");
    let date = scene.frame.underlay_texts.last().expect("date label");
    assert_eq!(date.text, "16/01/2024");
    assert_eq!(date.x, day_line.x + 2.0);
    assert!(scene.frame.underlay_texts.iter().any(|text| text.text == "0"));
}

#[test]
fn day_boundary_follows_display_offset() {
    // 22:00 UTC is 00:00 at +02:00: the first line already lies on the new
    // day, so no day line is drawn and the label shows the 16th.
    let selector = selector_at(utc(15, 22, 0), 2 * 3600);
    let lines = selector.ruler_lines().expect("lines");
    assert!(lines.iter().all(|line| line.kind != RulerLineKind::Day));

    let scene = selector.build_render_frame().expect("frame");
    let date = scene.frame.underlay_texts.last().expect("date label");
    assert_eq!(date.text, "16/01/2024");
    assert_eq!(scene.frame.underlay_texts[0].text, "0");
}

#[test]
fn half_hour_offset_shifts_ruler_boundaries() {
    // +05:30 turns 08:00 UTC into 13:30 local, a half-hour line.
    let selector = selector_at(utc(15, 8, 0), 5 * 3600 + 1800);
    let lines = selector.ruler_lines().expect("lines");
    assert_eq!(lines[0].kind, RulerLineKind::HalfHour);
    assert_eq!(lines[1].kind, RulerLineKind::Hour);
    assert_eq!(lines[0].x, BORDER_WIDTH_PX);
}

#[test]
fn interval_overlay_has_body_knobs_and_time_labels() {
    let mut selector = selector_at(utc(15, 8, 0), 0);
    let interval =
        SharedInterval::new(TimeInterval::new(utc(15, 9, 0), utc(15, 11, 30)).expect("interval"));
    selector.bind_interval(Some(interval)).expect("bind");

    let scene = selector.build_render_frame().expect("frame");
    let geometry = scene.geometry.expect("interval visible");
    assert_eq!(geometry.body.x, 67.0);
    assert_eq!(geometry.body.y, INTERVAL_TOP_PX);
    assert_eq!(geometry.body.bottom(), 34.0);
    assert_eq!(geometry.start_knob.width, KNOB_WIDTH_PX);
    assert_eq!(geometry.end_knob.right(), geometry.body.right());

    let style = SelectorStyle::default();
    // Component border, interval body, two knobs.
    assert_eq!(scene.frame.rects.len(), 4);
    assert_eq!(scene.frame.rects[1].fill_color, style.interval_fill_color);
    assert_eq!(scene.frame.rects[2].fill_color, style.knob_color);
    assert_eq!(scene.frame.rects[3].fill_color, style.knob_color);

    // Interval labels sit on the top text layer, above the body.
    assert_eq!(scene.frame.texts.len(), 2);
    let start_label = &scene.frame.texts[0];
    let end_label = &scene.frame.texts[1];
    assert_eq!(start_label.text, "09:00");
    assert_eq!(start_label.h_align, TextHAlign::Left);
    assert_eq!(start_label.x, geometry.body.x + KNOB_WIDTH_PX + 2.0);
    assert_eq!(end_label.text, "11:30");
    assert_eq!(end_label.h_align, TextHAlign::Right);
    assert!(end_label.y > start_label.y);
}

#[test]
fn interval_labels_use_display_offset() {
    let mut selector = selector_at(utc(15, 8, 0), 3600);
    let interval =
        SharedInterval::new(TimeInterval::new(utc(15, 9, 0), utc(15, 10, 0)).expect("interval"));
    selector.bind_interval(Some(interval)).expect("bind");

    let scene = selector.build_render_frame().expect("frame");
    let texts: Vec<&str> = scene.frame.texts.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["10:00", "11:00"]);
}

#[test]
fn interval_outside_window_is_not_drawn() {
    let mut selector = selector_at(utc(15, 8, 0), 0);
    let interval =
        SharedInterval::new(TimeInterval::new(utc(15, 9, 0), utc(15, 10, 0)).expect("interval"));
    selector.bind_interval(Some(interval)).expect("bind");
    selector
        .set_window_start(utc(15, 12, 0))
        .expect("window start");

    let scene = selector.build_render_frame().expect("frame");
    assert!(scene.geometry.is_none());
    assert_eq!(scene.frame.rects.len(), 1);
}

#[test]
fn disabled_selector_renders_background_only() {
    let mut selector = selector_at(utc(15, 8, 0), 0);
    let interval =
        SharedInterval::new(TimeInterval::new(utc(15, 9, 0), utc(15, 10, 0)).expect("interval"));
    selector.bind_interval(Some(interval)).expect("bind");
    selector.set_enabled(false);

    let scene = selector.build_render_frame().expect("frame");
    assert!(scene.frame.is_empty());
    assert_eq!(scene.frame.background, Color::gray8(235));
    assert!(scene.geometry.is_none());

    selector.render().expect("render");
    assert!(selector.geometry().is_none());
    assert_eq!(selector.renderer().last_rect_count, 0);
}

#[test]
fn render_clears_pending_redraw_and_counts_primitives() {
    let mut selector = selector_at(utc(15, 8, 0), 0);
    assert!(selector.needs_redraw());

    selector.render().expect("render");
    assert!(!selector.needs_redraw());
    assert_eq!(selector.renderer().frames_rendered, 1);
    assert_eq!(selector.renderer().last_line_count, 13);
    assert_eq!(selector.renderer().last_text_count, 8);
}

fn instant(year: i32, month: u32, day: u32, hour: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .expect("utc")
        .with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid instant")
}

// 362 px leaves a 360 px plot: one pixel per minute of a six-hour window.
fn selector_with_span(
    window_start: DateTime<FixedOffset>,
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
) -> IntervalSelector<NullRenderer> {
    let config = IntervalSelectorConfig::new(Viewport::new(362, 35))
        .with_window_start(window_start)
        .with_display_utc_offset_seconds(0);
    let mut selector = IntervalSelector::new(NullRenderer::default(), config).expect("init");
    selector
        .bind_interval(Some(SharedInterval::new(
            TimeInterval::new(start, end).expect("interval"),
        )))
        .expect("bind");
    selector
}

#[test]
fn interval_spanning_month_end_uses_real_time_difference() {
    let selector = selector_with_span(
        instant(2024, 1, 31, 22),
        instant(2024, 1, 31, 23),
        instant(2024, 2, 1, 1),
    );
    let scene = selector.build_render_frame().expect("frame");
    let geometry = scene.geometry.expect("interval visible");
    assert_eq!(geometry.body.x, 61.0);
    assert_eq!(geometry.body.width, 120.0);

    let date = scene.frame.underlay_texts.last().expect("date label");
    assert_eq!(date.text, "01/02/2024");
    assert_eq!(date.x, 123.0);
}

#[test]
fn interval_spanning_year_end_uses_real_time_difference() {
    let selector = selector_with_span(
        instant(2024, 12, 31, 22),
        instant(2024, 12, 31, 23),
        instant(2025, 1, 1, 1),
    );
    let scene = selector.build_render_frame().expect("frame");
    let geometry = scene.geometry.expect("interval visible");
    assert_eq!(geometry.body.x, 61.0);
    assert_eq!(geometry.body.width, 120.0);

    let labels: Vec<&str> = scene.frame.texts.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(labels, vec!["23:00", "01:00"]);
    let date = scene.frame.underlay_texts.last().expect("date label");
    assert_eq!(date.text, "01/01/2025");
}

#[test]
fn display_offset_change_keeps_window_instant_and_relabels_ruler() {
    let mut selector = selector_at(utc(15, 8, 0), 0);
    selector.render().expect("render");

    selector
        .set_display_utc_offset_seconds(3600)
        .expect("valid offset");
    assert!(selector.needs_redraw());
    assert_eq!(selector.window_start(), utc(15, 8, 0));
    assert_eq!(selector.window_start().offset().local_minus_utc(), 3600);

    let scene = selector.build_render_frame().expect("frame");
    assert_eq!(scene.frame.underlay_texts[0].text, "9");

    let err = selector
        .set_display_utc_offset_seconds(15 * 3600)
        .expect_err("offset out of range");
    assert!(matches!(err, SelectorError::InvalidArgument(_)));
}

#[test]
fn style_change_is_drawn_and_enabled_flag_is_reported() {
    let mut selector = selector_at(utc(15, 8, 0), 0);
    assert!(selector.is_enabled());

    let style = SelectorStyle {
        background_color: Color::gray8(200),
        ..SelectorStyle::default()
    };
    selector.set_style(style).expect("valid style");
    let scene = selector.build_render_frame().expect("frame");
    assert_eq!(scene.frame.background, Color::gray8(200));

    selector.set_enabled(false);
    assert!(!selector.is_enabled());
}

#[test]
fn window_start_near_end_of_time_range_is_rejected() {
    let mut selector = selector_at(utc(15, 8, 0), 0);
    let late = DateTime::<chrono::Utc>::MAX_UTC.fixed_offset() - chrono::TimeDelta::hours(2);

    let err = selector.set_window_start(late).expect_err("end not representable");
    assert!(matches!(err, SelectorError::InvalidArgument(_)));
    assert_eq!(selector.window_start(), utc(15, 8, 0));
    assert_eq!(selector.window_end(), utc(15, 14, 0));
}

#[test]
fn binding_interval_near_end_of_time_range_fails_without_breaking_render() {
    let mut selector = selector_at(utc(15, 8, 0), 0);
    let late = DateTime::<chrono::Utc>::MAX_UTC.fixed_offset() - chrono::TimeDelta::hours(1);
    let interval = SharedInterval::new(TimeInterval::starting_at(late));

    assert!(selector.bind_interval(Some(interval.clone())).is_err());
    assert!(selector.interval().expect("still bound").ptr_eq(&interval));
    assert_eq!(selector.window_start(), utc(15, 8, 0));

    selector.render().expect("render");
    assert!(selector.geometry().is_none());
}
