use chrono::{Duration, NaiveDate};
use habitcal::status::{DayStatus, StatusMap};
use habitcal::view::compute_calendar_view;
use habitcal::visual_report::build_visual_report_html;
use proptest::prelude::*;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn date_strategy(min: NaiveDate, max: NaiveDate) -> impl Strategy<Value = NaiveDate> {
    let span = (max - min).num_days();
    (0..=span).prop_map(move |offset| min + Duration::days(offset))
}

fn status_strategy() -> impl Strategy<Value = DayStatus> {
    prop_oneof![
        Just(DayStatus::Good),
        Just(DayStatus::Minimum),
        Just(DayStatus::NoData),
    ]
}

fn status_map_strategy() -> impl Strategy<Value = StatusMap> {
    prop::collection::btree_map(
        date_strategy(date(2024, 1, 1), date(2026, 12, 31)),
        status_strategy(),
        0..=40,
    )
    .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn prop_one_table_row_per_week(
        map in status_map_strategy(),
        today in date_strategy(date(2024, 6, 1), date(2026, 6, 30)),
    ) {
        let view = compute_calendar_view(&map, today);
        let html = build_visual_report_html(&view, "Habit");

        prop_assert_eq!(html.matches("<tr>").count(), view.weeks.len() + 1);
        prop_assert_eq!(html.matches("</tr>").count(), view.weeks.len() + 1);
        prop_assert_eq!(html.matches("<td").count(), view.weeks.len() * 7);
    }

    #[test]
    fn prop_every_cell_uses_a_known_class(
        map in status_map_strategy(),
        today in date_strategy(date(2024, 6, 1), date(2026, 6, 30)),
    ) {
        let view = compute_calendar_view(&map, today);
        let html = build_visual_report_html(&view, "Habit");

        let pad = html.matches(r#"<td class="pad">"#).count();
        let future = html.matches(r#"<td class="future">"#).count();
        let day = html.matches(r#"<td class="day "#).count();
        prop_assert_eq!(pad + future + day, view.weeks.len() * 7);
    }

    #[test]
    fn prop_today_marker_appears_within_range_only(
        map in status_map_strategy(),
        today in date_strategy(date(2024, 6, 1), date(2026, 6, 30)),
    ) {
        let view = compute_calendar_view(&map, today);
        let html = build_visual_report_html(&view, "Habit");

        let range_start = map.earliest_date().unwrap_or(today);
        let expected = if range_start <= today { 1 } else { 0 };
        prop_assert_eq!(html.matches(r#" today">"#).count(), expected);
    }

    #[test]
    fn prop_stats_spans_match_monthly_stats(
        map in status_map_strategy(),
        today in date_strategy(date(2024, 6, 1), date(2026, 6, 30)),
    ) {
        let view = compute_calendar_view(&map, today);
        let html = build_visual_report_html(&view, "Habit");

        prop_assert_eq!(
            html.matches(r#"<span class="stats">"#).count(),
            view.monthly_stats_by_row.len()
        );
        for stats in view.monthly_stats_by_row.values() {
            let span = format!(
                r#"<span class="stats">{}/{}</span>"#,
                stats.active_days, stats.total_days
            );
            prop_assert!(html.contains(&span));
        }
    }
}
