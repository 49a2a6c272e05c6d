use chrono::{Datelike, Duration, NaiveDate};
use habitcal::status::{DayStatus, StatusMap};
use habitcal::view::{compute_calendar_view, render_text_report};
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
    fn prop_month_labels_mark_month_changes(
        map in status_map_strategy(),
        today in date_strategy(date(2024, 6, 1), date(2026, 6, 30)),
    ) {
        let view = compute_calendar_view(&map, today);
        for (idx, row) in view.weeks.iter().enumerate() {
            let starts_month =
                idx == 0 || view.weeks[idx - 1].owning_month != row.owning_month;
            prop_assert_eq!(view.month_labels.contains_key(&idx), starts_month);
        }
    }

    #[test]
    fn prop_stats_attach_to_labeled_full_months(
        map in status_map_strategy(),
        today in date_strategy(date(2024, 6, 1), date(2026, 6, 30)),
    ) {
        let view = compute_calendar_view(&map, today);
        for idx in view.monthly_stats_by_row.keys() {
            prop_assert!(view.month_labels.contains_key(idx));
        }
        for idx in view.month_labels.keys() {
            let row = &view.weeks[*idx];
            let full_month = row.first_day().is_some_and(|day| day.date.day() == 1);
            prop_assert_eq!(view.monthly_stats_by_row.contains_key(idx), full_month);
        }
    }

    #[test]
    fn prop_text_report_shape(
        map in status_map_strategy(),
        today in date_strategy(date(2024, 6, 1), date(2026, 6, 30)),
    ) {
        let view = compute_calendar_view(&map, today);
        let report = render_text_report(&view, "Habit");

        prop_assert!(report.ends_with('\n'));
        let lines: Vec<&str> = report.lines().collect();
        prop_assert_eq!(lines.len(), view.weeks.len() + 6);
        for line in &lines {
            prop_assert_eq!(line.trim_end(), *line);
        }
        prop_assert_eq!(lines[0], "Habit: Habit");
        prop_assert_eq!(lines[lines.len() - 1], "# good   + minimum   · no data");
    }
}
