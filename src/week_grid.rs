use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::status::{DayStatus, StatusMap};

pub const FUTURE_HORIZON_DAYS: i64 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("valid month start")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_future: bool,
    pub is_today: bool,
    pub status: Option<DayStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekRow {
    pub monday: NaiveDate,
    pub days: [Option<CalendarDay>; 7],
    pub owning_month: YearMonth,
}

impl WeekRow {
    pub fn first_day(&self) -> Option<&CalendarDay> {
        self.days.iter().flatten().next()
    }

    pub fn last_day(&self) -> Option<&CalendarDay> {
        self.days.iter().flatten().next_back()
    }
}

pub fn previous_monday(day: NaiveDate) -> NaiveDate {
    let days_since_monday = (day.weekday().num_days_from_monday()) as i64;
    day - Duration::days(days_since_monday)
}

fn week_days(
    monday: NaiveDate,
    range_start: NaiveDate,
    today: NaiveDate,
    map: &StatusMap,
) -> [Option<CalendarDay>; 7] {
    std::array::from_fn(|offset| {
        let date = monday + Duration::days(offset as i64);
        if date < range_start {
            return None;
        }
        let is_future = date > today;
        Some(CalendarDay {
            date,
            is_future,
            is_today: date == today,
            status: if is_future { None } else { Some(map.lookup(date)) },
        })
    })
}

fn split_week(monday: NaiveDate, days: [Option<CalendarDay>; 7]) -> Vec<WeekRow> {
    let unsplit = |owning_month| {
        vec![WeekRow {
            monday,
            days,
            owning_month,
        }]
    };

    let (first, last) = match (days.iter().flatten().next(), days.iter().flatten().next_back()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return unsplit(YearMonth::of(monday)),
    };
    if YearMonth::of(first.date) == YearMonth::of(last.date) {
        return unsplit(YearMonth::of(first.date));
    }

    // A 7-day window crosses at most one month boundary.
    let Some(split) = (1..7).find(|&j| {
        let prev = monday + Duration::days(j as i64 - 1);
        let date = monday + Duration::days(j as i64);
        prev.month() != date.month()
    }) else {
        return unsplit(YearMonth::of(first.date));
    };

    let mut later = days;
    for slot in &mut later[..split] {
        *slot = None;
    }
    let mut earlier = days;
    for slot in &mut earlier[split..] {
        *slot = None;
    }

    vec![
        WeekRow {
            monday,
            days: later,
            owning_month: YearMonth::of(monday + Duration::days(split as i64)),
        },
        WeekRow {
            monday,
            days: earlier,
            owning_month: YearMonth::of(first.date),
        },
    ]
}

pub fn build_week_grid(map: &StatusMap, today: NaiveDate) -> Vec<WeekRow> {
    let range_start = map.earliest_date().unwrap_or(today);
    let last_monday = previous_monday(today + Duration::days(FUTURE_HORIZON_DAYS));
    let start_monday = previous_monday(range_start);
    let num_weeks = ((last_monday - start_monday).num_days() / 7).max(0) + 1;

    let mut rows = Vec::new();
    for week_offset in 0..num_weeks {
        let monday = last_monday - Duration::days(7 * week_offset);
        rows.extend(split_week(monday, week_days(monday, range_start, today, map)));
    }
    rows.reverse();
    rows
}
