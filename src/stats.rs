use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::status::StatusMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakResult {
    pub current: u32,
    pub longest: u32,
}

pub fn compute_streaks(map: &StatusMap, today: NaiveDate) -> StreakResult {
    let active = map.active_dates();
    if active.is_empty() {
        return StreakResult {
            current: 0,
            longest: 0,
        };
    }

    let mut longest = 1_u32;
    let mut run = 1_u32;
    for pair in active.windows(2) {
        if (pair[1] - pair[0]).num_days() == 1 {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 1;
        }
    }

    let mut current = 0_u32;
    let mut cursor = today;
    while map.lookup(cursor).is_active() {
        current += 1;
        match cursor.pred_opt() {
            Some(prev) => cursor = prev,
            None => break,
        }
    }

    StreakResult { current, longest }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStats {
    pub active_days: u32,
    pub total_days: u32,
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("valid next month")
    .pred_opt()
    .expect("valid last day")
    .day()
}

pub fn monthly_stats(map: &StatusMap, year: i32, month: u32) -> MonthlyStats {
    let total_days = days_in_month(year, month);
    let active_days = (1..=total_days)
        .filter(|&day| {
            let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid day of month");
            map.lookup(date).is_active()
        })
        .count() as u32;

    MonthlyStats {
        active_days,
        total_days,
    }
}
