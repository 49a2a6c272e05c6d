use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use serde::Serialize;

use crate::api::Habit;
use crate::stats::{self, MonthlyStats, StreakResult};
use crate::status::{DayStatus, StatusMap};
use crate::week_grid::{self, CalendarDay, WeekRow, YearMonth};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView {
    pub weeks: Vec<WeekRow>,
    pub month_labels: IndexMap<usize, String>,
    pub streaks: StreakResult,
    pub monthly_stats_by_row: IndexMap<usize, MonthlyStats>,
}

fn month_label(month: YearMonth, full: bool) -> String {
    let format = if full { "%B" } else { "%b" };
    month.first_day().format(format).to_string()
}

pub fn compute_calendar_view(map: &StatusMap, today: NaiveDate) -> CalendarView {
    let weeks = week_grid::build_week_grid(map, today);
    let streaks = stats::compute_streaks(map, today);

    let mut month_labels = IndexMap::new();
    let mut monthly_stats_by_row = IndexMap::new();
    for (idx, row) in weeks.iter().enumerate() {
        let starts_month = idx == 0 || weeks[idx - 1].owning_month != row.owning_month;
        if !starts_month {
            continue;
        }
        let full_month = row.first_day().is_some_and(|day| day.date.day() == 1);
        month_labels.insert(idx, month_label(row.owning_month, full_month));
        if full_month {
            monthly_stats_by_row.insert(
                idx,
                stats::monthly_stats(map, row.owning_month.year, row.owning_month.month),
            );
        }
    }

    CalendarView {
        weeks,
        month_labels,
        streaks,
        monthly_stats_by_row,
    }
}

pub fn get_habit_id(habits: &[Habit], habit_name: &str) -> Option<i64> {
    habits
        .iter()
        .find(|habit| habit.habit_text == habit_name)
        .map(|habit| habit.id)
}

// --- Render projection ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySlot {
    Padding,
    Future {
        day: u32,
    },
    Status {
        status: DayStatus,
        day: u32,
        is_today: bool,
    },
}

pub fn project_day(slot: Option<&CalendarDay>) -> DaySlot {
    match slot {
        None => DaySlot::Padding,
        Some(day) if day.is_future => DaySlot::Future {
            day: day.date.day(),
        },
        Some(day) => DaySlot::Status {
            status: day.status.unwrap_or(DayStatus::NoData),
            day: day.date.day(),
            is_today: day.is_today,
        },
    }
}

fn status_glyph(status: DayStatus) -> char {
    match status {
        DayStatus::Good => '#',
        DayStatus::Minimum => '+',
        DayStatus::NoData => '·',
    }
}

fn day_cell_text(slot: Option<&CalendarDay>) -> String {
    match project_day(slot) {
        DaySlot::Padding => "     ".to_string(),
        DaySlot::Future { day } => format!("  {day:>2} "),
        DaySlot::Status {
            status,
            day,
            is_today: true,
        } => format!("[{}{day:>2}]", status_glyph(status)),
        DaySlot::Status { status, .. } => format!("   {} ", status_glyph(status)),
    }
}

pub fn render_text_report(view: &CalendarView, habit_label: &str) -> String {
    let weekday_cells: String = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        .iter()
        .map(|name| format!(" {name} "))
        .collect();

    let mut lines = vec![
        format!("Habit: {habit_label}"),
        format!(
            "Current streak: {}, longest: {}",
            view.streaks.current, view.streaks.longest
        ),
        String::new(),
        format!("{:>9} {weekday_cells}", "").trim_end().to_string(),
    ];

    for (idx, row) in view.weeks.iter().enumerate() {
        let label = view
            .month_labels
            .get(&idx)
            .map(String::as_str)
            .unwrap_or("");
        let mut line = format!("{label:>9} ");
        for slot in &row.days {
            line.push_str(&day_cell_text(slot.as_ref()));
        }
        if let Some(stats) = view.monthly_stats_by_row.get(&idx) {
            line.push_str(&format!("  {}/{} days", stats.active_days, stats.total_days));
        }
        lines.push(line.trim_end().to_string());
    }

    lines.push(String::new());
    lines.push("# good   + minimum   · no data".to_string());

    format!("{}\n", lines.join("\n"))
}
