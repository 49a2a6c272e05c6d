use crate::stats::MonthlyStats;
use crate::view::{CalendarView, DaySlot, project_day};
use crate::week_grid::{CalendarDay, WeekRow};

fn day_cell_html(slot: Option<&CalendarDay>) -> String {
    match project_day(slot) {
        DaySlot::Padding => r#"        <td class="pad"></td>"#.to_string(),
        DaySlot::Future { day } => format!(r#"        <td class="future">{day}</td>"#),
        DaySlot::Status {
            status,
            day,
            is_today: true,
        } => format!(
            r#"        <td class="day {} today">{day}</td>"#,
            status.as_str()
        ),
        DaySlot::Status { status, .. } => {
            format!(r#"        <td class="day {}"></td>"#, status.as_str())
        }
    }
}

fn row_html(row: &WeekRow, label: Option<&str>, stats: Option<&MonthlyStats>) -> String {
    let heading = match (label, stats) {
        (Some(label), Some(stats)) => format!(
            r#"        <th class="month">{} <span class="stats">{}/{}</span></th>"#,
            html_escape::encode_text(label),
            stats.active_days,
            stats.total_days
        ),
        (Some(label), None) => format!(
            r#"        <th class="month">{}</th>"#,
            html_escape::encode_text(label)
        ),
        _ => r#"        <th class="month"></th>"#.to_string(),
    };

    let mut lines = vec!["      <tr>".to_string(), heading];
    for slot in &row.days {
        lines.push(day_cell_html(slot.as_ref()));
    }
    lines.push("      </tr>".to_string());
    lines.join("\n")
}

pub fn build_visual_report_html(view: &CalendarView, habit_label: &str) -> String {
    let rows: Vec<String> = view
        .weeks
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            row_html(
                row,
                view.month_labels.get(&idx).map(String::as_str),
                view.monthly_stats_by_row.get(&idx),
            )
        })
        .collect();

    let body_rows = rows.join("\n");
    let escaped_habit = html_escape::encode_text(habit_label);
    let streak_line = format!(
        r#"  <p class="streaks">Current streak: {}, longest: {}</p>"#,
        view.streaks.current, view.streaks.longest
    );

    let html = [
        "<!DOCTYPE html>",
        r#"<html lang="en">"#,
        "<head>",
        r#"  <meta charset="utf-8">"#,
        r#"  <meta name="viewport" content="width=device-width, initial-scale=1">"#,
        "  <title>Habit Calendar</title>",
        "  <style>",
        "    :root {",
        "      --good: #2b6cb0;",
        "      --minimum: #90cdf4;",
        "      --no-data: #edf2f7;",
        "      --text: #1f1f1f;",
        "    }",
        "    body {",
        "      margin: 24px;",
        r#"      font-family: "Alegreya Sans", "Trebuchet MS", sans-serif;"#,
        "      color: var(--text);",
        "      background: linear-gradient(180deg, #fbf9f4 0%, #f3efe7 100%);",
        "    }",
        "    h1 {",
        "      font-size: 20px;",
        "      margin: 0 0 4px 0;",
        "      letter-spacing: 0.02em;",
        "      text-transform: uppercase;",
        "    }",
        "    p.streaks {",
        "      margin: 0 0 16px 0;",
        "      font-size: 13px;",
        "    }",
        "    table {",
        "      border-collapse: separate;",
        "      border-spacing: 3px;",
        "      background: #fffefc;",
        "      box-shadow: 0 6px 24px rgba(0, 0, 0, 0.08);",
        "      padding: 8px;",
        "    }",
        "    th {",
        "      font-size: 11px;",
        "      font-weight: 700;",
        "      text-align: center;",
        "    }",
        "    th.month {",
        "      text-align: right;",
        "      padding-right: 6px;",
        "      white-space: nowrap;",
        "    }",
        "    th.month .stats {",
        "      font-weight: 400;",
        "      color: #6b6b6b;",
        "    }",
        "    td {",
        "      width: 20px;",
        "      height: 20px;",
        "      border-radius: 3px;",
        "      font-size: 10px;",
        "      text-align: center;",
        "      vertical-align: middle;",
        "    }",
        "    td.day.good { background: var(--good); color: #ffffff; }",
        "    td.day.minimum { background: var(--minimum); }",
        "    td.day.no-data { background: var(--no-data); }",
        "    td.future { color: #a0aec0; }",
        "    td.day.today { outline: 2px solid #2a5d86; outline-offset: -2px; }",
        "    @media (max-width: 760px) {",
        "      body { margin: 12px; }",
        "    }",
        "  </style>",
        "</head>",
        "<body>",
        &format!("  <h1>{escaped_habit}</h1>"),
        &streak_line,
        "  <table>",
        "    <thead>",
        "      <tr>",
        r#"        <th class="month"></th>"#,
        "        <th>Mon</th>",
        "        <th>Tue</th>",
        "        <th>Wed</th>",
        "        <th>Thu</th>",
        "        <th>Fri</th>",
        "        <th>Sat</th>",
        "        <th>Sun</th>",
        "      </tr>",
        "    </thead>",
        "    <tbody>",
        &body_rows,
        "    </tbody>",
        "  </table>",
        "</body>",
        "</html>",
    ];

    format!("{}\n", html.join("\n"))
}
