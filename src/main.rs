use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use habitcal::api::{HabitApi, HttpHabitClient};
use habitcal::config::{self, OutputFormat, SimpleOutputFormat};
use habitcal::status::StatusMap;
use habitcal::view::{self, CalendarView};
use habitcal::visual_report::build_visual_report_html;

#[derive(Parser, Debug)]
#[clap(version, about = "Habit tracker calendar reporting tool")]
struct Args {
    /// Path to config.json
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Ping the API health endpoint and exit
    #[arg(long)]
    check_health: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    habit: &'a str,
    #[serde(flatten)]
    view: &'a CalendarView,
}

pub fn run(api: &dyn HabitApi, cfg: &config::Config) -> Result<()> {
    let habits = api.get_habits(cfg.user_id)?;
    let (habit_id, habit_label) = match &cfg.habit_name {
        Some(name) => {
            let id = view::get_habit_id(&habits, name)
                .ok_or_else(|| anyhow::anyhow!("no habit found with name {}", name))?;
            (Some(id), name.clone())
        }
        None => (None, "All habits".to_string()),
    };

    let raw = api.get_calendar(cfg.user_id, habit_id)?;
    let map = StatusMap::from_raw(&raw).context("reading calendar payload")?;

    let today = cfg
        .resolution_date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let calendar = view::compute_calendar_view(&map, today);

    match &cfg.output_format {
        OutputFormat::Simple(SimpleOutputFormat::TextPrint) => {
            print!("{}", view::render_text_report(&calendar, &habit_label));
        }
        OutputFormat::Simple(SimpleOutputFormat::JsonPrint) => {
            let report = JsonReport {
                habit: &habit_label,
                view: &calendar,
            };
            let json = serde_json::to_string_pretty(&report).context("serializing report")?;
            println!("{json}");
        }
        OutputFormat::HtmlFile { html_output } => {
            let html = build_visual_report_html(&calendar, &habit_label);
            std::fs::write(html_output, &html)
                .with_context(|| format!("writing {html_output:?}"))?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let cfg = config::load_config(&args.config)?;
    let api = HttpHabitClient::new(&cfg.api_base_url)?;

    if args.check_health {
        let health = api.get_health()?;
        if health.status != "ok" {
            anyhow::bail!("habit API reported status {}", health.status);
        }
        println!("habit API at {} is healthy", cfg.api_base_url);
        return Ok(());
    }

    run(&api, &cfg)
}
