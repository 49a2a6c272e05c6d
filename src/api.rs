use anyhow::{Context, Result, bail};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::status::DayStatus;

// --- API response types ---

#[derive(Debug, Clone, Deserialize)]
pub struct Habit {
    pub id: i64,
    pub habit_text: String,
}

/// Raw per-date status payload, keyed by `YYYY-MM-DD` strings.
pub type RawCalendar = IndexMap<String, DayStatus>;

#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

// --- Client trait ---

pub trait HabitApi {
    fn get_habits(&self, user_id: i64) -> Result<Vec<Habit>>;
    fn get_calendar(&self, user_id: i64, habit_id: Option<i64>) -> Result<RawCalendar>;
    fn get_health(&self) -> Result<HealthStatus>;
}

// --- HTTP implementation ---

pub struct HttpHabitClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpHabitClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::new();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("GET {url}"))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            bail!("habit API returned {status} for {url}: {body}");
        }

        resp.json::<T>()
            .with_context(|| format!("parsing response from {url}"))
    }
}

impl HabitApi for HttpHabitClient {
    fn get_habits(&self, user_id: i64) -> Result<Vec<Habit>> {
        let base_url = &self.base_url;
        self.get_json(&format!("{base_url}/api/users/{user_id}/habits"))
    }

    fn get_calendar(&self, user_id: i64, habit_id: Option<i64>) -> Result<RawCalendar> {
        let base_url = &self.base_url;
        let url = match habit_id {
            Some(habit_id) => {
                format!("{base_url}/api/users/{user_id}/calendar?habit_id={habit_id}")
            }
            None => format!("{base_url}/api/users/{user_id}/calendar"),
        };
        self.get_json(&url)
    }

    fn get_health(&self) -> Result<HealthStatus> {
        let base_url = &self.base_url;
        self.get_json(&format!("{base_url}/api/health"))
    }
}
