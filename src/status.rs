use std::collections::BTreeMap;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayStatus {
    Good,
    Minimum,
    #[serde(other)]
    NoData,
}

impl DayStatus {
    pub fn is_active(self) -> bool {
        matches!(self, Self::Good | Self::Minimum)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Minimum => "minimum",
            Self::NoData => "no-data",
        }
    }
}

pub fn parse_date_key(key: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT)
        .with_context(|| format!("invalid calendar date key {key:?}"))
}

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusMap {
    days: BTreeMap<NaiveDate, DayStatus>,
}

impl StatusMap {
    pub fn from_raw(raw: &IndexMap<String, DayStatus>) -> Result<Self> {
        let mut days = BTreeMap::new();
        for (key, status) in raw {
            days.insert(parse_date_key(key)?, *status);
        }
        Ok(Self { days })
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn lookup(&self, date: NaiveDate) -> DayStatus {
        self.days.get(&date).copied().unwrap_or(DayStatus::NoData)
    }

    pub fn earliest_date(&self) -> Option<NaiveDate> {
        self.days.keys().next().copied()
    }

    pub fn active_dates(&self) -> Vec<NaiveDate> {
        self.days
            .iter()
            .filter(|(_, status)| status.is_active())
            .map(|(date, _)| *date)
            .collect()
    }
}

impl FromIterator<(NaiveDate, DayStatus)> for StatusMap {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, DayStatus)>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}
