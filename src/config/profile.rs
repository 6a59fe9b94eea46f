//! Component inputs: the user record and the counter seed

use crate::components::UserRecord;
use chrono::NaiveDate;
use serde::Deserialize;

// ─────────────────────────────────────────────────────────────────────────────
// Profile
// ─────────────────────────────────────────────────────────────────────────────

/// Record shown by the user-info panel
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileConfig {
    pub name: String,
    pub age: u32,
    pub address: String,
    /// None = the day the page is built
    pub date_of_birth: Option<NaiveDate>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        let sample = UserRecord::sample(NaiveDate::MIN);
        Self {
            name: sample.name,
            age: sample.age,
            address: sample.address,
            date_of_birth: None,
        }
    }
}

/// Profile as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileProfile {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub address: Option<String>,
    /// `YYYY-MM-DD` string
    pub date_of_birth: Option<NaiveDate>,
}

impl ProfileConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileProfile>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            name: file.name.unwrap_or(defaults.name),
            age: file.age.unwrap_or(defaults.age),
            address: file.address.unwrap_or(defaults.address),
            date_of_birth: file.date_of_birth.or(defaults.date_of_birth),
        }
    }

    /// Build the component input, filling an unset birth date with `today`
    pub fn record(&self, today: NaiveDate) -> UserRecord {
        UserRecord {
            name: self.name.clone(),
            age: self.age,
            address: self.address.clone(),
            date_of_birth: self.date_of_birth.unwrap_or(today),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Counter
// ─────────────────────────────────────────────────────────────────────────────

/// Dynamic counter seed
#[derive(Debug, Clone, PartialEq)]
pub struct CounterConfig {
    pub initial: i64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self { initial: 5 }
    }
}

/// Counter settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileCounter {
    pub initial: Option<i64>,
}

impl CounterConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileCounter>) -> Self {
        let file = file.unwrap_or_default();
        Self {
            initial: file.initial.unwrap_or(Self::default().initial),
        }
    }
}
