//! Backup generations and the rule deciding which one a run belongs to

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Retention tier of an archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Generation {
    Daily,
    Weekly,
    Monthly,
}

impl Generation {
    /// All generations, in the order deletions are reported
    pub const ALL: [Generation; 3] = [Generation::Daily, Generation::Weekly, Generation::Monthly];

    /// Tag used inside archive names
    pub fn as_str(&self) -> &'static str {
        match self {
            Generation::Daily => "daily",
            Generation::Weekly => "weekly",
            Generation::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Generation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Generation::Daily),
            "weekly" => Ok(Generation::Weekly),
            "monthly" => Ok(Generation::Monthly),
            other => Err(format!("unknown generation: {}", other)),
        }
    }
}

/// Decide which generation a backup taken on `date` belongs to.
///
/// The monthly rule wins over the weekly one, so a date matching both is
/// always monthly. `weekly_day` counts from Monday (0) to Sunday (6).
pub fn classify(date: NaiveDate, monthly_day: u32, weekly_day: u32) -> Generation {
    if date.day() == monthly_day {
        Generation::Monthly
    } else if date.weekday().num_days_from_monday() == weekly_day {
        Generation::Weekly
    } else {
        Generation::Daily
    }
}
