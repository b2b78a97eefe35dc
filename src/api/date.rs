use chrono::{Duration, Local, NaiveDate};
use std::fmt;

/// Calendar date a schedule is requested for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameDate(NaiveDate);

impl GameDate {
    pub fn new(date: NaiveDate) -> Self {
        GameDate(date)
    }

    /// Today in the viewer's local calendar
    pub fn today() -> Self {
        GameDate(Local::now().date_naive())
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(GameDate)
    }

    /// Parse a `yyyy-MM-dd` string
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map(GameDate)
    }

    pub fn add_days(&self, days: i64) -> Self {
        GameDate(self.0 + Duration::days(days))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Format used in API paths (`yyyy-MM-dd`)
    pub fn to_api_string(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_api_string())
    }
}
