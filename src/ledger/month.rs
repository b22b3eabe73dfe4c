//! Calendar Month Module
//! The twelve fixed month names the ledger is keyed by.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown month: {0}")]
pub struct MonthParseError(pub String);

/// Calendar month in fixed January..December order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub enum Month {
    #[default]
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Three-letter label used on chart axes.
    pub fn short_name(self) -> &'static str {
        &self.name()[..3]
    }

    /// Zero-based position in the year.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Month> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MonthParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_are_in_calendar_order() {
        for (i, month) in Month::ALL.iter().enumerate() {
            assert_eq!(month.index(), i);
            assert_eq!(Month::from_index(i), Some(*month));
        }
        assert_eq!(Month::from_index(12), None);
        assert_eq!(Month::ALL[11].name(), "December");
    }

    #[test]
    fn default_month_is_january() {
        assert_eq!(Month::default(), Month::January);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("march".parse::<Month>(), Ok(Month::March));
        assert_eq!(" September ".parse::<Month>(), Ok(Month::September));
        assert!("Smarch".parse::<Month>().is_err());
    }

    #[test]
    fn short_names_are_three_letters() {
        assert_eq!(Month::May.short_name(), "May");
        assert_eq!(Month::October.short_name(), "Oct");
    }
}
