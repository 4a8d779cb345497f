//! Timestamp markup, `<t:{unix}:{style}>`, rendered by clients in the reader's locale and timezone.

use std::{fmt, str::FromStr};

use sdk::Timestamp;

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimestampStyle {
    /// `16:20`
    ShortTime,
    /// `16:20:30`
    LongTime,
    /// `20/04/2021`
    ShortDate,
    /// `20 April 2021`
    LongDate,
    /// `20 April 2021 16:20`
    LongDateWithShortTime,
    /// `Tuesday, 20 April 2021 16:20`
    LongDateWithDayOfWeekAndShortTime,
    /// `2 months ago`
    Relative,
}

impl TimestampStyle {
    pub const ALL: [TimestampStyle; 7] = [
        TimestampStyle::ShortTime,
        TimestampStyle::LongTime,
        TimestampStyle::ShortDate,
        TimestampStyle::LongDate,
        TimestampStyle::LongDateWithShortTime,
        TimestampStyle::LongDateWithDayOfWeekAndShortTime,
        TimestampStyle::Relative,
    ];

    pub const fn code(self) -> char {
        match self {
            TimestampStyle::ShortTime => 't',
            TimestampStyle::LongTime => 'T',
            TimestampStyle::ShortDate => 'd',
            TimestampStyle::LongDate => 'D',
            TimestampStyle::LongDateWithShortTime => 'f',
            TimestampStyle::LongDateWithDayOfWeekAndShortTime => 'F',
            TimestampStyle::Relative => 'R',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            TimestampStyle::ShortTime => "ShortTime",
            TimestampStyle::LongTime => "LongTime",
            TimestampStyle::ShortDate => "ShortDate",
            TimestampStyle::LongDate => "LongDate",
            TimestampStyle::LongDateWithShortTime => "LongDateWithShortTime",
            TimestampStyle::LongDateWithDayOfWeekAndShortTime => "LongDateWithDayOfWeekAndShortTime",
            TimestampStyle::Relative => "Relative",
        }
    }
}

impl fmt::Display for TimestampStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<char> for TimestampStyle {
    type Error = Error;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        match TimestampStyle::ALL.into_iter().find(|style| style.code() == code) {
            Some(style) => Ok(style),
            None => Err(Error::ValueError(format!("Unknown timestamp style code '{code}'").into())),
        }
    }
}

/// Accepts either the style name (`"Relative"`) or its code (`"R"`)
impl FromStr for TimestampStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(style) = TimestampStyle::ALL.into_iter().find(|style| style.name() == s) {
            return Ok(style);
        }

        let mut chars = s.chars();

        match (chars.next(), chars.next()) {
            (Some(code), None) => TimestampStyle::try_from(code),
            _ => Err(Error::ValueError(format!("Unknown timestamp style \"{s}\"").into())),
        }
    }
}

pub fn create_timestamp_for_unix_timestamp(style: TimestampStyle, unix_seconds: i64) -> String {
    format!("<t:{unix_seconds}:{}>", style.code())
}

pub fn create_timestamp_for_datetime(style: TimestampStyle, datetime: Timestamp) -> String {
    create_timestamp_for_unix_timestamp(style, datetime.assume_utc().unix_timestamp())
}

pub fn create_timestamp_for_now(style: TimestampStyle) -> String {
    create_timestamp_for_datetime(style, Timestamp::now_utc())
}
