use std::{fmt, str::FromStr};

/// A date with a month granularity, stored as `YYYY-MM`.
///
/// This is the date of a travel page: the day of the trip isn't relevant for the visitors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum YearMonthParseError {
    #[error("invalid year-month `{0}`, expected YYYY-MM")]
    Format(String),
    #[error("invalid month `{0}`, expected a value between 1 and 12")]
    Month(u32),
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, YearMonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(YearMonthParseError::Month(month));
        }
        Ok(Self { year, month })
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = YearMonthParseError;

    /// Parses `YYYY-MM`. A trailing day (`YYYY-MM-DD`) is accepted and ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || YearMonthParseError::Format(s.to_owned());

        let mut parts = s.trim().splitn(3, '-');
        let year = parts
            .next()
            .filter(|y| y.len() == 4)
            .and_then(|y| y.parse::<i32>().ok())
            .ok_or_else(format_err)?;
        let month = parts
            .next()
            .filter(|m| (1..=2).contains(&m.len()))
            .and_then(|m| m.parse::<u32>().ok())
            .ok_or_else(format_err)?;
        if let Some(day) = parts.next() {
            if day.is_empty() || day.parse::<u32>().is_err() {
                return Err(format_err());
            }
        }

        Self::new(year, month)
    }
}

impl From<chrono::NaiveDate> for YearMonth {
    fn from(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike as _;
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{YearMonth, YearMonthParseError};

    #[test]
    fn parse_and_display() {
        let ym: YearMonth = "2017-04".parse().unwrap();
        assert_eq!(ym, YearMonth { year: 2017, month: 4 });
        assert_eq!(ym.to_string(), "2017-04");
    }

    #[test]
    fn day_is_ignored() {
        let ym: YearMonth = "2018-11-23".parse().unwrap();
        assert_eq!(ym.to_string(), "2018-11");
    }

    #[test]
    fn invalid_inputs() {
        assert_eq!(
            "2017".parse::<YearMonth>(),
            Err(YearMonthParseError::Format("2017".to_owned()))
        );
        assert_eq!(
            "17-04".parse::<YearMonth>(),
            Err(YearMonthParseError::Format("17-04".to_owned()))
        );
        assert_eq!(
            "2017-13".parse::<YearMonth>(),
            Err(YearMonthParseError::Month(13))
        );
    }

    #[test]
    fn ordering_follows_time() {
        let a: YearMonth = "2016-12".parse().unwrap();
        let b: YearMonth = "2017-01".parse().unwrap();
        assert!(a < b);
    }
}
