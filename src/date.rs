/// A date-only value derived from spreadsheet day serials. Serial 25569 is
/// 1970-01-01; fractional time components are truncated away before a serial
/// reaches this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date(time::Date);

impl Date {
    /// Day serial of 1970-01-01.
    pub const UNIX_EPOCH_SERIAL: i64 = 25_569;

    /// Julian day number of 1970-01-01.
    const UNIX_EPOCH_JULIAN_DAY: i64 = 2_440_588;

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u8 {
        u8::from(self.0.month())
    }

    pub fn day(self) -> u8 {
        self.0.day()
    }

    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .map(Self)
    }

    /// Converts a positive integer day serial to a calendar date. Zero and
    /// negative serials mean "no date" and yield `None`.
    pub fn from_serial(serial: i64) -> Option<Self> {
        if serial <= 0 {
            return None;
        }
        let jd = serial - Self::UNIX_EPOCH_SERIAL + Self::UNIX_EPOCH_JULIAN_DAY;
        time::Date::from_julian_day(i32::try_from(jd).ok()?)
            .ok()
            .map(Self)
    }

    pub fn serial(self) -> i64 {
        i64::from(self.0.to_julian_day()) - Self::UNIX_EPOCH_JULIAN_DAY + Self::UNIX_EPOCH_SERIAL
    }

    /// The immediately preceding calendar date, crossing month and year
    /// boundaries.
    pub fn previous(self) -> Option<Self> {
        self.0.previous_day().map(Self)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("expected yyyy-mm-dd")]
    BadFormat,
    #[error(transparent)]
    BadNumber(#[from] std::num::ParseIntError),
    #[error("no such calendar date")]
    OutOfRange,
}

impl std::str::FromStr for Date {
    type Err = ParseError;

    /// Parses a `yyyy-mm-dd` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Self::Err::Empty);
        }
        let mut parts = s.splitn(3, '-');
        let (y, m, d) = match (parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d)) => (y, m, d),
            _ => return Err(Self::Err::BadFormat),
        };
        Self::from_ymd(y.parse()?, m.parse()?, d.parse()?).ok_or(Self::Err::OutOfRange)
    }
}

impl TryFrom<&str> for Date {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
