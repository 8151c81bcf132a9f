use crate::Actor;
use crate::Record;
use crate::Recordset;

/// Either every value of a filter level or one concrete value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Choice<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Choice<T> {
    /// Label of the unconstrained state in string forms.
    pub const ALL_LABEL: &str = "All";

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn matches(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Self::All => true,
            Self::Only(v) => v == value,
        }
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::All => None,
            Self::Only(v) => Some(v),
        }
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL_LABEL),
            Self::Only(v) => v.fmt(f),
        }
    }
}

impl<T: std::str::FromStr> std::str::FromStr for Choice<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_LABEL {
            Ok(Self::All)
        } else {
            s.parse::<T>().map(Self::Only)
        }
    }
}

/// The operator's current filter tuple. Sector, year and month may be
/// unconstrained; the day level is always a concrete day-of-month.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Selection {
    query: String,
    sector: Choice<String>,
    year: Choice<i32>,
    month: Choice<u8>,
    day: u8,
}

impl Selection {
    /// Fallback day-of-month used whenever the day resets. Every month has a
    /// day 1, so a reset selection can never point at an impossible day.
    pub const DEFAULT_DAY: u8 = 1;

    /// Initial state for the given actor. Restricted actors start pinned to
    /// their own sector.
    pub fn for_actor(actor: &Actor) -> Self {
        Self {
            query: String::new(),
            sector: match actor.sector() {
                Some(s) => Choice::Only(s.to_string()),
                None => Choice::All,
            },
            year: Choice::All,
            month: Choice::All,
            day: Self::DEFAULT_DAY,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sector(&self) -> &Choice<String> {
        &self.sector
    }

    pub fn year(&self) -> Choice<i32> {
        self.year
    }

    pub fn month(&self) -> Choice<u8> {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_sector(&mut self, sector: Choice<String>) {
        self.sector = sector;
    }

    /// Selecting a year invalidates the narrower levels: the month returns
    /// to `All` and the day falls back to the default.
    pub fn set_year(&mut self, year: Choice<i32>) {
        self.year = year;
        self.month = Choice::All;
        self.day = Self::DEFAULT_DAY;
    }

    /// Selecting a month resets the day to the default.
    pub fn set_month(&mut self, month: Choice<u8>) {
        self.month = month;
        self.day = Self::DEFAULT_DAY;
    }

    pub fn set_day(&mut self, day: u8) {
        self.day = day;
    }

    /// Points year, month and day at the most recent dated record, the state
    /// a fresh load lands in. A store without dates leaves the selection
    /// unchanged.
    pub fn focus_latest(&mut self, records: &Recordset) {
        if let Some(dt) = records.iter().filter_map(Record::date).max() {
            self.year = Choice::Only(dt.year());
            self.month = Choice::Only(dt.month());
            self.day = dt.day();
        }
    }

    /// Back to the actor's initial state.
    pub fn clear(&mut self, actor: &Actor) {
        *self = Self::for_actor(actor);
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::for_actor(&Actor::unrestricted())
    }
}
