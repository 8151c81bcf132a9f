use crate::Actor;
use crate::Selection;

/// One active employee in the externally maintained registry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RosterEntry {
    #[serde(rename = "i")]
    id: String,
    #[serde(rename = "s", skip_serializing_if = "String::is_empty", default)]
    sector: String,
}

impl RosterEntry {
    pub fn new(id: String, sector: String) -> Self {
        Self { id, sector }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn sector(&self) -> &str {
        &self.sector
    }
}

/// Registry of active employees, supplied by the record source alongside the
/// record store. Only the summary counters read it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster(Vec<RosterEntry>);

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RosterEntry> {
        self.0.iter()
    }

    /// Headcount under the effective sector constraint.
    pub fn active_count(&self, selection: &Selection, actor: &Actor) -> usize {
        match actor.effective_sector(selection) {
            None => self.len(),
            Some(s) => self.iter().filter(|e| e.sector() == s).count(),
        }
    }
}

impl FromIterator<RosterEntry> for Roster {
    fn from_iter<T: IntoIterator<Item = RosterEntry>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Roster {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for e in self.iter() {
            let s = serde_json::to_string(e).map_err(|_| std::fmt::Error)?;
            writeln!(f, "{}", s)?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid roster entry at line {line}")]
pub struct ParseError {
    line: usize,
    source: serde_json::Error,
}

impl std::str::FromStr for Roster {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, x)| !x.is_empty())
            .map(|(i, x)| {
                serde_json::from_str::<RosterEntry>(x).map_err(|e| ParseError {
                    line: i + 1,
                    source: e,
                })
            })
            .collect::<Result<Self, _>>()
    }
}

impl TryFrom<&str> for Roster {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
