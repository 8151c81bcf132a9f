use crate::Record;
use crate::Trend;

/// The record store for one load cycle. Construction runs the one-time trend
/// annotation; the stored order is the ingestion order and never changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recordset(Vec<Record>);

impl Recordset {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_vec(mut inner: Vec<Record>) -> Self {
        annotate(&mut inner);
        Self(inner)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.0.iter()
    }
}

/// Walks each employee's records in date order and marks each one with the
/// direction of change against that employee's previous record, for both
/// hour categories independently. The first record of an employee keeps no
/// trend. Date ties keep ingestion order; an absent hours100 compares as
/// zero; an absent date sorts before every dated record.
fn annotate(records: &mut [Record]) {
    let mut groups = std::collections::HashMap::<String, Vec<usize>>::new();
    for (i, r) in records.iter().enumerate() {
        groups.entry(r.employee_id().to_string()).or_default().push(i);
    }
    for indices in groups.values_mut() {
        indices.sort_by(|&a, &b| {
            let serial = |i: usize| records[i].serial().unwrap_or(0.0);
            serial(a).total_cmp(&serial(b))
        });
        for pair in indices.windows(2) {
            let (prev, curr) = (&records[pair[0]], &records[pair[1]]);
            let t60 = Trend::of(curr.hours60(), prev.hours60());
            let t100 = Trend::of(
                curr.hours100().unwrap_or(0.0),
                prev.hours100().unwrap_or(0.0),
            );
            records[pair[1]].set_trends(Some(t60), Some(t100));
        }
    }
}

impl IntoIterator for Recordset {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<Record> for Recordset {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a Record> for Recordset {
    fn from_iter<T: IntoIterator<Item = &'a Record>>(iter: T) -> Self {
        iter.into_iter().cloned().collect()
    }
}

impl std::fmt::Display for Recordset {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in self.iter() {
            writeln!(f, "{}", r)?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid record at line {line}")]
pub struct ParseError {
    line: usize,
    source: serde_json::Error,
}

impl std::str::FromStr for Recordset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, x)| !x.is_empty())
            .map(|(i, x)| {
                x.parse::<Record>().map_err(|e| ParseError {
                    line: i + 1,
                    source: e,
                })
            })
            .collect::<Result<Self, _>>()
    }
}

impl TryFrom<&str> for Recordset {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
