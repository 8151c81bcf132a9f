use crate::Actor;
use crate::Record;
use crate::Recordset;
use crate::Selection;

/// Table sort column. Missing values sort as zero or the empty string, never
/// excluded.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::Display,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Date,
    Name,
    Hours60,
    Hours100,
    Sector,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::Display,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SortConfig {
    pub key: Option<SortKey>,
    pub dir: SortDir,
}

impl SortConfig {
    /// Header-click semantics: clicking the active column flips direction,
    /// clicking a new column starts descending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == Some(key) {
            self.dir = match self.dir {
                SortDir::Asc => SortDir::Desc,
                SortDir::Desc => SortDir::Asc,
            };
        } else {
            self.key = Some(key);
            self.dir = SortDir::Desc;
        }
    }
}

fn matches_query(record: &Record, query_lower: &str) -> bool {
    query_lower.is_empty()
        || record.name().to_lowercase().contains(query_lower)
        || record.employee_id().to_lowercase().contains(query_lower)
}

fn matches_sector(record: &Record, effective: Option<&str>) -> bool {
    match effective {
        None => true,
        Some(s) => record.sector() == s,
    }
}

/// Year and month apply only when concrete; the day is enforced
/// unconditionally. A record without a date passes: it cannot be bucketed,
/// but it stays in the working subset.
fn matches_date(record: &Record, selection: &Selection) -> bool {
    match record.date() {
        None => true,
        Some(dt) => {
            selection.year().matches(&dt.year())
                && selection.month().matches(&dt.month())
                && dt.day() == selection.day()
        }
    }
}

/// Records narrowed by search text and effective sector only. Date filters
/// are deliberately excluded; option derivation and the trend series build
/// on this subset.
pub fn context_subset<'a>(
    records: &'a Recordset,
    selection: &Selection,
    actor: &Actor,
) -> Vec<&'a Record> {
    let query = selection.query().to_lowercase();
    let effective = actor.effective_sector(selection);
    records
        .iter()
        .filter(|r| matches_query(r, &query) && matches_sector(r, effective))
        .collect()
}

/// The working subset: the context rules plus the date rule.
pub fn filtered<'a>(
    records: &'a Recordset,
    selection: &Selection,
    actor: &Actor,
) -> Vec<&'a Record> {
    let query = selection.query().to_lowercase();
    let effective = actor.effective_sector(selection);
    records
        .iter()
        .filter(|r| {
            matches_query(r, &query)
                && matches_sector(r, effective)
                && matches_date(r, selection)
        })
        .collect()
}

/// Stable sort for table display. Equal keys keep the filtered order in
/// either direction.
pub fn sort(rows: &mut [&Record], config: &SortConfig) {
    let Some(key) = config.key else { return };
    let cmp = |a: &Record, b: &Record| match key {
        SortKey::Date => a
            .serial()
            .unwrap_or(0.0)
            .total_cmp(&b.serial().unwrap_or(0.0)),
        SortKey::Name => a.name().cmp(b.name()),
        SortKey::Hours60 => a.hours60().total_cmp(&b.hours60()),
        SortKey::Hours100 => a
            .hours100()
            .unwrap_or(0.0)
            .total_cmp(&b.hours100().unwrap_or(0.0)),
        SortKey::Sector => a.sector().cmp(b.sector()),
    };
    match config.dir {
        SortDir::Asc => rows.sort_by(|a, b| cmp(a, b)),
        SortDir::Desc => rows.sort_by(|a, b| cmp(b, a)),
    }
}

/// Drops rows whose hour columns both format empty at display resolution.
/// Purely presentational; totals keep counting the hidden rows.
pub fn visible_rows<'a>(rows: &[&'a Record]) -> Vec<&'a Record> {
    rows.iter()
        .copied()
        .filter(|r| r.has_display_hours())
        .collect()
}
