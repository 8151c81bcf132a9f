use crate::filter;
use crate::Actor;
use crate::Recordset;
use crate::Selection;

/// Valid option sets for each filter level, derived from records narrowed by
/// the levels above: search and sector constrain everything, the selected
/// year constrains months and days, the selected month constrains days.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct FilterOptions {
    /// Alphabetical. A restricted actor gets exactly its own sector.
    pub sectors: Vec<String>,
    /// Most recent first.
    pub years: Vec<i32>,
    /// Ascending, 1 through 12.
    pub months: Vec<u8>,
    /// Ascending day-of-month.
    pub days: Vec<u8>,
}

impl FilterOptions {
    pub fn derive(records: &Recordset, selection: &Selection, actor: &Actor) -> Self {
        let context = filter::context_subset(records, selection, actor);

        let sectors = match actor.sector() {
            // The restriction is a fact about the actor, not the data: the
            // only selectable sector is the actor's own, with or without
            // matching records, and other sectors never leak.
            Some(s) => vec![s.to_string()],
            None => {
                let mut sectors: Vec<String> = context
                    .iter()
                    .map(|r| r.sector())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
                sectors.sort();
                sectors.dedup();
                sectors
            }
        };

        let mut years = Vec::new();
        let mut months = Vec::new();
        let mut days = Vec::new();
        for r in &context {
            let Some(dt) = r.date() else { continue };
            years.push(dt.year());
            if selection.year().matches(&dt.year()) {
                months.push(dt.month());
                if selection.month().matches(&dt.month()) {
                    days.push(dt.day());
                }
            }
        }
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();
        months.sort_unstable();
        months.dedup();
        days.sort_unstable();
        days.dedup();

        Self {
            sectors,
            years,
            months,
            days,
        }
    }
}
