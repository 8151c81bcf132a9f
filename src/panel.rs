use crate::aggregate;
use crate::filter;
use crate::trends;
use crate::Actor;
use crate::FilterOptions;
use crate::Record;
use crate::Recordset;
use crate::Roster;
use crate::SectorTotals;
use crate::Selection;
use crate::SortConfig;
use crate::Summary;
use crate::Totals;
use crate::TrendPoint;

/// Everything the presentation layer needs for one (records, selection,
/// sort, actor, roster) state. Recomputed wholesale on every change; each
/// snapshot owns fresh data and never aliases the store.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Panel {
    pub options: FilterOptions,
    pub rows: Vec<Record>,
    pub sectors: Vec<SectorTotals>,
    pub totals: Totals,
    pub day_trends: trends::DayTrends,
    pub series: Vec<TrendPoint>,
    pub summary: Summary,
}

impl Panel {
    pub fn compute(
        records: &Recordset,
        selection: &Selection,
        sort: &SortConfig,
        actor: &Actor,
        roster: &Roster,
    ) -> Self {
        let options = FilterOptions::derive(records, selection, actor);
        let mut rows = filter::filtered(records, selection, actor);
        filter::sort(&mut rows, sort);
        let sectors = aggregate::by_sector(&rows);
        let totals = aggregate::overall(&rows);
        let day_trends = trends::day_over_day(records, selection, actor, totals);
        let series = trends::monthly_series(records, selection, actor);
        let summary = Summary::compute(records.len(), &rows, roster, selection, actor);
        Self {
            options,
            rows: rows.into_iter().cloned().collect(),
            sectors,
            totals,
            day_trends,
            series,
            summary,
        }
    }

    /// The rows a table should render; suppressed rows still back the
    /// totals.
    pub fn visible_rows(&self) -> Vec<&Record> {
        self.rows.iter().filter(|r| r.has_display_hours()).collect()
    }
}
