use crate::aggregate::{round2, Totals};
use crate::filter;
use crate::Actor;
use crate::Choice;
use crate::Date;
use crate::Recordset;
use crate::Selection;
use crate::Trend;

/// How many months the historical series looks back.
pub const SERIES_MONTHS: usize = 3;

/// Day-over-day directions for the dashboard tiles. Every direction is
/// `None` when no specific day can be compared (year or month unselected).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct DayTrends {
    pub hours60: Option<Trend>,
    pub hours100: Option<Trend>,
    pub value60: Option<Trend>,
    pub value100: Option<Trend>,
    pub hours_total: Option<Trend>,
    pub value_total: Option<Trend>,
}

impl DayTrends {
    fn compare(current: Totals, previous: Totals) -> Self {
        Self {
            hours60: Some(Trend::of(current.hours60, previous.hours60)),
            hours100: Some(Trend::of(current.hours100, previous.hours100)),
            value60: Some(Trend::of(current.value60, previous.value60)),
            value100: Some(Trend::of(current.value100, previous.value100)),
            hours_total: Some(Trend::of(current.hours(), previous.hours())),
            value_total: Some(Trend::of(current.value(), previous.value())),
        }
    }
}

/// Compares the selected day's totals against the immediately preceding
/// calendar day, crossing month and year boundaries. The preceding day's
/// totals come from the context subset (date filters do not apply to it);
/// `current` is the working subset's grand total the caller already has.
pub fn day_over_day(
    records: &Recordset,
    selection: &Selection,
    actor: &Actor,
    current: Totals,
) -> DayTrends {
    let (Choice::Only(year), Choice::Only(month)) = (selection.year(), selection.month()) else {
        return DayTrends::default();
    };
    let Some(previous_day) = Date::from_ymd(year, month, selection.day()).and_then(Date::previous)
    else {
        return DayTrends::default();
    };
    let previous = filter::context_subset(records, selection, actor)
        .into_iter()
        .filter(|r| r.date() == Some(previous_day))
        .map(Totals::of)
        .sum();
    DayTrends::compare(current, previous)
}

/// One point of the month-end history: the latest observed day of a month
/// and the context-wide hour totals of that whole day, display-rounded.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TrendPoint {
    /// `dd/mm` of the day the point aggregates.
    pub label: String,
    pub hours60: f64,
    pub hours100: f64,
}

/// History over the latest observed day of each of the last three distinct
/// months in the context subset, chronologically ascending. Day membership
/// uses truncated serials, so rows with fractional timestamps land on their
/// calendar day. Fewer months yield fewer points; an empty context yields an
/// empty series.
pub fn monthly_series(
    records: &Recordset,
    selection: &Selection,
    actor: &Actor,
) -> Vec<TrendPoint> {
    let context = filter::context_subset(records, selection, actor);

    let mut latest = std::collections::HashMap::<(i32, u8), i64>::new();
    for r in &context {
        let Some(serial) = r.day_serial() else { continue };
        let Some(dt) = Date::from_serial(serial) else { continue };
        let slot = latest.entry((dt.year(), dt.month())).or_insert(serial);
        *slot = (*slot).max(serial);
    }

    let mut targets: Vec<i64> = latest.into_values().collect();
    targets.sort_unstable_by(|a, b| b.cmp(a));
    targets.truncate(SERIES_MONTHS);
    targets.sort_unstable();

    targets
        .into_iter()
        .map(|target| {
            let day_total: Totals = context
                .iter()
                .filter(|r| r.day_serial() == Some(target))
                .map(|r| Totals::of(r))
                .sum();
            let dt = Date::from_serial(target)
                .expect("series targets are taken from valid record serials");
            TrendPoint {
                label: format!("{:02}/{:02}", dt.day(), dt.month()),
                hours60: round2(day_total.hours60),
                hours100: round2(day_total.hours100),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::aggregate;

    fn day_totals(rs: &Recordset, sel: &Selection, actor: &Actor) -> Totals {
        aggregate::overall(&filter::filtered(rs, sel, actor))
    }

    #[test]
    fn test_day_over_day_requires_concrete_year_and_month() {
        let rs = r#"{"e":"1","n":"A","d":45301.0,"h60":0.25}"#
            .parse::<Recordset>()
            .unwrap();
        let actor = Actor::unrestricted();

        let mut sel = Selection::default();
        sel.set_day(10);
        let trends = day_over_day(&rs, &sel, &actor, day_totals(&rs, &sel, &actor));
        assert_eq!(trends, DayTrends::default());

        sel.set_year(Choice::Only(2024));
        let trends = day_over_day(&rs, &sel, &actor, day_totals(&rs, &sel, &actor));
        assert_eq!(trends, DayTrends::default());
    }

    #[rstest]
    #[case(0.50, 0.25, Trend::Up)]
    #[case(0.10, 0.25, Trend::Down)]
    #[case(0.25, 0.25, Trend::Equal)]
    fn test_day_over_day_directions(
        #[case] curr_h60: f64,
        #[case] prev_h60: f64,
        #[case] want: Trend,
    ) {
        // 45301 = 2024-01-10, 45300 = 2024-01-09.
        let rs = format!(
            r#"
                {{"e":"1","n":"A","d":45301.0,"h60":{curr_h60},"b":2200.0}}
                {{"e":"1","n":"A","d":45300.0,"h60":{prev_h60},"b":2200.0}}
            "#
        )
        .parse::<Recordset>()
        .unwrap();
        let actor = Actor::unrestricted();
        let mut sel = Selection::default();
        sel.set_year(Choice::Only(2024));
        sel.set_month(Choice::Only(1));
        sel.set_day(10);

        let trends = day_over_day(&rs, &sel, &actor, day_totals(&rs, &sel, &actor));
        assert_eq!(trends.hours60, Some(want));
        assert_eq!(trends.value60, Some(want));
        assert_eq!(trends.hours_total, Some(want));
        // No 100% hours on either day.
        assert_eq!(trends.hours100, Some(Trend::Equal));
    }

    #[test]
    fn test_day_over_day_crosses_month_boundary() {
        // 45352 = 2024-03-01, 45351 = 2024-02-29 (leap year).
        let rs = r#"
            {"e":"1","n":"A","d":45352.0,"h60":0.10}
            {"e":"1","n":"A","d":45351.0,"h60":0.25}
        "#
        .parse::<Recordset>()
        .unwrap();
        let actor = Actor::unrestricted();
        let mut sel = Selection::default();
        sel.set_year(Choice::Only(2024));
        sel.set_month(Choice::Only(3));
        sel.set_day(1);

        let trends = day_over_day(&rs, &sel, &actor, day_totals(&rs, &sel, &actor));
        assert_eq!(trends.hours60, Some(Trend::Down));
    }

    #[test]
    fn test_day_over_day_crosses_year_boundary() {
        // 45292 = 2024-01-01, 45291 = 2023-12-31.
        let rs = r#"
            {"e":"1","n":"A","d":45292.0,"h60":0.50}
            {"e":"1","n":"A","d":45291.0,"h60":0.25}
        "#
        .parse::<Recordset>()
        .unwrap();
        let actor = Actor::unrestricted();
        let mut sel = Selection::default();
        sel.set_year(Choice::Only(2024));
        sel.set_month(Choice::Only(1));
        sel.set_day(1);

        let trends = day_over_day(&rs, &sel, &actor, day_totals(&rs, &sel, &actor));
        assert_eq!(trends.hours60, Some(Trend::Up));
    }

    #[test]
    fn test_day_over_day_empty_previous_day_compares_against_zero() {
        let rs = r#"{"e":"1","n":"A","d":45301.0,"h60":0.25}"#
            .parse::<Recordset>()
            .unwrap();
        let actor = Actor::unrestricted();
        let mut sel = Selection::default();
        sel.set_year(Choice::Only(2024));
        sel.set_month(Choice::Only(1));
        sel.set_day(10);

        let trends = day_over_day(&rs, &sel, &actor, day_totals(&rs, &sel, &actor));
        assert_eq!(trends.hours60, Some(Trend::Up));
        assert_eq!(trends.hours100, Some(Trend::Equal));
    }

    #[test]
    fn test_series_takes_last_three_months_ascending() {
        // Five months; the series must keep the three most recent, oldest
        // first, each at its maximum observed day.
        // 45169 = 2023-08-31, 45199 = 2023-09-30, 45230 = 2023-10-31,
        // 45260 = 2023-11-30, 45291 = 2023-12-31.
        let rs = r#"
            {"e":"1","n":"A","d":45155.0,"h60":0.10}
            {"e":"1","n":"A","d":45169.0,"h60":0.10}
            {"e":"1","n":"A","d":45199.0,"h60":0.20}
            {"e":"1","n":"A","d":45225.0,"h60":0.10}
            {"e":"1","n":"A","d":45230.0,"h60":0.30}
            {"e":"1","n":"A","d":45260.0,"h60":0.40}
            {"e":"1","n":"A","d":45291.0,"h60":0.50}
        "#
        .parse::<Recordset>()
        .unwrap();
        let series = monthly_series(&rs, &Selection::default(), &Actor::unrestricted());
        let labels: Vec<_> = series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["31/10", "30/11", "31/12"]);
        assert_eq!(series[0].hours60, 7.2);
        assert_eq!(series[1].hours60, 9.6);
        assert_eq!(series[2].hours60, 12.0);
    }

    #[test]
    fn test_series_aggregates_whole_day_across_fractional_timestamps() {
        // Two rows on 2024-01-10 with different time fractions, one the day
        // before. The point must cover both day-10 rows.
        let rs = r#"
            {"e":"1","n":"A","d":45301.25,"h60":0.10}
            {"e":"2","n":"B","d":45301.75,"h60":0.20,"h100":0.10}
            {"e":"3","n":"C","d":45300.5,"h60":0.40}
        "#
        .parse::<Recordset>()
        .unwrap();
        let series = monthly_series(&rs, &Selection::default(), &Actor::unrestricted());
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].label, "10/01");
        assert_eq!(series[0].hours60, 7.2);
        assert_eq!(series[0].hours100, 2.4);
    }

    #[test]
    fn test_series_with_fewer_months_never_pads() {
        let rs = r#"
            {"e":"1","n":"A","d":45301.0,"h60":0.10}
            {"e":"1","n":"A","d":45327.0,"h60":0.20}
        "#
        .parse::<Recordset>()
        .unwrap();
        let series = monthly_series(&rs, &Selection::default(), &Actor::unrestricted());
        assert_eq!(series.len(), 2);

        let empty = monthly_series(
            &Recordset::new(),
            &Selection::default(),
            &Actor::unrestricted(),
        );
        assert!(empty.is_empty());
    }

    #[test]
    fn test_series_ignores_date_filters_but_honors_context() {
        let rs = r#"
            {"e":"1","n":"ALICE","d":45301.0,"h60":0.10,"s":"Assembly"}
            {"e":"2","n":"BOB","d":45301.0,"h60":0.20,"s":"Foundry"}
            {"e":"1","n":"ALICE","d":45327.0,"h60":0.30,"s":"Assembly"}
        "#
        .parse::<Recordset>()
        .unwrap();
        let mut sel = Selection::default();
        sel.set_sector(Choice::Only("Assembly".to_string()));
        sel.set_year(Choice::Only(2024));
        sel.set_month(Choice::Only(1));
        sel.set_day(10);

        let series = monthly_series(&rs, &sel, &Actor::unrestricted());
        let labels: Vec<_> = series.iter().map(|p| p.label.as_str()).collect();
        // Both months survive the date filters; the Foundry row does not.
        assert_eq!(labels, vec!["10/01", "05/02"]);
        assert_eq!(series[0].hours60, 2.4);
    }
}
