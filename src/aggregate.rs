use crate::Record;

/// Hours in a working month, the divisor turning a monthly salary basis into
/// an hourly rate.
pub const MONTHLY_BASIS_HOURS: f64 = 220.0;

/// Pay multipliers for the two overtime categories.
pub const RATE_60: f64 = 1.6;
pub const RATE_100: f64 = 2.0;

/// Label under which records with an empty sector aggregate.
pub const UNCLASSIFIED: &str = "Unclassified";

const HOURS_PER_DAY: f64 = 24.0;

/// Running totals of overtime hours and their monetary value, in hour and
/// currency units. Kept unrounded; `rounded` is for presentation.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Sum,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Totals {
    pub hours60: f64,
    pub hours100: f64,
    pub value60: f64,
    pub value100: f64,
}

impl Totals {
    /// Contribution of a single record: fractional days become hours, and a
    /// present salary basis prices them at basis/220 with the category
    /// multipliers. An absent basis contributes no monetary value at all.
    pub fn of(record: &Record) -> Self {
        let hours60 = record.hours60() * HOURS_PER_DAY;
        let hours100 = record.hours100().unwrap_or(0.0) * HOURS_PER_DAY;
        let (value60, value100) = match record.salary() {
            Some(basis) => {
                let rate = basis / MONTHLY_BASIS_HOURS;
                (hours60 * rate * RATE_60, hours100 * rate * RATE_100)
            }
            None => (0.0, 0.0),
        };
        Self {
            hours60,
            hours100,
            value60,
            value100,
        }
    }

    /// Combined hours across both categories.
    pub fn hours(self) -> f64 {
        self.hours60 + self.hours100
    }

    /// Combined monetary value across both categories.
    pub fn value(self) -> f64 {
        self.value60 + self.value100
    }

    /// Two-decimal presentation copy. Internal sums stay unrounded.
    pub fn rounded(self) -> Self {
        Self {
            hours60: round2(self.hours60),
            hours100: round2(self.hours100),
            value60: round2(self.value60),
            value100: round2(self.value100),
        }
    }
}

pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// One aggregation row per sector observed in the working subset.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SectorTotals {
    pub sector: String,
    pub totals: Totals,
}

/// Reduces the working subset to per-sector totals, ordered by combined
/// hours descending. Ties keep first-seen sector order; records with an
/// empty sector aggregate under the unclassified label, never dropped.
pub fn by_sector(rows: &[&Record]) -> Vec<SectorTotals> {
    let mut out = Vec::<SectorTotals>::new();
    for r in rows {
        let label = match r.sector() {
            "" => UNCLASSIFIED,
            s => s,
        };
        match out.iter_mut().find(|st| st.sector == label) {
            Some(st) => st.totals += Totals::of(r),
            None => out.push(SectorTotals {
                sector: label.to_string(),
                totals: Totals::of(r),
            }),
        }
    }
    out.sort_by(|a, b| b.totals.hours().total_cmp(&a.totals.hours()));
    out
}

/// Grand total over the working subset.
pub fn overall(rows: &[&Record]) -> Totals {
    rows.iter().map(|r| Totals::of(r)).sum()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::Recordset;

    fn rows(rs: &Recordset) -> Vec<&Record> {
        rs.iter().collect()
    }

    #[test]
    fn test_single_record_scenario() {
        // 6 hours at 60%: value = 6 * (2200 / 220) * 1.6 = 96.
        let rs = r#"{"e":"100","n":"ALICE","d":45301.0,"h60":0.25,"s":"Assembly","b":2200.0}"#
            .parse::<Recordset>()
            .unwrap();
        let agg = by_sector(&rows(&rs));
        assert_eq!(agg.len(), 1);
        assert_eq!(agg[0].sector, "Assembly");
        assert_eq!(agg[0].totals.hours60, 6.0);
        assert_eq!(agg[0].totals.value60, 96.0);
        assert_eq!(agg[0].totals.hours100, 0.0);
        assert_eq!(agg[0].totals.value100, 0.0);
    }

    #[test]
    fn test_absent_salary_contributes_no_value() {
        let rs = r#"{"e":"1","n":"A","h60":0.25,"h100":0.25}"#
            .parse::<Recordset>()
            .unwrap();
        let totals = overall(&rows(&rs));
        assert_eq!(totals.hours60, 6.0);
        assert_eq!(totals.hours100, 6.0);
        assert_eq!(totals.value60, 0.0);
        assert_eq!(totals.value100, 0.0);
        assert!(totals.value().is_finite());
    }

    #[test]
    fn test_unclassified_records_are_kept() {
        let rs = r#"
            {"e":"1","n":"A","h60":0.50}
            {"e":"2","n":"B","h60":0.25,"s":"Assembly"}
            {"e":"3","n":"C","h60":0.125}
        "#
        .parse::<Recordset>()
        .unwrap();
        let agg = by_sector(&rows(&rs));
        let labels: Vec<_> = agg.iter().map(|st| st.sector.as_str()).collect();
        assert_eq!(labels, vec![UNCLASSIFIED, "Assembly"]);
        assert_eq!(agg[0].totals.hours60, 15.0);
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let rs = r#"
            {"e":"1","n":"A","h60":0.25,"s":"Foundry"}
            {"e":"2","n":"B","h60":0.25,"s":"Shipping"}
            {"e":"3","n":"C","h60":0.50,"s":"Assembly"}
        "#
        .parse::<Recordset>()
        .unwrap();
        let agg = by_sector(&rows(&rs));
        let labels: Vec<_> = agg.iter().map(|st| st.sector.as_str()).collect();
        assert_eq!(labels, vec!["Assembly", "Foundry", "Shipping"]);
    }

    #[test]
    fn test_order_independence() {
        let rs = r#"
            {"e":"1","n":"A","h60":0.25,"h100":0.125,"s":"Assembly","b":2200.0}
            {"e":"2","n":"B","h60":0.50,"s":"Assembly","b":1100.0}
            {"e":"3","n":"C","h60":0.125,"s":"Foundry"}
        "#
        .parse::<Recordset>()
        .unwrap();
        let forward = rows(&rs);
        let mut backward = forward.clone();
        backward.reverse();
        let mut fwd = by_sector(&forward);
        let mut bwd = by_sector(&backward);
        fwd.sort_by(|a, b| a.sector.cmp(&b.sector));
        bwd.sort_by(|a, b| a.sector.cmp(&b.sector));
        assert_eq!(fwd, bwd);
    }

    #[test]
    fn test_sector_sums_match_overall() {
        let rs = r#"
            {"e":"1","n":"A","d":45301.0,"h60":0.25,"h100":0.125,"s":"Assembly","b":2200.0}
            {"e":"2","n":"B","d":45301.0,"h60":0.50,"s":"Foundry","b":1100.0}
            {"e":"3","n":"C","d":45302.0,"h60":0.125,"h100":0.25,"s":"Foundry"}
            {"e":"4","n":"D","h60":0.0625}
        "#
        .parse::<Recordset>()
        .unwrap();
        let all = rows(&rs);
        let total = overall(&all);
        let agg = by_sector(&all);
        let summed: Totals = agg.iter().map(|st| st.totals).sum();
        assert!((summed.hours60 - total.hours60).abs() < 1e-9);
        assert!((summed.hours100 - total.hours100).abs() < 1e-9);
        assert!((summed.value60 - total.value60).abs() < 1e-9);
        assert!((summed.value100 - total.value100).abs() < 1e-9);
    }

    #[rstest]
    #[case(1.005, 1.0)]
    #[case(96.0, 96.0)]
    #[case(2.675, 2.67)]
    #[case(0.004, 0.0)]
    fn test_round2(#[case] x: f64, #[case] want: f64) {
        assert_eq!(round2(x), want)
    }

    #[test]
    fn test_rounded_is_presentation_only() {
        let totals = Totals {
            hours60: 1.23456,
            hours100: 0.0,
            value60: 9.876,
            value100: 0.0,
        };
        assert_eq!(totals.rounded().hours60, 1.23);
        assert_eq!(totals.rounded().value60, 9.88);
        assert_eq!(totals.hours60, 1.23456);
    }
}
