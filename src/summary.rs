use crate::Actor;
use crate::Record;
use crate::Roster;
use crate::Selection;

/// Headline counters for the status bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct Summary {
    /// Rows in the whole store.
    pub total: usize,
    /// Rows in the working subset.
    pub filtered: usize,
    /// Distinct employees in the working subset.
    pub collaborators: usize,
    /// Active registry entries under the effective sector.
    pub registered_active: usize,
}

impl Summary {
    pub fn compute(
        total: usize,
        rows: &[&Record],
        roster: &Roster,
        selection: &Selection,
        actor: &Actor,
    ) -> Self {
        let mut ids: Vec<&str> = rows
            .iter()
            .map(|r| r.employee_id())
            .filter(|id| !id.is_empty())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        Self {
            total,
            filtered: rows.len(),
            collaborators: ids.len(),
            registered_active: roster.active_count(selection, actor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter;
    use crate::Recordset;

    #[test]
    fn test_counters() {
        let rs = r#"
            {"e":"100","n":"ALICE","d":45301.0,"h60":0.25,"s":"Assembly"}
            {"e":"100","n":"ALICE","d":45302.0,"h60":0.10,"s":"Assembly"}
            {"e":"101","n":"BOB","d":45301.0,"h60":0.20,"s":"Foundry"}
            {"e":"","n":"GHOST","d":45301.0,"h60":0.05}
        "#
        .parse::<Recordset>()
        .unwrap();
        let roster = r#"
            {"i":"100","s":"Assembly"}
            {"i":"101","s":"Foundry"}
            {"i":"104","s":"Foundry"}
        "#
        .parse::<Roster>()
        .unwrap();
        let mut sel = Selection::default();
        sel.set_day(10);
        let actor = Actor::unrestricted();

        let rows = filter::filtered(&rs, &sel, &actor);
        let summary = Summary::compute(rs.len(), &rows, &roster, &sel, &actor);
        assert_eq!(summary.total, 4);
        // Day 10 drops the 45302 row.
        assert_eq!(summary.filtered, 3);
        // The empty employee id does not count as a collaborator.
        assert_eq!(summary.collaborators, 2);
        assert_eq!(summary.registered_active, 3);
    }
}
