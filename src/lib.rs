//! Derivation engine for per-employee overtime records: cascading filter
//! options, the filtered working subset, per-sector aggregates and trend
//! comparisons. Pure and synchronous; ingestion and rendering live elsewhere.

pub mod actor;
pub mod aggregate;
pub mod date;
pub mod filter;
pub mod options;
pub mod panel;
pub mod record;
pub mod recordset;
pub mod roster;
pub mod selection;
pub mod summary;
pub mod trend;
pub mod trends;

pub use actor::Actor;
pub use aggregate::{SectorTotals, Totals};
pub use date::Date;
pub use filter::{SortConfig, SortDir, SortKey};
pub use options::FilterOptions;
pub use panel::Panel;
pub use record::Record;
pub use recordset::Recordset;
pub use roster::{Roster, RosterEntry};
pub use selection::{Choice, Selection};
pub use summary::Summary;
pub use trend::Trend;
pub use trends::{DayTrends, TrendPoint};
