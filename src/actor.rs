use crate::Choice;
use crate::Selection;

/// The operator on whose behalf derivations run. A restricted actor sees
/// exactly one sector, regardless of the sector filter's setting; an
/// unrestricted actor sees whatever the filter allows.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Actor {
    #[serde(rename = "s", skip_serializing_if = "Option::is_none", default)]
    sector: Option<String>,
}

impl Actor {
    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn restricted_to(sector: impl Into<String>) -> Self {
        Self {
            sector: Some(sector.into()),
        }
    }

    pub fn sector(&self) -> Option<&str> {
        self.sector.as_deref()
    }

    pub fn is_restricted(&self) -> bool {
        self.sector.is_some()
    }

    /// The sector constraint in effect: the actor's restriction when there is
    /// one, otherwise the selection's sector filter. `None` means no
    /// constraint at all.
    pub fn effective_sector<'a>(&'a self, selection: &'a Selection) -> Option<&'a str> {
        match self.sector() {
            Some(s) => Some(s),
            None => match selection.sector() {
                Choice::All => None,
                Choice::Only(s) => Some(s.as_str()),
            },
        }
    }
}
