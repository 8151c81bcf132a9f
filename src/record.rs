use crate::Date;
use crate::Trend;

/// One employee's overtime entry for one calendar day. Hour quantities are
/// fractions of a 24-hour day, exactly as they arrive from spreadsheet
/// ingestion.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    #[serde(rename = "e")]
    employee_id: String,
    #[serde(rename = "n")]
    name: String,
    /// Raw day serial, possibly carrying a fractional time component. `None`
    /// means the row has no date.
    #[serde(rename = "d", skip_serializing_if = "Option::is_none", default)]
    serial: Option<f64>,
    #[serde(rename = "h60", default)]
    hours60: f64,
    /// `None` is "no data", distinct from an explicit zero.
    #[serde(rename = "h100", skip_serializing_if = "Option::is_none", default)]
    hours100: Option<f64>,
    #[serde(rename = "s", skip_serializing_if = "String::is_empty", default)]
    sector: String,
    /// Monthly salary basis the hourly rate derives from. `None` means the
    /// row contributes no monetary value.
    #[serde(rename = "b", skip_serializing_if = "Option::is_none", default)]
    salary: Option<f64>,
    #[serde(skip)]
    trend60: Option<Trend>,
    #[serde(skip)]
    trend100: Option<Trend>,
}

impl Record {
    pub fn new(
        employee_id: String,
        name: String,
        serial: Option<f64>,
        hours60: f64,
        hours100: Option<f64>,
        sector: String,
        salary: Option<f64>,
    ) -> Self {
        Self {
            employee_id,
            name,
            serial,
            hours60,
            hours100,
            sector,
            salary,
            trend60: None,
            trend100: None,
        }
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn serial(&self) -> Option<f64> {
        self.serial
    }

    pub fn hours60(&self) -> f64 {
        self.hours60
    }

    pub fn hours100(&self) -> Option<f64> {
        self.hours100
    }

    pub fn sector(&self) -> &str {
        &self.sector
    }

    pub fn salary(&self) -> Option<f64> {
        self.salary
    }

    pub fn trend60(&self) -> Option<Trend> {
        self.trend60
    }

    pub fn trend100(&self) -> Option<Trend> {
        self.trend100
    }

    /// Integer day serial, truncating any fractional time component.
    pub fn day_serial(&self) -> Option<i64> {
        let serial = self.serial?;
        (serial >= 1.0).then(|| serial as i64)
    }

    pub fn date(&self) -> Option<Date> {
        Date::from_serial(self.day_serial()?)
    }

    /// Whether the row shows any hours at display resolution. Rows failing
    /// this are hidden from tables but still counted in totals.
    pub fn has_display_hours(&self) -> bool {
        !hhmm(self.hours60).is_empty() || !hhmm(self.hours100.unwrap_or(0.0)).is_empty()
    }

    pub(crate) fn set_trends(&mut self, trend60: Option<Trend>, trend100: Option<Trend>) {
        self.trend60 = trend60;
        self.trend100 = trend100;
    }
}

/// Formats a fractional-day quantity as `HH:MM`, rounded to whole minutes.
/// Zero minutes format as the empty string.
pub fn hhmm(day_fraction: f64) -> String {
    let minutes = (day_fraction * 24.0 * 60.0).round() as i64;
    if minutes <= 0 {
        return String::new();
    }
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for Record {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Record {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
