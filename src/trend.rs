/// Direction of change between two numeric totals.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Equal,
}

impl Trend {
    /// Strict three-way comparison on the raw values. No rounding: values
    /// differing below display resolution still compare unequal.
    pub fn of(curr: f64, prev: f64) -> Self {
        if curr > prev {
            Self::Up
        } else if curr < prev {
            Self::Down
        } else {
            Self::Equal
        }
    }
}
