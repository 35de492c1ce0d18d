use chrono::Month;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit of an activity duration descriptor
///
/// Serialized in lowercase to match the catalog TOML format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    /// Calendar days
    Days,
    /// Seven-day weeks
    Weeks,
    /// Calendar months (month-rollover arithmetic)
    Months,
}

impl FromStr for DurationUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "days" | "day" => Ok(DurationUnit::Days),
            "weeks" | "week" => Ok(DurationUnit::Weeks),
            "months" | "month" => Ok(DurationUnit::Months),
            _ => Err(format!(
                "Unsupported duration unit '{}'. Valid units are: days, weeks, months",
                s
            )),
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self {
            DurationUnit::Days => "days",
            DurationUnit::Weeks => "weeks",
            DurationUnit::Months => "months",
        };
        f.write_str(unit)
    }
}

/// Parsed form of an activity template's duration descriptor
///
/// Descriptors look like `"2 weeks"`, `"10 days"`, `"1 months"` or the
/// open-ended `"ongoing"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityDuration {
    /// A positive magnitude in one of the recognized units
    Span { magnitude: u32, unit: DurationUnit },
    /// Open-ended activity with no fixed end
    Ongoing,
}

impl FromStr for ActivityDuration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("ongoing") {
            return Ok(ActivityDuration::Ongoing);
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        let [magnitude, unit] = parts.as_slice() else {
            return Err(format!(
                "Invalid duration format '{}'. Use '<number> <days|weeks|months>' or 'ongoing'",
                s
            ));
        };

        let magnitude: u32 = magnitude.parse().map_err(|_| {
            format!(
                "Invalid duration value '{}' in '{}'. Use a positive whole number",
                magnitude, s
            )
        })?;
        if magnitude == 0 {
            return Err(format!(
                "Invalid duration value '0' in '{}'. Use a positive whole number",
                s
            ));
        }

        Ok(ActivityDuration::Span {
            magnitude,
            unit: unit.parse()?,
        })
    }
}

impl fmt::Display for ActivityDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityDuration::Span { magnitude, unit } => write!(f, "{} {}", magnitude, unit),
            ActivityDuration::Ongoing => f.write_str("ongoing"),
        }
    }
}

/// Read a template field of any type
///
/// Strings are kept as is. Any other value keeps its TOML text, which never
/// parses as a month or duration.
fn template_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match toml::Value::deserialize(deserializer)? {
        toml::Value::String(text) => text,
        other => other.to_string(),
    })
}

/// Read a template name; non-string names are treated as missing
fn template_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match toml::Value::deserialize(deserializer)? {
        toml::Value::String(name) => name,
        _ => String::new(),
    })
}

/// Catalog recipe for one farming activity
///
/// The month and duration are kept as written in the catalog. They are parsed
/// when a schedule is generated, so a single bad entry only drops that
/// activity instead of rejecting the whole catalog. Missing or wrong-typed
/// fields load as text that fails to parse later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityTemplate {
    /// Activity name (e.g., "Seeding", "Fertilization")
    #[serde(deserialize_with = "template_name")]
    pub name: String,
    /// Starting month name (e.g., "March")
    #[serde(deserialize_with = "template_text")]
    pub month: String,
    /// Duration descriptor (e.g., "2 weeks", "ongoing")
    #[serde(deserialize_with = "template_text")]
    pub duration: String,
}

impl ActivityTemplate {
    pub fn new(name: &str, month: &str, duration: &str) -> Self {
        Self {
            name: name.to_string(),
            month: month.to_string(),
            duration: duration.to_string(),
        }
    }

    /// Parse the starting month
    ///
    /// Accepts full English month names and three-letter abbreviations,
    /// case-insensitive.
    pub fn start_month(&self) -> Result<Month, String> {
        self.month.trim().parse::<Month>().map_err(|_| {
            format!(
                "Invalid month '{}'. Use a month name such as 'March'",
                self.month
            )
        })
    }

    /// Parse the duration descriptor
    pub fn parsed_duration(&self) -> Result<ActivityDuration, String> {
        self.duration.parse()
    }
}

/// A crop grown in a region, with its activity templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crop {
    /// Crop name, unique within its region
    pub name: String,
    /// Soil types this crop is suited to
    #[serde(alias = "soilTypes")]
    pub soil_types: Vec<String>,
    /// Climate conditions this crop is suited to
    #[serde(alias = "climateConditions")]
    pub climate_conditions: Vec<String>,
    /// Ordered activity templates
    pub activities: Vec<ActivityTemplate>,
}

impl Crop {
    /// Borrowed summary without the activity templates
    pub fn summary(&self) -> CropSummary<'_> {
        CropSummary {
            name: &self.name,
            soil_types: &self.soil_types,
            climate_conditions: &self.climate_conditions,
        }
    }
}

/// Crop fields shown in selection lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CropSummary<'a> {
    pub name: &'a str,
    pub soil_types: &'a [String],
    pub climate_conditions: &'a [String],
}

/// A region and the crops grown in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Region identifier
    #[serde(rename = "region")]
    pub id: String,
    /// Crops in catalog order
    pub crops: Vec<Crop>,
}

impl Region {
    /// Find a crop in this region by exact name
    pub fn find_crop(&self, name: &str) -> Option<&Crop> {
        self.crops.iter().find(|c| c.name == name)
    }
}
