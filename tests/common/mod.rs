//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use crop_calendar::storage::parse_catalog;
use crop_calendar::{Catalog, CropCalendar};
use std::io::Write;
use tempfile::NamedTempFile;

/// Catalog with well-formed and malformed activity templates
///
/// - Valley/Maize: 7 templates, 3 well-formed (all starting in March)
/// - Valley/Fallow: no templates
/// - Valley/Junk: only malformed templates
/// - Valley/Tea: includes an ongoing activity
/// - Hills/Maize: same crop name as in Valley, different data
/// - Empty: region without crops
pub const FIXTURE_CATALOG: &str = r#"
[[regions]]
region = "Valley"

[[regions.crops]]
name = "Maize"
soil_types = ["Loam", "Clay"]
climate_conditions = ["Temperate", "Sub-humid"]

[[regions.crops.activities]]
name = "Seeding"
month = "March"
duration = "2 weeks"

[[regions.crops.activities]]
name = "Fertilization"
month = "March"
duration = "10 days"

[[regions.crops.activities]]
name = "Broken"
month = "March"
duration = "abc weeks"

[[regions.crops.activities]]
name = "Irrigation"
month = "March"
duration = "1 months"

[[regions.crops.activities]]
name = "Weeding"
month = "Smarch"
duration = "1 weeks"

[[regions.crops.activities]]
name = "Harvest"
month = "July"
duration = "3 fortnights"

[[regions.crops.activities]]
name = "Mulching"
month = "June"

[[regions.crops]]
name = "Fallow"
soil_types = ["Loam"]
climate_conditions = ["Temperate"]
activities = []

[[regions.crops]]
name = "Junk"
soil_types = []
climate_conditions = []

[[regions.crops.activities]]
name = "Seeding"
month = "April"
duration = "x days"

[[regions.crops.activities]]
name = "Harvest"
month = "May"
duration = "5"

[[regions.crops.activities]]
name = "Weeding"
month = "June"
duration = "0 weeks"

[[regions.crops]]
name = "Tea"
soil_types = ["Acidic Loam"]
climate_conditions = ["Cool"]

[[regions.crops.activities]]
name = "Planting"
month = "April"
duration = "1 months"

[[regions.crops.activities]]
name = "Irrigation"
month = "May"
duration = "ongoing"

[[regions.crops.activities]]
name = "Harvest Plucking"
month = "September"
duration = "2 months"

[[regions]]
region = "Hills"

[[regions.crops]]
name = "Maize"
soil_types = ["Volcanic"]
climate_conditions = ["Cool"]

[[regions.crops.activities]]
name = "Seeding"
month = "April"
duration = "1 weeks"

[[regions]]
region = "Empty"
crops = []
"#;

/// Parse the fixture catalog
pub fn fixture_catalog() -> Catalog {
    parse_catalog(FIXTURE_CATALOG).unwrap()
}

/// Service over the fixture catalog
pub fn fixture_calendar() -> CropCalendar {
    CropCalendar::new(fixture_catalog())
}

/// Shorthand for a calendar date
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Write content to a temporary catalog file
pub fn write_catalog_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
