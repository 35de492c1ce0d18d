//! Validation helpers for the selection form and command-line input
//!
//! This module contains date parsing and the checks applied when the user
//! submits a region/crop/soil/climate selection.

use crate::catalog::Catalog;
use chrono::{Month, NaiveDate};
use serde::Serialize;

/// Message shown when a selection is submitted incomplete
pub const INCOMPLETE_SELECTION: &str = "Please fill in all fields.";

/// Parse a date argument
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// Result containing the parsed NaiveDate or an error message
pub fn parse_date(date_str: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        format!(
            "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
            date_str
        )
    })
}

/// Parse a month argument given as a name ("March", "mar") or a number (1-12)
pub fn parse_month(month_str: &str) -> Result<Month, String> {
    let trimmed = month_str.trim();
    if let Ok(number) = trimmed.parse::<u8>() {
        return Month::try_from(number)
            .map_err(|_| format!("Invalid month '{}'. Use 1-12 or a month name", month_str));
    }
    trimmed
        .parse::<Month>()
        .map_err(|_| format!("Invalid month '{}'. Use 1-12 or a month name", month_str))
}

/// The four choices made on the selection form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormSelection {
    pub region: String,
    pub crop: String,
    pub soil_type: String,
    pub climate_condition: String,
}

impl FormSelection {
    pub fn new(region: &str, crop: &str, soil_type: &str, climate_condition: &str) -> Self {
        Self {
            region: region.to_string(),
            crop: crop.to_string(),
            soil_type: soil_type.to_string(),
            climate_condition: climate_condition.to_string(),
        }
    }

    /// Initial selection: the first entry of each list
    ///
    /// Any list that is empty leaves its field (and the dependent fields)
    /// empty.
    pub fn defaults(catalog: &Catalog) -> Self {
        let region = catalog.list_regions().first().copied().unwrap_or_default();
        Self::defaults_for_region(catalog, region)
    }

    /// Selection after the user picks a region
    pub fn defaults_for_region(catalog: &Catalog, region: &str) -> Self {
        let crop = catalog
            .list_crops(region)
            .first()
            .map(|c| c.name)
            .unwrap_or_default();
        Self::defaults_for_crop(catalog, region, crop)
    }

    /// Selection after the user picks a crop
    pub fn defaults_for_crop(catalog: &Catalog, region: &str, crop: &str) -> Self {
        let soil_type = catalog
            .list_soil_types(region, crop)
            .first()
            .map(String::as_str)
            .unwrap_or_default();
        let climate_condition = catalog
            .list_climate_conditions(region, crop)
            .first()
            .map(String::as_str)
            .unwrap_or_default();
        Self::new(region, crop, soil_type, climate_condition)
    }

    /// Check the selection before generating a schedule
    ///
    /// # Returns
    /// `Ok(())` if every field is filled and the soil type and climate
    /// condition are offered for the chosen crop
    pub fn validate(&self, catalog: &Catalog) -> Result<(), String> {
        let fields = [
            &self.region,
            &self.crop,
            &self.soil_type,
            &self.climate_condition,
        ];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(INCOMPLETE_SELECTION.to_string());
        }

        if catalog.get_crop_detail(&self.region, &self.crop).is_none() {
            return Err(format!(
                "Crop '{}' is not available in region '{}'",
                self.crop, self.region
            ));
        }

        let soil_types = catalog.list_soil_types(&self.region, &self.crop);
        if !soil_types.contains(&self.soil_type) {
            return Err(format!(
                "Soil type '{}' is not listed for {}.\nAvailable soil types: {}",
                self.soil_type,
                self.crop,
                soil_types.join(", ")
            ));
        }

        let climates = catalog.list_climate_conditions(&self.region, &self.crop);
        if !climates.contains(&self.climate_condition) {
            return Err(format!(
                "Climate condition '{}' is not listed for {}.\nAvailable climate conditions: {}",
                self.climate_condition,
                self.crop,
                climates.join(", ")
            ));
        }

        Ok(())
    }
}
