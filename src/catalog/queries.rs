//! Query methods for Catalog
//!
//! Read-only accessors used by the selection form. Unknown regions or crops
//! never produce an error: the result is simply empty, because callers query
//! while the user is still mid-selection.

use super::catalog_data::Catalog;
use super::crop::{Crop, CropSummary};

impl Catalog {
    /// List region identifiers in catalog order
    pub fn list_regions(&self) -> Vec<&str> {
        self.regions.iter().map(|r| r.id.as_str()).collect()
    }

    /// List crop summaries for a region
    ///
    /// # Returns
    /// Summaries in catalog order, or an empty vector if the region is unknown
    pub fn list_crops(&self, region: &str) -> Vec<CropSummary<'_>> {
        self.find_region(region)
            .map(|r| r.crops.iter().map(Crop::summary).collect())
            .unwrap_or_default()
    }

    /// List soil types for a crop in a region
    ///
    /// Empty if the region or crop is unknown.
    pub fn list_soil_types(&self, region: &str, crop_name: &str) -> &[String] {
        self.find_crop(region, crop_name)
            .map(|c| c.soil_types.as_slice())
            .unwrap_or_default()
    }

    /// List climate conditions for a crop in a region
    ///
    /// Empty if the region or crop is unknown.
    pub fn list_climate_conditions(&self, region: &str, crop_name: &str) -> &[String] {
        self.find_crop(region, crop_name)
            .map(|c| c.climate_conditions.as_slice())
            .unwrap_or_default()
    }

    /// Fetch full crop detail, including activity templates
    pub fn get_crop_detail(&self, region: &str, crop_name: &str) -> Option<&Crop> {
        self.find_crop(region, crop_name)
    }
}
