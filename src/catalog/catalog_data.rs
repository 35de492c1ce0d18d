use crate::catalog::crop::{Crop, Region};
use std::collections::HashSet;

/// Current catalog file format version
pub const CATALOG_FORMAT_VERSION: u32 = 1;

/// The static crop catalog: regions, their crops and activity templates
///
/// A `Catalog` is built once (from TOML or from already validated regions)
/// and never mutated afterwards. Construction fails if any region or crop is
/// structurally invalid, so a `Catalog` value always satisfies:
/// - region identifiers are non-empty and unique
/// - crop names are non-empty and unique within their region
/// - soil type and climate condition labels are trimmed, non-empty and
///   free of duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Regions in catalog order
    pub(crate) regions: Vec<Region>,
}

// Serialize/Deserialize implementations are in serde_impl.rs

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from regions, validating structure
    ///
    /// # Arguments
    /// * `regions` - Regions in catalog order
    ///
    /// # Returns
    /// The catalog, or a message describing the first structural problem found
    pub fn from_regions(mut regions: Vec<Region>) -> Result<Self, String> {
        for region in regions.iter_mut() {
            region.id = region.id.trim().to_string();
            for crop in region.crops.iter_mut() {
                crop.name = crop.name.trim().to_string();
                crop.soil_types = normalize_labels(&crop.soil_types);
                crop.climate_conditions = normalize_labels(&crop.climate_conditions);
            }
        }

        validate_regions(&regions)?;
        Ok(Self { regions })
    }

    /// All regions in catalog order
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Find a region by its identifier
    ///
    /// # Arguments
    /// * `id` - The region identifier to search for
    ///
    /// # Returns
    /// An optional reference to the region if found
    pub fn find_region(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Find a crop by region identifier and crop name
    pub fn find_crop(&self, region: &str, crop_name: &str) -> Option<&Crop> {
        self.find_region(region)?.find_crop(crop_name)
    }

    /// Count crops across all regions
    pub fn crop_count(&self) -> usize {
        self.regions.iter().map(|r| r.crops.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Trim labels, drop empty ones and remove duplicates while keeping order
fn normalize_labels(labels: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    labels
        .iter()
        .map(|label| label.trim())
        .filter(|label| !label.is_empty())
        .filter(|label| seen.insert(label.to_string()))
        .map(str::to_string)
        .collect()
}

fn validate_regions(regions: &[Region]) -> Result<(), String> {
    let mut region_ids = HashSet::new();

    for (index, region) in regions.iter().enumerate() {
        if region.id.is_empty() {
            return Err(format!("Region #{} has an empty identifier", index + 1));
        }
        if !region_ids.insert(region.id.as_str()) {
            return Err(format!("Duplicate region '{}'", region.id));
        }

        let mut crop_names = HashSet::new();
        for (crop_index, crop) in region.crops.iter().enumerate() {
            if crop.name.is_empty() {
                return Err(format!(
                    "Crop #{} in region '{}' has an empty name",
                    crop_index + 1,
                    region.id
                ));
            }
            if !crop_names.insert(crop.name.as_str()) {
                return Err(format!(
                    "Duplicate crop '{}' in region '{}'",
                    crop.name, region.id
                ));
            }
        }
    }

    Ok(())
}
