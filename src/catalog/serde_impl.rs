//! Serialization and deserialization implementations for Catalog
//!
//! Deserialization goes through a helper struct and then `Catalog::from_regions`,
//! so structural problems (missing or duplicate regions and crops) surface as
//! deserialization errors and no partially valid catalog is ever produced.

use super::catalog_data::{CATALOG_FORMAT_VERSION, Catalog};
use super::crop::Region;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Helper struct for deserializing the catalog file
#[derive(Deserialize)]
struct CatalogFileHelper {
    #[serde(default = "default_format_version")]
    format_version: u32,
    #[serde(default)]
    regions: Vec<Region>,
}

fn default_format_version() -> u32 {
    CATALOG_FORMAT_VERSION
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let helper = CatalogFileHelper::deserialize(deserializer)?;

        if helper.format_version > CATALOG_FORMAT_VERSION {
            return Err(D::Error::custom(format!(
                "Unsupported catalog format_version {} (newest supported: {})",
                helper.format_version, CATALOG_FORMAT_VERSION
            )));
        }

        Catalog::from_regions(helper.regions).map_err(D::Error::custom)
    }
}

impl Serialize for Catalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Catalog", 2)?;
        state.serialize_field("format_version", &CATALOG_FORMAT_VERSION)?;
        state.serialize_field("regions", &self.regions)?;
        state.end()
    }
}
