//! Crop Calendar Library
//!
//! This library turns a static crop catalog into planting schedules. A user
//! picks a region and a crop; the library produces the dated activities for
//! that crop and a per-day calendar projection of them.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Facade Layer**: `CropCalendar` - The function-call boundary used by the presentation shell
//! - **Domain Layer**: `catalog`, `schedule` and `calendar` modules - Catalog queries,
//!   schedule generation and calendar projection
//! - **Loading Layer**: `storage` module - TOML catalog files and the bundled catalog
//!
//! Every operation is a pure, synchronous function over an immutable catalog.
//!
//! # Example
//!
//! ```no_run
//! use crop_calendar::CropCalendar;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let calendar = CropCalendar::bundled()?;
//!     let schedule = calendar.generate_schedule("Central Highlands", "Maize");
//!     let marking = calendar.marked_dates(&schedule);
//!     println!("{} activities over {} days", schedule.len(), marking.len());
//!     Ok(())
//! }
//! ```

pub mod calendar;
pub mod catalog;
pub mod formatting;
pub mod logging;
pub mod schedule;
pub mod storage;
pub mod validation;

use anyhow::Result;
use chrono::NaiveDate;
use std::path::Path;

// Re-export commonly used types
pub use calendar::{CalendarMarking, ColorTag, DayMarking, MarkedDot};
pub use catalog::{
    ActivityDuration, ActivityTemplate, Catalog, Crop, CropSummary, DurationUnit, Region,
};
pub use schedule::{EndDate, GeneratedActivity, Schedule};
pub use storage::Storage;
pub use validation::FormSelection;

/// Crop calendar service
///
/// Owns the immutable catalog and exposes the catalog queries, schedule
/// generation and calendar projections to the presentation layer. Holds no
/// other state, so a shared reference can be used from any number of callers.
#[derive(Debug, Clone)]
pub struct CropCalendar {
    catalog: Catalog,
}

impl CropCalendar {
    /// Create a service over an already loaded catalog
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Create a service over the catalog bundled with the crate
    pub fn bundled() -> Result<Self> {
        Ok(Self::new(storage::bundled_catalog()?))
    }

    /// Create a service over a catalog file
    ///
    /// # Arguments
    /// * `catalog_path` - Path to the catalog file (TOML format)
    ///
    /// # Returns
    /// Result containing the service, or an error if the file is missing or
    /// structurally invalid
    ///
    /// # Example
    /// ```no_run
    /// # use crop_calendar::CropCalendar;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let calendar = CropCalendar::from_path("catalog.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_path(catalog_path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Storage::new(catalog_path).load()?))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Region identifiers in catalog order
    pub fn list_regions(&self) -> Vec<&str> {
        self.catalog.list_regions()
    }

    /// Crops of a region; empty if the region is unknown
    pub fn list_crops(&self, region: &str) -> Vec<CropSummary<'_>> {
        self.catalog.list_crops(region)
    }

    /// Soil types of a crop; empty if the region or crop is unknown
    pub fn list_soil_types(&self, region: &str, crop_name: &str) -> &[String] {
        self.catalog.list_soil_types(region, crop_name)
    }

    /// Climate conditions of a crop; empty if the region or crop is unknown
    pub fn list_climate_conditions(&self, region: &str, crop_name: &str) -> &[String] {
        self.catalog.list_climate_conditions(region, crop_name)
    }

    /// Full crop record, including activity templates
    pub fn get_crop_detail(&self, region: &str, crop_name: &str) -> Option<&Crop> {
        self.catalog.get_crop_detail(region, crop_name)
    }

    /// Generate the schedule for the current calendar year
    pub fn generate_schedule(&self, region: &str, crop_name: &str) -> Schedule {
        schedule::generate_schedule(&self.catalog, region, crop_name)
    }

    /// Generate the schedule for an explicit year
    pub fn generate_schedule_for_year(&self, region: &str, crop_name: &str, year: i32) -> Schedule {
        schedule::generate_schedule_for_year(&self.catalog, region, crop_name, year)
    }

    /// Validate a form selection and generate its schedule
    ///
    /// # Arguments
    /// * `selection` - Region, crop, soil type and climate condition picked by the user
    /// * `year` - Generation year; the current year when `None`
    ///
    /// # Returns
    /// The schedule, or the validation message to show the user
    pub fn submit(&self, selection: &FormSelection, year: Option<i32>) -> Result<Schedule, String> {
        selection.validate(&self.catalog)?;
        let year = year.unwrap_or_else(schedule::current_year);
        Ok(self.generate_schedule_for_year(&selection.region, &selection.crop, year))
    }

    /// Per-day calendar markings for a schedule
    pub fn marked_dates(&self, schedule: &Schedule) -> CalendarMarking {
        calendar::marked_dates(schedule)
    }

    /// Activities active on a day, in schedule order
    pub fn activities_on_date<'s>(
        &self,
        schedule: &'s Schedule,
        date: NaiveDate,
    ) -> Vec<&'s GeneratedActivity> {
        calendar::activities_on_date(schedule, date)
    }
}
