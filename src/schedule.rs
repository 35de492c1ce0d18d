//! Schedule generation
//!
//! Turns a crop's activity templates into dated activities. Every activity
//! starts on the first day of its template month in the generation year and
//! ends after the template duration. Templates that cannot be parsed are
//! skipped with a warning; they never abort generation of the rest.

use crate::catalog::{ActivityDuration, ActivityTemplate, Catalog, DurationUnit};
use chrono::{Datelike, Local, Months, NaiveDate};
use log::{debug, warn};
use serde::{Serialize, Serializer};
use std::fmt;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Year used when no explicit generation year is requested
pub fn current_year() -> i32 {
    local_date_today().year()
}

/// End of a generated activity
///
/// `Ongoing` marks an open-ended activity. It is never encoded as a date, so
/// it cannot be confused with a real end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndDate {
    /// Inclusive last day
    Bounded(NaiveDate),
    /// No fixed end
    Ongoing,
}

impl EndDate {
    /// The end date if bounded
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            EndDate::Bounded(date) => Some(*date),
            EndDate::Ongoing => None,
        }
    }

    pub fn is_ongoing(&self) -> bool {
        matches!(self, EndDate::Ongoing)
    }
}

impl fmt::Display for EndDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndDate::Bounded(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            EndDate::Ongoing => f.write_str("Ongoing"),
        }
    }
}

impl Serialize for EndDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A concrete, dated instance of an activity template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedActivity {
    /// Activity name copied from the template
    pub activity_name: String,
    /// First day of the template month in the generation year
    pub start_date: NaiveDate,
    /// Inclusive end, or ongoing
    pub end_date: EndDate,
}

impl GeneratedActivity {
    /// Whether the activity starts and ends on the same day
    pub fn is_single_day(&self) -> bool {
        self.end_date == EndDate::Bounded(self.start_date)
    }
}

/// Ordered list of generated activities for one region and crop
///
/// Activity order always matches the template order of the source crop.
/// An empty schedule is a valid result meaning "nothing to show".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    /// Region the schedule was requested for
    pub region: String,
    /// Crop the schedule was requested for
    pub crop: String,
    /// Generation year
    pub year: i32,
    activities: Vec<GeneratedActivity>,
}

impl Schedule {
    /// Create an empty schedule for a selection
    pub fn empty(region: &str, crop: &str, year: i32) -> Self {
        Self {
            region: region.to_string(),
            crop: crop.to_string(),
            year,
            activities: Vec::new(),
        }
    }

    /// Create a schedule from already generated activities
    pub fn with_activities(
        region: &str,
        crop: &str,
        year: i32,
        activities: Vec<GeneratedActivity>,
    ) -> Self {
        Self {
            activities,
            ..Self::empty(region, crop, year)
        }
    }

    pub fn activities(&self) -> &[GeneratedActivity] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Start date of the first activity
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.activities.first().map(|a| a.start_date)
    }

    /// Inclusive end used when projecting an activity onto the calendar
    ///
    /// A bounded activity ends on its own end date. An ongoing activity runs
    /// until the start of the last activity in the schedule, but never ends
    /// before it starts.
    pub fn effective_end(&self, activity: &GeneratedActivity) -> NaiveDate {
        match activity.end_date {
            EndDate::Bounded(end) => end,
            EndDate::Ongoing => self
                .activities
                .last()
                .map(|last| last.start_date)
                .unwrap_or(activity.start_date)
                .max(activity.start_date),
        }
    }

    /// Whether an activity's effective interval contains the given day
    pub fn is_active_on(&self, activity: &GeneratedActivity, date: NaiveDate) -> bool {
        activity.start_date <= date && date <= self.effective_end(activity)
    }
}

/// Generate a schedule for the current calendar year
///
/// Results depend on the wall-clock year: two calls on either side of New
/// Year produce schedules for different years.
pub fn generate_schedule(catalog: &Catalog, region: &str, crop_name: &str) -> Schedule {
    generate_schedule_for_year(catalog, region, crop_name, current_year())
}

/// Generate a schedule for an explicit year
///
/// # Arguments
/// * `catalog` - Catalog to resolve the crop from
/// * `region` - Region identifier
/// * `crop_name` - Crop name within the region
/// * `year` - Year every activity starts in
///
/// # Returns
/// The schedule. Unknown region or crop yields an empty schedule.
pub fn generate_schedule_for_year(
    catalog: &Catalog,
    region: &str,
    crop_name: &str,
    year: i32,
) -> Schedule {
    let Some(crop) = catalog.get_crop_detail(region, crop_name) else {
        warn!(
            "event=schedule_generate module=schedule status=not_found region={:?} crop={:?}",
            region, crop_name
        );
        return Schedule::empty(region, crop_name, year);
    };

    let activities: Vec<GeneratedActivity> = crop
        .activities
        .iter()
        .enumerate()
        .filter_map(|(index, template)| match generate_activity(template, year) {
            Ok(activity) => Some(activity),
            Err(reason) => {
                warn!(
                    "event=activity_skipped module=schedule region={:?} crop={:?} index={} activity={:?} reason={:?}",
                    region, crop_name, index, template.name, reason
                );
                None
            }
        })
        .collect();

    debug!(
        "event=schedule_generate module=schedule status=ok region={:?} crop={:?} year={} templates={} activities={}",
        region,
        crop_name,
        year,
        crop.activities.len(),
        activities.len()
    );

    Schedule::with_activities(region, crop_name, year, activities)
}

/// Generate one dated activity from a template
///
/// # Returns
/// The activity, or a message explaining why the template is malformed
pub fn generate_activity(
    template: &ActivityTemplate,
    year: i32,
) -> Result<GeneratedActivity, String> {
    if template.name.trim().is_empty() {
        return Err("Activity template has no name".to_string());
    }

    let month = template.start_month()?;
    let start_date = NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)
        .ok_or_else(|| format!("Year {} is out of range", year))?;
    let duration = template.parsed_duration()?;
    let end_date = end_date_for(start_date, duration).ok_or_else(|| {
        format!(
            "Duration '{}' from {} overflows the calendar",
            duration, start_date
        )
    })?;

    Ok(GeneratedActivity {
        activity_name: template.name.clone(),
        start_date,
        end_date,
    })
}

/// Apply a duration to a start date
///
/// Days and weeks add whole days; months use calendar-month arithmetic,
/// clamping the day-of-month when the target month is shorter.
///
/// # Returns
/// The end date, or `None` if the result falls outside the supported range
pub fn end_date_for(start: NaiveDate, duration: ActivityDuration) -> Option<EndDate> {
    let ActivityDuration::Span { magnitude, unit } = duration else {
        return Some(EndDate::Ongoing);
    };

    let end = match unit {
        DurationUnit::Days => start.checked_add_days(chrono::Days::new(u64::from(magnitude))),
        DurationUnit::Weeks => start.checked_add_days(chrono::Days::new(u64::from(magnitude) * 7)),
        DurationUnit::Months => start.checked_add_months(Months::new(magnitude)),
    }?;

    Some(EndDate::Bounded(end))
}
