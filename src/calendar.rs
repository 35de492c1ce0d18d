//! Calendar projection of a generated schedule
//!
//! Builds the per-day index used to highlight a month view: every day covered
//! by an activity gets one dot per active activity, in schedule order.

use crate::schedule::{GeneratedActivity, Schedule};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Display colour group of an activity
///
/// Derived from the first word of the activity name, so the same activity
/// always gets the same colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Seeding,
    Planting,
    Fertilization,
    Irrigation,
    Harvest,
    Default,
}

impl ColorTag {
    /// Colour group for an activity name
    pub fn for_activity(name: &str) -> Self {
        let first_word = name.split_whitespace().next().unwrap_or_default();
        match first_word.to_ascii_lowercase().as_str() {
            "seeding" => ColorTag::Seeding,
            "planting" => ColorTag::Planting,
            "fertilization" => ColorTag::Fertilization,
            "irrigation" => ColorTag::Irrigation,
            "harvest" => ColorTag::Harvest,
            _ => ColorTag::Default,
        }
    }

    /// RGB hex colour for rendering
    pub fn hex(&self) -> &'static str {
        match self {
            ColorTag::Seeding => "#8BC34A",
            ColorTag::Planting => "#4CAF50",
            ColorTag::Fertilization => "#673AB7",
            ColorTag::Irrigation => "#03A9F4",
            ColorTag::Harvest => "#FF9800",
            ColorTag::Default => "#9E9E9E",
        }
    }
}

/// One activity marker on a calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkedDot {
    pub activity_name: String,
    pub color: ColorTag,
}

/// Everything shown on a single calendar day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayMarking {
    /// Activity markers in schedule order
    pub dots: Vec<MarkedDot>,
    /// Whether this is the day the user picked
    pub selected: bool,
}

impl DayMarking {
    pub fn is_multi_activity(&self) -> bool {
        self.dots.len() > 1
    }
}

/// Date-keyed calendar markings for a schedule
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarMarking {
    days: BTreeMap<NaiveDate, DayMarking>,
}

impl CalendarMarking {
    /// Mark every day of every activity's inclusive range
    ///
    /// Ongoing activities are projected up to the schedule's effective end
    /// (see [`Schedule::effective_end`]).
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let mut days: BTreeMap<NaiveDate, DayMarking> = BTreeMap::new();

        for activity in schedule.activities() {
            let end = schedule.effective_end(activity);
            let color = ColorTag::for_activity(&activity.activity_name);

            for day in activity.start_date.iter_days().take_while(|d| *d <= end) {
                days.entry(day).or_default().dots.push(MarkedDot {
                    activity_name: activity.activity_name.clone(),
                    color,
                });
            }
        }

        Self { days }
    }

    /// Marking for a day, if anything is shown on it
    pub fn get(&self, date: NaiveDate) -> Option<&DayMarking> {
        self.days.get(&date)
    }

    /// Marked days in date order
    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &DayMarking)> {
        self.days.iter()
    }

    /// Marked days falling in one month
    pub fn in_month(
        &self,
        year: i32,
        month: u32,
    ) -> impl Iterator<Item = (&NaiveDate, &DayMarking)> {
        self.days
            .iter()
            .filter(move |(date, _)| date.year() == year && date.month() == month)
    }

    /// Number of days carrying at least one dot or the selection
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Whether more than one activity is active on the day
    pub fn is_multi_activity_day(&self, date: NaiveDate) -> bool {
        self.get(date).is_some_and(DayMarking::is_multi_activity)
    }

    /// Mark a day as the selected one
    ///
    /// Only one day is selected at a time. Selecting a day with no activities
    /// creates an entry without dots.
    pub fn select(&mut self, date: NaiveDate) {
        if let Some(previous) = self.selected_date() {
            if previous == date {
                return;
            }
            if let Some(marking) = self.days.get_mut(&previous) {
                marking.selected = false;
                if marking.dots.is_empty() {
                    self.days.remove(&previous);
                }
            }
        }

        self.days.entry(date).or_default().selected = true;
    }

    /// The selected day, if any
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.days
            .iter()
            .find(|(_, marking)| marking.selected)
            .map(|(date, _)| *date)
    }
}

/// Build calendar markings for a schedule
pub fn marked_dates(schedule: &Schedule) -> CalendarMarking {
    CalendarMarking::from_schedule(schedule)
}

/// Activities whose inclusive interval contains the date, in schedule order
pub fn activities_on_date(schedule: &Schedule, date: NaiveDate) -> Vec<&GeneratedActivity> {
    schedule
        .activities()
        .iter()
        .filter(|activity| schedule.is_active_on(activity, date))
        .collect()
}

/// The activity shown by default when a day is picked
pub fn first_activity_on(schedule: &Schedule, date: NaiveDate) -> Option<&GeneratedActivity> {
    schedule
        .activities()
        .iter()
        .find(|activity| schedule.is_active_on(activity, date))
}
