//! Formatting helper functions for the text presentation shell
//!
//! This module turns catalog listings, schedules and calendar markings into
//! display strings. Empty inputs always render an explicit message.

use crate::calendar::{CalendarMarking, DayMarking, activities_on_date};
use crate::catalog::CropSummary;
use crate::schedule::{EndDate, GeneratedActivity, Schedule};
use crate::validation::FormSelection;
use chrono::{Datelike, Month, Months, NaiveDate};

/// Shown when there is no schedule to display
pub const NO_SCHEDULE: &str =
    "No schedule generated yet. Please fill out the form to create a crop calendar.";

/// Shown when a picked day has no activities
pub const NO_ACTIVITIES_ON_DATE: &str = "No activities scheduled for this date.";

fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Date range label used by the timeline and day detail views
///
/// - single day: "Mar 1"
/// - bounded: "Mar 1 - Mar 15"
/// - ongoing: "May 1 - Ongoing"
pub fn format_date_range(activity: &GeneratedActivity) -> String {
    match activity.end_date {
        EndDate::Bounded(_) if activity.is_single_day() => short_date(activity.start_date),
        EndDate::Bounded(end) => format!("{} - {}", short_date(activity.start_date), short_date(end)),
        EndDate::Ongoing => format!("{} - Ongoing", short_date(activity.start_date)),
    }
}

/// Format the regions list
pub fn format_regions(regions: &[&str]) -> String {
    if regions.is_empty() {
        return "No regions found".to_string();
    }

    let mut result = format!("Found {} region(s):\n\n", regions.len());
    for region in regions {
        result.push_str(&format!("- {}\n", region));
    }
    result
}

/// Format the crops available in a region
pub fn format_crops(region: &str, crops: &[CropSummary<'_>]) -> String {
    if crops.is_empty() {
        return format!("No crops found for region '{}'", region);
    }

    let mut result = format!("Found {} crop(s) in {}:\n\n", crops.len(), region);
    for crop in crops {
        result.push_str(&format!("- {}\n", crop.name));
        if !crop.soil_types.is_empty() {
            result.push_str(&format!("  Soil types: {}\n", crop.soil_types.join(", ")));
        }
        if !crop.climate_conditions.is_empty() {
            result.push_str(&format!(
                "  Climate conditions: {}\n",
                crop.climate_conditions.join(", ")
            ));
        }
    }
    result
}

/// Header shown above the calendar
pub fn format_schedule_header(schedule: &Schedule, selection: &FormSelection) -> String {
    let mut result = format!("Crop Calendar: {}\n", schedule.crop);
    result.push_str(&format!("  Region: {}\n", schedule.region));
    result.push_str(&format!("  Soil type: {}\n", selection.soil_type));
    result.push_str(&format!(
        "  Climate condition: {}\n",
        selection.climate_condition
    ));
    if let Some(start) = schedule.start_date() {
        result.push_str(&format!("  Start: {}\n", start.format("%b %-d, %Y")));
    }
    result
}

/// One card per activity with its start and end date
pub fn format_schedule_cards(schedule: &Schedule) -> String {
    if schedule.is_empty() {
        return NO_SCHEDULE.to_string();
    }

    let mut result = String::new();
    for activity in schedule.activities() {
        result.push_str(&format!("{}\n", activity.activity_name));
        result.push_str(&format!("  Start Date: {}\n", activity.start_date));
        result.push_str(&format!("  End Date: {}\n", activity.end_date));
    }
    result
}

/// Activity timeline in schedule order
pub fn format_timeline(schedule: &Schedule) -> String {
    if schedule.is_empty() {
        return NO_SCHEDULE.to_string();
    }

    let mut result = String::from("Activity Timeline\n\n");
    let last = schedule.len() - 1;
    for (index, activity) in schedule.activities().iter().enumerate() {
        result.push_str(&format!("o {}\n", format_date_range(activity)));
        let connector = if index < last { "|" } else { " " };
        result.push_str(&format!("{}   {}\n", connector, activity.activity_name));
    }
    result
}

/// Activities active on a picked day
pub fn format_day_activities(schedule: &Schedule, date: NaiveDate) -> String {
    let mut result = format!("Activities for {}\n\n", long_date(date));

    let activities = activities_on_date(schedule, date);
    if activities.is_empty() {
        result.push_str(NO_ACTIVITIES_ON_DATE);
        result.push('\n');
        return result;
    }

    for activity in activities {
        let range = if activity.is_single_day() {
            "Single day".to_string()
        } else {
            format_date_range(activity)
        };
        result.push_str(&format!("- {} ({})\n", activity.activity_name, range));
    }
    result
}

fn day_marker(marking: Option<&DayMarking>) -> char {
    match marking {
        Some(m) if m.selected => '#',
        Some(m) if m.is_multi_activity() => '+',
        Some(m) if !m.dots.is_empty() => '*',
        _ => ' ',
    }
}

/// Month grid with a marker after each day
///
/// Markers: `*` one activity, `+` several activities, `#` selected day.
/// The grid is followed by the dots of every marked day in the month.
pub fn format_month_calendar(marking: &CalendarMarking, year: i32, month: Month) -> String {
    let Some(first) = NaiveDate::from_ymd_opt(year, month.number_from_month(), 1) else {
        return format!("Year {} is out of range", year);
    };
    let Some(last) = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
    else {
        return format!("Year {} is out of range", year);
    };
    let last_day = last.day();

    let mut result = format!("{} {}\n", month.name(), year);
    result.push_str(" Mo  Tu  We  Th  Fr  Sa  Su\n");

    let offset = first.weekday().num_days_from_monday() as usize;
    let mut line = "    ".repeat(offset);
    for (day, date) in first.iter_days().take(last_day as usize).enumerate() {
        line.push_str(&format!(" {:>2}{}", day + 1, day_marker(marking.get(date))));
        if (offset + day + 1) % 7 == 0 {
            result.push_str(line.trim_end());
            result.push('\n');
            line.clear();
        }
    }
    if !line.is_empty() {
        result.push_str(line.trim_end());
        result.push('\n');
    }

    let mut marked = marking
        .in_month(year, month.number_from_month())
        .filter(|(_, m)| !m.dots.is_empty())
        .peekable();
    if marked.peek().is_none() {
        result.push_str("\nNo activities this month.\n");
        return result;
    }

    result.push('\n');
    for (date, day) in marked {
        let dots: Vec<String> = day
            .dots
            .iter()
            .map(|dot| format!("{} ({})", dot.activity_name, dot.color.hex()))
            .collect();
        result.push_str(&format!("{}: {}\n", short_date(*date), dots.join(", ")));
    }
    result
}
