//! Calendar projection tests
mod common;

use common::{date, fixture_calendar};
use crop_calendar::calendar::{activities_on_date, first_activity_on, marked_dates};
use crop_calendar::{ColorTag, EndDate, GeneratedActivity, Schedule};

fn activity(name: &str, start: (u32, u32), end: (u32, u32)) -> GeneratedActivity {
    GeneratedActivity {
        activity_name: name.to_string(),
        start_date: date(2024, start.0, start.1),
        end_date: EndDate::Bounded(date(2024, end.0, end.1)),
    }
}

// Overlapping activities are returned together, in schedule order
#[test]
fn test_activities_on_date_keeps_schedule_order() {
    let calendar = fixture_calendar();
    let schedule = calendar.generate_schedule_for_year("Valley", "Maize", 2024);

    let names = |d| -> Vec<String> {
        activities_on_date(&schedule, d)
            .into_iter()
            .map(|a| a.activity_name.clone())
            .collect()
    };

    assert_eq!(
        names(date(2024, 3, 5)),
        vec!["Seeding", "Fertilization", "Irrigation"]
    );
    assert_eq!(names(date(2024, 3, 12)), vec!["Seeding", "Irrigation"]);
    assert_eq!(names(date(2024, 3, 20)), vec!["Irrigation"]);
    // Inclusive end
    assert_eq!(names(date(2024, 4, 1)), vec!["Irrigation"]);
    assert!(names(date(2024, 4, 2)).is_empty());
    assert!(names(date(2024, 2, 29)).is_empty());
}

// Order follows the schedule, not activity names or dates
#[test]
fn test_overlap_order_is_not_sorted() {
    let schedule = Schedule::with_activities(
        "Valley",
        "Maize",
        2024,
        vec![
            activity("Weeding", (3, 10), (3, 20)),
            activity("Fertilization", (3, 1), (3, 31)),
        ],
    );

    let on_day: Vec<&str> = activities_on_date(&schedule, date(2024, 3, 15))
        .iter()
        .map(|a| a.activity_name.as_str())
        .collect();
    assert_eq!(on_day, vec!["Weeding", "Fertilization"]);

    let marking = marked_dates(&schedule);
    let dots: Vec<&str> = marking
        .get(date(2024, 3, 15))
        .unwrap()
        .dots
        .iter()
        .map(|d| d.activity_name.as_str())
        .collect();
    assert_eq!(dots, vec!["Weeding", "Fertilization"]);
}

// Back-to-back activities mark every day of March without gaps
#[test]
fn test_back_to_back_activities_cover_every_day() {
    let schedule = Schedule::with_activities(
        "Valley",
        "Maize",
        2024,
        vec![
            activity("Seeding", (3, 1), (3, 15)),
            activity("Irrigation", (3, 16), (3, 31)),
        ],
    );
    let marking = marked_dates(&schedule);

    assert_eq!(marking.len(), 31);
    for day in 1..=31 {
        let marked = marking.get(date(2024, 3, day)).unwrap();
        assert_eq!(marked.dots.len(), 1, "March {} should carry one dot", day);
    }
    assert_eq!(marking.get(date(2024, 3, 15)).unwrap().dots[0].activity_name, "Seeding");
    assert_eq!(marking.get(date(2024, 3, 16)).unwrap().dots[0].activity_name, "Irrigation");
    assert!(marking.get(date(2024, 2, 29)).is_none());
    assert!(marking.get(date(2024, 4, 1)).is_none());
}

// Marked days carry one dot per active activity with a stable colour
#[test]
fn test_marked_dates_dots_and_colors() {
    let calendar = fixture_calendar();
    let schedule = calendar.generate_schedule_for_year("Valley", "Maize", 2024);
    let marking = calendar.marked_dates(&schedule);

    // Mar 1 .. Apr 1 inclusive
    assert_eq!(marking.len(), 32);

    let first_day = marking.get(date(2024, 3, 1)).unwrap();
    let colors: Vec<ColorTag> = first_day.dots.iter().map(|d| d.color).collect();
    assert_eq!(
        colors,
        vec![ColorTag::Seeding, ColorTag::Fertilization, ColorTag::Irrigation]
    );
    assert!(marking.is_multi_activity_day(date(2024, 3, 1)));
    assert!(!marking.is_multi_activity_day(date(2024, 3, 20)));
    assert!(!marking.is_multi_activity_day(date(2024, 6, 1)));

    // Same activity, same colour on every day
    for (_, day) in marking.iter() {
        for dot in &day.dots {
            assert_eq!(dot.color, ColorTag::for_activity(&dot.activity_name));
        }
    }

    // Recomputing gives the same result
    assert_eq!(marking, calendar.marked_dates(&schedule));
}

// Ongoing activities are projected up to the start of the last activity
#[test]
fn test_ongoing_projection() {
    let calendar = fixture_calendar();
    let schedule = calendar.generate_schedule_for_year("Valley", "Tea", 2024);
    let marking = calendar.marked_dates(&schedule);

    let names_on = |d| -> Vec<String> {
        marking
            .get(d)
            .map(|m| m.dots.iter().map(|dot| dot.activity_name.clone()).collect())
            .unwrap_or_default()
    };

    assert_eq!(names_on(date(2024, 5, 1)), vec!["Planting", "Irrigation"]);
    assert_eq!(names_on(date(2024, 6, 15)), vec!["Irrigation"]);
    assert_eq!(
        names_on(date(2024, 9, 1)),
        vec!["Irrigation", "Harvest Plucking"]
    );
    assert_eq!(names_on(date(2024, 9, 2)), vec!["Harvest Plucking"]);

    let on_day: Vec<&str> = calendar
        .activities_on_date(&schedule, date(2024, 7, 4))
        .iter()
        .map(|a| a.activity_name.as_str())
        .collect();
    assert_eq!(on_day, vec!["Irrigation"]);
}

// An ongoing activity that is also the last one covers its start day only
#[test]
fn test_ongoing_last_activity_covers_one_day() {
    let schedule = Schedule::with_activities(
        "Valley",
        "Tea",
        2024,
        vec![
            activity("Planting", (4, 1), (4, 10)),
            GeneratedActivity {
                activity_name: "Irrigation".to_string(),
                start_date: date(2024, 5, 1),
                end_date: EndDate::Ongoing,
            },
        ],
    );
    let marking = marked_dates(&schedule);

    assert_eq!(marking.len(), 11);
    assert!(marking.get(date(2024, 5, 1)).is_some());
    assert!(marking.get(date(2024, 5, 2)).is_none());
}

// An empty schedule marks nothing
#[test]
fn test_empty_schedule_projection() {
    let schedule = Schedule::empty("Valley", "Banana", 2024);
    assert!(marked_dates(&schedule).is_empty());
    assert!(activities_on_date(&schedule, date(2024, 3, 1)).is_empty());
    assert!(first_activity_on(&schedule, date(2024, 3, 1)).is_none());
}

// Picking a day shows its first activity by default
#[test]
fn test_first_activity_on() {
    let calendar = fixture_calendar();
    let schedule = calendar.generate_schedule_for_year("Valley", "Maize", 2024);

    let first = first_activity_on(&schedule, date(2024, 3, 12)).unwrap();
    assert_eq!(first.activity_name, "Seeding");
    let first = first_activity_on(&schedule, date(2024, 3, 25)).unwrap();
    assert_eq!(first.activity_name, "Irrigation");
}

// Only one day is selected at a time; selecting an empty day adds an entry
#[test]
fn test_select_day() {
    let schedule = Schedule::with_activities(
        "Valley",
        "Maize",
        2024,
        vec![activity("Seeding", (3, 1), (3, 15))],
    );
    let mut marking = marked_dates(&schedule);
    assert_eq!(marking.selected_date(), None);

    marking.select(date(2024, 6, 1));
    assert_eq!(marking.selected_date(), Some(date(2024, 6, 1)));
    assert_eq!(marking.len(), 16);
    assert!(marking.get(date(2024, 6, 1)).unwrap().dots.is_empty());

    marking.select(date(2024, 3, 5));
    assert_eq!(marking.selected_date(), Some(date(2024, 3, 5)));
    // The empty entry for June 1 is gone again
    assert_eq!(marking.len(), 15);
    assert!(marking.get(date(2024, 6, 1)).is_none());
    let selected = marking.get(date(2024, 3, 5)).unwrap();
    assert!(selected.selected);
    assert_eq!(selected.dots.len(), 1);

    marking.select(date(2024, 3, 6));
    assert!(!marking.get(date(2024, 3, 5)).unwrap().selected);
    assert_eq!(marking.len(), 15);
}

// Days can be filtered to a single month
#[test]
fn test_in_month() {
    let calendar = fixture_calendar();
    let schedule = calendar.generate_schedule_for_year("Valley", "Maize", 2024);
    let marking = calendar.marked_dates(&schedule);

    assert_eq!(marking.in_month(2024, 3).count(), 31);
    assert_eq!(marking.in_month(2024, 4).count(), 1);
    assert_eq!(marking.in_month(2025, 3).count(), 0);
}
