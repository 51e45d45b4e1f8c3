/// Mock data seeded at load time
///
/// The dashboard demo has no persistence layer; this is the data set every
/// session starts from.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::domain::{ColorTag, Frequency, Habit, HabitId, HistoryEntry, User};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// The four demo habits the dashboard opens with
pub fn mock_habits() -> Vec<Habit> {
    vec![
        Habit::from_existing(
            HabitId(1),
            "Morning Run".to_string(),
            1,
            0,
            Frequency::Daily,
            "Fitness".to_string(),
            5,
            vec![
                HistoryEntry::new(day(2025, 5, 1), true),
                HistoryEntry::new(day(2025, 4, 30), true),
                HistoryEntry::new(day(2025, 4, 29), true),
            ],
            ColorTag::new("bg-blue-500"),
        ),
        Habit::from_existing(
            HabitId(2),
            "Read 30 Mins".to_string(),
            1,
            1,
            Frequency::Daily,
            "Learning".to_string(),
            12,
            vec![
                HistoryEntry::new(day(2025, 5, 1), true),
                HistoryEntry::new(day(2025, 4, 30), true),
            ],
            ColorTag::new("bg-green-500"),
        ),
        Habit::from_existing(
            HabitId(3),
            "Drink Water".to_string(),
            8,
            4,
            Frequency::Daily,
            "Health".to_string(),
            2,
            vec![
                HistoryEntry::new(day(2025, 5, 1), false),
                HistoryEntry::new(day(2025, 4, 30), true),
            ],
            ColorTag::new("bg-cyan-500"),
        ),
        Habit::from_existing(
            HabitId(4),
            "Weekly Review".to_string(),
            1,
            0,
            Frequency::Weekly,
            "Productivity".to_string(),
            3,
            Vec::new(),
            ColorTag::new("bg-purple-500"),
        ),
    ]
}

/// The demo user profile
pub fn mock_user() -> User {
    User::new(
        "Swastika Shukla",
        "/pp.jpg",
        Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0)
            .single()
            .expect("valid join timestamp"),
    )
}
