/// Unit tests for habit store mutations
use habittrack::*;

fn draft(name: &str, goal: u32) -> HabitDraft {
    HabitDraft::new(name, goal, Frequency::Daily, "Health", ColorTag::default())
}

fn seeded_habit(id: u64, goal: u32, progress: u32, streak: u32) -> Habit {
    Habit::from_existing(
        HabitId(id),
        format!("Habit {}", id),
        goal,
        progress,
        Frequency::Daily,
        "Test".to_string(),
        streak,
        Vec::new(),
        ColorTag::default(),
    )
}

#[test]
fn completion_increments_progress_by_exactly_one() {
    let mut store = HabitStore::with_habits(vec![seeded_habit(1, 8, 3, 0)]);

    store.record_completion(HabitId(1)).unwrap();

    let habit = store.get(HabitId(1)).unwrap();
    assert_eq!(habit.current_progress, 4);
    assert_eq!(habit.streak, 0, "streak must not move below the goal");
}

#[test]
fn completion_crossing_goal_bumps_streak_and_fires_event() {
    // A habit one step away from its goal, with an existing streak.
    let mut store = HabitStore::with_habits(vec![seeded_habit(1, 1, 0, 5)]);

    let event = store.record_completion(HabitId(1)).unwrap();

    let habit = store.get(HabitId(1)).unwrap();
    assert_eq!(habit.current_progress, 1);
    assert_eq!(habit.streak, 6);

    let event = event.expect("the completion notification must fire");
    assert_eq!(event.habit_id, HabitId(1));
    assert_eq!(event.streak, 6);
}

#[test]
fn completion_on_already_complete_habit_is_a_no_op() {
    let mut store = HabitStore::with_habits(vec![seeded_habit(1, 2, 2, 4)]);
    let before = store.snapshot();

    let result = store.record_completion(HabitId(1));

    assert_eq!(
        result.unwrap_err(),
        StoreError::AlreadyComplete { id: HabitId(1) }
    );
    assert_eq!(store.habits(), before.as_slice());
}

#[test]
fn add_with_blank_name_is_rejected() {
    let mut store = HabitStore::new();
    let before = store.snapshot();

    let result = store.add_habit(&HabitDraft::new(
        "  ",
        1,
        Frequency::Daily,
        "",
        ColorTag::new("bg-blue-500"),
    ));

    assert!(matches!(result, Err(StoreError::Validation(_))));
    assert_eq!(store.habits(), before.as_slice());
}

#[test]
fn add_with_zero_goal_is_accepted_and_clamped() {
    let mut store = HabitStore::new();

    store
        .add_habit(&HabitDraft::new(
            "Yoga",
            0,
            Frequency::Daily,
            "Health",
            ColorTag::new("bg-red-500"),
        ))
        .unwrap();

    let habit = &store.habits()[0];
    assert_eq!(habit.name, "Yoga");
    assert_eq!(habit.goal, 1);
}

#[test]
fn edit_preserves_id_progress_streak_and_history() {
    let mut seeded = seeded_habit(3, 4, 2, 7);
    seeded.history = vec![HistoryEntry::new(
        chrono::NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        true,
    )];
    let history = seeded.history.clone();
    let mut store = HabitStore::with_habits(vec![seeded]);

    store
        .edit_habit(HabitId(3), &draft("Renamed", 9))
        .unwrap();

    let habit = store.get(HabitId(3)).unwrap();
    assert_eq!(habit.id, HabitId(3));
    assert_eq!(habit.name, "Renamed");
    assert_eq!(habit.goal, 9);
    assert_eq!(habit.current_progress, 2);
    assert_eq!(habit.streak, 7);
    assert_eq!(habit.history, history);
}

#[test]
fn edit_keeps_list_position() {
    let mut store = HabitStore::with_habits(vec![
        seeded_habit(1, 1, 0, 0),
        seeded_habit(2, 1, 0, 0),
        seeded_habit(3, 1, 0, 0),
    ]);

    store.edit_habit(HabitId(2), &draft("Middle", 1)).unwrap();

    let names: Vec<&str> = store.habits().iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Habit 1", "Middle", "Habit 3"]);
}

#[test]
fn operations_after_delete_report_not_found() {
    let mut store = HabitStore::with_habits(vec![seeded_habit(1, 1, 0, 0)]);
    store.delete_habit(HabitId(1)).unwrap();
    let before = store.snapshot();

    let edit = store.edit_habit(HabitId(1), &draft("Gone", 1));
    assert_eq!(edit.unwrap_err(), StoreError::NotFound { id: HabitId(1) });

    let complete = store.record_completion(HabitId(1));
    assert_eq!(
        complete.unwrap_err(),
        StoreError::NotFound { id: HabitId(1) }
    );

    assert_eq!(store.habits(), before.as_slice());
}

#[test]
fn delete_unknown_id_reports_not_found() {
    let mut store = HabitStore::new();
    let result = store.delete_habit(HabitId(99));
    assert_eq!(result.unwrap_err(), StoreError::NotFound { id: HabitId(99) });
}

#[test]
fn new_ids_never_collide_with_seeded_ones() {
    let mut store = HabitStore::with_habits(vec![seeded_habit(7, 1, 0, 0)]);

    store.add_habit(&draft("New", 1)).unwrap();

    let ids: Vec<u64> = store.habits().iter().map(|h| h.id.value()).collect();
    assert_eq!(ids, vec![7, 8]);
}
