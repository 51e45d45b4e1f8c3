/// Integration tests driving the seeded dashboard end to end
use habittrack::*;

#[test]
fn seeded_dashboard_renders_known_overview() {
    let dashboard = Dashboard::with_mock_data();
    let view = dashboard.overview();

    assert_eq!(view.summary.total_habits, 4);
    assert_eq!(view.summary.completed_today, 1);
    assert_eq!(view.summary.longest_streak, 12);
    assert_eq!(view.summary.overall_completion_rate, 38);

    assert_eq!(view.daily_habits.len(), 3);
    assert_eq!(view.weekly_habits.len(), 1);
    assert_eq!(view.streak_ranking[0].name, "Read 30 Mins");
    assert_eq!(view.consistency.len(), 4);
    assert_eq!(view.user.first_name(), "Swastika");
}

#[test]
fn completing_a_habit_updates_the_next_overview() {
    let mut dashboard = Dashboard::with_mock_data();

    // Drink Water sits at 4 of 8: three completions stay below the goal,
    // the fourth crosses it and must fire the notification exactly once.
    let mut events = Vec::new();
    for _ in 0..4 {
        if let Some(event) = dashboard.complete_habit(HabitId(3)).unwrap() {
            events.push(event);
        }
    }

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "Drink Water");
    assert_eq!(events[0].streak, 3);

    let view = dashboard.overview();
    assert_eq!(view.summary.completed_today, 2);

    // A fifth completion is gated off, like the disabled button.
    let result = dashboard.complete_habit(HabitId(3));
    assert_eq!(
        result.unwrap_err(),
        StoreError::AlreadyComplete { id: HabitId(3) }
    );
}

#[test]
fn full_crud_round_through_the_store() {
    let mut dashboard = Dashboard::with_mock_data();

    // Add a habit through the form draft.
    dashboard
        .store_mut()
        .add_habit(&HabitDraft::new(
            "Meditate",
            1,
            Frequency::Daily,
            "Mindfulness",
            ColorTag::new("bg-teal-500"),
        ))
        .unwrap();
    assert_eq!(dashboard.store().len(), 5);

    let id = dashboard.store().habits().last().unwrap().id;
    assert_eq!(id, HabitId(5));

    // Edit it, keeping its tracking state.
    dashboard
        .store_mut()
        .edit_habit(
            id,
            &HabitDraft::new(
                "Evening Meditation",
                2,
                Frequency::Daily,
                "Mindfulness",
                ColorTag::new("bg-teal-500"),
            ),
        )
        .unwrap();
    let edited = dashboard.store().get(id).unwrap();
    assert_eq!(edited.name, "Evening Meditation");
    assert_eq!(edited.current_progress, 0);

    // Delete it and verify it is really gone.
    dashboard.store_mut().delete_habit(id).unwrap();
    assert_eq!(dashboard.store().len(), 4);
    assert_eq!(
        dashboard.store_mut().record_completion(id).unwrap_err(),
        StoreError::NotFound { id }
    );

    // The recomputed view reflects the final list.
    assert_eq!(dashboard.overview().summary.total_habits, 4);
}

#[test]
fn overview_serializes_for_the_json_view() {
    let store = HabitStore::with_habits(mock_habits());
    let engine = StatsEngine::with_metric(Box::new(FixedMetric::new(55.0, 2)));
    let dashboard = Dashboard::new(store, engine, mock_user());

    let json = serde_json::to_value(dashboard.overview()).unwrap();

    assert_eq!(json["summary"]["total_habits"], 4);
    assert_eq!(json["daily_habits"][0]["frequency"], "daily");
    assert_eq!(json["weekly_habits"][0]["frequency"], "weekly");
    assert_eq!(json["consistency"][0]["consistency"], 55.0);
}
