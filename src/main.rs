/// Main entry point for the habit tracking dashboard demo
///
/// This binary seeds the in-memory mock data, applies any completions
/// requested on the command line, and renders the dashboard views as text
/// or JSON. It stands in for the presentation layer: it consumes the
/// completion notifications and decides how errors surface to the user.

use chrono::Datelike;
use clap::Parser;
use tracing::info;

use habittrack::{Dashboard, DashboardView, Habit, HabitId, StoreError};

/// Command line arguments for the dashboard demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Record a completion for the habit with this id (repeatable)
    #[arg(long = "complete", value_name = "ID")]
    complete: Vec<u64>,

    /// Print the dashboard view as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habittrack={}", log_level))
        .with_writer(std::io::stderr) // Keep stdout for the rendered views
        .init();

    info!("Starting habit dashboard demo");

    let mut dashboard = Dashboard::with_mock_data();

    for raw in &args.complete {
        let id = HabitId(*raw);
        match dashboard.complete_habit(id) {
            Ok(Some(event)) => {
                // The celebratory effect: a discrete notification, no
                // click coordinates involved.
                println!(
                    "🎉 {} completed! Streak is now {} days.",
                    event.name, event.streak
                );
            }
            Ok(None) => {}
            Err(err @ (StoreError::AlreadyComplete { .. } | StoreError::NotFound { .. })) => {
                eprintln!("Skipping completion for habit {}: {}", id, err);
            }
            Err(err) => return Err(err.into()),
        }
    }

    if args.json {
        println!("{}", dashboard.overview_json()?);
    } else {
        let view = dashboard.overview();
        render_text(&dashboard, &view);
    }

    info!("Dashboard demo finished");
    Ok(())
}

/// Render the four dashboard tabs as plain text
fn render_text(dashboard: &Dashboard, view: &DashboardView) {
    println!("Welcome back, {}!", view.user.first_name());
    println!("Here's your progress overview.");
    println!();

    let summary = &view.summary;
    println!("== Dashboard ==");
    println!("Total Habits:      {}", summary.total_habits);
    println!(
        "Completed Today:   {} / {}",
        summary.completed_today, summary.total_habits
    );
    println!("Longest Streak:    🔥 {} days", summary.longest_streak);
    println!("Overall Progress:  {}%", summary.overall_completion_rate);
    println!();

    println!("Today's Habits");
    for habit in &view.daily_habits {
        println!("  {}", habit_card(habit));
    }
    if !view.weekly_habits.is_empty() {
        println!("This Week's Habits");
        for habit in &view.weekly_habits {
            println!("  {}", habit_card(habit));
        }
    }
    println!();

    println!("== Stats ==");
    println!("Habit Consistency (demo data)");
    for point in &view.consistency {
        println!("  {:<15} {:>5.1}%", point.label, point.consistency);
    }
    println!("🔥 Streaks Overview");
    if view.streak_ranking.is_empty() {
        println!("  No active streaks yet. Keep completing your habits!");
    } else {
        for habit in &view.streak_ranking {
            println!("  {:<15} {} days", habit.name, habit.streak);
        }
    }
    println!("Monthly Activity Heatmap (demo data)");
    println!("  {}", heatmap_row(dashboard));
    println!();

    println!("== Habits ==");
    for habit in dashboard.store().habits() {
        println!(
            "  #{} {} | goal {} / {} | category {}",
            habit.id, habit.name, habit.goal, habit.frequency, habit.category
        );
    }
    println!();

    println!("== Settings ==");
    println!("Name:   {}", view.user.name);
    println!("Joined: {}", view.user.joined_display());
    println!();

    println!("Quick Insights");
    for insight in &view.insights {
        println!("  {}", insight);
    }
}

/// One habit card line: name, progress bar, counts, and streak
fn habit_card(habit: &Habit) -> String {
    let streak = if habit.streak > 1 {
        format!("  🔥 {} day streak", habit.streak)
    } else {
        String::new()
    };

    format!(
        "{:<15} {} {}/{}{}",
        habit.name,
        progress_bar(habit),
        habit.current_progress,
        habit.goal,
        streak
    )
}

/// Ten-slot text progress bar for a habit card
fn progress_bar(habit: &Habit) -> String {
    const WIDTH: usize = 10;
    let filled = ((habit.progress_percent() / 100.0) * WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(WIDTH - filled))
}

/// The heatmap cells as one row of shade characters, today bracketed
fn heatmap_row(dashboard: &Dashboard) -> String {
    const SHADES: [char; 5] = ['.', '░', '▒', '▓', '█'];

    // Fixed 31-day demo month; only the today marker tracks the clock.
    let today = chrono::Utc::now().day();
    dashboard
        .engine()
        .build_month_heatmap(31, today)
        .iter()
        .map(|cell| {
            let shade = SHADES[usize::from(cell.intensity.min(4))];
            if cell.is_today {
                format!("[{}]", shade)
            } else {
                shade.to_string()
            }
        })
        .collect()
}
