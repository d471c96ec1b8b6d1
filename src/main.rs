mod app;
mod domain;
mod input;
mod notifications;
mod persistence;
mod report;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{
    format_spent, long_date, parse_day_key, parse_duration, today_key, DayView,
};
use persistence::{
    config_file, ensure_data_dir, init_local_data_dir, load_settings, log_file, report_file,
    save_settings, FileStore, Ledger, Settings,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use report::{calculate_day_stats, day_view, render_text};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "optimus")]
#[command(about = "A terminal work/break timer that keeps a daily time ledger", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .optimus directory in the current directory
    Init,
    /// Credit time to a task without running a timer
    Log {
        /// Task name
        task: String,
        /// Duration such as 25m, 1h30m, 90s or bare seconds
        duration: String,
        /// Credit the time as a break taken from this task
        #[arg(long = "break")]
        r#break: bool,
    },
    /// Close out the current day and print its summary
    EndDay,
    /// Clear today's buffers and start over
    NewDay,
    /// Print what has been recorded for the current day
    Summary,
    /// List finished days, or show one of them
    History {
        /// Day to show (YYYY-MM-DD format)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Generate a markdown report for a day
    Report {
        /// Date to generate report for (YYYY-MM-DD format). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,
        /// Output file path. Defaults to <data dir>/report-YYYY-MM-DD.md
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Init) = cli.command {
        let dir = init_local_data_dir()?;
        save_settings(config_file(&dir), &Settings::default())?;
        init_logging(&dir)?;
        Ledger::load(FileStore::new(&dir), &today_key())?;
        info!(dir = %dir.display(), "initialized data directory");

        println!("Initialized optimus directory: {}", dir.display());
        println!();
        println!("Optimus will now use this local directory for its records.");
        println!("Run 'optimus' to start the timer.");
        return Ok(());
    }

    let dir = ensure_data_dir()?;
    init_logging(&dir)?;
    let settings = load_settings(config_file(&dir))?;
    let mut ledger = Ledger::load(FileStore::new(&dir), &today_key())?;

    match cli.command {
        None => run_tui(ledger, settings),
        Some(Commands::Init) => Ok(()),
        Some(Commands::Log {
            task,
            duration,
            r#break,
        }) => {
            let task = task.trim();
            if task.is_empty() {
                anyhow::bail!("Task name cannot be empty");
            }
            let secs = parse_duration(&duration)
                .with_context(|| format!("Invalid duration: {}", duration))?;

            if r#break {
                ledger.add_break_time(task, secs)?;
                println!("Logged {} of break from {}", format_spent(secs), task);
            } else {
                ledger.add_task_time(task, secs)?;
                println!("Logged {} to {}", format_spent(secs), task);
            }
            Ok(())
        }
        Some(Commands::EndDay) => {
            if !ledger.end_day()? {
                println!("Nothing recorded today.");
                return Ok(());
            }
            print_day(ledger.data(), &ledger.data().current_day, "Summary of the Day");
            Ok(())
        }
        Some(Commands::NewDay) => {
            ledger.start_new_day()?;
            println!("Started a new day: {}", long_date(&ledger.data().current_day));
            Ok(())
        }
        Some(Commands::Summary) => {
            let view = ledger.current_day_data();
            if view.is_empty() {
                println!("Nothing recorded today.");
                return Ok(());
            }
            let stats = calculate_day_stats(view);
            let title = format!("Today - {}", long_date(&ledger.data().current_day));
            print!("{}", render_text(&title, &stats));
            Ok(())
        }
        Some(Commands::History { date }) => {
            let data = ledger.data();
            match date {
                Some(day) => {
                    let day = validate_day(&day)?;
                    match data.day(&day) {
                        Some(entry) => {
                            let stats = calculate_day_stats(DayView {
                                tasks: &entry.tasks,
                                breaks: &entry.breaks,
                            });
                            print!("{}", render_text(&long_date(&day), &stats));
                        }
                        None => println!("No finished day recorded for {}", day),
                    }
                }
                None => {
                    let days = data.days_newest_first();
                    if days.is_empty() {
                        println!("No finished days yet.");
                    }
                    for entry in days {
                        let stats = calculate_day_stats(DayView {
                            tasks: &entry.tasks,
                            breaks: &entry.breaks,
                        });
                        println!(
                            "{}  {:<22}  work {:<12}  break {}",
                            entry.date,
                            long_date(&entry.date),
                            format_spent(stats.total_work),
                            format_spent(stats.total_break)
                        );
                    }
                }
            }
            Ok(())
        }
        Some(Commands::Report { date, output }) => {
            let day = match date {
                Some(d) => validate_day(&d)?,
                None => ledger.data().current_day.clone(),
            };
            let output_path = output
                .map(PathBuf::from)
                .unwrap_or_else(|| report_file(&dir, &day));

            println!("Generating report for {}...", day);
            let report_path = report::generate_report(ledger.data(), &day, &output_path)?;
            info!(day = %day, path = %report_path.display(), "report written");
            println!("Report generated: {}", report_path.display());
            Ok(())
        }
    }
}

fn validate_day(day: &str) -> Result<String> {
    parse_day_key(day)
        .map(domain::day_key)
        .with_context(|| format!("Invalid date format. Use YYYY-MM-DD: {}", day))
}

fn print_day(data: &domain::AppData, day: &str, heading: &str) {
    match day_view(data, day) {
        Some(view) => {
            let title = format!("{} - {}", heading, long_date(day));
            print!("{}", render_text(&title, &calculate_day_stats(view)));
        }
        None => println!("No data recorded for {}", day),
    }
}

/// Route tracing output to the log file; the TUI owns the terminal
fn init_logging(dir: &Path) -> Result<()> {
    let path = log_file(dir);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("optimus=info")),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

fn run_tui(ledger: Ledger<FileStore>, settings: Settings) -> Result<()> {
    let mut app = AppState::new(ledger, settings);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Credit whatever was still running, even when the loop failed
    let flushed = app.flush_running(Instant::now());
    session_result(result, flushed)
}

/// Outcome of a TUI session: a loop error wins, then a failed final save
fn session_result(result: Result<()>, flushed: Result<()>) -> Result<()> {
    if let Err(e) = &flushed {
        error!(error = %e, "failed to save running timers on exit");
    }
    if let Err(err) = &result {
        error!(error = %err, "tui exited with error");
    }
    result.and(flushed)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // Midnight crossing: offer to roll over
        app.check_day_change(&today_key());

        terminal.draw(|f| ui::render(f, app, Instant::now()))?;

        // Handle events with timeout for ticking
        let timeout = ticker::poll_timeout(&[&app.work, &app.rest], Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now())?;
    }
}
