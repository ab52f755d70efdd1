// algotty: step-by-step algorithm and data structure visualizer

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use algotty::config::Config;
use algotty::run::constants::{DEFAULT_ARRAY_SIZE, DEFAULT_CIRCULAR_CAPACITY, DEFAULT_SPEED_MS};
use algotty::run::Immediate;
use algotty::session::Session;
use algotty::ui::App;

/// Algorithm and data structure visualizer for the terminal
#[derive(Parser)]
#[command(name = "algotty", version, about, long_about = None)]
struct Cli {
    /// Delay between animation steps in milliseconds (100-1000)
    #[arg(short, long, default_value_t = DEFAULT_SPEED_MS)]
    speed: u64,

    /// Number of elements in generated arrays (3-20)
    #[arg(long, default_value_t = DEFAULT_ARRAY_SIZE)]
    size: usize,

    /// Circular queue capacity at startup (3-15)
    #[arg(long, default_value_t = DEFAULT_CIRCULAR_CAPACITY)]
    capacity: usize,

    /// Seed for array generation, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Write trace logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Run semicolon-separated commands headless and print the step log
    #[arg(long, value_name = "COMMANDS")]
    batch: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // The TUI owns stdout, so logs only go to a file when asked for
    if let Some(path) = &cli.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let config = Config::new(cli.speed, cli.size, cli.capacity, cli.seed);
    info!(?config, "starting");
    let mut session = Session::new(&config);

    if let Some(commands) = &cli.batch {
        run_batch(&mut session, commands);
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Execute each command to completion without animation, printing what
/// happened
fn run_batch(session: &mut Session, commands: &str) {
    for line in commands.split(';').map(str::trim).filter(|l| !l.is_empty()) {
        println!("> {line}");
        let run = session.control().current_run();
        let logged = session.steps().len();
        let result = session.execute_line(line, &mut Immediate);
        // A new run starts a fresh log; otherwise only print what was added
        let skip = if session.control().current_run() == run {
            logged
        } else {
            0
        };
        for step in session.steps().numbered().skip(skip) {
            println!("  {step}");
        }
        let stats = session.stats();
        println!(
            "  comparisons={} swaps={} passes={} rotations={}",
            stats.comparisons, stats.swaps, stats.passes, stats.rotations
        );
        match result {
            Ok(()) => println!("  status: {}", session.status().message),
            Err(err) => println!("  error: {err}"),
        }
    }
}
