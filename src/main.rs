// algoviz: Step-by-step algorithm visualizer with timed playback

mod cli;

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use algoviz::producers::Operation;
use algoviz::scheduler::{PlaybackConfig, Scheduler};
use algoviz::trace::Step;
use algoviz::ui::App;
use cli::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = PlaybackConfig {
        tick_delay: Duration::from_millis(cli.delay_ms),
    };
    let operation = cli.command.into_operation();
    log::debug!("operation: {:?}", operation);

    if cli.headless {
        return run_headless(&operation, config);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(operation, config);
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

/// Play the whole trace on stdout, one block per step
fn run_headless(
    operation: &Operation,
    config: PlaybackConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let trace = operation.produce();
    let listing = trace.listing();
    let total = trace.len();
    println!("== {} ({} steps) ==", listing.title, total);

    let mut scheduler = Scheduler::new(config);
    let mut index = 0;
    scheduler.run_blocking(trace, config.tick_delay, |step| {
        index += 1;
        print_step(step, index, total, listing.lines);
    })?;
    Ok(())
}

fn print_step(step: &Step, index: usize, total: usize, lines: &[&str]) {
    let code = step
        .code_line
        .and_then(|l| lines.get(l).map(|text| format!("{:>3}| {}", l + 1, text.trim())))
        .unwrap_or_else(|| "   |".to_string());
    println!("[{}/{}] {}", index, total, code);

    for (ci, container) in step.containers.iter().enumerate() {
        let marks = step.pointers_into(algoviz::trace::ContainerId(ci));
        let cells = container
            .cells
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let roles: Vec<&str> = marks
                    .iter()
                    .filter(|(_, at)| *at == i)
                    .map(|(role, _)| role.label())
                    .collect();
                if roles.is_empty() {
                    v.to_string()
                } else {
                    format!("{}<{}>", v, roles.join(","))
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        println!("    {:>8}: [{}]", container.name, cells);
    }

    match step.outcome {
        Some(outcome) => println!("    => {} ({})", step.message, outcome),
        None => println!("    {}", step.message),
    }
}
