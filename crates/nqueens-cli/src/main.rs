mod app;
mod args;
mod render;
mod report;
mod settings;
mod theme;
mod validation;

use anyhow::{Context, Result};
use app::{App, AppAction};
use args::{Cli, RunOptions};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, LevelFilter};
use nqueens_core::{
    ChannelObserver, SimulationResult, SolveTask, Solver, SolverConfig, SolverEvent,
};
use report::Report;
use settings::Settings;
use std::io::{self, Write};
use std::sync::mpsc::Receiver;
use std::time::Duration;
use theme::Theme;
use validation::validate_board_size;

/// Frame interval of the live view
const FRAME: Duration = Duration::from_millis(33);

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = Settings::load(cli.config.as_deref())?;
    let options = RunOptions::resolve(&cli, &settings);
    debug!("{:?}", options);

    let theme = Theme::detect();
    let mut stdout = io::stdout();

    let size = match validate_board_size(options.size, options.mode) {
        Ok(size) => size,
        Err(e) => {
            render::print_error(&mut stdout, &theme, &e.to_string())?;
            std::process::exit(2);
        }
    };

    if !options.json {
        render::print_banner(&mut stdout, &theme)?;
    }

    let result = if options.visualize {
        run_visual(&mut stdout, &options, size, theme.clone())?
    } else {
        Solver::new().solve(size, options.mode)?
    };

    if options.json {
        let json = serde_json::to_string_pretty(&result).context("failed to encode result")?;
        writeln!(stdout, "{}", json)?;
    } else {
        render::print_summary(&mut stdout, &theme, &result)?;
    }

    if let Some(dir) = &options.export_dir {
        let path = Report::new(&result, options.max_output).export(dir)?;
        if !options.json {
            writeln!(stdout, "Report written to {}", path.display())?;
        }
    }

    Ok(())
}

fn run_visual(
    stdout: &mut io::Stdout,
    options: &RunOptions,
    size: usize,
    theme: Theme,
) -> Result<SimulationResult> {
    let config = SolverConfig::visualized(Duration::from_millis(options.delay_ms));
    let (tx, rx) = std::sync::mpsc::channel();
    let task = Solver::with_config(config).spawn(size, options.mode, ChannelObserver::new(tx));
    let mut app = App::new(size, options.mode, theme);

    let outcome = with_terminal(
        stdout,
        |out| {
            enable_raw_mode()?;
            execute!(out, EnterAlternateScreen)
        },
        |out| run_app(out, &mut app, &task, &rx),
        |out| {
            disable_raw_mode()?;
            execute!(out, LeaveAlternateScreen)
        },
    );

    if let Err(e) = outcome {
        task.cancel();
        let _ = task.join();
        return Err(e.into());
    }
    Ok(task.join()?)
}

/// Run `body` between `enter` and `leave`.
///
/// `leave` runs even when `enter` or `body` fails, so a half-initialized
/// terminal is still restored. The first error wins.
fn with_terminal<W, T>(
    out: &mut W,
    enter: impl FnOnce(&mut W) -> io::Result<()>,
    body: impl FnOnce(&mut W) -> io::Result<T>,
    leave: impl FnOnce(&mut W) -> io::Result<()>,
) -> io::Result<T> {
    let outcome = enter(out).and_then(|()| body(out));
    let restored = leave(out);
    let value = outcome?;
    restored?;
    Ok(value)
}

fn run_app(
    stdout: &mut io::Stdout,
    app: &mut App,
    task: &SolveTask,
    events: &Receiver<SolverEvent>,
) -> io::Result<()> {
    loop {
        let finished = task.is_finished();
        for event in events.try_iter() {
            app.handle_event(event);
        }

        render::render_live(stdout, app)?;
        stdout.flush()?;

        if finished {
            break;
        }

        if event::poll(FRAME)? {
            if let Event::Key(key) = event::read()? {
                // Handle Ctrl+C
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
                {
                    app.cancel_requested = true;
                    task.cancel();
                    continue;
                }

                match app.handle_key(key) {
                    AppAction::Continue => {}
                    AppAction::Quit => task.cancel(),
                }
            }
        }
    }

    if app.cancel_requested {
        debug!("live run stopped at {:.1}%", app.progress);
    }
    Ok(())
}
