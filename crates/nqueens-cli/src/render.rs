use crate::app::App;
use crate::report::NO_SOLUTION_MESSAGE;
use crate::theme::Theme;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use nqueens_core::result::QUEEN;
use nqueens_core::{render_board, SimulationResult};
use std::io::{self, Write};

const PROGRESS_WIDTH: usize = 30;

fn println_colored<W: Write>(out: &mut W, color: Color, text: &str) -> io::Result<()> {
    queue!(out, SetForegroundColor(color), Print(text), ResetColor, Print("\n"))?;
    Ok(())
}

pub fn print_banner<W: Write>(out: &mut W, theme: &Theme) -> io::Result<()> {
    println_colored(out, theme.title, "N-Queens Solver")?;
    println_colored(
        out,
        theme.info,
        "Places N queens on an NxN board so that no two attack each other.",
    )?;
    out.flush()
}

pub fn print_error<W: Write>(out: &mut W, theme: &Theme, message: &str) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(theme.error),
        Print("ERROR: "),
        ResetColor,
        Print(message),
        Print("\n")
    )?;
    out.flush()
}

/// Summary of a finished run with the first solution drawn.
pub fn print_summary<W: Write>(
    out: &mut W,
    theme: &Theme,
    result: &SimulationResult,
) -> io::Result<()> {
    let cancelled = result.status.is_cancelled();
    if cancelled {
        println_colored(
            out,
            theme.error,
            "\nRun cancelled before the search finished: results are partial.",
        )?;
    }

    let Some(first) = result.first() else {
        let message = if cancelled {
            "No solutions were found before the run was cancelled."
        } else {
            NO_SOLUTION_MESSAGE
        };
        println_colored(out, theme.title, &format!("\n{}", message))?;
        return out.flush();
    };

    println_colored(
        out,
        theme.title,
        &format!(
            "\nSummary of the Results for BoardSize = {} and SolutionMode = {}:",
            result.board_size, result.mode
        ),
    )?;
    println_colored(
        out,
        theme.fg,
        &format!("Number of solutions found: {:>10}", result.solution_count),
    )?;
    println_colored(
        out,
        theme.fg,
        &format!("Elapsed time in seconds: {:>12.1}", result.elapsed_secs),
    )?;
    println_colored(
        out,
        theme.title,
        "\nFirst Solution Found - Numbers in parentheses: Column No. and Row No., \
         Starting from the Lower Left Corner:",
    )?;
    println_colored(out, theme.highlight, &first.details)?;
    println_colored(out, theme.title, "\nDrawing of first solution:\n")?;
    queue!(out, Print(render_board(first.queens())))?;
    out.flush()
}

/// `[#####-----]  50.0%`
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!(
        "[{}{}] {:>5.1}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        percent
    )
}

/// Redraw the live board.
pub fn render_live(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;
    let theme = &app.theme;

    execute!(stdout, Hide, Clear(ClearType::All))?;
    queue!(
        stdout,
        MoveTo(1, 0),
        SetForegroundColor(theme.title),
        Print(format!(
            "N-Queens {0}x{0} ({1} mode)",
            app.board_size, app.mode
        ))
    )?;

    // Two cells per square, one line per row, plus header and footer.
    let fits = app.board_size * 2 + 4 <= term_width as usize
        && app.board_size + 7 <= term_height as usize;
    let mut y: u16 = 2;
    if fits {
        render_grid(stdout, app, 2, y)?;
        y += app.board_size as u16 + 1;
    } else {
        let rows: Vec<String> = app
            .queens
            .iter()
            .map(|q| q.map_or_else(|| ".".to_string(), |r| (r + 1).to_string()))
            .collect();
        queue!(
            stdout,
            MoveTo(2, y),
            SetForegroundColor(theme.info),
            Print("Board too large to draw; rows by column: "),
            SetForegroundColor(theme.fg),
            Print(rows.join(" "))
        )?;
        y += 2;
    }

    let bar_color = if app.progress >= 100.0 {
        theme.success
    } else {
        theme.highlight
    };
    queue!(
        stdout,
        MoveTo(2, y),
        SetForegroundColor(bar_color),
        Print(progress_bar(app.progress, PROGRESS_WIDTH)),
        MoveTo(2, y + 1),
        SetForegroundColor(theme.info),
        Print(format!(
            "placements {}  solutions seen {}  elapsed {:.1}s",
            app.placements,
            app.solutions_seen,
            app.elapsed().as_secs_f64()
        )),
        MoveTo(2, y + 3),
        SetForegroundColor(theme.key),
        Print("q / Esc / Ctrl+C"),
        SetForegroundColor(theme.info),
        Print(if app.cancel_requested {
            "  stopping..."
        } else {
            "  stop"
        }),
        ResetColor,
        Show
    )?;
    Ok(())
}

fn render_grid(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let n = app.board_size;
    let active = app.active_column();

    // Row N-1 at the top.
    for (line, row) in (0..n).rev().enumerate() {
        queue!(stdout, MoveTo(x, y + line as u16))?;
        for column in 0..n {
            let has_queen = app.queens[column].is_some_and(|r| r as usize == row);
            let fg = if has_queen && Some(column) == active {
                theme.highlight
            } else {
                theme.queen
            };
            let glyph = if has_queen {
                format!("{} ", QUEEN)
            } else {
                "  ".to_string()
            };
            queue!(
                stdout,
                SetBackgroundColor(theme.square(column, row)),
                SetForegroundColor(fg),
                Print(glyph)
            )?;
        }
        queue!(stdout, ResetColor)?;
    }
    Ok(())
}
