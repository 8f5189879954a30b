// Standard library
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

// External libraries
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

// TILEGRID
use tilegrid::commands::{Response, Session};
use tilegrid::error::GridError;
use tilegrid::patterns;
use tilegrid::terminal_ui::{self, Palette};
use tilegrid::Grid;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Pattern {
    Empty,
    Bordered,
    Room,
}

/// Interactive tile grid. Reads commands from stdin:
/// `get X Y`, `set X Y V`, `raw`, `show`, `size`, `quit`.
#[derive(Parser, Debug)]
#[command(name = "tilegrid", version)]
struct Args {
    /// Grid width (ignored by the room pattern)
    #[arg(long, env = "TILEGRID_WIDTH", default_value_t = 10, allow_negative_numbers = true)]
    width: i32,

    /// Grid height (ignored by the room pattern)
    #[arg(long, env = "TILEGRID_HEIGHT", default_value_t = 5, allow_negative_numbers = true)]
    height: i32,

    /// Starting layout
    #[arg(long, env = "TILEGRID_PATTERN", value_enum, default_value_t = Pattern::Empty)]
    pattern: Pattern,

    /// Print the formatted layout without colours
    #[arg(long)]
    plain: bool,
}

fn build_grid(args: &Args) -> Result<Grid, GridError> {
    match args.pattern {
        Pattern::Empty => patterns::empty(args.width, args.height),
        Pattern::Bordered => patterns::bordered(args.width, args.height),
        Pattern::Room => patterns::room(),
    }
}

fn run(mut session: Session, palette: &Palette) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        match session.execute(&line) {
            Ok(Response::Tile(value)) => writeln!(stdout, "{}", value)?,
            Ok(Response::Written(ok)) => writeln!(stdout, "{}", ok)?,
            Ok(Response::Raw(layout)) => writeln!(stdout, "{}", layout)?,
            Ok(Response::Show) => terminal_ui::draw_grid(&mut stdout, session.grid(), palette)?,
            Ok(Response::Size(width, height)) => writeln!(stdout, "{}x{}", width, height)?,
            Ok(Response::Quit) => break,
            Err(err) => {
                debug!(%err, "command failed");
                eprintln!("{}", err);
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    debug!(?args, "starting");

    let grid = match build_grid(&args) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    let palette = if args.plain {
        Palette::plain()
    } else {
        Palette::default()
    };

    match run(Session::new(grid), &palette) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
