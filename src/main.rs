//! shapes2d - plot parametric 2D shapes in the terminal.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use shapes2d::app::Theme;
use shapes2d::demo::{self, Demo, ShapeDensities};
use shapes2d::present::{TerminalPresenter, TextPresenter};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "shapes2d")]
#[command(about = "Plot parametric 2D shapes in the terminal", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Print the figure as text instead of opening the viewer
    #[arg(long, global = true)]
    print: bool,

    /// Width of the printed figure in columns
    #[arg(long, default_value_t = 80, global = true,
          value_parser = clap::value_parser!(u16).range(10..))]
    width: u16,

    /// Height of the printed figure in rows
    #[arg(long, default_value_t = 40, global = true,
          value_parser = clap::value_parser!(u16).range(5..))]
    height: u16,

    /// Color theme
    #[arg(long, value_enum, default_value_t = ThemeArg::Dark, global = true)]
    theme: ThemeArg,

    /// Enable logging to specified file
    #[arg(long, global = true)]
    log: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw a segment, a V, a square and a circle, one per quadrant (default)
    Shapes(ShapeArgs),
    /// Draw y = 0.4x² - 0.8x - 4 and its reflection
    Parabola,
}

#[derive(ClapArgs, Debug)]
struct ShapeArgs {
    /// Extra points on the x-axis segment
    #[arg(long, default_value_t = 4, allow_negative_numbers = true)]
    x_axis: i64,

    /// Extra points on each leg of the V
    #[arg(long, default_value_t = 4, allow_negative_numbers = true)]
    vee: i64,

    /// Extra points on each side of the square
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    square: i64,

    /// Extra points on the circle
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    circle: i64,
}

impl From<ShapeArgs> for ShapeDensities {
    fn from(args: ShapeArgs) -> Self {
        Self {
            x_axis: args.x_axis,
            vee: args.vee,
            square: args.square,
            circle: args.circle,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => Theme::GruvboxDark,
            ThemeArg::Light => Theme::GruvboxLight,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = File::create(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting shapes2d");
    }

    let demo = match args.command {
        Some(Command::Shapes(shape_args)) => Demo::Shapes(shape_args.into()),
        Some(Command::Parabola) => Demo::Parabola,
        None => Demo::Shapes(ShapeDensities::default()),
    };
    let theme = Theme::from(args.theme);

    let res = if args.print {
        let mut presenter =
            TextPresenter::new(io::stdout().lock(), args.width, args.height).with_theme(theme);
        demo::run(demo, &mut presenter)
    } else {
        demo::run(demo, &mut TerminalPresenter::new(theme))
    };

    if let Err(err) = &res {
        tracing::error!(%err, "shapes2d failed");
    }
    if args.log.is_some() {
        tracing::info!("shapes2d exited");
    }

    res.context("shapes2d failed")
}
