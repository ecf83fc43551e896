use clap::{Args, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::cmd::config::{Action, BesselJob, Column, Config, FitJob, OutputFormat};

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "\\t" | "tab" => Ok(b'\t'),
        _ => match s.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(format!("delimiter must be a single ASCII character, got '{s}'")),
        },
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "numbind",
    about = "Linear fits, Bessel functions and library status codes",
    version,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// CSV field delimiter (single character, or "tab")
    #[arg(short = 'd', long, value_parser = parse_delimiter, default_value = ",", global = true)]
    pub delimiter: u8,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Describe a library status code
    Strerror {
        #[arg(allow_negative_numbers = true)]
        code: i32,
    },

    /// Fit a straight line to columns of a CSV file
    Fit {
        #[command(subcommand)]
        kind: FitKind,
    },

    /// Bessel functions of the first kind
    Bessel {
        #[command(subcommand)]
        func: BesselCmd,
    },
}

/* ------------------------- fit ------------------------- */

#[derive(Debug, Subcommand)]
pub enum FitKind {
    /// Ordinary least squares
    Linear(FitArgs),

    /// Weighted least squares, weights are reciprocal variances
    Weighted(WeightedArgs),
}

#[derive(Debug, Args)]
pub struct FitArgs {
    /// CSV file with a header row
    #[arg(short = 'i', long = "input", value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    #[arg(long = "x-col", default_value = "x")]
    pub x_col: String,

    #[arg(long = "y-col", default_value = "y")]
    pub y_col: String,

    #[arg(long = "stride-x", default_value_t = 1)]
    pub stride_x: usize,

    #[arg(long = "stride-y", default_value_t = 1)]
    pub stride_y: usize,

    /// Evaluate the fitted line at this x (repeatable)
    #[arg(long = "at", allow_negative_numbers = true)]
    pub at: Vec<f64>,
}

#[derive(Debug, Args)]
pub struct WeightedArgs {
    #[command(flatten)]
    pub fit: FitArgs,

    #[arg(long = "w-col", default_value = "w")]
    pub w_col: String,

    #[arg(long = "stride-w", default_value_t = 1)]
    pub stride_w: usize,
}

/* ------------------------ bessel ------------------------ */

#[derive(Debug, Subcommand)]
pub enum BesselCmd {
    /// J0(x)
    J0 {
        #[arg(allow_negative_numbers = true)]
        x: f64,
    },
    /// J1(x)
    J1 {
        #[arg(allow_negative_numbers = true)]
        x: f64,
    },
    /// Jn(x)
    Jn {
        #[arg(allow_negative_numbers = true)]
        order: i32,
        #[arg(allow_negative_numbers = true)]
        x: f64,
    },
    /// J_nmin(x) ..= J_nmax(x)
    Array {
        #[arg(allow_negative_numbers = true)]
        nmin: i32,
        #[arg(allow_negative_numbers = true)]
        nmax: i32,
        #[arg(allow_negative_numbers = true)]
        x: f64,
    },
}

// -------- Map CLI -> Config/Action --------

impl FitArgs {
    fn into_job(self, w: Option<Column>) -> FitJob {
        FitJob {
            input: self.input,
            x: Column { name: self.x_col, stride: self.stride_x },
            y: Column { name: self.y_col, stride: self.stride_y },
            w,
            at: self.at,
        }
    }
}

impl Cli {
    pub fn into_config(self) -> Config {
        let output = if self.json { OutputFormat::Json } else { OutputFormat::Text };

        let action = match self.command {
            Commands::Strerror { code } => Action::Strerror { code },
            Commands::Fit { kind } => match kind {
                FitKind::Linear(args) => Action::Fit(args.into_job(None)),
                FitKind::Weighted(args) => {
                    let w = Column { name: args.w_col, stride: args.stride_w };
                    Action::Fit(args.fit.into_job(Some(w)))
                },
            },
            Commands::Bessel { func } => Action::Bessel(match func {
                BesselCmd::J0 { x } => BesselJob::J0 { x },
                BesselCmd::J1 { x } => BesselJob::J1 { x },
                BesselCmd::Jn { order, x } => BesselJob::Jn { order, x },
                BesselCmd::Array { nmin, nmax, x } => BesselJob::Array { nmin, nmax, x },
            }),
        };

        Config { action, output, delimiter: self.delimiter }
    }
}
