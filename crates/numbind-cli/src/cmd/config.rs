use crate::csv_parse::{mk_rdr, read_columns};

use numbind_core::fit::{
    fit_linear, fit_weighted_linear, Estimate, LineModel, UnweightedFit, WeightedFit,
};
use numbind_core::sf::{bessel_j0, bessel_j1, bessel_jn, bessel_jn_vec};
use numbind_core::{LibError, NumError};

use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

/* =================== Public configuration types =================== */

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub action: Action,
    pub output: OutputFormat,
    pub delimiter: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Strerror { code: i32 },
    Fit(FitJob),
    Bessel(BesselJob),
}

/// A CSV column and the stride used to sample it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub stride: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FitJob {
    pub input: PathBuf,
    pub x: Column,
    pub y: Column,
    /// weighted fit when present
    pub w: Option<Column>,
    pub at: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BesselJob {
    J0 { x: f64 },
    J1 { x: f64 },
    Jn { order: i32, x: f64 },
    Array { nmin: i32, nmax: i32, x: f64 },
}

/* =================== Error type (no process::exit) =================== */

#[derive(thiserror::Error, Debug)]
pub enum CmdError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Num(#[from] NumError),
    #[error("column '{column}' not found in {path}")]
    MissingColumn { column: String, path: String },
    #[error("row {row}, column '{column}': cannot parse '{value}' as a number")]
    Parse { column: String, row: usize, value: String },
}

/* =================== Reports =================== */

#[derive(Debug, Serialize)]
struct StatusReport {
    code: i32,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct PointEstimate {
    x: f64,
    #[serde(flatten)]
    estimate: Estimate,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum FitOutcome {
    Linear(UnweightedFit),
    Weighted(WeightedFit),
}

impl FitOutcome {
    fn line(&self) -> &dyn LineModel {
        match self {
            FitOutcome::Linear(fit) => fit,
            FitOutcome::Weighted(fit) => fit,
        }
    }
}

#[derive(Debug, Serialize)]
struct FitReport {
    n: usize,
    fit: FitOutcome,
    estimates: Vec<PointEstimate>,
}

#[derive(Debug, Serialize)]
struct BesselReport {
    function: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<i32>,
    x: f64,
    value: f64,
}

#[derive(Debug, Serialize)]
struct BesselArrayReport {
    nmin: i32,
    nmax: i32,
    x: f64,
    values: Vec<f64>,
}

/* =================== Entry point =================== */

impl Config {
    /// Run the action and render its output
    pub fn run(&self) -> Result<String, CmdError> {
        match &self.action {
            Action::Strerror { code } => self.run_strerror(*code),
            Action::Fit(job) => self.run_fit(job),
            Action::Bessel(job) => self.run_bessel(*job),
        }
    }

    fn render<T: Serialize>(
        &self,
        report: &T,
        text: impl FnOnce() -> String,
    ) -> Result<String, CmdError> {
        match self.output {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Text => Ok(text()),
        }
    }
}

/* =================== Actions =================== */

impl Config {
    fn run_strerror(&self, code: i32) -> Result<String, CmdError> {
        let report = StatusReport { code, message: LibError::from_code(code).describe() };
        self.render(&report, || format!("{}: {}", report.code, report.message))
    }

    fn run_fit(&self, job: &FitJob) -> Result<String, CmdError> {
        let mut names = vec![job.x.name.as_str(), job.y.name.as_str()];
        if let Some(w) = &job.w {
            names.push(w.name.as_str());
        }

        let rdr = mk_rdr(&job.input, self.delimiter)?;
        let columns = read_columns(rdr, &names, &job.input.display().to_string())?;
        let (x, y) = (&columns[0], &columns[1]);

        let fit = match &job.w {
            None => FitOutcome::Linear(fit_linear(x, y, job.x.stride, job.y.stride)?),
            Some(w) => FitOutcome::Weighted(fit_weighted_linear(
                x,
                y,
                &columns[2],
                job.x.stride,
                job.y.stride,
                w.stride,
            )?),
        };

        let estimates = job
            .at
            .iter()
            .map(|&at| fit.line().value_at(at).map(|estimate| PointEstimate { x: at, estimate }))
            .collect::<Result<Vec<_>, _>>()?;

        let n = x.len().div_ceil(job.x.stride);
        tracing::info!(n, input = %job.input.display(), "fitted line");

        let report = FitReport { n, fit, estimates };
        self.render(&report, || {
            let mut out = match &report.fit {
                FitOutcome::Linear(fit) => format!("linear fit, n: {}\n{}", report.n, fit),
                FitOutcome::Weighted(fit) => format!("weighted fit, n: {}\n{}", report.n, fit),
            };
            for p in &report.estimates {
                let _ = write!(out, "\ny({}) = {}", p.x, p.estimate);
            }
            out
        })
    }

    fn run_bessel(&self, job: BesselJob) -> Result<String, CmdError> {
        let report = match job {
            BesselJob::J0 { x } => {
                BesselReport { function: "j0", order: None, x, value: bessel_j0(x) }
            },
            BesselJob::J1 { x } => {
                BesselReport { function: "j1", order: None, x, value: bessel_j1(x) }
            },
            BesselJob::Jn { order, x } => {
                BesselReport { function: "jn", order: Some(order), x, value: bessel_jn(order, x) }
            },
            BesselJob::Array { nmin, nmax, x } => {
                let values = bessel_jn_vec(nmin, nmax, x)?;
                let report = BesselArrayReport { nmin, nmax, x, values };
                return self.render(&report, || {
                    (nmin..=nmax)
                        .zip(&report.values)
                        .map(|(n, v)| format!("J{}({}) = {}", n, x, v))
                        .collect::<Vec<_>>()
                        .join("\n")
                });
            },
        };

        self.render(&report, || match report.order {
            Some(n) => format!("J{}({}) = {}", n, report.x, report.value),
            None => format!("{}({}) = {}", report.function.to_uppercase(), report.x, report.value),
        })
    }
}
