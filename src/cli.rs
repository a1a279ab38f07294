//! Command-line parsing for the two front-ends.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::export::ExportFormat;

/// Options of the interactive terminal front-end.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunArgs {
    pub config: Option<PathBuf>,
}

/// Options of the single-frame file export front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArgs {
    pub config: Option<PathBuf>,
    pub out: PathBuf,
    pub format: ExportFormat,
    pub gradient: bool,
    pub gaze: bool,
}

impl Default for ExportArgs {
    fn default() -> Self {
        Self {
            config: None,
            out: PathBuf::from("out.ppm"),
            format: ExportFormat::Ppm,
            gradient: false,
            gaze: false,
        }
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a String> {
    args.get(i)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

pub fn parse_run_args(args: &[String]) -> Result<RunArgs> {
    let mut parsed = RunArgs::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                parsed.config = Some(PathBuf::from(value(args, i, "--config")?));
            }
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(parsed)
}

pub fn parse_export_args(args: &[String]) -> Result<ExportArgs> {
    let mut parsed = ExportArgs::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                parsed.config = Some(PathBuf::from(value(args, i, "--config")?));
            }
            "--out" | "-o" => {
                i += 1;
                parsed.out = PathBuf::from(value(args, i, "--out")?);
            }
            "--format" => {
                i += 1;
                let v = value(args, i, "--format")?;
                parsed.format = ExportFormat::from_str(v)
                    .ok_or_else(|| anyhow!("invalid --format value: {}", v))?;
            }
            "--gradient" => parsed.gradient = true,
            "--gaze" => parsed.gaze = true,
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(parsed)
}
