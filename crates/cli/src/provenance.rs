use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};

/// Build or runtime override for the recorded engine revision.
const REV_VAR: &str = "ROOMPLAN_REV";

/// What produced a report: the input layout and the analysis settings.
pub struct Payload {
    pub input: String,
    pub layout: String,
    pub params: Value,
}

#[derive(Serialize)]
struct Engine {
    version: &'static str,
    rev: Option<String>,
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    engine: Engine,
    callsite: Callsite,
    input: String,
    layout: String,
    params: Value,
    report: &'a Path,
}

/// Write `<report>.provenance.json` next to a report: engine version and
/// revision, callsite, input layout and analysis settings.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(report: P, payload: Payload) -> Result<PathBuf> {
    let report = report.as_ref();
    let sidecar = report.with_extension("provenance.json");
    let callsite = Location::caller();
    let doc = Sidecar {
        engine: engine(),
        callsite: Callsite {
            file: callsite.file(),
            line: callsite.line(),
        },
        input: payload.input,
        layout: payload.layout,
        params: payload.params,
        report,
    };
    // The report itself was written by `emit`, so its directory exists.
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn engine() -> Engine {
    let rev = option_env!("ROOMPLAN_REV")
        .map(str::to_string)
        .or_else(|| std::env::var(REV_VAR).ok())
        .filter(|s| !s.is_empty());
    Engine {
        version: roomplan::VERSION,
        rev,
    }
}
