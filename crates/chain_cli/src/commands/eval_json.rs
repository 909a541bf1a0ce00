//! eval-json subcommand: JSON chain request in, JSON reply out.
//!
//! The reply always carries `ok` and `schema_version`; evaluation
//! failures are reported inside the envelope, not as a process error.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use chain_api_models::{cells_from_value, chain_from_request, ChainRequest, EvalReply};

#[derive(Args, Debug)]
pub struct EvalJsonArgs {
    /// Path to the request file; reads stdin when omitted
    pub input: Option<PathBuf>,

    /// Pretty-print the JSON reply
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

pub fn run(args: EvalJsonArgs) -> Result<()> {
    let text = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            buffer
        }
    };

    let reply = match serde_json::from_str::<ChainRequest>(&text) {
        Ok(request) => evaluate_request(&request),
        Err(err) => EvalReply::failure(format!("invalid request: {err}")),
    };

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&reply)?
    } else {
        serde_json::to_string(&reply)?
    };
    println!("{rendered}");
    Ok(())
}

fn evaluate_request(request: &ChainRequest) -> EvalReply {
    let elements = match chain_from_request(request) {
        Ok(elements) => elements,
        Err(err) => return EvalReply::failure(err.to_string()),
    };
    match chain_engine::evaluate(&elements) {
        Ok(value) => EvalReply::success(cells_from_value(&value)),
        Err(err) => EvalReply::failure(err.to_string()),
    }
}
