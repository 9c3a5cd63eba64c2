// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Anchorroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Anchorroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Anchorroute CLI entrypoint.
//!
//! Reads a JSON route request (or an array of them) and prints the routed polyline(s) as
//! JSON on stdout. Logs go to stderr and are filtered through `RUST_LOG`.
//!
//! Exit codes: `0` routed, `1` at least one route could not be found, `2` invalid input.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anchorroute::request::{execute_batch, request_schema, BatchEntry};
use anchorroute::{RequestDocument, RequestError};
use clap::Parser;
use serde::Serialize;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "anchorroute", version, about = "Route orthogonal traces around obstacles")]
struct Cli {
    /// Request file, or `-` for stdin.
    #[arg(required_unless_present = "schema")]
    request: Option<PathBuf>,

    /// Override the grid step size of every request.
    #[arg(long, value_name = "S")]
    step_size: Option<f64>,

    /// Override the search budget of every request.
    #[arg(long, value_name = "N")]
    max_expansions: Option<usize>,

    /// Pretty-print the response JSON.
    #[arg(long)]
    pretty: bool,

    /// Print the request JSON schema and exit.
    #[arg(long)]
    schema: bool,
}

fn init_logging() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn read_request(path: &Path) -> Result<String, RequestError> {
    if path.as_os_str() == "-" {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        Ok(input)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), RequestError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

fn exit_code(err: &RequestError) -> ExitCode {
    if err.is_routing_failure() {
        ExitCode::from(1)
    } else {
        ExitCode::from(2)
    }
}

fn run(cli: Cli) -> Result<ExitCode, RequestError> {
    if cli.schema {
        print_json(&request_schema(), true)?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(path) = cli.request.as_ref() else {
        return Ok(ExitCode::from(2));
    };
    let mut document = RequestDocument::parse(&read_request(path)?)?;
    for request in document.requests_mut() {
        if let Some(step_size) = cli.step_size {
            request.options.step_size = step_size;
        }
        if let Some(max_expansions) = cli.max_expansions {
            request.options.max_expansions = max_expansions;
        }
    }

    match document {
        RequestDocument::Single(request) => {
            let response = request.execute()?;
            info!(vertices = response.vertex_count, length = response.length, "routed");
            print_json(&response, cli.pretty)?;
            Ok(ExitCode::SUCCESS)
        }
        RequestDocument::Batch(requests) => {
            let results = execute_batch(&requests);
            for err in results.iter().filter_map(|result| result.as_ref().err()) {
                error!(%err, "request failed");
            }
            let invalid = |result: &Result<_, RequestError>| {
                matches!(result, Err(err) if !err.is_routing_failure())
            };
            let code = if results.iter().any(invalid) {
                ExitCode::from(2)
            } else if results.iter().any(Result::is_err) {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
            let entries = results.into_iter().map(BatchEntry::from).collect::<Vec<_>>();
            print_json(&entries, cli.pretty)?;
            Ok(code)
        }
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            error!(%err, "routing aborted");
            eprintln!("error: {err}");
            exit_code(&err)
        }
    }
}
