use std::io;
use std::process::ExitCode;

use anyhow::Context;
use svg_batch_rasterize::{check_dependencies, convert_all, Config};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdout = io::stdout();
    match convert_all(check_dependencies, &Config::default(), &mut stdout.lock()).context("conversion aborted") {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
