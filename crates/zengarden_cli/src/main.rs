//! Build-pipeline entry point for rendering the garden home page.
//!
//! # Responsibility
//! - Load the site configuration and the exported note index.
//! - Render the home fragment and write it to stdout or a file.

use std::env;
use std::path::Path;
use std::process::ExitCode;

use zengarden_core::{
    core_version, default_log_level, home_taxonomy, init_logging, load_index_from_json,
    load_site_config, PageService,
};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let (config_path, notes_path, out_path) = match args.as_slice() {
        [config, notes] => (config.as_str(), notes.as_str(), None),
        [config, notes, out] => (config.as_str(), notes.as_str(), Some(out.as_str())),
        _ => {
            eprintln!("usage: zengarden <site-config.json> <notes.json> [out.html]");
            eprintln!("zengarden_core version={}", core_version());
            return ExitCode::from(2);
        }
    };

    if let Ok(log_dir) = env::var("ZENGARDEN_LOG_DIR") {
        if let Err(message) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {message}");
        }
    }

    match run(config_path, notes_path, out_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(config_path: &str, notes_path: &str, out_path: Option<&str>) -> Result<(), String> {
    let config = load_site_config(Path::new(config_path)).map_err(|err| err.to_string())?;
    let raw_notes = std::fs::read_to_string(notes_path)
        .map_err(|err| format!("failed to read `{notes_path}`: {err}"))?;
    let index = load_index_from_json(&raw_notes).map_err(|err| err.to_string())?;

    let service = PageService::new().map_err(|err| err.to_string())?;
    let html = service
        .render_home(&config, &home_taxonomy(), &index, None)
        .map_err(|err| err.to_string())?;

    match out_path {
        Some(path) => {
            std::fs::write(path, html).map_err(|err| format!("failed to write `{path}`: {err}"))?
        }
        None => print!("{html}"),
    }

    Ok(())
}
