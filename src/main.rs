use chrono::Local;
use clap::Parser;
use env_logger::Env;
use grype2html::args::Args;
use grype2html::errors::*;
use grype2html::grype::Summary;
use grype2html::input;
use grype2html::output::{self, Collision};
use grype2html::report;
use std::env;
use std::io;

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::init_from_env(Env::default().default_filter_or(args.log_level()));

    let collision = args.on_collision.parse::<Collision>()?;

    let doc = input::read_scan(io::stdin().lock())?;

    let summary = Summary::from_scan(&doc);
    if let Some(matches) = summary.matches {
        info!(
            "Found {} matches for {:?}",
            matches,
            summary.target.as_deref().unwrap_or("unknown target")
        );
        debug!("Matches by severity: {:?}", summary.severities);
    } else {
        warn!("Scan result has no list of matches, the report is going to be empty");
    }

    // shared by the report header and the filename so they always agree
    let now = Local::now().naive_local();
    let html = report::render(&doc, now)?;

    let dir = env::current_dir().context("Failed to determine current directory")?;
    let path = output::write_report(&dir, now, collision, &html)?;
    info!("Wrote {} bytes to {:?}", html.len(), path);

    let filename = path.strip_prefix(&dir).unwrap_or(path.as_path());
    println!("Report generated: {}", filename.display());

    Ok(())
}
