use clap::Parser;
use colored::*;
use env_logger::{Builder, Env, Target};
use linesift::cli::Cli;
use linesift::config::Config;
use linesift::engine::SearchEngine;
use linesift::error::{LinesiftError, Result as LinesiftResult};
use linesift::matcher::Matcher;
use linesift::read_lines;
use log::{info, warn};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{}", e.to_string().red());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> LinesiftResult<()> {
    setup_logging(cli)?;

    let start_time = Instant::now();
    info!("Searching stdin for pattern: {:?}", cli.pattern);

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring config file: {e}");
            Config::default()
        }
    };

    let matcher = Matcher::build(&cli.match_options())?;
    let lines = read_lines(io::stdin().lock())?;
    info!("Read {} lines from stdin", lines.len());

    let output = cli.output_options(&config);
    let engine = SearchEngine::new(matcher, cli.window_options(&config));
    let rendered = engine.run(&lines, output);

    write_output(&rendered, output.numbered && !output.count_only)?;

    info!(
        "Done: {} output entries in {:.2?}",
        rendered.len(),
        start_time.elapsed()
    );
    Ok(())
}

/// Writes the rendered entries to stdout. Numbered entries already carry
/// their terminator; everything else gets one appended here.
fn write_output(rendered: &[String], embedded_terminator: bool) -> LinesiftResult<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for entry in rendered {
        if embedded_terminator {
            write!(out, "{entry}")?;
        } else {
            writeln!(out, "{entry}")?;
        }
    }
    out.flush()?;
    Ok(())
}

fn setup_logging(cli: &Cli) -> LinesiftResult<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));

    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    });

    if let Some(log_path) = &cli.log {
        if let Some(parent_dir) = log_path.parent() {
            if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
                fs::create_dir_all(parent_dir).map_err(LinesiftError::Io)?;
            }
        }
        let log_file = fs::File::create(log_path).map_err(LinesiftError::Io)?;
        builder.target(Target::Pipe(Box::new(log_file)));
    } else {
        builder.target(Target::Stderr);
    }

    builder
        .try_init()
        .map_err(|e| LinesiftError::Other(e.to_string()))?;
    Ok(())
}
