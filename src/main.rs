//! arrowpane CLI - terminal preview of columnar data files
//!
//! Drives a full preview session against a file and prints the
//! resulting grid and summary counters.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(clippy::uninlined_format_args)]

use std::{path::PathBuf, process::ExitCode};

use arrowpane::{PreviewSession, Rect, WindowHandle};
use clap::Parser;

/// arrowpane - preview Arrow IPC and Parquet files as a text grid
#[derive(Parser)]
#[command(name = "arrowpane")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the file to preview (.arrow, .feather, .ipc, .parquet)
    path: PathBuf,

    /// Maximum rendered width per column, in characters
    #[arg(long, default_value = "32")]
    col_width: usize,

    /// Suppress the title line
    #[arg(long)]
    no_title: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut session = PreviewSession::new();
    if let Err(e) = session.initialize(&cli.path) {
        eprintln!("arrowpane: {e}");
        return ExitCode::FAILURE;
    }
    session.set_window(WindowHandle(0), Rect::new(0, 0, 0, 0));

    let summary = match session.do_preview() {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("arrowpane: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(view) = session.view() {
        if !cli.no_title {
            println!("{}", view.title());
        }
        print!("{}", view.grid().render_plain(cli.col_width));
    }
    println!("columns: {}", summary.columns);
    println!("rows: {}", summary.rows);

    session.unload();
    ExitCode::SUCCESS
}
