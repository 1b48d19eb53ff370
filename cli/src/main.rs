//! campus-route: shortest paths between people on a campus.
//!
//! Usage:
//!   campus-route [--config file] [--campus file] [menu]
//!   campus-route points
//!   campus-route all [--source node] [--json]
//!   campus-route route <from> <to> [--json]
//!   campus-route export [--output path] [--directed]
//!   campus-route status

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

mod config;
mod menu;
mod report;
mod state;
mod util;

use config::Settings;
use state::Session;

#[derive(Parser)]
#[command(
    name = "campus-route",
    version,
    about = "Shortest paths between students, faculty and staff on a campus"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON roster of people and edges (defaults to the built-in campus)
    #[arg(long, global = true)]
    campus: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Menu,
    /// List people with their point numbers
    Points,
    /// Distance and path from one node to every other node
    All {
        /// Source node id (0-based); defaults to `default_source` from settings
        #[arg(long)]
        source: Option<usize>,
        /// Print JSON instead of the console listing
        #[arg(long)]
        json: bool,
    },
    /// Distance and path between two people, by name or by point number (1-based, as listed by `points`)
    Route {
        #[arg(allow_hyphen_values = true)]
        from: String,
        #[arg(allow_hyphen_values = true)]
        to: String,
        /// Print JSON instead of the console listing
        #[arg(long)]
        json: bool,
    },
    /// Write the campus as a Graphviz DOT file
    Export {
        /// Output path; defaults to `dot_output` from settings
        #[arg(long)]
        output: Option<PathBuf>,
        /// Emit a directed graph (`digraph`, `->`)
        #[arg(long)]
        directed: bool,
    },
    /// Show what was loaded
    Status,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn cmd_all(session: &Session, source: Option<usize>, json: bool) -> Result<ExitCode> {
    let source = source.unwrap_or(session.settings.default_source);
    if !session.graph.contains(source) {
        println!("Invalid starting node.");
        return Ok(ExitCode::FAILURE);
    }

    let mut out = io::stdout().lock();
    if json {
        let r = report::full_report(session, source)?;
        serde_json::to_writer_pretty(&mut out, &r)?;
        writeln!(out)?;
    } else {
        report::write_full_report(session, source, &mut out)?;
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_route(session: &Session, from: &str, to: &str, json: bool) -> Result<ExitCode> {
    let g = &session.graph;
    let endpoints = util::resolve_point(g, from).and_then(|f| Ok((f, util::resolve_point(g, to)?)));
    let report = match endpoints {
        Ok((f, t)) => report::route(session, f, t),
        Err(e) => {
            eprintln!("Error: {}", e);
            None
        }
    };

    let Some(report) = report else {
        println!("Invalid nodes.");
        return Ok(ExitCode::FAILURE);
    };

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        report::write_route(&report, &mut out)?;
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_export(session: &mut Session, output: Option<PathBuf>, directed: bool) -> Result<ExitCode> {
    if let Some(path) = output {
        session.settings.dot_output = path;
    }
    session.settings.directed_export |= directed;

    let path = session.settings.dot_output.clone();
    campus_route_core::export_dot(&session.graph, &session.settings.dot_options(), &path)?;
    println!("Graph description written to {}", path.display());
    Ok(ExitCode::SUCCESS)
}

fn cmd_status(session: &Session) {
    println!("campus:      {}", session.origin);
    println!("people:      {}", session.graph.node_count());
    println!("edges:       {}", session.graph.edge_count());
    println!("load time:   {:.3} ms", session.load_time_ms);
    println!("source:      node {}", session.settings.default_source);
    println!("dot output:  {}", session.settings.dot_output.display());
}

fn run(cli: Cli) -> Result<ExitCode> {
    let settings = Settings::load(cli.config.as_deref())?;
    let mut session = Session::load(cli.campus.as_deref(), settings)?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            let mut out = io::stdout().lock();
            menu::run(&session, stdin.lock(), &mut out).context("console I/O")?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Points => {
            menu::write_points(&session, &mut io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::All { source, json } => cmd_all(&session, source, json),
        Commands::Route { from, to, json } => cmd_route(&session, &from, &to, json),
        Commands::Export { output, directed } => cmd_export(&mut session, output, directed),
        Commands::Status => {
            cmd_status(&session);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
