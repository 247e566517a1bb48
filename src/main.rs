use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use deptrace::config::{DepthMode, TraversalConfig};
use deptrace::export::{self, ExportData, ExportFormat};
use deptrace::graph::traverse;
use deptrace::logger::{self, LogLevel};
use deptrace::parser;

#[derive(Parser)]
#[command(name = "deptrace")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version)]
#[command(about = "Offline dependency graph explorer with bounded traversal and cycle detection", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk the graph from a root package and render the result
    Analyze {
        /// Adjacency file (`name: dep1 dep2 ...` per line)
        #[arg(short, long)]
        input: PathBuf,

        /// Root package to start from
        #[arg(short, long)]
        package: String,

        /// Maximum traversal depth
        #[arg(short = 'd', long, default_value_t = 10, allow_negative_numbers = true)]
        max_depth: i64,

        /// Exclude every package whose name contains this substring
        #[arg(short, long, default_value = "")]
        filter: String,

        /// Output format: tree, edges, json
        #[arg(long, default_value = "tree")]
        format: ExportFormat,

        /// Depth bound semantics: inclusive, strict
        #[arg(long, default_value = "inclusive")]
        depth_mode: DepthMode,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List every cycle in the whole graph
    Cycles {
        /// Adjacency file (`name: dep1 dep2 ...` per line)
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Show version information
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logger::init(LogLevel::from_flags(cli.verbose, cli.quiet)) {
        eprintln!("warning: {}", e);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Analyze {
            input,
            package,
            max_depth,
            filter,
            format,
            depth_mode,
            output,
        }) => {
            let config = TraversalConfig::new(package, max_depth, filter, depth_mode)?;
            analyze(&input, &config, format, output.as_deref())
        }
        Some(Commands::Cycles { input }) => cycles(&input),
        Some(Commands::Version) => {
            println!("deptrace v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => {
            println!("deptrace - Offline dependency graph explorer");
            println!("Run 'deptrace analyze -i <FILE> -p <PACKAGE>' to walk a graph");
            println!("Run 'deptrace --help' for more information");
            Ok(())
        }
    }
}

fn analyze(
    input: &std::path::Path,
    config: &TraversalConfig,
    format: ExportFormat,
    output: Option<&std::path::Path>,
) -> anyhow::Result<()> {
    let graph = parser::parse_file(input)?;
    let result = traverse(&graph, config);

    if !result.root_found() {
        tracing::warn!(root = config.package_name(), "root package not found");
        eprintln!(
            "warning: package '{}' not found in {}",
            config.package_name(),
            input.display()
        );
    } else if result.root_filtered() {
        eprintln!(
            "warning: package '{}' is excluded by filter '{}'",
            config.package_name(),
            config.filter()
        );
    }

    let data = ExportData::new(config, &result);
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            export::export(format, &data, &mut writer)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            export::export(format, &data, &mut writer)?;
        }
    }

    for cycle in result.cycles() {
        tracing::warn!(path = %cycle, "cycle detected");
        eprintln!("warning: cycle detected: {}", cycle);
    }

    Ok(())
}

fn cycles(input: &std::path::Path) -> anyhow::Result<()> {
    let graph = parser::parse_file(input)?;
    let cycles = graph.detect_cycles();

    if cycles.is_empty() {
        println!("No cycles found in {} packages", graph.len());
        return Ok(());
    }

    println!("Found {} cycle(s):", cycles.len());
    for members in cycles {
        println!("  {}", members.join(", "));
    }
    Ok(())
}
