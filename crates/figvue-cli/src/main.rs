use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use figvue_source::{handle, GenerateRequest, ResponseSource};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "figvue")]
#[command(about = "figvue — generate Vue components from design trees")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a component from a design URL and a saved nodes response
    Build {
        /// Design file URL with a node-id parameter
        #[arg(long)]
        url: String,

        /// Component name
        #[arg(long)]
        name: String,

        /// Saved nodes-endpoint response (JSON)
        #[arg(long, env = "FIGVUE_RESPONSE")]
        response: PathBuf,

        /// Output file (defaults to <name>.vue next to the response)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Generate a component from a single design node JSON file
    Render {
        /// Input node .json file
        path: PathBuf,

        /// Component name
        #[arg(long)]
        name: String,

        /// Output file (defaults to <name>.vue next to the input)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Check a design node JSON file without generating output
    Check {
        /// Input node .json file
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Build {
            url,
            name,
            response,
            out,
        } => cmd_build(&url, &name, &response, out),
        Command::Render { path, name, out } => cmd_render(&path, &name, out),
        Command::Check { path } => cmd_check(&path),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_build(url: &str, name: &str, response: &Path, out: Option<PathBuf>) -> Result<()> {
    let source = ResponseSource::from_path(response)?;
    let generated = handle(&GenerateRequest::new(url, name), &source)
        .with_context(|| format!("Failed to generate {name}"))?;

    let out = out.unwrap_or_else(|| default_output(response, name));
    write_output(&out, &generated.component)
}

fn cmd_render(path: &Path, name: &str, out: Option<PathBuf>) -> Result<()> {
    let root = read_node(path)?;
    let component = figvue_codegen::generate_component(&root, name);

    let out = out.unwrap_or_else(|| default_output(path, name));
    write_output(&out, &component)
}

fn cmd_check(path: &Path) -> Result<()> {
    let root = read_node(path)?;
    eprintln!(
        "OK: {} ({} nodes, depth {})",
        path.display(),
        root.node_count(),
        root.depth()
    );
    Ok(())
}

fn read_node(path: &Path) -> Result<figvue_model::DesignNode> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Error reading {}", path.display()))?;
    figvue_model::decode::from_json(&source)
        .with_context(|| format!("Error decoding {}", path.display()))
}

/// `<name>.vue` in the directory of `input`.
fn default_output(input: &Path, name: &str) -> PathBuf {
    let dir = input
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    dir.join(format!("{name}.vue"))
}

fn write_output(path: &Path, component: &str) -> Result<()> {
    std::fs::write(path, component).with_context(|| format!("Error writing {}", path.display()))?;
    debug!(path = %path.display(), bytes = component.len(), "wrote component");
    eprintln!("Built: {}", path.display());
    Ok(())
}
