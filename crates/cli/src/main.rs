//! layergen binary.
//!
//! Reads an API registry and writes one artifact of the overlay layer: the
//! handle-state header or the dispatch-forwarding source, chosen by the output
//! file's extension.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use layergen_config::GenConfig;
use layergen_emit::{ArtifactKind, generate};
use layergen_registry::Registry;
use tracing::info;

/// layergen command line arguments.
#[derive(Parser, Debug)]
#[command(name = "layergen", version)]
#[command(about = "Generate API-layer handle tracking code from a registry")]
struct Args {
	/// Registry XML file
	#[arg(value_name = "REGISTRY")]
	registry: PathBuf,

	/// Artifact to write; .cpp, .cc or .cxx selects the source, anything else
	/// the header
	#[arg(value_name = "OUTPUT")]
	output: PathBuf,

	/// KDL file overriding the built-in overlay layer settings
	#[arg(short, long, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Generate and validate, but write nothing
	#[arg(long)]
	check: bool,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,
}

fn main() -> Result<()> {
	let args = Args::parse();

	setup_tracing(args.verbose);

	run(&args)
}

fn run(args: &Args) -> Result<()> {
	let config = match &args.config {
		Some(path) => GenConfig::load(path).with_context(|| format!("loading config {}", path.display()))?,
		None => GenConfig::default(),
	};

	let xml = std::fs::read_to_string(&args.registry)
		.with_context(|| format!("reading registry {}", args.registry.display()))?;
	let registry =
		Registry::parse(&xml).with_context(|| format!("loading registry {}", args.registry.display()))?;

	let kind = ArtifactKind::from_path(&args.output);
	let text = generate(&registry, &config.supported, &config.emit, kind)
		.with_context(|| format!("generating {}", args.output.display()))?;

	if args.check {
		info!(output = %args.output.display(), ?kind, bytes = text.len(), "check passed, nothing written");
		return Ok(());
	}

	write_atomic(&args.output, &text)?;
	info!(output = %args.output.display(), ?kind, bytes = text.len(), "wrote artifact");

	Ok(())
}

/// Writes `contents` to a temporary file beside `path`, then renames it over
/// `path`. Readers never observe a partial artifact.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
	let dir = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};

	let mut file = tempfile::NamedTempFile::new_in(dir)
		.with_context(|| format!("creating temporary file in {}", dir.display()))?;
	file.write_all(contents.as_bytes())
		.with_context(|| format!("writing temporary file for {}", path.display()))?;
	file.persist(path)
		.with_context(|| format!("replacing {}", path.display()))?;

	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("layergen=debug")
		} else {
			EnvFilter::new("layergen=info")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
