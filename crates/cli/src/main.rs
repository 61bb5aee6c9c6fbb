mod cli;
mod host;

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use host::FileHost;
use symscan::{
	EditorNotification, FunctionList, IncrementalScanner, Reschedule, ScannerCfg, Target,
	function_list, goto_symbol,
};
use symscan_language::LanguageRegistry;
use tracing::warn;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let registry = load_registry(cli.config.as_deref())?;
	let output = match cli.command {
		Command::List { file, language } => list(registry, &file, language.as_deref())?,
		Command::Goto { symbol, files } => goto(registry, &symbol, &files)?,
		Command::Keywords { files } => keywords(registry, &files)?,
	};
	print!("{output}");
	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("symscan=debug,warn")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn load_registry(config: Option<&Path>) -> anyhow::Result<LanguageRegistry> {
	match config {
		Some(path) => LanguageRegistry::load(path)
			.with_context(|| format!("loading scan configuration {}", path.display())),
		None => LanguageRegistry::from_embedded().context("loading built-in scan configuration"),
	}
}

/// One `line: text` row per entry, lines 1-based.
fn render_list(list: &FunctionList) -> String {
	if list.is_empty() {
		return "(no functions found)\n".to_owned();
	}
	let mut out = String::new();
	for item in list.items() {
		let _ = writeln!(out, "{}: {}", item.line + 1, item.display);
	}
	out
}

fn list(registry: LanguageRegistry, file: &Path, language: Option<&str>) -> anyhow::Result<String> {
	let mut host = FileHost::new(registry);
	let doc = host.open(file, language)?;
	Ok(render_list(&function_list(&host, Target::Document(doc))))
}

fn goto(registry: LanguageRegistry, symbol: &str, files: &[PathBuf]) -> anyhow::Result<String> {
	let mut host = FileHost::new(registry);
	for file in files {
		host.open(file, None)?;
	}

	let found = goto_symbol(&mut host, symbol);
	if host.alerted() {
		eprint!("\x07");
	}
	if !found {
		anyhow::bail!("symbol `{symbol}` not found");
	}

	let (doc, line) = host.jump().context("jump target missing")?;
	let path = host.path(doc).context("jump target closed")?;
	Ok(format!("{}:{}\n", path.display(), line + 1))
}

fn keywords(registry: LanguageRegistry, files: &[PathBuf]) -> anyhow::Result<String> {
	let cfg = ScannerCfg {
		autoscan: registry.autoscan(),
		..Default::default()
	};
	if !cfg.autoscan {
		warn!("autoscan is disabled in the scan configuration");
	}

	let mut host = FileHost::new(registry);
	let mut scanner = IncrementalScanner::new(cfg);
	let mut next = Reschedule::Done;
	for file in files {
		let doc = host.open(file, None)?;
		let r = scanner.notify(&mut host, EditorNotification::Opened(doc));
		if r != Reschedule::Done {
			next = r;
		}
	}
	drive(&mut scanner, &mut host, next);

	let mut languages: Vec<_> = host.keywords().languages().collect();
	languages.sort_unstable();
	let mut out = String::new();
	for language in languages {
		let _ = writeln!(out, "{language}: {}", host.keywords().keyword_list(language));
	}
	Ok(out)
}

/// Plays the host timer until the scanner has nothing left to do.
fn drive(scanner: &mut IncrementalScanner, host: &mut FileHost, mut next: Reschedule) {
	loop {
		match next {
			Reschedule::Done => return,
			Reschedule::Immediately => {}
			Reschedule::After(delay) => std::thread::sleep(delay),
		}
		next = scanner.tick(host);
	}
}
