use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use logcascade::config::{
	CONFIG_FILE_NAME, discover_configs, load_merged_config, merge_configs, templates_from_merged,
	user_config_path,
};
use logcascade::templates::{ContextTemplates, Fields, render};

#[derive(Parser)]
#[command(name = "logcascade")]
#[command(
	author,
	version,
	about = "Inspect cascading start/finish log templates and their fallback paths"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Create a template .logcascade.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .logcascade.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,

	/// Print debug diagnostics to stderr
	#[arg(short, long, global = true)]
	verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the template a key resolves to
	Resolve { key: String },
	/// Show which key supplies a template and the path walked to reach it
	Explain { key: String },
	/// Print the fallback order for any key
	Path { key: String },
	/// Resolve a key and substitute its fields
	Render {
		key: String,

		/// Context label or function name
		#[arg(long)]
		label: String,

		/// Formatted call arguments
		#[arg(long, default_value = "")]
		arguments: String,
	},
	/// List every known template key
	Keys,
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display merged effective templates with source annotations
	Show,
	/// Check all config files for errors without resolving anything
	Validate,
}

const INIT_TEMPLATE: &str = r#"# logcascade configuration.
# Keys cascade from most to least specific, e.g.
#   function.start.DEBUG -> start.DEBUG -> function.start -> start
# Placeholders: {label}, {arguments}. Use {{ and }} for literal braces.

# Stop looking for .logcascade.toml in parent directories.
root = true

[templates]
start = "Start {label}"
finish = "Finish {label}"
# "function.start" = "Calling {label}({arguments})"
# "finish.ERROR" = "Failed {label}"
"#;

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	logcascade::logging::init(cli.verbose);

	if cli.init {
		return handle_init(cli.force);
	}

	if let Some(command) = cli.command {
		return match command {
			Commands::Resolve { key } => handle_resolve(&key),
			Commands::Explain { key } => handle_explain(&key),
			Commands::Path { key } => handle_path(&key),
			Commands::Render {
				key,
				label,
				arguments,
			} => handle_render(&key, &label, &arguments),
			Commands::Keys => handle_keys(),
			Commands::Config { action } => match action {
				ConfigAction::Show => handle_config_show(),
				ConfigAction::Validate => handle_config_validate(),
			},
		};
	}

	Ok(ExitCode::SUCCESS)
}

fn load_templates() -> Result<ContextTemplates> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let merged = load_merged_config(&cwd).context("Failed to load configuration")?;
	templates_from_merged(&merged).context("Invalid template configuration")
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
	}

	std::fs::write(&config_path, INIT_TEMPLATE)
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {CONFIG_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

fn handle_resolve(key: &str) -> Result<ExitCode> {
	let templates = load_templates()?;
	println!("{}", templates.resolve_template(key)?);
	Ok(ExitCode::SUCCESS)
}

fn handle_explain(key: &str) -> Result<ExitCode> {
	let templates = load_templates()?;
	let cascade = templates.cascade();

	match cascade.resolve_with_source(key) {
		Some(resolved) => {
			println!("{key} = {:?}", resolved.value);
			println!("  from: {}", resolved.source);
			println!("  via:  {}", resolved.path.join(" -> "));
			Ok(ExitCode::SUCCESS)
		}
		None => {
			println!("{key} has no template");
			println!("  searched: {}", cascade.cascade_path(key));
			Ok(ExitCode::FAILURE)
		}
	}
}

fn handle_path(key: &str) -> Result<ExitCode> {
	let templates = load_templates()?;
	println!("{}", templates.cascade().cascade_path(key));
	Ok(ExitCode::SUCCESS)
}

fn handle_render(key: &str, label: &str, arguments: &str) -> Result<ExitCode> {
	let templates = load_templates()?;
	let template = templates.resolve_template(key)?;
	let line = render(template, &Fields::new(label).with_arguments(arguments))
		.with_context(|| format!("Failed to render template for {key}"))?;
	println!("{line}");
	Ok(ExitCode::SUCCESS)
}

fn handle_keys() -> Result<ExitCode> {
	let templates = load_templates()?;
	for key in templates.known_keys() {
		println!("{key}");
	}
	Ok(ExitCode::SUCCESS)
}

fn handle_config_show() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let configs = discover_configs(&cwd).context("Failed to discover config files")?;

	if configs.is_empty() {
		println!("No configuration files found. Using built-in templates.");
	} else {
		println!("Configuration files (in cascade order):");
		for loaded in &configs {
			println!("  {}", loaded.path.display());
		}
	}
	println!();

	let merged = merge_configs(&configs);
	let templates = templates_from_merged(&merged).context("Invalid template configuration")?;
	println!("Effective templates:\n");
	for (key, template) in templates.templates() {
		match merged.templates.get(&key) {
			Some(tws) => println!("  {key} = {template:?}  # {}", tws.source.display()),
			None => println!("  {key} = {template:?}  # built-in"),
		}
	}

	for key in templates.unrecognized_keys() {
		println!("\nwarning: unrecognized template key: {key}");
	}

	print_user_config_path();
	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	let configs = match discover_configs(&cwd) {
		Ok(configs) => configs,
		Err(e) => {
			eprintln!("Configuration error: {e}");
			return Ok(ExitCode::FAILURE);
		}
	};

	if configs.is_empty() {
		println!("No configuration files found.");
		return Ok(ExitCode::SUCCESS);
	}

	let templates = match templates_from_merged(&merge_configs(&configs)) {
		Ok(templates) => templates,
		Err(e) => {
			eprintln!("Configuration error: {e}");
			return Ok(ExitCode::FAILURE);
		}
	};

	println!("All configuration files are valid:");
	for loaded in &configs {
		println!(
			"  {} ({} templates)",
			loaded.path.display(),
			loaded.config.templates.len()
		);
	}
	for key in templates.unrecognized_keys() {
		println!("warning: unrecognized template key: {key}");
	}
	Ok(ExitCode::SUCCESS)
}

fn print_user_config_path() {
	if let Ok(user_path) = user_config_path() {
		println!("\nUser config path: {}", display_with_status(&user_path));
	}
}

fn display_with_status(path: &Path) -> String {
	if path.exists() {
		format!("{} (exists)", path.display())
	} else {
		format!("{} (not found)", path.display())
	}
}
