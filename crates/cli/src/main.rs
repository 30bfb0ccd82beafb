use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use catsel_engine::{ControlsSnapshot, SelectorBinding};
use catsel_types::{Catalog, SelectorConfig, Variant};
use catsel_util::{Settings, display_path, load_catalog, path_from_env};
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Environment variable naming the log file used while the TUI owns the terminal.
const LOG_PATH_ENV: &str = "CATSEL_LOG_PATH";
const LOG_FILE_NAME: &str = "catsel.log";
const DEFAULT_TITLE: &str = "Select a section and version";

#[derive(Debug, Parser)]
#[command(name = "catsel", version, about = "Browse a two-level JSON catalog by section and version")]
struct Cli {
    /// Catalog JSON file, or `-` to read it from stdin
    catalog: PathBuf,

    /// Selector preset: `plain` (no reference label, plain pretty-printing)
    /// or `annotated` (reference label, compact arrays)
    #[arg(long, global = true)]
    variant: Option<Variant>,

    /// Version key to hide from the version list; repeat to hide several.
    /// Replaces the preset's exclusions.
    #[arg(long = "exclude", value_name = "KEY", global = true)]
    exclude: Vec<String>,

    /// Heading shown at the top of the TUI
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Settings file (defaults to `$CATSEL_SETTINGS_PATH` or the user config dir)
    #[arg(long, value_name = "PATH", global = true)]
    settings: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is unset, e.g. `debug` or `catsel_engine=trace`
    #[arg(long, value_name = "FILTER", global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the reference label and formatted entry for one selection
    Show {
        /// Section to select (defaults to the first section)
        #[arg(long)]
        section: Option<String>,
        /// Version to select (defaults to the first eligible version)
        #[arg(long)]
        version: Option<String>,
    },
    /// List every section with its eligible versions
    List,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let tui_mode = cli.command.is_none();
    init_tracing(cli.log_level.as_deref(), tui_mode)?;

    let catalog = load_catalog(&cli.catalog).with_context(|| format!("failed to load catalog {}", display_path(&cli.catalog)))?;
    let settings = open_settings(cli.settings.clone());
    let config = selector_config(&settings, cli.variant, &cli.exclude);
    debug!(?config, "selector configuration resolved");
    let catalog = Arc::new(catalog);

    let mut stdout = io::stdout().lock();
    match cli.command {
        None => {
            let binding = SelectorBinding::initialize(catalog, config, ControlsSnapshot::new())?;
            let options = catsel_tui::TuiOptions {
                title: cli.title,
                subtitle: format!("Loaded on: {}", chrono::Local::now().format("%A %d. %B %Y")),
            };
            drop(stdout);
            catsel_tui::run(binding, settings, options).await
        }
        Some(Command::Show { section, version }) => {
            run_show(catalog, config, section.as_deref(), version.as_deref(), &mut stdout)
        }
        Some(Command::List) => run_list(&catalog, &config, &mut stdout),
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `--log-level`; in TUI
/// mode events go to a log file so they never draw over the screen.
fn init_tracing(log_level: Option<&str>, tui_mode: bool) -> Result<()> {
    let directives = std::env::var("RUST_LOG")
        .ok()
        .or_else(|| log_level.map(str::to_string))
        .unwrap_or_else(|| "info".into());
    let filter = EnvFilter::try_new(&directives).with_context(|| format!("invalid log filter '{directives}'"))?;

    if tui_mode {
        let path = path_from_env(LOG_PATH_ENV).unwrap_or_else(|| catsel_util::paths::data_file_path(LOG_FILE_NAME));
        let (writer, failure) = tui_log_writer(&path);
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(writer)
            .try_init();
        if let Some(error) = failure {
            // The terminal is still in normal mode here, so stderr is safe.
            eprintln!("catsel: logging disabled: {error:#}");
        }
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init();
    }
    Ok(())
}

/// Writer for TUI-mode logs. When the log file cannot be opened, logs are
/// discarded and the error is returned so the caller can report it.
fn tui_log_writer(path: &Path) -> (BoxMakeWriter, Option<anyhow::Error>) {
    match open_log_file(path) {
        Ok(file) => (BoxMakeWriter::new(Mutex::new(file)), None),
        Err(error) => (BoxMakeWriter::new(io::sink), Some(error)),
    }
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

/// Open the settings store, running without persistence when it is unusable.
fn open_settings(path: Option<PathBuf>) -> Arc<Settings> {
    match Settings::open(path) {
        Ok(settings) => {
            info!(path = %settings.path().display(), "settings loaded");
            Arc::new(settings)
        }
        Err(error) => {
            warn!(%error, "settings unavailable; continuing with defaults");
            Arc::new(Settings::ephemeral())
        }
    }
}

/// Settings give the base configuration; command-line flags override it.
fn selector_config(settings: &Settings, variant: Option<Variant>, exclude: &[String]) -> SelectorConfig {
    let config = settings.selector_config(variant);
    if exclude.is_empty() {
        config
    } else {
        config.with_excluded_keys(exclude.iter().cloned())
    }
}

fn run_show<W: Write>(
    catalog: Arc<Catalog>,
    config: SelectorConfig,
    section: Option<&str>,
    version: Option<&str>,
    out: &mut W,
) -> Result<()> {
    let mut binding = SelectorBinding::initialize(catalog, config, ())?;
    if let Some(section) = section {
        binding.select_section(section)?;
    }
    if let Some(version) = version {
        binding.select_version(version)?;
    }
    if let Some(label) = binding.reference_label() {
        writeln!(out, "Reference: {label}")?;
    }
    writeln!(out, "{}", binding.output())?;
    Ok(())
}

fn run_list<W: Write>(catalog: &Catalog, config: &SelectorConfig, out: &mut W) -> Result<()> {
    for (name, section) in catalog.iter() {
        writeln!(out, "{name}")?;
        for version in section.eligible_versions(&config.excluded_version_keys) {
            writeln!(out, "  {version}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serde_json::json;

    fn scenario_catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::from_value(json!({
                "Assay1": {
                    "reference": "RefX",
                    "reference_for_species": {"human": "hg38"},
                    "v1": {"scores": [1, 2, 3]},
                    "v2": {"scores": [4, 5]}
                },
                "Assay2": {}
            }))
            .unwrap(),
        )
    }

    fn render<F: FnOnce(&mut Vec<u8>) -> Result<()>>(f: F) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_show_with_repeated_excludes() {
        let cli = Cli::try_parse_from([
            "catsel", "--variant", "plain", "--exclude", "reference", "--exclude", "v2", "catalog.json", "show",
            "--section", "Assay1",
        ])
        .unwrap();
        assert_eq!(cli.variant, Some(Variant::Plain));
        assert_eq!(cli.exclude, vec!["reference", "v2"]);
        assert_eq!(cli.title, DEFAULT_TITLE);
        assert!(matches!(cli.command, Some(Command::Show { section: Some(ref s), version: None }) if s == "Assay1"));
    }

    #[test]
    fn show_defaults_to_first_selection() {
        let text = render(|out| run_show(scenario_catalog(), SelectorConfig::default(), None, None, out));
        assert_eq!(text, "Reference: RefX\n\"RefX\"\n");
    }

    #[test]
    fn show_selects_requested_version() {
        let text = render(|out| run_show(scenario_catalog(), SelectorConfig::default(), None, Some("v1"), out));
        assert_eq!(text, "Reference: RefX\n{\n  \"scores\": [1,2,3]\n}\n");

        let plain = SelectorConfig::for_variant(Variant::Plain);
        let text = render(|out| run_show(scenario_catalog(), plain, None, Some("v2"), out));
        assert_eq!(text, "{\n  \"scores\": [\n    4,\n    5\n  ]\n}\n");
    }

    #[test]
    fn show_reports_unknown_version() {
        let mut out = Vec::new();
        let error = run_show(scenario_catalog(), SelectorConfig::default(), None, Some("reference_for_species"), &mut out)
            .unwrap_err();
        assert!(error.to_string().contains("reference_for_species"));
    }

    #[test]
    fn show_on_empty_section_prints_placeholder() {
        let text = render(|out| run_show(scenario_catalog(), SelectorConfig::default(), Some("Assay2"), None, out));
        assert_eq!(text, "Reference: Not set\nNo versions available\n");
    }

    #[test]
    fn list_prints_eligible_versions_per_section() {
        let catalog = scenario_catalog();
        let text = render(|out| run_list(&catalog, &SelectorConfig::default(), out));
        assert_eq!(text, "Assay1\n  reference\n  v1\n  v2\nAssay2\n");

        let plain = SelectorConfig::for_variant(Variant::Plain);
        let text = render(|out| run_list(&catalog, &plain, out));
        assert!(text.contains("  reference_for_species\n"));
    }

    #[test]
    fn unwritable_log_path_discards_logs_instead_of_failing() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let (_, failure) = tui_log_writer(&blocker.join(LOG_FILE_NAME));
        assert!(failure.is_some());

        let log_path = dir.path().join("logs").join(LOG_FILE_NAME);
        let (_, failure) = tui_log_writer(&log_path);
        assert!(failure.is_none());
        assert!(log_path.exists());
    }

    #[test]
    fn exclude_flags_replace_configured_exclusions() {
        let settings = Settings::ephemeral();
        let config = selector_config(&settings, Some(Variant::Annotated), &["reference".to_string()]);
        assert!(config.is_excluded("reference"));
        assert!(!config.is_excluded("reference_for_species"));

        let config = selector_config(&settings, Some(Variant::Annotated), &[]);
        assert!(config.is_excluded("reference_for_species"));
    }
}
