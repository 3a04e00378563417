use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use ta_toolkit::check::StudentChecker;
use ta_toolkit::{archive, cli, config, export, matcher};
use ta_toolkit::common::{FolderRecord, Roster};
use cli::{Cli, Commands};
use config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn or_unknown(value: &str) -> &str {
    if value.is_empty() { "unknown" } else { value }
}

fn print_summary(info: &FolderRecord) {
    println!("folder: {}", info.folder);
    println!("  name (folder):  {}", info.student_name_raw);
    println!("  name (roster):  {}", info.student_name);
    println!("  team (folder):  {}", or_unknown(&info.team_parsed));
    println!("  team (roster):  {}", or_unknown(&info.team_from_excel));
    println!("  uses class -> {}", if info.used_class { "True" } else { "False" });
    println!("  classes: {}, py files: {}\n", info.class_count, info.py_files);
}

fn scan_progress() -> ProgressBar {
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    progress
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load().context("failed to load config")?;

    match cli.command {
        Commands::Check { root, output, roster, no_roster, threshold, containment } => {
            println!("🔍 ta-tool - class usage check\n");

            let mut config = config;
            if let Some(threshold) = threshold {
                config.match_threshold = threshold;
            }
            if let Some(containment) = containment {
                config.containment = containment;
            }
            let options = config.match_options()?;

            // 1. Roster
            println!("[1/3] Loading roster...");
            let roster_path = if no_roster { None } else { roster.or_else(|| config.roster_path.clone()) };
            let roster = match roster_path {
                Some(path) => matcher::load_roster(&path, config.roster_rows()?),
                None => {
                    info!("no roster given, skipping name and group correction");
                    Roster::default()
                }
            };
            println!("✔ {} roster entries\n", roster.len());

            // 2. Student folders
            println!("[2/3] Checking student folders...");
            let mut checker = StudentChecker::new(&roster, options, &config.excluded_dirs)?;
            let results = checker
                .check_homework_root(&root, &scan_progress())
                .with_context(|| format!("failed to check {}", root.display()))?;
            println!("✔ {} student folders checked\n", results.len());

            for info in &results {
                print_summary(info);
            }

            // 3. Report
            println!("[3/3] Writing report...");
            let output = output.unwrap_or_else(|| config.output_csv.clone());
            export::report::write_report(&results, &output)
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!("✔ Results saved to: {}", output.display());

            let used = results.iter().filter(|r| r.used_class).count();
            println!("\n✅ Done: {}/{} students used classes", used, results.len());
        }

        Commands::Unzip { base_dir } => {
            println!("📦 ta-tool - batch unzip\n");
            let extracted = archive::batch_unzip(&base_dir)
                .with_context(|| format!("failed to unzip archives in {}", base_dir.display()))?;
            println!("\n✅ Extracted {} archives", extracted.len());
        }

        Commands::Json2csv { input, output, index_column } => {
            println!("📄 ta-tool - JSON to CSV\n");
            let rows = export::json_csv::json_to_csv(&input, &output, &index_column)
                .with_context(|| format!("failed to convert {}", input.display()))?;
            if rows > 0 {
                println!("✔ {} rows saved to: {}", rows, output.display());
            }
        }

        Commands::Pack { folder, output } => {
            let output = output.unwrap_or_else(|| archive::default_pack_output(&folder));
            let count = archive::pack_directory(&folder, &output)
                .with_context(|| format!("failed to pack {}", folder.display()))?;
            println!("✔ {} files packed into: {}", count, output.display());
        }

        Commands::Config { set_roster, set_threshold, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(path) = set_roster {
                config.roster_path = Some(path);
                changed = true;
            }
            if let Some(threshold) = set_threshold {
                config.match_threshold = threshold;
                config.match_options()?;
                changed = true;
            }
            if changed {
                config.save()?;
                println!("✔ Settings saved: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("Settings:");
                println!(
                    "  roster: {}",
                    config
                        .roster_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "not set".to_string())
                );
                println!("  roster rows: {}-{}", config.roster_first_row, config.roster_last_row);
                println!("  threshold: {}", config.match_threshold);
                println!("  containment: {}", config.containment);
                println!("  excluded dirs: {}", config.excluded_dirs.join(", "));
                println!("  output: {}", config.output_csv.display());
            }
        }
    }

    Ok(())
}
