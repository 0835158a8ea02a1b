use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::{Template, io};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Parser)]
#[command(name = "markdown-sitegen", version, about = "Build a static HTML site from Markdown")]
struct Cli {
    /// Log every segmented block and copied file
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file to read or write
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Regenerate the output directory from content, static files and template
    Build(BuildArgs),
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
    /// Print the HTML body for a single Markdown file
    Render { file: PathBuf },
}

#[derive(Debug, Default, Args)]
struct BuildArgs {
    #[arg(long, value_name = "DIR")]
    content: Option<PathBuf>,
    #[arg(long = "static", value_name = "DIR")]
    static_dir: Option<PathBuf>,
    #[arg(long, value_name = "FILE")]
    template: Option<PathBuf>,
    #[arg(long, value_name = "DIR")]
    output: Option<PathBuf>,
}

impl BuildArgs {
    /// Flags win over whatever the config file says.
    fn apply(self, config: Config) -> Config {
        Config {
            content_dir: self.content.unwrap_or(config.content_dir),
            static_dir: self.static_dir.unwrap_or(config.static_dir),
            template_path: self.template.unwrap_or(config.template_path),
            output_dir: self.output.unwrap_or(config.output_dir),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct BuildSummary {
    pages: usize,
    static_files: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let config_path = cli.config.unwrap_or_else(Config::config_path);

    match cli.command {
        Command::Build(args) => {
            let config = load_config(&config_path)?;
            let summary = build(&args.apply(config))?;
            log::info!(
                "Built {} pages and copied {} static files",
                summary.pages,
                summary.static_files
            );
        }
        Command::Init { force } => {
            init(&config_path, force)?;
            log::info!("Wrote default config to {}", config_path.display());
        }
        Command::Render { file } => {
            let markdown = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let html = markdown_sitegen_engine::markdown_to_html(&markdown)
                .with_context(|| format!("Failed to render {}", file.display()))?;
            println!("{html}");
        }
    }

    Ok(())
}

fn load_config(config_path: &Path) -> Result<Config> {
    match Config::load_from_path(config_path)? {
        Some(config) => {
            log::info!("Using config {}", config_path.display());
            Ok(config)
        }
        None => {
            log::info!("No config at {}, using defaults", config_path.display());
            Ok(Config::default())
        }
    }
}

fn build(config: &Config) -> Result<BuildSummary> {
    io::validate_dir(&config.content_dir).context("Content directory is not usable")?;

    let template = Template::load(&config.template_path)?;

    io::check_output_dir(
        &config.output_dir,
        &config.content_dir,
        &config.static_dir,
        &config.template_path,
    )?;
    io::reset_output_dir(&config.output_dir).with_context(|| {
        format!(
            "Failed to reset output directory {}",
            config.output_dir.display()
        )
    })?;

    let static_files = if config.static_dir.is_dir() {
        io::copy_static(&config.static_dir, &config.output_dir)?
    } else {
        log::warn!(
            "Static directory {} not found, skipping",
            config.static_dir.display()
        );
        0
    };

    let pages =
        io::generate_pages_recursive(&config.content_dir, &template, &config.output_dir)?;

    Ok(BuildSummary {
        pages: pages.len(),
        static_files,
    })
}

fn init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "{} already exists, pass --force to overwrite it",
            config_path.display()
        );
    }
    Config::default().save_to_path(config_path)
}
