use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use markdown_article_config::Config;
use markdown_article_engine::{Article, convert, io};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "markdown-article",
    version,
    about = "Convert Markdown into restricted HTML for article editors"
)]
struct Cli {
    /// Markdown file to convert
    file: PathBuf,

    /// What to print on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    output: OutputFormat,

    /// Print only the HTML fragment (same as `--output html`)
    #[arg(long)]
    html_only: bool,

    /// Also save the HTML fragment as `<stem>_x.html`
    #[arg(long)]
    write_html: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Html,
}

impl Cli {
    fn format(&self) -> OutputFormat {
        if self.html_only {
            OutputFormat::Html
        } else {
            self.output
        }
    }
}

/// JSON report: the article plus where it came from.
#[derive(Serialize)]
struct Report<'a> {
    source_file: String,
    #[serde(flatten)]
    article: &'a Article,
    #[serde(skip_serializing_if = "Option::is_none")]
    html_file: Option<String>,
}

fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    }
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let config =
        Config::load_or_default(cli.config.as_deref()).context("Failed to load config")?;
    log::info!(
        "Config path: {}",
        cli.config
            .clone()
            .unwrap_or_else(Config::config_path)
            .display()
    );

    let source = std::path::absolute(&cli.file)
        .with_context(|| format!("Failed to resolve {}", cli.file.display()))?;
    let markdown = io::read_markdown(&source)
        .with_context(|| format!("Failed to read {}", source.display()))?;

    log::info!("Converting {}", source.display());
    let article = convert(&markdown, &io::base_dir(&source), &config.render);

    let html_file = if cli.write_html {
        let target = io::html_output_path(&source, config.output_dir.as_deref());
        io::write_html(&target, &article.html)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        log::info!("Wrote {}", target.display());
        Some(target)
    } else {
        None
    };

    match cli.format() {
        OutputFormat::Html => writeln!(out, "{}", article.html)?,
        OutputFormat::Json => {
            let report = Report {
                source_file: source.display().to_string(),
                article: &article,
                html_file: html_file.as_deref().map(|p| p.display().to_string()),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(log_level(cli.verbose))
        .init();

    let stdout = std::io::stdout();
    run(&cli, &mut stdout.lock())
}
