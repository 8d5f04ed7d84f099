//! thesisfmt CLI - thesis manuscript formatting tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use thesisfmt::{
    build_document, render, units, JsonFormat, ParagraphRole, SerializerRegistry, ThesisConfig,
    ThesisContent,
};

#[derive(Parser)]
#[command(name = "thesisfmt")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Format plain-text thesis manuscripts into styled documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a manuscript and write the document
    Build {
        /// Content JSON file (title, abstract, keywords, body, refs)
        #[arg(value_name = "CONTENT")]
        content: PathBuf,

        /// Configuration JSON file (defaults if not specified)
        #[arg(short, long, value_name = "FILE", env = "THESISFMT_CONFIG")]
        config: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format (serializer name or extension)
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show a plain-text preview of the formatted document
    Preview {
        /// Content JSON file
        #[arg(value_name = "CONTENT")]
        content: PathBuf,

        /// Configuration JSON file
        #[arg(short, long, value_name = "FILE", env = "THESISFMT_CONFIG")]
        config: Option<PathBuf>,

        /// Column width for centering (0 = no centering)
        #[arg(long, default_value = "72")]
        width: usize,
    },

    /// Write a default configuration and a sample manuscript
    Init {
        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// List the named font sizes
    Sizes,

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Build {
            content,
            config,
            output,
            format,
            compact,
        }) => cmd_build(&content, config.as_deref(), output.as_deref(), &format, compact),
        Some(Commands::Preview {
            content,
            config,
            width,
        }) => cmd_preview(&content, config.as_deref(), width),
        Some(Commands::Init { output, force }) => cmd_init(output.as_deref(), force),
        Some(Commands::Sizes) => {
            cmd_sizes();
            Ok(())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: thesisfmt build <CONTENT> [--config FILE]".yellow());
            println!("       thesisfmt --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_inputs(
    content: &Path,
    config: Option<&Path>,
) -> Result<(ThesisContent, ThesisConfig), Box<dyn std::error::Error>> {
    let content = ThesisContent::from_path(content)?;
    let config = match config {
        Some(path) => ThesisConfig::from_path(path)?,
        None => ThesisConfig::default(),
    };

    log::debug!("Loaded content and configuration");

    for size in config.unknown_sizes() {
        eprintln!(
            "{} unknown font size '{}', using {}pt",
            "Warning:".yellow().bold(),
            size,
            units::DEFAULT_FONT_SIZE_PT
        );
    }

    Ok((content, config))
}

fn cmd_build(
    content: &Path,
    config: Option<&Path>,
    output: Option<&Path>,
    format: &str,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (content, config) = load_inputs(content, config)?;
    let doc = build_document(&content, &config);

    let bytes = if format.eq_ignore_ascii_case("json") {
        let json_format = if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        render::to_json(&doc, json_format)?.into_bytes()
    } else {
        SerializerRegistry::with_defaults().serialize(&doc, format)?
    };

    if let Some(path) = output {
        fs::write(path, &bytes)?;
        println!("{} {}", "Saved to".green(), path.display());

        let headings = doc.paragraphs_with_role(ParagraphRole::Heading).count();
        let references = doc.paragraphs_with_role(ParagraphRole::ReferenceItem).count();
        println!(
            "  {} {} paragraphs",
            "├─".dimmed(),
            doc.paragraph_count()
        );
        println!("  {} {} headings", "├─".dimmed(), headings);
        println!("  {} {} references", "└─".dimmed(), references);
    } else {
        println!("{}", String::from_utf8_lossy(&bytes));
    }

    Ok(())
}

fn cmd_preview(
    content: &Path,
    config: Option<&Path>,
    width: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let (content, config) = load_inputs(content, config)?;
    let doc = build_document(&content, &config);

    println!("{}", render::to_text(&doc, width));
    Ok(())
}

fn cmd_init(output: Option<&Path>, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let files = [
        (
            output_dir.join("config.json"),
            serde_json::to_string_pretty(&ThesisConfig::default())?,
        ),
        (
            output_dir.join("content.json"),
            serde_json::to_string_pretty(&ThesisContent::sample())?,
        ),
    ];

    for (path, _) in &files {
        if path.exists() && !force {
            let msg = format!("{} already exists (use --force to overwrite)", path.display());
            return Err(msg.into());
        }
    }

    for (path, json) in &files {
        fs::write(path, json)?;
        println!("{} {}", "Created".green(), path.display());
    }

    Ok(())
}

fn cmd_sizes() {
    println!("{}", "Named Font Sizes".cyan().bold());
    println!("{}", "─".repeat(24).dimmed());
    for (label, pt) in units::FONT_SIZES {
        println!("{}  {:>5}pt", label.bold(), pt);
    }
    println!(
        "{}",
        format!("Unknown labels use {}pt", units::DEFAULT_FONT_SIZE_PT).dimmed()
    );
}

fn cmd_version() {
    println!("{} {}", "thesisfmt".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Thesis manuscript formatting tool");
    println!();
    println!("License: MIT");
}
