//! modality CLI - create, normalize and review modality definitions

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use modality::render::{self, DocumentStats};
use modality::{DocumentModel, JsonFormat, RenderOptions, Session, TablePreset};

#[derive(Parser)]
#[command(name = "modality")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Create, normalize and review medical modality definitions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new, empty definition
    New {
        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Definition identifier
        #[arg(long)]
        id: Option<String>,

        /// Definition title
        #[arg(long)]
        title: Option<String>,

        /// Start with a conversion table
        #[arg(long)]
        conversion_table: bool,
    },

    /// Re-export a definition with sorted headings and pruned lists
    #[command(alias = "fmt")]
    Format {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Render a definition as Markdown for review
    #[command(alias = "md")]
    Review {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Include YAML frontmatter
        #[arg(short, long)]
        frontmatter: bool,

        /// Leave out the preparation block
        #[arg(long)]
        no_preparation: bool,

        /// Maximum heading level (1-6)
        #[arg(long, default_value = "6")]
        max_heading: u8,
    },

    /// Show definition information
    Info {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::New {
            output,
            id,
            title,
            conversion_table,
        }) => cmd_new(output.as_deref(), id, title, conversion_table),
        Some(Commands::Format {
            input,
            output,
            compact,
        }) => cmd_format(&input, output.as_deref(), compact),
        Some(Commands::Review {
            input,
            output,
            frontmatter,
            no_preparation,
            max_heading,
        }) => cmd_review(
            &input,
            output.as_deref(),
            frontmatter,
            !no_preparation,
            max_heading,
        ),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: modality <COMMAND>".yellow());
            println!("       modality --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Write to a file, or print to stdout when no path is given.
fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_new(
    output: Option<&Path>,
    id: Option<String>,
    title: Option<String>,
    conversion_table: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = DocumentModel::new();
    if let Some(id) = id {
        doc.meta.id = id;
    }
    if let Some(title) = title {
        doc.meta.title = title;
    }
    if conversion_table {
        doc.add_table_heading(TablePreset::Conversion);
    }

    let session = Session::with_document(doc);
    match output {
        Some(path) if path.is_dir() => {
            let export = session.export()?;
            let saved = export.save_to_dir(path)?;
            println!("{} {}", "Saved to".green(), saved.display());
            Ok(())
        }
        _ => write_output(output, &session.preview()?),
    }
}

fn cmd_format(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new();
    let summary = session.import_file(input)?;

    for record in &summary.dropped {
        eprintln!("{}: dropped {}", "Warning".yellow().bold(), record);
    }

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = render::to_json(session.document(), format)?;

    write_output(output, &json)
}

fn cmd_review(
    input: &Path,
    output: Option<&Path>,
    frontmatter: bool,
    preparation: bool,
    max_heading: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = modality::load_file(input)?;

    let options = RenderOptions::new()
        .with_frontmatter(frontmatter)
        .with_preparation(preparation)
        .with_max_heading(max_heading);

    let markdown = render::to_markdown(&doc, &options)?;

    write_output(output, &markdown)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new();
    let summary = session.import_file(input)?;
    let doc = session.document();
    let meta = &doc.meta;

    println!("{}", "Definition Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Id".bold(), or_dash(&meta.id));
    println!("{}: {}", "Title".bold(), or_dash(&meta.title));
    println!(
        "{}: {}",
        "Parents".bold(),
        or_dash(&meta.filled_parents().collect::<Vec<_>>().join(", "))
    );
    println!(
        "{}: {}",
        "Acronyms".bold(),
        or_dash(&meta.filled_acronyms().collect::<Vec<_>>().join(", "))
    );
    println!(
        "{}: {}",
        "Prepared".bold(),
        or_dash(&doc.preparation.date_of_preparation)
    );
    if !doc.preparation.date_of_preparation.trim().is_empty()
        && doc.preparation.preparation_date().is_none()
    {
        println!("  {} date is not in YYYY-MM-DD form", "note:".yellow());
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let stats = DocumentStats::from_document(doc);
    println!("{}: {}", "Markdown headings".bold(), stats.markdown_heading_count);
    println!("{}: {}", "Empty headings".bold(), stats.empty_markdown_count);
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Table rows".bold(), stats.table_row_count);
    println!("{}: {}", "Ragged tables".bold(), stats.ragged_table_count);
    println!(
        "{}: {}",
        "Unnumbered headings".bold(),
        stats.unnumbered_heading_count
    );
    println!("{}: {}", "Dropped records".bold(), summary.dropped.len());

    for record in &summary.dropped {
        println!("  {} {}", "└─".dimmed(), record);
    }

    Ok(())
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

fn cmd_version() {
    println!("{} {}", "modality".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Medical modality definition editor");
    println!();
    println!("License: MIT");
}
