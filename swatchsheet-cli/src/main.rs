use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use swatchsheet::{
    convert_vendor_table, CmykColor, Deviation, ReferenceTable, RenderRequest, WriterConfig,
    DEFAULT_FILE_NAME,
};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "swatchsheet",
    about = "Print-ready CMYK variant swatch sheets",
    version,
    author
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a swatch sheet PDF
    Render {
        /// Base color as C,M,Y,K percentages (e.g. "100,10,2,32")
        #[arg(long, value_name = "C,M,Y,K", conflicts_with = "reference", required_unless_present = "reference")]
        cmyk: Option<CmykColor>,

        /// Base color by reference name (needs --table)
        #[arg(short, long)]
        reference: Option<String>,

        /// Reference table (JSON)
        #[arg(short, long, env = "SWATCHSHEET_TABLE")]
        table: Option<PathBuf>,

        /// Step applied to every channel, in percent
        #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=10))]
        deviation: u32,

        /// Comment printed under the title
        #[arg(short, long)]
        comment: Option<String>,

        /// Output file path
        #[arg(short, long, default_value = DEFAULT_FILE_NAME)]
        output: PathBuf,

        /// Leave the content stream uncompressed
        #[arg(long)]
        no_compress: bool,
    },

    /// Search a reference table by name
    Search {
        /// Case-insensitive part of the name
        query: String,

        /// Reference table (JSON)
        #[arg(short, long, env = "SWATCHSHEET_TABLE")]
        table: PathBuf,

        /// Maximum number of matches
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Convert a vendor table ({Code, C, M, Y, K}) into a reference table
    Convert {
        /// Vendor table (JSON)
        input: PathBuf,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Render {
            cmyk,
            reference,
            table,
            deviation,
            comment,
            output,
            no_compress,
        } => {
            let (base, reference_name) = match (cmyk, reference) {
                (Some(base), _) => (base, None),
                (None, Some(name)) => {
                    let table_path = table.context("--reference requires --table")?;
                    let table = load_table(&table_path)?;
                    let entry = table.lookup(&name)?;
                    (entry.color(), Some(entry.name.clone()))
                }
                (None, None) => bail!("either --cmyk or --reference is required"),
            };

            let mut request = RenderRequest::new(base, Deviation::new(deviation)?);
            if let Some(comment) = comment {
                request = request.with_comment(comment);
            }
            if let Some(name) = reference_name {
                request = request.with_reference_name(name);
            }

            let config = if no_compress {
                WriterConfig::uncompressed()
            } else {
                WriterConfig::default()
            };

            let bytes = request.render_with_config(config)?;
            std::fs::write(&output, &bytes)
                .with_context(|| format!("Failed to write {}", output.display()))?;

            info!(path = %output.display(), bytes = bytes.len(), "swatch sheet written");
            println!("✓ Swatch sheet written to {}", output.display());
        }

        Commands::Search {
            query,
            table,
            limit,
        } => {
            let table = load_table(&table)?;
            let matches = table.search(&query, limit);

            if matches.is_empty() {
                println!("No reference colors match '{query}'");
            }
            for entry in matches {
                println!("{:<24} {}", entry.name, entry.color());
            }
        }

        Commands::Convert { input, output } => {
            let json = std::fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let records = convert_vendor_table(&json)
                .with_context(|| format!("Failed to convert {}", input.display()))?;

            std::fs::write(&output, serde_json::to_string_pretty(&records)?)
                .with_context(|| format!("Failed to write {}", output.display()))?;

            println!(
                "✓ Converted {} colors to {}",
                records.len(),
                output.display()
            );
        }
    }

    Ok(())
}

fn load_table(path: &Path) -> Result<ReferenceTable> {
    let table = ReferenceTable::from_path(path)
        .with_context(|| format!("Failed to load reference table {}", path.display()))?;
    debug!(entries = table.len(), "reference table ready");
    Ok(table)
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "swatchsheet=debug"
    } else {
        "swatchsheet=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
