use anyhow::Result;
use clap::{Parser, Subcommand};
use sample_meta::commands::{validators, *};
use sample_meta::{config::Config, constants};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sample-meta")]
#[command(about = "Reshape tab-separated sample metadata files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the metadata table from the sample_tags column of every sample file
    Extract {
        /// Directory holding one tab-separated file per sample
        #[arg(short, long)]
        source_dir: Option<PathBuf>,

        /// Metadata table to write (overwritten on every run)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only read files with this extension (empty for all files)
        #[arg(short, long)]
        extension: Option<String>,

        /// Emit one metadata row per data row instead of per file
        #[arg(long)]
        all_rows: bool,

        /// Process files in file name order
        #[arg(long)]
        sort: bool,

        /// Print extracted rows as JSON
        #[arg(long)]
        json: bool,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Remove the first line of every sample file listed in the metadata table
    Strip {
        #[command(flatten)]
        batch: BatchArgs,
    },

    /// Append metadata columns to every sample file listed in the metadata table
    Annotate {
        #[command(flatten)]
        batch: BatchArgs,

        /// Metadata column to append (can be specified multiple times)
        #[arg(long = "column")]
        columns: Vec<String>,
    },

    /// Append fixed-value columns to a single file
    Append {
        /// File to read
        #[arg(short, long)]
        input: PathBuf,

        /// File to write
        #[arg(short, long)]
        output: PathBuf,

        /// Column to append as NAME=VALUE (can be specified multiple times)
        #[arg(long = "column", required = true)]
        columns: Vec<String>,
    },

    /// Write a starter configuration file
    Init {
        /// Output file name
        #[arg(short, long, default_value_t = constants::config::DEFAULT_CONFIG_FILE.to_string())]
        output: String,

        /// Overwrite existing file if it exists
        #[arg(long)]
        overwrite: bool,
    },
}

#[derive(clap::Args)]
struct BatchArgs {
    /// Metadata table listing the samples
    #[arg(short, long)]
    metadata: Option<PathBuf>,

    /// Directory holding the sample files to read
    #[arg(short, long)]
    input_dir: Option<PathBuf>,

    /// Directory to write rewritten sample files into
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Extension of the sample files (empty when the sample ID is the file name)
    #[arg(short, long)]
    extension: Option<String>,

    /// Process sample files in parallel
    #[arg(short, long)]
    parallel: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            source_dir,
            output,
            extension,
            all_rows,
            sort,
            json,
            config,
        } => {
            let mut config = Config::load_or_default(config.as_deref())?;
            config
                .extract
                .apply_overrides(source_dir, output, extension, all_rows, sort);
            config.validate()?;

            ExtractCommand { json }
                .execute(&CommandContext::new(config))
                .await?;
        }
        Commands::Strip { batch } => {
            let BatchArgs {
                metadata,
                input_dir,
                output_dir,
                extension,
                parallel,
                config,
            } = batch;

            let mut config = Config::load_or_default(config.as_deref())?;
            config
                .strip
                .apply_overrides(metadata, input_dir, output_dir, extension);
            config.validate()?;

            StripCommand
                .execute(&CommandContext { config, parallel })
                .await?;
        }
        Commands::Annotate { batch, columns } => {
            let BatchArgs {
                metadata,
                input_dir,
                output_dir,
                extension,
                parallel,
                config,
            } = batch;

            let mut config = Config::load_or_default(config.as_deref())?;
            config
                .annotate
                .batch
                .apply_overrides(metadata, input_dir, output_dir, extension);
            if !columns.is_empty() {
                config.annotate.columns = columns;
            }
            config.validate()?;

            AnnotateCommand
                .execute(&CommandContext { config, parallel })
                .await?;
        }
        Commands::Append {
            input,
            output,
            columns,
        } => {
            let columns = validators::parse_column_assignments(&columns)?;

            AppendCommand {
                input,
                output,
                columns,
            }
            .execute(&CommandContext::new(Config::new()))
            .await?;
        }
        Commands::Init { output, overwrite } => {
            // Init command doesn't need config since it creates one
            InitCommand { output, overwrite }
                .execute(&CommandContext::new(Config::new()))
                .await?;
        }
    }

    Ok(())
}
