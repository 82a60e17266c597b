//! drive-ls CLI - List Google Drive files.

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use drive_ls::{list_all_files, DisplayOptions, DriveClient, ListQuery, Pathfinder};

/// List files from Google Drive as a delimited or aligned table.
#[derive(Parser)]
#[command(name = "drive-ls")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// OAuth2 access token for the Drive API.
    #[arg(long, env = "GOOGLE_ACCESS_TOKEN", hide_env_values = true)]
    access_token: String,

    /// Drive search-filter expression.
    #[arg(long, short = 'q', default_value = "trashed = false and 'me' in owners")]
    query: String,

    /// Sort order (e.g. "folder,name" or "createdTime desc").
    #[arg(long, default_value = "")]
    order: String,

    /// Maximum number of files to list, 0 for all.
    #[arg(long, short = 'm', default_value_t = 30)]
    max: u64,

    /// Width of the name column, 0 for no truncation.
    #[arg(long, default_value_t = 40)]
    name_width: usize,

    /// Skip the header row.
    #[arg(long)]
    skip_header: bool,

    /// Show sizes in raw bytes.
    #[arg(long)]
    bytes: bool,

    /// Show each file's absolute path instead of its name.
    #[arg(long)]
    absolute: bool,

    /// Render as delimited output instead of an aligned table.
    #[arg(long)]
    csv: bool,

    /// Field delimiter for --csv output.
    #[arg(long, default_value_t = '|')]
    delimiter: char,

    /// Include the Checksum and HeadRevisionId columns.
    #[arg(long)]
    extended: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if !cli.delimiter.is_ascii() {
        bail!("Delimiter must be an ASCII character: {}", cli.delimiter);
    }

    let client = DriveClient::new(cli.access_token);

    let query = ListQuery {
        query: cli.query,
        sort_order: cli.order,
        max_files: cli.max,
    };

    let mut files = list_all_files(&client, &query)
        .await
        .context("Failed to list files")?;

    if cli.absolute {
        // Replace each name with the resolved absolute path
        let mut pathfinder = Pathfinder::new(&client);
        for file in &mut files {
            let path = pathfinder.abs_path(file).await?;
            file.name = path;
        }
    }

    let options = DisplayOptions {
        name_width: cli.name_width,
        skip_header: cli.skip_header,
        size_in_bytes: cli.bytes,
        extended: cli.extended,
        delimiter: cli.delimiter as u8,
    };

    let stdout = std::io::stdout();
    if cli.csv {
        drive_ls::write_csv(stdout.lock(), &files, &options)?;
    } else {
        drive_ls::write_tabbed(stdout.lock(), &files, &options)?;
    }

    Ok(())
}
