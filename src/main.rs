use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::PathBuf,
};

use clap::{Parser, ValueEnum};
use search_server::{
    error::Result,
    search::{Document, ExclusionPolicy, SearchServer},
    server_input::{read_search_server, ServerInput},
};
use tracing::Level;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// `{ document_id = <id>, relevance = <score> }` per line
    #[default]
    Text,
    /// A single JSON array
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read stop words, documents and query from this file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output format of the ranked documents
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// How negative query terms restrict results
    #[arg(long, value_enum, default_value_t = ExclusionPolicy::PerTerm)]
    exclusion_policy: ExclusionPolicy,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let server = SearchServer::new().with_exclusion_policy(args.exclusion_policy);

    let ServerInput { server, query } = match &args.input {
        Some(path) => read_search_server(&mut BufReader::new(File::open(path)?), server)?,
        None => read_search_server(&mut io::stdin().lock(), server)?,
    };

    let top_documents = server.find_top_documents(&query)?;

    let mut writer = BufWriter::new(io::stdout().lock());
    write_documents(&mut writer, &top_documents, args.format)?;
    writer.flush()?;

    Ok(())
}

fn write_documents<W: Write>(
    writer: &mut W,
    documents: &[Document],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for document in documents {
                writeln!(writer, "{document}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, documents)?;
            writeln!(writer)?;
        }
    }

    Ok(())
}
