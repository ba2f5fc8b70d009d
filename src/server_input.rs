//! Console line protocol: a stop-word line, a document count, that many
//! document lines (ids `0..count`), and finally the query line.

use std::io::BufRead;

use tracing::info;

use crate::{
    error::{Error, Result},
    inverted_index::DocID,
    search::SearchServer,
};

/// A populated server together with the query read after the documents.
#[derive(Debug)]
pub struct ServerInput {
    pub server: SearchServer,
    pub query: String,
}

/// Reads the whole protocol from `reader` into `server`.
pub fn read_search_server<R: BufRead>(
    reader: &mut R,
    mut server: SearchServer,
) -> Result<ServerInput> {
    server.set_stop_words(&read_line(reader, "stop words")?);

    let document_count = read_line_with_number(reader)?;
    for document_id in 0..document_count {
        let document = read_line(reader, "document")?;
        server.add_document(document_id, &document);
    }
    info!(document_count, "documents indexed");

    let query = read_line(reader, "query")?;

    Ok(ServerInput { server, query })
}

fn read_line<R: BufRead>(reader: &mut R, what: &'static str) -> Result<String> {
    let mut line = String::new();

    if reader.read_line(&mut line)? == 0 {
        return Err(Error::MissingLine(what));
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}

fn read_line_with_number<R: BufRead>(reader: &mut R) -> Result<DocID> {
    let line = read_line(reader, "document count")?;

    line.trim()
        .parse()
        .map_err(|_| Error::InvalidDocumentCount(line))
}
