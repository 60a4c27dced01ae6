//! # EdgeList
//!
//! The EdgeList-Format consists of a header line holding the number of nodes `n`, followed by
//! one line `u v` per edge with 0-based endpoints. Endpoint tokens are separated by whitespace
//! and may each be wrapped in single or double quotes (`'0' "1"`). Empty lines and lines
//! starting with the comment identifier are skipped.
//!
//! ```
//! use grafo::{prelude::*, io::*};
//!
//! let input = "3\n0 1\n'1' \"2\"\n";
//! let graph = Graph::try_read_edge_list(input.as_bytes()).unwrap();
//! assert_eq!(graph.edge_list(), &[Edge(0, 1), Edge(1, 2)]);
//!
//! let mut output = Vec::new();
//! graph.try_write_edge_list(&mut output).unwrap();
//! assert_eq!(output, b"3\n0 1\n1 2\n");
//! ```

use std::io::Lines;

use super::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }
}

impl<G: GraphFromScratch> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut edges_reader = EdgeListEdgesReader::try_new(reader, &self.comment_identifier)?;
        let n = edges_reader.number_of_nodes();
        let edges = edges_reader.by_ref().collect::<Result<Vec<Edge>>>()?;

        G::from_edges(n, edges).map_err(|e| io_error!(ErrorKind::InvalidData, e))
    }
}

/// Trait for creating graphs from an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphFromScratch,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// Iterator over the edges of an EdgeList input; the header is consumed on construction
pub struct EdgeListEdgesReader<'a, R> {
    /// Lines in the reader
    lines: Lines<R>,
    /// Number of the line read last (1-based)
    line_number: usize,
    /// Number of nodes parsed from header
    number_of_nodes: NumNodes,
    /// Comment identifier
    comment_identifier: &'a str,
}

impl<'a, R: BufRead> EdgeListEdgesReader<'a, R> {
    /// Creates a new EdgeListEdgesReader and tries to parse the first non-comment-line as the header
    pub fn try_new(reader: R, comment_identifier: &'a str) -> Result<Self> {
        let mut edge_list_reader = Self {
            lines: reader.lines(),
            line_number: 0,
            number_of_nodes: 0,
            comment_identifier,
        };

        let header = edge_list_reader
            .next_content_line()?
            .ok_or(io_error!(ErrorKind::NotFound, "Header not found"))?;

        let mut parts = header.split_whitespace().map(unquote);
        edge_list_reader.number_of_nodes = parse_next_value!(parts, "number of nodes");
        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            format!(
                "Header in line {} must only hold the number of nodes",
                edge_list_reader.line_number
            )
        );

        Ok(edge_list_reader)
    }

    /// Returns the parsed number of nodes in the graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }

    /// Returns the next line that is neither empty nor a comment
    fn next_content_line(&mut self) -> Result<Option<String>> {
        for line in self.lines.by_ref() {
            self.line_number += 1;
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty()
                || (!self.comment_identifier.is_empty()
                    && trimmed.starts_with(self.comment_identifier))
            {
                continue;
            }
            return Ok(Some(trimmed.to_string()));
        }
        Ok(None)
    }

    /// Tries to parse an edge from the next content line
    fn parse_edge_line(&mut self) -> Result<Option<Edge>> {
        let Some(line) = self.next_content_line()? else {
            return Ok(None);
        };

        let mut parts = line.split_whitespace().map(unquote);
        let line_number = self.line_number;
        let from: Node = parse_next_value!(parts, format!("source node in line {line_number}"));
        let dest: Node = parse_next_value!(parts, format!("target node in line {line_number}"));
        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            format!("Line {} holds more than two endpoints", self.line_number)
        );

        Ok(Some(Edge(from, dest)))
    }
}

impl<R: BufRead> Iterator for EdgeListEdgesReader<'_, R> {
    type Item = Result<Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_edge_line().transpose()
    }
}

/// Strips one pair of matching single or double quotes
fn unquote(token: &str) -> &str {
    ['\'', '"']
        .into_iter()
        .find_map(|q| token.strip_prefix(q).and_then(|t| t.strip_suffix(q)))
        .unwrap_or(token)
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl<G: GraphNodeOrder + EdgeList> GraphWriter<G> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", graph.number_of_nodes())?;
        for Edge(u, v) in graph.edges() {
            writeln!(writer, "{u} {v}")?;
        }
        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G: GraphNodeOrder + EdgeList> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter.try_write_graph(self, writer)
    }
}
