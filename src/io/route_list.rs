//! # RouteList
//!
//! The RouteList-Format consists of
//! - a line containing the number of nodes `n`,
//! - `n` lines containing one display name each (leading and trailing whitespace is trimmed),
//! - any number of lines `from to weight cost` describing the logical route between the
//!   1-based nodes `from` and `to`.
//!
//! Blank lines and lines starting with the comment identifier (`#` by default) are skipped
//! everywhere. Every route line is inserted in both directions when reading, and every logical
//! route is written once (as `from <= to`) when writing.
//!
//! ```text
//! # four airports
//! 4
//! Atlanta
//! Boston
//! Chicago
//! Denver
//! 1 2 100 50
//! 2 3 200 80
//! ```

use std::{
    fs::File,
    io::{BufRead, BufWriter, ErrorKind, Lines, Write},
    path::Path,
};

use super::*;
use crate::*;

/// A NetworkReader for the RouteList-Format
#[derive(Debug, Clone)]
pub struct RouteListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for RouteListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
        }
    }
}

impl RouteListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn set_comment_identifier<S: Into<String>>(&mut self, c: S) {
        self.comment_identifier = c.into();
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.set_comment_identifier(c);
        self
    }
}

impl NetworkReader for RouteListReader {
    #[tracing::instrument(skip_all, fields(comment_identifier = %self.comment_identifier))]
    fn try_read_network<R: BufRead>(&self, reader: R) -> Result<RouteNetwork> {
        let mut lines = ContentLines {
            lines: reader.lines(),
            line_no: 0,
            comment_identifier: &self.comment_identifier,
        };

        let Some((line_no, header)) = lines.next_content_line()? else {
            return Err(io_error!(ErrorKind::InvalidData, "Number of nodes not found"));
        };
        let mut parts = header.split_whitespace();
        let n: NumNodes = parse_next_value!(parts, "number of nodes", line_no);

        let mut names = Vec::with_capacity(n as usize);
        while names.len() < n as usize {
            let Some((_, name)) = lines.next_content_line()? else {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("Expected {n} node names, found {}", names.len())
                ));
            };
            names.push(name.trim().to_string());
        }

        let mut routes = Vec::new();
        while let Some((line_no, line)) = lines.next_content_line()? {
            let mut parts = line.split_whitespace();

            let from: Node = parse_next_value!(parts, "source node", line_no);
            let to: Node = parse_next_value!(parts, "target node", line_no);
            let weight: Weight = parse_next_value!(parts, "weight", line_no);
            let cost: Cost = parse_next_value!(parts, "cost", line_no);

            raise_error_unless!(
                (1..=n).contains(&from) && (1..=n).contains(&to),
                ErrorKind::InvalidData,
                format!("Route in line {line_no} references a node outside of 1..={n}")
            );
            raise_error_unless!(
                cost.is_finite() && cost >= 0.0,
                ErrorKind::InvalidData,
                format!("Route in line {line_no} has invalid cost {cost}")
            );

            routes.push((from, to, weight, cost));
        }

        tracing::debug!(nodes = n, routes = routes.len(), "parsed route list");
        RouteNetwork::import(n, names, routes).map_err(|e| io_error!(ErrorKind::InvalidData, e))
    }
}

/// Skips blank lines and comments and remembers the (1-based) line number
struct ContentLines<'a, R> {
    lines: Lines<R>,
    line_no: usize,
    comment_identifier: &'a str,
}

impl<R: BufRead> ContentLines<'_, R> {
    /// Returns the next non-comment-line (with its line number) if it exists or propagate an error
    fn next_content_line(&mut self) -> Result<Option<(usize, String)>> {
        loop {
            let Some(line) = self.lines.next() else {
                return Ok(None);
            };
            let line = line?;
            self.line_no += 1;

            if line.trim().is_empty() || line.starts_with(self.comment_identifier) {
                continue;
            }
            return Ok(Some((self.line_no, line)));
        }
    }
}

/// Trait for creating networks from a RouteListReader.
/// Used as shorthand for default RouteListReader settings
pub trait RouteListRead: Sized {
    /// Tries to read the network from a given reader
    fn try_read_route_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the network from a given file
    fn try_read_route_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_route_list(BufReader::new(File::open(path)?))
    }
}

impl RouteListRead for RouteNetwork {
    fn try_read_route_list<R: BufRead>(reader: R) -> Result<Self> {
        RouteListReader::default().try_read_network(reader)
    }
}

/// A writer for the RouteList-Format
#[derive(Debug, Clone)]
pub struct RouteListWriter {
    /// Prefix of the comment lines written before the data
    comment_identifier: String,
    /// Comment lines written before the data
    comments: Vec<String>,
}

impl Default for RouteListWriter {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
            comments: Vec::new(),
        }
    }
}

impl RouteListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.comment_identifier = c.into();
        self
    }

    /// Adds a comment line written at the top of the output
    pub fn comment<S: Into<String>>(mut self, line: S) -> Self {
        self.comments.push(line.into());
        self
    }
}

impl NetworkWriter for RouteListWriter {
    fn try_write_network<W: Write>(&self, network: &RouteNetwork, mut writer: W) -> Result<()> {
        for comment in &self.comments {
            writeln!(writer, "{} {}", self.comment_identifier, comment)?;
        }

        writeln!(writer, "{}", network.number_of_nodes())?;
        for name in network.names() {
            writeln!(writer, "{name}")?;
        }

        for route in network.routes(true) {
            writeln!(
                writer,
                "{} {} {} {}",
                route.from() + 1,
                route.to() + 1,
                route.weight(),
                route.cost()
            )?;
        }

        Ok(())
    }
}

/// Trait for writing a network to a writer in the RouteList-Format.
/// Shorthand for default settings.
pub trait RouteListWrite {
    /// Tries to write the network to a writer
    fn try_write_route_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the network to a file
    fn try_write_route_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_route_list(&mut writer)?;
        writer.flush()
    }
}

impl RouteListWrite for RouteNetwork {
    fn try_write_route_list<W: Write>(&self, writer: W) -> Result<()> {
        RouteListWriter::default().try_write_network(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::AdjacencyTest;
    use itertools::Itertools;

    const FOUR_AIRPORTS: &str = "# four airports\n\
        4\n\
        Atlanta\n\
        Boston\n\
        \n\
        Chicago\n\
        Denver\n\
        1 2 100 50\n\
        # direct connection\n\
        2 3 200 80\n\
        1 3 250 150\n\
        3 4 50 20.5\n";

    fn read(text: &str) -> Result<RouteNetwork> {
        RouteNetwork::try_read_route_list(text.as_bytes())
    }

    fn error_kind(text: &str) -> ErrorKind {
        read(text).unwrap_err().kind()
    }

    #[test]
    fn read_four_airports() {
        let network = read(FOUR_AIRPORTS).unwrap();

        assert_eq!(network.number_of_nodes(), 4);
        assert_eq!(network.number_of_routes(), 8);
        assert_eq!(network.names(), ["Atlanta", "Boston", "Chicago", "Denver"]);
        assert_eq!(network.node_by_name("Chicago"), Some(2));

        let route = network.graph().find_route(3, 2).unwrap();
        assert_eq!(route.weight(), 50);
        assert_eq!(route.cost(), 20.5);
        assert_eq!(network.shortest_by_cost(0, 2).unwrap().total, 130.0);
    }

    #[test]
    fn custom_comment_identifier() {
        let text = "c header\n2\nX\nY\nc route\n1 2 7 3\n";
        assert_eq!(error_kind(text), ErrorKind::InvalidData);

        let network = RouteListReader::new()
            .comment_identifier("c ")
            .try_read_network(text.as_bytes())
            .unwrap();
        assert_eq!(network.number_of_routes(), 2);
    }

    #[test]
    fn invalid_inputs() {
        // missing count
        assert_eq!(error_kind("# nothing\n\n"), ErrorKind::InvalidData);
        assert_eq!(error_kind("three\nA\nB\nC\n"), ErrorKind::InvalidData);

        // too few names
        assert_eq!(error_kind("3\nA\nB\n"), ErrorKind::InvalidData);

        // malformed route lines
        assert_eq!(error_kind("2\nA\nB\n1 2 100\n"), ErrorKind::InvalidData);
        assert_eq!(error_kind("2\nA\nB\n1 2 x 5\n"), ErrorKind::InvalidData);
        assert_eq!(error_kind("2\nA\nB\n1 2 -3 5\n"), ErrorKind::InvalidData);
        assert_eq!(error_kind("2\nA\nB\n1 2 3 -5\n"), ErrorKind::InvalidData);

        // out of range
        assert_eq!(error_kind("2\nA\nB\n0 2 1 1\n"), ErrorKind::InvalidData);
        assert_eq!(error_kind("2\nA\nB\n1 3 1 1\n"), ErrorKind::InvalidData);
    }

    #[test]
    fn write_four_airports() {
        let network = read(FOUR_AIRPORTS).unwrap();

        let mut buffer = Vec::new();
        RouteListWriter::new()
            .comment("exported")
            .try_write_network(&network, &mut buffer)
            .unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "# exported\n4\nAtlanta\nBoston\nChicago\nDenver\n1 2 100 50\n1 3 250 150\n2 3 200 80\n3 4 50 20.5\n"
        );
    }

    #[test]
    fn written_networks_read_back() {
        let mut network = read(FOUR_AIRPORTS).unwrap();
        network.add_route(1, 1, 10, 0.25).unwrap();
        network.remove_route(2, 1).unwrap();

        let mut buffer = Vec::new();
        network.try_write_route_list(&mut buffer).unwrap();
        let reread = read(std::str::from_utf8(&buffer).unwrap()).unwrap();

        assert_eq!(reread.names(), network.names());
        assert_eq!(reread.number_of_routes(), network.number_of_routes());
        assert_eq!(
            reread.routes(false).map(|r| r.to_string()).sorted().collect_vec(),
            network.routes(false).map(|r| r.to_string()).sorted().collect_vec()
        );
    }
}
