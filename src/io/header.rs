//! # Headers
//!
//! The header line of an instance file follows the Pace convention
//!     "p {problem} {n} {m}"
//! where n is the number of nodes and m the number of edges. The problem
//! token defaults to `col`.

use std::io::Write;

use super::*;

/// The header-line format `p {problem} {n} {m}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    problem: String,
}

impl Default for Header {
    fn default() -> Self {
        Self::new_problem("col")
    }
}

impl Header {
    /// Creates a header format with the given problem token
    pub fn new_problem<S: Into<String>>(problem: S) -> Self {
        Self {
            problem: problem.into(),
        }
    }

    /// Tries to parse the header and extract the number of nodes and edges
    pub fn parse_header(&self, line: &str) -> Result<(NumNodes, NumEdges)> {
        let mut parts = line.split(' ').filter(|t| !t.is_empty());

        let p: String = parse_next_value!(parts, "Header>Identifier");
        raise_error_unless!(p == "p", ErrorKind::InvalidData, "Invalid header found");

        let problem: String = parse_next_value!(parts, "Header>Problem");
        raise_error_unless!(
            problem == self.problem,
            ErrorKind::InvalidData,
            "Invalid header found"
        );

        let number_of_nodes = parse_next_value!(parts, "Header>Number of nodes");
        let number_of_edges = parse_next_value!(parts, "Header>Number of edges");

        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            "Header is longer than expected"
        );

        Ok((number_of_nodes, number_of_edges))
    }

    /// Writes the header line for an instance with `n` nodes and `m` edges
    pub fn write_header<W: Write>(&self, writer: &mut W, n: NumNodes, m: NumEdges) -> Result<()> {
        writeln!(writer, "p {} {} {}", self.problem, n, m)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn roundtrip() {
        let header = Header::default();

        let mut buf = Vec::new();
        header.write_header(&mut buf, 12, 34).unwrap();
        assert_eq!(buf, b"p col 12 34\n");

        let parsed = header.parse_header("p col 12 34").unwrap();
        assert_eq!(parsed, (12, 34));
    }

    #[test]
    fn rejects_malformed_headers() {
        let header = Header::default();

        for line in ["", "p col", "p ds 3 2", "q col 3 2", "p col 3 2 1", "p col x 2"] {
            assert!(header.parse_header(line).is_err());
        }
    }
}
