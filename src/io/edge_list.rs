//! # EdgeList
//!
//! Instance readers and writers for the edge-list format described in the
//! [module docs](super). An instance file carries the graph, the reveal
//! order, and the planted classes, so reading a written file reconstructs
//! the full [`OnlineInstance`].

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use itertools::Itertools;

use super::*;
use crate::{instance::OnlineInstance, ops::*, utils::Partition};

/// A writer for instances in the edge-list format.
///
/// Edges are written 1-based and in sorted order, so writing a freshly read
/// instance reproduces the input byte for byte.
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter {
    header: Header,
}

impl EdgeListWriter {
    /// Creates a new (default) writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the header format
    pub fn header_format(mut self, format: Header) -> Self {
        self.header = format;
        self
    }

    /// Tries to write the instance to a writer
    pub fn try_write<W: Write>(&self, instance: &OnlineInstance, mut writer: W) -> Result<()> {
        let graph = instance.graph();
        self.header
            .write_header(&mut writer, graph.number_of_nodes(), graph.number_of_edges())?;

        writeln!(
            writer,
            "c order {}",
            instance.reveal_order().iter().map(|&u| u + 1).join(" ")
        )?;

        let planted = instance.planted_partition();
        writeln!(
            writer,
            "c classes {}",
            graph
                .vertices()
                .map(|u| planted.class_of_node(u).unwrap() + 1)
                .join(" ")
        )?;

        for Edge(u, v) in graph.ordered_edges(true) {
            writeln!(writer, "{} {}", u + 1, v + 1)?;
        }

        Ok(())
    }

    /// Tries to write the instance to a file
    pub fn try_write_file<P: AsRef<Path>>(&self, instance: &OnlineInstance, path: P) -> Result<()> {
        self.try_write(instance, BufWriter::new(File::create(path)?))
    }
}

/// A reader for instances in the edge-list format.
///
/// The first non-comment line must be the header. The `c order` and
/// `c classes` comment lines are required; all other comment lines are
/// skipped.
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    header: Header,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            header: Header::default(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the header format
    pub fn header_format(mut self, format: Header) -> Self {
        self.header = format;
        self
    }

    /// Tries to read an instance from a reader
    pub fn try_read<R: BufRead>(&self, reader: R) -> Result<OnlineInstance> {
        let mut size = None;
        let mut order = None;
        let mut classes = None;
        let mut edges: Vec<Edge> = Vec::new();

        for line in reader.lines() {
            let line = line?;

            if let Some(rest) = line.strip_prefix("c order ") {
                order = Some(parse_value_list(rest, "Reveal order")?);
            } else if let Some(rest) = line.strip_prefix("c classes ") {
                classes = Some(parse_value_list(rest, "Planted classes")?);
            } else if line.starts_with('c') {
                continue;
            } else if size.is_none() {
                size = Some(self.header.parse_header(&line)?);
            } else {
                let mut parts = line.split(' ').filter(|t| !t.is_empty());
                let u: Node = parse_next_value!(parts, "Source node");
                let v: Node = parse_next_value!(parts, "Target node");
                raise_error_unless!(
                    u > 0 && v > 0,
                    ErrorKind::InvalidData,
                    "Nodes must be 1-based"
                );
                edges.push(Edge(u - 1, v - 1));
            }
        }

        let (n, m) = size.ok_or(io_error!(ErrorKind::NotFound, "Header not found"))?;
        raise_error_unless!(
            edges.len() == m as usize,
            ErrorKind::InvalidData,
            format!("Expected {m} edges, found {}", edges.len())
        );
        raise_error_unless!(
            edges.iter().all(|&Edge(u, v)| u < n && v < n),
            ErrorKind::InvalidData,
            "Edge endpoint out of range"
        );

        let order = order.ok_or(io_error!(ErrorKind::NotFound, "Order comment not found"))?;
        let classes = classes.ok_or(io_error!(ErrorKind::NotFound, "Classes comment not found"))?;
        raise_error_unless!(
            classes.len() == n as usize,
            ErrorKind::InvalidData,
            "Classes comment must assign every node"
        );

        let graph = AdjArrayUndir::from_edges(n, edges);

        let k = classes.iter().max().map_or(0, |&c| c + 1);
        let mut planted = Partition::new(n);
        for class in 0..k {
            planted.add_class(
                classes
                    .iter()
                    .positions(|&c| c == class)
                    .map(|u| u as Node),
            );
        }

        OnlineInstance::new(graph, order, planted)
            .map_err(|e| io_error!(ErrorKind::InvalidData, e.to_string()))
    }

    /// Tries to read an instance from a file
    pub fn try_read_file<P: AsRef<Path>>(&self, path: P) -> Result<OnlineInstance> {
        self.try_read(BufReader::new(File::open(path)?))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;

    #[test]
    fn reads_a_handwritten_instance() {
        let input = "c a free-form comment\n\
                     p col 4 3\n\
                     c order 1 2 3 4\n\
                     c classes 1 2 1 2\n\
                     1 2\n\
                     2 3\n\
                     3 4\n";

        let instance = EdgeListReader::new().try_read(input.as_bytes()).unwrap();
        assert_eq!(instance.number_of_nodes(), 4);
        assert_eq!(instance.reveal_order(), [0, 1, 2, 3]);
        assert_eq!(instance.number_of_classes(), 2);
        assert!(instance.graph().has_edge(1, 2));
        assert!(!instance.graph().has_edge(0, 3));
    }

    #[test]
    fn rejects_incomplete_files() {
        // missing order comment
        let no_order = "p col 2 1\nc classes 1 2\n1 2\n";
        assert!(EdgeListReader::new().try_read(no_order.as_bytes()).is_err());

        // edge count mismatch
        let bad_count = "p col 2 2\nc order 1 2\nc classes 1 2\n1 2\n";
        assert!(EdgeListReader::new().try_read(bad_count.as_bytes()).is_err());

        // missing header
        let no_header = "c order 1 2\nc classes 1 2\n1 2\n";
        assert!(EdgeListReader::new().try_read(no_header.as_bytes()).is_err());
    }

    #[test]
    fn roundtrip_is_byte_stable() {
        let instance = PlantedKColorable::new()
            .nodes(25)
            .classes(3)
            .prob(0.2)
            .generate_with_seed(17)
            .unwrap();

        let mut first = Vec::new();
        EdgeListWriter::new().try_write(&instance, &mut first).unwrap();

        let reread = EdgeListReader::new().try_read(first.as_slice()).unwrap();
        assert_eq!(reread.reveal_order(), instance.reveal_order());
        assert_eq!(
            reread.graph().ordered_edges(true).collect_vec(),
            instance.graph().ordered_edges(true).collect_vec()
        );
        assert!(reread.graph().vertices().all(
            |u| reread.planted_partition().class_of_node(u)
                == instance.planted_partition().class_of_node(u)
        ));

        let mut second = Vec::new();
        EdgeListWriter::new().try_write(&reread, &mut second).unwrap();
        assert_eq!(first, second);
    }
}
