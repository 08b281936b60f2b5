/*!
# Partitioning of Nodes

A [`Partition`] splits the nodes of a graph into disjoint **classes**. In this
crate it represents the planted independent sets of a generated instance: the
witness that the graph is k-colorable.

# Example

```rust
use ocolor::utils::Partition;

let mut part = Partition::new(5);

let c0 = part.add_class([0, 1]);
let c1 = part.add_class([2, 3]);

part.move_node(4, c0);

assert_eq!(part.number_of_classes(), 2);
assert_eq!(part.number_in_class(c0), 3);
assert_eq!(part.class_of_edge(2, 4), None);
assert_eq!(part.class_of_edge(0, 4), Some(c0));
assert_eq!(part.class_of_node(2), Some(c1));
```
*/

use std::{iter::Enumerate, slice::Iter};

use crate::node::*;

/// Classes are identified by consecutive integer ids starting at `0`
pub type PartitionClass = NumNodes;

/// Represents a **partition** of the node set into disjoint classes.
///
/// Each node can belong to at most one class, or remain **unassigned**.
#[derive(Debug)]
pub struct Partition {
    classes: Vec<Option<OptionalNode>>,
    class_sizes: Vec<NumNodes>,
    unassigned: NumNodes,
}

/// Iterator over the members of a single partition class.
///
/// Returned by [`Partition::members_of_class`].
pub struct ClassMemberIter<'a> {
    classes: Enumerate<Iter<'a, Option<OptionalNode>>>,
    class_id: Option<OptionalNode>,
}

impl Iterator for ClassMemberIter<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        self.classes
            .find(|(_, c)| **c == self.class_id)
            .map(|(u, _)| u as Node)
    }
}

impl Partition {
    /// Creates a new partition over `nodes` nodes, all initially unassigned.
    pub fn new(nodes: NumNodes) -> Self {
        Self {
            classes: vec![None; nodes as usize],
            class_sizes: vec![],
            unassigned: nodes,
        }
    }

    /// Creates a new class and assigns the given nodes to it.
    /// Returns the new class identifier.
    ///
    /// # Panics
    /// If any provided node was already assigned to another class.
    pub fn add_class<I>(&mut self, nodes: I) -> PartitionClass
    where
        I: IntoIterator<Item = Node>,
    {
        let raw_class_id = self.class_sizes.len();
        let class_id = OptionalNode::new(raw_class_id as Node);
        self.class_sizes.push(0);

        let size = &mut self.class_sizes[raw_class_id];
        for u in nodes {
            assert_eq!(self.classes[u as usize], None); // check that node is unassigned
            self.classes[u as usize] = class_id;
            *size += 1;
        }

        self.unassigned -= *size;

        raw_class_id as PartitionClass
    }

    /// Moves a node into an existing partition class.
    ///
    /// - If the node was already in a class, it is removed from its old class.
    /// - If the node was unassigned, it becomes assigned.
    pub fn move_node(&mut self, node: Node, new_class: PartitionClass) {
        if let Some(old_class) = self.classes[node as usize].map(|old_class| old_class.get()) {
            self.class_sizes[old_class as usize] -= 1;
        } else {
            self.unassigned -= 1;
        }
        self.classes[node as usize] = OptionalNode::new(new_class);
        self.class_sizes[new_class as usize] += 1;
    }

    /// Returns the class identifier of a node, or `None` if the node is unassigned.
    pub fn class_of_node(&self, node: Node) -> Option<PartitionClass> {
        self.classes[node as usize].map(|class| class.get() as PartitionClass)
    }

    /// Returns the class identifier if both endpoints of an edge belong
    /// to the same class, or `None` otherwise.
    pub fn class_of_edge(&self, u: Node, v: Node) -> Option<PartitionClass> {
        let cu = self.class_of_node(u)?;
        let cv = self.class_of_node(v)?;
        if cu == cv { Some(cu) } else { None }
    }

    /// Returns the number of currently unassigned nodes.
    pub fn number_of_unassigned(&self) -> NumNodes {
        self.unassigned
    }

    /// Returns the number of nodes the partition was created for.
    pub fn number_of_nodes(&self) -> NumNodes {
        self.classes.len() as NumNodes
    }

    /// Returns the number of nodes in the specified class.
    pub fn number_in_class(&self, class_id: PartitionClass) -> NumNodes {
        self.class_sizes[class_id as usize]
    }

    /// Returns the number of partition classes (0 if all nodes are unassigned)
    pub fn number_of_classes(&self) -> NumNodes {
        self.class_sizes.len() as NumNodes
    }

    /// Returns an iterator over all members of a given class.
    ///
    /// # Warning
    /// This operation is **linear in the total number of nodes**,
    /// not the size of the class itself.
    pub fn members_of_class(&self, class_id: PartitionClass) -> ClassMemberIter<'_> {
        let class = OptionalNode::new(class_id);
        assert!(self.class_sizes.len() > class_id as usize);
        ClassMemberIter {
            classes: self.classes.iter().enumerate(),
            class_id: class,
        }
    }
}

/// Convenience trait for converting a collection of classes into a [`Partition`].
///
/// Each inner collection is interpreted as one partition class.
pub trait IntoPartition {
    /// Consumes the collection and builds a [`Partition`] with `n` total nodes.
    ///
    /// # Example
    /// ```rust
    /// use ocolor::utils::{IntoPartition, Partition};
    ///
    /// let classes = vec![vec![0, 1], vec![2, 3]];
    /// let part = classes.into_partition(4);
    ///
    /// assert_eq!(part.number_of_classes(), 2);
    /// assert_eq!(part.class_of_edge(0, 1), Some(0));
    /// assert_eq!(part.class_of_edge(2, 3), Some(1));
    /// ```
    fn into_partition(self, n: NumNodes) -> Partition;
}

impl<N, I> IntoPartition for I
where
    N: IntoIterator<Item = Node>,
    I: IntoIterator<Item = N>,
{
    fn into_partition(self, n: NumNodes) -> Partition {
        let mut partition = Partition::new(n);
        for class in self {
            partition.add_class(class);
        }
        partition
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn class_membership() {
        let part = vec![vec![0, 2], vec![1]].into_partition(4);

        assert_eq!(part.number_of_classes(), 2);
        assert_eq!(part.number_of_unassigned(), 1);
        assert_eq!(part.class_of_node(0), Some(0));
        assert_eq!(part.class_of_node(1), Some(1));
        assert_eq!(part.class_of_node(3), None);

        assert_eq!(part.members_of_class(0).collect_vec(), vec![0, 2]);
        assert_eq!(part.members_of_class(1).collect_vec(), vec![1]);
    }

    #[test]
    fn moving_nodes() {
        let mut part = Partition::new(3);
        let c0 = part.add_class([0]);
        let c1 = part.add_class([1]);

        part.move_node(2, c0);
        assert_eq!(part.number_in_class(c0), 2);

        part.move_node(0, c1);
        assert_eq!(part.number_in_class(c0), 1);
        assert_eq!(part.number_in_class(c1), 2);
        assert_eq!(part.class_of_edge(0, 1), Some(c1));
    }
}
