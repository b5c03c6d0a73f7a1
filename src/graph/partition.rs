use super::*;

pub type PartitionClass = Node;

/// A partition splits a graph into node-disjoint substructures (think
/// connected components, cut sides, etc)
pub struct Partition {
    // Remark on the encoding: in a perfect world `classes` should contain
    // `Option<PartitionClass>` to encode "unassigned" nodes. As of writing,
    // this is extremely wasteful since `PartitionClass` requires 4 bytes,
    // while `Option<PartitionClass>` takes 8 bytes (due to padding for
    // alignment). We hence treat class 0 as unassigned and hide that from
    // the user: partition class `i` is mapped to the internal class `i+1`.
    classes: Vec<PartitionClass>,
    class_sizes: Vec<Node>,
}

impl Partition {
    /// Creates a partition for `nodes` nodes which are initially all unassigned
    ///
    /// # Example
    /// ```
    /// use gmc::graph::partition::*;
    /// let partition = Partition::new(10);
    /// assert_eq!(partition.number_of_unassigned(), 10);
    /// ```
    pub fn new(nodes: NumNodes) -> Self {
        Self {
            classes: vec![0; nodes as usize],
            class_sizes: vec![nodes],
        }
    }

    /// Creates a new partition class and assigns all provided nodes to it; we
    /// require that these nodes were previously unassigned.
    ///
    /// # Example
    /// ```
    /// use gmc::graph::partition::*;
    /// let mut partition = Partition::new(10);
    /// let class_id = partition.add_class([2, 4]);
    /// assert_eq!(partition.number_of_unassigned(), 8);
    /// assert_eq!(partition.number_in_class(class_id), 2);
    /// ```
    pub fn add_class<I: IntoIterator<Item = Node>>(&mut self, nodes: I) -> PartitionClass {
        let class_id = self.class_sizes.len() as PartitionClass;
        self.class_sizes.push(0);

        let size = &mut self.class_sizes[class_id as usize];
        for u in nodes {
            assert_eq!(self.classes[u as usize], 0); // check that node is unassigned
            self.classes[u as usize] = class_id;
            *size += 1;
        }

        self.class_sizes[0] -= *size;

        class_id - 1
    }

    /// Moves node into an existing partition class. The node may or may not
    /// have been previously assigned.
    ///
    /// # Example
    /// ```
    /// use gmc::graph::partition::*;
    /// let mut partition = Partition::new(10);
    /// let class_id = partition.add_class([2, 4]);
    /// partition.move_node(1, class_id);
    /// assert_eq!(partition.number_of_unassigned(), 7);
    /// assert_eq!(partition.number_in_class(class_id), 3);
    /// ```
    pub fn move_node(&mut self, node: Node, new_class: PartitionClass) {
        self.class_sizes[self.classes[node as usize] as usize] -= 1;
        self.classes[node as usize] = new_class + 1;
        self.class_sizes[self.classes[node as usize] as usize] += 1;
    }

    /// Returns the class identifier of node `node` or `None` if `node` is unassigned
    ///
    /// # Example
    /// ```
    /// use gmc::graph::partition::*;
    /// let mut partition = Partition::new(10);
    /// let class_id = partition.add_class([2, 4]);
    /// assert_eq!(partition.class_of_node(1), None);
    /// assert_eq!(partition.class_of_node(2), Some(class_id));
    /// ```
    pub fn class_of_node(&self, node: Node) -> Option<PartitionClass> {
        let class_id = self.classes[node as usize];
        if class_id == 0 { None } else { Some(class_id - 1) }
    }

    /// Returns the class identifier if both nodes `u` and `v` are assigned to
    /// the same class and `None` otherwise.
    ///
    /// # Example
    /// ```
    /// use gmc::graph::partition::*;
    /// let mut partition = Partition::new(10);
    /// let c1 = partition.add_class([2, 4]);
    /// let c2 = partition.add_class([6, 8]);
    /// assert_eq!(partition.class_of_edge(0, 2), None); // 0 unassigned
    /// assert_eq!(partition.class_of_edge(4, 6), None); // different classes
    /// assert_eq!(partition.class_of_edge(2, 4), Some(c1));
    /// assert_eq!(partition.class_of_edge(8, 6), Some(c2));
    /// ```
    pub fn class_of_edge(&self, u: Node, v: Node) -> Option<PartitionClass> {
        let cu = self.class_of_node(u)?;
        let cv = self.class_of_node(v)?;
        if cu == cv { Some(cu) } else { None }
    }

    /// Returns the number of unassigned nodes
    pub fn number_of_unassigned(&self) -> Node {
        self.class_sizes[0]
    }

    /// Returns the number of nodes in class `class_id`
    pub fn number_in_class(&self, class_id: PartitionClass) -> Node {
        self.class_sizes[class_id as usize + 1]
    }

    /// Returns the number of partition classes (0 if all nodes are unassigned)
    pub fn number_of_classes(&self) -> Node {
        self.class_sizes.len() as Node - 1
    }

    /// Returns the members of a partition class in order.
    ///
    /// # Warning
    /// This operation requires time linear in the total number of nodes,
    /// i.e. it is roughly independent of the actual class size.
    ///
    /// # Example
    /// ```
    /// use gmc::graph::partition::*;
    /// use itertools::Itertools;
    /// let mut partition = Partition::new(10);
    /// let class_id = partition.add_class([2, 5, 4]);
    /// assert_eq!(partition.members_of_class(class_id).collect_vec(), vec![2, 4, 5]);
    /// ```
    pub fn members_of_class(&self, class_id: PartitionClass) -> impl Iterator<Item = Node> + '_ {
        let class_id = class_id + 1;
        assert!(self.class_sizes.len() > class_id as usize);
        self.classes.iter().enumerate().filter_map(move |(i, &c)| {
            if c == class_id { Some(i as Node) } else { None }
        })
    }
}
