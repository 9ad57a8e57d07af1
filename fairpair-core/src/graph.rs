/// Compatibility graph over teams.
///
/// Nodes are stored in an arena and referred to by their index (`NodeId`).
/// Two nodes are adjacent iff their teams share no player. Adjacency rows are
/// `NodeSet` bitsets, so adjacency checks are O(1) and neighbourhood
/// intersections are word-wise.
use crate::types::Team;

/// Index of a node inside its `CompatibilityGraph`.
pub type NodeId = usize;

const WORD_BITS: usize = u64::BITS as usize;

// ---------------------------------------------------------------------------
// NodeSet
// ---------------------------------------------------------------------------

/// Fixed-capacity bitset of node ids.
///
/// Sets built for the same graph have the same word count, so equality and
/// hashing compare membership only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeSet {
    words: Vec<u64>,
}

impl NodeSet {
    /// Empty set able to hold ids `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        NodeSet { words: vec![0; capacity.div_ceil(WORD_BITS)] }
    }

    /// Set holding every id in `0..capacity`.
    pub fn full(capacity: usize) -> Self {
        let mut set = Self::with_capacity(capacity);
        for (w, word) in set.words.iter_mut().enumerate() {
            let remaining = capacity - w * WORD_BITS;
            *word = if remaining >= WORD_BITS { u64::MAX } else { (1u64 << remaining) - 1 };
        }
        set
    }

    pub fn from_ids(capacity: usize, ids: impl IntoIterator<Item = NodeId>) -> Self {
        let mut set = Self::with_capacity(capacity);
        for id in ids {
            set.insert(id);
        }
        set
    }

    #[inline]
    pub fn insert(&mut self, id: NodeId) {
        self.words[id / WORD_BITS] |= 1u64 << (id % WORD_BITS);
    }

    #[inline]
    pub fn remove(&mut self, id: NodeId) {
        self.words[id / WORD_BITS] &= !(1u64 << (id % WORD_BITS));
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.words
            .get(id / WORD_BITS)
            .is_some_and(|w| w & (1u64 << (id % WORD_BITS)) != 0)
    }

    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    pub fn intersection(&self, other: &NodeSet) -> NodeSet {
        NodeSet { words: self.words.iter().zip(&other.words).map(|(a, b)| a & b).collect() }
    }

    pub fn union(&self, other: &NodeSet) -> NodeSet {
        NodeSet { words: self.words.iter().zip(&other.words).map(|(a, b)| a | b).collect() }
    }

    pub fn symmetric_difference(&self, other: &NodeSet) -> NodeSet {
        NodeSet { words: self.words.iter().zip(&other.words).map(|(a, b)| a ^ b).collect() }
    }

    /// `|self ^ other|` without allocating.
    pub fn symmetric_difference_len(&self, other: &NodeSet) -> usize {
        self.words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| (a ^ b).count_ones() as usize)
            .sum()
    }

    /// Drop every id `<= id`.
    pub fn remove_through(&mut self, id: NodeId) {
        let word = id / WORD_BITS;
        for w in self.words.iter_mut().take(word) {
            *w = 0;
        }
        if let Some(w) = self.words.get_mut(word) {
            let bit = id % WORD_BITS;
            *w &= if bit + 1 >= WORD_BITS { 0 } else { !((1u64 << (bit + 1)) - 1) };
        }
    }

    /// Ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.words.iter().enumerate().flat_map(|(w, &word)| {
            let mut bits = word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let tz = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(w * WORD_BITS + tz)
            })
        })
    }

    pub fn to_vec(&self) -> Vec<NodeId> {
        self.iter().collect()
    }
}

// ---------------------------------------------------------------------------
// CompatibilityGraph
// ---------------------------------------------------------------------------

/// One team plus its adjacency row.
#[derive(Debug, Clone)]
pub struct GraphNode {
    pub team: Team,
    neighbors: NodeSet,
}

impl GraphNode {
    pub fn neighbors(&self) -> &NodeSet {
        &self.neighbors
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// Undirected simple graph; edge(a, b) iff team(a) and team(b) are disjoint.
#[derive(Debug, Clone)]
pub struct CompatibilityGraph {
    nodes: Vec<GraphNode>,
}

impl CompatibilityGraph {
    /// Add teams one at a time, linking each new node to every existing node
    /// it is disjoint from. O(n²) in the number of teams.
    pub fn from_teams(teams: Vec<Team>) -> Self {
        let capacity = teams.len();
        let mut nodes: Vec<GraphNode> = Vec::with_capacity(capacity);

        for team in teams {
            let id = nodes.len();
            let mut neighbors = NodeSet::with_capacity(capacity);
            for (other_id, other) in nodes.iter_mut().enumerate() {
                if team.is_disjoint(&other.team) {
                    other.neighbors.insert(id);
                    neighbors.insert(other_id);
                }
            }
            nodes.push(GraphNode { team, neighbors });
        }

        CompatibilityGraph { nodes }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(GraphNode::degree).sum::<usize>() / 2
    }

    pub fn node(&self, id: NodeId) -> &GraphNode {
        &self.nodes[id]
    }

    pub fn team(&self, id: NodeId) -> &Team {
        &self.nodes[id].team
    }

    pub fn neighbors(&self, id: NodeId) -> &NodeSet {
        &self.nodes[id].neighbors
    }

    #[inline]
    pub fn are_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.nodes[a].neighbors.contains(b)
    }

    /// Every node id as a set.
    pub fn all_nodes(&self) -> NodeSet {
        NodeSet::full(self.nodes.len())
    }

    /// Each undirected edge exactly once, as `(a, b)` with `a < b`.
    ///
    /// Uses a visited set local to this call: a node's edges are emitted when
    /// it is visited, skipping neighbours that were visited before it.
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        let mut visited = NodeSet::with_capacity(self.nodes.len());
        let mut edges = Vec::with_capacity(self.edge_count());
        for (id, node) in self.nodes.iter().enumerate() {
            visited.insert(id);
            for other in node.neighbors.iter() {
                if !visited.contains(other) {
                    edges.push((id, other));
                }
            }
        }
        edges
    }
}
