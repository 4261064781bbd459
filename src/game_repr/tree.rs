// Explicit game tree implementing the GameState contract.
//
// Every node carries a static value scored from the first player's point of
// view. Leaves are terminal and pay out that value (negated for the second
// player). Interior values are what a node-value evaluator reports when the
// search cuts off above the leaves. Used to drive the search on synthetic
// positions in tests and benchmarks.

use super::{ActionList, GameState, PlayerId};
use rand::Rng;

#[derive(Debug, Clone)]
struct TreeNode {
    children: Vec<usize>,
    value: f64,
}

#[derive(Debug, Clone)]
pub struct GameTree {
    nodes: Vec<TreeNode>,
}

impl GameTree {
    pub const ROOT: usize = 0;

    /// A tree holding only a root with the given value.
    pub fn new(root_value: f64) -> Self {
        Self {
            nodes: vec![TreeNode {
                children: Vec::new(),
                value: root_value,
            }],
        }
    }

    /// Append a child under `parent` and return its node index.
    /// Children are visited in insertion order.
    pub fn add_child(&mut self, parent: usize, value: f64) -> usize {
        let index = self.nodes.len();
        self.nodes.push(TreeNode {
            children: Vec::new(),
            value,
        });
        self.nodes[parent].children.push(index);
        index
    }

    /// Complete tree with the given branching factor whose leaves, left to
    /// right, carry `leaves`. Interior nodes are valued 0.
    ///
    /// # Panics
    ///
    /// If `leaves.len()` is not a power of `branching`.
    pub fn uniform(branching: usize, leaves: &[f64]) -> Self {
        assert!(
            branching >= 2 || leaves.len() <= 1,
            "branching factor must be at least 2"
        );

        let mut tree = GameTree::new(0.0);
        let mut frontier = vec![Self::ROOT];
        while frontier.len() < leaves.len() {
            let mut next = Vec::with_capacity(frontier.len() * branching);
            for &parent in &frontier {
                for _ in 0..branching {
                    next.push(tree.add_child(parent, 0.0));
                }
            }
            frontier = next;
        }
        assert_eq!(
            frontier.len(),
            leaves.len(),
            "leaf count must be a power of the branching factor"
        );

        for (&node, &value) in frontier.iter().zip(leaves) {
            tree.nodes[node].value = value;
        }
        tree
    }

    /// Random tree of exactly `depth` levels below the root, each interior
    /// node having between 1 and `max_branching` children. Node values are
    /// small integers so ties happen regularly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, depth: u32, max_branching: usize) -> Self {
        let max_branching = max_branching.max(1);
        let mut tree = GameTree::new(rng.gen_range(-20..=20) as f64);
        let mut frontier = vec![Self::ROOT];

        for _ in 0..depth {
            let mut next = Vec::new();
            for &parent in &frontier {
                let children = rng.gen_range(1..=max_branching);
                for _ in 0..children {
                    let value = rng.gen_range(-20..=20) as f64;
                    next.push(tree.add_child(parent, value));
                }
            }
            frontier = next;
        }
        tree
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.children.is_empty()).count()
    }

    /// Root state at ply 0.
    pub fn root(&self) -> TreeState<'_> {
        self.root_at_ply(0)
    }

    /// Root state reporting `ply` as its ply count.
    pub fn root_at_ply(&self, ply: u32) -> TreeState<'_> {
        TreeState {
            tree: self,
            node: Self::ROOT,
            ply,
        }
    }
}

/// Position inside a [`GameTree`]. Actions are child slots `0..n`.
#[derive(Debug, Clone, Copy)]
pub struct TreeState<'a> {
    tree: &'a GameTree,
    node: usize,
    ply: u32,
}

impl<'a> TreeState<'a> {
    pub fn node(&self) -> usize {
        self.node
    }

    /// Static value of this node for `player`.
    pub fn value_for(&self, player: PlayerId) -> f64 {
        let value = self.tree.nodes[self.node].value;
        if player == PlayerId::FIRST {
            value
        } else {
            -value
        }
    }
}

impl<'a> GameState for TreeState<'a> {
    type Action = usize;

    fn actions(&self) -> ActionList<usize> {
        (0..self.tree.nodes[self.node].children.len()).collect()
    }

    fn result(&self, action: &usize) -> Self {
        TreeState {
            tree: self.tree,
            node: self.tree.nodes[self.node].children[*action],
            ply: self.ply + 1,
        }
    }

    fn terminal_test(&self) -> bool {
        self.tree.nodes[self.node].children.is_empty()
    }

    fn utility(&self, player: PlayerId) -> f64 {
        self.value_for(player)
    }

    fn ply_count(&self) -> u32 {
        self.ply
    }
}
