//! Lazily expanded search tree over guess/feedback histories.
//!
//! Nodes live in an arena owned by [`SearchTree`] and are addressed by
//! [`NodeId`]. Each node memoizes, per guess played from it, the child node
//! reached by each feedback pattern. Children are never dropped while the
//! tree is alive, so replaying a guess is a lookup.

use crate::entropy::{rank_guesses, GuessAnalysis};
use crate::error::WordleError;
use crate::feedback::FeedbackPattern;
use crate::partition::partition;
use crate::word::{Dictionary, Word};
use std::collections::BTreeMap;

/// Which words are scored as potential guesses at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeUniverse {
    /// Only the node's own candidates.
    #[default]
    Candidates,
    /// Every dictionary word, including ones already ruled out as answers.
    Dictionary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// Children reached from one guess, keyed by the feedback observed.
pub type Branch = BTreeMap<FeedbackPattern, NodeId>;

#[derive(Debug, Clone)]
pub struct Node {
    candidates: Vec<Word>,
    depth: usize,
    children: BTreeMap<Word, Branch>,
}

impl Node {
    fn new(candidates: Vec<Word>, depth: usize) -> Self {
        Self {
            candidates,
            depth,
            children: BTreeMap::new(),
        }
    }

    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// An empty node means the feedback history contradicts itself.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The answer, once only one candidate is left.
    pub fn solution(&self) -> Option<Word> {
        match self.candidates.as_slice() {
            [word] => Some(*word),
            _ => None,
        }
    }

    pub fn branch(&self, guess: &Word) -> Option<&Branch> {
        self.children.get(guess)
    }

    pub fn children(&self) -> impl Iterator<Item = (&Word, &Branch)> {
        self.children.iter()
    }

    /// Guesses played from this node so far.
    pub fn played(&self) -> usize {
        self.children.len()
    }
}

pub struct SearchTree<'a> {
    dictionary: &'a Dictionary,
    nodes: Vec<Node>,
    probes: ProbeUniverse,
    max_nodes: usize,
    partitions: usize,
}

impl<'a> SearchTree<'a> {
    /// A tree whose root holds the whole dictionary.
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            nodes: vec![Node::new(dictionary.words().to_vec(), 0)],
            probes: ProbeUniverse::default(),
            max_nodes: crate::config::MAX_NODES,
            partitions: 0,
        }
    }

    pub fn with_probes(mut self, probes: ProbeUniverse) -> Self {
        self.probes = probes;
        self
    }

    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    pub fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn size(&self, id: NodeId) -> usize {
        self.node(id).len()
    }

    /// Total nodes materialized so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// How many partitions have been computed; replays do not count.
    pub fn partitions_computed(&self) -> usize {
        self.partitions
    }

    /// Partition the node's candidates by `guess` and materialize one child
    /// per occurring feedback. Memoized per (node, guess).
    pub fn play(&mut self, id: NodeId, guess: Word) -> &Branch {
        if !self.nodes[id.0].children.contains_key(&guess) {
            let depth = self.nodes[id.0].depth + 1;
            let buckets: BTreeMap<_, _> = partition(guess, &self.nodes[id.0].candidates)
                .into_buckets()
                .into_iter()
                .collect();
            self.partitions += 1;

            let mut branch = Branch::new();
            for (pattern, words) in buckets {
                let child = NodeId(self.nodes.len());
                self.nodes.push(Node::new(words, depth));
                branch.insert(pattern, child);
            }
            self.nodes[id.0].children.insert(guess, branch);
        }
        &self.nodes[id.0].children[&guess]
    }

    /// Follow `guess` and the observed `feedback` to the next node.
    pub fn descend(
        &mut self,
        id: NodeId,
        guess: Word,
        feedback: FeedbackPattern,
    ) -> Result<NodeId, WordleError> {
        let depth = self.node(id).depth + 1;
        self.play(id, guess)
            .get(&feedback)
            .copied()
            .ok_or(WordleError::Contradiction { depth })
    }

    /// Top `n` guesses at a node by entropy of the partition they induce.
    pub fn max_entropy_guesses(
        &self,
        id: NodeId,
        n: usize,
    ) -> Result<Vec<GuessAnalysis>, WordleError> {
        let node = self.node(id);
        if node.is_empty() {
            return Err(WordleError::Contradiction { depth: node.depth });
        }
        if let Some(word) = node.solution() {
            return Ok(vec![GuessAnalysis {
                word,
                entropy: 0.0,
                expected_remaining: 1.0,
                is_candidate: true,
            }]);
        }

        let probes = match self.probes {
            ProbeUniverse::Candidates => node.candidates(),
            ProbeUniverse::Dictionary => self.dictionary.words(),
        };
        Ok(rank_guesses(node.candidates(), probes).top_n(n).to_vec())
    }

    /// Play each of the top `n` guesses from a node.
    pub fn make_max_entropy_guesses(
        &mut self,
        id: NodeId,
        n: usize,
    ) -> Result<Vec<GuessAnalysis>, WordleError> {
        let guesses = self.max_entropy_guesses(id, n)?;
        for analysis in &guesses {
            self.play(id, analysis.word);
        }
        Ok(guesses)
    }

    /// Eagerly expand everything below `id` down to `max_depth`.
    ///
    /// Nodes without a played guess get their best entropy guess played;
    /// nodes with at most one candidate are left alone. Expansion stops
    /// early once the tree holds `max_nodes` nodes. Returns how many nodes
    /// were created.
    pub fn populate(&mut self, id: NodeId, max_depth: usize) -> Result<usize, WordleError> {
        let before = self.nodes.len();
        if !self.populate_node(id, max_depth)? {
            log::warn!(
                "{:<32}{:<32}",
                "node budget reached",
                format!("{} nodes", self.max_nodes)
            );
        }
        Ok(self.nodes.len() - before)
    }

    fn populate_node(&mut self, id: NodeId, max_depth: usize) -> Result<bool, WordleError> {
        let node = self.node(id);
        if node.is_empty() {
            return Err(WordleError::Contradiction { depth: node.depth });
        }
        if node.depth >= max_depth || node.len() <= 1 {
            return Ok(true);
        }
        if self.nodes.len() >= self.max_nodes {
            return Ok(false);
        }
        if node.depth <= 1 {
            log::debug!(
                "{}populating node (depth={}) with {} words",
                "   ".repeat(node.depth),
                node.depth,
                node.len()
            );
        }
        if node.played() == 0 {
            self.make_max_entropy_guesses(id, 1)?;
        }

        let children: Vec<NodeId> = self
            .node(id)
            .children()
            .flat_map(|(_, branch)| branch.values().copied())
            .collect();
        for child in children {
            if !self.populate_node(child, max_depth)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
