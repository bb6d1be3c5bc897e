use serde::{Deserialize, Serialize};

/// A node of a caller-owned binary tree.
///
/// Trees are plain values: the engine only ever reads them, so one tree can
/// back any number of concurrent traversals without synchronization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub value: i64,
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
}

impl Node {
    /// Node with both children absent.
    #[must_use]
    pub const fn leaf(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    #[must_use]
    pub fn new(value: i64, left: Option<Self>, right: Option<Self>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// In-order (left, node, right) values of the subtree rooted here.
    ///
    /// This is the reference sequence a concurrent traversal must match.
    #[must_use]
    pub fn in_order(&self) -> Vec<i64> {
        let mut out = Vec::new();
        self.collect_in_order(&mut out);
        out
    }

    fn collect_in_order(&self, out: &mut Vec<i64>) {
        if let Some(left) = &self.left {
            left.collect_in_order(out);
        }
        out.push(self.value);
        if let Some(right) = &self.right {
            right.collect_in_order(out);
        }
    }

    /// Pseudo-random binary search tree holding `k, 2k, …, 10k`.
    ///
    /// The ten values are inserted in shuffled order, so two calls with the
    /// same `k` generally produce different shapes over the same in-order
    /// sequence.
    #[cfg(any(test, feature = "testing"))]
    #[must_use]
    pub fn sample(k: i64) -> Self {
        use rand::seq::SliceRandom;

        let mut values: Vec<i64> = (1..=10_i64).map(|i| i * k).collect();
        values.shuffle(&mut rand::thread_rng());

        let mut values = values.into_iter();
        let mut root = Self::leaf(values.next().expect("ten values"));
        for value in values {
            root.insert(value);
        }
        root
    }

    #[cfg(any(test, feature = "testing"))]
    fn insert(&mut self, value: i64) {
        let child = if value < self.value {
            &mut self.left
        } else {
            &mut self.right
        };
        match child {
            Some(node) => node.insert(value),
            None => *child = Some(Box::new(Self::leaf(value))),
        }
    }
}
