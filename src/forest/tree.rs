//! CART decision tree grown with Gini impurity
//!
//! Array-based node storage: children are addressed by index into `nodes`,
//! the root is node 0. Class labels are dense indices `0..n_classes`; the
//! forest owns the mapping back to caller labels.

use super::params::ForestParams;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// A node in the decision tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// Internal node: samples with `x[feature] <= threshold` go left.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Terminal node holding the class distribution of its training samples.
    Leaf { distribution: Vec<f64> },
}

impl TreeNode {
    /// Returns `true` if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }
}

/// A fitted classification tree.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
    n_features: usize,
    n_classes: usize,
    importances: Vec<f64>,
}

impl DecisionTree {
    /// Grow a tree on the rows of `x` listed in `indices` (duplicates allowed,
    /// which is how bootstrap resamples are expressed).
    pub(crate) fn grow(
        x: &[Vec<f64>],
        y: &[usize],
        indices: Vec<usize>,
        n_classes: usize,
        params: &ForestParams,
        rng: &mut StdRng,
    ) -> Self {
        let n_features = x.first().map_or(0, Vec::len);
        let mut grower = Grower {
            x,
            y,
            n_classes,
            params,
            max_features: params.max_features.resolve(n_features),
            nodes: Vec::new(),
            importances: vec![0.0; n_features],
        };
        grower.grow(indices, 0, rng);

        let total: f64 = grower.importances.iter().sum();
        if total > 0.0 {
            for imp in &mut grower.importances {
                *imp /= total;
            }
        }

        Self {
            nodes: grower.nodes,
            n_features,
            n_classes,
            importances: grower.importances,
        }
    }

    /// Class distribution of the leaf `features` falls into.
    pub fn predict_proba(&self, features: &[f64]) -> &[f64] {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                TreeNode::Leaf { distribution } => return distribution,
                TreeNode::Split { feature, threshold, left, right } => {
                    let value = features.get(*feature).copied().unwrap_or(0.0);
                    idx = if value <= *threshold { *left } else { *right };
                }
            }
        }
    }

    /// Most probable class index; ties resolve to the lowest index.
    pub fn predict(&self, features: &[f64]) -> usize {
        argmax(self.predict_proba(features))
    }

    /// Normalised impurity decrease per feature. All zeros when the tree
    /// never split.
    pub fn feature_importances(&self) -> &[f64] {
        &self.importances
    }

    /// Whether the tree contains at least one split.
    pub fn has_splits(&self) -> bool {
        self.nodes.len() > 1
    }

    /// Number of nodes in the tree.
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaf nodes.
    pub fn n_leaves(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Access a node by index.
    pub fn node_at(&self, index: usize) -> &TreeNode {
        &self.nodes[index]
    }

    /// Tree depth (longest root-to-leaf path).
    pub fn depth(&self) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }
        self.node_depth(0)
    }

    fn node_depth(&self, idx: usize) -> usize {
        match &self.nodes[idx] {
            TreeNode::Leaf { .. } => 0,
            TreeNode::Split { left, right, .. } => {
                1 + self.node_depth(*left).max(self.node_depth(*right))
            }
        }
    }
}

/// Index of the first maximum.
pub(crate) fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] {
            best = i;
        }
    }
    best
}

fn gini(counts: &[usize], n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;
    1.0 - counts.iter().map(|&c| (c as f64 / n).powi(2)).sum::<f64>()
}

struct BestSplit {
    feature: usize,
    threshold: f64,
    /// Weighted child impurity, `n_left * gini_left + n_right * gini_right`
    children_impurity: f64,
}

struct Grower<'a> {
    x: &'a [Vec<f64>],
    y: &'a [usize],
    n_classes: usize,
    params: &'a ForestParams,
    max_features: usize,
    nodes: Vec<TreeNode>,
    importances: Vec<f64>,
}

impl Grower<'_> {
    fn class_counts(&self, indices: &[usize]) -> Vec<usize> {
        let mut counts = vec![0; self.n_classes];
        for &i in indices {
            counts[self.y[i]] += 1;
        }
        counts
    }

    fn push_leaf(&mut self, counts: &[usize], n: usize) -> usize {
        let distribution = counts.iter().map(|&c| c as f64 / n.max(1) as f64).collect();
        self.nodes.push(TreeNode::Leaf { distribution });
        self.nodes.len() - 1
    }

    fn grow(&mut self, indices: Vec<usize>, depth: usize, rng: &mut StdRng) -> usize {
        let n = indices.len();
        let counts = self.class_counts(&indices);
        let impurity = gini(&counts, n);

        let depth_reached = self.params.max_depth.is_some_and(|d| depth >= d);
        if n < self.params.min_samples_split
            || n < 2 * self.params.min_samples_leaf
            || depth_reached
            || impurity <= 0.0
        {
            return self.push_leaf(&counts, n);
        }

        let Some(best) = self.best_split(&indices, rng) else {
            return self.push_leaf(&counts, n);
        };

        self.importances[best.feature] += n as f64 * impurity - best.children_impurity;

        let (left_idx, right_idx): (Vec<usize>, Vec<usize>) = indices
            .into_iter()
            .partition(|&i| self.x[i][best.feature] <= best.threshold);

        // Reserve the slot so the parent precedes its children.
        let node_id = self.nodes.len();
        self.nodes.push(TreeNode::Leaf { distribution: Vec::new() });

        let left = self.grow(left_idx, depth + 1, rng);
        let right = self.grow(right_idx, depth + 1, rng);
        self.nodes[node_id] = TreeNode::Split {
            feature: best.feature,
            threshold: best.threshold,
            left,
            right,
        };
        node_id
    }

    fn best_split(&self, indices: &[usize], rng: &mut StdRng) -> Option<BestSplit> {
        let n_features = self.importances.len();
        let mut features: Vec<usize> = (0..n_features).collect();
        features.shuffle(rng);

        let mut best: Option<BestSplit> = None;
        let mut visited = 0;

        for feature in features {
            if visited >= self.max_features {
                break;
            }

            let mut order: Vec<usize> = indices.to_vec();
            order.sort_by(|&a, &b| self.x[a][feature].total_cmp(&self.x[b][feature]));

            let first = self.x[order[0]][feature];
            let last = self.x[order[order.len() - 1]][feature];
            if first == last {
                // Constant features do not count towards max_features.
                continue;
            }
            visited += 1;

            if let Some(candidate) = self.best_threshold(&order, feature) {
                if best
                    .as_ref()
                    .is_none_or(|b| candidate.children_impurity < b.children_impurity)
                {
                    best = Some(candidate);
                }
            }
        }

        best
    }

    /// Sweep the sorted rows once, moving one sample at a time to the left
    /// child, and keep the cut with the lowest weighted child impurity.
    fn best_threshold(&self, order: &[usize], feature: usize) -> Option<BestSplit> {
        let n = order.len();
        let min_leaf = self.params.min_samples_leaf;
        let mut left = vec![0usize; self.n_classes];
        let mut right = self.class_counts(order);
        let mut best: Option<BestSplit> = None;

        for pos in 1..n {
            let moved = order[pos - 1];
            left[self.y[moved]] += 1;
            right[self.y[moved]] -= 1;

            let lo = self.x[moved][feature];
            let hi = self.x[order[pos]][feature];
            if lo == hi || pos < min_leaf || n - pos < min_leaf {
                continue;
            }

            let children = pos as f64 * gini(&left, pos) + (n - pos) as f64 * gini(&right, n - pos);
            if best.as_ref().is_none_or(|b| children < b.children_impurity) {
                let mut threshold = lo + (hi - lo) / 2.0;
                if threshold >= hi {
                    threshold = lo;
                }
                best = Some(BestSplit { feature, threshold, children_impurity: children });
            }
        }

        best
    }
}
