//! Component tracking for the spanning-forest driver.
//!
//! Maintains the partition of vertices `0..n` (arena positions in a
//! [`Graph`](crate::Graph)) into components joined by the edges chosen so
//! far. Components are disjoint and cover every element at all times.
//!
//! # Algorithm
//!
//! Disjoint-set forest with **path compression** in `find` and **union by
//! size** in `merge`, giving amortized O(α(n)) per operation, where α is the
//! inverse Ackermann function.
//!
//! # References
//!
//! - Tarjan (1975), "Efficiency of a Good but Not Linear Set Union Algorithm"
//! - Tarjan & van Leeuwen (1984), "Worst-Case Analysis of Set Union Algorithms"

use thiserror::Error;

/// Returned by [`ComponentTracker::merge`] when both elements already share
/// a component. The tracker's state is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("elements {a} and {b} are already in the same component")]
pub struct AlreadyMerged {
    pub a: usize,
    pub b: usize,
}

/// Partition of `0..n` into components.
///
/// # Examples
/// ```
/// use u_mst::ComponentTracker;
///
/// let mut components = ComponentTracker::new(4);
/// assert_eq!(components.component_count(), 4);
///
/// components.merge(0, 1).unwrap();
/// components.merge(2, 3).unwrap();
/// assert!(components.same_component(1, 0));
/// assert!(!components.same_component(0, 2));
///
/// // Merging within one component is refused, not silently repeated.
/// assert!(components.merge(1, 0).is_err());
/// assert_eq!(components.component_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ComponentTracker {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl ComponentTracker {
    /// Creates `n` singleton components `{0}, {1}, ..., {n-1}`.
    ///
    /// # Complexity
    /// O(n)
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    /// Returns the number of tracked elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of the component containing `x`.
    ///
    /// Every element on the path from `x` to the representative is
    /// re-pointed directly at it.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    ///
    /// # Panics
    /// Panics if `x >= len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Returns `true` if `a` and `b` are in the same component.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    pub fn same_component(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Joins the components of `a` and `b`; the smaller component is
    /// attached beneath the larger one's representative.
    ///
    /// Returns the representative of the merged component.
    ///
    /// # Errors
    /// [`AlreadyMerged`] if `a` and `b` already share a component. Nothing
    /// changes in that case, so callers that race on the same pair can
    /// check [`same_component`](Self::same_component) first or ignore it.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    pub fn merge(&mut self, a: usize, b: usize) -> Result<usize, AlreadyMerged> {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return Err(AlreadyMerged { a, b });
        }

        let (big, small) = if self.size[root_a] >= self.size[root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        self.components -= 1;
        Ok(big)
    }

    /// Returns the number of components.
    ///
    /// # Complexity
    /// O(1)
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the number of elements in the component containing `x`.
    pub fn component_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let t = ComponentTracker::new(5);
        assert_eq!(t.len(), 5);
        assert_eq!(t.component_count(), 5);
    }

    #[test]
    fn test_new_empty() {
        let t = ComponentTracker::new(0);
        assert!(t.is_empty());
        assert_eq!(t.component_count(), 0);
    }

    #[test]
    fn test_singletons() {
        let mut t = ComponentTracker::new(4);
        for i in 0..4 {
            assert_eq!(t.find(i), i);
            assert_eq!(t.component_size(i), 1);
        }
        assert!(!t.same_component(0, 3));
        assert!(t.same_component(2, 2));
    }

    #[test]
    fn test_merge_basic() {
        let mut t = ComponentTracker::new(5);
        let root = t.merge(0, 1).unwrap();
        assert!(root == 0 || root == 1);
        assert_eq!(t.find(0), root);
        assert_eq!(t.find(1), root);
        assert_eq!(t.component_count(), 4);
    }

    #[test]
    fn test_merge_already_merged_is_refused() {
        let mut t = ComponentTracker::new(5);
        t.merge(0, 1).unwrap();
        t.merge(1, 2).unwrap();
        let before = t.clone();

        assert_eq!(t.merge(2, 0), Err(AlreadyMerged { a: 2, b: 0 }));
        assert_eq!(t.merge(3, 3), Err(AlreadyMerged { a: 3, b: 3 }));
        assert_eq!(t.component_count(), before.component_count());
        assert_eq!(t.component_size(0), 3);
        assert!(!t.same_component(0, 3));
    }

    #[test]
    fn test_union_by_size() {
        let mut t = ComponentTracker::new(5);
        t.merge(0, 1).unwrap();
        t.merge(0, 2).unwrap();
        let big = t.find(0);

        // The singleton joins the three-element component, whatever the
        // argument order.
        assert_eq!(t.merge(3, 0).unwrap(), big);
        assert_eq!(t.component_size(3), 4);
    }

    #[test]
    fn test_transitivity() {
        let mut t = ComponentTracker::new(5);
        t.merge(0, 1).unwrap();
        t.merge(3, 4).unwrap();
        t.merge(1, 4).unwrap();
        assert!(t.same_component(0, 3));
        assert!(!t.same_component(0, 2));
        assert_eq!(t.component_count(), 2);
    }

    #[test]
    fn test_path_compression() {
        let mut t = ComponentTracker::new(4);
        // Equal sizes attach the second root under the first.
        t.merge(2, 3).unwrap();
        t.merge(0, 1).unwrap();
        t.merge(0, 2).unwrap();
        let root = t.find(3);
        assert_eq!(root, 0);
        // After find, 3 points straight at the root.
        assert_eq!(t.parent[3], root);
    }

    #[test]
    fn test_all_in_one() {
        let mut t = ComponentTracker::new(6);
        for i in 0..5 {
            t.merge(i, i + 1).unwrap();
        }
        assert_eq!(t.component_count(), 1);
        assert_eq!(t.component_size(5), 6);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn same_component_is_transitive(
            n in 2_usize..20,
            ops in proptest::collection::vec((0_usize..20, 0_usize..20), 0..50),
        ) {
            let mut t = ComponentTracker::new(n);
            for &(a, b) in &ops {
                if a < n && b < n && !t.same_component(a, b) {
                    t.merge(a, b).unwrap();
                }
            }

            for x in 0..n {
                for y in 0..n {
                    for z in 0..n {
                        if t.same_component(x, y) && t.same_component(y, z) {
                            prop_assert!(
                                t.same_component(x, z),
                                "transitivity violated: {x}~{y} and {y}~{z} but not {x}~{z}"
                            );
                        }
                    }
                }
            }
        }

        #[test]
        fn refused_merges_leave_count_unchanged(
            n in 1_usize..20,
            ops in proptest::collection::vec((0_usize..20, 0_usize..20), 0..50),
        ) {
            let mut t = ComponentTracker::new(n);
            let mut expected = n;
            for &(a, b) in &ops {
                if a < n && b < n {
                    match t.merge(a, b) {
                        Ok(_) => expected -= 1,
                        Err(AlreadyMerged { .. }) => {}
                    }
                }
            }
            prop_assert_eq!(t.component_count(), expected);
        }

        #[test]
        fn component_sizes_partition_elements(
            n in 1_usize..20,
            ops in proptest::collection::vec((0_usize..20, 0_usize..20), 0..30),
        ) {
            let mut t = ComponentTracker::new(n);
            for &(a, b) in &ops {
                if a < n && b < n {
                    let _ = t.merge(a, b);
                }
            }

            let mut total = 0;
            let mut roots = 0;
            for i in 0..n {
                if t.find(i) == i {
                    total += t.component_size(i);
                    roots += 1;
                }
            }
            prop_assert_eq!(total, n);
            prop_assert_eq!(roots, t.component_count());
        }
    }
}
