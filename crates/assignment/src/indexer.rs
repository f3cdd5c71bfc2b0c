//! Dense id <-> index interning for one side of a bipartite graph.

use std::collections::HashMap;
use std::hash::Hash;

/// Bijection between distinct ids and `0..len()`.
///
/// Indices are handed out in order of first appearance, so the same input
/// sequence always produces the same mapping.
#[derive(Debug, Clone)]
pub struct IdIndex<T: Hash + Eq + Clone> {
    id_to_index: HashMap<T, usize>,
    index_to_id: Vec<T>,
}

impl<T: Hash + Eq + Clone> IdIndex<T> {
    /// Intern every id yielded by `ids`, skipping repeats.
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut id_to_index = HashMap::new();
        let mut index_to_id = Vec::new();
        for id in ids {
            if id_to_index.contains_key(&id) {
                continue;
            }
            id_to_index.insert(id.clone(), index_to_id.len());
            index_to_id.push(id);
        }

        Self {
            id_to_index,
            index_to_id,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.index_to_id.is_empty()
    }

    pub fn len(&self) -> usize {
        self.index_to_id.len()
    }

    pub fn index_of(&self, id: &T) -> Option<usize> {
        self.id_to_index.get(id).copied()
    }

    /// `None` for indices past the real ids, i.e. dummy rows/columns.
    pub fn id_at(&self, index: usize) -> Option<&T> {
        self.index_to_id.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_appearance_order() {
        let index = IdIndex::from_ids(["c", "a", "c", "b", "a"]);
        assert_eq!(index.len(), 3);
        assert_eq!(index.index_of(&"c"), Some(0));
        assert_eq!(index.index_of(&"a"), Some(1));
        assert_eq!(index.index_of(&"b"), Some(2));
        let order: Vec<_> = (0..index.len()).filter_map(|i| index.id_at(i)).copied().collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn forward_and_inverse_agree() {
        let ids: Vec<String> = (0..20).map(|i| format!("id-{}", i % 7)).collect();
        let index = IdIndex::from_ids(ids.iter().cloned());
        assert_eq!(index.len(), 7);
        for id in &ids {
            let i = index.index_of(id).expect("interned");
            assert_eq!(index.id_at(i), Some(id));
        }
    }

    #[test]
    fn out_of_range_and_unknown() {
        let index = IdIndex::from_ids([10u64, 20]);
        assert_eq!(index.id_at(2), None);
        assert_eq!(index.index_of(&30), None);
        assert!(!index.is_empty());

        let empty: IdIndex<u64> = IdIndex::from_ids(Vec::new());
        assert!(empty.is_empty());
    }
}
