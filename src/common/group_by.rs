//! Stable partitioning of a sequence by a derived key.
use std::hash::Hash;
use std::collections::HashMap;


/// Ordered mapping produced by [`group_by`].
/// Each entry is a key and the elements that were mapped to it.
pub type Groups<K, T> = Vec<(K, Vec<T>)>;


/// Partition `items` by `key`.
///
/// Groups appear in the order their key was first seen,
/// and elements keep their relative order inside a group.
/// Every element ends up in exactly one group.
///
/// ```
/// use minitrees::common::group_by;
/// let groups = group_by(["b", "a", "b", "c"], |x| *x);
/// assert_eq!(groups, vec![
///     ("b", vec!["b", "b"]),
///     ("a", vec!["a"]),
///     ("c", vec!["c"]),
/// ]);
/// ```
pub fn group_by<I, K, F>(items: I, mut key: F) -> Groups<K, I::Item>
    where I: IntoIterator,
          K: Hash + Eq + Clone,
          F: FnMut(&I::Item) -> K,
{
    let mut position: HashMap<K, usize> = HashMap::new();
    let mut groups: Groups<K, I::Item> = Vec::new();

    for item in items {
        let k = key(&item);
        match position.get(&k) {
            Some(&ix) => { groups[ix].1.push(item); },
            None => {
                position.insert(k.clone(), groups.len());
                groups.push((k, vec![item]));
            },
        }
    }

    groups
}
