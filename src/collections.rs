use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;


/// Insertion-ordered map with fast hashing
/// Iteration order follows insertion order, which keeps searches reproducible
/// regardless of how coordinates hash
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
