//! serde support.
//!
//! A heap serializes as the bare sequence of its storage. Deserializing
//! heapifies whatever sequence it reads, so input that was hand-edited or
//! written by another tool still produces a valid heap.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use super::{Heap, Less};

impl<T: Serialize, C> Serialize for Heap<T, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

impl<'de, T, C> Deserialize<'de> for Heap<T, C>
where
    T: Deserialize<'de>,
    C: Less<T> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = Vec::<T>::deserialize(deserializer)?;
        Ok(Self::from_vec_with_comparator(data, C::default()))
    }
}
