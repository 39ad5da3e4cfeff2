//! Flat squared-L2 vector index
//!
//! Exact nearest-neighbor search over a contiguous vector buffer. Slot ids
//! are assigned in insertion order at build time; after build the index is
//! immutable and safe for unsynchronized concurrent reads. Top-k selection
//! uses a bounded max-heap, O(n log k) per query.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use vca_domain::error::{Error, Result};
use vca_domain::ports::providers::VectorIndex;
use vca_domain::value_objects::{Embedding, RetrievalMatch};

/// Flat squared-L2 index
///
/// Vectors live in one contiguous buffer with stride `dimensions`; slot `i`
/// occupies `[i * dimensions, (i + 1) * dimensions)` and carries `labels[i]`.
///
/// # Example
///
/// ```rust
/// use vca_providers::index::FlatVectorIndex;
/// use vca_domain::ports::providers::VectorIndex;
/// use vca_domain::value_objects::Embedding;
///
/// let entry = |label: &str, v: Vec<f32>| {
///     let dimensions = v.len();
///     (label.to_string(), Embedding { vector: v, model: "test".into(), dimensions })
/// };
/// let index = FlatVectorIndex::build(
///     2,
///     vec![entry("dog", vec![0.0, 0.0]), entry("cat", vec![1.0, 0.0])],
/// ).unwrap();
///
/// let matches = index.search(&[0.1, 0.0], 1).unwrap();
/// assert_eq!(matches[0].label, "dog");
/// ```
pub struct FlatVectorIndex {
    dimensions: usize,
    labels: Vec<String>,
    /// Contiguous vector data, `labels.len() * dimensions` floats
    data: Vec<f32>,
}

impl FlatVectorIndex {
    /// Create an empty index for the given dimensionality
    pub fn empty(dimensions: usize) -> Self {
        Self {
            dimensions,
            labels: Vec::new(),
            data: Vec::new(),
        }
    }

    /// Build an index from labeled embeddings
    ///
    /// Deterministic: slot ids follow input order. Every embedding must
    /// match `dimensions`; a mismatch fails the build rather than poisoning
    /// later searches.
    pub fn build<I>(dimensions: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Embedding)>,
    {
        if dimensions == 0 {
            return Err(Error::index("index dimensionality cannot be 0"));
        }

        let mut index = Self::empty(dimensions);
        for (label, embedding) in entries {
            if embedding.vector.len() != dimensions {
                return Err(Error::index(format!(
                    "entry '{}' has dimension {} but the index expects {}",
                    label,
                    embedding.vector.len(),
                    dimensions
                )));
            }
            index.labels.push(label);
            index.data.extend_from_slice(&embedding.vector);
        }

        Ok(index)
    }

    /// Vector data for a slot
    fn vector(&self, slot: usize) -> &[f32] {
        let start = slot * self.dimensions;
        &self.data[start..start + self.dimensions]
    }
}

impl VectorIndex for FlatVectorIndex {
    fn search(&self, query: &[f32], k: usize) -> Result<Vec<RetrievalMatch>> {
        if self.labels.is_empty() || k == 0 {
            return Ok(Vec::new());
        }
        if query.len() != self.dimensions {
            return Err(Error::index(format!(
                "query has dimension {} but the index expects {}",
                query.len(),
                self.dimensions
            )));
        }

        // Bounded max-heap: the worst candidate sits on top and is evicted
        // as closer ones arrive.
        let mut heap: BinaryHeap<ScoredSlot> = BinaryHeap::with_capacity(k + 1);
        for slot in 0..self.labels.len() {
            let distance = squared_l2(query, self.vector(slot));
            heap.push(ScoredSlot { distance, slot });
            if heap.len() > k {
                heap.pop();
            }
        }

        // Ascending by distance, ties broken by lower slot id.
        let mut items = heap.into_vec();
        items.sort_unstable_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
                .then(a.slot.cmp(&b.slot))
        });

        Ok(items
            .into_iter()
            .map(|item| RetrievalMatch {
                slot: item.slot,
                label: self.labels[item.slot].clone(),
                distance: item.distance,
            })
            .collect())
    }

    fn len(&self) -> usize {
        self.labels.len()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "flat"
    }
}

/// Candidate ordered so the WORST match (largest distance, then largest
/// slot) surfaces at the heap top for eviction. The slot tie-break makes
/// equal-distance results deterministic: the lower slot survives.
#[derive(PartialEq)]
struct ScoredSlot {
    distance: f32,
    slot: usize,
}

impl Eq for ScoredSlot {}

impl Ord for ScoredSlot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .partial_cmp(&other.distance)
            .unwrap_or(Ordering::Equal)
            .then(self.slot.cmp(&other.slot))
    }
}

impl PartialOrd for ScoredSlot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Squared Euclidean distance between two equal-length vectors
fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
