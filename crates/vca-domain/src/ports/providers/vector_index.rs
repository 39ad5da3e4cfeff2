use crate::error::Result;
use crate::value_objects::RetrievalMatch;

/// Nearest-Neighbor Index Interface
///
/// Contract for the read side of the corpus index: built once at startup,
/// immutable afterwards, safe for unsynchronized concurrent reads. The
/// distance metric is fixed (squared Euclidean); there are no alternative
/// metrics, no deletion, and no update in scope.
///
/// # Invariants
///
/// - `search` never returns a slot id outside `[0, len())`
/// - Results are ranked ascending by distance, ties broken by lower slot id
/// - Searching an empty index yields an empty result, not an error
///
/// # Example
///
/// ```ignore
/// use vca_domain::ports::providers::VectorIndex;
///
/// let matches = index.search(&query.vector, 3)?;
/// for m in &matches {
///     assert!(m.slot < index.len());
/// }
/// ```
pub trait VectorIndex: Send + Sync {
    /// Find up to `k` nearest entries to the query vector
    ///
    /// # Arguments
    /// * `query` - Query vector; must match the index dimensionality
    /// * `k` - Maximum number of matches to return
    ///
    /// # Returns
    /// Ok(matches) ranked ascending by squared Euclidean distance, or
    /// `Error::Index` on a dimension mismatch
    fn search(&self, query: &[f32], k: usize) -> Result<Vec<RetrievalMatch>>;

    /// Number of indexed entries (`ntotal`)
    fn len(&self) -> usize;

    /// Whether the index holds no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dimensionality of the indexed vectors
    fn dimensions(&self) -> usize;

    /// Get the name/identifier of this index implementation
    fn provider_name(&self) -> &str;
}
