//! Corpus loading and index snapshots
//!
//! The guidance corpus is a directory of per-species subdirectories of text
//! files. At startup the vector index comes from one of two sources, tried
//! in order: a serialized snapshot file (embeddings already computed), or
//! the corpus directory embedded on the fly. With neither configured the
//! index is empty and the pipeline skips retrieval.
//!
//! Snapshots are written offline by the `index` CLI subcommand so the
//! service never recomputes corpus embeddings on a restart.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use vca_domain::error::{Error, Result};
use vca_domain::ports::providers::EmbeddingProvider;
use vca_domain::value_objects::{CorpusDocument, Embedding};
use vca_providers::index::FlatVectorIndex;

use crate::config::RetrievalConfig;

/// Serialized form of the corpus index
///
/// Entry order is slot order; loading reproduces the exact index that was
/// written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexSnapshot {
    /// Dimensionality of every vector in `entries`
    pub dimensions: usize,
    /// Model that produced the vectors
    pub model: String,
    /// Labeled vectors with their source text, in slot order
    pub entries: Vec<SnapshotEntry>,
}

/// One snapshot entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotEntry {
    /// Species/category label
    pub species: String,
    /// Source text that was embedded
    pub text: String,
    /// Embedding vector
    pub vector: Vec<f32>,
}

impl IndexSnapshot {
    /// Load a snapshot from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Write the snapshot to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = serde_json::to_string(self)?;
        fs::write(path.as_ref(), contents)?;
        Ok(())
    }

    /// Materialize the index and its slot-aligned documents
    pub fn into_index(self) -> Result<(FlatVectorIndex, Vec<CorpusDocument>)> {
        let model = self.model;
        let mut documents = Vec::with_capacity(self.entries.len());
        let mut labeled = Vec::with_capacity(self.entries.len());

        for entry in self.entries {
            documents.push(CorpusDocument::new(entry.species.clone(), entry.text));
            let dimensions = entry.vector.len();
            labeled.push((
                entry.species,
                Embedding {
                    vector: entry.vector,
                    model: model.clone(),
                    dimensions,
                },
            ));
        }

        let index = FlatVectorIndex::build(self.dimensions, labeled)?;
        Ok((index, documents))
    }
}

/// Load corpus documents from a directory
///
/// Layout: one subdirectory per species, each holding plain-text files.
/// Entries are sorted by species then file name so slot assignment is
/// deterministic across runs.
pub fn load_corpus_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<CorpusDocument>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::configuration(format!(
            "corpus directory {} does not exist",
            dir.display()
        )));
    }

    let mut species_dirs: Vec<_> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .collect();
    species_dirs.sort_by_key(|entry| entry.file_name());

    let mut documents = Vec::new();
    for species_dir in species_dirs {
        let species = species_dir.file_name().to_string_lossy().to_string();

        let mut files: Vec<_> = fs::read_dir(species_dir.path())?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .collect();
        files.sort_by_key(|entry| entry.file_name());

        for file in files {
            let text = fs::read_to_string(file.path())?;
            if !text.trim().is_empty() {
                documents.push(CorpusDocument::new(species.clone(), text.trim().to_string()));
            }
        }
    }

    Ok(documents)
}

/// Embed corpus documents into a snapshot
pub async fn embed_corpus(
    embedder: &dyn EmbeddingProvider,
    documents: &[CorpusDocument],
) -> Result<IndexSnapshot> {
    let texts: Vec<String> = documents.iter().map(|d| d.text.clone()).collect();
    let embeddings = embedder.embed_batch(&texts).await?;

    let entries = documents
        .iter()
        .zip(embeddings)
        .map(|(doc, embedding)| SnapshotEntry {
            species: doc.species.clone(),
            text: doc.text.clone(),
            vector: embedding.vector,
        })
        .collect();

    Ok(IndexSnapshot {
        dimensions: embedder.dimensions(),
        model: embedder.provider_name().to_string(),
        entries,
    })
}

/// Build the startup index per the retrieval configuration
pub async fn build_index(
    config: &RetrievalConfig,
    embedder: &dyn EmbeddingProvider,
) -> Result<(FlatVectorIndex, Vec<CorpusDocument>)> {
    if let Some(snapshot_path) = &config.snapshot_path {
        if snapshot_path.exists() {
            let snapshot = IndexSnapshot::load(snapshot_path)?;
            info!(
                path = %snapshot_path.display(),
                entries = snapshot.entries.len(),
                "loaded index snapshot"
            );
            return snapshot.into_index();
        }
    }

    if let Some(corpus_dir) = &config.corpus_dir {
        let documents = load_corpus_dir(corpus_dir)?;
        info!(
            dir = %corpus_dir.display(),
            documents = documents.len(),
            "embedding corpus at startup"
        );
        let snapshot = embed_corpus(embedder, &documents).await?;
        return snapshot.into_index();
    }

    // No corpus configured: retrieval is simply skipped by the pipeline.
    Ok((FlatVectorIndex::empty(embedder.dimensions()), Vec::new()))
}
