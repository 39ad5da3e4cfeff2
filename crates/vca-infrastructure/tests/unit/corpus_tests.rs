//! Tests for corpus loading and index snapshots

use std::fs;

use vca_domain::ports::providers::{EmbeddingProvider, VectorIndex};
use vca_infrastructure::config::RetrievalConfig;
use vca_infrastructure::corpus::{build_index, embed_corpus, load_corpus_dir, IndexSnapshot};
use vca_providers::embedding::NullEmbeddingProvider;

/// Lay out a corpus directory: one subdirectory per species
fn sample_corpus() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (species, files) in [
        ("cat", vec![("care.txt", "Cat care guide"), ("health.txt", "Cat health tips")]),
        ("dog", vec![("care.txt", "Dog care guide"), ("health.txt", "Dog health tips")]),
    ] {
        let species_dir = dir.path().join(species);
        fs::create_dir(&species_dir).unwrap();
        for (name, text) in files {
            fs::write(species_dir.join(name), text).unwrap();
        }
    }
    dir
}

#[test]
fn corpus_loads_every_document_in_sorted_order() {
    let dir = sample_corpus();
    let documents = load_corpus_dir(dir.path()).unwrap();

    assert_eq!(documents.len(), 4);
    // Sorted by species then file name, so slot assignment is stable.
    assert_eq!(documents[0].species, "cat");
    assert_eq!(documents[0].text, "Cat care guide");
    assert_eq!(documents[2].species, "dog");
}

#[test]
fn missing_corpus_dir_is_a_configuration_error() {
    assert!(load_corpus_dir("/nonexistent/corpus").is_err());
}

#[tokio::test]
async fn embedding_a_corpus_of_n_documents_yields_n_slots() {
    let dir = sample_corpus();
    let documents = load_corpus_dir(dir.path()).unwrap();
    let embedder = NullEmbeddingProvider::new();

    let snapshot = embed_corpus(&embedder, &documents).await.unwrap();
    assert_eq!(snapshot.entries.len(), 4);
    assert_eq!(snapshot.dimensions, embedder.dimensions());

    let (index, docs) = snapshot.into_index().unwrap();
    assert_eq!(index.len(), 4);
    assert_eq!(docs.len(), 4);
}

#[tokio::test]
async fn snapshot_round_trips_through_disk() {
    let dir = sample_corpus();
    let documents = load_corpus_dir(dir.path()).unwrap();
    let embedder = NullEmbeddingProvider::new();
    let snapshot = embed_corpus(&embedder, &documents).await.unwrap();

    let out = tempfile::tempdir().unwrap();
    let path = out.path().join("index.json");
    snapshot.save(&path).unwrap();

    let reloaded = IndexSnapshot::load(&path).unwrap();
    assert_eq!(reloaded.entries.len(), 4);

    let (index, docs) = reloaded.into_index().unwrap();
    assert_eq!(index.len(), 4);

    // Retrieval over the reloaded index finds the matching species.
    let query = embedder.embed("Dog health tips").await.unwrap();
    let matches = index.search(&query.vector, 1).unwrap();
    assert!(matches[0].slot < index.len());
    assert_eq!(docs[matches[0].slot].text, "Dog health tips");
}

#[tokio::test]
async fn build_index_prefers_snapshot_over_corpus_dir() {
    let dir = sample_corpus();
    let documents = load_corpus_dir(dir.path()).unwrap();
    let embedder = NullEmbeddingProvider::new();
    let snapshot = embed_corpus(&embedder, &documents[..2].to_vec()).await.unwrap();

    let out = tempfile::tempdir().unwrap();
    let snapshot_path = out.path().join("index.json");
    snapshot.save(&snapshot_path).unwrap();

    let config = RetrievalConfig {
        snapshot_path: Some(snapshot_path),
        corpus_dir: Some(dir.path().to_path_buf()),
        top_k: 3,
    };
    let (index, _docs) = build_index(&config, &embedder).await.unwrap();
    assert_eq!(index.len(), 2, "snapshot (2 entries) wins over corpus (4)");
}

#[tokio::test]
async fn no_retrieval_sources_yields_an_empty_index() {
    let embedder = NullEmbeddingProvider::new();
    let config = RetrievalConfig::default();
    let (index, docs) = build_index(&config, &embedder).await.unwrap();
    assert!(index.is_empty());
    assert!(docs.is_empty());
}
