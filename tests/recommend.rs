use std::sync::Arc;

use storyline_recommender::{
    loader, CorpusConfig, CorpusRecord, FittedModel, ModelHandle, RecommendError, SparseVec,
    Stopwords, DEFAULT_TOP_K,
};

const MOVIES_CSV: &str = "\
Movie Name,Storyline
Alpha,A wizard learns magic at a school.
Beta,A detective solves a murder mystery.
Gamma,Pirates search for buried treasure on a cursed island.
Delta,A young witch opens a school of magic for orphans.
Epsilon,
Zeta,Astronauts stranded on Mars grow potatoes to survive.
";

fn fitted() -> FittedModel {
    let records = loader::read_records(MOVIES_CSV.as_bytes(), &CorpusConfig::default()).unwrap();
    FittedModel::fit(records).unwrap()
}

#[test]
fn csv_to_recommendations() {
    let model = fitted();
    // Epsilon has no storyline and never reaches the model
    assert_eq!(model.doc_num(), 5);
    assert!(model.records().iter().all(|r| r.name != "Epsilon"));

    let recs = model.recommend("a young wizard learns magic", DEFAULT_TOP_K);
    assert_eq!(recs.len(), 5);
    assert_eq!(recs[0].record.name, "Alpha");
    assert_eq!(recs[1].record.name, "Delta");
    assert!(recs.windows(2).all(|w| w[0].score >= w[1].score));
    assert!(recs.iter().all(|r| (0.0..=1.0).contains(&r.score)));
}

#[test]
fn degenerate_queries_are_empty_not_errors() {
    let model = fitted();
    assert!(model.recommend("", 5).is_empty());
    assert!(model.recommend("the and of a", 5).is_empty());
    assert!(model.recommend("!!! 1234 ???", 5).is_empty());
}

#[test]
fn scenario_two_documents() {
    let model: FittedModel = FittedModel::fit(vec![
        CorpusRecord::new("a", "Alpha", "a wizard learns magic at a school"),
        CorpusRecord::new("b", "Beta", "a detective solves a murder mystery"),
    ])
    .unwrap();
    let recs = model.recommend("a young wizard learns magic", 5);
    assert_eq!(recs[0].record.name, "Alpha");
    assert_eq!(recs[1].record.name, "Beta");
    assert!(recs[0].score > recs[1].score);
}

#[test]
fn k_is_capped_by_corpus_size() {
    let model: FittedModel = FittedModel::fit(vec![
        CorpusRecord::new("1", "One", "ghosts haunt a lighthouse"),
        CorpusRecord::new("2", "Two", "ghosts haunt a manor"),
        CorpusRecord::new("3", "Three", "a chef opens a restaurant"),
    ])
    .unwrap();
    assert_eq!(model.recommend("ghosts", 10).len(), 3);
}

#[test]
fn corpus_vectors_are_self_similar() {
    let model = fitted();
    for (row, _) in model.matrix().iter() {
        if row.is_zero() {
            continue;
        }
        assert!((row.cosine_similarity(row) - 1.0).abs() < 1e-12);
    }
    let zero = SparseVec::new();
    let (first, _) = model.matrix().iter().next().unwrap();
    assert_eq!(first.cosine_similarity(&zero), 0.0);
}

#[test]
fn independent_models_coexist() {
    let movies = fitted();
    let other: FittedModel = FittedModel::fit_with_stopwords(
        vec![CorpusRecord::new("x", "Solo", "magic")],
        Stopwords::empty(),
    )
    .unwrap();
    assert_eq!(other.recommend("magic", 5).len(), 1);
    assert_eq!(movies.recommend("magic", 5)[0].record.name, "Alpha");
}

#[test]
fn handle_swaps_snapshots() {
    let handle = ModelHandle::new(fitted());
    let before: Arc<FittedModel> = handle.snapshot();
    handle
        .refit(vec![CorpusRecord::new("n", "New", "submarine crew")], Stopwords::english())
        .unwrap();
    assert_eq!(before.doc_num(), 5);
    assert_eq!(handle.snapshot().recommend("submarine", 5)[0].record.name, "New");

    let err = handle.refit(Vec::new(), Stopwords::english()).unwrap_err();
    assert!(matches!(err, RecommendError::EmptyCorpus));
    assert_eq!(handle.snapshot().doc_num(), 1);
}
