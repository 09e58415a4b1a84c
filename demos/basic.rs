use std::sync::Arc;

use storyline_recommender::{CorpusRecord, FittedModel, ModelHandle, Stopwords};

fn main() {
    // build corpus
    let records = vec![
        CorpusRecord::new("1", "Alpha", "A wizard learns magic at a school."),
        CorpusRecord::new("2", "Beta", "A detective solves a murder mystery."),
        CorpusRecord::new("3", "Gamma", "Pirates search for buried treasure."),
    ];

    // fit once, query many times
    let model: FittedModel = FittedModel::fit(records).expect("corpus is not empty");
    for rec in model.recommend("a young wizard learns magic", 5) {
        println!("{:<8} {:.4}", rec.record.name, rec.score);
    }

    // raw hits for a query vector
    let query = model.vectorize_text("murder on a pirate ship");
    println!("Search Results: \n{}", model.rank(&query, 3));

    // refresh the corpus behind a shared handle
    let handle = ModelHandle::new(model);
    let old: Arc<FittedModel> = handle.snapshot();
    handle
        .refit(
            vec![CorpusRecord::new("4", "Delta", "Astronauts grow potatoes on Mars.")],
            Stopwords::english(),
        )
        .expect("corpus is not empty");
    println!("old model: {} docs, new model: {} docs", old.doc_num(), handle.snapshot().doc_num());
}
