use lectern::dedup::remove_duplicates;
use lectern::prelude::*;

const EPSILON: f64 = 1e-6;

fn pet_engine() -> SearchEngine {
    let mut engine = SearchEngine::new("and with").unwrap();
    engine
        .add_document(1, "funny pet and nasty rat", DocumentStatus::Active, &[1, 2])
        .unwrap();
    engine
        .add_document(2, "funny pet with curly hair", DocumentStatus::Active, &[1, 2])
        .unwrap();
    engine
}

fn animal_engine() -> SearchEngine {
    let mut engine = SearchEngine::with_stop_words(["in", "the", "and"]).unwrap();
    let documents = [
        (0, "white cat and fashionable collar", DocumentStatus::Active, vec![8, -3]),
        (1, "fluffy cat fluffy tail", DocumentStatus::Active, vec![7, 2, 7]),
        (2, "groomed dog expressive eyes", DocumentStatus::Active, vec![5, -12, 2, 1]),
        (3, "groomed starling eugene", DocumentStatus::Banned, vec![9]),
        (4, "curly dog in the park", DocumentStatus::Irrelevant, vec![3]),
        (5, "cat and dog in the city", DocumentStatus::Active, vec![4, 4]),
        (6, "big dog tail", DocumentStatus::Active, vec![]),
        (7, "small cat collar", DocumentStatus::Active, vec![1]),
    ];
    for (id, text, status, ratings) in documents {
        engine.add_document(id, text, status, &ratings).unwrap();
    }
    engine
}

#[test]
fn test_terms_in_every_document_have_zero_relevance() {
    let engine = pet_engine();
    let hits = engine.find_top_documents("funny pet").unwrap();
    assert_eq!(hits.len(), 2);
    let mut ids: Vec<_> = hits.iter().map(|d| d.id).collect();
    ids.sort();
    assert_eq!(ids, vec![1, 2]);
    for hit in &hits {
        assert!(hit.relevance.abs() < EPSILON);
        assert_eq!(hit.rating, 1);
    }
}

#[test]
fn test_malformed_queries_fail() {
    let engine = pet_engine();
    for query in ["fluffy -", "funny --pet", "fun\u{3}ny"] {
        let err = engine.find_top_documents(query).unwrap_err();
        assert!(err.is_invalid_argument(), "{query:?} should be rejected");
        let err = engine
            .find_top_documents_in(ExecutionMode::Parallel, query, DocumentStatus::Active)
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }
}

#[test]
fn test_word_frequencies_sum_to_one() {
    let engine = animal_engine();
    for id in &engine {
        let sum: f64 = engine.word_frequencies(id).values().sum();
        assert!((sum - 1.0).abs() < 1e-9, "document {id} sums to {sum}");
    }
}

#[test]
fn test_failed_add_leaves_index_unchanged() {
    let mut engine = animal_engine();
    let count = engine.document_count();
    let words = engine.word_count();
    let ids: Vec<_> = engine.document_ids().collect();

    assert!(engine.add_document(-5, "new words", DocumentStatus::Active, &[1]).is_err());
    assert!(engine.add_document(3, "new words", DocumentStatus::Active, &[1]).is_err());
    assert!(engine.add_document(100, "new w\u{10}ords", DocumentStatus::Active, &[1]).is_err());

    assert_eq!(engine.document_count(), count);
    assert_eq!(engine.word_count(), words);
    assert_eq!(engine.document_ids().collect::<Vec<_>>(), ids);
    assert!(engine.word_frequencies(100).is_empty());
    assert!(engine.find_top_documents("new").unwrap().is_empty());
}

#[test]
fn test_results_are_capped_and_sorted() {
    let engine = animal_engine();
    for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
        let hits = engine
            .find_top_documents_in(
                mode,
                "cat dog tail collar fluffy",
                |_: DocumentId, _: DocumentStatus, _: i32| true,
            )
            .unwrap();
        assert_eq!(hits.len(), 5);
        for pair in hits.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if (a.relevance - b.relevance).abs() < EPSILON {
                assert!(a.rating >= b.rating);
            } else {
                assert!(a.relevance > b.relevance);
            }
        }
    }
}

#[test]
fn test_parallel_and_sequential_agree() {
    let engine = animal_engine();
    let queries = [
        "cat dog",
        "groomed -starling",
        "fluffy cat -collar",
        "curly park city",
        "tail -fluffy -big",
        "eugene",
    ];
    for query in queries {
        for status in [DocumentStatus::Active, DocumentStatus::Banned, DocumentStatus::Irrelevant] {
            let sequential = engine.find_top_documents_with(query, status).unwrap();
            let parallel = engine
                .find_top_documents_in(ExecutionMode::Parallel, query, status)
                .unwrap();
            assert_eq!(sequential.len(), parallel.len(), "query {query:?}");
            for (s, p) in sequential.iter().zip(&parallel) {
                assert!((s.relevance - p.relevance).abs() < EPSILON);
                assert_eq!(s.rating, p.rating);
            }
        }
    }
}

#[test]
fn test_minus_word_empties_match() {
    let engine = animal_engine();
    for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
        let (words, status) = engine
            .match_document_in(mode, "fluffy cat tail -fluffy", 1)
            .unwrap();
        assert!(words.is_empty());
        assert_eq!(status, DocumentStatus::Active);

        let (words, status) = engine
            .match_document_in(mode, "dog curly park sky -cat", 4)
            .unwrap();
        let words: Vec<&str> = words.iter().map(|w| &**w).collect();
        assert_eq!(words, vec!["curly", "dog", "park"]);
        assert_eq!(status, DocumentStatus::Irrelevant);
    }
}

#[test]
fn test_stop_words_in_query_are_ignored() {
    let engine = animal_engine();
    let (words, _) = engine.match_document("the city -in", 5).unwrap();
    let words: Vec<&str> = words.iter().map(|w| &**w).collect();
    assert_eq!(words, vec!["city"]);
}

#[test]
fn test_remove_then_lookup() {
    for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
        let mut engine = animal_engine();
        assert!(engine.remove_document_in(mode, 5));
        assert!(engine.word_frequencies(5).is_empty());
        assert!(!engine.document_ids().any(|id| id == 5));
        assert_eq!(engine.document_count(), 7);
        assert!(engine.match_document("city", 5).unwrap_err().is_not_found());
        assert!(engine.find_top_documents("city").unwrap().is_empty());

        // Unknown ids are a no-op.
        assert!(!engine.remove_document_in(mode, 5));
        assert!(!engine.remove_document_in(mode, 999));
        assert_eq!(engine.document_count(), 7);
    }
}

#[test]
fn test_removal_changes_idf() {
    let mut engine = pet_engine();
    engine
        .add_document(3, "lonely hamster", DocumentStatus::Active, &[5])
        .unwrap();
    let before = engine.find_top_documents("curly").unwrap();
    assert!((before[0].relevance - 0.25 * 3f64.ln()).abs() < EPSILON);

    engine.remove_document(1);
    let after = engine.find_top_documents("curly").unwrap();
    assert!((after[0].relevance - 0.25 * 2f64.ln()).abs() < EPSILON);
}

#[test]
fn test_readding_removed_id() {
    let mut engine = pet_engine();
    engine.remove_document(1);
    engine
        .add_document(1, "brand new text", DocumentStatus::Banned, &[3])
        .unwrap();
    assert_eq!(engine.document_ids().collect::<Vec<_>>(), vec![2, 1]);
    let (words, status) = engine.match_document("new rat", 1).unwrap();
    assert_eq!(words.len(), 1);
    assert_eq!(status, DocumentStatus::Banned);
}

#[test]
fn test_deduplication() {
    let mut engine = SearchEngine::new("and with").unwrap();
    let texts = [
        "funny pet and nasty rat",
        "funny pet with curly hair",
        "funny pet with curly hair",
        "funny pet and curly hair",
        "funny funny pet and nasty nasty rat",
        "funny pet and not very nasty rat",
        "very nasty rat and not very funny pet",
        "pet with rat and rat and rat",
        "nasty rat with curly hair",
    ];
    for (index, text) in texts.iter().enumerate() {
        engine
            .add_document(index as i32 + 1, text, DocumentStatus::Active, &[1, 2])
            .unwrap();
    }

    let removed = remove_duplicates(&mut engine);
    assert_eq!(removed, vec![3, 4, 5, 7]);
    assert_eq!(engine.document_count(), 5);
    assert_eq!(engine.document_ids().collect::<Vec<_>>(), vec![1, 2, 6, 8, 9]);
}

#[test]
fn test_custom_result_count() {
    let config = EngineConfig::default()
        .with_max_result_document_count(8)
        .with_shard_count(3)
        .with_thread_pool_size(2);
    let mut engine = SearchEngine::with_config(config, Default::default()).unwrap();
    for id in 0..20 {
        engine
            .add_document(id, &format!("shared unique{id}"), DocumentStatus::Active, &[id])
            .unwrap();
    }
    let hits = engine
        .find_top_documents_in(ExecutionMode::Parallel, "shared", DocumentStatus::Active)
        .unwrap();
    assert_eq!(hits.len(), 8);
    // All relevances are zero, so rating decides.
    assert_eq!(hits.iter().map(|d| d.id).collect::<Vec<_>>(), (12..20).rev().collect::<Vec<_>>());
}
