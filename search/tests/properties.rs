//! Property tests over search results.

use proptest::prelude::*;
use simdex_search::{Document, Error, Index};

fn title_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-dA-D ]{1,12}")
        .unwrap()
        .prop_filter("title must not be blank", |t| !t.trim().is_empty())
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-dA-D]{1,3}").unwrap()
}

fn build(titles: &[String]) -> Index<String> {
    let index = Index::new();
    for title in titles {
        index
            .add(Document::new(title.as_str(), title.clone()).unwrap())
            .unwrap();
    }
    index
}

/// Distinct stored titles containing `query`, ignoring case.
fn expected_matches(titles: &[String], query: &str) -> usize {
    let mut stored: Vec<&str> = titles.iter().map(|t| t.trim()).collect();
    stored.sort_unstable();
    stored.dedup();
    stored
        .iter()
        .filter(|t| t.to_lowercase().contains(&query.to_lowercase()))
        .count()
}

proptest! {
    #[test]
    fn prop_len_counts_distinct_titles(titles in prop::collection::vec(title_strategy(), 0..20)) {
        let index = build(&titles);

        let mut distinct: Vec<&str> = titles.iter().map(|t| t.trim()).collect();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(index.len(), distinct.len());
    }

    #[test]
    fn prop_result_size_is_min_of_limit_and_matches(
        titles in prop::collection::vec(title_strategy(), 1..20),
        query in query_strategy(),
        limit in 0usize..10,
    ) {
        let index = build(&titles);
        let matches = expected_matches(&titles, &query);

        match index.search(&query, limit) {
            Ok(results) => {
                prop_assert!(matches > 0);
                prop_assert_eq!(results.len(), limit.min(matches));
            }
            Err(Error::NotFound) => prop_assert_eq!(matches, 0),
            Err(err) => prop_assert!(false, "unexpected error: {}", err),
        }
    }

    #[test]
    fn prop_results_are_ranked_and_relevant(
        titles in prop::collection::vec(title_strategy(), 1..20),
        query in query_strategy(),
    ) {
        let index = build(&titles);

        if let Ok(hits) = index.search_hits(&query, titles.len()) {
            for pair in hits.windows(2) {
                prop_assert!(pair[0].similarity >= pair[1].similarity);
            }
            for hit in &hits {
                prop_assert!(hit.payload.to_lowercase().contains(&query.to_lowercase()));
            }
        }
    }

    #[test]
    fn prop_empty_query_always_rejected(titles in prop::collection::vec(title_strategy(), 0..5)) {
        let index = build(&titles);
        prop_assert!(matches!(index.search("", 3), Err(Error::EmptyQuery)));
    }
}
