//! Property-based tests for search filter composition and name filtering

use proptest::prelude::*;

use cloudvault::client::endpoints::MAX_LIMIT;
use cloudvault::client::search::{filter_by_name, DateRange, SearchFilters, SizeRange, SortKey, SortOrder};
use cloudvault::shared::models::FileItem;

fn file(name: &str) -> FileItem {
    FileItem {
        id: format!("id-{}", name.len()),
        name: name.to_string(),
        size: 0,
        mime_type: "text/plain".to_string(),
        created_at: String::new(),
        updated_at: None,
        owner: None,
        checksum: None,
        download_count: None,
    }
}

fn files_strategy() -> impl Strategy<Value = Vec<FileItem>> {
    prop::collection::vec("[A-Za-z0-9 ._-]{0,16}", 0..20)
        .prop_map(|names| names.iter().map(|n| file(n)).collect())
}

fn filters_strategy() -> impl Strategy<Value = SearchFilters> {
    (
        "[a-z ]{0,8}",
        prop::collection::vec(prop::sample::select(vec!["image", "video", "pdf", "text"]), 0..3),
        prop::option::of(prop::sample::select(DateRange::ALL.to_vec())),
        prop::option::of(prop::sample::select(SizeRange::ALL.to_vec())),
        prop::option::of(prop::sample::select(SortKey::ALL.to_vec())),
        prop::option::of(prop::sample::select(SortOrder::ALL.to_vec())),
        prop::option::of((0u32..10, 0u32..500)),
    )
        .prop_map(|(query, types, date, size, sort, order, paging)| {
            let mut filters = SearchFilters::new(query);
            for t in types {
                filters = filters.with_file_type(t);
            }
            filters.date_range = date;
            filters.size_range = size;
            filters.sort_by = sort;
            filters.sort_order = order;
            if let Some((page, limit)) = paging {
                filters = filters.paged(page, limit);
            }
            filters
        })
}

proptest! {
    #[test]
    fn test_filter_by_name_is_idempotent(files in files_strategy(), query in "[A-Za-z]{0,4}") {
        let once = filter_by_name(&files, &query);
        let twice = filter_by_name(&once, &query);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_by_name_ignores_case(files in files_strategy(), query in "[A-Za-z]{1,4}") {
        let lower = filter_by_name(&files, &query.to_lowercase());
        let upper = filter_by_name(&files, &query.to_uppercase());
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn test_filter_by_name_keeps_order_and_matches(files in files_strategy(), query in "[a-z]{1,3}") {
        let kept = filter_by_name(&files, &query);
        prop_assert!(kept.len() <= files.len());
        for item in &kept {
            prop_assert!(item.name.to_lowercase().contains(&query));
        }
        let mut source = files.iter();
        for item in &kept {
            prop_assert!(source.any(|f| f == item));
        }
    }

    #[test]
    fn test_encoded_params_are_never_empty(filters in filters_strategy()) {
        let params = filters.search_params();
        for (key, value) in params.as_pairs() {
            prop_assert!(!value.is_empty(), "{} was sent empty", key);
        }
        prop_assert_eq!(params.contains("q"), !filters.query.trim().is_empty());
        prop_assert_eq!(params.contains("fileTypes"), !filters.file_types.is_empty());
        prop_assert_eq!(params.contains("dateRange"), filters.date_range.is_some());
        prop_assert_eq!(params.contains("sizeRange"), filters.size_range.is_some());
        prop_assert_eq!(params.contains("sortBy"), filters.sort_by.is_some());
        prop_assert_eq!(params.contains("sortOrder"), filters.sort_order.is_some());
    }

    #[test]
    fn test_pagination_is_clamped(filters in filters_strategy()) {
        let params = filters.list_params();
        if let Some(limit) = params.get("limit") {
            let limit: u32 = limit.parse().unwrap();
            prop_assert!((1..=MAX_LIMIT).contains(&limit));
        }
        if let Some(page) = params.get("page") {
            let page: u32 = page.parse().unwrap();
            prop_assert!(page >= 1);
        }
    }

    #[test]
    fn test_list_and_search_differ_only_in_text_key(filters in filters_strategy()) {
        let search = filters.search_params();
        let list = filters.list_params();
        prop_assert_eq!(search.len(), list.len());
        prop_assert_eq!(search.get("q"), list.get("query"));
    }
}
