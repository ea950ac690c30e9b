use record_store::{
    FieldSort, FindAllCriteria, FindCriteria, InMemoryRepository, ReadRepository, StoreError,
};
use serde_json::json;

use crate::support::{ids, people, people_repo, rec, recs};

#[test]
fn find_all_returns_insertion_order() {
    let repo = people_repo();
    let result = repo.find_all(&FindAllCriteria::default()).unwrap();
    assert_eq!(result, recs(people()));
}

#[test]
fn find_all_orders_by_field() {
    let repo = people_repo();
    let result = repo.find_all(&FindAllCriteria::order_by(["first"])).unwrap();
    assert_eq!(
        ids(&result),
        vec![
            json!(5),
            json!(2),
            json!(8),
            json!(3),
            json!(6),
            json!(1),
            json!(4),
            json!(7)
        ]
    );
}

#[test]
fn find_all_is_a_snapshot() {
    let repo = people_repo();
    let mut result = repo.find_all(&FindAllCriteria::default()).unwrap();
    result[0].insert("first".into(), json!("Changed"));
    result.clear();
    assert_eq!(repo.get_one(1).unwrap()["first"], json!("John"));
    assert_eq!(repo.count_all().unwrap(), 8);
}

#[test]
fn find_orders_two_records() {
    let repo = InMemoryRepository::with_records(recs(json!([
        { "id": 1, "first": "John" },
        { "id": 2, "first": "Abby" }
    ])))
    .unwrap();
    let result = repo.find(&FindCriteria::all().order_by(["first"])).unwrap();
    assert_eq!(
        result,
        recs(json!([{ "id": 2, "first": "Abby" }, { "id": 1, "first": "John" }]))
    );
}

#[test]
fn search_across_all_fields() {
    let repo = people_repo();
    let result = repo.find(&FindCriteria::search("jeff")).unwrap();
    assert_eq!(ids(&result), vec![json!(1), json!(3), json!(6)]);
}

#[test]
fn empty_search_matches_everything() {
    let repo = people_repo();
    let result = repo.find(&FindCriteria::search("")).unwrap();
    assert_eq!(result, recs(people()));
}

#[test]
fn search_in_one_field() {
    let repo = people_repo();
    let result = repo
        .find(&FindCriteria::search("jeff").in_field("first"))
        .unwrap();
    assert_eq!(ids(&result), vec![json!(3), json!(6)]);
}

#[test]
fn search_then_sort_by_first() {
    let repo = people_repo();
    let criteria = FindCriteria::search("jeff").order_by([FieldSort::asc("first")]);
    let result = repo.find(&criteria).unwrap();
    assert_eq!(ids(&result), vec![json!(3), json!(6), json!(1)]);
}

#[test]
fn search_then_sort_by_first_and_last() {
    let repo = people_repo();
    let criteria = FindCriteria::search("jeff").order_by(["first", "last"]);
    let result = repo.find(&criteria).unwrap();
    assert_eq!(ids(&result), vec![json!(6), json!(3), json!(1)]);
}

#[test]
fn search_then_sort_descending() {
    let repo = people_repo();
    let criteria = FindCriteria::search("jeff").order_by([FieldSort::desc("id")]);
    let result = repo.find(&criteria).unwrap();
    assert_eq!(ids(&result), vec![json!(6), json!(3), json!(1)]);
}

#[test]
fn paging_slices_after_filter_and_sort() {
    let repo = people_repo();
    let criteria = FindCriteria::all().order_by([FieldSort::desc("id")]).paged(2, 3);
    let result = repo.find(&criteria).unwrap();
    assert_eq!(ids(&result), vec![json!(5), json!(4), json!(3)]);
}

#[test]
fn paging_tail_and_out_of_range() {
    let repo = InMemoryRepository::with_records(recs(json!([
        { "id": 1 }, { "id": 2 }, { "id": 3 }, { "id": 4 }, { "id": 5 }
    ])))
    .unwrap();
    let tail = repo.find(&FindCriteria::all().paged(3, 2)).unwrap();
    assert_eq!(ids(&tail), vec![json!(5)]);
    let beyond = repo.find(&FindCriteria::all().paged(10, 2)).unwrap();
    assert!(beyond.is_empty());
}

#[test]
fn find_by_query_is_unsupported() {
    let repo = people_repo();
    let err = repo.find(&FindCriteria::query("first = 'Jeff'")).unwrap_err();
    assert_eq!(err, StoreError::UnsupportedOperation("find by query"));
    assert_eq!(err.to_string(), "find by query is not supported");
}

#[test]
fn invalid_search_pattern_is_an_error() {
    let repo = people_repo();
    let err = repo.find(&FindCriteria::search("[")).unwrap_err();
    assert!(matches!(err, StoreError::InvalidSearch { .. }));
}

#[test]
fn criteria_from_json() {
    let repo = people_repo();
    let criteria: FindCriteria = serde_json::from_value(json!({
        "search": "jeff",
        "orderBy": [{ "field": "id", "direction": "desc" }],
        "page": 1,
        "size": 2
    }))
    .unwrap();
    let result = repo.find(&criteria).unwrap();
    assert_eq!(ids(&result), vec![json!(6), json!(3)]);
}

#[test]
fn count_applies_search_only() {
    let repo = people_repo();
    assert_eq!(repo.count(&FindCriteria::search("jeff")).unwrap(), 3);
    assert_eq!(repo.count(&FindCriteria::search("")).unwrap(), 8);
    assert_eq!(
        repo.count(&FindCriteria::search("jeff").paged(2, 1)).unwrap(),
        3
    );
}

#[test]
fn count_all_ignores_criteria() {
    assert_eq!(people_repo().count_all().unwrap(), 8);
}

#[test]
fn find_one_returns_first_match() {
    let repo = people_repo();
    assert_eq!(
        repo.find_one(&FindCriteria::search("jeff")).unwrap(),
        Some(rec(json!({ "id": 1, "first": "John", "last": "Jefferson" })))
    );
    assert_eq!(
        repo.find_one(&FindCriteria::search("")).unwrap().unwrap()["id"],
        json!(1)
    );
}

#[test]
fn find_one_none_when_nothing_matches() {
    let repo = people_repo();
    assert_eq!(repo.find_one(&FindCriteria::search("x")).unwrap(), None);
}

#[test]
fn find_one_after_ordering() {
    let repo = people_repo();
    let first = |criteria: FindCriteria| {
        repo.find_one(&criteria).unwrap().unwrap()["id"].clone()
    };
    assert_eq!(first(FindCriteria::search("jeff").order_by(["first"])), json!(3));
    assert_eq!(
        first(FindCriteria::search("jeff").order_by(["first", "last"])),
        json!(6)
    );
    assert_eq!(
        first(FindCriteria::search("jeff").order_by([FieldSort::desc("id")])),
        json!(6)
    );
}

#[test]
fn get_by_keys_in_input_order() {
    let repo = people_repo();
    let result = repo.get([2, 4, 6]).unwrap();
    assert_eq!(
        result,
        recs(json!([
            { "id": 2, "first": "George", "last": "Jackson" },
            { "id": 4, "first": "Sam", "last": "Albright" },
            { "id": 6, "first": "Jeff", "last": "Black" }
        ]))
    );
}

#[test]
fn get_fails_on_first_missing_key() {
    let repo = people_repo();
    let err = repo.get([2, 99]).unwrap_err();
    assert_eq!(err.to_string(), "unable to find item by [id] matching [99]");
}

#[test]
fn get_one_found_and_missing() {
    let repo = people_repo();
    assert_eq!(
        repo.get_one(2).unwrap(),
        rec(json!({ "id": 2, "first": "George", "last": "Jackson" }))
    );
    let err = repo.get_one(99).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
    assert_eq!(err.to_string(), "unable to find item by [id] matching [99]");
}

#[test]
fn string_key_does_not_match_numeric_id() {
    let repo = people_repo();
    assert!(repo.get_one("1").is_err());
}
