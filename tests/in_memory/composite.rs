use record_store::{
    Identity, InMemoryRepository, PrimaryKey, ReadRepository, StoreError, WriteRepository,
};
use serde_json::json;

use crate::support::{rec, recs, teams, teams_repo};

#[test]
fn get_by_composite_keys() {
    let repo = teams_repo();
    let result = repo.get([["one", "a"], ["one", "c"], ["two", "b"]]).unwrap();
    assert_eq!(
        result,
        recs(json!([
            { "team": "one", "userId": "a", "value": 1 },
            { "team": "one", "userId": "c", "value": 3 },
            { "team": "two", "userId": "b", "value": 5 }
        ]))
    );
}

#[test]
fn get_missing_composite_key_names_fields_and_values() {
    let repo = teams_repo();
    let err = repo.get([["one", "a"], ["one", "z"]]).unwrap_err();
    assert_eq!(
        err,
        StoreError::NotFound {
            fields: vec!["team".into(), "userId".into()],
            key: PrimaryKey::from(["one", "z"]),
        }
    );
    assert_eq!(
        err.to_string(),
        "unable to find item by [team,userId] matching [one,z]"
    );
}

#[test]
fn key_order_matters() {
    let repo = teams_repo();
    assert!(repo.get_one(["a", "one"]).is_err());
    assert!(repo.get_one("one").is_err());
}

#[test]
fn put_unknown_composite_appends() {
    let mut repo = teams_repo();
    repo.put(rec(json!({ "team": "four", "userId": "a", "value": 8 })))
        .unwrap();
    let mut expected = recs(teams());
    expected.push(rec(json!({ "team": "four", "userId": "a", "value": 8 })));
    assert_eq!(repo.records(), expected.as_slice());
}

#[test]
fn put_existing_composite_replaces() {
    let mut repo = teams_repo();
    repo.put(rec(json!({ "team": "two", "userId": "a", "value": 99 })))
        .unwrap();
    assert_eq!(repo.records()[3], rec(json!({ "team": "two", "userId": "a", "value": 99 })));
    assert_eq!(repo.len(), 7);
}

#[test]
fn put_multiple_composite() {
    let mut repo = teams_repo();
    repo.put(recs(json!([
        { "team": "one", "userId": "b", "value": 97 },
        { "team": "two", "userId": "a", "value": 98 },
        { "team": "four", "userId": "z", "value": 99 }
    ])))
    .unwrap();
    assert_eq!(
        repo.records(),
        recs(json!([
            { "team": "one", "userId": "a", "value": 1 },
            { "team": "one", "userId": "b", "value": 97 },
            { "team": "one", "userId": "c", "value": 3 },
            { "team": "two", "userId": "a", "value": 98 },
            { "team": "two", "userId": "b", "value": 5 },
            { "team": "two", "userId": "c", "value": 6 },
            { "team": "three", "userId": "a", "value": 7 },
            { "team": "four", "userId": "z", "value": 99 }
        ]))
        .as_slice()
    );
}

#[test]
fn patch_missing_composite_fails() {
    let mut repo = teams_repo();
    let err = repo
        .patch(rec(json!({ "team": "nine", "userId": "a", "value": 4 })))
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
}

#[test]
fn patch_existing_composite() {
    let mut repo = teams_repo();
    repo.patch(rec(json!({ "team": "two", "userId": "a", "value2": 99 })))
        .unwrap();
    assert_eq!(
        repo.records()[3],
        rec(json!({ "team": "two", "userId": "a", "value": 4, "value2": 99 }))
    );
}

#[test]
fn patch_multiple_composite() {
    let mut repo = teams_repo();
    repo.patch(recs(json!([
        { "team": "one", "userId": "b", "value": 9 },
        { "team": "two", "userId": "b", "value2": 99 }
    ])))
    .unwrap();
    assert_eq!(repo.records()[1], rec(json!({ "team": "one", "userId": "b", "value": 9 })));
    assert_eq!(
        repo.records()[4],
        rec(json!({ "team": "two", "userId": "b", "value": 5, "value2": 99 }))
    );
}

#[test]
fn missing_composite_field_is_rejected() {
    let mut repo = teams_repo();
    let err = repo
        .insert(rec(json!({ "team": "one", "value": 1 })))
        .unwrap_err();
    assert!(matches!(err, StoreError::MissingIdentity { .. }));
    assert_eq!(repo.len(), 7);
}

#[test]
fn insert_batch_stops_at_missing_composite_field() {
    let mut repo = teams_repo();
    let err = repo
        .insert(recs(json!([
            { "team": "five", "userId": "a" },
            { "team": "five", "userId": "" },
            { "team": "five", "userId": "c" }
        ])))
        .unwrap_err();
    assert!(matches!(err, StoreError::MissingIdentity { .. }));
    assert_eq!(repo.len(), 8);
    assert!(repo.get_one(["five", "a"]).is_ok());
    assert!(repo.get_one(["five", "c"]).is_err());
}

#[test]
fn put_batch_stops_at_missing_composite_field() {
    let mut repo = teams_repo();
    let err = repo
        .put(recs(json!([
            { "team": "one", "userId": "a", "value": 100 },
            { "team": "four", "userId": "z", "value": 8 },
            { "team": "x", "value": 9 },
            { "team": "five", "userId": "q", "value": 10 }
        ])))
        .unwrap_err();
    assert!(matches!(err, StoreError::MissingIdentity { .. }));
    assert_eq!(repo.records()[0]["value"], json!(100));
    assert_eq!(repo.get_one(["four", "z"]).unwrap()["value"], json!(8));
    assert!(repo.get_one(["five", "q"]).is_err());
    assert_eq!(repo.len(), 8);
}

#[test]
fn construction_rejects_incomplete_composite_records() {
    let err = InMemoryRepository::with_identity(
        recs(json!([{ "team": "one", "userId": null }])),
        Identity::composite(["team", "userId"]),
    )
    .unwrap_err();
    assert!(matches!(err, StoreError::MissingIdentity { .. }));
}

#[test]
fn remove_by_composite_key_and_record() {
    let mut repo = teams_repo();
    repo.remove(PrimaryKey::from(["one", "a"])).unwrap();
    repo.remove(rec(json!({ "team": "two", "userId": "c" }))).unwrap();
    assert_eq!(repo.len(), 5);
    assert!(repo.get_one(["one", "a"]).is_err());
    assert!(repo.get_one(["two", "c"]).is_err());
    assert_eq!(repo.get_one(["three", "a"]).unwrap()["value"], json!(7));
}
