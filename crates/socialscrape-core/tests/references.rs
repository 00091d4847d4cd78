use socialscrape_core::{Comment, Error, Post, ScrapeData, User, validate_references};

fn user(id: &str) -> User {
    User {
        user_id: id.to_string(),
        username: "user_0".to_string(),
        platform: "Generic".to_string(),
        profile_details: "Bio info here".to_string(),
    }
}

fn post(id: &str, user_id: &str) -> Post {
    Post {
        post_id: id.to_string(),
        user_id: user_id.to_string(),
        platform: "Generic".to_string(),
        timestamp: "2024-01-01T00:00:00.000000".to_string(),
        content_text: "post".to_string(),
    }
}

fn comment(id: &str, post_id: &str) -> Comment {
    Comment {
        comment_id: id.to_string(),
        post_id: post_id.to_string(),
        user_id: "cu_1".to_string(),
        timestamp: "2024-01-01T00:00:00.000000".to_string(),
        content_text: "comment".to_string(),
    }
}

#[test]
fn consistent_data_passes() {
    let data = ScrapeData {
        users: vec![user("u_1")],
        posts: vec![post("p_1", "u_1"), post("p_2", "u_1")],
        comments: vec![comment("c_1", "p_1"), comment("c_2", "p_2")],
    };
    validate_references(&data).expect("references should resolve");
    assert_eq!(data.total_items(), 4);
}

#[test]
fn post_with_unknown_owner_is_rejected() {
    let data = ScrapeData {
        users: vec![user("u_1")],
        posts: vec![post("p_1", "u_missing")],
        comments: Vec::new(),
    };
    let err = validate_references(&data).expect_err("dangling owner");
    assert!(matches!(err, Error::DanglingReference { kind: "post", .. }));
    assert!(err.to_string().contains("u_missing"));
}

#[test]
fn comment_with_unknown_post_is_rejected() {
    let data = ScrapeData {
        users: vec![user("u_1")],
        posts: vec![post("p_1", "u_1")],
        comments: vec![comment("c_1", "p_other")],
    };
    let err = validate_references(&data).expect_err("dangling post");
    assert!(matches!(err, Error::DanglingReference { kind: "comment", .. }));
}

#[test]
fn duplicate_ids_are_rejected() {
    let data = ScrapeData {
        users: vec![user("u_1"), user("u_1")],
        posts: Vec::new(),
        comments: Vec::new(),
    };
    let err = validate_references(&data).expect_err("duplicate user");
    assert!(matches!(err, Error::DuplicateId { kind: "user", .. }));
}

#[test]
fn empty_data_counts_nothing() {
    let data = ScrapeData::default();
    assert!(data.is_empty());
    assert_eq!(data.total_items(), 0);
    validate_references(&data).expect("empty data is consistent");
}

#[test]
fn scrape_data_deserializes_with_missing_collections() {
    let data: ScrapeData =
        serde_json::from_str(r#"{"users": []}"#).expect("parse partial scrape data");
    assert!(data.posts.is_empty());
    assert!(data.comments.is_empty());
}
