use socialscrape_core::{COMMENT_COLUMNS, Comment, POST_COLUMNS, Post, USER_COLUMNS, User};
use socialscrape_generate::{GeneratorOptions, RecordGenerator, serialize, serialize_records};

fn user(id: &str, details: &str) -> User {
    User {
        user_id: id.to_string(),
        username: "user_0".to_string(),
        platform: "Generic".to_string(),
        profile_details: details.to_string(),
    }
}

#[test]
fn empty_collection_serializes_to_empty_string() {
    let users: Vec<User> = Vec::new();
    assert_eq!(serialize_records(&users).expect("serialize users"), "");
    let comments: Vec<Comment> = Vec::new();
    assert_eq!(
        serialize(&comments, COMMENT_COLUMNS).expect("serialize comments"),
        ""
    );
}

#[test]
fn header_then_rows_in_column_order() {
    let users = vec![user("u_1", "Bio info here"), user("u_2", "Bio info here")];
    let csv = serialize(&users, USER_COLUMNS).expect("serialize users");
    assert_eq!(
        csv,
        "user_id,username,platform,profile_details\r\n\
         u_1,user_0,Generic,Bio info here\r\n\
         u_2,user_0,Generic,Bio info here\r\n"
    );
}

#[test]
fn missing_fields_are_written_empty() {
    let users = vec![user("u_1", "Bio")];
    let csv = serialize(&users, &["user_id", "follower_count", "username"]).expect("serialize");
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("user_id,follower_count,username"));
    assert_eq!(lines.next(), Some("u_1,,user_0"));
}

#[test]
fn embedded_delimiters_are_quoted() {
    let users = vec![user("u_1", "likes \"rust\", tea\nand cats")];
    let csv = serialize_records(&users).expect("serialize users");
    assert!(csv.contains("\"likes \"\"rust\"\", tea\nand cats\""));

    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("read back csv");
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][3], "likes \"rust\", tea\nand cats");
}

#[test]
fn generated_posts_serialize_one_row_each() {
    let generator = RecordGenerator::new(GeneratorOptions {
        seed: Some(9),
        ..GeneratorOptions::default()
    });
    let data = generator.generate(&["https://x.com/example".to_string()], 3, false);
    let csv = serialize(&data.posts, POST_COLUMNS).expect("serialize posts");

    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), POST_COLUMNS);
    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("read rows");
    assert_eq!(rows.len(), 3);
    for (row, post) in rows.iter().zip(&data.posts) {
        assert_eq!(&row[0], post.post_id);
        assert_eq!(&row[1], data.users[0].user_id);
    }
}

#[test]
fn record_column_order_is_fixed() {
    assert_eq!(<Post as socialscrape_core::Record>::COLUMNS, POST_COLUMNS);
    assert_eq!(
        COMMENT_COLUMNS,
        ["comment_id", "post_id", "user_id", "timestamp", "content_text"]
    );
}
