mod common;

use email_templates::{
    audit::{self, LogFilter, NewLog},
    create_override, revert_override,
    templates::{self, NewTemplate},
    Error, TargetRef,
};
use entity::send_status::SendStatus;

fn sent_to(address: &str, status: SendStatus) -> NewLog {
    NewLog {
        status,
        message: String::new(),
        to: vec![address.to_owned()],
        cc: vec![],
        bcc: vec!["archive@example.org".to_owned()],
        from_email: "noreply@example.org".to_owned(),
        subject: "Hi".to_owned(),
        body: "Hello".to_owned(),
    }
}

#[tokio::test]
async fn one_generic_per_name() {
    let db = common::setup().await;
    common::generic(&db, "welcome", "Hi").await;

    let err = templates::create_generic(&db, NewTemplate::new("welcome", "again", "Hi", ""), "admin")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::AlreadyExists { name } if name == "welcome"));
}

#[tokio::test]
async fn create_generic_applies_defaults_and_validates() {
    let db = common::setup().await;

    let welcome = common::generic(&db, "welcome", "Hi").await;
    assert!(welcome.is_generic());
    assert_eq!(welcome.type_, "text/plain");
    assert!(welcome.enabled && welcome.autogenerate_text && welcome.can_override_per_object);
    assert_eq!(welcome.edited_user, "admin");

    let mut bad = NewTemplate::new("digest", "Digest", "Your week", "");
    bad.base_cc = "ops@example.org, ops".to_owned();
    let err = templates::create_generic(&db, bad, "admin").await.unwrap_err();
    assert!(matches!(err, Error::InvalidEmail(_)));
}

#[tokio::test]
async fn generic_listing_and_deletion() {
    let db = common::setup().await;
    let welcome = common::generic(&db, "welcome", "Hi").await;
    let digest = common::generic(&db, "digest", "Your week").await;
    let custom = create_override(&db, &welcome, &TargetRef::new("site", 1))
        .await
        .unwrap();

    assert_eq!(
        templates::list_generic(&db).await.unwrap(),
        vec![digest.clone(), welcome.clone()]
    );

    let err = templates::delete_generic(&db, custom.id).await.unwrap_err();
    assert!(matches!(err, Error::NotGeneric { .. }));

    templates::delete_generic(&db, digest.id).await.unwrap();
    assert!(templates::find_by_id(&db, digest.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn send_log_is_filtered_and_newest_first() {
    let db = common::setup().await;
    let welcome = common::generic(&db, "welcome", "Hi").await;
    let digest = common::generic(&db, "digest", "Your week").await;

    let first = audit::record(&db, &welcome, sent_to("a@example.org", SendStatus::Sent))
        .await
        .unwrap();
    let failed = audit::record(&db, &welcome, sent_to("b@example.org", SendStatus::Failed))
        .await
        .unwrap();
    let other = audit::record(&db, &digest, sent_to("c@example.org", SendStatus::Sent))
        .await
        .unwrap();
    assert_eq!(first.to, "a@example.org");
    assert_eq!(first.bcc, "archive@example.org");

    assert_eq!(
        audit::list(&db, LogFilter::default()).await.unwrap(),
        vec![other.clone(), failed.clone(), first.clone()]
    );
    assert_eq!(
        audit::list(
            &db,
            LogFilter {
                template_id: Some(welcome.id),
                ..Default::default()
            }
        )
        .await
        .unwrap(),
        vec![failed.clone(), first]
    );
    assert_eq!(
        audit::list(
            &db,
            LogFilter {
                template_id: Some(welcome.id),
                status: Some(SendStatus::Failed),
            }
        )
        .await
        .unwrap(),
        vec![failed]
    );
}

#[tokio::test]
async fn reverting_keeps_send_history() {
    let db = common::setup().await;
    let welcome = common::generic(&db, "welcome", "Hi").await;
    let custom = create_override(&db, &welcome, &TargetRef::new("site", 1))
        .await
        .unwrap();
    let entry = audit::record(&db, &custom, sent_to("a@example.org", SendStatus::Sent))
        .await
        .unwrap();

    assert!(revert_override(&db, &custom).await.unwrap());

    let history = audit::list(&db, LogFilter::default()).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, entry.id);
    assert_eq!(history[0].template_id, None);
}
