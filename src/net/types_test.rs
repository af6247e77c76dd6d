use super::*;

fn sample_job() -> Job {
    Job {
        id: "j1".to_owned(),
        title: "Engineer".to_owned(),
        company: "Acme".to_owned(),
        location: "Remote".to_owned(),
        description: "Build things".to_owned(),
        salary: "100k".to_owned(),
        job_type: "Full-time".to_owned(),
        created_at: "2024-01-01T00:00:00Z".to_owned(),
    }
}

// =============================================================
// Job wire names
// =============================================================

#[test]
fn job_deserializes_mongo_style_names() {
    let json = r#"{
        "_id": "j1",
        "title": "Engineer",
        "company": "Acme",
        "location": "Remote",
        "description": "Build things",
        "salary": "100k",
        "type": "Full-time",
        "createdAt": "2024-01-01T00:00:00Z"
    }"#;
    let job: Job = serde_json::from_str(json).unwrap();
    assert_eq!(job, sample_job());
}

#[test]
fn job_tolerates_missing_created_at() {
    let json = r#"{
        "_id": "j2",
        "title": "Designer",
        "company": "Acme",
        "location": "NYC",
        "description": "Design things",
        "salary": "90k",
        "type": "Part-time"
    }"#;
    let job: Job = serde_json::from_str(json).unwrap();
    assert_eq!(job.id, "j2");
    assert_eq!(job.created_at, "");
}

#[test]
fn job_serializes_back_to_wire_names() {
    let value = serde_json::to_value(sample_job()).unwrap();
    assert_eq!(value["_id"], "j1");
    assert_eq!(value["type"], "Full-time");
    assert_eq!(value["createdAt"], "2024-01-01T00:00:00Z");
    assert!(value.get("job_type").is_none());
}

// =============================================================
// AuthResponse
// =============================================================

#[test]
fn auth_response_parses_sign_in_body() {
    let json = r#"{"token":"t1","user":{"id":"u1","name":"Ann"}}"#;
    let resp: AuthResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.token, "t1");
    assert_eq!(resp.user.id, "u1");
    assert_eq!(resp.user.name, "Ann");
    assert_eq!(resp.user.email, "");
}

#[test]
fn user_round_trips_through_json() {
    let user = User {
        id: "u1".to_owned(),
        name: "Ann".to_owned(),
        email: "a@b.com".to_owned(),
    };
    let json = serde_json::to_string(&user).unwrap();
    let back: User = serde_json::from_str(&json).unwrap();
    assert_eq!(back, user);
}

// =============================================================
// JobDraft
// =============================================================

#[test]
fn draft_default_type_is_full_time() {
    assert_eq!(JobDraft::default().job_type, "Full-time");
}

#[test]
fn draft_serializes_type_key() {
    let value = serde_json::to_value(JobDraft::default()).unwrap();
    assert_eq!(value["type"], "Full-time");
    assert!(value.get("job_type").is_none());
}

#[test]
fn draft_from_job_copies_every_form_field() {
    let draft = JobDraft::from_job(&sample_job());
    assert_eq!(draft.title, "Engineer");
    assert_eq!(draft.company, "Acme");
    assert_eq!(draft.location, "Remote");
    assert_eq!(draft.description, "Build things");
    assert_eq!(draft.salary, "100k");
    assert_eq!(draft.job_type, "Full-time");
}

// =============================================================
// JobUpdate
// =============================================================

#[test]
fn update_serializes_only_present_fields() {
    let update = JobUpdate {
        title: Some("X".to_owned()),
        ..JobUpdate::default()
    };
    let json = serde_json::to_string(&update).unwrap();
    assert_eq!(json, r#"{"title":"X"}"#);
}

#[test]
fn update_from_draft_fills_every_field() {
    let update = JobUpdate::from_draft(&JobDraft::from_job(&sample_job()));
    let value = serde_json::to_value(update).unwrap();
    assert_eq!(value["title"], "Engineer");
    assert_eq!(value["company"], "Acme");
    assert_eq!(value["location"], "Remote");
    assert_eq!(value["description"], "Build things");
    assert_eq!(value["salary"], "100k");
    assert_eq!(value["type"], "Full-time");
}

#[test]
fn empty_update_serializes_to_empty_object() {
    assert_eq!(serde_json::to_string(&JobUpdate::default()).unwrap(), "{}");
}
