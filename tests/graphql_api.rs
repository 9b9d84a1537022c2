use anyhow::Result;
use serde_json::{json, Value};


use test_harness::{app, post_graphql, query};

#[tokio::test]
async fn seed_courses_resolve_professor_names() -> Result<()> {
    let app = app()?;

    let body = query(&app, "{ courses { id name professor { firstName } } }").await?;

    assert_eq!(
        body,
        json!({
            "data": {
                "courses": [
                    { "id": 1, "name": "Amplifiya", "professor": { "firstName": "Yo" } },
                    { "id": 2, "name": "Woofer", "professor": { "firstName": "Honey" } }
                ]
            }
        })
    );
    Ok(())
}

#[tokio::test]
async fn single_lookups_return_record_or_null() -> Result<()> {
    let app = app()?;

    let body = query(
        &app,
        "{ course(id: 1) { id name professorId } professor(id: 2) { id firstName lastName } missingCourse: course(id: 99) { id } missingProfessor: professor(id: 99) { id } noId: course { id } }",
    )
    .await?;

    assert_eq!(
        body["data"],
        json!({
            "course": { "id": 1, "name": "Amplifiya", "professorId": 2 },
            "professor": { "id": 2, "firstName": "Yo", "lastName": "Yo" },
            "missingCourse": null,
            "missingProfessor": null,
            "noId": null
        })
    );
    assert!(body.get("errors").is_none());
    Ok(())
}

#[tokio::test]
async fn add_course_appends_with_next_id() -> Result<()> {
    let app = app()?;

    let created = post_graphql(
        &app,
        json!({
            "query": "mutation Add($name: String!, $professorId: Int!) { addCourse(name: $name, professorId: $professorId) { id name professorId professor { id } } }",
            "variables": { "name": "Bass Theory", "professorId": 7 }
        }),
    )
    .await?;

    assert_eq!(
        created["data"]["addCourse"],
        json!({ "id": 3, "name": "Bass Theory", "professorId": 7, "professor": null })
    );

    let listed = query(&app, "{ courses { id name professorId } }").await?;
    let courses = listed["data"]["courses"].as_array().cloned().unwrap_or_default();
    assert_eq!(courses.len(), 3);
    assert_eq!(
        courses[2],
        json!({ "id": 3, "name": "Bass Theory", "professorId": 7 })
    );
    Ok(())
}

#[tokio::test]
async fn add_professor_without_last_name_stores_null() -> Result<()> {
    let app = app()?;

    let created = query(
        &app,
        "mutation { addProfessor(firstName: \"Badshah\") { id firstName lastName courses { id } } }",
    )
    .await?;

    assert_eq!(
        created["data"]["addProfessor"],
        json!({ "id": 3, "firstName": "Badshah", "lastName": null, "courses": [] })
    );

    let listed = query(&app, "{ professors { id firstName lastName } }").await?;
    assert_eq!(
        listed["data"]["professors"][2],
        json!({ "id": 3, "firstName": "Badshah", "lastName": null })
    );
    Ok(())
}

#[tokio::test]
async fn professor_courses_match_filtered_course_list() -> Result<()> {
    let app = app()?;
    query(
        &app,
        "mutation { addCourse(name: \"Bassline\", professorId: 1) { id } }",
    )
    .await?;

    let body = query(
        &app,
        "{ professors { id courses { id professorId } } courses { id professorId } }",
    )
    .await?;

    let all_courses = body["data"]["courses"].as_array().cloned().unwrap_or_default();
    for professor in body["data"]["professors"].as_array().cloned().unwrap_or_default() {
        let expected: Vec<Value> = all_courses
            .iter()
            .filter(|c| c["professorId"] == professor["id"])
            .cloned()
            .collect();
        assert_eq!(professor["courses"], Value::Array(expected));
    }
    assert_eq!(
        body["data"]["professors"][0]["courses"],
        json!([{ "id": 2, "professorId": 1 }, { "id": 3, "professorId": 1 }])
    );
    Ok(())
}

#[tokio::test]
async fn profile_lists_courses_for_first_name() -> Result<()> {
    let app = app()?;

    let body = query(&app, "{ profile(name: \"Honey\") { name professorId } }").await?;

    assert_eq!(
        body["data"]["profile"],
        json!([{ "name": "Woofer", "professorId": 1 }])
    );
    Ok(())
}

#[tokio::test]
async fn profile_for_unknown_name_is_empty_and_server_keeps_serving() -> Result<()> {
    let app = app()?;

    let missing = query(&app, "{ profile(name: \"Nonexistent\") { name } }").await?;
    assert_eq!(missing, json!({ "data": { "profile": [] } }));

    let no_name = query(&app, "{ profile { name } }").await?;
    assert_eq!(no_name["data"]["profile"], json!([]));

    let after = query(&app, "{ profile(name: \"Yo\") { name } }").await?;
    assert_eq!(after["data"]["profile"], json!([{ "name": "Amplifiya" }]));
    Ok(())
}

#[tokio::test]
async fn wrong_argument_type_reports_errors() -> Result<()> {
    let app = app()?;

    let body = query(&app, "{ professor(id: \"two\") { id } }").await?;

    let errors = body["errors"].as_array().cloned().unwrap_or_default();
    assert!(!errors.is_empty());
    assert!(body.get("data").map_or(true, Value::is_null));
    Ok(())
}
