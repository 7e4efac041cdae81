mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use common::{
    create_test_class, create_test_user, generate_unique_email, json_request, read_json,
    setup_test_app, token_for,
};

#[sqlx::test(migrations = "./migrations")]
async fn test_create_class_defaults_to_pending(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let instructor = generate_unique_email();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/classes",
            None,
            Some(json!({
                "name": "Yoga Basics",
                "image": "https://img/yoga.png",
                "instructorName": "Kim",
                "email": instructor,
                "price": 25.5,
                "seats": 12
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(read_json(response).await["insertedId"].is_string());

    let response = app
        .oneshot(json_request(
            "GET",
            &format!("/myclasses?email={}", instructor),
            None,
            None,
        ))
        .await
        .unwrap();
    let body = read_json(response).await;
    let classes = body.as_array().unwrap();
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0]["status"], "pending");
    assert_eq!(classes[0]["seats"], 12);
    assert_eq!(classes[0]["student"], 0);
    assert_eq!(classes[0]["feedback"], json!([]));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_class_rejects_negative_seats(pool: PgPool) {
    let app = setup_test_app(pool);

    let response = app
        .oneshot(json_request(
            "POST",
            "/classes",
            None,
            Some(json!({
                "name": "Yoga Basics",
                "email": "kim@example.com",
                "price": 25,
                "seats": -1
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_class_rejects_unstorable_prices(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    for price in [json!(1000000000), json!(19.999)] {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/classes",
                None,
                Some(json!({
                    "name": "Yoga Basics",
                    "email": "kim@example.com",
                    "price": price,
                    "seats": 10
                })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "price {}", price);
        assert_eq!(read_json(response).await["error"], true);
    }

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM classes")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_all_classes_is_admin_only(pool: PgPool) {
    let admin = generate_unique_email();
    let instructor = generate_unique_email();
    create_test_user(&pool, &admin, "admin").await;
    create_test_user(&pool, &instructor, "instructor").await;
    create_test_class(&pool, &instructor, "pending", 5, 0).await;
    create_test_class(&pool, &instructor, "approved", 5, 0).await;

    let app = setup_test_app(pool);

    let response = app
        .clone()
        .oneshot(json_request("GET", "/classes", Some(&token_for(&admin)), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await.as_array().unwrap().len(), 2);

    let response = app
        .oneshot(json_request(
            "GET",
            "/classes",
            Some(&token_for(&instructor)),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_my_classes_filters_by_email(pool: PgPool) {
    let mine = generate_unique_email();
    let theirs = generate_unique_email();
    create_test_class(&pool, &mine, "approved", 5, 0).await;
    create_test_class(&pool, &theirs, "approved", 5, 0).await;
    create_test_class(&pool, &theirs, "denied", 5, 0).await;

    let app = setup_test_app(pool);

    let response = app
        .clone()
        .oneshot(json_request(
            "GET",
            &format!("/myclasses?email={}", theirs),
            None,
            None,
        ))
        .await
        .unwrap();
    let body = read_json(response).await;
    let classes = body.as_array().unwrap();
    assert_eq!(classes.len(), 2);
    assert!(classes.iter().all(|c| c["email"] == theirs.as_str()));

    // no filter returns everything
    let response = app
        .oneshot(json_request("GET", "/myclasses", None, None))
        .await
        .unwrap();
    assert_eq!(read_json(response).await.as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_class_status(pool: PgPool) {
    let instructor = generate_unique_email();
    let id = create_test_class(&pool, &instructor, "pending", 5, 0).await;

    let app = setup_test_app(pool);

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/classes/{}?status=approved", id),
            None,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({ "matchedCount": 1, "modifiedCount": 1 })
    );

    // same status again matches but modifies nothing
    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/classes/{}?status=approved", id),
            None,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(
        read_json(response).await,
        json!({ "matchedCount": 1, "modifiedCount": 0 })
    );

    let response = app
        .clone()
        .oneshot(json_request("GET", "/allClasses/approved", None, None))
        .await
        .unwrap();
    let body = read_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], id.to_string());

    let response = app
        .oneshot(json_request("GET", "/allClasses/pending", None, None))
        .await
        .unwrap();
    assert!(read_json(response).await.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_class_status_errors(pool: PgPool) {
    let id = create_test_class(&pool, "coach@example.com", "pending", 5, 0).await;
    let app = setup_test_app(pool);

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/classes/{}?status=archived", id),
            None,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/classes/{}?status=approved", Uuid::new_v4()),
            None,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(json_request("GET", "/allClasses/archived", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_popular_classes_sorted_by_enrollment(pool: PgPool) {
    let instructor = generate_unique_email();
    let low = create_test_class(&pool, &instructor, "approved", 10, 1).await;
    let high = create_test_class(&pool, &instructor, "approved", 10, 8).await;
    let mid = create_test_class(&pool, &instructor, "approved", 10, 4).await;
    create_test_class(&pool, &instructor, "pending", 10, 50).await;

    let app = setup_test_app(pool);

    let response = app
        .oneshot(json_request("GET", "/popularClass/approved", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let ids: Vec<String> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec![high.to_string(), mid.to_string(), low.to_string()]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_feedback_is_appended(pool: PgPool) {
    let instructor = generate_unique_email();
    let id = create_test_class(&pool, &instructor, "denied", 5, 0).await;

    let app = setup_test_app(pool);

    for feedback in ["needs more detail", "add a photo"] {
        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/addClasses/{}", id),
                None,
                Some(json!({ "feedback": feedback })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            read_json(response).await,
            json!({ "matchedCount": 1, "modifiedCount": 1 })
        );
    }

    let response = app
        .clone()
        .oneshot(json_request(
            "GET",
            &format!("/myclasses?email={}", instructor),
            None,
            None,
        ))
        .await
        .unwrap();
    let body = read_json(response).await;
    assert_eq!(body[0]["feedback"], json!(["needs more detail", "add a photo"]));

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/addClasses/{}", Uuid::new_v4()),
            None,
            Some(json!({ "feedback": "x" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/addClasses/{}", id),
            None,
            Some(json!({ "feedback": "" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_enroll_moves_a_seat(pool: PgPool) {
    let id = create_test_class(&pool, "coach@example.com", "approved", 10, 5).await;
    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(json_request(
            "PATCH",
            &format!("/all-classes/seats/{}", id),
            None,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({ "matchedCount": 1, "modifiedCount": 1 })
    );

    let (seats, student): (i32, i32) =
        sqlx::query_as("SELECT seats, student FROM classes WHERE id = $1")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!((seats, student), (9, 6));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_enroll_full_or_missing_class(pool: PgPool) {
    let full = create_test_class(&pool, "coach@example.com", "approved", 0, 20).await;
    let app = setup_test_app(pool.clone());

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/all-classes/seats/{}", full),
            None,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let (seats, student): (i32, i32) =
        sqlx::query_as("SELECT seats, student FROM classes WHERE id = $1")
            .bind(full)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!((seats, student), (0, 20));

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/all-classes/seats/{}", Uuid::new_v4()),
            None,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(json_request("PATCH", "/all-classes/seats/abc", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
