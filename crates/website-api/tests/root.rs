
use actix_http::StatusCode;
use actix_web::test;

#[tokio::test]
async fn test_not_found() -> anyhow::Result<()> {
    base::with_db(async |db| {
        let app = base::get_app(db).await;
        let req = test::TestRequest::get().uri("/blog/").to_request();

        let resp = test::call_service(&app, req).await;
        let status_code = resp.status();

        let body = test::read_body(resp).await;
        let error: base::ErrorResponse = serde_json::from_slice(&body)?;

        assert_eq!(status_code, StatusCode::NOT_FOUND);
        assert_eq!(error.r#type, 301);
        assert_eq!(error.message, "not found");

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn test_unpublished_about_page() -> anyhow::Result<()> {
    base::with_db(async |db| {
        let app = base::get_app(db).await;
        let req = test::TestRequest::get().uri("/our-story").to_request();

        let resp = test::call_service(&app, req).await;
        let status_code = resp.status();

        let body = test::read_body(resp).await;
        let error: base::ErrorResponse = serde_json::from_slice(&body)?;

        assert_eq!(status_code, StatusCode::NOT_FOUND);
        assert_eq!(error.r#type, 304);

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn test_contact_us() -> anyhow::Result<()> {
    #[derive(serde::Deserialize)]
    struct ContactResponse {
        email: String,
        phone: String,
        address: String,
    }

    base::with_db(async |db| {
        let app = base::get_app(db).await;
        let req = test::TestRequest::get().uri("/contact-us/").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body = test::read_body(resp).await;
        let body = base::try_from_slice::<ContactResponse>(&body)?;

        let _ = (body.email, body.phone, body.address);

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn test_empty_home() -> anyhow::Result<()> {
    #[derive(serde::Deserialize)]
    struct HomeResponse {
        about: Option<String>,
        travel_pages: Vec<serde_json::Value>,
        testimonial_pages: Vec<serde_json::Value>,
    }

    base::with_db(async |db| {
        let app = base::get_app(db).await;
        let req = test::TestRequest::get().uri("/").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body = test::read_body(resp).await;
        let body = base::try_from_slice::<HomeResponse>(&body)?;

        assert_eq!(body.about, None);
        assert!(body.travel_pages.is_empty());
        assert!(body.testimonial_pages.is_empty());

        anyhow::Ok(())
    })
    .await
}
