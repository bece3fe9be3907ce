mod common;

use chrono::NaiveDate;
use entity::{customer, organization, quote};
use sea_orm::{EntityTrait as _, PaginatorTrait as _};
use website_lib::{
    Database,
    catalog::{self, NewTrip},
    error::{ValidationError, WebsiteError},
    password,
    quote::request_quote,
};

async fn open_trip(db: &Database) -> anyhow::Result<i32> {
    let category = catalog::create_category(&db.sql_conn, None, String::new()).await?;
    let trip = catalog::create_trip(
        &db.sql_conn,
        NewTrip {
            category_id: category.id,
            title: "Capital tour".to_owned(),
            destination: "Washington D.C.".to_owned(),
            date: NaiveDate::from_ymd_opt(2017, 5, 1).unwrap(),
            draft: Some(false),
            ..Default::default()
        },
    )
    .await?;
    Ok(trip.id)
}

#[tokio::test]
async fn customer_and_organization_are_reused() -> anyhow::Result<()> {
    test_env::wrap(async |db| {
        let trip_id = open_trip(&db).await?;

        let first = request_quote(&db.sql_conn, common::quote_request(trip_id)).await?;
        let mut req = common::quote_request(trip_id);
        req.password = "another one".to_owned();
        let second = request_quote(&db.sql_conn, req).await?;

        assert_eq!(first.customer_id, second.customer_id);
        assert_eq!(first.organization_id, second.organization_id);
        assert_eq!(first.reference_file, None);
        assert_eq!(customer::Entity::find().count(&db.sql_conn).await?, 1);
        assert_eq!(organization::Entity::find().count(&db.sql_conn).await?, 1);

        let customer = customer::Entity::find_by_id(first.customer_id)
            .one(&db.sql_conn)
            .await?
            .expect("the customer should exist");
        assert!(customer.password.starts_with("$argon2"));
        assert!(password::verify_password("hunter22", &customer.password)?);

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn customer_email_ignores_case() -> anyhow::Result<()> {
    test_env::wrap(async |db| {
        let trip_id = open_trip(&db).await?;

        let mut req = common::quote_request(trip_id);
        req.email = " Ana@School.Example ".to_owned();
        let first = request_quote(&db.sql_conn, req).await?;
        let second = request_quote(&db.sql_conn, common::quote_request(trip_id)).await?;

        assert_eq!(first.customer_id, second.customer_id);
        assert_eq!(customer::Entity::find().count(&db.sql_conn).await?, 1);

        let customer = customer::Entity::find_by_id(first.customer_id)
            .one(&db.sql_conn)
            .await?
            .expect("the customer should exist");
        assert_eq!(customer.email, "ana@school.example");

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn draft_trip_is_refused() -> anyhow::Result<()> {
    test_env::wrap(async |db| {
        let trip_id = open_trip(&db).await?;
        catalog::set_trip_draft(&db.sql_conn, trip_id, true).await?;

        let res = request_quote(&db.sql_conn, common::quote_request(trip_id)).await;
        assert!(matches!(
            res,
            Err(WebsiteError::Validation(ValidationError::TripDraft(id))) if id == trip_id
        ));

        let res = request_quote(&db.sql_conn, common::quote_request(trip_id + 1)).await;
        assert!(matches!(res, Err(WebsiteError::TripNotFound(_))));

        assert_eq!(quote::Entity::find().count(&db.sql_conn).await?, 0);
        assert_eq!(customer::Entity::find().count(&db.sql_conn).await?, 0);

        anyhow::Ok(())
    })
    .await
}
