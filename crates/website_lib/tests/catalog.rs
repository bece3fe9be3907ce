use chrono::NaiveDate;
use website_lib::{
    catalog::{self, NewEvent, NewTestimonial, NewTrip},
    error::{ValidationError, WebsiteError},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn defaults() -> anyhow::Result<()> {
    test_env::wrap(async |db| {
        let category = catalog::create_category(&db.sql_conn, None, String::new()).await?;
        assert_eq!(category.title, "General");

        let trip = catalog::create_trip(
            &db.sql_conn,
            NewTrip {
                category_id: category.id,
                title: "Capital tour".to_owned(),
                destination: "Washington D.C.".to_owned(),
                date: date(2017, 5, 1),
                ..Default::default()
            },
        )
        .await?;
        assert!(trip.draft);
        assert_eq!(trip.start_location, "");
        assert_eq!(trip.end_location, "");

        let testimonial = catalog::create_testimonial(
            &db.sql_conn,
            NewTestimonial {
                text: "Unforgettable.".to_owned(),
                full_name: "Ana Silva".to_owned(),
                organization: "Lincoln High".to_owned(),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(testimonial.date, chrono::Utc::now().date_naive());
        assert_eq!(testimonial.trip, "");

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn refused_records() -> anyhow::Result<()> {
    test_env::wrap(async |db| {
        let res = catalog::create_category(&db.sql_conn, Some("  ".to_owned()), String::new()).await;
        assert!(matches!(
            res,
            Err(WebsiteError::Validation(ValidationError::Blank("title")))
        ));

        let res = catalog::create_trip(
            &db.sql_conn,
            NewTrip {
                category_id: 7,
                title: "Capital tour".to_owned(),
                destination: "Washington D.C.".to_owned(),
                date: date(2017, 5, 1),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(res, Err(WebsiteError::CategoryNotFound(7))));

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn open_trips_and_travel_info() -> anyhow::Result<()> {
    test_env::wrap(async |db| {
        let science =
            catalog::create_category(&db.sql_conn, Some("Science".to_owned()), String::new())
                .await?;
        let history =
            catalog::create_category(&db.sql_conn, Some("History".to_owned()), String::new())
                .await?;
        let empty =
            catalog::create_category(&db.sql_conn, Some("Arts".to_owned()), String::new()).await?;

        let new_trip = |category_id, title: &str, draft| NewTrip {
            category_id,
            title: title.to_owned(),
            destination: "Somewhere".to_owned(),
            date: date(2017, 6, 1),
            draft: Some(draft),
            ..Default::default()
        };
        catalog::create_trip(&db.sql_conn, new_trip(science.id, "Space camp", false)).await?;
        catalog::create_trip(&db.sql_conn, new_trip(science.id, "Lab visit", true)).await?;
        catalog::create_trip(&db.sql_conn, new_trip(history.id, "Castles", false)).await?;
        catalog::create_trip(&db.sql_conn, new_trip(empty.id, "Unfinished", true)).await?;

        for (title, day) in [("Past fair", date(2017, 1, 5)), ("Museum night", date(2017, 3, 2))] {
            catalog::create_event(
                &db.sql_conn,
                NewEvent {
                    category_id: history.id,
                    title: title.to_owned(),
                    description: String::new(),
                    date: day,
                },
            )
            .await?;
        }

        let open = catalog::open_trips(&db.sql_conn).await?;
        itertools::assert_equal(open.iter().map(|t| t.title.as_str()), ["Castles", "Space camp"]);

        let info = catalog::travel_info(&db.sql_conn, date(2017, 2, 1)).await?;
        itertools::assert_equal(
            info.iter().map(|c| c.category.title.as_str()),
            ["History", "Science"],
        );
        itertools::assert_equal(info[0].events.iter().map(|e| e.title.as_str()), ["Museum night"]);
        itertools::assert_equal(info[0].trips.iter().map(|t| t.title.as_str()), ["Castles"]);
        itertools::assert_equal(info[1].trips.iter().map(|t| t.title.as_str()), ["Space camp"]);
        assert!(info[1].events.is_empty());

        anyhow::Ok(())
    })
    .await
}
