use chrono::NaiveDate;
use entity::{image, types::{PageKind, YearMonth}, website_tag};
use sea_orm::{ActiveModelTrait as _, ActiveValue::Set};
use website_lib::{
    Database,
    error::{ValidationError, WebsiteError},
    listings,
    pages::{self, GalleryImageInput, PageContent},
    taxonomy::{self, CategoryInput},
};

async fn root(db: &Database) -> anyhow::Result<i32> {
    let root = pages::create_page(
        &db.sql_conn,
        None,
        "Home",
        None,
        PageContent::AboutIndex {
            body: "Our story".to_owned(),
        },
    )
    .await?;
    Ok(root.id)
}

async fn image(db: &Database, title: &str) -> anyhow::Result<i32> {
    let image = image::ActiveModel {
        title: Set(title.to_owned()),
        file: Set(format!("original_images/{title}.jpg")),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(&db.sql_conn)
    .await?;
    Ok(image.id)
}

async fn category(db: &Database, name: &str, parent_id: Option<i32>) -> anyhow::Result<i32> {
    let category = taxonomy::save_category(
        &db.sql_conn,
        CategoryInput {
            name: name.to_owned(),
            parent_id,
            ..Default::default()
        },
    )
    .await?;
    Ok(category.id)
}

fn travel(title: &str, category_ids: Vec<i32>, gallery: Vec<GalleryImageInput>) -> PageContent {
    PageContent::Travel {
        intro: format!("{title} intro"),
        text: format!("{title} text"),
        destination: title.to_owned(),
        date: YearMonth { year: 2017, month: 4 },
        start_location: "Boston".to_owned(),
        end_location: title.to_owned(),
        category_ids,
        gallery,
    }
}

#[tokio::test]
async fn tree_positions() -> anyhow::Result<()> {
    test_env::wrap(async |db| {
        let root_id = root(&db).await?;
        let index = pages::create_page(
            &db.sql_conn,
            Some(root_id),
            "Travel Destinations",
            None,
            PageContent::TravelIndex {
                body: String::new(),
            },
        )
        .await?;

        assert_eq!(index.slug, "travel-destinations");
        assert_eq!(index.depth, 2);
        assert_eq!(index.url_path, "/travel-destinations/");
        assert_eq!(index.kind, PageKind::TravelIndex);
        assert!(!index.live);

        let res = pages::create_page(
            &db.sql_conn,
            Some(root_id),
            "Another travel index",
            Some("travel-destinations"),
            PageContent::TravelIndex {
                body: String::new(),
            },
        )
        .await;
        assert!(matches!(
            res,
            Err(WebsiteError::Validation(ValidationError::DuplicatePageSlug(_)))
        ));

        let res = pages::create_page(
            &db.sql_conn,
            Some(999),
            "Lost",
            None,
            PageContent::TravelIndex {
                body: String::new(),
            },
        )
        .await;
        assert!(matches!(res, Err(WebsiteError::PageNotFound(999))));

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn publication_dates() -> anyhow::Result<()> {
    test_env::wrap(async |db| {
        let root_id = root(&db).await?;

        let first = pages::publish(&db.sql_conn, root_id).await?;
        assert!(first.live);
        assert!(first.first_published_at.is_some());

        let page = pages::unpublish(&db.sql_conn, root_id).await?;
        assert!(!page.live);
        assert_eq!(page.first_published_at, first.first_published_at);

        let second = pages::publish(&db.sql_conn, root_id).await?;
        assert_eq!(second.first_published_at, first.first_published_at);
        assert!(second.last_published_at >= first.last_published_at);

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn about_page_must_be_live() -> anyhow::Result<()> {
    test_env::wrap(async |db| {
        let root_id = root(&db).await?;

        let res = listings::about(&db.sql_conn).await;
        assert!(matches!(
            res,
            Err(WebsiteError::PageKindNotFound(PageKind::AboutIndex))
        ));
        let home = listings::home(&db.sql_conn, 3).await?;
        assert_eq!(home.about, None);

        pages::publish(&db.sql_conn, root_id).await?;
        let about = listings::about(&db.sql_conn).await?;
        assert_eq!(about.body, "Our story");
        assert_eq!(about.page.url_path, "/");

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn testimonials_listing() -> anyhow::Result<()> {
    test_env::wrap(async |db| {
        let root_id = root(&db).await?;
        let index = pages::create_page(
            &db.sql_conn,
            Some(root_id),
            "Testimonials",
            None,
            PageContent::TestimonialsIndex {
                intro: "What they say".to_owned(),
            },
        )
        .await?;
        pages::publish(&db.sql_conn, index.id).await?;

        let europe = category(&db, "Europe", None).await?;
        let france = category(&db, "France", Some(europe)).await?;
        let tag = website_tag::ActiveModel {
            name: Set("family".to_owned()),
            slug: Set("family".to_owned()),
            ..Default::default()
        }
        .insert(&db.sql_conn)
        .await?;

        let mut ids = Vec::new();
        for name in ["Ana", "Bruno", "Carla"] {
            let page = pages::create_page(
                &db.sql_conn,
                Some(index.id),
                &format!("{name}'s trip"),
                None,
                PageContent::Testimonial {
                    text: "Great".to_owned(),
                    full_name: name.to_owned(),
                    organization: "Lincoln High".to_owned(),
                    trip_event: "Paris".to_owned(),
                    date: NaiveDate::from_ymd_opt(2017, 4, 2),
                    category_ids: vec![france],
                    tag_ids: vec![tag.id],
                },
            )
            .await?;
            ids.push(page.id);
        }
        // Carla's testimonial stays a draft.
        pages::publish(&db.sql_conn, ids[0]).await?;
        pages::publish(&db.sql_conn, ids[1]).await?;

        let testimonials = listings::testimonials(&db.sql_conn).await?;
        assert_eq!(testimonials.intro, "What they say");
        itertools::assert_equal(
            testimonials
                .testimonial_pages
                .iter()
                .map(|t| t.full_name.as_str()),
            ["Bruno", "Ana"],
        );
        let bruno = &testimonials.testimonial_pages[0];
        assert_eq!(bruno.categories, ["Europe - France"]);
        assert_eq!(bruno.tags, ["family"]);
        assert_eq!(bruno.page.slug, "brunos-trip");

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn travel_listing_and_gallery() -> anyhow::Result<()> {
    test_env::wrap(async |db| {
        let root_id = root(&db).await?;
        let index = pages::create_page(
            &db.sql_conn,
            Some(root_id),
            "Travel",
            None,
            PageContent::TravelIndex {
                body: "Destinations".to_owned(),
            },
        )
        .await?;
        pages::publish(&db.sql_conn, index.id).await?;

        let europe = category(&db, "Europe", None).await?;
        let asia = category(&db, "Asia", None).await?;
        let tower = image(&db, "tower").await?;
        let river = image(&db, "river").await?;

        let paris = pages::create_page(
            &db.sql_conn,
            Some(index.id),
            "Paris",
            None,
            travel(
                "Paris",
                vec![europe],
                vec![
                    GalleryImageInput {
                        image_id: tower,
                        caption: "The tower".to_owned(),
                    },
                    GalleryImageInput {
                        image_id: river,
                        caption: "The river".to_owned(),
                    },
                ],
            ),
        )
        .await?;
        let tokyo = pages::create_page(
            &db.sql_conn,
            Some(index.id),
            "Tokyo",
            None,
            travel("Tokyo", vec![asia], Vec::new()),
        )
        .await?;
        pages::publish(&db.sql_conn, paris.id).await?;
        pages::publish(&db.sql_conn, tokyo.id).await?;

        let all = listings::travel(&db.sql_conn, None).await?;
        assert_eq!(all.travel_pages.len(), 2);
        let listed_paris = all
            .travel_pages
            .iter()
            .find(|t| t.page.id == paris.id)
            .expect("Paris should be listed");
        assert_eq!(listed_paris.date, "2017-04");
        assert_eq!(
            listed_paris.main_image.as_ref().map(|i| i.id),
            Some(tower)
        );
        let listed_tokyo = all
            .travel_pages
            .iter()
            .find(|t| t.page.id == tokyo.id)
            .expect("Tokyo should be listed");
        assert!(listed_tokyo.main_image.is_none());

        let europe_only = listings::travel(&db.sql_conn, Some("europe")).await?;
        itertools::assert_equal(
            europe_only.travel_pages.iter().map(|t| t.page.id),
            [paris.id],
        );

        let res = listings::travel(&db.sql_conn, Some("africa")).await;
        assert!(matches!(res, Err(WebsiteError::CategorySlugNotFound(_))));

        let gallery = listings::travel_gallery(&db.sql_conn, paris.id).await?;
        itertools::assert_equal(
            gallery.iter().map(|g| (g.sort_order, g.caption.as_str())),
            [(Some(0), "The tower"), (Some(1), "The river")],
        );

        let detail = listings::travel_page(&db.sql_conn, "paris").await?;
        assert_eq!(detail.travel.page.id, paris.id);
        assert_eq!(detail.gallery.len(), 2);

        // The most recent first, and only as many as asked
        let home = listings::home(&db.sql_conn, 1).await?;
        itertools::assert_equal(home.travel_pages.iter().map(|t| t.page.id), [tokyo.id]);
        let home = listings::home(&db.sql_conn, 5).await?;
        itertools::assert_equal(
            home.travel_pages.iter().map(|t| t.page.id),
            [tokyo.id, paris.id],
        );

        pages::unpublish(&db.sql_conn, paris.id).await?;
        let europe_only = listings::travel(&db.sql_conn, Some("europe")).await?;
        assert!(europe_only.travel_pages.is_empty());
        let res = listings::travel_page(&db.sql_conn, "paris").await;
        assert!(matches!(
            res,
            Err(WebsiteError::PageSlugNotFound(PageKind::Travel, _))
        ));

        let home = listings::home(&db.sql_conn, 1).await?;
        itertools::assert_equal(home.travel_pages.iter().map(|t| t.page.id), [tokyo.id]);

        anyhow::Ok(())
    })
    .await
}
