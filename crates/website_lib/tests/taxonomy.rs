use website_lib::{
    error::{ValidationError, WebsiteError},
    taxonomy::{self, CategoryForest, CategoryInput},
};

fn input(name: &str, parent_id: Option<i32>) -> CategoryInput {
    CategoryInput {
        name: name.to_owned(),
        parent_id,
        ..Default::default()
    }
}

#[tokio::test]
async fn save_and_display() -> anyhow::Result<()> {
    test_env::wrap(async |db| {
        let europe = taxonomy::save_category(&db.sql_conn, input("Europe", None)).await?;
        let france = taxonomy::save_category(&db.sql_conn, input("France", Some(europe.id))).await?;
        let paris = taxonomy::save_category(&db.sql_conn, input("Paris", Some(france.id))).await?;

        assert_eq!(europe.slug, "europe");

        let forest = CategoryForest::load(&db.sql_conn).await?;
        assert_eq!(
            forest.display_name(paris.id).as_deref(),
            Some("Europe - France - Paris")
        );
        assert_eq!(
            taxonomy::display_names(&forest, [france.id, europe.id]),
            ["Europe - France", "Europe"]
        );

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn refused_parents() -> anyhow::Result<()> {
    test_env::wrap(async |db| {
        let a = taxonomy::save_category(&db.sql_conn, input("A", None)).await?;
        let b = taxonomy::save_category(&db.sql_conn, input("B", Some(a.id))).await?;

        let res = taxonomy::save_category(
            &db.sql_conn,
            CategoryInput {
                id: Some(a.id),
                ..input("A", Some(a.id))
            },
        )
        .await;
        assert!(matches!(
            res,
            Err(WebsiteError::Validation(ValidationError::SelfParent))
        ));

        let res = taxonomy::save_category(
            &db.sql_conn,
            CategoryInput {
                id: Some(a.id),
                ..input("A", Some(b.id))
            },
        )
        .await;
        assert!(matches!(
            res,
            Err(WebsiteError::Validation(ValidationError::CircularParents))
        ));

        let res = taxonomy::save_category(&db.sql_conn, input("C", Some(99))).await;
        assert!(matches!(res, Err(WebsiteError::WebsiteCategoryNotFound(99))));

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn three_node_cycle_refused() -> anyhow::Result<()> {
    test_env::wrap(async |db| {
        let a = taxonomy::save_category(&db.sql_conn, input("A", None)).await?;
        let b = taxonomy::save_category(&db.sql_conn, input("B", Some(a.id))).await?;
        let c = taxonomy::save_category(&db.sql_conn, input("C", Some(b.id))).await?;

        // A -> C -> B -> A
        let res = taxonomy::save_category(
            &db.sql_conn,
            CategoryInput {
                id: Some(a.id),
                ..input("A", Some(c.id))
            },
        )
        .await;
        assert!(matches!(
            res,
            Err(WebsiteError::Validation(ValidationError::CircularParents))
        ));

        let forest = CategoryForest::load(&db.sql_conn).await?;
        assert_eq!(forest.parent_of(a.id), None);

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn four_node_cycle_is_saved() -> anyhow::Result<()> {
    test_env::wrap(async |db| {
        let a = taxonomy::save_category(&db.sql_conn, input("A", None)).await?;
        let b = taxonomy::save_category(&db.sql_conn, input("B", Some(a.id))).await?;
        let c = taxonomy::save_category(&db.sql_conn, input("C", Some(b.id))).await?;
        let d = taxonomy::save_category(&db.sql_conn, input("D", Some(c.id))).await?;

        // A -> D -> C -> B -> A
        let a = taxonomy::save_category(
            &db.sql_conn,
            CategoryInput {
                id: Some(a.id),
                ..input("A", Some(d.id))
            },
        )
        .await?;
        assert_eq!(a.parent_id, Some(d.id));

        let forest = CategoryForest::load(&db.sql_conn).await?;
        assert!(forest.display_name(a.id).is_some());

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn duplicate_slug() -> anyhow::Result<()> {
    test_env::wrap(async |db| {
        taxonomy::save_category(&db.sql_conn, input("Sea trips", None)).await?;
        let res = taxonomy::save_category(&db.sql_conn, input("Sea Trips", None)).await;
        assert!(matches!(
            res,
            Err(WebsiteError::Validation(ValidationError::DuplicateCategorySlug(slug))) if slug == "sea-trips"
        ));

        anyhow::Ok(())
    })
    .await
}
