use crate::cafe::{self, NewCafe};
use crate::db::connect_in_memory;
use crate::errors::ModelError;
use anyhow::Result;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

fn sample(name: &str) -> NewCafe {
    NewCafe {
        name: name.to_string(),
        map_url: "https://maps.example.com/c".into(),
        img_url: "https://img.example.com/c.jpg".into(),
        location: "Peckham".into(),
        seats: "20-30".into(),
        has_toilet: true,
        has_wifi: false,
        has_sockets: true,
        can_take_calls: false,
        coffee_price: Some("£2.40".into()),
    }
}

#[tokio::test]
async fn create_assigns_increasing_ids() -> Result<()> {
    let db = connect_in_memory().await?;

    let a = cafe::create(&db, &sample("Alpha")).await?;
    let b = cafe::create(&db, &sample("Beta")).await?;
    assert!(b.id > a.id);
    assert_eq!(a.name, "Alpha");
    assert_eq!(a.coffee_price.as_deref(), Some("£2.40"));

    let count = cafe::Entity::find().count(&db).await?;
    assert_eq!(count, 2);
    Ok(())
}

#[tokio::test]
async fn create_without_price_stores_null() -> Result<()> {
    let db = connect_in_memory().await?;
    let mut input = sample("No Price");
    input.coffee_price = None;

    let created = cafe::create(&db, &input).await?;
    let found = cafe::Entity::find_by_id(created.id).one(&db).await?.unwrap();
    assert!(found.coffee_price.is_none());
    Ok(())
}

#[tokio::test]
async fn duplicate_name_is_conflict() -> Result<()> {
    let db = connect_in_memory().await?;
    cafe::create(&db, &sample("Twin")).await?;

    let err = cafe::create(&db, &sample("Twin")).await.unwrap_err();
    assert!(matches!(err, ModelError::Conflict(_)), "got {err:?}");

    let twins = cafe::Entity::find()
        .filter(cafe::Column::Name.eq("Twin"))
        .all(&db)
        .await?;
    assert_eq!(twins.len(), 1);
    Ok(())
}

#[tokio::test]
async fn blank_name_is_rejected_before_insert() -> Result<()> {
    let db = connect_in_memory().await?;
    let err = cafe::create(&db, &sample("   ")).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    assert_eq!(cafe::Entity::find().count(&db).await?, 0);
    Ok(())
}

#[tokio::test]
async fn set_coffee_price_touches_only_price() -> Result<()> {
    let db = connect_in_memory().await?;
    let created = cafe::create(&db, &sample("Pricey")).await?;

    let updated = cafe::set_coffee_price(&db, created.id, "£3.10").await?.unwrap();
    assert_eq!(updated.coffee_price.as_deref(), Some("£3.10"));
    assert_eq!(
        cafe::Model { coffee_price: created.coffee_price.clone(), ..updated.clone() },
        created
    );

    let missing = cafe::set_coffee_price(&db, created.id + 100, "£1").await?;
    assert!(missing.is_none());
    assert!(cafe::set_coffee_price(&db, 3_000_000_000, "£1").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn in_memory_databases_are_isolated() -> Result<()> {
    let first = connect_in_memory().await?;
    let second = connect_in_memory().await?;
    cafe::create(&first, &sample(&format!("Solo {}", uuid::Uuid::new_v4()))).await?;
    assert_eq!(cafe::Entity::find().count(&second).await?, 0);
    Ok(())
}
