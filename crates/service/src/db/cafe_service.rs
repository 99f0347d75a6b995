use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder,
    QuerySelect,
};
use models::cafe::{self, Entity as CafeEntity, NewCafe};
use crate::{errors::ServiceError, pagination::Page};

/// One page of cafes in id order.
pub async fn list_cafes(db: &DatabaseConnection, page: Page) -> Result<Vec<cafe::Model>, ServiceError> {
    let (offset, limit) = page.normalize();
    let rows = CafeEntity::find()
        .order_by_asc(cafe::Column::Id)
        .offset(offset)
        .limit(limit)
        .all(db)
        .await?;
    Ok(rows)
}

/// Every cafe, unpaged, in id order.
pub async fn all_cafes(db: &DatabaseConnection) -> Result<Vec<cafe::Model>, ServiceError> {
    let rows = CafeEntity::find().order_by_asc(cafe::Column::Id).all(db).await?;
    Ok(rows)
}

/// Uniformly random cafe; `None` on an empty table.
pub async fn random_cafe(db: &DatabaseConnection) -> Result<Option<cafe::Model>, ServiceError> {
    // Single statement, so a concurrent delete cannot empty the pick of a non-empty table.
    let picked = CafeEntity::find()
        .order_by(Expr::cust("RANDOM()"), Order::Asc)
        .one(db)
        .await?;
    Ok(picked)
}

/// Exact, case-sensitive match on `location`.
pub async fn find_by_location(db: &DatabaseConnection, location: &str) -> Result<Vec<cafe::Model>, ServiceError> {
    let rows = CafeEntity::find()
        .filter(cafe::Column::Location.eq(location))
        .order_by_asc(cafe::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Create a cafe; duplicate names come back as `Conflict`.
pub async fn create_cafe(db: &DatabaseConnection, input: &NewCafe) -> Result<cafe::Model, ServiceError> {
    let created = cafe::create(db, input).await?;
    Ok(created)
}

/// Overwrite only `coffee_price`; `None` when no row has `id`.
pub async fn update_price(db: &DatabaseConnection, id: i64, new_price: &str) -> Result<Option<cafe::Model>, ServiceError> {
    let updated = cafe::set_coffee_price(db, id, new_price).await?;
    Ok(updated)
}

/// Delete a cafe; returns true if a row was removed.
pub async fn delete_cafe(db: &DatabaseConnection, id: i64) -> Result<bool, ServiceError> {
    let res = CafeEntity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, new_cafe};

    async fn seed(db: &DatabaseConnection, n: usize) -> Result<Vec<cafe::Model>, ServiceError> {
        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            let loc = if i % 2 == 0 { "Shoreditch" } else { "Peckham" };
            out.push(create_cafe(db, &new_cafe(&format!("Cafe {i}"), loc)).await?);
        }
        Ok(out)
    }

    #[tokio::test]
    async fn list_respects_skip_and_limit() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let seeded = seed(&db, 7).await?;

        let page = list_cafes(&db, Page::new(2, 3)).await?;
        let ids: Vec<i64> = page.iter().map(|c| c.id).collect();
        let expected: Vec<i64> = seeded[2..5].iter().map(|c| c.id).collect();
        assert_eq!(ids, expected);

        let tail = list_cafes(&db, Page::new(5, 10)).await?;
        assert_eq!(tail.len(), 2);

        assert!(list_cafes(&db, Page::new(50, 10)).await?.is_empty());
        assert!(list_cafes(&db, Page::new(0, 0)).await?.is_empty());
        assert_eq!(list_cafes(&db, Page::new(u64::MAX, u64::MAX)).await?.len(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn default_page_caps_at_ten() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed(&db, 12).await?;
        assert_eq!(list_cafes(&db, Page::default()).await?.len(), 10);
        assert_eq!(all_cafes(&db).await?.len(), 12);
        Ok(())
    }

    #[tokio::test]
    async fn random_is_none_on_empty_and_member_otherwise() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(random_cafe(&db).await?.is_none());

        let seeded = seed(&db, 4).await?;
        for _ in 0..20 {
            let picked = random_cafe(&db).await?.unwrap();
            assert!(seeded.contains(&picked));
        }
        Ok(())
    }

    #[tokio::test]
    async fn random_keeps_picking_while_rows_are_deleted() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let seeded = seed(&db, 6).await?;
        let mut left = seeded.len();
        while left > 0 {
            let picked = random_cafe(&db)
                .await?
                .expect("non-empty table always yields a cafe");
            assert!(all_cafes(&db).await?.contains(&picked));
            assert!(delete_cafe(&db, picked.id).await?);
            left -= 1;
        }
        assert!(random_cafe(&db).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn location_match_is_exact() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed(&db, 5).await?;

        let hits = find_by_location(&db, "Peckham").await?;
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|c| c.location == "Peckham"));

        assert!(find_by_location(&db, "peckham").await?.is_empty());
        assert!(find_by_location(&db, "Peckham ").await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn update_and_delete_by_id() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let c = create_cafe(&db, &new_cafe("Lone", "Hackney")).await?;

        let updated = update_price(&db, c.id, "£3.00").await?.unwrap();
        assert_eq!(updated.coffee_price.as_deref(), Some("£3.00"));
        assert_eq!(updated.name, c.name);

        assert!(update_price(&db, c.id + 1, "£1").await?.is_none());

        assert!(delete_cafe(&db, c.id).await?);
        assert!(all_cafes(&db).await?.is_empty());
        assert!(!delete_cafe(&db, c.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn racing_creates_leave_one_winner() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let input = new_cafe("Contested", "Soho");
        let (a, b) = tokio::join!(create_cafe(&db, &input), create_cafe(&db, &input));

        let conflicts = [&a, &b]
            .iter()
            .filter(|r| matches!(r, Err(ServiceError::Conflict(_))))
            .count();
        assert_eq!(conflicts, 1);
        assert!(a.is_ok() || b.is_ok());
        assert_eq!(all_cafes(&db).await?.len(), 1);
        Ok(())
    }
}
