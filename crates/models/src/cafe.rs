use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, Set, SqlErr};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cafes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Payload for a new cafe; the store assigns `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCafe {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    #[serde(default)]
    pub coffee_price: Option<String>,
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    Ok(())
}

fn map_write_err(e: DbErr, name: &str) -> errors::ModelError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            errors::ModelError::Conflict(format!("cafe named '{name}' already exists"))
        }
        _ => errors::ModelError::Db(e.to_string()),
    }
}

/// Insert a cafe. A duplicate `name` surfaces as `Conflict` straight from the
/// unique index, so racing inserts leave exactly one row.
pub async fn create(db: &DatabaseConnection, input: &NewCafe) -> Result<Model, errors::ModelError> {
    validate_name(&input.name)?;
    let am = ActiveModel {
        id: NotSet,
        name: Set(input.name.clone()),
        map_url: Set(input.map_url.clone()),
        img_url: Set(input.img_url.clone()),
        location: Set(input.location.clone()),
        seats: Set(input.seats.clone()),
        has_toilet: Set(input.has_toilet),
        has_wifi: Set(input.has_wifi),
        has_sockets: Set(input.has_sockets),
        can_take_calls: Set(input.can_take_calls),
        coffee_price: Set(input.coffee_price.clone()),
    };
    am.insert(db).await.map_err(|e| map_write_err(e, &input.name))
}

/// Overwrite `coffee_price`; `None` when no row has `id`.
pub async fn set_coffee_price(
    db: &DatabaseConnection,
    id: i64,
    price: &str,
) -> Result<Option<Model>, errors::ModelError> {
    let Some(found) = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?
    else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    am.coffee_price = Set(Some(price.to_string()));
    let updated = am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}
