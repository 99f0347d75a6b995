#![cfg(test)]
use sea_orm::DatabaseConnection;
use models::cafe::NewCafe;

/// Fresh migrated in-memory store per test; no shared state between tests.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_in_memory().await
}

pub fn new_cafe(name: &str, location: &str) -> NewCafe {
    NewCafe {
        name: name.to_string(),
        map_url: format!("https://maps.example.com/{}", name.replace(' ', "+")),
        img_url: "https://img.example.com/cafe.jpg".to_string(),
        location: location.to_string(),
        seats: "20-30".to_string(),
        has_toilet: true,
        has_wifi: true,
        has_sockets: false,
        can_take_calls: true,
        coffee_price: Some("£2.80".to_string()),
    }
}
