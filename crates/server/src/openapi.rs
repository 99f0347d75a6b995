use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CafeDoc {
    pub id: i64,
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

#[derive(ToSchema)]
pub struct NewCafeDoc {
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

#[derive(ToSchema)]
pub struct AckDoc { pub success: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub detail: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::cafes::list_cafes,
        crate::routes::cafes::random_cafe,
        crate::routes::cafes::all_cafes,
        crate::routes::cafes::search_cafes,
        crate::routes::cafes::add_cafe,
        crate::routes::cafes::update_price,
        crate::routes::cafes::report_closed,
    ),
    components(
        schemas(
            HealthResponse,
            CafeDoc,
            NewCafeDoc,
            AckDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "cafes")
    )
)]
pub struct ApiDoc;
