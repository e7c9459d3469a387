use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// A person as returned by the API.
#[derive(ToSchema)]
pub struct PersonDoc {
    /// Last name, the record key.
    pub person_id: String,
    pub fname: Option<String>,
    /// `YYYY-MM-DD HH:MM:SS`, local time of the last create/update.
    pub timestamp: String,
}

#[derive(ToSchema)]
pub struct PersonInputDoc {
    /// Required on create, ignored on update.
    pub person_id: Option<String>,
    pub fname: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::people::list_people,
        crate::routes::people::get_person,
        crate::routes::people::create_person,
        crate::routes::people::update_person,
        crate::routes::people::delete_person,
    ),
    components(
        schemas(
            HealthResponse,
            PersonDoc,
            PersonInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "people")
    )
)]
pub struct ApiDoc;
