use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::people::{Person, PersonInput};
use tracing::{debug, warn};

use crate::{errors::JsonApiError, observability, routes::ServerState};

#[utoipa::path(
    get, path = "/api/people", tag = "people",
    responses((status = 200, description = "All people, sorted by last name", body = [crate::openapi::PersonDoc]))
)]
pub async fn list_people(State(state): State<ServerState>) -> Json<Vec<Person>> {
    let people = state.people.list_all().await;
    observability::record::<()>("list", &Ok(()));
    debug!(count = people.len(), "list people");
    Json(people)
}

#[utoipa::path(
    get, path = "/api/people/{person_id}", tag = "people",
    params(("person_id" = String, Path, description = "Last name of the person")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::PersonDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_person(
    State(state): State<ServerState>,
    Path(person_id): Path<String>,
) -> Result<Json<Person>, JsonApiError> {
    let res = state.people.get(&person_id).await;
    observability::record("get", &res);
    res.map(Json).map_err(JsonApiError::from)
}

#[utoipa::path(
    post, path = "/api/people", tag = "people",
    request_body = crate::openapi::PersonInputDoc,
    responses(
        (status = 201, description = "Created", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing person_id"),
        (status = 406, description = "Already exists")
    )
)]
pub async fn create_person(
    State(state): State<ServerState>,
    Json(input): Json<PersonInput>,
) -> Result<(StatusCode, String), JsonApiError> {
    let res = state.people.create(input).await;
    observability::record("create", &res);
    match res {
        Ok(person) => Ok((
            StatusCode::CREATED,
            format!("{} successfully created", person.person_id),
        )),
        Err(e) => {
            warn!(err = %e, "create person rejected");
            Err(e.into())
        }
    }
}

#[utoipa::path(
    put, path = "/api/people/{person_id}", tag = "people",
    params(("person_id" = String, Path, description = "Last name of the person")),
    request_body = crate::openapi::PersonInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::PersonDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_person(
    State(state): State<ServerState>,
    Path(person_id): Path<String>,
    Json(input): Json<PersonInput>,
) -> Result<Json<Person>, JsonApiError> {
    let res = state.people.update(&person_id, input).await;
    observability::record("update", &res);
    res.map(Json).map_err(JsonApiError::from)
}

#[utoipa::path(
    delete, path = "/api/people/{person_id}", tag = "people",
    params(("person_id" = String, Path, description = "Last name of the person")),
    responses(
        (status = 200, description = "Deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_person(
    State(state): State<ServerState>,
    Path(person_id): Path<String>,
) -> Result<(StatusCode, String), JsonApiError> {
    let res = state.people.delete(&person_id).await;
    observability::record("delete", &res);
    res?;
    Ok((StatusCode::OK, format!("{person_id} successfully deleted")))
}
