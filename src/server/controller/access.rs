use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        access::{AffiliatedIdsDto, AffiliationCheckDto, AffiliationQueryDto, AuthorizedDto},
        api::ErrorDto,
    },
    server::{
        error::{access::AccessError, Error},
        model::{access::EntityRef, app::AppState, auth::CurrentUser},
        service::access::{ownership::CorporationRoleFilter, AccessService},
    },
};

pub static ACCESS_TAG: &str = "access";

/// Collect the requested IDs into kind-tagged refs, rejecting payloads that
/// name no id-space or carry zero IDs.
fn requested_entity_refs(payload: &AffiliationCheckDto) -> Result<Vec<EntityRef>, AccessError> {
    if payload.character_ids.is_none()
        && payload.corporation_ids.is_none()
        && payload.alliance_ids.is_none()
    {
        return Err(AccessError::MalformedRequest(
            "one of character_ids, corporation_ids, or alliance_ids must be supplied".to_string(),
        ));
    }

    let characters = payload
        .character_ids
        .iter()
        .flatten()
        .map(|&id| EntityRef::character(id));
    let corporations = payload
        .corporation_ids
        .iter()
        .flatten()
        .map(|&id| EntityRef::corporation(id));
    let alliances = payload
        .alliance_ids
        .iter()
        .flatten()
        .map(|&id| EntityRef::alliance(id));

    let requested: Vec<EntityRef> = characters.chain(corporations).chain(alliances).collect();

    if requested.is_empty() {
        return Err(AccessError::MalformedRequest(
            "no entity IDs supplied".to_string(),
        ));
    }

    Ok(requested)
}

fn corporation_role_filter(expression: Option<&str>) -> Option<CorporationRoleFilter> {
    expression.map(CorporationRoleFilter::parse)
}

/// Check whether the current user may act on every requested entity
#[utoipa::path(
    post,
    path = "/api/access/{permission}/check",
    tag = ACCESS_TAG,
    params(
        ("permission" = String, Path, description = "Permission name the requested action falls under")
    ),
    responses(
        (status = 200, description = "Every requested entity is covered", body = AuthorizedDto),
        (status = 400, description = "No entity IDs supplied", body = ErrorDto),
        (status = 401, description = "No authenticated user in request context", body = ErrorDto),
        (status = 403, description = "One or more requested entities are not covered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_affiliation(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(permission): Path<String>,
    Json(payload): Json<AffiliationCheckDto>,
) -> Result<impl IntoResponse, Error> {
    let requested = requested_entity_refs(&payload)?;
    let filter = corporation_role_filter(payload.corporation_roles.as_deref());

    let access_service = AccessService::new(&state.db, Some(&*state.cache));
    let authorized = access_service
        .authorize(user.user_id, &permission, filter.as_ref(), &requested)
        .await?;

    if !authorized {
        return Ok(AccessError::Forbidden(user.user_id).into_response());
    }

    Ok((StatusCode::OK, Json(AuthorizedDto { authorized: true })).into_response())
}

/// Get every entity ID the current user may act on for a permission
#[utoipa::path(
    post,
    path = "/api/access/{permission}/affiliated",
    tag = ACCESS_TAG,
    params(
        ("permission" = String, Path, description = "Permission name to resolve affiliations for")
    ),
    responses(
        (status = 200, description = "Resolved affiliation IDs by id-space", body = AffiliatedIdsDto),
        (status = 401, description = "No authenticated user in request context", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_affiliated_ids(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(permission): Path<String>,
    Json(payload): Json<AffiliationQueryDto>,
) -> Result<impl IntoResponse, Error> {
    let filter = corporation_role_filter(payload.corporation_roles.as_deref());

    let access_service = AccessService::new(&state.db, Some(&*state.cache));
    let resolved = access_service
        .resolve(user.user_id, &permission, filter.as_ref())
        .await?;

    Ok((StatusCode::OK, Json(AffiliatedIdsDto::from(&resolved))).into_response())
}
