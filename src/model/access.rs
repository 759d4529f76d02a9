use serde::{Deserialize, Serialize};

/// Request body for batch authorization checks.
///
/// At least one of the three id lists must be supplied; the request is
/// rejected as malformed otherwise. `corporation_roles` is a pipe-delimited
/// list of acceptable in-game corporate roles ("Director" always qualifies)
/// used to extend the caller's owned set with corporations.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AffiliationCheckDto {
    pub character_ids: Option<Vec<i64>>,
    pub corporation_ids: Option<Vec<i64>>,
    pub alliance_ids: Option<Vec<i64>>,
    pub corporation_roles: Option<String>,
}

/// Request body for retrieving the full resolved id set.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AffiliationQueryDto {
    pub corporation_roles: Option<String>,
}

/// A resolved affiliation set split by id-space, suitable for pre-filtering
/// listing queries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AffiliatedIdsDto {
    pub character_ids: Vec<i64>,
    pub corporation_ids: Vec<i64>,
    pub alliance_ids: Vec<i64>,
}

/// Outcome of a batch authorization check.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AuthorizedDto {
    pub authorized: bool,
}
