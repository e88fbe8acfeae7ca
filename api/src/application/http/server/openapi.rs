use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::application::http::{
    authentication::router::AuthenticationApiDoc, health::router::HealthApiDoc,
    recommendation::router::RecommendationApiDoc, root::RootApiDoc, user::router::UserApiDoc,
    vote::router::VoteApiDoc,
};

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Spoonderful API"
    ),
    modifiers(&BearerSecurity),
    nest(
        (path = "/recommendations", api = RecommendationApiDoc),
        (path = "/user", api = UserApiDoc),
        (path = "/vote", api = VoteApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

/// Full document: the nested groups plus the routes that live at the top level.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
        .merge_from(RootApiDoc::openapi())
        .merge_from(AuthenticationApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = api_doc();

        for path in [
            "/",
            "/register",
            "/login",
            "/user",
            "/user/votes",
            "/vote",
            "/recommendations/simple",
            "/recommendations/varied",
            "/health/live",
            "/health/ready",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
