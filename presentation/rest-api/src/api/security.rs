use std::sync::Arc;

use poem::Request;
use poem_openapi::SecurityScheme;

use business::domain::shared::value_objects::UserId;
use business::domain::user::services::TokenService;

/// Bearer access token issued by `POST /users/login`.
///
/// Resolves to the id of the authenticated user. The token service is read
/// from request data, registered once on the route tree at start-up.
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "bearer_checker")]
pub struct BearerAuth(pub UserId);

async fn bearer_checker(req: &Request, bearer: poem_openapi::auth::Bearer) -> Option<UserId> {
    let Some(tokens) = req.data::<Arc<dyn TokenService>>() else {
        tracing::error!("Token service is not registered on the route");
        return None;
    };

    resolve_user(tokens.as_ref(), &bearer.token)
}

fn resolve_user(tokens: &dyn TokenService, token: &str) -> Option<UserId> {
    match tokens.verify(token) {
        Ok(user_id) => Some(user_id),
        Err(e) => {
            tracing::warn!("Bearer auth failed: {e}");
            None
        }
    }
}
