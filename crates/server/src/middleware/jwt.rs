use axum::{
    Extension,
    body::Body,
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{
    abstract_trait::{AuthUser, DynJwtService},
    errors::HttpError,
};

/// Verifies the bearer credential (cookie or Authorization header) and
/// stashes the resulting [`AuthUser`] in the request extensions.
pub async fn auth_middleware(
    cookie_jar: CookieJar,
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, HttpError> {
    let token = cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned))
        })
        .ok_or_else(|| {
            HttpError::Unauthorized("You are not logged in, please provide token".into())
        })?;

    let auth_user = jwt
        .verify_token(&token)
        .map_err(|_| HttpError::Unauthorized("Invalid or expired token".into()))?;

    req.extensions_mut().insert(auth_user);

    Ok(next.run(req).await)
}

/// Rejects non-admin callers. Must run after [`auth_middleware`].
pub async fn admin_middleware(
    Extension(auth): Extension<AuthUser>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, HttpError> {
    if !auth.is_admin {
        return Err(HttpError::Forbidden("Administrator access required".into()));
    }

    Ok(next.run(req).await)
}
