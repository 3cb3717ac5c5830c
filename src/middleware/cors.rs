use actix_cors::Cors;
use actix_web::http::header;

const ALLOWED_METHODS: [&str; 6] = ["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"];
const MAX_AGE_SECS: usize = 86400;

/// Cross-origin policy for the front end: an explicit origin allow-list, no credentials.
///
/// Preflight requests are answered here for every route; requests from other
/// origins are refused before they reach a handler.
pub fn policy<I, S>(origins: I) -> Cors
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    origins
        .into_iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin.as_ref()))
        .allowed_methods(ALLOWED_METHODS)
        .allowed_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(MAX_AGE_SECS)
}
