use std::collections::HashMap;

use axum::extract::{FromRequest, Query, Request};

use crate::error::{AppError, ErrorBody};
use crate::event::HttpEvent;

/// Builds an [`HttpEvent`] from a plain HTTP request so the same handlers can
/// run behind the bundled axum server. Rejections are rendered in the handlers'
/// own error format.
impl<S> FromRequest<S> for HttpEvent
where
    S: Send + Sync,
{
    type Rejection = crate::event::HttpResponse;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let http_method = req.method().as_str().to_owned();

        let query_string_parameters = match req.uri().query() {
            None => None,
            Some(_) => {
                let Query(params) = Query::<HashMap<String, String>>::try_from_uri(req.uri())
                    .map_err(|e| AppError::Validation(e.body_text()))?;
                Some(params)
            }
        };

        let body = String::from_request(req, state).await.map_err(|e| {
            crate::event::HttpResponse::json(e.status(), &ErrorBody { error: e.body_text() })
        })?;

        Ok(HttpEvent {
            http_method: Some(http_method),
            body: (!body.is_empty()).then_some(body),
            query_string_parameters,
            is_base64_encoded: false,
        })
    }
}
