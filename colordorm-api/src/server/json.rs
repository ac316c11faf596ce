use crate::server::ServerError;
use axum::{
    Json as AxumJson,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use axum_extra::TypedHeader;
use headers::ContentType;
use serde::{Serialize, de::DeserializeOwned};

#[derive(FromRequest, Debug, Clone, Copy, Default)]
#[from_request(via(AxumJson), rejection(ServerError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(json) => (TypedHeader(ContentType::json()), json).into_response(),
            Err(err) => ServerError::JsonResponse(err).into_response(),
        }
    }
}

/// A request payload whose fields are all optional on the wire and checked for
/// presence after parsing.
pub trait Validate: DeserializeOwned {
    type Output;

    /// Human readable list of the required fields, used in the rejection.
    const REQUIRED_FIELDS: &'static str;

    fn validate(self) -> Option<Self::Output>;
}

/// JSON body extractor that parses a `B` and rejects with
/// [`ServerError::MissingFields`] when the body is `null` or lacks a required
/// field.
pub struct Validated<B: Validate>(pub B::Output);

impl<S, B> FromRequest<S> for Validated<B>
where
    S: Send + Sync,
    B: Validate + Send,
    B::Output: Send,
{
    type Rejection = ServerError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Option<B>>::from_request(request, state).await?;

        body.and_then(B::validate)
            .map(Validated)
            .ok_or(ServerError::MissingFields(B::REQUIRED_FIELDS))
    }
}
