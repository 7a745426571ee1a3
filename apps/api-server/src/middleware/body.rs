//! Request body extractor for resource writes.

use std::ops::Deref;

use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, web};
use futures::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

use crate::middleware::error::AppError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Write payload accepted as JSON or as an urlencoded form.
///
/// An absent or blank body yields `T::default()`, so a missing field is
/// reported by validation instead of failing extraction. Only a JSON body
/// that is present but unparseable is rejected here, with a 400.
#[derive(Debug)]
pub struct Input<T>(pub T);

impl<T> Deref for Input<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for Input<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if req.content_type() == FORM_CONTENT_TYPE {
            let form = web::Form::<T>::from_request(req, payload);
            return Box::pin(async move {
                let form = form.await?;
                Ok::<_, actix_web::Error>(Input(form.into_inner()))
            });
        }

        // Anything else is read as JSON regardless of the declared type.
        let body = web::Bytes::from_request(req, payload);
        Box::pin(async move {
            let bytes = body.await?;
            if bytes.trim_ascii().is_empty() {
                return Ok::<_, actix_web::Error>(Input(T::default()));
            }

            serde_json::from_slice(&bytes).map(Input).map_err(|err| {
                tracing::debug!(error = %err, "Rejected JSON payload");
                AppError::BadRequest(format!("Malformed JSON body: {err}")).into()
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, http::header, test};
    use scribe_shared::dto::PostRequest;

    async fn extract(req: test::TestRequest) -> Result<Input<PostRequest>, actix_web::Error> {
        let (req, mut payload) = req.to_http_parts();
        Input::<PostRequest>::from_request(&req, &mut payload).await
    }

    #[actix_rt::test]
    async fn test_blank_bodies_default() {
        for req in [
            test::TestRequest::post(),
            test::TestRequest::post().insert_header(header::ContentType::json()),
            test::TestRequest::post().set_payload("  \n"),
        ] {
            assert!(extract(req).await.unwrap().title.is_none());
        }
    }

    #[actix_rt::test]
    async fn test_form_and_json() {
        let form = test::TestRequest::post()
            .insert_header(header::ContentType::form_url_encoded())
            .set_payload("title=Hola+mundo");
        assert_eq!(extract(form).await.unwrap().title.as_deref(), Some("Hola mundo"));

        let untyped = test::TestRequest::post().set_payload(r#"{"title":"sin tipo"}"#);
        assert_eq!(extract(untyped).await.unwrap().title.as_deref(), Some("sin tipo"));
    }

    #[actix_rt::test]
    async fn test_malformed_json() {
        let req = test::TestRequest::post()
            .insert_header(header::ContentType::json())
            .set_payload("{\"title\":");
        let err = extract(req).await.unwrap_err();
        assert_eq!(err.as_response_error().status_code(), StatusCode::BAD_REQUEST);
    }
}
