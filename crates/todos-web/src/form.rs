//! Form body extraction for the mutating endpoints.
//!
//! Browsers submit the same fields either urlencoded or as
//! `multipart/form-data`, depending on the form's `enctype`. [`FormBody`]
//! accepts both and yields the fields as a flat name-to-value map.

use std::collections::BTreeMap;

use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header;
use axum::Form;

use crate::error::WebError;

/// Raw form fields, by name. A repeated name keeps its last value.
pub type FormFields = BTreeMap<String, String>;

/// Content type prefix that selects the multipart reader.
const MULTIPART: &str = "multipart/form-data";

/// Form fields read from either a urlencoded or a multipart body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBody(pub FormFields);

impl<S> FromRequest<S> for FormBody
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_multipart(&req) {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| WebError::InvalidForm(e.body_text()))?;
            read_multipart(multipart).await.map(Self)
        } else {
            let Form(fields) = Form::<FormFields>::from_request(req, state)
                .await
                .map_err(|e| WebError::InvalidForm(e.body_text()))?;
            Ok(Self(fields))
        }
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|ct| {
            ct.get(..MULTIPART.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(MULTIPART))
        })
}

/// Collect every named part as text. Unnamed parts are skipped.
async fn read_multipart(mut multipart: Multipart) -> Result<FormFields, WebError> {
    let mut fields = FormFields::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| WebError::InvalidForm(e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| WebError::InvalidForm(e.body_text()))?;
        fields.insert(name, value);
    }
    Ok(fields)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;

    use super::*;

    fn request(content_type: Option<&str>, body: &str) -> Request {
        let mut builder = Request::builder().method("PUT").uri("/all");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        builder.body(Body::from(body.to_owned())).unwrap()
    }

    #[tokio::test]
    async fn reads_urlencoded_fields() {
        let req = request(
            Some("application/x-www-form-urlencoded"),
            "_action=edit-title&new-title=Walk+dog",
        );
        let FormBody(fields) = FormBody::from_request(req, &()).await.unwrap();
        assert_eq!(fields.get("_action").unwrap(), "edit-title");
        assert_eq!(fields.get("new-title").unwrap(), "Walk dog");
    }

    #[tokio::test]
    async fn reads_multipart_fields() {
        let body = "--XyZ\r\n\
                    Content-Disposition: form-data; name=\"_action\"\r\n\r\n\
                    toggle-completed\r\n\
                    --XyZ\r\n\
                    Content-Disposition: form-data; name=\"completed\"\r\n\r\n\
                    on\r\n\
                    --XyZ--\r\n";
        let req = request(Some("multipart/form-data; boundary=XyZ"), body);
        let FormBody(fields) = FormBody::from_request(req, &()).await.unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("_action").unwrap(), "toggle-completed");
        assert_eq!(fields.get("completed").unwrap(), "on");
    }

    #[tokio::test]
    async fn multipart_without_boundary_is_invalid() {
        let req = request(Some("multipart/form-data"), "");
        let err = FormBody::from_request(req, &()).await.unwrap_err();
        assert!(matches!(err, WebError::InvalidForm(_)));
    }

    #[tokio::test]
    async fn missing_content_type_is_invalid() {
        let req = request(None, "_action=toggle-all");
        let err = FormBody::from_request(req, &()).await.unwrap_err();
        assert!(matches!(err, WebError::InvalidForm(_)));
    }
}
