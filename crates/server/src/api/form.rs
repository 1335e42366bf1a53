use axum::{
    extract::{FromRequest, Multipart, Request},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form,
};
use std::collections::HashMap;
use tracing::debug;

use filecompress_core::UploadedFile;

/// Fields of a urlencoded or multipart form body.
///
/// Text fields and file parts are kept apart; for repeated names the first
/// occurrence wins. A body that is neither form type yields no fields, so
/// handlers report the missing field rather than a content-type error.
#[derive(Debug, Default)]
pub struct FormFields {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl FormFields {
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn take_text(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }

    async fn from_multipart(mut multipart: Multipart) -> Result<Self, Response> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(IntoResponse::into_response)?
        {
            let name = field.name().unwrap_or("").to_string();

            // a part with a filename attribute is a file, even if empty
            match field.file_name().map(str::to_string) {
                Some(filename) => {
                    let data = field.bytes().await.map_err(IntoResponse::into_response)?;
                    form.files.entry(name).or_insert(UploadedFile {
                        filename,
                        data: data.to_vec(),
                    });
                }
                None => {
                    let text = field.text().await.map_err(IntoResponse::into_response)?;
                    form.fields.entry(name).or_insert(text);
                }
            }
        }

        Ok(form)
    }
}

impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            return Self::from_multipart(multipart).await;
        }

        match Form::<Vec<(String, String)>>::from_request(req, state).await {
            Ok(Form(pairs)) => {
                let mut form = Self::default();
                for (name, value) in pairs {
                    form.fields.entry(name).or_insert(value);
                }
                Ok(form)
            }
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                Err(rejection.into_response())
            }
            Err(rejection) => {
                debug!(reason = %rejection.body_text(), "Request body is not a form");
                Ok(Self::default())
            }
        }
    }
}
