//! Request extractors that validate input before a handler runs.
//!
//! Both reject with [`AppError`] wrapping [`CoreError::Validation`], so a
//! malformed request is answered with 400 and never reaches a service.

use assetdesk_core::error::CoreError;
use assetdesk_core::types::DbId;
use assetdesk_core::validation::parse_positive_id;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has been decoded and passed its `validator` rules.
///
/// Decoding failures (syntax, wrong types, missing or unknown fields, missing
/// content type) are reported as a single `body` entry; rule violations as
/// one entry per field.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| CoreError::invalid("body", rejection.body_text()))?;
        value.validate().map_err(CoreError::from)?;
        Ok(Self(value))
    }
}

/// Single positive integer path parameter (`/{id}`, `/client/{client_id}`).
///
/// The validation entry is named after the route's parameter.
#[derive(Debug, Clone, Copy)]
pub struct PathId(pub DbId);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| CoreError::invalid("id", rejection.body_text()))?;
        let (name, raw) = params
            .last()
            .ok_or_else(|| CoreError::invalid("id", "missing path parameter"))?;
        Ok(Self(parse_positive_id(name, raw)?))
    }
}
