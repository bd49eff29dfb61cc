//! Boundary validation shared by the HTTP handlers.
//!
//! Extractor failures (malformed JSON, non-numeric query values, bad path
//! segments) are turned into `invalid_request` domain errors so every 400
//! carries the same payload shape as the ones raised by the services.

use std::str::FromStr;

use actix_web::web;
use serde_json::json;

use crate::domain::{Error, Score};

/// Machine-readable reason attached to boundary validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reason {
    InvalidId,
    OutOfRange,
    InvalidChoice,
    MalformedBody,
    MalformedQuery,
}

impl Reason {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidId => "invalid_id",
            Self::OutOfRange => "out_of_range",
            Self::InvalidChoice => "invalid_choice",
            Self::MalformedBody => "malformed_body",
            Self::MalformedQuery => "malformed_query",
        }
    }
}

pub(crate) fn field_error(field: &str, reason: Reason, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "code": reason.as_str(),
    }))
}

/// Parse a path identifier, reporting `field` on failure.
pub(crate) fn parse_id<T>(raw: &str, field: &str) -> Result<T, Error>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse()
        .map_err(|err: T::Err| field_error(field, Reason::InvalidId, err.to_string()))
}

/// Validate an optional score bound.
pub(crate) fn parse_score(raw: Option<i64>, field: &str) -> Result<Option<Score>, Error> {
    raw.map(|value| {
        Score::new(value).map_err(|err| field_error(field, Reason::OutOfRange, err.to_string()))
    })
    .transpose()
}

/// Split a comma-separated list, dropping blank entries.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Register the extractor error handlers on an app or scope.
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        field_error("query", Reason::MalformedQuery, err.to_string()).into()
    }))
    .app_data(web::JsonConfig::default().error_handler(|err, _req| {
        field_error("body", Reason::MalformedBody, err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        field_error("path", Reason::InvalidId, err.to_string()).into()
    }));
}
