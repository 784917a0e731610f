//! Validation helpers for request path parameters and bodies.
//!
//! Parameters and bodies are checked independently so that an endpoint
//! receiving both can tell the client which part was wrong.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::codec;

/// Part of the request a failure was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RequestPart {
    Params,
    Body,
}

/// Single field-level validation failure reported to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldFailure {
    pub location: RequestPart,
    /// Offending field, absent when the whole part could not be decoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FieldFailure {
    /// Failure for a part that could not be decoded at all (bad JSON, missing field, wrong type).
    pub fn malformed(location: RequestPart, message: impl Into<String>) -> Self {
        Self {
            location,
            field: None,
            code: "malformed".into(),
            message: Some(message.into()),
        }
    }

    /// Flatten [`ValidationErrors`] into failures sorted by field name.
    pub fn from_validation_errors(location: RequestPart, errors: &ValidationErrors) -> Vec<Self> {
        let mut failures = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                let field = field.to_string();
                errors.iter().map(move |error| Self {
                    location,
                    field: Some(field.clone()),
                    code: error.code.to_string(),
                    message: error.message.as_ref().map(ToString::to_string),
                })
            })
            .collect::<Vec<_>>();
        failures.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
        failures
    }
}

/// Outcome of validating the parameters and/or body of a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestValidationError {
    #[error("Invalid request parameter(s)")]
    Params(Vec<FieldFailure>),
    #[error("Invalid request body")]
    Body(Vec<FieldFailure>),
    #[error("Invalid request body and parameter(s)")]
    Both {
        params: Vec<FieldFailure>,
        body: Vec<FieldFailure>,
    },
}

impl RequestValidationError {
    /// Every field failure, parameters first.
    pub fn into_failures(self) -> Vec<FieldFailure> {
        match self {
            RequestValidationError::Params(failures) | RequestValidationError::Body(failures) => {
                failures
            }
            RequestValidationError::Both { mut params, body } => {
                params.extend(body);
                params
            }
        }
    }
}

/// Path parameters of every endpoint addressing a single game or ad.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct IdParams {
    pub id: String,
}

impl Validate for IdParams {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Err(e) = validate_identifier(&self.id) {
            errors.add("id", e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Check decoded path parameters. `raw` carries the extractor's rejection text on failure.
pub fn validate_params<P: Validate>(raw: Result<P, String>) -> Result<P, Vec<FieldFailure>> {
    let params = raw.map_err(|message| vec![FieldFailure::malformed(RequestPart::Params, message)])?;
    params
        .validate()
        .map_err(|errors| FieldFailure::from_validation_errors(RequestPart::Params, &errors))?;
    Ok(params)
}

/// Decode a JSON body into `B` and check it.
pub fn parse_body<B>(raw: Result<serde_json::Value, String>) -> Result<B, Vec<FieldFailure>>
where
    B: DeserializeOwned + Validate,
{
    let value = raw.map_err(|message| vec![FieldFailure::malformed(RequestPart::Body, message)])?;
    let body = serde_json::from_value::<B>(value)
        .map_err(|err| vec![FieldFailure::malformed(RequestPart::Body, err.to_string())])?;
    body.validate()
        .map_err(|errors| FieldFailure::from_validation_errors(RequestPart::Body, &errors))?;
    Ok(body)
}

/// Wrap a parameters-only check into a [`RequestValidationError`].
pub fn require_params<P>(params: Result<P, Vec<FieldFailure>>) -> Result<P, RequestValidationError> {
    params.map_err(RequestValidationError::Params)
}

/// Merge independent parameters and body checks, reporting which part failed.
pub fn combine<P, B>(
    params: Result<P, Vec<FieldFailure>>,
    body: Result<B, Vec<FieldFailure>>,
) -> Result<(P, B), RequestValidationError> {
    match (params, body) {
        (Ok(params), Ok(body)) => Ok((params, body)),
        (Err(params), Err(body)) => Err(RequestValidationError::Both { params, body }),
        (Err(params), Ok(_)) => Err(RequestValidationError::Params(params)),
        (Ok(_), Err(body)) => Err(RequestValidationError::Body(body)),
    }
}

/// Validates that an identifier is present and not blank.
pub fn validate_identifier(id: &str) -> Result<(), ValidationError> {
    if id.trim().is_empty() {
        let mut err = ValidationError::new("identifier_empty");
        err.message = Some("Identifier must not be empty".into());
        return Err(err);
    }
    Ok(())
}

/// Validates that an hour is a zero-padded `HH:MM` string within a day.
pub fn validate_hour(hour: &str) -> Result<(), ValidationError> {
    codec::to_minutes(hour).map(|_| ()).map_err(|_| {
        let mut err = ValidationError::new("hour_format");
        err.message = Some(format!("`{hour}` must be a zero-padded HH:MM hour").into());
        err
    })
}

/// Validates that a week day lies in `0..=6` (Sunday to Saturday).
pub fn validate_week_day(day: u8) -> Result<(), ValidationError> {
    if day > 6 {
        let mut err = ValidationError::new("week_day_range");
        err.message = Some(format!("Week day must be between 0 and 6 (got {day})").into());
        return Err(err);
    }
    Ok(())
}
