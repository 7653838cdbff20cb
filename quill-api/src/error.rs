use anyhow::{anyhow, Context};
use serde_json::json;

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Unknown error: {0}")]
    Unknown(String),

    #[error("Permission denied")]
    PermissionDenied,

    #[error("Edit time limit exceeded")]
    EditWindowExpired,

    #[error("Content is required")]
    EmptyContent,

    #[error("Null byte in string is not allowed {0:?}")]
    NullByteInString(String),

    #[error("Unknown reaction type {0:?}")]
    UnknownReactionType(String),

    #[error("Unknown comment status {0:?}")]
    UnknownStatus(String),

    #[error("Unknown role {0:?}")]
    UnknownRole(String),
}

impl Error {
    pub fn status_code(&self) -> http::StatusCode {
        use http::StatusCode;
        match self {
            Error::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::PermissionDenied => StatusCode::FORBIDDEN,
            Error::EditWindowExpired => StatusCode::BAD_REQUEST,
            Error::EmptyContent => StatusCode::BAD_REQUEST,
            Error::NullByteInString(_) => StatusCode::BAD_REQUEST,
            Error::UnknownReactionType(_) => StatusCode::BAD_REQUEST,
            Error::UnknownStatus(_) => StatusCode::BAD_REQUEST,
            Error::UnknownRole(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn contents(&self) -> Vec<u8> {
        serde_json::to_vec(&match self {
            Error::Unknown(msg) => json!({
                "message": msg,
                "type": "unknown",
            }),
            Error::PermissionDenied => json!({
                "message": "permission denied",
                "type": "permission-denied",
            }),
            Error::EditWindowExpired => json!({
                "message": "edit time limit exceeded",
                "type": "edit-window-expired",
            }),
            Error::EmptyContent => json!({
                "message": "content is required",
                "type": "empty-content",
            }),
            Error::NullByteInString(s) => json!({
                "message": "there was a null byte in argument string",
                "type": "null-byte",
                "string": s,
            }),
            Error::UnknownReactionType(t) => json!({
                "message": "unknown reaction type",
                "type": "unknown-reaction-type",
                "value": t,
            }),
            Error::UnknownStatus(s) => json!({
                "message": "unknown comment status",
                "type": "unknown-status",
                "value": s,
            }),
            Error::UnknownRole(r) => json!({
                "message": "unknown role",
                "type": "unknown-role",
                "value": r,
            }),
        })
        .expect("serializing error contents")
    }

    pub fn parse(body: &[u8]) -> anyhow::Result<Error> {
        let data: serde_json::Value =
            serde_json::from_slice(body).context("parsing error contents")?;
        let value = |typ: &str| -> anyhow::Result<String> {
            data.get("value")
                .and_then(|v| v.as_str())
                .map(String::from)
                .ok_or_else(|| anyhow!("error is of type {typ} but has no value"))
        };
        Ok(
            match data
                .get("type")
                .and_then(|t| t.as_str())
                .ok_or_else(|| anyhow!("error type is not a string"))?
            {
                "unknown" => Error::Unknown(String::from(
                    data.get("message")
                        .and_then(|msg| msg.as_str())
                        .unwrap_or(""),
                )),
                "permission-denied" => Error::PermissionDenied,
                "edit-window-expired" => Error::EditWindowExpired,
                "empty-content" => Error::EmptyContent,
                "null-byte" => Error::NullByteInString(String::from(
                    data.get("string").and_then(|s| s.as_str()).ok_or_else(|| {
                        anyhow!("error is a null-byte-in-string without a string")
                    })?,
                )),
                t @ "unknown-reaction-type" => Error::UnknownReactionType(value(t)?),
                t @ "unknown-status" => Error::UnknownStatus(value(t)?),
                t @ "unknown-role" => Error::UnknownRole(value(t)?),
                _ => return Err(anyhow!("error contents has unknown type")),
            },
        )
    }
}
