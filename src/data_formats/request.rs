use serde::{Deserialize, Serialize};

use crate::errors::RequestError;

// Fields are optional so a missing one becomes a 400 instead of an extractor rejection.

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct CommentRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct VoteRequest {
    #[serde(default)]
    pub inc_votes: Option<i64>,
}

/// A comment body that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub username: String,
    pub body: String,
}

impl CommentRequest {
    pub fn validate(self) -> Result<NewComment, RequestError> {
        match (self.username, self.body) {
            (Some(username), Some(body))
                if !username.trim().is_empty() && !body.trim().is_empty() =>
            {
                Ok(NewComment { username, body })
            }
            _ => Err(RequestError::BadRequest),
        }
    }
}

impl VoteRequest {
    pub fn validate(self) -> Result<i64, RequestError> {
        self.inc_votes.ok_or(RequestError::BadRequest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_requires_username_and_body() {
        let request: CommentRequest = serde_json::from_str(r#"{"body": "hi"}"#).unwrap();
        assert!(matches!(request.validate(), Err(RequestError::BadRequest)));

        let request: CommentRequest =
            serde_json::from_str(r#"{"username": "butter_bridge"}"#).unwrap();
        assert!(matches!(request.validate(), Err(RequestError::BadRequest)));

        let request: CommentRequest =
            serde_json::from_str(r#"{"username": "butter_bridge", "body": "  "}"#).unwrap();
        assert!(matches!(request.validate(), Err(RequestError::BadRequest)));
    }

    #[test]
    fn extra_comment_fields_are_ignored() {
        let request: CommentRequest = serde_json::from_str(
            r#"{"username": "butter_bridge", "body": "x", "votes": 100}"#,
        )
        .unwrap();
        assert_eq!(
            request.validate().unwrap(),
            NewComment {
                username: "butter_bridge".to_string(),
                body: "x".to_string(),
            }
        );
    }

    #[test]
    fn vote_requires_inc_votes() {
        let request: VoteRequest = serde_json::from_str("{}").unwrap();
        assert!(matches!(request.validate(), Err(RequestError::BadRequest)));

        let request: VoteRequest = serde_json::from_str(r#"{"inc_votes": -15}"#).unwrap();
        assert_eq!(request.validate().unwrap(), -15);

        assert!(serde_json::from_str::<VoteRequest>(r#"{"inc_votes": "cat"}"#).is_err());
    }
}
