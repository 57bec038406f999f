pub const NO_CHAIN: &str = "Word chain not found";

/// The boundary response object: `data` carries the chain on success, the
/// no-chain sentinel when the search exhausted, and null on failures.
#[derive(serde::Serialize, Debug, PartialEq, Eq)]
pub struct Response {
    pub success: bool,
    pub error: String,
    pub data: Option<ChainData>,
}

#[derive(serde::Serialize, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum ChainData {
    Chain(Vec<String>),
    Message(String),
}

impl Response {
    pub fn chain(words: Vec<String>) -> Self {
        Self {
            success: true,
            error: String::new(),
            data: Some(ChainData::Chain(words)),
        }
    }

    pub fn no_chain() -> Self {
        Self {
            success: true,
            error: String::new(),
            data: Some(ChainData::Message(NO_CHAIN.to_owned())),
        }
    }

    pub fn validation(error: &crate::validate::ValidationError) -> Self {
        Self {
            success: false,
            error: error.to_string(),
            data: None,
        }
    }

    pub fn internal(error: &std::io::Error) -> Self {
        Self {
            success: false,
            error: format!("internal error: {error}"),
            data: None,
        }
    }
}

impl From<crate::search::Outcome> for Response {
    fn from(outcome: crate::search::Outcome) -> Self {
        match outcome {
            crate::search::Outcome::Found(words) => Self::chain(words),
            crate::search::Outcome::NotFound => Self::no_chain(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_a_chain() {
        let response = Response::chain(vec!["cat".to_owned(), "cot".to_owned()]);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "success": true, "error": "", "data": ["cat", "cot"] })
        );
    }

    #[test]
    fn serializes_the_no_chain_sentinel() {
        assert_eq!(
            serde_json::to_value(Response::no_chain()).unwrap(),
            json!({ "success": true, "error": "", "data": "Word chain not found" })
        );
    }

    #[test]
    fn serializes_failures_with_null_data() {
        let response = Response::validation(&crate::validate::ValidationError::SameWord);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "success": false,
                "error": "firstWord and lastWord must be different",
                "data": null,
            })
        );
    }
}
