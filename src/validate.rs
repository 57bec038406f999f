#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("firstWord and lastWord are required")]
    Missing,
    #[error("firstWord and lastWord must be strings")]
    NotString,
    #[error("firstWord and lastWord can only contain letters")]
    NotAlphabetic,
    #[error("firstWord and lastWord must be different")]
    SameWord,
}

/// Checks the raw request parameters and returns the two words lower-cased.
/// Rules run in order and the first failure wins; the two words may differ
/// in length.
pub fn validate(params: &serde_json::Value) -> Result<(String, String), ValidationError> {
    let (Some(first), Some(last)) = (params.get("firstWord"), params.get("lastWord")) else {
        return Err(ValidationError::Missing);
    };

    let (Some(first), Some(last)) = (first.as_str(), last.as_str()) else {
        return Err(ValidationError::NotString);
    };

    if [first, last]
        .iter()
        .any(|word| word.is_empty() || !word.bytes().all(|b| b.is_ascii_alphabetic()))
    {
        return Err(ValidationError::NotAlphabetic);
    }

    let first = first.to_ascii_lowercase();
    let last = last.to_ascii_lowercase();

    if first == last {
        return Err(ValidationError::SameWord);
    }

    Ok((first, last))
}
