//! Word chain search: shortest ladders between two dictionary words, where
//! each step substitutes one letter (or grows the word by one at the tail).

pub mod chain;
pub mod dictionary;
pub mod response;
pub mod search;
pub mod successors;
pub mod validate;

/// Validates the raw request parameters, builds the dictionary index for the
/// query's length range, runs the search, and folds everything into the
/// boundary response. Validation failures return before the dictionary is
/// ever opened.
pub fn build_chain(
    params: &serde_json::Value,
    source: &impl dictionary::WordSource,
    options: &search::SearchOptions,
) -> response::Response {
    let (first_word, last_word) = match validate::validate(params) {
        Ok(words) => words,
        Err(error) => return response::Response::validation(&error),
    };

    log::info!(
        first_word = first_word.as_str(),
        last_word = last_word.as_str();
        "building word chain"
    );

    let query = search::Query::new(first_word, last_word);

    let index = match dictionary::Index::build(source, query.min_len, query.max_len) {
        Ok(index) => index,
        Err(error) => return response::Response::internal(&error),
    };

    search::search(&index, &query, options).into()
}
