/// Dictionary words one edit away from `word`: a substitution at any
/// position, or a letter appended at the tail while shorter than `max_len`.
/// Candidates come out positions-ascending, letters-ascending; that order is
/// what makes tied shortest chains resolve the same way every run.
pub fn successors(
    word: &str,
    index: &crate::dictionary::Index,
    max_len: usize,
) -> Vec<String> {
    let mut result = vec![];

    for pos in 0..max_len {
        // positions past the tail would only repeat the append candidates
        if pos > word.len() {
            break;
        }
        for letter in b'a'..=b'z' {
            let mut candidate = String::with_capacity(word.len() + 1);
            candidate.push_str(&word[..pos]);
            candidate.push(letter as char);
            candidate.push_str(word.get(pos + 1..).unwrap_or(""));

            if candidate != word && index.contains(&candidate) {
                result.push(candidate);
            }
        }
    }

    result
}

/// Reverse edges of [`successors`]: a substitution at any position, or the
/// word with its last letter dropped while longer than `min_len`.
pub fn predecessors(
    word: &str,
    index: &crate::dictionary::Index,
    min_len: usize,
) -> Vec<String> {
    let mut result = vec![];

    for pos in 0..word.len() {
        for letter in b'a'..=b'z' {
            let mut candidate = String::with_capacity(word.len());
            candidate.push_str(&word[..pos]);
            candidate.push(letter as char);
            candidate.push_str(&word[pos + 1..]);

            if candidate != word && index.contains(&candidate) {
                result.push(candidate);
            }
        }
    }

    if word.len() > min_len {
        let candidate = &word[..word.len() - 1];
        if index.contains(candidate) {
            result.push(candidate.to_owned());
        }
    }

    result
}
