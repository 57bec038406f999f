/// A normalized word pair prepared for searching. Edges only ever grow words
/// at the tail, so the search runs from the shorter endpoint; `reversed`
/// records that the result must be flipped back into first-to-last order.
pub struct Query {
    pub start: String,
    pub target: String,
    pub min_len: usize,
    pub max_len: usize,
    pub reversed: bool,
}

impl Query {
    pub fn new(first_word: String, last_word: String) -> Self {
        let reversed = first_word.len() > last_word.len();
        let min_len = first_word.len().min(last_word.len());
        let max_len = first_word.len().max(last_word.len());

        let (start, target) = if reversed {
            (last_word, first_word)
        } else {
            (first_word, last_word)
        };

        Self {
            start,
            target,
            min_len,
            max_len,
            reversed,
        }
    }
}

#[derive(Default)]
pub struct SearchOptions {
    /// Expand from both endpoints at once. Faster on large dictionaries, but
    /// the first frontier intersection wins, so the returned chain is valid
    /// yet not guaranteed minimal, and ties are not broken deterministically.
    pub bidirectional: bool,
    /// Give up after this many finalized words.
    pub max_steps: Option<usize>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Found(Vec<String>),
    NotFound,
}

pub fn search(
    index: &crate::dictionary::Index,
    query: &Query,
    options: &SearchOptions,
) -> Outcome {
    let started = std::time::Instant::now();

    let outcome = if options.bidirectional {
        bidirectional(index, query, options.max_steps)
    } else {
        breadth_first(index, query, options.max_steps)
    };

    log::debug!(
        found = matches!(outcome, Outcome::Found(_)),
        elapsed_ms = started.elapsed().as_millis() as u64;
        "chain search finished"
    );

    outcome
}

fn breadth_first(
    index: &crate::dictionary::Index,
    query: &Query,
    max_steps: Option<usize>,
) -> Outcome {
    let mut chain = crate::chain::Chain::new();
    let mut queue = std::collections::VecDeque::new();
    queue.push_back(chain.root(query.start.clone()));

    let mut visited = std::collections::HashSet::new();
    let mut finalized = 0;

    while let Some(id) = queue.pop_front() {
        let word = chain.word(id).to_owned();

        // duplicates are dropped here, at dequeue time, not at enqueue time
        if !visited.insert(word.clone()) {
            continue;
        }

        if word == query.target {
            return Outcome::Found(chain.sequence(id, query.reversed));
        }

        finalized += 1;
        if max_steps.is_some_and(|limit| finalized >= limit) {
            log::warn!(finalized = finalized; "step budget exhausted, giving up");
            return Outcome::NotFound;
        }

        for successor in crate::successors::successors(&word, index, query.max_len) {
            queue.push_back(chain.extend(id, successor));
        }
    }

    Outcome::NotFound
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Forward,
    Backward,
}

impl Side {
    fn opposite(self) -> Self {
        match self {
            Side::Forward => Side::Backward,
            Side::Backward => Side::Forward,
        }
    }
}

struct Meeting {
    side: Side,
    id: crate::chain::NodeId,
    word: String,
}

type Seen = std::collections::HashMap<String, crate::chain::NodeId>;

#[derive(Default)]
struct Rendezvous {
    forward: std::sync::Mutex<Seen>,
    backward: std::sync::Mutex<Seen>,
    meeting: std::sync::Mutex<Option<Meeting>>,
    stop: std::sync::atomic::AtomicBool,
    finalized: std::sync::atomic::AtomicUsize,
}

impl Rendezvous {
    fn seen(&self, side: Side) -> &std::sync::Mutex<Seen> {
        match side {
            Side::Forward => &self.forward,
            Side::Backward => &self.backward,
        }
    }
}

/// Best effort: both frontiers expand as independent tasks and the first
/// intersection wins, so the spliced chain can be slightly longer than the
/// one the plain breadth-first engine would return.
fn bidirectional(
    index: &crate::dictionary::Index,
    query: &Query,
    max_steps: Option<usize>,
) -> Outcome {
    // the backward frontier's reverse edges assume the target itself is a
    // dictionary word; a target outside the dictionary is unreachable
    if !index.contains(&query.target) {
        return Outcome::NotFound;
    }

    let shared = Rendezvous::default();

    let (forward_chain, backward_chain) = rayon::join(
        || expand(index, query, Side::Forward, &shared, max_steps),
        || expand(index, query, Side::Backward, &shared, max_steps),
    );

    let Rendezvous {
        forward,
        backward,
        meeting,
        ..
    } = shared;

    let Some(Meeting { side, id, word }) = meeting.into_inner().unwrap() else {
        return Outcome::NotFound;
    };

    let forward_seen = forward.into_inner().unwrap();
    let backward_seen = backward.into_inner().unwrap();

    // start ..= meeting word
    let mut combined = match side {
        Side::Forward => forward_chain.sequence(id, false),
        Side::Backward if word == query.start => vec![query.start.clone()],
        Side::Backward => {
            let Some(&forward_id) = forward_seen.get(&word) else {
                return Outcome::NotFound;
            };
            forward_chain.sequence(forward_id, false)
        }
    };

    // meeting word ..= target; the meeting word itself is already in place
    let tail = match side {
        Side::Backward => backward_chain.sequence(id, true),
        Side::Forward if word == query.target => vec![word],
        Side::Forward => {
            let Some(&backward_id) = backward_seen.get(&word) else {
                return Outcome::NotFound;
            };
            backward_chain.sequence(backward_id, true)
        }
    };
    combined.extend(tail.into_iter().skip(1));

    if query.reversed {
        combined.reverse();
    }

    Outcome::Found(combined)
}

fn expand(
    index: &crate::dictionary::Index,
    query: &Query,
    side: Side,
    shared: &Rendezvous,
    max_steps: Option<usize>,
) -> crate::chain::Chain {
    let (root, goal) = match side {
        Side::Forward => (&query.start, &query.target),
        Side::Backward => (&query.target, &query.start),
    };

    let mut chain = crate::chain::Chain::new();
    let mut queue = std::collections::VecDeque::new();
    queue.push_back(chain.root(root.clone()));

    while let Some(id) = queue.pop_front() {
        if shared.stop.load(std::sync::atomic::Ordering::Relaxed) {
            break;
        }

        let word = chain.word(id).to_owned();

        {
            let mut seen = shared.seen(side).lock().unwrap();
            if seen.contains_key(&word) {
                continue;
            }
            seen.insert(word.clone(), id);
        }

        let met = word == *goal
            || shared
                .seen(side.opposite())
                .lock()
                .unwrap()
                .contains_key(&word);
        if met {
            let mut meeting = shared.meeting.lock().unwrap();
            if meeting.is_none() {
                *meeting = Some(Meeting { side, id, word });
            }
            shared.stop.store(true, std::sync::atomic::Ordering::Relaxed);
            break;
        }

        let finalized = shared
            .finalized
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed)
            + 1;
        if max_steps.is_some_and(|limit| finalized >= limit) {
            log::warn!(finalized = finalized; "step budget exhausted, giving up");
            shared.stop.store(true, std::sync::atomic::Ordering::Relaxed);
            break;
        }

        let candidates = match side {
            Side::Forward => crate::successors::successors(&word, index, query.max_len),
            Side::Backward => crate::successors::predecessors(&word, index, query.min_len),
        };
        for candidate in candidates {
            queue.push_back(chain.extend(id, candidate));
        }
    }

    chain
}
