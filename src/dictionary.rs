use std::io::Read as _;

/// A word list that can be opened for one full read per search.
pub trait WordSource {
    fn open(&self) -> std::io::Result<Box<dyn std::io::BufRead + '_>>;
}

pub struct FileSource {
    path: std::path::PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileSource {
    fn open(&self) -> std::io::Result<Box<dyn std::io::BufRead + '_>> {
        Ok(Box::new(std::io::BufReader::new(std::fs::File::open(
            &self.path,
        )?)))
    }
}

impl WordSource for &str {
    fn open(&self) -> std::io::Result<Box<dyn std::io::BufRead + '_>> {
        Ok(Box::new(std::io::Cursor::new(self.as_bytes())))
    }
}

/// Dictionary words within a length range, bucketed by first letter.
pub struct Index {
    buckets: [std::collections::HashSet<String>; 26],
}

impl Index {
    pub fn build(
        source: &impl WordSource,
        min_len: usize,
        max_len: usize,
    ) -> std::io::Result<Self> {
        let started = std::time::Instant::now();

        let mut contents = String::new();
        source.open()?.read_to_string(&mut contents)?;

        let mut buckets: [std::collections::HashSet<String>; 26] = Default::default();
        let mut total = 0;

        for line in contents.split(['\n', '\r']) {
            if line.is_empty() || line.len() < min_len || line.len() > max_len {
                continue;
            }
            if !line.bytes().all(|b| b.is_ascii_alphabetic()) {
                continue;
            }
            let word = line.to_ascii_lowercase();
            let bucket = (word.as_bytes()[0] - b'a') as usize;
            if buckets[bucket].insert(word) {
                total += 1;
            }
        }

        log::debug!(
            words = total,
            elapsed_ms = started.elapsed().as_millis() as u64;
            "dictionary indexed"
        );

        Ok(Self { buckets })
    }

    /// Membership test for a lower-cased candidate.
    pub fn contains(&self, word: &str) -> bool {
        let Some(&first) = word.as_bytes().first() else {
            return false;
        };
        if !first.is_ascii_lowercase() {
            return false;
        }
        self.buckets[(first - b'a') as usize].contains(word)
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
