use crate::checker::similarity::Similarity;

/// Rank the `max_candidates` dictionary words most similar to `word`, best first.
///
/// Every dictionary word is scored once, passed to the scorer ahead of `word`.
/// Equal scores keep the order in which the words were encountered.
pub fn generate<S>(
    word: &str,
    dictionary_words: &[String],
    max_candidates: usize,
    scorer: &S,
) -> Vec<String>
where
    S: Similarity + ?Sized,
{
    let mut best = TopCandidates::new(max_candidates);

    for candidate in dictionary_words {
        let score = scorer.score(candidate, word);
        best.offer(score, candidate);
    }

    best.into_words()
}

/// Bounded working set holding the highest-scoring words seen so far, in
/// descending score order.
struct TopCandidates<'a> {
    capacity: usize,
    entries: Vec<(f64, &'a str)>,
}

impl<'a> TopCandidates<'a> {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    fn worst_score(&self) -> Option<f64> {
        self.entries.last().map(|(score, _)| *score)
    }

    fn offer(&mut self, score: f64, word: &'a str) {
        if self.capacity == 0 {
            return;
        }

        if self.entries.len() == self.capacity {
            match self.worst_score() {
                Some(worst) if score > worst => {
                    self.entries.pop();
                }
                _ => return,
            }
        }

        // after every retained entry with an equal or higher score
        let position = self.entries.partition_point(|(kept, _)| *kept >= score);
        self.entries.insert(position, (score, word));
    }

    fn into_words(self) -> Vec<String> {
        self.entries
            .into_iter()
            .map(|(_, word)| word.to_string())
            .collect()
    }
}
