/// Split one line into `(word, column)` pairs.
///
/// Leading spaces are skipped, trailing whitespace is dropped, and the rest is
/// split on single spaces. Columns are 0-based char offsets; the empty pieces
/// between consecutive spaces still advance the column but are not returned.
pub fn split_line(line: &str) -> Vec<(&str, usize)> {
    let trimmed = line.trim_start_matches(' ');
    let mut column = line.chars().count() - trimmed.chars().count();

    let mut words = Vec::new();
    for word in trimmed.trim_end().split(' ') {
        if !word.is_empty() {
            words.push((word, column));
        }
        column += word.chars().count() + 1;
    }

    words
}

/// Drop trailing periods, so sentence-final words check like any other.
pub fn strip_trailing_period(word: &str) -> &str {
    word.trim_end_matches('.')
}
