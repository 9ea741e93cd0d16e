use crate::Word;

/// Extra rows/columns added on top of the minimum for small word lists
pub const SMALL_LIST_PADDING: usize = 2;

/// Word count up to which the linear sizing rule applies
pub const SMALL_LIST_LIMIT: usize = 20;

/// Estimate the side length of a grid that can hold every word.
///
/// Small lists get `max(longest word, word count) + padding`. Larger lists
/// scale with the square root of the total letter count instead so the
/// board does not become mostly filler.
pub fn estimate_size(words: &[Word]) -> usize {
    if words.len() <= SMALL_LIST_LIMIT {
        let longest = words.iter().map(Word::len).max().unwrap_or(0);
        longest.max(words.len()) + SMALL_LIST_PADDING
    } else {
        let letters: usize = words.iter().map(Word::len).sum();
        ((letters as f64).sqrt() * 2.0).ceil() as usize
    }
}
