//! Heuristic English syllable estimation
//!
//! A word is lowercased and stripped to `a-z`. Each maximal run of vowels
//! (`y` included) counts once. A trailing silent `e` is dropped when the word
//! has more than one run, except after `l` or `y`. Every non-empty word counts
//! at least one syllable.

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimated syllables in a single word, `0` when it has no letters
pub fn word_syllables(word: &str) -> usize {
    let cleaned: String = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect();
    if cleaned.is_empty() {
        return 0;
    }

    let mut runs = 0;
    let mut in_run = false;
    for c in cleaned.chars() {
        let vowel = is_vowel(c);
        if vowel && !in_run {
            runs += 1;
        }
        in_run = vowel;
    }

    if cleaned.ends_with('e') && !cleaned.ends_with("le") && !cleaned.ends_with("ye") && runs > 1
    {
        runs -= 1;
    }
    runs.max(1)
}

/// Estimated syllables in a whitespace-separated line
pub fn line_syllables(line: &str) -> usize {
    line.split_whitespace().map(word_syllables).sum()
}
