use alloc::vec::Vec;

use hashbrown::HashMap;
use libm::fabs;

/// Frequency distance reported for empty text, worse than any real distance
pub const EMPTY_DISTANCE: f64 = 9999.0;

/// Number of letters in the English alphabet
pub const ALPHABET_LEN: usize = 26;

// ASCII byte value for " "
const SPACE: u8 = 0x20;

/// Unigram frequencies of English letters (case-insensitive)
///
/// Frequencies from: https://en.wikipedia.org/wiki/Letter_frequency
pub fn english_frequency(byte: u8) -> f64 {
    match byte {
        0x41 | 0x61 /* A | a */ => 0.08167,
        0x42 | 0x62 /* B | b */ => 0.01492,
        0x43 | 0x63 /* C | c */ => 0.02782,
        0x44 | 0x64 /* D | d */ => 0.04253,
        0x45 | 0x65 /* E | e */ => 0.12702,
        0x46 | 0x66 /* F | f */ => 0.02228,
        0x47 | 0x67 /* G | g */ => 0.02015,
        0x48 | 0x68 /* H | h */ => 0.06094,
        0x49 | 0x69 /* I | i */ => 0.06966,
        0x4a | 0x6a /* J | j */ => 0.00153,
        0x4b | 0x6b /* K | k */ => 0.00772,
        0x4c | 0x6c /* L | l */ => 0.04025,
        0x4d | 0x6d /* M | m */ => 0.02406,
        0x4e | 0x6e /* N | n */ => 0.06749,
        0x4f | 0x6f /* O | o */ => 0.07507,
        0x50 | 0x70 /* P | p */ => 0.01929,
        0x51 | 0x71 /* Q | q */ => 0.00095,
        0x52 | 0x72 /* R | r */ => 0.05987,
        0x53 | 0x73 /* S | s */ => 0.06327,
        0x54 | 0x74 /* T | t */ => 0.09056,
        0x55 | 0x75 /* U | u */ => 0.02758,
        0x56 | 0x76 /* V | v */ => 0.00978,
        0x57 | 0x77 /* W | w */ => 0.02360,
        0x58 | 0x78 /* X | x */ => 0.00150,
        0x59 | 0x79 /* Y | y */ => 0.01974,
        0x5a | 0x7a /* Z | z */ => 0.00074,
        _ => 0.0,  // not a letter
    }
}

/// Remove every non-letter from the text, and upper-case the remaining letters
pub fn filter_letters(text: &[u8]) -> Vec<u8> {
    text.iter()
        .filter(|b| b.is_ascii_alphabetic())
        .map(|b| b.to_ascii_uppercase())
        .collect()
}

/// Count occurrences of the uppercase letters A-Z
///
/// Any other byte (lowercase included) is not counted
pub fn count_letters(text: &[u8]) -> HashMap<u8, u64> {
    let mut res: HashMap<u8, u64> = HashMap::with_capacity(ALPHABET_LEN);

    for &byte in text.iter().filter(|b| b.is_ascii_uppercase()) {
        if let Some(entry) = res.get_mut(&byte) {
            *entry += 1;
        } else {
            res.insert(byte, 1);
        }
    }

    res
}

/// Get the observed frequency of each uppercase letter in a given byte string
///
/// Counts are divided by the full text length, not only the letter count.
///
/// Returns None for empty text
pub fn observe_letters(text: &[u8]) -> Option<HashMap<u8, f64>> {
    if text.is_empty() {
        return None;
    }

    let text_len = text.len() as f64;

    Some(
        count_letters(text)
            .into_iter()
            .map(|(letter, count)| (letter, count as f64 / text_len))
            .collect(),
    )
}

/// Index of coincidence: probability that two letters drawn from the text are equal
///
/// Non-letters are ignored, letters are compared case-insensitively.
///
/// Returns 0.0 for texts with fewer than two letters
pub fn index_of_coincidence(text: &[u8]) -> f64 {
    let letters = filter_letters(text);
    let letters_len = letters.len() as u64;

    if letters_len < 2 {
        return 0.0;
    }

    let numerator: u64 = count_letters(&letters)
        .values()
        .map(|&count| count * (count - 1))
        .sum();

    numerator as f64 / (letters_len * (letters_len - 1)) as f64
}

/// Get the delta of how closely the observed letters match English letter frequencies
///
/// Sum of absolute differences over A-Z, lower is better
///
/// Returns EMPTY_DISTANCE for empty text
pub fn frequency_distance(text: &[u8]) -> f64 {
    let observed = match observe_letters(text) {
        Some(obs) => obs,
        None => return EMPTY_DISTANCE,
    };

    (b'A'..=b'Z')
        .map(|letter| {
            let obs_hz = observed.get(&letter).copied().unwrap_or(0.0);
            fabs(obs_hz - english_frequency(letter))
        })
        .sum()
}

/// Naive "English-ness" of a text: spaces count one, vowels count a half
///
/// Higher is better
pub fn english_score(text: &[u8]) -> f64 {
    text.iter().fold(0.0_f64, |score, b| match b.to_ascii_uppercase() {
        SPACE => score + 1.0,
        b'A' | b'E' | b'I' | b'O' | b'U' => score + 0.5,
        _ => score,
    })
}

/// Fraction of matching bytes between two texts, compared over the shorter length
///
/// Returns 0.0 if either text is empty
pub fn similarity(left: &[u8], right: &[u8]) -> f64 {
    let len = core::cmp::min(left.len(), right.len());
    if len == 0 {
        return 0.0;
    }

    let matches = left[..len]
        .iter()
        .zip(right[..len].iter())
        .filter(|(l, r)| l == r)
        .count();

    matches as f64 / len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_english_frequency() {
        let total: f64 = (b'A'..=b'Z').map(english_frequency).sum();
        assert!(fabs(total - 1.0) < 0.001);

        assert_eq!(english_frequency(b'e'), english_frequency(b'E'));
        assert_eq!(english_frequency(b' '), 0.0);
        assert_eq!(english_frequency(b'!'), 0.0);
    }

    #[test]
    fn check_filter_letters() {
        assert_eq!(filter_letters(b"Hello, World!")[..], b"HELLOWORLD"[..]);
        assert!(filter_letters(b"1234 !?").is_empty());
    }

    #[test]
    fn check_count_letters() {
        let counts = count_letters(b"AABa c");
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&b'A'], 2);
        assert_eq!(counts[&b'B'], 1);
        assert!(counts.get(&b'C').is_none());
    }

    #[test]
    fn check_observe_letters() {
        assert!(observe_letters(b"").is_none());

        // denominator is the full length, spaces included
        let obs = observe_letters(b"AB A").unwrap();
        assert_eq!(obs[&b'A'], 0.5);
        assert_eq!(obs[&b'B'], 0.25);
    }

    #[test]
    fn check_index_of_coincidence() {
        assert_eq!(index_of_coincidence(b"AAAA"), 1.0);
        assert_eq!(index_of_coincidence(b"ABCD"), 0.0);
        assert_eq!(index_of_coincidence(b""), 0.0);
        assert_eq!(index_of_coincidence(b"A"), 0.0);
        assert_eq!(index_of_coincidence(b"a !! ?"), 0.0);

        // AABB: 2 * (2 * 1) / (4 * 3)
        assert_eq!(index_of_coincidence(b"aA, bB"), 4.0 / 12.0);
    }

    #[test]
    fn check_frequency_distance() {
        assert_eq!(frequency_distance(b""), EMPTY_DISTANCE);

        let total: f64 = (b'A'..=b'Z').map(english_frequency).sum();
        let e_hz = english_frequency(b'E');

        // all expected mass is missed except E, which is over-observed
        let exp = (1.0 - e_hz) + (total - e_hz);
        assert!(fabs(frequency_distance(b"E") - exp) < 1e-9);

        // lowercase letters are outside the reference alphabet
        assert!(fabs(frequency_distance(b"e") - total) < 1e-9);

        let english = b"THEQUICKBROWNFOXJUMPSOVERTHELAZYDOGANDTHENRESTSINTHESHADEOFTHETREE";
        let skewed = b"QQQQZZZZXXXXJJJJKKKKVVVVQQQQZZZZXXXXJJJJKKKKVVVVQQQQZZZZXXXXJJJJKKKK";
        assert!(frequency_distance(english) < frequency_distance(skewed));
    }

    #[test]
    fn check_english_score() {
        assert_eq!(english_score(b"Hello World"), 2.5);
        assert_eq!(english_score(b""), 0.0);
        assert_eq!(english_score(b"aEiOu"), 2.5);
        assert_eq!(english_score(b"   "), 3.0);
    }

    #[test]
    fn check_similarity() {
        assert_eq!(similarity(b"", b"abc"), 0.0);
        assert_eq!(similarity(b"abcd", b"abcd"), 1.0);
        assert_eq!(similarity(b"abcd", b"abxd"), 0.75);
        assert_eq!(similarity(b"ab", b"abxyz"), 1.0);
    }
}
