use alloc::{vec, vec::Vec};
use core::convert::TryFrom;
use core::ops::RangeInclusive;

use libm::round;

use crate::language::{
    english_score, filter_letters, frequency_distance, index_of_coincidence, ALPHABET_LEN,
};
use crate::vigenere::{decrypt, shift_letters, Error as VigenereError};

/// Default inclusive upper bound for guessed Vigenere key lengths
pub const DEFAULT_MAX_KEY_LENGTH: usize = 20;

/// Number of key lengths searched on either side of the Friedman estimate
pub const CANDIDATE_RADIUS: i64 = 2;

/// Index of coincidence of uniformly random letters
pub const RANDOM_IC: f64 = 0.0385;

// Numerator of the folded Friedman formula, close to the English IC (0.0667) minus RANDOM_IC
const FRIEDMAN_NUMERATOR: f64 = 0.0279;

#[derive(Debug, PartialEq)]
pub enum Error {
    KeyLength,
    NoCandidates,
    Vigenere(VigenereError),
}

/// Best Caesar shift found for a single column
#[derive(Debug, PartialEq)]
pub struct Attempt {
    pub shift: u8,
    pub delta: f64,
}

/// Candidate Vigenere key, and the English score of the text it decrypts to
#[derive(Debug, PartialEq)]
pub struct Candidate {
    pub key: Vec<u8>,
    pub score: f64,
}

/// Estimate the Vigenere key length from the index of coincidence
///
/// Returns 1.0 when the index of coincidence is zero, or equal to RANDOM_IC
///
/// The estimate is not clamped, and may be non-integral or negative
pub fn friedman_test(ciphertext: &[u8]) -> f64 {
    let ic = index_of_coincidence(ciphertext);

    if ic <= 0.0 || ic == RANDOM_IC {
        return 1.0;
    }

    FRIEDMAN_NUMERATOR / (ic - RANDOM_IC) + 1.0
}

/// Key lengths to search around a Friedman estimate
///
/// Inclusive range [max(1, approx - 2), min(max_key_len, approx + 2)], approx the rounded estimate
///
/// errors: returns Error if the range is empty
pub fn candidate_lengths(
    estimate: f64,
    max_key_len: usize,
) -> Result<RangeInclusive<usize>, Error> {
    // saturates on out-of-range estimates
    let approx = round(estimate) as i64;
    let max_key_len = i64::try_from(max_key_len).unwrap_or(i64::MAX);

    let lo = core::cmp::max(1, approx.saturating_sub(CANDIDATE_RADIUS));
    let hi = core::cmp::min(max_key_len, approx.saturating_add(CANDIDATE_RADIUS));

    if hi < lo {
        return Err(Error::NoCandidates);
    }

    Ok(lo as usize..=hi as usize)
}

/// Split the letters of a text into key length columns
///
/// Non-letters are dropped, and letters upper-cased, before splitting.
/// Column i holds letters i, i + key_len, i + 2 * key_len, ...
///
/// Unlike fixed-size blocks, trailing letters are kept, so earlier columns may be one letter longer
pub fn split_into_columns(text: &[u8], key_len: usize) -> Result<Vec<Vec<u8>>, Error> {
    if key_len == 0 {
        return Err(Error::KeyLength);
    }

    let letters = filter_letters(text);
    let mut columns: Vec<Vec<u8>> = vec![Vec::with_capacity(letters.len() / key_len + 1); key_len];

    for (i, &letter) in letters.iter().enumerate() {
        columns[i % key_len].push(letter);
    }

    Ok(columns)
}

/// Guess which Caesar shift was applied to a column of uppercase letters
///
/// The lowest shift wins ties
pub fn guess_shift_by_frequency(column: &[u8]) -> Attempt {
    let mut winner = Attempt {
        shift: 0,
        delta: f64::INFINITY,
    };

    for shift in 0..ALPHABET_LEN as u8 {
        let dec = shift_letters(column, -(shift as i32));
        let delta = frequency_distance(&dec);

        if delta < winner.delta {
            winner = Attempt { shift, delta };
        }
    }

    winner
}

/// Pick the highest scoring candidate
///
/// Candidates are taken in iteration order, and only a strictly higher score
/// replaces the current best, so the first of equal candidates wins
pub fn best_candidate<I>(candidates: I) -> Option<Candidate>
where
    I: IntoIterator<Item = Candidate>,
{
    candidates.into_iter().fold(None, |best, candidate| match best {
        Some(b) if candidate.score <= b.score => Some(b),
        _ => Some(candidate),
    })
}

/// Guess the Vigenere key for a given ciphertext, returning the key and its score
///
/// For every key length around the Friedman estimate, each column is solved
/// for its Caesar shift, and the original ciphertext decrypted with the assembled key.
///
/// errors: returns Error if there are no key lengths to search
pub fn guess_vigenere_key_scored(
    ciphertext: &[u8],
    max_key_len: usize,
) -> Result<Candidate, Error> {
    let lengths = candidate_lengths(friedman_test(ciphertext), max_key_len)?;

    let mut candidates: Vec<Candidate> = Vec::with_capacity(lengths.clone().count());
    for key_len in lengths {
        let key: Vec<u8> = split_into_columns(ciphertext, key_len)?
            .iter()
            .map(|column| b'A' + guess_shift_by_frequency(column).shift)
            .collect();

        let plaintext = decrypt(ciphertext, &key).map_err(|e| Error::Vigenere(e))?;

        candidates.push(Candidate {
            score: english_score(&plaintext),
            key,
        });
    }

    best_candidate(candidates).ok_or(Error::NoCandidates)
}

/// Guess the Vigenere key for a given ciphertext
///
/// Key is returned in uppercase, see [guess_vigenere_key_scored]
///
/// Only key lengths within two of the Friedman estimate are searched. The estimate
/// gets noisy as the key grows: on a passage of about 1600 letters, keys of seven or
/// more letters are often missed, and keys of ten or more can put the estimate past
/// max_key_len + 2, which is reported as Error::NoCandidates for a valid ciphertext.
///
/// errors: returns Error if there are no key lengths to search
pub fn guess_vigenere_key(ciphertext: &[u8], max_key_len: usize) -> Result<Vec<u8>, Error> {
    Ok(guess_vigenere_key_scored(ciphertext, max_key_len)?.key)
}
