use alloc::vec::Vec;

use rand::Rng;

use crate::language::ALPHABET_LEN;

#[derive(Debug, PartialEq)]
pub enum Error {
    EmptyKey,
    InvalidKey(u8),
}

/// Shift a single letter by `shift` positions (mod 26), preserving case
///
/// Non-letters are returned unchanged
pub fn shift_letter(byte: u8, shift: u8) -> u8 {
    let base = match byte {
        b'A'..=b'Z' => b'A',
        b'a'..=b'z' => b'a',
        _ => return byte,
    };

    let pos = (byte - base) as usize + (shift as usize % ALPHABET_LEN);
    base + (pos % ALPHABET_LEN) as u8
}

/// Caesar shift every letter in a byte string, preserving case and non-letters
///
/// Negative shifts rotate backwards, e.g. -1 maps B to A
pub fn shift_letters(text: &[u8], shift: i32) -> Vec<u8> {
    let shift = shift.rem_euclid(ALPHABET_LEN as i32) as u8;
    text.iter().map(|&b| shift_letter(b, shift)).collect()
}

/// Convert a key into its additive shifts (A = 0, ..., Z = 25)
///
/// errors: returns Error on empty keys, and keys containing non-letters
pub fn key_shifts(key: &[u8]) -> Result<Vec<u8>, Error> {
    if key.is_empty() {
        return Err(Error::EmptyKey);
    }

    key.iter()
        .map(|&k| {
            if k.is_ascii_alphabetic() {
                Ok(k.to_ascii_uppercase() - b'A')
            } else {
                Err(Error::InvalidKey(k))
            }
        })
        .collect()
}

/// Vigenere encrypt a byte string
///
/// Key repeats over the letters of the plaintext, non-letters are copied
/// and do not advance the key, e.g.
///
/// b"ATTACK AT DAWN"
/// b"LEMONL EM ONLE"
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>, Error> {
    let shifts = key_shifts(key)?;
    Ok(apply_key(plaintext, &shifts))
}

/// Vigenere decrypt a byte string, the inverse of [encrypt]
pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>, Error> {
    let inverse: Vec<u8> = key_shifts(key)?
        .iter()
        .map(|&s| (ALPHABET_LEN as u8 - s) % ALPHABET_LEN as u8)
        .collect();
    Ok(apply_key(ciphertext, &inverse))
}

fn apply_key(text: &[u8], shifts: &[u8]) -> Vec<u8> {
    let shifts_len = shifts.len();
    let mut key_idx = 0_usize;

    let mut res = Vec::with_capacity(text.len());
    for &byte in text.iter() {
        if byte.is_ascii_alphabetic() {
            res.push(shift_letter(byte, shifts[key_idx % shifts_len]));
            key_idx += 1;
        } else {
            res.push(byte);
        }
    }

    res
}

/// Generate a random uppercase Vigenere key of the given length
pub fn gen_rand_key<R: Rng>(rng: &mut R, len: usize) -> Vec<u8> {
    (0..len)
        .map(|_| b'A' + rng.gen_range(0, ALPHABET_LEN as u8))
        .collect()
}
