use alloc::vec::Vec;

#[derive(Debug, PartialEq)]
pub enum Error {
    EmptyKey,
}

/// Get the order in which key positions are read
///
/// Positions are stable-sorted by their (case-insensitive) key byte, so repeated
/// key bytes keep their original order, e.g.
///
/// b"SECRET" -> [2, 1, 4, 3, 0, 5]
pub fn key_order(key: &[u8]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..key.len()).collect();
    order.sort_by_key(|&i| key[i].to_ascii_uppercase());
    order
}

/// Columnar transposition encrypt
///
/// Plaintext is written row by row under the key, then read out column by column in key order
///
/// errors: returns Error on empty key
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>, Error> {
    if key.is_empty() {
        return Err(Error::EmptyKey);
    }

    let col_count = key.len();
    let mut res = Vec::with_capacity(plaintext.len());

    for col in key_order(key) {
        res.extend(plaintext.iter().skip(col).step_by(col_count));
    }

    Ok(res)
}

/// Columnar transposition decrypt, the inverse of [encrypt]
///
/// The last row may be partial, so the first (len % columns) columns hold one extra byte
///
/// errors: returns Error on empty key
pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>, Error> {
    if key.is_empty() {
        return Err(Error::EmptyKey);
    }

    let col_count = key.len();
    let len = ciphertext.len();

    // scatter each column back to its row-major positions
    let mut res = ciphertext.to_vec();
    let mut idx = 0;
    for col in key_order(key) {
        for pos in (col..len).step_by(col_count) {
            res[pos] = ciphertext[idx];
            idx += 1;
        }
    }

    Ok(res)
}

/// Double columnar transposition: encrypt with the first key, then the second
pub fn double_encrypt(plaintext: &[u8], key1: &[u8], key2: &[u8]) -> Result<Vec<u8>, Error> {
    encrypt(&encrypt(plaintext, key1)?, key2)
}

/// Double columnar transposition decrypt, keys applied in reverse order
pub fn double_decrypt(ciphertext: &[u8], key1: &[u8], key2: &[u8]) -> Result<Vec<u8>, Error> {
    decrypt(&decrypt(ciphertext, key2)?, key1)
}
