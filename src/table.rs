//! Row/column table cipher
//!
//! Text is written column by column into a table with one row per key byte,
//! and the rows are read out in key order. The last column may be partial.

use alloc::vec;
use alloc::vec::Vec;

use crate::transposition::key_order;
use crate::vigenere::{self, Error as VigenereError};

#[derive(Debug, PartialEq)]
pub enum Error {
    EmptyKey,
    Vigenere(VigenereError),
}

/// Fixed-size table stored row-major, unused cells of the last column are None
struct Table {
    rows: usize,
    cols: usize,
    cells: Vec<Option<u8>>,
}

impl Table {
    /// Create an empty table sized for `len` bytes over `rows` rows
    fn new(len: usize, rows: usize) -> Self {
        let cols = (len + rows - 1) / rows;
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Whether the cell holds a byte of a `len` byte text, filled column by column
    fn is_used(&self, row: usize, col: usize, len: usize) -> bool {
        col * self.rows + row < len
    }

    fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, byte: u8) {
        self.cells[row * self.cols + col] = Some(byte);
    }

    /// Fill the table column by column
    fn from_columns(text: &[u8], rows: usize) -> Self {
        let mut table = Self::new(text.len(), rows);
        for (i, &byte) in text.iter().enumerate() {
            table.set(i % rows, i / rows, byte);
        }
        table
    }

    /// Read the given row, skipping unused cells
    fn read_row(&self, row: usize) -> impl Iterator<Item = u8> + '_ {
        (0..self.cols).filter_map(move |col| self.get(row, col))
    }

    /// Read the table column by column, skipping unused cells
    fn read_columns(&self) -> Vec<u8> {
        let mut res = Vec::with_capacity(self.cells.len());
        for col in 0..self.cols {
            res.extend((0..self.rows).filter_map(|row| self.get(row, col)));
        }
        res
    }
}

/// Table cipher encrypt
///
/// errors: returns Error on empty key
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>, Error> {
    if key.is_empty() {
        return Err(Error::EmptyKey);
    }

    let table = Table::from_columns(plaintext, key.len());

    let mut res = Vec::with_capacity(plaintext.len());
    for row in key_order(key) {
        res.extend(table.read_row(row));
    }

    Ok(res)
}

/// Table cipher decrypt, the inverse of [encrypt]
///
/// Row lengths are recomputed from the ciphertext length, so partial last columns round-trip
///
/// errors: returns Error on empty key
pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>, Error> {
    if key.is_empty() {
        return Err(Error::EmptyKey);
    }

    let len = ciphertext.len();
    let mut table = Table::new(len, key.len());
    let mut bytes = ciphertext.iter();

    for row in key_order(key) {
        for col in 0..table.cols {
            if !table.is_used(row, col, len) {
                continue;
            }
            if let Some(&byte) = bytes.next() {
                table.set(row, col, byte);
            }
        }
    }

    Ok(table.read_columns())
}

/// Vigenere encrypt, then table encrypt the result
pub fn double_encrypt(
    plaintext: &[u8],
    key_vigenere: &[u8],
    key_table: &[u8],
) -> Result<Vec<u8>, Error> {
    let step = vigenere::encrypt(plaintext, key_vigenere).map_err(|e| Error::Vigenere(e))?;
    encrypt(&step, key_table)
}

/// Table decrypt, then Vigenere decrypt the result
pub fn double_decrypt(
    ciphertext: &[u8],
    key_vigenere: &[u8],
    key_table: &[u8],
) -> Result<Vec<u8>, Error> {
    let step = decrypt(ciphertext, key_table)?;
    vigenere::decrypt(&step, key_vigenere).map_err(|e| Error::Vigenere(e))
}
