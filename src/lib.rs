#![no_std]

extern crate alloc;

pub mod friedman;
pub mod language;
pub mod table;
pub mod transposition;
pub mod vigenere;
