//! hash-lut: generate the bytewise lookup table for the AFK hash
//!
//! Prints a fresh random permutation of 0..=255, one value per line,
//! formatted for pasting into the engine's hash table initializer.

use rand::seq::SliceRandom;

fn main() {
    let mut values: Vec<u8> = (0..=255).collect();
    values.shuffle(&mut rand::rng());

    for value in values {
        println!("\t{},", value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut values: Vec<u8> = (0..=255).collect();
        values.shuffle(&mut rand::rng());
        let mut sorted = values.clone();
        sorted.sort_unstable();
        let expected: Vec<u8> = (0..=255).collect();
        assert_eq!(sorted, expected);
        assert_eq!(values.len(), 256);
    }
}
