//! Pawn attack lookup tables, precomputed once since the mask per (square, color) never
//! changes.

use crate::board::Color;
use once_cell::sync::Lazy;

fn build_table(color: Color) -> [u64; 64] {
    let mut table = [0u64; 64];
    for (sq, slot) in table.iter_mut().enumerate() {
        *slot = crate::moves::attacks::pawn_attacks(sq, color);
    }
    table
}

pub static WHITE_PAWN_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| build_table(Color::White));
pub static BLACK_PAWN_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| build_table(Color::Black));

/// Attack bitboard for a pawn of `color` on `square`.
#[inline]
pub fn pawn_attacks(square: u8, color: Color) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_pawn_on_e4_attacks_d5_and_f5() {
        let attacks = WHITE_PAWN_ATTACKS[28]; // e4
        assert_eq!(attacks.count_ones(), 2);
        assert_ne!(attacks & (1u64 << 35), 0); // d5
        assert_ne!(attacks & (1u64 << 37), 0); // f5
    }

    #[test]
    fn black_pawn_on_e5_attacks_d4_and_f4() {
        let attacks = BLACK_PAWN_ATTACKS[36]; // e5
        assert_eq!(attacks.count_ones(), 2);
        assert_ne!(attacks & (1u64 << 27), 0); // d4
        assert_ne!(attacks & (1u64 << 29), 0); // f4
    }
}
