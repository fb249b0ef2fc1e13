//! Builds magic bitboard tables from scratch: relevant-occupancy masks, submask
//! enumeration over each mask, and a randomized search for a collision-free magic
//! number per square (see `magic::search`).

use super::attacks::{bishop_attacks_per_square, rook_attacks_per_square};
use super::search::find_magic_number_for_square;
use super::structs::{BishopMagicTables, MagicEntry, MagicTables, RookMagicTables};
use rand::{RngCore, SeedableRng, rngs::StdRng};

/// Controls the RNG seed used when searching for magic numbers.
pub enum MagicTableSeed {
    /// Deterministic seed, for reproducible tests and the `deterministic_magic` feature.
    Fixed(u64),
    /// Freshly seeded from the OS RNG.
    Random,
}

fn make_rng(seed: MagicTableSeed) -> StdRng {
    match seed {
        MagicTableSeed::Fixed(s) => StdRng::seed_from_u64(s),
        MagicTableSeed::Random => {
            let mut bytes = [0u8; 32];
            rand::rng().fill_bytes(&mut bytes);
            StdRng::from_seed(bytes)
        }
    }
}

/// All subsets of `mask`, including `mask` itself and the empty set (Carry-Rippler trick).
fn enumerate_subsets(mask: u64) -> Vec<u64> {
    let mut subsets = Vec::with_capacity(1 << mask.count_ones().min(20));
    let mut subset = mask;
    loop {
        subsets.push(subset);
        if subset == 0 {
            break;
        }
        subset = (subset - 1) & mask;
    }
    subsets
}

const ROOK_DIRS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

fn ray_squares(square: usize, df: i32, dr: i32) -> Vec<usize> {
    let mut squares = Vec::new();
    let mut f = (square % 8) as i32 + df;
    let mut r = (square / 8) as i32 + dr;
    while (0..8).contains(&f) && (0..8).contains(&r) {
        squares.push((r * 8 + f) as usize);
        f += df;
        r += dr;
    }
    squares
}

/// The relevant-occupancy mask for a sliding piece: every square on its rays except the
/// last one in each direction, since occupancy there can never hide anything beyond it.
fn relevant_mask(square: usize, dirs: &[(i32, i32)]) -> u64 {
    let mut mask = 0u64;
    for &(df, dr) in dirs {
        let ray = ray_squares(square, df, dr);
        if ray.len() > 1 {
            for &sq in &ray[..ray.len() - 1] {
                mask |= 1u64 << sq;
            }
        }
    }
    mask
}

fn relevant_rook_mask(square: usize) -> u64 {
    relevant_mask(square, &ROOK_DIRS)
}

fn relevant_bishop_mask(square: usize) -> u64 {
    relevant_mask(square, &BISHOP_DIRS)
}

fn build_entry(
    square: usize,
    mask: u64,
    attack_fn: fn(usize, u64) -> u64,
    rng: &mut StdRng,
) -> Result<MagicEntry, String> {
    let blockers = enumerate_subsets(mask);
    let attacks: Vec<u64> = blockers.iter().map(|&b| attack_fn(square, b)).collect();

    let bits = mask.count_ones();
    let shift = 64 - bits;
    let magic = find_magic_number_for_square(&blockers, &attacks, shift, rng)
        .map_err(|e| format!("square {square}: {e}"))?;

    let mut table = vec![0u64; 1usize << bits];
    for (&blocker, &attack) in blockers.iter().zip(attacks.iter()) {
        let index = ((blocker.wrapping_mul(magic)) >> shift) as usize;
        table[index] = attack;
    }

    Ok(MagicEntry {
        magic,
        shift,
        mask,
        table: table.into_boxed_slice(),
    })
}

/// Searches for magic numbers and builds full rook/bishop attack tables for all 64 squares.
pub fn generate_magic_tables(seed: MagicTableSeed) -> Result<MagicTables, String> {
    let mut rng = make_rng(seed);

    let mut rook_entries = Vec::with_capacity(64);
    let mut bishop_entries = Vec::with_capacity(64);

    for square in 0..64 {
        let rook_mask = relevant_rook_mask(square);
        rook_entries.push(build_entry(square, rook_mask, rook_attacks_per_square, &mut rng)?);

        let bishop_mask = relevant_bishop_mask(square);
        bishop_entries.push(build_entry(square, bishop_mask, bishop_attacks_per_square, &mut rng)?);
    }

    Ok(MagicTables {
        rook: RookMagicTables { entries: rook_entries },
        bishop: BishopMagicTables { entries: bishop_entries },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subset_enumeration_covers_every_combination() {
        let mask = 0b1011u64;
        let subsets = enumerate_subsets(mask);
        assert_eq!(subsets.len(), 1 << mask.count_ones());
        assert!(subsets.contains(&0));
        assert!(subsets.contains(&mask));
    }

    #[test]
    fn rook_corner_mask_excludes_edges() {
        let mask = relevant_rook_mask(0); // a1
        assert_eq!(mask & (1 << 7), 0); // h1 excluded
        assert_eq!(mask & (1 << 56), 0); // a8 excluded
        assert_ne!(mask & (1 << 1), 0); // b1 included
    }

    #[test]
    fn bishop_corner_mask_excludes_far_diagonal_end() {
        let mask = relevant_bishop_mask(0); // a1
        assert_eq!(mask & (1 << 63), 0); // h8 excluded
        assert_ne!(mask & (1 << 9), 0); // b2 included
    }
}
