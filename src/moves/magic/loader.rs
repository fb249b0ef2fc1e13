use super::precompute::{MagicTableSeed, generate_magic_tables};
use super::structs::MagicTables;

#[cfg(feature = "deterministic_magic")]
const MAGIC_SEED: u64 = 0x5EED_CAFE_B00C_1234;

/// Builds a fresh set of rook/bishop magic tables. Magic-number search is randomized by
/// default; the `deterministic_magic` feature pins it to a fixed seed for reproducible
/// runs and tests.
pub fn load_magic_tables() -> MagicTables {
    let seed = {
        #[cfg(feature = "deterministic_magic")]
        {
            MagicTableSeed::Fixed(MAGIC_SEED)
        }
        #[cfg(not(feature = "deterministic_magic"))]
        {
            MagicTableSeed::Random
        }
    };

    generate_magic_tables(seed).expect("magic number search failed")
}
