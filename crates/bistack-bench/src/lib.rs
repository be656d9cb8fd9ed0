//! Benchmark workloads for the bistack workspace.
//!
//! - [`frame_workload`]: one simulated frame of label formatting and buffer
//!   copies against a [`TempArena`]
//! - [`seeded_deck`]: a deterministically shuffled index deck

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use bistack_arena::{temp_format, ArenaError, TempArena};
use bistack_rand::{shuffle, Pcg32};

/// Run one frame: `labels` formatted strings plus one copy of `payload`,
/// then reset. Returns the bytes used before the reset.
pub fn frame_workload(
    temp: &mut TempArena,
    frame: u64,
    labels: usize,
    payload: &[u8],
) -> Result<usize, ArenaError> {
    for i in 0..labels {
        let _ = temp_format!(temp, "entity {i} hp {} frame {frame}", i * 7)?;
    }
    let _ = temp.copy(payload)?;
    let used = temp.used();
    temp.reset();
    Ok(used)
}

/// Indices `0..len` shuffled with a generator seeded by `seed`.
pub fn seeded_deck(seed: u64, len: u32) -> Vec<u32> {
    let mut deck: Vec<u32> = (0..len).collect();
    shuffle(&mut Pcg32::new(seed), &mut deck);
    deck
}
