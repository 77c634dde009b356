//! Verifies that the platform's aligned-allocation entry point links and that
//! the memory it hands back is observably used.
//!
//! The whole crate is one linear check: ask [`probe::AlignedBlock`] for a
//! small block at a large alignment, push a byte through it with
//! [`touch::touch_through_devices`] so the allocation call stays live, and
//! report the allocator's verdict. The check never fails the process that
//! runs it; a harness judges by whether this crate builds and links, and
//! optionally by what it logs.

use crate::touch::touch_through_devices;
use log::{debug, error};

pub mod env;
pub mod ffi;
pub mod mem_info;
pub mod probe;
pub mod touch;

pub use crate::probe::{AlignedBlock, ProbeError};

/// One full probe pass: allocate, touch, report.
///
/// Returns the raw allocator status, zero on success. An allocation failure
/// is logged at error level and otherwise tolerated; there are no retries.
pub fn run_probe(alignment: usize, size: usize) -> i32 {
    match AlignedBlock::allocate(alignment, size) {
        Ok(mut block) => {
            debug!(
                "allocated {} bytes at {:#x} (alignment {})",
                block.len(),
                block.addr(),
                block.align()
            );
            touch_through_devices(&mut block);
            0
        }
        Err(e) => {
            error!("aligned allocation failed: {}", e);
            e.status()
        }
    }
}
