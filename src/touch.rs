use crate::probe::AlignedBlock;
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};

/// Yields zero bytes forever
pub const ZERO_SOURCE: &str = "/dev/zero";
/// Discards everything written to it
pub const DISCARD_SINK: &str = "/dev/null";

/// Pushes one byte from the zero device into the block, then one byte from
/// the block into the discard device. The transfers go through the OS, so the
/// compiler cannot prove the allocation dead and drop the call that produced
/// it. A device that fails to open skips its transfer; the allocation verdict
/// is already in by the time this runs.
pub fn touch_through_devices(block: &mut AlignedBlock) {
    if block.is_empty() {
        return;
    }

    if let Ok(mut zero) = File::open(ZERO_SOURCE) {
        let _ = zero.read(&mut block.as_mut_slice()[..1]);
    }

    if let Ok(mut sink) = OpenOptions::new().write(true).open(DISCARD_SINK) {
        let _ = sink.write(&block.as_slice()[..1]);
    }
}

/// Volatile read-through and write-through of the first byte. Same goal as
/// [`touch_through_devices`] without the device dependency.
pub fn touch_volatile(block: &mut AlignedBlock) {
    if block.is_empty() {
        return;
    }

    let ptr = block.as_mut_slice().as_mut_ptr();
    unsafe {
        let byte = std::ptr::read_volatile(ptr);
        std::ptr::write_volatile(ptr, byte);
    }
}
