use crate::mem_info::{PROBE_ALIGNMENT, PROBE_SIZE};
use crate::run_probe;
use std::os::raw::c_int;

/// Runs one probe pass for a foreign caller.
///
/// Returns the raw allocator status: zero for success, an errno value when
/// the entry point refuses the request, -1 when the entry point reports
/// success but breaks the alignment contract.
#[no_mangle]
pub extern "C" fn memalign_probe_run(alignment: usize, size: usize) -> c_int {
    run_probe(alignment, size) as c_int
}

/// Runs the probe with the default request, 32 bytes at a 1024 byte boundary
#[no_mangle]
pub extern "C" fn memalign_probe_default() -> c_int {
    memalign_probe_run(PROBE_ALIGNMENT, PROBE_SIZE)
}
