use memalign_probe::probe::{AlignedAllocEntry, AlignedBlock, ProbeError};
use std::ffi::c_void;

#[test]
fn non_power_of_two_alignment_is_rejected() {
    let err = AlignedBlock::allocate(3, 32).expect_err("alignment 3 must be rejected");
    assert_eq!(err.status(), libc::EINVAL);
}

#[test]
fn alignment_below_pointer_size_is_rejected() {
    let err = AlignedBlock::allocate(2, 32).expect_err("alignment 2 must be rejected");
    assert_eq!(err.status(), libc::EINVAL);
    assert!(!err.to_string().is_empty());
}

struct ExhaustedEntry;

impl AlignedAllocEntry for ExhaustedEntry {
    fn aligned_alloc(&self, _out: &mut *mut c_void, _alignment: usize, _size: usize) -> i32 {
        libc::ENOMEM
    }

    fn release(&self, _block: *mut c_void) {
        unreachable!("nothing was handed out");
    }
}

static EXHAUSTED: ExhaustedEntry = ExhaustedEntry;

#[test]
fn exhausted_allocator_reports_its_cause() {
    let err = AlignedBlock::allocate_in(&EXHAUSTED, 1024, 32).expect_err("entry always fails");
    assert_eq!(err.status(), libc::ENOMEM);
    let rendered = err.to_string();
    assert!(
        rendered.contains("posix_memalign"),
        "diagnostic should name the entry point: {}",
        rendered
    );
    match err {
        ProbeError::Alloc { status, .. } => assert_eq!(status, libc::ENOMEM),
        other => panic!("unexpected probe error: {:?}", other),
    }
}
