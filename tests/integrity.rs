use guardring::{RingBuffer, GUARD_SENTINEL};

#[test]
fn stray_write_is_detected() {
    let mut rb: RingBuffer = RingBuffer::new(5).unwrap();
    assert!(rb.verify_integrity());

    rb.overwrite_guard(0xDEAD_BEEF);
    assert!(!rb.verify_integrity());

    rb.overwrite_guard(u32::from(GUARD_SENTINEL));
    assert!(rb.verify_integrity());
}

#[test]
fn normal_traffic_never_touches_guard() {
    let mut rb: RingBuffer<u16> = RingBuffer::new(4).unwrap();

    for round in 0..100u16 {
        while rb.put(round).is_ok() {}
        assert!(rb.verify_integrity());
        for _ in 0..(round % 4 + 1) {
            let _ = rb.get();
        }
        assert!(rb.verify_integrity());
    }
}
