#![cfg(feature = "serde")]

use rbd_spatial::{Frame, Spatial, SpatialInertia, Twist, Wrench};

#[test]
fn twist_json_roundtrip_keeps_frame() {
    let f = Frame::new();
    let t = Twist::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], f).unwrap();
    let json = serde_json::to_string(&t).unwrap();
    let back: Twist = serde_json::from_str(&json).unwrap();
    assert_eq!(back.frame(), f);
    assert_eq!(back.as_slice(), t.as_slice());
    // Still interoperates with quantities in the same frame.
    let w = Wrench::from_slice(&[1.0; 6], f).unwrap();
    assert_eq!(back.power(&w).unwrap(), 21.0);
}

#[test]
fn spatial_enum_roundtrip() {
    let f = Frame::new();
    let q: Spatial = SpatialInertia::sphere(1.0, 0.5, f).into();
    let json = serde_json::to_string(&q).unwrap();
    let back: Spatial = serde_json::from_str(&json).unwrap();
    assert_eq!(back.kind(), q.kind());
    assert_eq!(back.frame(), f);
    assert_eq!(back.as_slice(), q.as_slice());
}
