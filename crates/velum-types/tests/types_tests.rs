//! Integration tests for velum-types.

use velum_types::{BodyId, TriangleId, VelumError};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn triangle_id_index() {
    let id = TriangleId(42);
    assert_eq!(id.index(), 42);
}

#[test]
fn body_id_index() {
    let id = BodyId(3);
    assert_eq!(id.index(), 3);
}

#[test]
fn ids_are_not_interchangeable() {
    // Compile-time guarantee — these types are distinct.
    let _t = TriangleId(0);
    let _b = BodyId(0);
}

#[test]
fn ids_are_serializable() {
    let id = TriangleId(100);
    let json = serde_json::to_string(&id).unwrap();
    let deserialized: TriangleId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn error_display() {
    let err = VelumError::InvalidMesh("index 9 out of range".into());
    assert!(err.to_string().contains("index 9 out of range"));
}

#[test]
fn invalid_body_display() {
    let err = VelumError::InvalidBody {
        name: "Bunny".into(),
        reason: "unknown mesh 'bunny_lo'".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("Bunny"));
    assert!(msg.contains("bunny_lo"));
}
