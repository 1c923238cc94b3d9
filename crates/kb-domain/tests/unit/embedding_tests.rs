//! Unit tests for Embedding value object

use kb_domain::Embedding;

#[test]
fn test_embedding_creation() {
    let vector = vec![0.1, 0.2, 0.3, 0.4, 0.5];
    let embedding = Embedding::new(vector.clone(), "sin-hash");

    assert_eq!(embedding.vector, vector);
    assert_eq!(embedding.model, "sin-hash");
    assert_eq!(embedding.dimensions, 5);
}

#[test]
fn test_embedding_magnitude() {
    let embedding = Embedding::new(vec![3.0, 4.0], "test");
    assert!((embedding.magnitude() - 5.0).abs() < 1e-12);

    let zero = Embedding::new(vec![0.0; 4], "test");
    assert_eq!(zero.magnitude(), 0.0);
}

#[test]
fn test_embedding_finiteness() {
    assert!(Embedding::new(vec![0.5, 0.25], "test").is_finite());
    assert!(!Embedding::new(vec![0.5, f64::NAN], "test").is_finite());
    assert!(!Embedding::new(vec![f64::INFINITY], "test").is_finite());
}

#[test]
fn test_embedding_serialization() {
    let embedding = Embedding::new(vec![0.5, 0.75], "sin-hash");
    let json = serde_json::to_value(&embedding).unwrap();

    assert_eq!(json["dimensions"], 2);
    assert_eq!(json["model"], "sin-hash");
    assert_eq!(json["vector"][1], 0.75);
}

#[test]
fn test_embedding_as_slice() {
    let embedding = Embedding::new(vec![1.0, 2.0, 3.0], "test");
    let slice: &[f64] = embedding.as_ref();
    assert_eq!(slice, embedding.as_slice());
    assert_eq!(slice.len(), 3);
}
