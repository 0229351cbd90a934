// ============================================================
// Layer 3: Domain Layer
// ============================================================
// Pure Rust types describing the classification problem:
// tokens, labelled sequences, the vocabulary and the pretrained
// vector table.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits

/// The fixed number-word lexicon and padding token
pub mod token;

/// A padded, labelled token sequence
pub mod sequence;

/// First-encounter token ↔ index mapping
pub mod vocabulary;

/// Unit-normalised pretrained vectors keyed by token
pub mod vectors;

// Core abstractions (traits) that other layers implement
pub mod traits;
