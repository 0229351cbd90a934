// ============================================================
// Layer 2: Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish a goal.
//
// Rules for this layer:
//   - No ML math or model code here
//   - No argument parsing here (that's Layer 1)
//   - No direct file access (that's Layer 6)
//   - Only workflow coordination

// The train-and-evaluate workflow
pub mod train_use_case;
