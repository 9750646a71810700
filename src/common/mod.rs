//! Cross-cutting helpers shared by the indicator and signal layers.

pub mod math;
