//! Cross-cutting helpers shared by views and export code.

pub mod format;
pub mod platform;
