//! Cross-crate scenario tests for benchplot live in `tests/`.
