//! Workspace-level end-to-end tests for the RV32 interpreter live in `tests/`.
