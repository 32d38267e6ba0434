//! Shared test helpers for the Dudo engine workspace.

pub mod logging;
