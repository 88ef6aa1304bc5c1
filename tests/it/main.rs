//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices,
//! reducing linking overhead.
//!
//! Structure:
//! - helpers: Diagram and engine builders shared by all tests
//! - integration: Multi-component workflow tests driving a whole engine
//! - unit: Single-module unit tests

mod helpers;
mod unit;
