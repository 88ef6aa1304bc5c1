//! Unit tests for circuitboard.

mod highlight_tests;
mod layout_tests;
mod perf_tests;
mod settings_watcher_tests;
mod spatial_index_tests;
