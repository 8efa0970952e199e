// Library root: the app orchestrator, the TUI/app message protocol, and the
// terminal dashboard. The `mockdraft` binary and integration tests use these.

pub mod app;
pub mod protocol;
pub mod tui;
