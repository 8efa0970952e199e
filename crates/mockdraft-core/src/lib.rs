// Library root: the draft engine, the static player source, and league
// configuration. The TUI crate and integration tests consume this API.

pub mod config;
pub mod draft;
pub mod players;
