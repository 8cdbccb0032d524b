// Library root
// -----------
// The binary (`main.rs`) is a thin wrapper; the README generator lives here.
//
// Module responsibilities:
// - `answers`: the collected answers, the license table and the input
//   validators.
// - `ui`: terminal prompts (dialoguer) and the spinner shown during the
//   profile lookup.
// - `api`: blocking GitHub client that resolves a username to its avatar.
// - `render`: turns answers and avatar into the README text.
// - `output`: writes the README to disk.
// - `pipeline`: lookup, render and write in order.
// - `config` / `error`: compiled defaults and the fatal error type.
pub mod answers;
pub mod api;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod ui;
