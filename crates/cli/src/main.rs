//! Command-line interface for the `biocat` application.
//!
//! This crate serves as the main entry point for the executable, delegating
//! its core functionality to the `biocat-browser` crate.

fn main() -> anyhow::Result<()> {
    biocat_browser::run()
}
