/// Argument parsing for the binary
pub mod cli;
/// Plain-text rendering of the trash view
pub mod terminal;
