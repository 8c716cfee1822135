/// Command modules for vend
///
/// Each module owns one subcommand's argument surface and wires it to the
/// library operation it fronts.
pub mod build;
pub mod completions;
pub mod fetch;
pub mod sync;
