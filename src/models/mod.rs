//! lakeFS Actions model types.

mod action_run;
mod hook_output;
mod hook_run;

pub use action_run::*;
pub use hook_output::*;
pub use hook_run::*;
