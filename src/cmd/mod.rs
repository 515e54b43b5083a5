//! CLI command implementations.
//!
//! Each submodule owns one `Commands` variant:
//!
//! | Module   | Command handled                        |
//! |----------|----------------------------------------|
//! | `demo`   | `Demo` - scripted end-to-end pipeline  |
//! | `run`    | `Run` - interactive workflow driver    |
//! | `cycle`  | `Cycle` - cycle creation and timeline  |
//! | `export` | `Export` - markdown draft export       |

pub mod cycle;
pub mod demo;
pub mod export;
pub mod run;

pub use cycle::cmd_cycle;
pub use demo::cmd_demo;
pub use export::cmd_export;
pub use run::cmd_run;
