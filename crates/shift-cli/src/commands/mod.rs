//! One handler per subcommand.
//!
//! Each `run` takes the parsed arguments and, when it touches files, the
//! [`Project`](crate::project::Project), and returns a
//! [`standout_dispatch::Output`] for the dispatcher to render.

pub mod add;
pub mod contrast;
pub mod convert;
pub mod init;
pub mod tokens;
pub mod types;
