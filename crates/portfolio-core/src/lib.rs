//! Platform-independent logic for the portfolio page effects.
//!
//! Every animation on the page (hero grid, cursor ring, typed roles,
//! heading scramble, stat counters, project carousel) is expressed here as
//! plain state plus per-tick functions, with time and randomness injected
//! by the caller. The `portfolio-web` crate wires these types to the DOM;
//! nothing in this crate touches platform APIs, so all of it runs under
//! native `cargo test`.

pub mod carousel;
pub mod constants;
pub mod counter;
pub mod cursor;
pub mod form;
pub mod grid;
pub mod handle;
pub mod scramble;
pub mod typing;

pub use carousel::*;
pub use counter::*;
pub use cursor::*;
pub use grid::*;
pub use handle::*;
pub use scramble::*;
pub use typing::*;
