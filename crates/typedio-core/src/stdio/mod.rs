//! Typed standard I/O.
//!
//! Token scanning (the `%s`/`%d`/`%f` input side), fixed text rendering (the
//! `%s`/`%d`/`%f`/`%g` output side), and the [`Console`] that ties both to a
//! pair of stream handles.

pub mod console;
pub mod printf;
pub mod scan;

pub use console::Console;
pub use scan::{is_space, parse_float, parse_integer, read_line_into, read_token, read_token_into};
