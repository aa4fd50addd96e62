//! Output module for console output.
//!
//! Provides:
//! - Colored status lines
//! - Plain values for piping
//! - File listings

pub mod console;

pub use console::{
    print_error, print_file_table, print_info, print_success, print_value, print_warning,
    set_color,
};
