//! Console output utilities.

use console::style;

/// Enable or disable colored output for both stdout and stderr.
pub fn set_color(enabled: bool) {
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print a bare result value (a path or name) so it can be piped.
pub fn print_value(value: &str) {
    println!("{}", value);
}

/// Print a table of listed files.
pub fn print_file_table(entries: &[crate::ops::FileEntry]) {
    for entry in entries {
        println!("  {:>10}  {}", style(entry.size).dim(), entry.name);
    }
    println!("{}", style(format!("{} file(s)", entries.len())).bold());
}
