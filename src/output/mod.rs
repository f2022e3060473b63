//! Terminal output for humans.
//!
//! Progress goes to stdout, diagnostics go through `log`.

mod terminal;

pub use terminal::{
    format_tags, print_error, print_realm, print_resource_group, print_success, print_warning,
    ADMIN_GROUPS_HELP,
};
