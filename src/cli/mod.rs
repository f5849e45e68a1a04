mod commands;
mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::{
    handle_items, handle_list, handle_preview, handle_save, handle_show, parse_assignment,
};
