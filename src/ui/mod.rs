pub mod browser;
pub mod dialogs;
pub mod help;

pub use browser::render_browser_view;
pub use dialogs::render_reset_confirmation;
pub use help::render_help_view;
