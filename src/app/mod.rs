pub mod app;
pub mod batch;
pub mod event;
pub mod format;
pub mod mode;

pub use app::{App, AppOutput, HELP_TEXT};
pub use batch::{gather_inputs, InputSource, DEMO_SENTENCES};
pub use event::AppEvent;
pub use format::OutputFormat;
pub use mode::AppMode;
