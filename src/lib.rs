pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod preview;
pub mod session;
pub mod template;

pub use catalog::{Catalog, ConfigurableItem};
pub use engine::{RenderMode, Segment, VariableMapping};
pub use error::{Result, StencilError};
pub use session::{ConfigSession, SavedConfiguration, SessionStatus};
pub use template::Template;
