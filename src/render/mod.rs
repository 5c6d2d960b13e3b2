//! Module implementing the rendering of lockups.

mod engine;
mod error;
mod layout;
mod output;
mod task;
mod text;

pub use self::engine::{Builder as EngineBuilder, BuildError as EngineBuildError,
                       Config as EngineConfig, Engine};
pub use self::error::RenderError;
pub use self::layout::{lay_out, Layout, LayoutBox};
pub use self::output::RenderOutput;
