pub mod clients;
pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod generator;
pub mod http;
pub mod palette;
pub mod prompts;
pub mod template;
pub mod terminal;
pub mod validator;
pub mod wizard;

pub use error::{GenerationError, LandingForgeError, Result};
pub use form::{FormData, GeneratedPage, Tone};
pub use generator::{GenerationMode, PageGenerator};
