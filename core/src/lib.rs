pub mod config;
pub mod errors;
pub mod event;
pub mod handler;
pub mod response;
pub mod telemetry;

pub use config::GreetingConfig;
pub use errors::{GreetingError, Result};
pub use event::Event;
pub use handler::Greeter;
pub use response::GreetingResponse;
