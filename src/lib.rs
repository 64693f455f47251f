pub mod codec;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod record;
pub mod replay;
pub mod script;
pub mod session;
pub mod store;
pub mod surface;
pub mod time;

pub use session::Whiteboard;

#[cfg(test)]
mod test;
