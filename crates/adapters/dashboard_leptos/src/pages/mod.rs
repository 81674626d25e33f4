mod config;
mod live;
mod messages;
mod start;

pub use config::Config;
pub use live::Live;
pub use messages::Messages;
pub use start::Start;
