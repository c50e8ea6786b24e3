// Domain models

mod server;

pub use server::{ServerInfo, UNKNOWN};
