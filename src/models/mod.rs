pub mod config;
pub mod error;
pub mod mask;
pub mod state;
pub mod stream_info;
