pub mod log_capture;
pub mod mock_ports;

pub use log_capture::*;
pub use mock_ports::*;
