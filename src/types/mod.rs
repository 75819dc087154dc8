mod connection;
mod tcp_state;

pub use connection::ConnectionFields;
pub use tcp_state::{TcpState, UnknownStateName};
