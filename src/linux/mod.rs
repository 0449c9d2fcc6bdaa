//! Linux specific capture using `AF_PACKET` raw sockets.

pub mod capture;
pub mod libc;
pub mod resolve;
pub mod socket;
pub mod sys;

pub use self::capture::run;
pub use self::resolve::resolve;
pub use self::socket::CaptureSocket;
pub use self::sys::{
    Fd,
    Kernel,
    Libc,
};
