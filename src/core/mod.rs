//! Core, platform independent capture and decoding code.

pub mod capture;
pub mod decode;
pub mod link;
pub mod repr;
