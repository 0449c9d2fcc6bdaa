//! Deserialization of link layer frames.
//!
//! The `repr` module provides views and representations of Ethernet frames
//! and the ARP packets they carry, read from byte buffers by offset.

pub mod arp;
pub mod ethernet;
pub mod ipv4;

pub use self::arp::{
    Arp,
    Op as ArpOp,
};
pub use self::ethernet::{
    eth_types,
    Address as EthernetAddress,
    Frame as EthernetFrame,
};
pub use self::ipv4::Address as Ipv4Address;
