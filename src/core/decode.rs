//! Decoding of captured frames into printable ARP records.

use std::fmt::{
    Display,
    Formatter,
    Result as FmtResult,
};

use crate::core::repr::{
    eth_types,
    Arp,
    EthernetFrame,
};
use crate::{
    Error,
    Result,
};

/// Smallest frame that holds an Ethernet header, an ARP header and an
/// Ethernet/IPv4 address block.
pub const MIN_FRAME_LEN: usize =
    EthernetFrame::<&[u8]>::HEADER_LEN + Arp::HEADER_LEN + Arp::ADDR_BLOCK_LEN;

/// An ARP packet decoded from a captured frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Record {
    pub arp: Arp,
    /// Length of the captured frame in bytes.
    pub frame_len: usize,
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(
            f,
            "ARP opcode={} size={} sender_mac={} sender_ip={} target_mac={} target_ip={}",
            self.arp.op,
            self.frame_len,
            self.arp.source_hw_addr,
            self.arp.source_proto_addr,
            self.arp.target_hw_addr,
            self.arp.target_proto_addr,
        )
    }
}

/// Decodes a captured Ethernet frame into an ARP record.
///
/// Frames shorter than `MIN_FRAME_LEN` or not carrying ARP produce a
/// diagnostic error (see `Error::is_diagnostic`).
pub fn decode(frame: &[u8]) -> Result<Record> {
    if frame.len() < MIN_FRAME_LEN {
        return Err(Error::FrameTooSmall {
            got: frame.len(),
            need: MIN_FRAME_LEN,
        });
    }

    let eth_frame = EthernetFrame::try_new(frame)?;
    if eth_frame.payload_type() != eth_types::ARP {
        return Err(Error::WrongEthertype(eth_frame.payload_type()));
    }

    let arp = Arp::deserialize(eth_frame.payload())?;

    Ok(Record {
        arp,
        frame_len: frame.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::repr::{
        ArpOp,
        EthernetAddress,
        Ipv4Address,
    };

    fn arp_frame(op: u16, len: usize) -> Vec<u8> {
        let mut frame = vec![
            // Ethernet header.
            0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF, 0x08, 0x06,
            // ARP header.
            0x00, 0x01, 0x08, 0x00, 0x06, 0x04, (op >> 8) as u8, op as u8,
            // Address block.
            0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF, 192, 168, 1, 1,
            0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 192, 168, 1, 2,
        ];
        frame.resize(len, 0);
        frame
    }

    #[test]
    fn test_min_frame_len() {
        assert_eq!(MIN_FRAME_LEN, 42);
    }

    #[test]
    fn test_decode_too_small() {
        for len in 0 .. MIN_FRAME_LEN {
            let frame: Vec<u8> = (0 .. len).map(|_| rand::random::<u8>()).collect();
            assert_matches!(
                decode(&frame),
                Err(Error::FrameTooSmall { got, need: 42 }) if got == len
            );
        }
    }

    #[test]
    fn test_decode_too_small_arp() {
        let frame = arp_frame(1, 41);
        assert_matches!(
            decode(&frame),
            Err(Error::FrameTooSmall { got: 41, need: 42 })
        );
    }

    #[test]
    fn test_decode_wrong_ethertype() {
        let mut frame = arp_frame(1, 60);
        frame[12] = 0x08;
        frame[13] = 0x00;
        assert_matches!(decode(&frame), Err(Error::WrongEthertype(0x0800)));

        for _ in 0 .. 100 {
            let mut frame: Vec<u8> = (0 .. 60).map(|_| rand::random::<u8>()).collect();
            if frame[12] == 0x08 && frame[13] == 0x06 {
                frame[13] = 0x07;
            }
            assert_matches!(decode(&frame), Err(Error::WrongEthertype(_)));
        }
    }

    #[test]
    fn test_decode_request() {
        let record = decode(&arp_frame(1, 42)).unwrap();
        assert_eq!(record.arp.op, ArpOp::Request);
        assert_eq!(record.frame_len, 42);
    }

    #[test]
    fn test_decode_reply() {
        let record = decode(&arp_frame(2, 60)).unwrap();
        assert_eq!(record.arp.op, ArpOp::Reply);
        assert_eq!(record.frame_len, 60);
    }

    #[test]
    fn test_decode_unknown_op() {
        let record = decode(&arp_frame(9999, 42)).unwrap();
        assert_eq!(record.arp.op, ArpOp::Unknown(9999));
        assert!(record.to_string().starts_with("ARP opcode=UNKNOWN(9999) size=42 "));
    }

    #[test]
    fn test_decode_addresses() {
        let record = decode(&arp_frame(2, 42)).unwrap();
        assert_eq!(
            record.arp.source_hw_addr,
            EthernetAddress::new([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF])
        );
        assert_eq!(record.arp.source_proto_addr, Ipv4Address::new([192, 168, 1, 1]));
        assert_eq!(
            record.arp.target_hw_addr,
            EthernetAddress::new([0x11, 0x22, 0x33, 0x44, 0x55, 0x66])
        );
        assert_eq!(record.arp.target_proto_addr, Ipv4Address::new([192, 168, 1, 2]));
    }

    #[test]
    fn test_decode_does_not_mutate() {
        let frame = arp_frame(2, 60);
        let copy = frame.clone();
        let _ = decode(&frame);
        assert_eq!(frame, copy);
    }

    #[test]
    fn test_record_display() {
        let record = decode(&arp_frame(2, 60)).unwrap();
        assert_eq!(
            record.to_string(),
            "ARP opcode=REPLY size=60 sender_mac=aa:bb:cc:dd:ee:ff sender_ip=192.168.1.1 \
             target_mac=11:22:33:44:55:66 target_ip=192.168.1.2"
        );
    }
}
