use std::error::Error as _;
use std::io;

use y86_core::Status;
use y86_core::common::{Fault, LoadError};

#[test]
fn address_fault_maps_to_adr() {
    assert_eq!(Fault::InvalidAddress(0x20000).status(), Status::Adr);
}

#[test]
fn instruction_fault_maps_to_ins() {
    let f = Fault::InvalidInstruction { pc: 4, byte: 0xC0 };
    assert_eq!(f.status(), Status::Ins);
}

#[test]
fn fault_messages_are_hex() {
    assert_eq!(Fault::InvalidAddress(0x20000).to_string(), "invalid address 0x20000");
    assert_eq!(
        Fault::InvalidInstruction { pc: 0x10, byte: 0xF0 }.to_string(),
        "invalid instruction byte 0xf0 at 0x10"
    );
}

#[test]
fn load_error_keeps_source() {
    let err = LoadError::Io {
        path: "missing.yo".into(),
        source: io::Error::new(io::ErrorKind::NotFound, "gone"),
    };
    assert!(err.to_string().contains("missing.yo"));
    assert!(err.source().is_some());
}
