//! Tightly packed encoding of the signed message.
//!
//! Matches the packed ABI layout used by EVM signers: addresses are 20 bytes,
//! booleans 1 byte, and 256-bit integers 32 bytes big-endian. Elements of an
//! address list are each left-padded to 32 bytes.

use std::mem;

use alloy_primitives::{Address, U256};

#[derive(Debug, Default, Clone)]
pub struct PackedEncoder {
    buf: Vec<u8>,
}

impl PackedEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn address(&mut self, addr: &Address) -> &mut Self {
        self.buf.extend_from_slice(addr.as_slice());
        self
    }

    pub fn address_list(&mut self, addrs: &[Address]) -> &mut Self {
        for addr in addrs {
            self.buf.extend_from_slice(&[0u8; 12]);
            self.buf.extend_from_slice(addr.as_slice());
        }
        self
    }

    pub fn bool(&mut self, flag: bool) -> &mut Self {
        self.buf.push(flag as u8);
        self
    }

    pub fn u256(&mut self, value: U256) -> &mut Self {
        self.buf.extend_from_slice(&value.to_be_bytes::<32>());
        self
    }

    /// Appends bytes that are already packed.
    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn finish(&mut self) -> Vec<u8> {
        mem::take(&mut self.buf)
    }
}
