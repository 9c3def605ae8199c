//! Decoder and disassembler tests.
