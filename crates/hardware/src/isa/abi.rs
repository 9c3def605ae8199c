//! Y86-64 register names.
//!
//! Defines the architectural register names, in encoding order, and the
//! index of the register the stack instructions use implicitly.

/// Register index of `%rsp` (stack pointer).
pub const REG_SP: usize = 4;

/// Register names in encoding order, without the `%` sigil.
///
/// These are also the keys of the `REG` object in a serialized snapshot.
pub const REG_NAMES: [&str; 15] = [
    "rax", "rcx", "rdx", "rbx", "rsp", "rbp", "rsi", "rdi", "r8", "r9", "r10", "r11", "r12",
    "r13", "r14",
];

/// Looks up a register index by name (with or without a leading `%`).
pub fn index_of(name: &str) -> Option<usize> {
    let name = name.strip_prefix('%').unwrap_or(name);
    REG_NAMES.iter().position(|&n| n == name)
}
