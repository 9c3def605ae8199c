use y86_core::Image;
use y86_core::common::Reg;
use y86_core::isa::opcodes::*;
use y86_core::isa::{AluOp, Cond};

/// "No register" in a register-specifier byte.
pub const NONE: u8 = 0xF;

/// Assembles instructions into an address-to-byte image.
///
/// Instructions are laid out back to back from the current origin;
/// `org` moves the origin, `quad` places raw data.
#[derive(Debug, Default)]
pub struct ProgramBuilder {
    image: Image,
    pos: u64,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn org(mut self, addr: u64) -> Self {
        self.pos = addr;
        self
    }

    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        for &b in bytes {
            self.image.insert(self.pos, b);
            self.pos += 1;
        }
        self
    }

    fn head(self, icode: u8, ifun: u8) -> Self {
        self.bytes(&[(icode << 4) | ifun])
    }

    fn regs(self, ra: u8, rb: u8) -> Self {
        self.bytes(&[(ra << 4) | rb])
    }

    fn word(self, v: u64) -> Self {
        self.bytes(&v.to_le_bytes())
    }

    pub fn quad(self, v: i64) -> Self {
        self.word(v as u64)
    }

    pub fn halt(self) -> Self {
        self.head(I_HALT, 0)
    }

    pub fn nop(self) -> Self {
        self.head(I_NOP, 0)
    }

    pub fn rrmovq(self, src: Reg, dst: Reg) -> Self {
        self.cmov(Cond::Always, src, dst)
    }

    pub fn cmov(self, cond: Cond, src: Reg, dst: Reg) -> Self {
        self.head(I_RRMOVQ, cond.funct()).regs(src.nibble(), dst.nibble())
    }

    pub fn irmovq(self, value: i64, dst: Reg) -> Self {
        self.head(I_IRMOVQ, 0).regs(NONE, dst.nibble()).quad(value)
    }

    pub fn rmmovq(self, src: Reg, disp: i64, base: Reg) -> Self {
        self.head(I_RMMOVQ, 0).regs(src.nibble(), base.nibble()).quad(disp)
    }

    pub fn mrmovq(self, disp: i64, base: Reg, dst: Reg) -> Self {
        self.head(I_MRMOVQ, 0).regs(dst.nibble(), base.nibble()).quad(disp)
    }

    pub fn op(self, op: AluOp, src: Reg, dst: Reg) -> Self {
        self.head(I_OPQ, op.funct()).regs(src.nibble(), dst.nibble())
    }

    pub fn addq(self, src: Reg, dst: Reg) -> Self {
        self.op(AluOp::Add, src, dst)
    }

    pub fn subq(self, src: Reg, dst: Reg) -> Self {
        self.op(AluOp::Sub, src, dst)
    }

    pub fn jxx(self, cond: Cond, target: u64) -> Self {
        self.head(I_JXX, cond.funct()).word(target)
    }

    pub fn jmp(self, target: u64) -> Self {
        self.jxx(Cond::Always, target)
    }

    pub fn call(self, target: u64) -> Self {
        self.head(I_CALL, 0).word(target)
    }

    pub fn ret(self) -> Self {
        self.head(I_RET, 0)
    }

    pub fn pushq(self, src: Reg) -> Self {
        self.head(I_PUSHQ, 0).regs(src.nibble(), NONE)
    }

    pub fn popq(self, dst: Reg) -> Self {
        self.head(I_POPQ, 0).regs(dst.nibble(), NONE)
    }

    pub fn build(self) -> Image {
        self.image
    }
}
