/// Addressed byte access, one opcode class per memory region and direction.
/// Each addressed byte is its own 3 byte chip select framed transfer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MemOp {
    /// read a byte of volatile memory, 12 bit address space
    ReadMemory,
    /// write a byte of volatile memory, 12 bit address space
    WriteMemory,
    /// read a byte of OTP memory, 13 bit address space (OTP has no
    /// write opcode in this protocol)
    ReadOtp,
}

/// transfer length of every addressed byte operation
pub const FRAME_LEN: usize = 3;

impl MemOp {
    /// (opcode base, mask for the high address bits folded into the opcode)
    const fn layout(self) -> (u8, u8) {
        match self {
            MemOp::ReadMemory => (0x10, 0x0f),
            MemOp::WriteMemory => (0x90, 0x0f),
            MemOp::ReadOtp => (0x20, 0x1f),
        }
    }

    /// Build the transfer for one addressed byte. `data` is the byte to
    /// write, or zero as a clock-out placeholder on reads; the device
    /// answers in byte 2 of the received frame. Out of range addresses are
    /// not rejected, excess high bits simply fall outside the opcode mask.
    pub fn frame(self, address: u16, data: u8) -> [u8; FRAME_LEN] {
        let (base, high_mask) = self.layout();
        [
            base | ((address >> 8) as u8 & high_mask),
            (address & 0xff) as u8,
            data,
        ]
    }
}

/// (address, length) of the fixed label fields in sensor memory
pub const LABEL_PRODUCT_NO: (u16, usize) = (0x0200, 32);
pub const LABEL_SERIAL_NO: (u16, usize) = (0x0220, 32);
pub const LABEL_FULLSCALE_1: (u16, usize) = (0x0240, 16);
pub const LABEL_FULLSCALE_2: (u16, usize) = (0x0250, 16);
pub const LABEL_TYPE: (u16, usize) = (0x0260, 16);
pub const LABEL_SPEED: (u16, usize) = (0x0270, 16);

/// address of the 4 byte CRC word over the volatile memory image
pub const ADDR_SRAM_CRC: u16 = 0x03fc;
/// address of the 4 byte CRC word over the OTP image
pub const ADDR_OTP_CRC: u16 = 0x1ffc;
