/// opcode class for a 24 bit register read, or'ed with the register index
pub const OPCODE_READ_REGISTER: u8 = 0x40;
/// opcode class for a 24 bit register write, or'ed with the register index
pub const OPCODE_WRITE_REGISTER: u8 = 0xc0;

/// single byte command opcodes
pub const CMD_RESET: u8 = 0x88;

/// Result and configuration registers, 6 bit indices. `read_register()` and
/// `write_register()` also accept raw indices for registers not listed here.
#[derive(Copy, Clone, Debug)]
#[allow(non_camel_case_types, unused)]
pub enum Reg {
    /// pressure result, primary channel
    PRESSURE_1 = 0,
    /// pressure result, secondary channel
    PRESSURE_2 = 1,
    /// sensor element temperature result
    TEMPERATURE = 2,
    /// status word
    STATUS = 3,
}

impl Reg {
    pub fn index(&self) -> u8 {
        *self as u8
    }
}
