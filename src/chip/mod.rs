mod registers;
pub use registers::{Reg, CMD_RESET, OPCODE_READ_REGISTER, OPCODE_WRITE_REGISTER};

pub mod memory;
pub use memory::{MemOp, FRAME_LEN};

use heapless::String;
use log::{debug, trace};

use crate::conversion;
use crate::driver::SpotDriver;

/// longest label field in sensor memory, reads are clamped to this
pub const LABEL_LEN: usize = 32;

/// One Spot sensor behind a [`SpotDriver`], together with the stored
/// fullscale calibration value used for pressure conversion.
pub struct Spot<D: SpotDriver> {
    pub driver: D,
    fullscale: f32,
}

impl<D: SpotDriver> Spot<D> {
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            fullscale: 0.0,
        }
    }

    /// give the driver back
    pub fn release(self) -> D {
        self.driver
    }

    /// prepare the control lines, must run once before the first transfer
    pub fn begin(&mut self) -> Result<(), D::Error> {
        self.driver.init()
    }

    /// send a single byte command, the sensor returns nothing
    pub fn send_command(&mut self, cmd: u8) -> Result<(), D::Error> {
        let mut buf = [cmd];
        self.driver.transfer(&mut buf)
    }

    pub fn reset_sensor(&mut self) -> Result<(), D::Error> {
        debug!("sending sensor reset");
        self.send_command(CMD_RESET)
    }

    /// true while the RDY line signals a fresh result
    pub fn is_data_available(&mut self) -> Result<bool, D::Error> {
        self.driver.data_ready()
    }

    /// Read a 24 bit result register. The three data bytes arrive MSB
    /// first, the top 8 bits of the returned word are always zero.
    pub fn read_register(&mut self, reg: u8) -> Result<u32, D::Error> {
        let mut buf = [reg | OPCODE_READ_REGISTER, 0, 0, 0];
        self.driver.transfer(&mut buf)?;
        Ok((buf[1] as u32) << 16 | (buf[2] as u32) << 8 | buf[3] as u32)
    }

    /// write a 24 bit configuration register, data goes out MSB first
    pub fn write_register(&mut self, reg: u8, value: u32) -> Result<(), D::Error> {
        let mut buf = [
            reg | OPCODE_WRITE_REGISTER,
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        ];
        self.driver.transfer(&mut buf)
    }

    /// One 3 byte transfer per addressed byte, chip select pulsed per
    /// transfer while the driver holds the bus for the whole span.
    fn read_span(&mut self, op: MemOp, address: u16, data: &mut [u8]) -> Result<(), D::Error> {
        trace!("{:?} of {} bytes at {:#06x}", op, data.len(), address);
        for (i, out) in data.iter_mut().enumerate() {
            let mut buf = op.frame(address.wrapping_add(i as u16), 0);
            self.driver.transfer(&mut buf)?;
            *out = buf[2];
        }
        Ok(())
    }

    /// read a span of volatile sensor memory
    pub fn read_memory(&mut self, address: u16, data: &mut [u8]) -> Result<(), D::Error> {
        self.read_span(MemOp::ReadMemory, address, data)
    }

    /// read a span of OTP memory
    pub fn read_otp(&mut self, address: u16, data: &mut [u8]) -> Result<(), D::Error> {
        self.read_span(MemOp::ReadOtp, address, data)
    }

    /// write a span of volatile sensor memory, writes are not read back
    pub fn write_memory(&mut self, address: u16, data: &[u8]) -> Result<(), D::Error> {
        trace!("memory write of {} bytes at {:#06x}", data.len(), address);
        for (i, byte) in data.iter().enumerate() {
            let mut buf = MemOp::WriteMemory.frame(address.wrapping_add(i as u16), *byte);
            self.driver.transfer(&mut buf)?;
        }
        Ok(())
    }

    /// Read a label field from sensor memory. A valid label is zero
    /// terminated within the read span; if no terminator shows up the
    /// data is invalid and the result collapses to an empty string.
    pub fn read_label(&mut self, address: u16, length: usize) -> Result<String<LABEL_LEN>, D::Error> {
        let mut buf = [0u8; LABEL_LEN];
        let length = length.min(LABEL_LEN);
        self.read_memory(address, &mut buf[..length])?;

        let end = buf[..length].iter().position(|&b| b == 0).unwrap_or(0);
        let label = core::str::from_utf8(&buf[..end]).unwrap_or("");
        Ok(String::try_from(label).unwrap_or_default())
    }

    pub fn read_product_no(&mut self) -> Result<String<LABEL_LEN>, D::Error> {
        let (address, length) = memory::LABEL_PRODUCT_NO;
        self.read_label(address, length)
    }

    pub fn read_serial_no(&mut self) -> Result<String<LABEL_LEN>, D::Error> {
        let (address, length) = memory::LABEL_SERIAL_NO;
        self.read_label(address, length)
    }

    pub fn read_fullscale1(&mut self) -> Result<String<LABEL_LEN>, D::Error> {
        let (address, length) = memory::LABEL_FULLSCALE_1;
        self.read_label(address, length)
    }

    pub fn read_fullscale2(&mut self) -> Result<String<LABEL_LEN>, D::Error> {
        let (address, length) = memory::LABEL_FULLSCALE_2;
        self.read_label(address, length)
    }

    pub fn read_type(&mut self) -> Result<String<LABEL_LEN>, D::Error> {
        let (address, length) = memory::LABEL_TYPE;
        self.read_label(address, length)
    }

    pub fn read_speed(&mut self) -> Result<String<LABEL_LEN>, D::Error> {
        let (address, length) = memory::LABEL_SPEED;
        self.read_label(address, length)
    }

    /// CRC over the volatile memory image, stored little endian (the
    /// opposite byte order of the result registers)
    pub fn read_sram_crc(&mut self) -> Result<u32, D::Error> {
        let mut buf = [0u8; 4];
        self.read_memory(memory::ADDR_SRAM_CRC, &mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    /// CRC over the OTP image, stored little endian
    pub fn read_otp_crc(&mut self) -> Result<u32, D::Error> {
        let mut buf = [0u8; 4];
        self.read_otp(memory::ADDR_OTP_CRC, &mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    /// store the fullscale pressure used by [`Spot::convert_pressure`]
    pub fn set_fullscale(&mut self, fullscale: f32) {
        self.fullscale = fullscale;
    }

    /// convert a pressure result register with the stored fullscale value
    pub fn convert_pressure(&self, raw: u32) -> f32 {
        conversion::pressure(raw, self.fullscale)
    }

    /// convert a pressure result register with an explicit fullscale value
    pub fn convert_pressure_fullscale(&self, raw: u32, fullscale: f32) -> f32 {
        conversion::pressure(raw, fullscale)
    }

    /// convert a temperature result register to degree Celsius
    pub fn convert_temperature(&self, raw: u32) -> f32 {
        conversion::temperature(raw)
    }
}
