//! Platform agnostic driver for INFICON Spot pressure sensors on a 4 wire
//! SPI bus (mode 1, MSB first, 4 MHz by default).
//!
//! The protocol layer talks through the [`SpotDriver`] trait;
//! [`SpotSpiDriver`] implements it over `embedded-hal` 1.0 `SpiBus` and
//! digital pins with a manually framed chip select line. On top of that,
//! [`Spot`] offers 24 bit register access, byte addressed memory and OTP
//! access, label string extraction and conversion of raw readings to
//! pressure and temperature.
//!
//! # Example
//! ```
//! # use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};
//! # use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};
//! # let mut spi = SpiMock::new(&[
//! #     SpiTransaction::transfer_in_place(vec![0x40, 0, 0, 0], vec![0, 0x10, 0x00, 0x00]),
//! #     SpiTransaction::flush(),
//! # ]);
//! # let mut cs = PinMock::new(&[
//! #     PinTransaction::set(State::High),
//! #     PinTransaction::set(State::Low),
//! #     PinTransaction::set(State::High),
//! # ]);
//! # let mut rdy = PinMock::new(&[]);
//! use inficon_spot::{Reg, Spot, SpotSpiDriver};
//!
//! // spi, cs and rdy come from the target HAL, the bus configured for
//! // inficon_spot::MODE at inficon_spot::SPI_FREQUENCY
//! let mut spot = Spot::new(SpotSpiDriver::new(spi.clone(), cs.clone(), rdy.clone()));
//! spot.begin()?;
//! spot.set_fullscale(1000.0);
//!
//! let raw = spot.read_register(Reg::PRESSURE_1.index())?;
//! let mbar = spot.convert_pressure(raw);
//! # assert_eq!(mbar, 500.0);
//! # spi.done();
//! # cs.done();
//! # rdy.done();
//! # Ok::<(), inficon_spot::SpotSpiError>(())
//! ```

#![cfg_attr(not(test), no_std)]

pub mod chip;
pub mod conversion;
pub mod driver;

pub use chip::{MemOp, Reg, Spot, CMD_RESET, LABEL_LEN};
pub use driver::spi::{SpotSpiDriver, SpotSpiError, MODE, SPI_FREQUENCY};
pub use driver::SpotDriver;
