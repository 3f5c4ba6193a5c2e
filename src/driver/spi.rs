use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::{Mode, Phase, Polarity, SpiBus};

use super::SpotDriver;

/// SPI mode 1: clock idles low, data is sampled on the trailing edge.
pub const MODE: Mode = Mode {
    polarity: Polarity::IdleLow,
    phase: Phase::CaptureOnSecondTransition,
};

/// default bus clock in Hz
pub const SPI_FREQUENCY: u32 = 4_000_000;

#[derive(Debug)]
pub enum SpotSpiError {
    Spi,
    Pin,
}

/// [`SpotDriver`] over an `embedded-hal` SPI bus with a manually framed
/// chip select line. The bus must be configured for [`MODE`] by the caller,
/// [`SPI_FREQUENCY`] is the usual clock.
pub struct SpotSpiDriver<SPI: SpiBus, CS: OutputPin, RDY: InputPin> {
    pub spi: SPI,
    pub pin_cs: CS,
    pub pin_rdy: RDY,
}

impl<SPI: SpiBus, CS: OutputPin, RDY: InputPin> SpotSpiDriver<SPI, CS, RDY> {
    pub fn new(spi: SPI, pin_cs: CS, pin_rdy: RDY) -> Self {
        Self { spi, pin_cs, pin_rdy }
    }

    /// give the bus and pins back
    pub fn release(self) -> (SPI, CS, RDY) {
        (self.spi, self.pin_cs, self.pin_rdy)
    }
}

impl<SPI: SpiBus, CS: OutputPin, RDY: InputPin> SpotDriver for SpotSpiDriver<SPI, CS, RDY> {
    type Error = SpotSpiError;

    fn init(&mut self) -> Result<(), SpotSpiError> {
        self.pin_cs.set_high().map_err(|_| SpotSpiError::Pin)
    }

    fn transfer(&mut self, buf: &mut [u8]) -> Result<(), SpotSpiError> {
        let _ = self.pin_cs.set_low();
        // flush before deasserting chip select, SpiBus transfers may be buffered
        let result = self
            .spi
            .transfer_in_place(buf)
            .and_then(|_| self.spi.flush());
        let _ = self.pin_cs.set_high();
        result.map_err(|_| SpotSpiError::Spi)
    }

    fn data_ready(&mut self) -> Result<bool, SpotSpiError> {
        self.pin_rdy.is_low().map_err(|_| SpotSpiError::Pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};

    #[test]
    fn transfer_brackets_chip_select() {
        let mut spi = SpiMock::new(&[
            SpiTransaction::transfer_in_place(vec![0x40, 0, 0, 0], vec![0, 1, 2, 3]),
            SpiTransaction::flush(),
        ]);
        let mut cs = PinMock::new(&[
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ]);
        let mut rdy = PinMock::new(&[]);

        let mut driver = SpotSpiDriver::new(spi.clone(), cs.clone(), rdy.clone());
        let mut buf = [0x40, 0, 0, 0];
        driver.transfer(&mut buf).unwrap();
        assert_eq!(buf, [0, 1, 2, 3]);

        spi.done();
        cs.done();
        rdy.done();
    }

    #[test]
    fn data_ready_is_active_low() {
        let mut spi = SpiMock::new(&[]);
        let mut cs = PinMock::new(&[]);
        let mut rdy = PinMock::new(&[
            PinTransaction::get(PinState::Low),
            PinTransaction::get(PinState::High),
        ]);

        let mut driver = SpotSpiDriver::new(spi.clone(), cs.clone(), rdy.clone());
        assert!(driver.data_ready().unwrap());
        assert!(!driver.data_ready().unwrap());

        spi.done();
        cs.done();
        rdy.done();
    }

    #[test]
    fn init_parks_chip_select_high() {
        let mut spi = SpiMock::new(&[]);
        let mut cs = PinMock::new(&[PinTransaction::set(PinState::High)]);
        let mut rdy = PinMock::new(&[]);

        let mut driver = SpotSpiDriver::new(spi.clone(), cs.clone(), rdy.clone());
        driver.init().unwrap();

        spi.done();
        cs.done();
        rdy.done();
    }
}
