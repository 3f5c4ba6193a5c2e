pub mod spi;

/// Low level transport for the Spot protocol.
///
/// One `transfer()` call is one chip select framed transaction. The
/// implementation owns the bus for its whole lifetime, so a sequence of
/// back to back transfers runs under a single bus claim with one chip
/// select pulse per transaction.
pub trait SpotDriver {
    type Error;

    /// prepare the control lines, chip select parked high
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Full duplex in place exchange of `buf` (1, 3 or 4 bytes): assert
    /// chip select, clock the buffer out MSB first, deassert chip select.
    /// Received bytes replace the buffer content.
    fn transfer(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// level of the RDY line, true while the sensor pulls it low
    fn data_ready(&mut self) -> Result<bool, Self::Error>;
}
