use bitfield::bitfield;
use embedded_hal::i2c;

use crate::{
    registers::{LCD_STATUS_ADDRESS, LCD_STATUS_BUSY},
    CharacterDisplayError,
};

// Pin mapping of the common PCF8574 backpack wired to the HD44780 4-bit interface
bitfield! {
    pub struct PCF8574BitField(u8);
    impl Debug;
    pub rs, set_rs: 0, 0;
    pub rw, set_rw: 1, 1;
    pub enable, set_enable: 2, 2;
    pub backlight, set_backlight: 3, 3;
    pub data, set_data: 7, 4;
}

impl Clone for PCF8574BitField {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}

impl PCF8574BitField {
    fn toggle_enable(&mut self) {
        let enable = self.enable();
        self.set_enable(enable ^ 1);
    }
}

/// Number of expander writes used to clock one nibble into the controller
const NIBBLE_WRITE_STEPS: usize = 3;
/// Number of expander writes used to clock one byte out of the controller
const READ_STEPS: usize = 5;
/// Step after which the high nibble is sampled
const READ_HIGH_NIBBLE_STEP: usize = 1;
/// Step after which the low nibble is sampled
const READ_LOW_NIBBLE_STEP: usize = 3;

/// Adapter that speaks the HD44780 4-bit protocol through a PCF8574 I2C GPIO expander.
///
/// Every logical register access is split into two nibble transactions. Writes present the
/// nibble with E low, raise E, then drop it again, using the I2C transaction time as the pulse
/// width. Reads put the data lines into weak pull-up mode (`0xF2`) and sample the expander port
/// while E is high for each nibble.
pub struct PCF8574Adapter<I2C>
where
    I2C: i2c::I2c,
{
    i2c: I2C,
    address: u8,
    backlight: bool,
    busy_poll_limit: u16,
}

impl<I2C> PCF8574Adapter<I2C>
where
    I2C: i2c::I2c,
{
    pub fn new(i2c: I2C, address: u8, busy_poll_limit: u16) -> Self {
        Self {
            i2c,
            address,
            backlight: true,
            busy_poll_limit,
        }
    }

    pub fn backlight(&self) -> bool {
        self.backlight
    }

    /// returns the i2c object. mostly used for testing
    pub fn i2c(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    pub fn release(self) -> I2C {
        self.i2c
    }

    fn control_bits(&self, rs_setting: bool) -> PCF8574BitField {
        let mut bits = PCF8574BitField(0);
        bits.set_rs(rs_setting as u8);
        bits.set_backlight(self.backlight as u8);
        bits
    }

    fn write_bits_to_gpio(&mut self, bits: &PCF8574BitField) -> Result<(), CharacterDisplayError<I2C>> {
        self.i2c
            .write(self.address, &[bits.0])
            .map_err(CharacterDisplayError::I2cError)
    }

    fn read_gpio(&mut self) -> Result<u8, CharacterDisplayError<I2C>> {
        let mut data = [0];
        self.i2c
            .read(self.address, &mut data)
            .map_err(CharacterDisplayError::I2cError)?;
        Ok(data[0])
    }

    /// Writes the upper nibble of `value` to the controller. Only used directly during the
    /// 8-bit to 4-bit reset handshake; everything else goes through `write_byte`.
    pub fn write_nibble(
        &mut self,
        rs_setting: bool,
        value: u8,
    ) -> Result<(), CharacterDisplayError<I2C>> {
        let mut bits = self.control_bits(rs_setting);
        bits.set_data(value >> 4);
        for _ in 0..NIBBLE_WRITE_STEPS {
            self.write_bits_to_gpio(&bits)?;
            bits.toggle_enable();
        }
        Ok(())
    }

    /// Writes a full byte to the controller once it reports ready. If `rs_setting` is `true`
    /// the byte goes to the data register (CGRAM or DDRAM), otherwise to the instruction register.
    pub fn write_byte(
        &mut self,
        rs_setting: bool,
        value: u8,
    ) -> Result<(), CharacterDisplayError<I2C>> {
        self.wait_until_ready()?;
        self.write_nibble(rs_setting, value)?;
        self.write_nibble(rs_setting, value << 4)
    }

    /// Reads one byte from the controller. With `rs_setting` `false` this is the busy flag and
    /// address counter, otherwise the data at the current address.
    ///
    /// If sampling the port fails, the remaining E edges are still clocked out (ignoring further
    /// bus errors) so the controller is not left halfway through a nibble pair. The sample error
    /// is returned.
    pub fn read_byte(&mut self, rs_setting: bool) -> Result<u8, CharacterDisplayError<I2C>> {
        let mut bits = self.control_bits(rs_setting);
        // data lines high so the PCF8574 quasi-bidirectional ports can be driven by the LCD
        bits.set_data(0b1111);
        bits.set_rw(1);

        let mut value = 0;
        let mut sample_error = None;
        for step in 0..READ_STEPS {
            let written = self.write_bits_to_gpio(&bits);
            bits.toggle_enable();
            if sample_error.is_some() {
                continue;
            }
            written?;
            if step != READ_HIGH_NIBBLE_STEP && step != READ_LOW_NIBBLE_STEP {
                continue;
            }
            match self.read_gpio() {
                Ok(port) if step == READ_HIGH_NIBBLE_STEP => {
                    value = PCF8574BitField(port).data() << 4;
                }
                Ok(port) => value |= PCF8574BitField(port).data(),
                Err(e) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Port sample failed, finishing read cycle");
                    sample_error = Some(e);
                }
            }
        }
        match sample_error {
            Some(e) => Err(e),
            None => Ok(value),
        }
    }

    pub fn read_busy_flag(&mut self) -> Result<bool, CharacterDisplayError<I2C>> {
        Ok(self.read_byte(false)? & LCD_STATUS_BUSY != 0)
    }

    /// Reads the address counter. The busy flag is masked off.
    pub fn read_address_counter(&mut self) -> Result<u8, CharacterDisplayError<I2C>> {
        Ok(self.read_byte(false)? & LCD_STATUS_ADDRESS)
    }

    /// Polls the busy flag until it clears, giving up after the configured number of reads.
    pub fn wait_until_ready(&mut self) -> Result<(), CharacterDisplayError<I2C>> {
        for _ in 0..self.busy_poll_limit.max(1) {
            if !self.read_busy_flag()? {
                return Ok(());
            }
        }
        #[cfg(feature = "defmt")]
        defmt::warn!(
            "Busy flag did not clear after {} reads",
            self.busy_poll_limit
        );
        Err(CharacterDisplayError::BusyTimeout)
    }

    /// Switches the backlight by reading the expander port and writing it back with the
    /// backlight bit changed. The stored backlight state only changes once both transfers succeed.
    pub fn set_backlight(&mut self, on: bool) -> Result<(), CharacterDisplayError<I2C>> {
        let mut port = match self.read_gpio() {
            Ok(value) => PCF8574BitField(value),
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Could not read expander port for backlight change");
                return Err(e);
            }
        };
        port.set_backlight(on as u8);
        self.write_bits_to_gpio(&port)?;
        self.backlight = on;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use crate::test_support::{read_transactions, write_byte_transactions, ADDRESS};
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    #[test]
    fn test_pcf8574_bits() {
        let mut bits = PCF8574BitField(0);
        bits.set_rs(1);
        bits.set_enable(1);
        bits.set_backlight(1);
        bits.set_data(0b1010);
        assert_eq!(bits.0, 0b1010_1101);
        bits.toggle_enable();
        assert_eq!(bits.0, 0b1010_1001);
        assert_eq!(bits.data(), 0b1010);
    }

    #[test]
    fn test_write_nibble_pulses_enable() {
        let expected_transactions = [
            I2cTransaction::write(ADDRESS, std::vec![0b0011_1000]), // enable = 0, backlight = 1
            I2cTransaction::write(ADDRESS, std::vec![0b0011_1100]), // enable = 1
            I2cTransaction::write(ADDRESS, std::vec![0b0011_1000]), // enable = 0
        ];
        let mut adapter = PCF8574Adapter::new(I2cMock::new(&expected_transactions), ADDRESS, 10);
        assert!(adapter.write_nibble(false, 0x38).is_ok());
        adapter.i2c().done();
    }

    #[test]
    fn test_write_byte_waits_for_ready() {
        let mut expected_transactions = std::vec::Vec::new();
        // first status read reports busy, the second ready
        expected_transactions.extend(read_transactions(false, true, 0x85));
        expected_transactions.extend(read_transactions(false, true, 0x05));
        // byte 0xDE with RS = 1
        expected_transactions.extend([
            I2cTransaction::write(ADDRESS, std::vec![0b1101_1001]), // enable = 0, rs = 1
            I2cTransaction::write(ADDRESS, std::vec![0b1101_1101]), // enable = 1, rs = 1
            I2cTransaction::write(ADDRESS, std::vec![0b1101_1001]), // enable = 0, rs = 1
            I2cTransaction::write(ADDRESS, std::vec![0b1110_1001]),
            I2cTransaction::write(ADDRESS, std::vec![0b1110_1101]),
            I2cTransaction::write(ADDRESS, std::vec![0b1110_1001]),
        ]);
        let mut adapter = PCF8574Adapter::new(I2cMock::new(&expected_transactions), ADDRESS, 10);
        assert!(adapter.write_byte(true, 0xDE).is_ok());
        adapter.i2c().done();
    }

    #[test]
    fn test_read_byte_sequence() {
        let expected_transactions = [
            I2cTransaction::write(ADDRESS, std::vec![0b1111_1011]), // read mode, rs = 1, enable = 0
            I2cTransaction::write(ADDRESS, std::vec![0b1111_1111]), // enable = 1
            I2cTransaction::read(ADDRESS, std::vec![0b1010_1111]),  // high nibble 0xA
            I2cTransaction::write(ADDRESS, std::vec![0b1111_1011]), // enable = 0
            I2cTransaction::write(ADDRESS, std::vec![0b1111_1111]), // enable = 1
            I2cTransaction::read(ADDRESS, std::vec![0b0101_1111]),  // low nibble 0x5
            I2cTransaction::write(ADDRESS, std::vec![0b1111_1011]), // enable = 0
        ];
        let mut adapter = PCF8574Adapter::new(I2cMock::new(&expected_transactions), ADDRESS, 10);
        let value = adapter.read_byte(true);
        assert!(matches!(value, Ok(0xA5)));
        adapter.i2c().done();
    }

    #[test]
    fn test_read_address_counter_masks_busy_flag() {
        let expected_transactions = read_transactions(false, true, 0xC7);
        let mut adapter = PCF8574Adapter::new(I2cMock::new(&expected_transactions), ADDRESS, 10);
        assert!(matches!(adapter.read_address_counter(), Ok(0x47)));
        adapter.i2c().done();
    }

    #[test]
    fn test_failed_high_nibble_sample_finishes_read_cycle() {
        let expected_transactions = [
            I2cTransaction::write(ADDRESS, std::vec![0b1111_1010]),
            I2cTransaction::write(ADDRESS, std::vec![0b1111_1110]),
            I2cTransaction::read(ADDRESS, std::vec![0x00]).with_error(ErrorKind::Other),
            // remaining edges keep the controller in nibble phase
            I2cTransaction::write(ADDRESS, std::vec![0b1111_1010]),
            I2cTransaction::write(ADDRESS, std::vec![0b1111_1110]),
            I2cTransaction::write(ADDRESS, std::vec![0b1111_1010]),
        ];
        let mut adapter = PCF8574Adapter::new(I2cMock::new(&expected_transactions), ADDRESS, 10);
        assert!(matches!(
            adapter.read_byte(false),
            Err(CharacterDisplayError::I2cError(_))
        ));
        adapter.i2c().done();
    }

    #[test]
    fn test_failed_low_nibble_sample_finishes_read_cycle() {
        let expected_transactions = [
            I2cTransaction::write(ADDRESS, std::vec![0b1111_1011]),
            I2cTransaction::write(ADDRESS, std::vec![0b1111_1111]),
            I2cTransaction::read(ADDRESS, std::vec![0b0100_1111]),
            I2cTransaction::write(ADDRESS, std::vec![0b1111_1011]),
            I2cTransaction::write(ADDRESS, std::vec![0b1111_1111]),
            I2cTransaction::read(ADDRESS, std::vec![0x00]).with_error(ErrorKind::Other),
            I2cTransaction::write(ADDRESS, std::vec![0b1111_1011]),
        ];
        let mut adapter = PCF8574Adapter::new(I2cMock::new(&expected_transactions), ADDRESS, 10);
        assert!(matches!(
            adapter.read_byte(true),
            Err(CharacterDisplayError::I2cError(_))
        ));
        adapter.i2c().done();
    }

    #[test]
    fn test_busy_timeout() {
        let mut expected_transactions = std::vec::Vec::new();
        for _ in 0..3 {
            expected_transactions.extend(read_transactions(false, true, 0x80));
        }
        let mut adapter = PCF8574Adapter::new(I2cMock::new(&expected_transactions), ADDRESS, 3);
        assert!(matches!(
            adapter.write_byte(false, 0x01),
            Err(CharacterDisplayError::BusyTimeout)
        ));
        adapter.i2c().done();
    }

    #[test]
    fn test_backlight_off_then_on() {
        let mut expected_transactions = std::vec![
            I2cTransaction::read(ADDRESS, std::vec![0b0010_1000]),
            I2cTransaction::write(ADDRESS, std::vec![0b0010_0000]),
        ];
        // subsequent writes go out without the backlight bit
        expected_transactions.extend(write_byte_transactions(false, false, 0x01));
        expected_transactions.extend([
            I2cTransaction::read(ADDRESS, std::vec![0b0001_0000]),
            I2cTransaction::write(ADDRESS, std::vec![0b0001_1000]),
        ]);
        let mut adapter = PCF8574Adapter::new(I2cMock::new(&expected_transactions), ADDRESS, 10);
        assert!(adapter.set_backlight(false).is_ok());
        assert!(!adapter.backlight());
        assert!(adapter.write_byte(false, 0x01).is_ok());
        assert!(adapter.set_backlight(true).is_ok());
        assert!(adapter.backlight());
        adapter.i2c().done();
    }

    #[test]
    fn test_backlight_short_read_keeps_state() {
        let expected_transactions = [
            I2cTransaction::read(ADDRESS, std::vec![0x00]).with_error(ErrorKind::Other),
        ];
        let mut adapter = PCF8574Adapter::new(I2cMock::new(&expected_transactions), ADDRESS, 10);
        assert!(adapter.set_backlight(false).is_err());
        assert!(adapter.backlight());
        adapter.i2c().done();
    }
}
