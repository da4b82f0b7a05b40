// Builders for the expected I2C traffic of the PCF8574 nibble protocol.
extern crate std;
use std::vec::Vec;

use embedded_hal_mock::eh1::i2c::Transaction as I2cTransaction;

pub const ADDRESS: u8 = 0x27;

const BACKLIGHT: u8 = 0b0000_1000;
const ENABLE: u8 = 0b0000_0100;
const READ_MODE: u8 = 0b1111_0010;

fn control(rs: bool, backlight: bool) -> u8 {
    let mut bits = 0;
    if rs {
        bits |= 0x01;
    }
    if backlight {
        bits |= BACKLIGHT;
    }
    bits
}

/// One nibble write of the upper half of `value`: E low, E high, E low.
pub fn nibble_transactions(rs: bool, backlight: bool, value: u8) -> Vec<I2cTransaction> {
    let bits = (value & 0xF0) | control(rs, backlight);
    std::vec![
        I2cTransaction::write(ADDRESS, std::vec![bits]),
        I2cTransaction::write(ADDRESS, std::vec![bits | ENABLE]),
        I2cTransaction::write(ADDRESS, std::vec![bits]),
    ]
}

/// A five step register read in which the controller returns `value`.
pub fn read_transactions(rs: bool, backlight: bool, value: u8) -> Vec<I2cTransaction> {
    let idle = READ_MODE | control(rs, backlight);
    let strobe = idle | ENABLE;
    std::vec![
        I2cTransaction::write(ADDRESS, std::vec![idle]),
        I2cTransaction::write(ADDRESS, std::vec![strobe]),
        I2cTransaction::read(ADDRESS, std::vec![(value & 0xF0) | (strobe & 0x0F)]),
        I2cTransaction::write(ADDRESS, std::vec![idle]),
        I2cTransaction::write(ADDRESS, std::vec![strobe]),
        I2cTransaction::read(ADDRESS, std::vec![(value << 4) | (strobe & 0x0F)]),
        I2cTransaction::write(ADDRESS, std::vec![idle]),
    ]
}

/// A ready check followed by both nibbles of `value`.
pub fn write_byte_transactions(rs: bool, backlight: bool, value: u8) -> Vec<I2cTransaction> {
    let mut transactions = read_transactions(false, backlight, 0x00);
    transactions.extend(nibble_transactions(rs, backlight, value));
    transactions.extend(nibble_transactions(rs, backlight, value << 4));
    transactions
}

/// Instruction register write with the backlight on.
pub fn command(value: u8) -> Vec<I2cTransaction> {
    write_byte_transactions(false, true, value)
}

/// Data register write with the backlight on.
pub fn data(value: u8) -> Vec<I2cTransaction> {
    write_byte_transactions(true, true, value)
}

/// Status read with the backlight on returning the address counter `address` and a clear busy flag.
pub fn address_counter(address: u8) -> Vec<I2cTransaction> {
    read_transactions(false, true, address & 0x7F)
}
