use embedded_hal::i2c;

use crate::{
    adapter::PCF8574Adapter,
    registers::{LCD_CMD_SETCGRAMADDR, LCD_CMD_SETDDRAMADDR},
    CharacterDisplayError,
};

/// Highest line index that has a DDRAM offset
pub const MAX_LINE_INDEX: u8 = 3;

const DDRAM_ADDRESS_MASK: u8 = 0x7F;
const CGRAM_ADDRESS_MASK: u8 = 0x3F;

/// DDRAM base address of each display line. Lines 2 and 3 continue lines 0 and 1.
pub const fn line_offsets(columns: u8) -> [u8; 4] {
    [0x00, 0x40, columns, 0x40u8.wrapping_add(columns)]
}

/// DDRAM address of a position, or `None` for a line beyond the offset table.
pub const fn ddram_address(columns: u8, col: u8, row: u8) -> Option<u8> {
    if row > MAX_LINE_INDEX {
        return None;
    }
    Some(line_offsets(columns)[row as usize].wrapping_add(col))
}

/// CGRAM start address of a 5x8 glyph. There are eight slots of eight bytes.
pub const fn cgram_5x8_slot_address(slot: u8) -> u8 {
    (slot & 0x07) << 3
}

/// CGRAM start address of a 5x10 glyph. Only the even slots are usable because each glyph
/// spans two 8 byte slots.
pub const fn cgram_5x10_slot_address(slot: u8) -> u8 {
    (slot & 0x06) << 3
}

pub const fn set_ddram_address_command(address: u8) -> u8 {
    LCD_CMD_SETDDRAMADDR | (address & DDRAM_ADDRESS_MASK)
}

pub const fn set_cgram_address_command(address: u8) -> u8 {
    LCD_CMD_SETCGRAMADDR | (address & CGRAM_ADDRESS_MASK)
}

/// Runs `access` between a read of the address counter and a write restoring it, so that
/// out-of-band CGRAM or DDRAM access does not move the visible cursor. The restore is
/// attempted even when `access` fails; the first error is returned. A failed read inside
/// `access` still completes its E cycle, so the restore goes out in nibble phase.
pub fn with_saved_address_counter<I2C, T, F>(
    adapter: &mut PCF8574Adapter<I2C>,
    access: F,
) -> Result<T, CharacterDisplayError<I2C>>
where
    I2C: i2c::I2c,
    F: FnOnce(&mut PCF8574Adapter<I2C>) -> Result<T, CharacterDisplayError<I2C>>,
{
    let saved_address = adapter.read_address_counter()?;
    let result = access(adapter);
    let restored = adapter.write_byte(false, set_ddram_address_command(saved_address));
    let value = result?;
    restored?;
    Ok(value)
}

pub fn read_ddram<I2C>(
    adapter: &mut PCF8574Adapter<I2C>,
    address: u8,
) -> Result<u8, CharacterDisplayError<I2C>>
where
    I2C: i2c::I2c,
{
    with_saved_address_counter(adapter, |adapter| {
        adapter.write_byte(false, set_ddram_address_command(address))?;
        adapter.read_byte(true)
    })
}

pub fn read_cgram<I2C>(
    adapter: &mut PCF8574Adapter<I2C>,
    address: u8,
) -> Result<u8, CharacterDisplayError<I2C>>
where
    I2C: i2c::I2c,
{
    with_saved_address_counter(adapter, |adapter| {
        adapter.write_byte(false, set_cgram_address_command(address))?;
        adapter.read_byte(true)
    })
}

/// Writes `data` to consecutive CGRAM addresses starting at `address`.
pub fn write_cgram<I2C>(
    adapter: &mut PCF8574Adapter<I2C>,
    address: u8,
    data: &[u8],
) -> Result<(), CharacterDisplayError<I2C>>
where
    I2C: i2c::I2c,
{
    with_saved_address_counter(adapter, |adapter| {
        adapter.write_byte(false, set_cgram_address_command(address))?;
        for &byte in data {
            adapter.write_byte(true, byte)?;
        }
        Ok(())
    })
}
