// Power-on reset sequences.
//
// The HD44780 and SPLC780D power up in 8-bit mode and must be walked through the legacy reset
// handshake (three "8-bit interface" nibbles) before the 4-bit interface can be used. The
// KS0066 accepts the 4-bit function set directly but needs its own execution-time gaps.
// Every wait is an elapsed-time check on the clock.

use embedded_hal::i2c;

use crate::{
    adapter::PCF8574Adapter,
    clock::Clock,
    registers::{
        DisplayControlCommand, FunctionSetCommand, Registers, LCD_CMD_CLEARDISPLAY,
        LCD_CMD_DISPLAYOFF,
    },
    CharacterDisplayError, ControllerFamily, Font, LcdConfig,
};

// HD44780 / SPLC780D
const HD44780_POWER_ON_WAIT_MS: u32 = 60; // > 40 ms after VDD rises to 2.7 V
const HD44780_FIRST_RESET_WAIT_MS: u32 = 6; // > 4.1 ms
const HD44780_SECOND_RESET_WAIT_MS: u32 = 2; // > 100 us

// KS0066
const KS0066_POWER_ON_WAIT_MS: u32 = 40; // > 30 ms after VDD rises to 4.5 V
const KS0066_FUNCTION_SET_WAIT_MS: u32 = 2; // > 39 us
const KS0066_DISPLAY_OFF_WAIT_MS: u32 = 2; // > 39 us
const KS0066_CLEAR_WAIT_MS: u32 = 3; // > 1.53 ms

/// Runs the reset sequence for the configured controller family, leaving the controller in
/// 4-bit mode with the configured line count and font, cleared, and with the display enabled.
pub fn initialize<I2C, CLOCK>(
    adapter: &mut PCF8574Adapter<I2C>,
    clock: &mut CLOCK,
    registers: &mut Registers,
    config: &LcdConfig,
) -> Result<(), CharacterDisplayError<I2C>>
where
    I2C: i2c::I2c,
    CLOCK: Clock,
{
    match config.controller {
        ControllerFamily::HD44780 | ControllerFamily::SPLC780D => {
            #[cfg(feature = "defmt")]
            defmt::debug!("Initializing HD44780 compatible controller");
            initialize_hd44780(adapter, clock, registers, config)
        }
        ControllerFamily::KS0066 => {
            #[cfg(feature = "defmt")]
            defmt::debug!("Initializing KS0066 controller");
            initialize_ks0066(adapter, clock, registers, config)
        }
    }
}

fn apply_geometry(registers: &mut Registers, config: &LcdConfig) -> u8 {
    registers.apply_geometry(config.font == Font::Dots5x10, config.lines == 1)
}

fn initialize_hd44780<I2C, CLOCK>(
    adapter: &mut PCF8574Adapter<I2C>,
    clock: &mut CLOCK,
    registers: &mut Registers,
    config: &LcdConfig,
) -> Result<(), CharacterDisplayError<I2C>>
where
    I2C: i2c::I2c,
    CLOCK: Clock,
{
    clock.wait_ms(HD44780_POWER_ON_WAIT_MS);
    let function_set = registers.update_function_set(FunctionSetCommand::Set8bitInterface);
    adapter.write_nibble(false, function_set)?;

    clock.wait_ms(HD44780_FIRST_RESET_WAIT_MS);
    adapter.write_nibble(false, registers.function_set())?;

    clock.wait_ms(HD44780_SECOND_RESET_WAIT_MS);
    adapter.write_nibble(false, registers.function_set())?;

    let function_set = registers.update_function_set(FunctionSetCommand::Set4bitInterface);
    adapter.write_nibble(false, function_set)?;

    // the busy flag is readable from here on
    let function_set = apply_geometry(registers, config);
    adapter.write_byte(false, function_set)?;
    adapter.write_byte(false, LCD_CMD_DISPLAYOFF)?;
    adapter.write_byte(false, LCD_CMD_CLEARDISPLAY)?;
    adapter.write_byte(false, registers.entry_mode())?;
    let display_control = registers.update_display_control(DisplayControlCommand::SetDisplayOn);
    adapter.write_byte(false, display_control)
}

fn initialize_ks0066<I2C, CLOCK>(
    adapter: &mut PCF8574Adapter<I2C>,
    clock: &mut CLOCK,
    registers: &mut Registers,
    config: &LcdConfig,
) -> Result<(), CharacterDisplayError<I2C>>
where
    I2C: i2c::I2c,
    CLOCK: Clock,
{
    clock.wait_ms(KS0066_POWER_ON_WAIT_MS);
    adapter.write_nibble(false, registers.function_set())?;

    let function_set = apply_geometry(registers, config);
    adapter.write_byte(false, function_set)?;

    clock.wait_ms(KS0066_FUNCTION_SET_WAIT_MS);
    adapter.write_byte(false, LCD_CMD_DISPLAYOFF)?;

    clock.wait_ms(KS0066_DISPLAY_OFF_WAIT_MS);
    adapter.write_byte(false, LCD_CMD_CLEARDISPLAY)?;

    clock.wait_ms(KS0066_CLEAR_WAIT_MS);
    adapter.write_byte(false, registers.entry_mode())?;
    let display_control = registers.update_display_control(DisplayControlCommand::SetDisplayOn);
    adapter.write_byte(false, display_control)
}
