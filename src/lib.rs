//! This Rust `embedded-hal`-based library drives [HD44780](https://en.wikipedia.org/wiki/Hitachi_HD44780_LCD_controller)
//! compatible character displays that are connected through a PCF8574 or PCF8574A I2C GPIO expander, in an embedded,
//! `no_std` environment. Three controller families are supported:
//!
//! - **HD44780** and **SPLC780D** - initialized with the legacy 8-bit to 4-bit reset handshake.
//! - **KS0066** - initialized with its shorter 4-bit power-on sequence.
//!
//! The expander is expected to use the common backpack wiring: RS on P0, RW on P1, E on P2, the backlight on P3 and
//! the display's 4-bit data bus on P4-P7.
//!
//! Key features include:
//! - Convenient high-level API for controlling the display
//! - Support for custom 5x8 and 5x10 characters
//! - Reading DDRAM, CGRAM and the address counter without moving the cursor
//! - Backlight control
//! - `core::fmt::Write` implementation for easy use with the `write!` macro
//! - Compatible with the `embedded-hal` traits v1.0 and later
//! - Optional support for the `defmt` and `ufmt` logging frameworks
//!
//! ## Usage
//! Add this to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! pcf8574-character-display = { version = "0.1", features = ["defmt"] }
//! ```
//! The `features = ["defmt"]` line is optional and enables the `defmt` feature, which allows the library's errors to be used with the `defmt` logging
//! framework. Another optional feature is `features = ["ufmt"]`, which enables the `ufmt` feature, allowing the `uwriteln!` and `uwrite!` macros to be used.
//!
//! The display is initialized as part of construction. Waits during the power-on sequence are measured with a [`Clock`];
//! boards without a monotonic timer can wrap any `DelayNs` implementation in a [`DelayClock`]:
//! ```rust
//! use pcf8574_character_display::{CharacterDisplayPCF8574, ControllerFamily, DelayClock, LcdConfig, LcdDisplayType};
//!
//! // board setup
//! let i2c = ...; // I2C peripheral
//! let delay = ...; // DelayNs implementation
//!
//! let config = LcdConfig::new(LcdDisplayType::Lcd20x4).with_controller(ControllerFamily::KS0066);
//! let mut lcd = CharacterDisplayPCF8574::new(i2c, DelayClock::new(delay), config)?;
//! ```
//! Use the display:
//! ```rust
//! lcd.backlight(true)?.clear()?.home()?;
//! lcd.print("Hello, world!")?;
//! // can also use the `core::fmt::write!` macro
//! use core::fmt::Write;
//!
//! write!(lcd, "Hello, world!")?;
//! ```
//! Each command returns a `Result` that wraps the display object in `Ok()`, allowing for easy chaining of commands.
//!
//! ### Busy flag
//! Every register write first polls the controller's busy flag. Polling gives up after `LcdConfig::busy_poll_limit`
//! status reads and returns `CharacterDisplayError::BusyTimeout`, so a disconnected display cannot hang the caller.
//!
#![no_std]
use core::fmt::{Debug, Display};

use embedded_hal::i2c;

pub mod adapter;
pub mod addressing;
pub mod clock;
mod init;
pub mod registers;
#[cfg(test)]
mod test_support;

pub use clock::{Clock, DelayClock};

use adapter::PCF8574Adapter;
use registers::{
    CursorDisplayShiftCommand, DisplayControlCommand, EntryModeCommand, Registers,
    LCD_CMD_CLEARDISPLAY, LCD_CMD_RETURNHOME,
};

/// Default address of a PCF8574 with A0-A2 pulled low
pub const PCF8574_DEFAULT_ADDRESS: u8 = 0x20;
/// Address of a PCF8574 with A0-A2 pulled high, the usual backpack setting
pub const PCF8574_ALTERNATE_DEFAULT_ADDRESS: u8 = 0x27;
/// Default address of a PCF8574A with A0-A2 pulled low
pub const PCF8574A_DEFAULT_ADDRESS: u8 = 0x38;
/// Address of a PCF8574A with A0-A2 pulled high
pub const PCF8574A_ALTERNATE_DEFAULT_ADDRESS: u8 = 0x3F;

const DEFAULT_BUSY_POLL_LIMIT: u16 = 1000;
const MAX_COLUMNS: u8 = 80;
const MAX_LINES: u8 = 4;
const BLANK: u8 = b' ';

/// Errors that can occur when using the display
pub enum CharacterDisplayError<I2C>
where
    I2C: i2c::I2c,
{
    /// I2C error returned from the underlying I2C implementation, including short reads
    I2cError(I2C::Error),
    /// The busy flag did not clear within the configured number of polls
    BusyTimeout,
    /// Row is beyond the DDRAM line offset table
    RowOutOfRange,
    /// Address, column or line count is not usable
    InvalidGeometry,
    /// Formatting error
    FormattingError(core::fmt::Error),
}

impl<I2C> From<core::fmt::Error> for CharacterDisplayError<I2C>
where
    I2C: i2c::I2c,
{
    fn from(err: core::fmt::Error) -> Self {
        CharacterDisplayError::FormattingError(err)
    }
}

impl<I2C> From<&CharacterDisplayError<I2C>> for &'static str
where
    I2C: i2c::I2c,
{
    fn from(err: &CharacterDisplayError<I2C>) -> Self {
        match err {
            CharacterDisplayError::I2cError(_) => "I2C error",
            CharacterDisplayError::BusyTimeout => "Busy flag timeout",
            CharacterDisplayError::RowOutOfRange => "Row out of range",
            CharacterDisplayError::InvalidGeometry => "Invalid display geometry",
            CharacterDisplayError::FormattingError(_) => "Formatting error",
        }
    }
}

impl<I2C> Debug for CharacterDisplayError<I2C>
where
    I2C: i2c::I2c,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CharacterDisplayError::I2cError(e) => f.debug_tuple("I2cError").field(e).finish(),
            CharacterDisplayError::BusyTimeout => f.write_str("BusyTimeout"),
            CharacterDisplayError::RowOutOfRange => f.write_str("RowOutOfRange"),
            CharacterDisplayError::InvalidGeometry => f.write_str("InvalidGeometry"),
            CharacterDisplayError::FormattingError(e) => {
                f.debug_tuple("FormattingError").field(e).finish()
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl<I2C> defmt::Format for CharacterDisplayError<I2C>
where
    I2C: i2c::I2c,
{
    fn format(&self, fmt: defmt::Formatter) {
        let msg: &'static str = From::from(self);
        defmt::write!(fmt, "{}", msg);
    }
}

#[cfg(feature = "ufmt")]
impl<I2C> ufmt::uDisplay for CharacterDisplayError<I2C>
where
    I2C: i2c::I2c,
{
    fn fmt<W>(&self, w: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        let msg: &'static str = From::from(self);
        ufmt::uwrite!(w, "{}", msg)
    }
}

impl<I2C> Display for CharacterDisplayError<I2C>
where
    I2C: i2c::I2c,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg: &'static str = From::from(self);
        write!(f, "{}", msg)
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
/// Common display sizes. Used to fill in the columns and lines of an `LcdConfig`.
pub enum LcdDisplayType {
    /// 16x1 display
    Lcd16x1,
    /// 16x2 display
    Lcd16x2,
    /// 16x4 display
    Lcd16x4,
    /// 20x2 display
    Lcd20x2,
    /// 20x4 display
    Lcd20x4,
    /// 8x2 display
    Lcd8x2,
    /// 40x2 display
    Lcd40x2,
}

impl From<&LcdDisplayType> for &'static str {
    fn from(display_type: &LcdDisplayType) -> Self {
        match display_type {
            LcdDisplayType::Lcd16x1 => "16x1",
            LcdDisplayType::Lcd16x2 => "16x2",
            LcdDisplayType::Lcd16x4 => "16x4",
            LcdDisplayType::Lcd20x2 => "20x2",
            LcdDisplayType::Lcd20x4 => "20x4",
            LcdDisplayType::Lcd8x2 => "8x2",
            LcdDisplayType::Lcd40x2 => "40x2",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LcdDisplayType {
    fn format(&self, fmt: defmt::Formatter) {
        let msg: &'static str = From::from(self);
        defmt::write!(fmt, "{}", msg);
    }
}

#[cfg(feature = "ufmt")]
impl ufmt::uDisplay for LcdDisplayType {
    fn fmt<W>(&self, w: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        let msg: &'static str = From::from(self);
        ufmt::uwrite!(w, "{}", msg)
    }
}

impl Display for LcdDisplayType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg: &'static str = From::from(self);
        write!(f, "{}", msg)
    }
}

impl LcdDisplayType {
    /// Get the number of lines for the display type
    pub const fn rows(&self) -> u8 {
        match self {
            LcdDisplayType::Lcd16x1 => 1,
            LcdDisplayType::Lcd16x2 => 2,
            LcdDisplayType::Lcd16x4 => 4,
            LcdDisplayType::Lcd20x2 => 2,
            LcdDisplayType::Lcd20x4 => 4,
            LcdDisplayType::Lcd8x2 => 2,
            LcdDisplayType::Lcd40x2 => 2,
        }
    }

    /// Get the number of columns for the display type
    pub const fn cols(&self) -> u8 {
        match self {
            LcdDisplayType::Lcd16x1 => 16,
            LcdDisplayType::Lcd16x2 => 16,
            LcdDisplayType::Lcd16x4 => 16,
            LcdDisplayType::Lcd20x2 => 20,
            LcdDisplayType::Lcd20x4 => 20,
            LcdDisplayType::Lcd8x2 => 8,
            LcdDisplayType::Lcd40x2 => 40,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
/// Character cell font
pub enum Font {
    /// 5x8 dots, eight user defined characters
    Dots5x8 = 0,
    /// 5x10 dots, four user defined characters
    Dots5x10 = 1,
}

#[derive(Debug, PartialEq, Clone, Copy)]
/// Controller family on the display board. Selects the power-on reset sequence.
pub enum ControllerFamily {
    HD44780,
    SPLC780D,
    KS0066,
}

#[derive(Debug, PartialEq, Clone, Copy)]
/// Construction parameters for a display. Fixed for the lifetime of the display object.
pub struct LcdConfig {
    /// 7-bit I2C address of the expander
    pub address: u8,
    /// Characters per line
    pub columns: u8,
    /// Number of lines, 1 to 4
    pub lines: u8,
    pub font: Font,
    pub controller: ControllerFamily,
    /// Maximum number of status reads while waiting for the busy flag to clear
    pub busy_poll_limit: u16,
}

impl Default for LcdConfig {
    fn default() -> Self {
        Self {
            address: PCF8574_ALTERNATE_DEFAULT_ADDRESS,
            columns: LcdDisplayType::Lcd16x2.cols(),
            lines: LcdDisplayType::Lcd16x2.rows(),
            font: Font::Dots5x8,
            controller: ControllerFamily::HD44780,
            busy_poll_limit: DEFAULT_BUSY_POLL_LIMIT,
        }
    }
}

impl LcdConfig {
    /// Configuration for a display of the given type with the default address, font and controller.
    pub fn new(display_type: LcdDisplayType) -> Self {
        Self::default().with_geometry(display_type.cols(), display_type.rows())
    }

    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    pub fn with_geometry(mut self, columns: u8, lines: u8) -> Self {
        self.columns = columns;
        self.lines = lines;
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_controller(mut self, controller: ControllerFamily) -> Self {
        self.controller = controller;
        self
    }

    pub fn with_busy_poll_limit(mut self, busy_poll_limit: u16) -> Self {
        self.busy_poll_limit = busy_poll_limit;
        self
    }

    /// Returns `true` if the address fits in 7 bits and the geometry is one the controller can address.
    pub fn is_valid(&self) -> bool {
        self.address <= 0x7F
            && (1..=MAX_COLUMNS).contains(&self.columns)
            && (1..=MAX_LINES).contains(&self.lines)
    }
}

/// HD44780, SPLC780D or KS0066 based character display attached through a PCF8574 I2C expander.
pub struct CharacterDisplayPCF8574<I2C, CLOCK>
where
    I2C: i2c::I2c,
    CLOCK: Clock,
{
    config: LcdConfig,
    adapter: PCF8574Adapter<I2C>,
    clock: CLOCK,
    registers: Registers,
}

impl<I2C, CLOCK> CharacterDisplayPCF8574<I2C, CLOCK>
where
    I2C: i2c::I2c,
    CLOCK: Clock,
{
    /// Create a display object and run the power-on initialization for the configured controller family.
    /// When this returns `Ok` the display is cleared, enabled, and the cursor is hidden.
    pub fn new(i2c: I2C, clock: CLOCK, config: LcdConfig) -> Result<Self, CharacterDisplayError<I2C>> {
        if !config.is_valid() {
            return Err(CharacterDisplayError::InvalidGeometry);
        }
        let mut display = Self::new_uninitialized(i2c, clock, config);
        init::initialize(
            &mut display.adapter,
            &mut display.clock,
            &mut display.registers,
            &display.config,
        )?;
        Ok(display)
    }

    fn new_uninitialized(i2c: I2C, clock: CLOCK, config: LcdConfig) -> Self {
        Self {
            adapter: PCF8574Adapter::new(i2c, config.address, config.busy_poll_limit),
            config,
            clock,
            registers: Registers::default(),
        }
    }

    /// Gives back the I2C bus and clock.
    pub fn release(self) -> (I2C, CLOCK) {
        (self.adapter.release(), self.clock)
    }

    /// returns a reference to the I2C peripheral. mostly needed for testing
    fn i2c(&mut self) -> &mut I2C {
        self.adapter.i2c()
    }

    /// returns the configuration used to create the display
    pub fn config(&self) -> &LcdConfig {
        &self.config
    }

    /// Current entry mode register: cursor direction and display shift on write.
    pub fn entry_mode(&self) -> u8 {
        self.registers.entry_mode()
    }

    /// Current display control register: display, cursor and blink enables.
    pub fn display_control(&self) -> u8 {
        self.registers.display_control()
    }

    /// Last cursor or display shift instruction.
    pub fn cursor_or_display_shift(&self) -> u8 {
        self.registers.cursor_or_display_shift()
    }

    /// Current function set register: interface width, line count and font.
    pub fn function_set(&self) -> u8 {
        self.registers.function_set()
    }

    pub fn backlight_enabled(&self) -> bool {
        self.adapter.backlight()
    }

    fn send_command(&mut self, command: u8) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.adapter.write_byte(false, command)?;
        Ok(self)
    }

    fn update_display_control(
        &mut self,
        command: DisplayControlCommand,
    ) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        let value = self.registers.update_display_control(command);
        self.send_command(value)
    }

    fn update_entry_mode(
        &mut self,
        command: EntryModeCommand,
    ) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        let value = self.registers.update_entry_mode(command);
        self.send_command(value)
    }

    fn update_cursor_or_display_shift(
        &mut self,
        command: CursorDisplayShiftCommand,
    ) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        let value = self.registers.update_cursor_or_display_shift(command);
        self.send_command(value)
    }

    //--------------------------------------------------------------------------------------------------
    // high level commands, for the user!
    //--------------------------------------------------------------------------------------------------

    /// Clear the display
    pub fn clear(&mut self) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.send_command(LCD_CMD_CLEARDISPLAY)
    }

    /// Set the cursor to the home position.
    pub fn home(&mut self) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.send_command(LCD_CMD_RETURNHOME)
    }

    /// Set the display visibility. Hiding the display keeps its contents.
    pub fn show_display(&mut self, show_display: bool) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.update_display_control(if show_display {
            DisplayControlCommand::SetDisplayOn
        } else {
            DisplayControlCommand::SetDisplayOff
        })
    }

    /// Set the cursor visibility.
    pub fn show_cursor(&mut self, show_cursor: bool) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.update_display_control(if show_cursor {
            DisplayControlCommand::SetCursorOn
        } else {
            DisplayControlCommand::SetCursorOff
        })
    }

    /// Set the cursor blinking.
    pub fn blink_cursor(&mut self, blink_cursor: bool) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.update_display_control(if blink_cursor {
            DisplayControlCommand::SetCursorBlinkingOn
        } else {
            DisplayControlCommand::SetCursorBlinkingOff
        })
    }

    /// Set the text flow direction to left to right.
    pub fn left_to_right(&mut self) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.update_entry_mode(EntryModeCommand::MoveCursorLeftWhenSendingData)
    }

    /// Set the text flow direction to right to left.
    pub fn right_to_left(&mut self) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.update_entry_mode(EntryModeCommand::MoveCursorRightWhenSendingData)
    }

    /// Set the auto scroll mode, in which the display shifts on every data write.
    pub fn autoscroll(&mut self, autoscroll: bool) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.update_entry_mode(if autoscroll {
            EntryModeCommand::ShiftDisplayWhenSendingData
        } else {
            EntryModeCommand::DontShiftDisplayWhenSendingData
        })
    }

    /// Move the cursor one character to the left.
    pub fn shift_cursor_left(&mut self) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.update_cursor_or_display_shift(CursorDisplayShiftCommand::MoveCursorLeft)
    }

    /// Move the cursor one character to the right.
    pub fn shift_cursor_right(&mut self) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.update_cursor_or_display_shift(CursorDisplayShiftCommand::MoveCursorRight)
    }

    /// Scroll the display to the left.
    pub fn scroll_display_left(&mut self) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.update_cursor_or_display_shift(CursorDisplayShiftCommand::ShiftDisplayLeft)
    }

    /// Scroll the display to the right.
    pub fn scroll_display_right(&mut self) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.update_cursor_or_display_shift(CursorDisplayShiftCommand::ShiftDisplayRight)
    }

    /// Set the cursor position at specified column and row. Columns and rows are zero-indexed.
    /// Rows beyond 3 are rejected without touching the bus. Columns are not checked, so a column
    /// past the end of a line lands wherever the controller's DDRAM layout puts it.
    pub fn set_cursor(&mut self, col: u8, row: u8) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        let address = addressing::ddram_address(self.config.columns, col, row)
            .ok_or(CharacterDisplayError::RowOutOfRange)?;
        self.send_command(addressing::set_ddram_address_command(address))
    }

    /// Write one byte to DDRAM at `address`. The cursor is left after the written character.
    pub fn write_ddram(&mut self, address: u8, data: u8) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.send_command(addressing::set_ddram_address_command(address))?;
        self.adapter.write_byte(true, data)?;
        Ok(self)
    }

    /// Read one byte from DDRAM at `address`. The cursor position is preserved.
    pub fn read_ddram(&mut self, address: u8) -> Result<u8, CharacterDisplayError<I2C>> {
        addressing::read_ddram(&mut self.adapter, address)
    }

    /// Write one byte to CGRAM at `address`. The cursor position is preserved.
    pub fn write_cgram(&mut self, address: u8, data: u8) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        addressing::write_cgram(&mut self.adapter, address, &[data])?;
        Ok(self)
    }

    /// Read one byte from CGRAM at `address`. The cursor position is preserved.
    pub fn read_cgram(&mut self, address: u8) -> Result<u8, CharacterDisplayError<I2C>> {
        addressing::read_cgram(&mut self.adapter, address)
    }

    /// Reads the address counter from the controller. The busy bit is masked off.
    pub fn read_address_counter(&mut self) -> Result<u8, CharacterDisplayError<I2C>> {
        self.adapter.read_address_counter()
    }

    /// Reads the busy flag from the controller.
    pub fn is_busy(&mut self) -> Result<bool, CharacterDisplayError<I2C>> {
        self.adapter.read_busy_flag()
    }

    /// Create a new custom 5x8 character. `location` is masked to the eight available slots.
    pub fn create_char(
        &mut self,
        location: u8,
        charmap: [u8; 8],
    ) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        addressing::write_cgram(
            &mut self.adapter,
            addressing::cgram_5x8_slot_address(location),
            &charmap,
        )?;
        Ok(self)
    }

    /// Create a new custom 5x10 character. A 5x10 glyph occupies two 5x8 slots, so `location`
    /// is masked to slots 0, 2, 4 and 6.
    pub fn create_5x10_char(
        &mut self,
        location: u8,
        charmap: [u8; 11],
    ) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        addressing::write_cgram(
            &mut self.adapter,
            addressing::cgram_5x10_slot_address(location),
            &charmap,
        )?;
        Ok(self)
    }

    /// Prints a single character at the current cursor position.
    pub fn print_char(&mut self, c: char) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.adapter.write_byte(true, c as u8)?;
        Ok(self)
    }

    /// Prints a string to the LCD at the current cursor position.
    pub fn print(&mut self, text: &str) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        for c in text.chars() {
            self.adapter.write_byte(true, c as u8)?;
        }
        Ok(self)
    }

    /// Blank a whole line and leave the cursor at its start.
    pub fn erase_line(&mut self, row: u8) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.set_cursor(0, row)?;
        for _ in 0..self.config.columns {
            self.adapter.write_byte(true, BLANK)?;
        }
        self.set_cursor(0, row)
    }

    /// Turn the backlight on or off. On error the backlight setting used for later
    /// transfers is unchanged.
    pub fn backlight(&mut self, on: bool) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.adapter.set_backlight(on)?;
        Ok(self)
    }
}

/// Implement the `core::fmt::Write` trait for the display, allowing it to be used with the `write!` macro.
impl<I2C, CLOCK> core::fmt::Write for CharacterDisplayPCF8574<I2C, CLOCK>
where
    I2C: i2c::I2c,
    CLOCK: Clock,
{
    fn write_str(&mut self, s: &str) -> Result<(), core::fmt::Error> {
        if let Err(_e) = self.print(s) {
            return Err(core::fmt::Error);
        }
        Ok(())
    }
}

#[cfg(feature = "ufmt")]
/// Implement the `ufmt::uWrite` trait for the display, allowing it to be used with the `uwriteln!` and `uwrite!` macros.
impl<I2C, CLOCK> ufmt::uWrite for CharacterDisplayPCF8574<I2C, CLOCK>
where
    I2C: i2c::I2c,
    CLOCK: Clock,
{
    fn write_str(&mut self, s: &str) -> Result<(), CharacterDisplayError<I2C>> {
        self.print(s)?;
        Ok(())
    }

    type Error = CharacterDisplayError<I2C>;
}
