// HD44780 instruction set and the local copy of the controller's mode registers.
//
// The controller's mode registers are write only, so the driver keeps a shadow copy of each and
// transmits the whole register byte after every change. Each register byte already carries its
// instruction bit (0x04, 0x08, 0x10, 0x20), so the shadow value is exactly what goes on the wire.
//
// Register updates use a single encoded mask per command: a mask <= 0x10 is OR-ed into the
// register, a mask > 0x10 is a pre-inverted mask that is AND-ed into it.

/// Clear display, set address counter to zero
pub const LCD_CMD_CLEARDISPLAY: u8 = 0x01;
/// Set address counter to zero and undo any display shift
pub const LCD_CMD_RETURNHOME: u8 = 0x02;
/// Set the CGRAM address in the address counter
pub const LCD_CMD_SETCGRAMADDR: u8 = 0x40;
/// Set the DDRAM address in the address counter
pub const LCD_CMD_SETDDRAMADDR: u8 = 0x80;
/// Display control with display, cursor and blink off
pub const LCD_CMD_DISPLAYOFF: u8 = 0x08;

/// Busy flag position in the status register
pub const LCD_STATUS_BUSY: u8 = 0x80;
/// Address counter bits in the status register
pub const LCD_STATUS_ADDRESS: u8 = 0x7F;

const DEFAULT_ENTRY_MODE: u8 = 0x06; // cursor moves right, no display shift
const DEFAULT_DISPLAY_CONTROL: u8 = 0x0C; // display on, no cursor, no blinking
const DEFAULT_CURSOR_SHIFT: u8 = 0x10; // move cursor left
const DEFAULT_FUNCTION_SET: u8 = 0x28; // 4 bit interface, two lines, 5x8 font

const CURSOR_SHIFT_INSTRUCTION: u8 = 0x10;
const CLEAR_MASK_THRESHOLD: u8 = 0x10;

/// A single register update, decoded from the encoded mask form.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RegisterMask {
    /// OR these bits into the register
    Set(u8),
    /// AND the register with this pre-inverted mask
    Clear(u8),
}

impl RegisterMask {
    /// Decode the single byte mask convention used by the command tables.
    pub const fn from_encoded(mask: u8) -> Self {
        if mask > CLEAR_MASK_THRESHOLD {
            RegisterMask::Clear(mask)
        } else {
            RegisterMask::Set(mask)
        }
    }

    pub const fn apply(self, current: u8) -> u8 {
        match self {
            RegisterMask::Set(bits) => set_bits(current, bits),
            RegisterMask::Clear(mask) => clear_bits(current, mask),
        }
    }
}

pub const fn set_bits(current: u8, bits: u8) -> u8 {
    current | bits
}

pub const fn clear_bits(current: u8, inverted_mask: u8) -> u8 {
    current & inverted_mask
}

/// Apply an encoded mask to a register value.
pub const fn update_register(current: u8, mask: u8) -> u8 {
    RegisterMask::from_encoded(mask).apply(current)
}

/// Commands for the entry mode register.
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EntryModeCommand {
    ShiftDisplayWhenSendingData = 0x01,
    DontShiftDisplayWhenSendingData = 0xFE,
    MoveCursorLeftWhenSendingData = 0x02,
    MoveCursorRightWhenSendingData = 0xFD,
}

/// Commands for the display control register.
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DisplayControlCommand {
    SetCursorBlinkingOn = 0x01,
    SetCursorBlinkingOff = 0xFE,
    SetCursorOn = 0x02,
    SetCursorOff = 0xFD,
    SetDisplayOn = 0x04,
    SetDisplayOff = 0xFB,
}

/// Commands for the cursor or display shift register.
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CursorDisplayShiftCommand {
    MoveCursorLeft = 0x00,
    MoveCursorRight = 0x04,
    ShiftDisplayLeft = 0x08,
    ShiftDisplayRight = 0x0C,
}

/// Commands for the function set register.
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FunctionSetCommand {
    SetFont5x10 = 0x04,
    SetFont5x8 = 0xFB,
    SetTwoLinesDisplay = 0x08,
    SetOneLineDisplay = 0xF7,
    Set8bitInterface = 0x10,
    Set4bitInterface = 0xEF,
}

/// Bit toggled into function set to select the 5x10 font
pub const FUNCTION_SET_FONT_TOGGLE: u8 = 0x04;
/// Bit toggled into function set to select a one line display
pub const FUNCTION_SET_LINES_TOGGLE: u8 = 0x08;

/// Shadow copy of the four HD44780 mode registers.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Registers {
    entry_mode: u8,
    display_control: u8,
    cursor_or_display_shift: u8,
    function_set: u8,
}

impl Default for Registers {
    fn default() -> Self {
        Self {
            entry_mode: DEFAULT_ENTRY_MODE,
            display_control: DEFAULT_DISPLAY_CONTROL,
            cursor_or_display_shift: DEFAULT_CURSOR_SHIFT,
            function_set: DEFAULT_FUNCTION_SET,
        }
    }
}

impl Registers {
    pub fn entry_mode(&self) -> u8 {
        self.entry_mode
    }

    pub fn display_control(&self) -> u8 {
        self.display_control
    }

    pub fn cursor_or_display_shift(&self) -> u8 {
        self.cursor_or_display_shift
    }

    pub fn function_set(&self) -> u8 {
        self.function_set
    }

    /// Updates the entry mode register and returns the byte to transmit.
    pub fn update_entry_mode(&mut self, command: EntryModeCommand) -> u8 {
        self.entry_mode = update_register(self.entry_mode, command as u8);
        self.entry_mode
    }

    /// Updates the display control register and returns the byte to transmit.
    pub fn update_display_control(&mut self, command: DisplayControlCommand) -> u8 {
        self.display_control = update_register(self.display_control, command as u8);
        self.display_control
    }

    /// Updates the cursor or display shift register and returns the byte to transmit.
    /// This register only records the latest shift, so it is rebuilt from scratch each time.
    pub fn update_cursor_or_display_shift(&mut self, command: CursorDisplayShiftCommand) -> u8 {
        self.cursor_or_display_shift = update_register(0x00, command as u8) | CURSOR_SHIFT_INSTRUCTION;
        self.cursor_or_display_shift
    }

    /// Updates the function set register and returns the byte to transmit.
    pub fn update_function_set(&mut self, command: FunctionSetCommand) -> u8 {
        self.function_set = update_register(self.function_set, command as u8);
        self.function_set
    }

    /// Toggles the font and line count bits into function set for the configured geometry.
    pub(crate) fn apply_geometry(&mut self, five_by_ten_font: bool, one_line: bool) -> u8 {
        if five_by_ten_font {
            self.function_set ^= FUNCTION_SET_FONT_TOGGLE;
        }
        if one_line {
            self.function_set ^= FUNCTION_SET_LINES_TOGGLE;
        }
        self.function_set
    }
}
