//! Persisted `{mode, brightness}` pair
//!
//! Two independent bytes at consecutive storage offsets. There is no header
//! or checksum, and each field is written on its own, so a power loss
//! between the writes can leave a mixed pair behind.

use embedded_storage::Storage;

use crate::config::ModeCycle;
use crate::effect::Mode;

/// Offset of the brightness byte relative to the mode byte
const BRIGHTNESS_OFFSET: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsError {
    /// The storage driver rejected a read or write
    Driver,
}

/// Raw settings exactly as stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistedSettings {
    pub mode: u8,
    pub brightness: u8,
}

impl PersistedSettings {
    pub const fn new(mode: Mode, brightness: u8) -> Self {
        Self {
            mode: mode.as_raw(),
            brightness,
        }
    }

    /// Stored mode if it is a known mode that belongs to `cycle`, otherwise
    /// the cycle's fallback
    pub fn mode_in(&self, cycle: &ModeCycle) -> Mode {
        Mode::from_raw(self.mode)
            .filter(|&mode| cycle.contains(mode))
            .unwrap_or_else(|| cycle.fallback())
    }
}

/// Byte-addressed settings store
pub struct SettingsStore<S: Storage> {
    storage: S,
    offset: u32,
}

impl<S: Storage> SettingsStore<S> {
    pub const fn new(storage: S, offset: u32) -> Self {
        Self { storage, offset }
    }

    /// Read both fields without validation
    pub fn load(&mut self) -> Result<PersistedSettings, SettingsError> {
        Ok(PersistedSettings {
            mode: self.read_byte(self.offset)?,
            brightness: self.read_byte(self.offset + BRIGHTNESS_OFFSET)?,
        })
    }

    /// Write mode, then brightness
    pub fn save(&mut self, settings: &PersistedSettings) -> Result<(), SettingsError> {
        self.write_byte(self.offset, settings.mode)?;
        self.write_byte(self.offset + BRIGHTNESS_OFFSET, settings.brightness)
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    fn read_byte(&mut self, offset: u32) -> Result<u8, SettingsError> {
        let mut buffer = [0u8; 1];
        self.storage
            .read(offset, &mut buffer)
            .map_err(|_| SettingsError::Driver)?;
        Ok(buffer[0])
    }

    fn write_byte(&mut self, offset: u32, value: u8) -> Result<(), SettingsError> {
        self.storage
            .write(offset, &[value])
            .map_err(|_| SettingsError::Driver)
    }
}
