//! Neo2 layout with a TxBolt steno bridge for an ErgoDox-style split keyboard.
//!
//! This crate is only the layout core: the static layer tables, the key
//! macros that synthesize the Neo2 symbols a German host layout cannot
//! produce directly, the steno chord accumulator feeding the TxBolt serial
//! protocol, and the layer indicator LEDs.  Matrix scanning, debouncing, the
//! USB HID transport, and the active-layer bitmask all belong to the hosting
//! firmware, which drives this crate through two entry points (one per key
//! event, one per matrix scan) and provides the [`Host`] trait for everything
//! flowing the other way.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

use arrayvec::ArrayVec;
use bitflags::bitflags;

pub use enumset::EnumSet;
pub use usbd_human_interface_device::page::Keyboard;

pub use crate::indicator::Led;
pub use crate::layout::macros::MacroId;
pub use crate::layout::txbolt::ChordBit;
pub use crate::layout::{Action, Layer, LayoutManager};

pub mod indicator;
pub mod keys;
pub mod layout;

#[cfg(test)]
mod testlog;

cfg_if::cfg_if! {
    if #[cfg(feature = "defmt")] {
        mod log {
            pub use defmt::info;
        }
    } else if #[cfg(feature = "log")] {
        mod log {
            pub use log::info;
        }
    } else {
        mod log {
            macro_rules! info {
                ($($arg:tt)*) => {{}};
            }
            pub(crate) use info;
        }
    }
}

/// Key events indicate keys going up or down, by scan position.
///
/// Positions at or past [`keys::NKEYS`] are ignored by the dispatch code.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyEvent {
    Press(u8),
    Release(u8),
}

impl KeyEvent {
    pub fn key(&self) -> u8 {
        match self {
            KeyEvent::Press(k) => *k,
            KeyEvent::Release(k) => *k,
        }
    }

    pub fn is_press(&self) -> bool {
        match self {
            KeyEvent::Press(_) => true,
            KeyEvent::Release(_) => false,
        }
    }
}

bitflags! {
    /// Modifiers held around a keycode when a table entry is sent.  RALT
    /// carries the AltGr symbols of the German host layout.
    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
    pub struct Mods: u8 {
        const SHIFT = 0b0000_0001;
        const CONTROL = 0b0000_0010;
        const ALT = 0b0000_0100;
        const GUI = 0b0000_1000;
        const RALT = 0b0001_0000;
    }
}

impl Mods {
    /// The keycodes to hold down for this modifier set.
    pub(crate) fn keys(self) -> ArrayVec<Keyboard, 5> {
        let mut keys = ArrayVec::new();
        if self.contains(Mods::SHIFT) {
            keys.push(Keyboard::LeftShift);
        }
        if self.contains(Mods::CONTROL) {
            keys.push(Keyboard::LeftControl);
        }
        if self.contains(Mods::ALT) {
            keys.push(Keyboard::LeftAlt);
        }
        if self.contains(Mods::GUI) {
            keys.push(Keyboard::LeftGUI);
        }
        if self.contains(Mods::RALT) {
            keys.push(Keyboard::RightAlt);
        }
        keys
    }
}

/// A primitive key operation handed to the host's HID path.
///
/// `Tap` is one logical press immediately followed by its release; macros are
/// built from taps, so holding a macro-backed key never autorepeats.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyOp {
    Press(Keyboard),
    Release(Keyboard),
    Tap(Keyboard),
}

/// Operations the layout core needs from the hosting firmware.
///
/// The firmware owns the layer bitmask; this core only reads it, and asks for
/// changes through the `layer_*` calls when a table action says so.  All of
/// these are expected to be non-blocking; `steno_byte` in particular is
/// fire-and-forget, a byte the transport drops is gone.
pub trait Host {
    /// Layers currently active.  The base layer is treated as always active
    /// regardless of what this returns.
    fn layer_state(&self) -> EnumSet<Layer>;

    /// Activate an overlay (momentary press edge).
    fn layer_on(&mut self, layer: Layer);

    /// Deactivate an overlay (momentary release edge).
    fn layer_off(&mut self, layer: Layer);

    /// Toggle an overlay.
    fn layer_toggle(&mut self, layer: Layer);

    /// Emit a primitive key operation.
    fn key(&mut self, op: KeyOp);

    /// Send one byte on the steno virtual serial link.
    fn steno_byte(&mut self, byte: u8);

    /// Drive one indicator LED.
    fn led(&mut self, led: Led, on: bool);

    /// Hand control to the firmware's reset/bootloader path.
    fn reset(&mut self);
}
