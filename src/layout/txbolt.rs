//! TxBolt steno over the virtual serial link.
//!
//! While the TxBolt layer is toggled on, the steno key positions stop being
//! keys and become chord contributions.  A chord is typed by pressing some
//! combination of keys together and releasing them all; the moment every key
//! on the board is back up is the chord boundary, and at that moment the
//! accumulated chord goes out over the serial link.
//!
//! The wire format is the TxBolt protocol: each data byte carries a group
//! tag in its top two bits and the accumulated key mask for that group in
//! the low six, and a single zero byte terminates the chord.  Transmission
//! is fire-and-forget; a byte lost on the wire is lost.

use crate::log::info;
use crate::Host;

use super::{Action, NO, TT};
use crate::keys::NKEYS;

/// One steno key's contribution to a chord: which of the four group bytes it
/// lands in, and the bits it sets there.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct ChordBit {
    group: u8,
    mask: u8,
}

impl ChordBit {
    /// `group` is 0-3, `mask` fits in the low six bits.
    pub const fn new(group: u8, mask: u8) -> ChordBit {
        debug_assert!(group < 4 && mask < 64);
        ChordBit { group, mask }
    }

    /// The wire encoding of this key alone.
    pub const fn byte(self) -> u8 {
        (self.group << 6) | self.mask
    }
}

/// Accumulates one steno chord and flushes it at the chord boundary.
///
/// The pressed count tracks every key on the board, not just steno keys and
/// not just the steno layer, so a layer switch in the middle of a chord
/// cannot desynchronize the boundary detection.  There is no way to abandon
/// a chord: a press the firmware never reports released holds the state
/// indefinitely.  A release without a matching press saturates the count at
/// zero instead of wrapping.
pub struct TxBoltHandler {
    // Accumulated key masks, one per chord group.
    chord: [u8; 4],
    // Keys currently held anywhere on the board.
    pressed: u8,
}

impl TxBoltHandler {
    pub fn new() -> Self {
        TxBoltHandler {
            chord: [0; 4],
            pressed: 0,
        }
    }

    /// Note a key press.  `bit` is the key's chord contribution, if it
    /// resolved to one.
    pub fn key_down(&mut self, bit: Option<ChordBit>) {
        self.pressed = self.pressed.saturating_add(1);
        if let Some(bit) = bit {
            self.chord[bit.group as usize] |= bit.mask;
        }
    }

    /// Note a key release.  When the last held key comes up while the steno
    /// layer is topmost, the chord is flushed.  Off the steno layer the
    /// boundary passes silently and any pending chord stays buffered.
    pub fn key_up<H: Host>(&mut self, steno_active: bool, host: &mut H) {
        self.pressed = self.pressed.saturating_sub(1);
        if self.pressed == 0 && steno_active {
            self.flush(host);
        }
    }

    fn flush<H: Host>(&mut self, host: &mut H) {
        let sent = self.chord.iter().filter(|m| **m != 0).count();
        for (group, mask) in self.chord.iter().enumerate() {
            if *mask != 0 {
                host.steno_byte(((group as u8) << 6) | mask);
            }
        }
        host.steno_byte(0);
        self.chord = [0; 4];
        info!("txbolt: flushed chord, {} group bytes", sent);
    }
}

impl Default for TxBoltHandler {
    fn default() -> Self {
        TxBoltHandler::new()
    }
}

const fn st(group: u8, mask: u8) -> Action {
    Action::Steno(ChordBit::new(group, mask))
}

// The TxBolt key set.  Group 0 is the left consonant bank, group 1 the
// vowels and star, group 2 the right consonant bank, group 3 the right tail
// consonants and the number bar.
const L_S: Action = st(0, 0b00_0001);
const L_T: Action = st(0, 0b00_0010);
const L_K: Action = st(0, 0b00_0100);
const L_P: Action = st(0, 0b00_1000);
const L_W: Action = st(0, 0b01_0000);
const L_H: Action = st(0, 0b10_0000);

const L_R: Action = st(1, 0b00_0001);
const V_A: Action = st(1, 0b00_0010);
const V_O: Action = st(1, 0b00_0100);
const STAR: Action = st(1, 0b00_1000);
const V_E: Action = st(1, 0b01_0000);
const V_U: Action = st(1, 0b10_0000);

const R_F: Action = st(2, 0b00_0001);
const R_R: Action = st(2, 0b00_0010);
const R_P: Action = st(2, 0b00_0100);
const R_B: Action = st(2, 0b00_1000);
const R_L: Action = st(2, 0b01_0000);
const R_G: Action = st(2, 0b10_0000);

const R_T: Action = st(3, 0b00_0001);
const R_S: Action = st(3, 0b00_0010);
const R_D: Action = st(3, 0b00_0100);
const R_Z: Action = st(3, 0b00_1000);
const NUM: Action = st(3, 0b01_0000);

pub(super) static TXBOLT_TABLE: [Action; NKEYS] = [
    // Left hand.
    NO, NO, NO, NO, NO, NO, NO,
    NO, NUM, NUM, NUM, NUM, NUM, NO,
    NO, L_S, L_T, L_P, L_H, STAR,
    NO, L_S, L_K, L_W, L_R, STAR, NO,
    NO, NO, NO, NO, NO,
    // Left thumb.  The toggle position stays transparent so the same key
    // that enters steno mode leaves it again.
    TT, NO,
    NO,
    V_A, V_O, NO,
    // Right hand.
    NO, NO, NO, NO, NO, NO, NO,
    NO, NUM, NUM, NUM, NUM, NUM, NUM,
    STAR, R_F, R_P, R_L, R_T, R_D,
    NO, STAR, R_R, R_B, R_G, R_S, R_Z,
    NO, NO, NO, NO, NO,
    // Right thumb.
    NO, NO,
    NO,
    NO, V_E, V_U,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;
    use crate::layout::lookup;
    use crate::Layer;

    #[test]
    fn wire_encoding() {
        // The original TxBolt code points, spot-checked across the groups.
        assert_eq!(ChordBit::new(0, 0b00_0001).byte(), 0b0000_0001); // S-
        assert_eq!(ChordBit::new(1, 0b00_0001).byte(), 0b0100_0001); // -R
        assert_eq!(ChordBit::new(2, 0b00_0001).byte(), 0b1000_0001); // -F
        assert_eq!(ChordBit::new(3, 0b00_1000).byte(), 0b1100_1000); // -Z
        assert_eq!(ChordBit::new(3, 0b01_0000).byte(), 0b1101_0000); // #
    }

    #[test]
    fn steno_positions() {
        crate::testlog::setup();
        assert_eq!(lookup(Layer::TxBolt, keys::KEY_ST_S1), L_S);
        assert_eq!(lookup(Layer::TxBolt, keys::KEY_ST_S2), L_S);
        assert_eq!(lookup(Layer::TxBolt, keys::KEY_ST_A), V_A);
        assert_eq!(lookup(Layer::TxBolt, keys::KEY_ST_U), V_U);
        assert_eq!(lookup(Layer::TxBolt, keys::KEY_ST_ZR), R_Z);
        assert_eq!(lookup(Layer::TxBolt, keys::KEY_ST_N1), NUM);
        // The toggle key falls through to the base layer.
        assert_eq!(lookup(Layer::TxBolt, keys::KEY_STENO), Action::Trans);
    }

    #[test]
    fn both_star_keys_share_one_bit() {
        let left = lookup(Layer::TxBolt, keys::KEY_ST_STAR1);
        let right = lookup(Layer::TxBolt, keys::KEY_ST_STAR3);
        assert_eq!(left, right);
        assert_eq!(left, STAR);
    }
}
