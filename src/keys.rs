//! Scan positions on the ErgoDox matrix.
//!
//! Positions are numbered in keymap order: the left hand's five rows first
//! (7, 7, 6, 7, 5 keys), then its thumb cluster (top pair, edge key, bottom
//! three), then the right hand mirrored the same way.  The tables in the
//! layout modules are indexed by these positions, so the constants here are
//! mostly useful for tests and for the special keys the dispatch code talks
//! about by name.

/// All scan positions fit within this.
pub const NKEYS: usize = 76;

// Left hand, named for what the key does on the base layers.
pub const KEY_1: usize = 1;
pub const KEY_5: usize = 5;
pub const KEY_CIRC: usize = 6;

pub const KEY_X: usize = 8;
pub const KEY_V: usize = 9;
pub const KEY_L: usize = 10;
pub const KEY_C: usize = 11;
pub const KEY_W: usize = 12;
pub const KEY_PGUP: usize = 13;

pub const KEY_TAB: usize = 14;
pub const KEY_U: usize = 15;
pub const KEY_I: usize = 16;
pub const KEY_A: usize = 17;
pub const KEY_E: usize = 18;
pub const KEY_O: usize = 19;

pub const KEY_UE: usize = 21;
pub const KEY_OE: usize = 22;
pub const KEY_AE: usize = 23;
pub const KEY_P: usize = 24;
pub const KEY_Z: usize = 25;
pub const KEY_PGDN: usize = 26;

pub const KEY_APP: usize = 27;
pub const KEY_LGUI: usize = 28;
pub const KEY_NUMBERS: usize = 31;

// Left thumb cluster.
pub const KEY_STENO: usize = 32;
pub const KEY_FKEYS_L: usize = 33;
pub const KEY_LALT: usize = 34;
pub const KEY_SYMBOLS: usize = 35;
pub const KEY_LSHIFT: usize = 36;
pub const KEY_LCTRL: usize = 37;

// Right hand.
pub const KEY_ACUT: usize = 38;
pub const KEY_6: usize = 39;
pub const KEY_0: usize = 43;
pub const KEY_GRV: usize = 44;

pub const KEY_ENTER: usize = 45;
pub const KEY_K: usize = 46;
pub const KEY_H: usize = 47;
pub const KEY_G: usize = 48;
pub const KEY_F: usize = 49;
pub const KEY_Q: usize = 50;
pub const KEY_SS: usize = 51;

pub const KEY_S: usize = 52;
pub const KEY_N: usize = 53;
pub const KEY_R: usize = 54;
pub const KEY_T: usize = 55;
pub const KEY_D: usize = 56;
pub const KEY_Y: usize = 57;

pub const KEY_DEL: usize = 58;
pub const KEY_B: usize = 59;
pub const KEY_M: usize = 60;
pub const KEY_COMMA: usize = 61;
pub const KEY_DOT: usize = 62;
pub const KEY_J: usize = 63;
pub const KEY_BSPC: usize = 64;

pub const KEY_NAV: usize = 65;
pub const KEY_ESC: usize = 67;
pub const KEY_RGUI: usize = 68;

// Right thumb cluster.
pub const KEY_FKEYS_R: usize = 70;
pub const KEY_NEO: usize = 71;
pub const KEY_RALT: usize = 72;
pub const KEY_RCTRL: usize = 73;
pub const KEY_RSHIFT: usize = 74;
pub const KEY_SPACE: usize = 75;

// The reset key lives on the F-key layer, top left.
pub const KEY_RESET: usize = 0;

// Steno names for the same positions while the TxBolt layer is active.
pub const KEY_ST_N1: usize = 8;
pub const KEY_ST_N5: usize = 12;
pub const KEY_ST_S1: usize = 15;
pub const KEY_ST_TL: usize = 16;
pub const KEY_ST_PL: usize = 17;
pub const KEY_ST_HL: usize = 18;
pub const KEY_ST_STAR1: usize = 19;
pub const KEY_ST_S2: usize = 21;
pub const KEY_ST_KL: usize = 22;
pub const KEY_ST_WL: usize = 23;
pub const KEY_ST_RL: usize = 24;
pub const KEY_ST_STAR2: usize = 25;
pub const KEY_ST_A: usize = 35;
pub const KEY_ST_O: usize = 36;

pub const KEY_ST_N6: usize = 46;
pub const KEY_ST_NB: usize = 51;
pub const KEY_ST_STAR3: usize = 52;
pub const KEY_ST_FR: usize = 53;
pub const KEY_ST_PR: usize = 54;
pub const KEY_ST_LR: usize = 55;
pub const KEY_ST_TR: usize = 56;
pub const KEY_ST_DR: usize = 57;
pub const KEY_ST_STAR4: usize = 59;
pub const KEY_ST_RR: usize = 60;
pub const KEY_ST_BR: usize = 61;
pub const KEY_ST_GR: usize = 62;
pub const KEY_ST_SR: usize = 63;
pub const KEY_ST_ZR: usize = 64;
pub const KEY_ST_E: usize = 74;
pub const KEY_ST_U: usize = 75;
