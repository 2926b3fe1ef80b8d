//! Momentary overlays: symbols, numbers, navigation, F-keys.
//!
//! Pure data.  Symbol entries carry the QWERTZ scancode plus whatever
//! modifier the host needs to produce the character; the comments name the
//! character itself.  Positions not redefined here stay transparent.

use usbd_human_interface_device::page::Keyboard;

use super::macros::MacroId;
use super::{g, k, s, Action, TT};
use crate::keys::NKEYS;

const fn m(id: MacroId) -> Action {
    Action::Macro(id)
}

pub(super) static SYMBOLS_TABLE: [Action; NKEYS] = [
    // Left hand.
    TT, TT, TT, TT, TT, TT, TT,
    TT,
    TT,
    s(Keyboard::ForwardSlash),     // _
    g(Keyboard::Keyboard8),        // [
    g(Keyboard::Keyboard9),        // ]
    m(MacroId::Circumflex),        // ^
    TT,
    TT,
    g(Keyboard::Minus),            // backslash
    s(Keyboard::Keyboard7),        // /
    g(Keyboard::Keyboard7),        // {
    g(Keyboard::Keyboard0),        // }
    s(Keyboard::RightBrace),       // *
    TT,
    k(Keyboard::NonUSHash),        // #
    s(Keyboard::Keyboard4),        // $
    g(Keyboard::NonUSBackslash),   // |
    g(Keyboard::RightBrace),       // ~
    m(MacroId::Grave),             // `
    TT,
    TT, TT, TT, TT, TT,
    TT, TT,
    TT,
    TT, TT, TT,
    // Right hand.
    TT, TT, TT, TT, TT, TT, TT,
    TT,
    s(Keyboard::Keyboard1),        // !
    m(MacroId::LessThan),          // <
    m(MacroId::GreaterThan),       // >
    s(Keyboard::Keyboard0),        // =
    s(Keyboard::Keyboard6),        // &
    TT,
    s(Keyboard::Minus),            // ?
    s(Keyboard::Keyboard8),        // (
    s(Keyboard::Keyboard9),        // )
    k(Keyboard::ForwardSlash),     // -
    s(Keyboard::Dot),              // :
    g(Keyboard::Q),                // @
    TT,
    k(Keyboard::RightBrace),       // +
    s(Keyboard::Keyboard5),        // %
    s(Keyboard::Keyboard2),        // "
    s(Keyboard::NonUSHash),        // '
    s(Keyboard::Comma),            // ;
    TT,
    TT, TT, TT, TT, TT,
    TT, TT,
    TT,
    TT, TT, TT,
];

pub(super) static NUMBERS_TABLE: [Action; NKEYS] = [
    // Left hand: everything falls through.
    TT, TT, TT, TT, TT, TT, TT,
    TT, TT, TT, TT, TT, TT, TT,
    TT, TT, TT, TT, TT, TT,
    TT, TT, TT, TT, TT, TT, TT,
    TT, TT, TT, TT, TT,
    TT, TT,
    TT,
    TT, TT, TT,
    // Right hand: a numeric pad under the right fingers.
    TT, TT, TT, TT, TT, TT, TT,
    TT,
    TT,
    k(Keyboard::Keyboard7),
    k(Keyboard::Keyboard8),
    k(Keyboard::Keyboard9),
    k(Keyboard::RightBrace),       // +
    k(Keyboard::ForwardSlash),     // -
    TT,
    k(Keyboard::Keyboard4),
    k(Keyboard::Keyboard5),
    k(Keyboard::Keyboard6),
    k(Keyboard::Comma),
    k(Keyboard::Dot),
    TT,
    TT,
    k(Keyboard::Keyboard1),
    k(Keyboard::Keyboard2),
    k(Keyboard::Keyboard3),
    s(Keyboard::Comma),            // ;
    TT,
    k(Keyboard::Keyboard0), TT, TT, TT, TT,
    TT, TT,
    TT,
    TT, TT, TT,
];

pub(super) static NAV_TABLE: [Action; NKEYS] = [
    // Left hand: navigation cluster.
    TT, TT, TT, TT, TT, TT, TT,
    TT,
    k(Keyboard::PageUp),
    k(Keyboard::DeleteBackspace),
    k(Keyboard::UpArrow),
    k(Keyboard::DeleteForward),
    k(Keyboard::PageDown),
    TT,
    TT,
    k(Keyboard::Home),
    k(Keyboard::LeftArrow),
    k(Keyboard::DownArrow),
    k(Keyboard::RightArrow),
    k(Keyboard::End),
    TT, TT,
    k(Keyboard::Tab),
    TT,
    k(Keyboard::ReturnEnter),
    TT, TT,
    TT, TT, TT, TT, TT,
    TT, TT,
    TT,
    TT, TT, TT,
    // Right hand.
    TT, TT, TT, TT, TT, TT, TT,
    TT, TT, TT, TT, TT, TT, TT,
    TT, TT, TT, TT, TT, TT,
    TT, TT, TT, TT, TT, TT, TT,
    TT, TT, TT, TT, TT,
    TT, TT,
    TT,
    TT, TT, TT,
];

pub(super) static FKEYS_TABLE: [Action; NKEYS] = [
    // Left hand: F1-F6 on the top row, reset in the corner.
    Action::Reset,
    k(Keyboard::F1),
    k(Keyboard::F2),
    k(Keyboard::F3),
    k(Keyboard::F4),
    k(Keyboard::F5),
    k(Keyboard::F6),
    TT, TT, TT, TT, TT, TT, TT,
    TT, TT, TT, TT, TT, TT,
    TT, TT, TT, TT, TT, TT, TT,
    TT, TT, TT, TT, TT,
    TT, TT,
    TT,
    TT, TT, TT,
    // Right hand: F7-F12 on the top row.
    k(Keyboard::F7),
    k(Keyboard::F8),
    k(Keyboard::F9),
    k(Keyboard::F10),
    k(Keyboard::F11),
    k(Keyboard::F12),
    TT,
    TT, TT, TT, TT, TT, TT, TT,
    TT, TT, TT, TT, TT, TT,
    TT, TT, TT, TT, TT, TT, TT,
    TT, TT, TT, TT, TT,
    TT, TT,
    TT,
    TT, TT, TT,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;

    #[test]
    fn symbol_positions() {
        assert_eq!(SYMBOLS_TABLE[keys::KEY_W], m(MacroId::Circumflex));
        assert_eq!(SYMBOLS_TABLE[keys::KEY_Z], m(MacroId::Grave));
        assert_eq!(SYMBOLS_TABLE[keys::KEY_H], m(MacroId::LessThan));
        assert_eq!(SYMBOLS_TABLE[keys::KEY_G], m(MacroId::GreaterThan));
        assert_eq!(SYMBOLS_TABLE[keys::KEY_V], s(Keyboard::ForwardSlash));
        assert_eq!(SYMBOLS_TABLE[keys::KEY_X], Action::Trans);
    }

    #[test]
    fn numbers_pad() {
        assert_eq!(NUMBERS_TABLE[keys::KEY_H], k(Keyboard::Keyboard7));
        assert_eq!(NUMBERS_TABLE[keys::KEY_NAV], k(Keyboard::Keyboard0));
        assert_eq!(NUMBERS_TABLE[keys::KEY_X], Action::Trans);
    }

    #[test]
    fn fkeys_and_reset() {
        assert_eq!(FKEYS_TABLE[keys::KEY_RESET], Action::Reset);
        assert_eq!(FKEYS_TABLE[keys::KEY_1], k(Keyboard::F1));
        assert_eq!(FKEYS_TABLE[keys::KEY_ACUT], k(Keyboard::F7));
    }
}
