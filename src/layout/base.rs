//! The two base layers.
//!
//! Both render Neo2 on the hardware; they differ only in which scancodes the
//! host turns back into the right characters.  Against a QWERTZ host a Neo2
//! "a" must be sent as the QWERTZ "a" scancode; against a Neo2 host it must
//! be sent as the scancode of the physical position Neo2 puts "a" on.  So
//! there is exactly one table shape, built by [`base_layer`], and two letter
//! sets feeding it.

use usbd_human_interface_device::page::Keyboard;

use super::{k, s, Action, Layer, NO};
use crate::keys::NKEYS;

/// Host-dependent assignments: the Neo2 letters plus the three accent keys.
/// Everything else on the base layers is host-independent.
struct Letters {
    x: Action,
    v: Action,
    l: Action,
    c: Action,
    w: Action,
    u: Action,
    i: Action,
    a: Action,
    e: Action,
    o: Action,
    ue: Action,
    oe: Action,
    ae: Action,
    p: Action,
    z: Action,
    k: Action,
    h: Action,
    g: Action,
    f: Action,
    q: Action,
    ss: Action,
    s: Action,
    n: Action,
    r: Action,
    t: Action,
    d: Action,
    y: Action,
    b: Action,
    m: Action,
    comma: Action,
    dot: Action,
    j: Action,
    circ: Action,
    acut: Action,
    grv: Action,
}

/// The one base-layer shape.
const fn base_layer(lt: Letters) -> [Action; NKEYS] {
    [
        // Left hand.
        NO, k(Keyboard::Keyboard1), k(Keyboard::Keyboard2), k(Keyboard::Keyboard3),
        k(Keyboard::Keyboard4), k(Keyboard::Keyboard5), lt.circ,
        NO, lt.x, lt.v, lt.l, lt.c, lt.w, k(Keyboard::PageUp),
        k(Keyboard::Tab), lt.u, lt.i, lt.a, lt.e, lt.o,
        NO, lt.ue, lt.oe, lt.ae, lt.p, lt.z, k(Keyboard::PageDown),
        k(Keyboard::Application), k(Keyboard::LeftGUI), NO, NO, Action::Momentary(Layer::Numbers),
        // Left thumb.
        Action::Toggle(Layer::TxBolt), Action::Momentary(Layer::FKeys),
        k(Keyboard::LeftAlt),
        Action::Momentary(Layer::Symbols), k(Keyboard::LeftShift), k(Keyboard::LeftControl),
        // Right hand.
        lt.acut, k(Keyboard::Keyboard6), k(Keyboard::Keyboard7), k(Keyboard::Keyboard8),
        k(Keyboard::Keyboard9), k(Keyboard::Keyboard0), lt.grv,
        k(Keyboard::ReturnEnter), lt.k, lt.h, lt.g, lt.f, lt.q, lt.ss,
        lt.s, lt.n, lt.r, lt.t, lt.d, lt.y,
        k(Keyboard::DeleteForward), lt.b, lt.m, lt.comma, lt.dot, lt.j,
        k(Keyboard::DeleteBackspace),
        Action::Momentary(Layer::Nav), NO, k(Keyboard::Escape), k(Keyboard::RightGUI), NO,
        // Right thumb.
        Action::Momentary(Layer::FKeys), Action::Toggle(Layer::Neo),
        k(Keyboard::RightAlt),
        k(Keyboard::RightControl), k(Keyboard::RightShift), k(Keyboard::Space),
    ]
}

// German QWERTZ scancode aliases.  The host swaps z and y, keeps the umlauts
// on the brace/semicolon/apostrophe positions, and reaches the dead accents
// through Grave (^) and Equal (´, ` when shifted).
const QWERTZ: Letters = Letters {
    x: k(Keyboard::X),
    v: k(Keyboard::V),
    l: k(Keyboard::L),
    c: k(Keyboard::C),
    w: k(Keyboard::W),
    u: k(Keyboard::U),
    i: k(Keyboard::I),
    a: k(Keyboard::A),
    e: k(Keyboard::E),
    o: k(Keyboard::O),
    ue: k(Keyboard::LeftBrace),
    oe: k(Keyboard::Semicolon),
    ae: k(Keyboard::Apostrophe),
    p: k(Keyboard::P),
    z: k(Keyboard::Y),
    k: k(Keyboard::K),
    h: k(Keyboard::H),
    g: k(Keyboard::G),
    f: k(Keyboard::F),
    q: k(Keyboard::Q),
    ss: k(Keyboard::Minus),
    s: k(Keyboard::S),
    n: k(Keyboard::N),
    r: k(Keyboard::R),
    t: k(Keyboard::T),
    d: k(Keyboard::D),
    y: k(Keyboard::Z),
    b: k(Keyboard::B),
    m: k(Keyboard::M),
    comma: k(Keyboard::Comma),
    dot: k(Keyboard::Dot),
    j: k(Keyboard::J),
    circ: k(Keyboard::Grave),
    acut: k(Keyboard::Equal),
    grv: s(Keyboard::Equal),
};

// A host really set to Neo2 maps scancodes by physical position, so each
// letter is sent as the scancode of the position Neo2 assigns it.
const NEO: Letters = Letters {
    x: k(Keyboard::Q),
    v: k(Keyboard::W),
    l: k(Keyboard::E),
    c: k(Keyboard::R),
    w: k(Keyboard::T),
    u: k(Keyboard::A),
    i: k(Keyboard::S),
    a: k(Keyboard::D),
    e: k(Keyboard::F),
    o: k(Keyboard::G),
    ue: k(Keyboard::Z),
    oe: k(Keyboard::X),
    ae: k(Keyboard::C),
    p: k(Keyboard::V),
    z: k(Keyboard::B),
    k: k(Keyboard::Y),
    h: k(Keyboard::U),
    g: k(Keyboard::I),
    f: k(Keyboard::O),
    q: k(Keyboard::P),
    ss: k(Keyboard::LeftBrace),
    s: k(Keyboard::H),
    n: k(Keyboard::J),
    r: k(Keyboard::K),
    t: k(Keyboard::L),
    d: k(Keyboard::Semicolon),
    y: k(Keyboard::Apostrophe),
    b: k(Keyboard::N),
    m: k(Keyboard::M),
    comma: k(Keyboard::Comma),
    dot: k(Keyboard::Dot),
    j: k(Keyboard::ForwardSlash),
    circ: k(Keyboard::Grave),
    acut: k(Keyboard::Equal),
    grv: s(Keyboard::Equal),
};

pub(super) static QWERTZ_TABLE: [Action; NKEYS] = base_layer(QWERTZ);
pub(super) static NEO_TABLE: [Action; NKEYS] = base_layer(NEO);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;

    #[test]
    fn tables_share_one_shape() {
        // Host-independent positions are identical in both instantiations.
        assert_eq!(QWERTZ_TABLE[keys::KEY_TAB], NEO_TABLE[keys::KEY_TAB]);
        assert_eq!(QWERTZ_TABLE[keys::KEY_STENO], NEO_TABLE[keys::KEY_STENO]);
        assert_eq!(QWERTZ_TABLE[keys::KEY_SPACE], NEO_TABLE[keys::KEY_SPACE]);
        assert_eq!(QWERTZ_TABLE[keys::KEY_1], NEO_TABLE[keys::KEY_1]);

        // Letter positions carry the host-specific scancodes.
        assert_eq!(QWERTZ_TABLE[keys::KEY_X], k(Keyboard::X));
        assert_eq!(NEO_TABLE[keys::KEY_X], k(Keyboard::Q));
        assert_eq!(QWERTZ_TABLE[keys::KEY_A], k(Keyboard::A));
        assert_eq!(NEO_TABLE[keys::KEY_A], k(Keyboard::D));
    }

    #[test]
    fn qwertz_swaps_z_and_y() {
        assert_eq!(QWERTZ_TABLE[keys::KEY_Z], k(Keyboard::Y));
        assert_eq!(QWERTZ_TABLE[keys::KEY_Y], k(Keyboard::Z));
    }

    #[test]
    fn undefined_positions_are_noops() {
        for table in [&QWERTZ_TABLE, &NEO_TABLE] {
            assert_eq!(table[0], Action::NoOp);
            assert_eq!(table[7], Action::NoOp);
            assert_eq!(table[29], Action::NoOp);
            assert_eq!(table[66], Action::NoOp);
        }
    }
}
