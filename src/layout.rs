//! Layer tables and key dispatch.
//!
//! - The seven layers and their static action tables.
//! - Transparency resolution through the active-layer stack.
//! - The dispatcher that turns key events into host operations.

use enumset::{EnumSet, EnumSetType};

use crate::indicator::IndicatorManager;
use crate::keys::NKEYS;
use crate::layout::macros::MacroId;
use crate::layout::txbolt::{ChordBit, TxBoltHandler};
use crate::{Host, KeyEvent, KeyOp, Keyboard, Mods};

mod base;
pub mod macros;
mod overlay;
pub mod txbolt;

// The keyboard is a hardware rendition of the Neo2 layout
// (http://neo-layout.org/), so it can be plugged into any PC without
// installing a software layout.  The host is normally set to German QWERTZ,
// and the base layer substitutes the QWERTZ scancode for each Neo2 letter.  A
// second base layer does the same substitution against a host that really is
// set to Neo2, for the rare machine that has it installed.  The two tables
// are deliberately one parameterized shape instantiated with two letter sets
// (see the base module); only the literals differ.
//
// On top of the base sit momentary overlays for symbols, numbers, navigation
// and F-keys, and a toggled TxBolt layer that stops sending HID events
// entirely and instead accumulates steno chords for the serial link.  Symbols
// that the host layout reaches through dead keys are synthesized by macros
// (see the macros module) so that, for example, the circumflex key produces a
// bare "^" instead of arming the host's accent composition.

/// One overlay of key-to-action bindings.  Declaration order is stacking
/// order: the highest active layer is the topmost.
#[derive(EnumSetType, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    /// Neo2 against a host set to German QWERTZ.
    Qwertz,
    /// Neo2 against a host set to Neo2.
    Neo,
    /// Symbols (momentary).
    Symbols,
    /// Numeric pad (momentary).
    Numbers,
    /// Navigation cluster (momentary).
    Nav,
    /// F1-F12 and the reset key (momentary).
    FKeys,
    /// TxBolt steno over the virtual serial link (toggled).
    TxBolt,
}

/// What a key position does on one layer.  Compiled into the static tables;
/// never constructed at runtime.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Action {
    /// Literal keycode, sent with the given modifiers held around it.
    /// Autorepeat is the host's business, as for any held key.
    Key(Keyboard, Mods),
    /// Defer to the next active layer below.
    Trans,
    /// The position does nothing on this layer.
    NoOp,
    /// Overlay active while the key is held.
    Momentary(Layer),
    /// Overlay toggled on the press edge.
    Toggle(Layer),
    /// Synthesized key sequence, press edge only.
    Macro(MacroId),
    /// Contribution to the pending steno chord.
    Steno(ChordBit),
    /// Hand control to the firmware reset path.
    Reset,
}

/// Plain keycode entry.
pub(crate) const fn k(code: Keyboard) -> Action {
    Action::Key(code, Mods::empty())
}

/// Shifted keycode entry.
pub(crate) const fn s(code: Keyboard) -> Action {
    Action::Key(code, Mods::SHIFT)
}

/// AltGr keycode entry.
pub(crate) const fn g(code: Keyboard) -> Action {
    Action::Key(code, Mods::RALT)
}

pub(crate) const NO: Action = Action::NoOp;
pub(crate) const TT: Action = Action::Trans;

/// Layers from topmost to base.  Transparency resolution walks this order.
const STACK: [Layer; 7] = [
    Layer::TxBolt,
    Layer::FKeys,
    Layer::Nav,
    Layer::Numbers,
    Layer::Symbols,
    Layer::Neo,
    Layer::Qwertz,
];

impl Layer {
    fn table(self) -> &'static [Action; NKEYS] {
        match self {
            Layer::Qwertz => &base::QWERTZ_TABLE,
            Layer::Neo => &base::NEO_TABLE,
            Layer::Symbols => &overlay::SYMBOLS_TABLE,
            Layer::Numbers => &overlay::NUMBERS_TABLE,
            Layer::Nav => &overlay::NAV_TABLE,
            Layer::FKeys => &overlay::FKEYS_TABLE,
            Layer::TxBolt => &txbolt::TXBOLT_TABLE,
        }
    }
}

/// Look up a single layer's action for a position.  Total: positions outside
/// the matrix are no-ops.
pub fn lookup(layer: Layer, key: usize) -> Action {
    if key >= NKEYS {
        return Action::NoOp;
    }
    layer.table()[key]
}

/// The topmost active layer.
pub fn top_layer(layers: EnumSet<Layer>) -> Layer {
    layers.iter().last().unwrap_or(Layer::Qwertz)
}

/// Resolve a position through the active-layer stack, skipping transparent
/// entries.  The base layer is always consulted last.
pub fn resolve(layers: EnumSet<Layer>, key: usize) -> Action {
    for layer in STACK {
        if layer != Layer::Qwertz && !layers.contains(layer) {
            continue;
        }
        match lookup(layer, key) {
            Action::Trans => continue,
            action => return action,
        }
    }
    Action::NoOp
}

/// The layout manager.  Owns every piece of state the two firmware hooks
/// mutate: the chord accumulator, the indicator counter, and the per-position
/// record of what a press resolved to.  The firmware serializes calls into
/// it, so a plain `&mut` is the whole concurrency story.
pub struct LayoutManager {
    txbolt: TxBoltHandler,
    indicator: IndicatorManager,

    // What each held position resolved to at press time.  The release edge
    // uses this record, so a key keeps its meaning even if the layer stack
    // changes while it is down.
    held: [Option<Action>; NKEYS],
}

impl LayoutManager {
    pub fn new() -> Self {
        LayoutManager {
            txbolt: TxBoltHandler::new(),
            indicator: IndicatorManager::new(),
            held: [None; NKEYS],
        }
    }

    /// Handle a single key event.  Called from the firmware's per-key hook.
    pub fn handle_event<H: Host>(&mut self, event: KeyEvent, host: &mut H) {
        let key = event.key() as usize;
        if key >= NKEYS {
            return;
        }
        // Captured before any action runs: a chord flush belongs to the
        // layer that was topmost when the final key came up.
        let layers = host.layer_state();
        let steno_active = top_layer(layers) == Layer::TxBolt;

        match event {
            KeyEvent::Press(_) => {
                let action = resolve(layers, key);
                self.held[key] = Some(action);
                if let Action::Steno(bit) = action {
                    self.txbolt.key_down(Some(bit));
                } else {
                    self.txbolt.key_down(None);
                    self.press(action, host);
                }
            }
            KeyEvent::Release(_) => {
                if let Some(action) = self.held[key].take() {
                    self.release(action, host);
                }
                self.txbolt.key_up(steno_active, host);
            }
        }
    }

    /// Once per matrix scan.  Called from the firmware's scan hook.
    pub fn tick<H: Host>(&mut self, host: &mut H) {
        self.indicator.tick(host);
    }

    fn press<H: Host>(&mut self, action: Action, host: &mut H) {
        match action {
            Action::Key(code, mods) => {
                for m in mods.keys() {
                    host.key(KeyOp::Press(m));
                }
                host.key(KeyOp::Press(code));
            }
            Action::Macro(id) => {
                for op in macros::resolve(id, true) {
                    host.key(*op);
                }
            }
            Action::Momentary(layer) => host.layer_on(layer),
            Action::Toggle(layer) => host.layer_toggle(layer),
            Action::Reset => host.reset(),
            Action::Steno(_) | Action::Trans | Action::NoOp => (),
        }
    }

    fn release<H: Host>(&mut self, action: Action, host: &mut H) {
        match action {
            Action::Key(code, mods) => {
                host.key(KeyOp::Release(code));
                for m in mods.keys() {
                    host.key(KeyOp::Release(m));
                }
            }
            Action::Momentary(layer) => host.layer_off(layer),
            // Macros synthesize everything on the press edge; steno and the
            // rest have no release half.
            _ => (),
        }
    }
}

impl Default for LayoutManager {
    fn default() -> Self {
        LayoutManager::new()
    }
}
