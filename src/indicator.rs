//! Layer indicator LEDs.
//!
//! Driven from the per-scan hook, so the blink period follows the scan rate
//! rather than wall-clock time.  Every cycle starts from all LEDs off and
//! the topmost layer decides what to light: blinking while the Neo base
//! layer is active (a reminder that the host must be set to Neo2), solid
//! while the steno layer is on, dark otherwise.

use enumset::{EnumSet, EnumSetType};

use crate::layout::{top_layer, Layer};
use crate::Host;

/// The board's indicator LEDs.
#[derive(EnumSetType, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Led {
    Board,
    Right1,
    Right2,
    Right3,
}

/// Scan cycles per blink period, half on, half off.
const BLINK_PERIOD: u16 = 1000;

pub struct IndicatorManager {
    // Scans since the Neo layer became topmost.
    scan_no: u16,
}

impl IndicatorManager {
    pub fn new() -> Self {
        IndicatorManager { scan_no: 0 }
    }

    /// Drive the LEDs for one scan cycle.
    pub fn tick<H: Host>(&mut self, host: &mut H) {
        let layer = top_layer(host.layer_state());

        for led in EnumSet::<Led>::all() {
            host.led(led, false);
        }

        if layer == Layer::Neo {
            self.scan_no = self.scan_no.wrapping_add(1);
        } else {
            self.scan_no = 0;
        }

        match layer {
            Layer::Neo => {
                if self.scan_no % BLINK_PERIOD < BLINK_PERIOD / 2 {
                    host.led(Led::Board, true);
                }
            }
            Layer::TxBolt => host.led(Led::Board, true),
            _ => (),
        }
    }
}

impl Default for IndicatorManager {
    fn default() -> Self {
        IndicatorManager::new()
    }
}
