/// Tolerance-band state machine: one alert per excursion into the band
use crate::types::BandEvent;

/// Tracks whether the alert for the current excursion has fired.
/// `|price - center| <= tolerance` counts as in-band (boundaries inclusive).
#[derive(Debug)]
pub struct BandWatcher {
    center: f64,
    tolerance: f64,
    alert_sent: bool,
}

impl BandWatcher {
    pub fn new(center: f64, tolerance: f64) -> Self {
        BandWatcher {
            center,
            tolerance,
            alert_sent: false,
        }
    }

    pub fn center(&self) -> f64 {
        self.center
    }

    /// Evaluate one price. `Entered` marks the alert as sent; leaving the
    /// band re-arms the watcher for the next excursion.
    pub fn evaluate(&mut self, price: f64) -> BandEvent {
        if (price - self.center).abs() <= self.tolerance {
            if self.alert_sent {
                BandEvent::InBand
            } else {
                self.alert_sent = true;
                BandEvent::Entered { price }
            }
        } else {
            self.alert_sent = false;
            BandEvent::OutOfBand
        }
    }

    /// Undo the sent mark after a failed delivery so the next in-band tick
    /// retries the alert
    pub fn rearm(&mut self) {
        self.alert_sent = false;
    }
}
