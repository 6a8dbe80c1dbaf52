use crate::gauge::{read_gauge, GaugeReadout};
use crate::math::{Rgba, Vec3f};
use crate::power::{HoldProgress, HoldToggle};
use crate::spec::AnalyzerSpec;
use crate::ConfigError;

/// Which hand holds the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
    /// Grabbed by something that did not report a hand (editor pointer).
    Unknown,
}

/// Handheld gas analyzer: hold-to-toggle power plus a proximity readout.
#[derive(Debug, Clone)]
pub struct GasAnalyzer {
    power: HoldToggle,
    trigger_down: bool,
    held_by: Option<Hand>,
    idle_color: Rgba,
    progress_color: Rgba,
}

impl GasAnalyzer {
    pub fn new(spec: &AnalyzerSpec) -> Result<Self, ConfigError> {
        spec.validate()?;
        Ok(Self {
            power: HoldToggle::new(spec.hold_duration),
            trigger_down: false,
            held_by: None,
            idle_color: spec.idle_color,
            progress_color: spec.progress_color,
        })
    }

    pub fn is_on(&self) -> bool {
        self.power.is_on()
    }

    pub fn held_by(&self) -> Option<Hand> {
        self.held_by
    }

    /// The power button shows depressed while the trigger is held.
    pub fn button_depressed(&self) -> bool {
        self.trigger_down
    }

    pub fn indicator_color(&self) -> Rgba {
        self.power.indicator_color(self.idle_color, self.progress_color)
    }

    pub fn grab(&mut self, hand: Hand) {
        self.held_by = Some(hand);
    }

    /// Dropping the device also lets go of the trigger.
    pub fn drop_device(&mut self) {
        self.held_by = None;
        self.release_trigger();
    }

    pub fn hold_trigger(&mut self, dt: f32) -> HoldProgress {
        self.trigger_down = true;
        self.power.hold(dt)
    }

    pub fn release_trigger(&mut self) {
        self.trigger_down = false;
        self.power.release();
    }

    /// Per-tick trigger polling as done by a held controller.
    pub fn trigger(&mut self, held: bool, dt: f32) -> Option<HoldProgress> {
        if held {
            Some(self.hold_trigger(dt))
        } else {
            self.release_trigger();
            None
        }
    }

    /// Display contents; `None` while the device is off.
    pub fn readout(&self, probe: Vec3f, zones: &[Vec3f]) -> Option<GaugeReadout> {
        self.is_on().then(|| read_gauge(probe, zones))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> GasAnalyzer {
        GasAnalyzer::new(&AnalyzerSpec { hold_duration: 1.0, ..Default::default() }).unwrap()
    }

    #[test]
    fn display_dark_until_powered() {
        let mut a = analyzer();
        assert_eq!(a.readout(Vec3f::ZERO, &[Vec3f::X]), None);
        assert!(a.hold_trigger(1.0).toggled);
        assert_eq!(
            a.readout(Vec3f::ZERO, &[]),
            Some(GaugeReadout::NoZones)
        );
    }

    #[test]
    fn drop_releases_trigger() {
        let mut a = analyzer();
        a.grab(Hand::Right);
        a.hold_trigger(0.5);
        assert!(a.button_depressed());
        a.drop_device();
        assert_eq!(a.held_by(), None);
        assert!(!a.button_depressed());
        assert!(!a.hold_trigger(0.6).toggled);
    }

    #[test]
    fn polling_release_resets_progress() {
        let mut a = analyzer();
        a.trigger(true, 0.9);
        assert_eq!(a.trigger(false, 0.1), None);
        assert!(!a.trigger(true, 0.2).map(|p| p.toggled).unwrap_or(false));
        assert!(!a.is_on());
    }

    #[test]
    fn rejects_empty_tag() {
        let spec = AnalyzerSpec { danger_zone_tag: " ".into(), ..Default::default() };
        assert_eq!(GasAnalyzer::new(&spec).unwrap_err(), ConfigError::EmptyZoneTag);
    }
}
