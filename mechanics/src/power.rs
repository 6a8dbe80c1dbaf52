use crate::math::Rgba;

/// Progress report for one held tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoldProgress {
    /// Fraction of the hold duration reached, in [0,1].
    pub progress: f32,
    /// True only on the tick the state flipped.
    pub toggled: bool,
}

/// Flips a binary state once a continuous hold reaches `duration`.
///
/// After firing, further holding is ignored until `release` re-arms it.
#[derive(Debug, Clone, PartialEq)]
pub struct HoldToggle {
    duration: f32,
    timer: f32,
    fired: bool,
    on: bool,
}

impl HoldToggle {
    pub fn new(duration: f32) -> Self {
        Self { duration: duration.max(0.0), timer: 0.0, fired: false, on: false }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn fired_this_hold(&self) -> bool {
        self.fired
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.timer / self.duration).clamp(0.0, 1.0)
    }

    pub fn hold(&mut self, dt: f32) -> HoldProgress {
        if self.fired {
            return HoldProgress { progress: 1.0, toggled: false };
        }
        self.timer += dt.max(0.0);
        let progress = self.progress();
        if self.timer >= self.duration {
            self.on = !self.on;
            self.fired = true;
            return HoldProgress { progress, toggled: true };
        }
        HoldProgress { progress, toggled: false }
    }

    pub fn release(&mut self) {
        self.timer = 0.0;
        self.fired = false;
    }

    /// Indicator color: fades toward the other state's color while a hold is
    /// in progress, otherwise shows the current state's color.
    pub fn indicator_color(&self, idle: Rgba, on: Rgba) -> Rgba {
        let (from, to) = if self.on { (on, idle) } else { (idle, on) };
        if self.fired || self.timer <= 0.0 {
            return from;
        }
        from.lerp(to, self.progress())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_once_per_hold() {
        let mut t = HoldToggle::new(3.0);
        assert!(!t.hold(1.5).toggled);
        let p = t.hold(1.5);
        assert!(p.toggled);
        assert!(t.is_on());
        for _ in 0..100 {
            assert!(!t.hold(1.0).toggled);
        }
        assert!(t.is_on());
    }

    #[test]
    fn early_release_resets_timer() {
        let mut t = HoldToggle::new(3.0);
        t.hold(2.9);
        t.release();
        assert_eq!(t.progress(), 0.0);
        assert!(!t.hold(2.9).toggled);
        assert!(!t.is_on());
    }

    #[test]
    fn release_rearms_for_next_toggle() {
        let mut t = HoldToggle::new(1.0);
        t.hold(1.0);
        t.release();
        assert!(t.hold(1.0).toggled);
        assert!(!t.is_on());
    }

    #[test]
    fn indicator_fades_toward_other_state() {
        let idle = Rgba::rgb(0.0, 0.0, 0.0);
        let on = Rgba::rgb(0.0, 1.0, 0.0);
        let mut t = HoldToggle::new(2.0);
        assert_eq!(t.indicator_color(idle, on), idle);
        t.hold(1.0);
        assert!((t.indicator_color(idle, on).g - 0.5).abs() < 1e-6);
        t.hold(1.0);
        assert_eq!(t.indicator_color(idle, on), on);
        t.release();
        t.hold(0.5);
        assert!((t.indicator_color(idle, on).g - 0.75).abs() < 1e-6);
    }
}
