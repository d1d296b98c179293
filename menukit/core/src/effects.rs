//! Opacity Fading
//!
//! Simple parameter interpolation for UI elements that fade in and out
//! alongside page transitions. There is no coordination problem here —
//! a fader owns a single opacity value and walks it toward a target
//! over a fixed number of ticks.

/// Tick-driven opacity fade toward fully visible or fully hidden.
///
/// `fade_in` is a no-op while already on, `fade_out` while already off;
/// retargeting mid-fade restarts the interpolation from the current
/// opacity. A tick count of zero snaps immediately.
#[derive(Clone, Copy, Debug)]
pub struct Fader {
    on: bool,
    current: f32,
    initial: f32,
    fade_ticks: u32,
    elapsed: u32,
    fading: bool,
}

impl Fader {
    /// Create a fader starting fully hidden.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            on: false,
            current: 0.0,
            initial: 0.0,
            fade_ticks: 0,
            elapsed: 0,
            fading: false,
        }
    }

    /// Create a fader starting fully visible.
    #[must_use]
    pub fn visible() -> Self {
        Self {
            on: true,
            current: 1.0,
            initial: 1.0,
            fade_ticks: 0,
            elapsed: 0,
            fading: false,
        }
    }

    /// Start fading toward fully visible over `fade_ticks` ticks.
    /// No-op if the fader is already on.
    pub fn fade_in(&mut self, fade_ticks: u32) {
        if self.on {
            return;
        }
        self.on = true;
        self.retarget(fade_ticks);
    }

    /// Start fading toward fully hidden over `fade_ticks` ticks.
    /// No-op if the fader is already off.
    pub fn fade_out(&mut self, fade_ticks: u32) {
        if !self.on {
            return;
        }
        self.on = false;
        self.retarget(fade_ticks);
    }

    fn retarget(&mut self, fade_ticks: u32) {
        self.initial = self.current;
        self.fade_ticks = fade_ticks;
        self.elapsed = 0;
        self.fading = fade_ticks > 0;
        if fade_ticks == 0 {
            self.current = self.target();
        }
    }

    /// Advance the fade one tick and return the resulting opacity.
    pub fn tick(&mut self) -> f32 {
        if !self.fading {
            return self.current;
        }

        self.elapsed += 1;
        let t = (self.elapsed as f32 / self.fade_ticks as f32).min(1.0);
        self.current = self.initial + (self.target() - self.initial) * t;

        if self.elapsed >= self.fade_ticks {
            self.current = self.target();
            self.fading = false;
        }
        self.current
    }

    /// Current opacity in `[0.0, 1.0]`.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.current
    }

    /// Whether the fader's target is fully visible.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Whether a fade is still in progress.
    #[must_use]
    pub fn is_fading(&self) -> bool {
        self.fading
    }

    fn target(&self) -> f32 {
        if self.on {
            1.0
        } else {
            0.0
        }
    }
}

impl Default for Fader {
    fn default() -> Self {
        Self::hidden()
    }
}
