//! Global animation parameters.
//!
//! Process-wide tunables mutated only by the command interpreter and
//! read-only to the mode engine. All setters clamp instead of rejecting:
//! out-of-range values are pulled to the nearest legal one and the
//! applied value is returned so replies can report it.

use embassy_time::Duration;

/// Startup brightness ceiling.
pub const DEFAULT_BRIGHTNESS: u8 = 200;
/// Startup blink interval in milliseconds.
pub const DEFAULT_BLINK_MS: u64 = 500;
/// Startup breath period in milliseconds.
pub const DEFAULT_BREATH_MS: u64 = 2000;
/// Startup chase interval in milliseconds.
pub const DEFAULT_CHASE_MS: u64 = 150;
/// Startup per-LED toggle intervals, cycled across the channel count.
pub const DEFAULT_LED_INTERVALS_MS: [u64; 3] = [200, 350, 500];

/// Floor for blink, chase and per-LED toggle intervals.
pub const MIN_INTERVAL_MS: u64 = 10;
/// Floor for the breath period.
pub const MIN_BREATH_MS: u64 = 100;

const fn clamp_ms(raw: i64, floor: u64) -> u64 {
    if raw < floor as i64 { floor } else { raw as u64 }
}

/// Tunable parameters for all modes over `N` LED channels.
#[derive(Debug, Clone)]
pub struct Params<const N: usize> {
    brightness: u8,
    blink_interval: Duration,
    breath_period: Duration,
    chase_interval: Duration,
    led_intervals: [Duration; N],
}

impl<const N: usize> Params<N> {
    /// Create parameters with the startup defaults.
    pub fn new() -> Self {
        let mut led_intervals = [Duration::from_millis(0); N];
        let mut i = 0;
        while i < N {
            led_intervals[i] =
                Duration::from_millis(DEFAULT_LED_INTERVALS_MS[i % DEFAULT_LED_INTERVALS_MS.len()]);
            i += 1;
        }
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            blink_interval: Duration::from_millis(DEFAULT_BLINK_MS),
            breath_period: Duration::from_millis(DEFAULT_BREATH_MS),
            chase_interval: Duration::from_millis(DEFAULT_CHASE_MS),
            led_intervals,
        }
    }

    /// Current brightness ceiling.
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Current blink interval.
    pub const fn blink_interval(&self) -> Duration {
        self.blink_interval
    }

    /// Current breath period.
    pub const fn breath_period(&self) -> Duration {
        self.breath_period
    }

    /// Current chase interval.
    pub const fn chase_interval(&self) -> Duration {
        self.chase_interval
    }

    /// Toggle interval for channel `index`.
    pub const fn led_interval(&self, index: usize) -> Duration {
        self.led_intervals[index]
    }

    /// Set the brightness ceiling, clamped to `0..=255`.
    ///
    /// Returns the applied value.
    pub fn set_brightness(&mut self, raw: i64) -> u8 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let value = raw.clamp(0, 255) as u8;
        self.brightness = value;
        value
    }

    /// Set the blink interval, clamped to at least 10 ms.
    ///
    /// Returns the applied value in milliseconds.
    pub fn set_blink_interval(&mut self, raw_ms: i64) -> u64 {
        let ms = clamp_ms(raw_ms, MIN_INTERVAL_MS);
        self.blink_interval = Duration::from_millis(ms);
        ms
    }

    /// Set the breath period, clamped to at least 100 ms.
    ///
    /// Returns the applied value in milliseconds.
    pub fn set_breath_period(&mut self, raw_ms: i64) -> u64 {
        let ms = clamp_ms(raw_ms, MIN_BREATH_MS);
        self.breath_period = Duration::from_millis(ms);
        ms
    }

    /// Set the chase interval, clamped to at least 10 ms.
    ///
    /// Returns the applied value in milliseconds.
    pub fn set_chase_interval(&mut self, raw_ms: i64) -> u64 {
        let ms = clamp_ms(raw_ms, MIN_INTERVAL_MS);
        self.chase_interval = Duration::from_millis(ms);
        ms
    }

    /// Set one channel's toggle interval, clamped to at least 10 ms.
    ///
    /// `index` must already be validated against `N`.
    /// Returns the applied value in milliseconds.
    pub fn set_led_interval(&mut self, index: usize, raw_ms: i64) -> u64 {
        let ms = clamp_ms(raw_ms, MIN_INTERVAL_MS);
        self.led_intervals[index] = Duration::from_millis(ms);
        ms
    }

    /// Bulk-assign all per-LED toggle intervals from a table, cycled
    /// across the channel count.
    pub fn assign_led_intervals(&mut self, table_ms: &[u64]) {
        for (i, slot) in self.led_intervals.iter_mut().enumerate() {
            *slot = Duration::from_millis(table_ms[i % table_ms.len()]);
        }
    }
}

impl<const N: usize> Default for Params<N> {
    fn default() -> Self {
        Self::new()
    }
}
