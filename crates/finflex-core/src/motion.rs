//! Motion Math
//!
//! Pure helpers behind the scroll-, pointer- and timer-driven decoration:
//! range mapping for tilt, scroll thresholds, and count-up counters.

use std::time::Duration;

/// Back-to-top button appears past this scroll offset (px)
pub const BACK_TO_TOP_THRESHOLD: f64 = 500.0;

/// Navbar switches to its condensed style past this offset (px)
pub const NAVBAR_CONDENSE_THRESHOLD: f64 = 20.0;

/// Maximum tilt of the sign-in visual, in degrees
pub const SIGN_IN_TILT_DEGREES: f64 = 10.0;

/// Linear map of `value` from `input` onto `output`, clamped to `output`.
///
/// A degenerate input range maps everything to `output.0`.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let span = input.1 - input.0;
    if span == 0.0 || !value.is_finite() {
        return output.0;
    }
    let t = ((value - input.0) / span).clamp(0.0, 1.0);
    output.0 + t * (output.1 - output.0)
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

pub fn navbar_condensed(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_CONDENSE_THRESHOLD
}

/// Fraction of the scrollable distance covered, in `0.0..=1.0`
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Which of the three "simple" steps is active at a scroll progress
pub fn story_step(progress: f64) -> usize {
    if progress < 0.3 {
        0
    } else if progress < 0.6 {
        1
    } else {
        2
    }
}

/// Rotation (degrees) of a card tilted toward the pointer
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Pointer at the top-left leans the card back and to the left
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64, max_degrees: f64) -> Self {
        Self {
            rotate_x: map_range(y, (0.0, height), (max_degrees, -max_degrees)),
            rotate_y: map_range(x, (0.0, width), (-max_degrees, max_degrees)),
        }
    }

    pub fn css_transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Animated number counting toward a target
#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub decimals: usize,
}

impl CountUp {
    pub fn new(to: f64, duration: Duration) -> Self {
        Self {
            from: 0.0,
            to,
            duration,
            prefix: "",
            suffix: "",
            decimals: 0,
        }
    }

    #[must_use]
    pub fn prefix(mut self, prefix: &'static str) -> Self {
        self.prefix = prefix;
        self
    }

    #[must_use]
    pub fn suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = suffix;
        self
    }

    /// Value after `elapsed`; holds at `to` once the duration is over
    pub fn value_at(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * t
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    pub fn render(&self, value: f64) -> String {
        format!(
            "{}{}{}",
            self.prefix,
            format_grouped(value, self.decimals),
            self.suffix
        )
    }
}

/// en-US number formatting: thousands separators and fixed decimals
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}
