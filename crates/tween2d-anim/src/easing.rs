//! Easing curves.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer};

/// Standard easing functions.
///
/// Input `t` is a linear progress fraction in `[0.0, 1.0]`; output is the
/// eased fraction. All of them map `0 -> 0` and `1 -> 1`.
pub mod curves {
    /// Linear easing (no acceleration).
    pub fn linear(t: f64) -> f64 {
        t
    }

    /// Quadratic ease-in (slow start).
    pub fn ease_in_quad(t: f64) -> f64 {
        t * t
    }

    /// Quadratic ease-out (slow end).
    pub fn ease_out_quad(t: f64) -> f64 {
        t * (2.0 - t)
    }

    /// Quadratic ease-in-out (slow start and end).
    pub fn ease_in_out_quad(t: f64) -> f64 {
        if t < 0.5 {
            2.0 * t * t
        } else {
            -1.0 + (4.0 - 2.0 * t) * t
        }
    }
}

/// Caller-supplied easing strategy. Receives the linear progress.
pub type EaseFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Easing selector for an animation.
#[derive(Clone, Default)]
pub enum Easing {
    Linear,
    In,
    Out,
    #[default]
    InOut,
    /// Custom curve. It may return values outside `[0, 1]`, in which case the
    /// shape overshoots or undershoots its target.
    Custom(EaseFn),
}

impl Easing {
    /// Wrap a closure as a custom curve.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Easing::Custom(Arc::new(f))
    }

    /// Look up a named curve: `linear`, `in`, `out`, `in-out`.
    ///
    /// Unknown names fall back to linear.
    pub fn from_name(name: &str) -> Self {
        match name {
            "linear" => Easing::Linear,
            "in" => Easing::In,
            "out" => Easing::Out,
            "in-out" => Easing::InOut,
            other => {
                log::warn!("Unknown easing {other:?}, falling back to linear");
                Easing::Linear
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::In => "in",
            Easing::Out => "out",
            Easing::InOut => "in-out",
            Easing::Custom(_) => "custom",
        }
    }

    /// Map linear progress `t` to eased progress.
    pub fn ease(&self, t: f64) -> f64 {
        match self {
            Easing::Linear => curves::linear(t),
            Easing::In => curves::ease_in_quad(t),
            Easing::Out => curves::ease_out_quad(t),
            Easing::InOut => curves::ease_in_out_quad(t),
            Easing::Custom(f) => f(t),
        }
    }

    /// Linear progress at which the curve reaches eased progress `y`.
    ///
    /// Named curves use their closed-form inverse. Custom curves are assumed
    /// non-decreasing on `[0, 1]` and are solved by bisection; a `y` outside
    /// their range resolves to the nearer end.
    pub fn inverse(&self, y: f64) -> f64 {
        let y = y.clamp(0.0, 1.0);
        match self {
            Easing::Linear => y,
            Easing::In => y.sqrt(),
            Easing::Out => 1.0 - (1.0 - y).sqrt(),
            Easing::InOut => {
                if y < 0.5 {
                    (y / 2.0).sqrt()
                } else {
                    1.0 - ((1.0 - y) / 2.0).sqrt()
                }
            },
            Easing::Custom(f) => bisect(&**f, y),
        }
    }
}

fn bisect(f: &dyn Fn(f64) -> f64, y: f64) -> f64 {
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    for _ in 0..64 {
        let mid = (lo + hi) / 2.0;
        if f(mid) < y {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    (lo + hi) / 2.0
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Easing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Easing::from_name(&name))
    }
}
