//! Correlation tolerances and decode hints
//!
//! Nothing here is global: a [`Tolerances`] value is built once by the caller
//! (defaults, the widened profile, or the environment) and travels with the
//! [`DecodeHints`] of every decode call.

fn parse_env_f32(name: &str, default: f32) -> f32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

/// Bounded-error limits used by guard and digit correlation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Largest accepted average deviation, as a fraction of the pattern width
    pub max_avg_variance: f32,
    /// Largest accepted deviation of one run, as a fraction of one module
    pub max_individual_variance: f32,
    /// Required lead of the best digit template over the runner-up
    pub min_digit_margin: f32,
}

impl Tolerances {
    /// Strict profile
    pub const DEFAULT: Tolerances = Tolerances {
        max_avg_variance: 0.48,
        max_individual_variance: 0.7,
        min_digit_margin: 0.03,
    };

    /// Looser profile for "try harder" decoding
    pub const WIDENED: Tolerances = Tolerances {
        max_avg_variance: 0.58,
        max_individual_variance: 0.8,
        min_digit_margin: 0.02,
    };

    /// Default profile with overrides from `UPCEAN_MAX_AVG_VARIANCE`,
    /// `UPCEAN_MAX_INDIVIDUAL_VARIANCE` and `UPCEAN_MIN_DIGIT_MARGIN`
    pub fn from_env() -> Self {
        let base = Self::DEFAULT;
        Self {
            max_avg_variance: parse_env_f32("UPCEAN_MAX_AVG_VARIANCE", base.max_avg_variance),
            max_individual_variance: parse_env_f32(
                "UPCEAN_MAX_INDIVIDUAL_VARIANCE",
                base.max_individual_variance,
            ),
            min_digit_margin: parse_env_f32("UPCEAN_MIN_DIGIT_MARGIN", base.min_digit_margin),
        }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Caller-supplied knobs for one decode call
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DecodeHints {
    /// Use [`Tolerances::WIDENED`] instead of the strict profile
    pub try_harder: bool,
    /// Explicit tolerances; wins over `try_harder`
    pub tolerances: Option<Tolerances>,
}

impl DecodeHints {
    /// Hints with `try_harder` set
    pub fn try_harder() -> Self {
        Self {
            try_harder: true,
            tolerances: None,
        }
    }

    /// Hints pinned to explicit tolerances
    pub fn with_tolerances(tolerances: Tolerances) -> Self {
        Self {
            try_harder: false,
            tolerances: Some(tolerances),
        }
    }

    /// Hints from the environment: `UPCEAN_TRY_HARDER=1` plus [`Tolerances::from_env`]
    pub fn from_env() -> Self {
        let try_harder = parse_env_bool_u8("UPCEAN_TRY_HARDER", false);
        let tolerances = if try_harder {
            None
        } else {
            Some(Tolerances::from_env())
        };
        Self {
            try_harder,
            tolerances,
        }
    }

    /// Tolerances this call should run with
    pub fn tolerances(&self) -> Tolerances {
        match (self.tolerances, self.try_harder) {
            (Some(t), _) => t,
            (None, true) => Tolerances::WIDENED,
            (None, false) => Tolerances::DEFAULT,
        }
    }
}
