//! Exact fractions.

/// A signed fraction.
///
/// Both the numerator (top number) and denominator (bottom number) can be
/// negative, and the denominator can be zero. Nothing is simplified on
/// construction, so `Rational::new(2, 4)` keeps its `2/4`.
///
/// Equality is structural. Compare [`Rational::simplified`] values if you
/// want `1/2 == 2/4`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct Rational {
    pub numerator: i64,
    pub denominator: i64,
}

impl Rational {
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// The fraction as a double.
    ///
    /// A zero denominator follows IEEE division:
    ///
    /// ```
    /// use imgmeta_types::Rational;
    ///
    /// assert_eq!(Rational::new(3, 4).to_f64(), 0.75);
    /// assert_eq!(Rational::new(1, 0).to_f64(), f64::INFINITY);
    /// assert!(Rational::new(0, 0).to_f64().is_nan());
    /// ```
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }

    /// The quotient, truncated toward zero.
    ///
    /// With a zero denominator there's no integer quotient, so the IEEE
    /// result is cast instead (infinity saturates, NaN becomes zero).
    pub fn to_i64(&self) -> i64 {
        self.numerator
            .checked_div(self.denominator)
            .unwrap_or_else(|| self.to_f64() as i64)
    }

    /// Whether the fraction's value is zero.
    ///
    /// `0/0` has no value, but it's got nothing on top either, so it counts.
    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Whether the fraction divides evenly.
    ///
    /// ```
    /// use imgmeta_types::Rational;
    ///
    /// assert!(Rational::new(12, 4).is_integer());
    /// assert!(!Rational::new(12, 5).is_integer());
    /// assert!(!Rational::new(12, 0).is_integer());
    /// ```
    pub fn is_integer(&self) -> bool {
        self.denominator != 0 && self.numerator.wrapping_rem(self.denominator) == 0
    }

    /// Flips the fraction over.
    pub const fn reciprocal(&self) -> Self {
        Self::new(self.denominator, self.numerator)
    }

    /// Reduces the fraction to its lowest terms, with any sign moved to the
    /// numerator.
    ///
    /// Fractions with a zero denominator are returned untouched.
    ///
    /// ```
    /// use imgmeta_types::Rational;
    ///
    /// assert_eq!(Rational::new(10, -4).simplified(), Rational::new(-5, 2));
    /// assert_eq!(Rational::new(0, 7).simplified(), Rational::new(0, 1));
    /// ```
    pub fn simplified(&self) -> Self {
        if self.denominator == 0 {
            return *self;
        }

        let divisor = gcd(self.numerator.unsigned_abs(), self.denominator.unsigned_abs()) as i64;
        let (numerator, denominator) = (self.numerator / divisor, self.denominator / divisor);

        match (numerator.checked_neg(), denominator.checked_neg()) {
            (Some(n), Some(d)) if denominator < 0 => Self::new(n, d),
            _ => Self::new(numerator, denominator),
        }
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl core::fmt::Display for Rational {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Failed to read a [`Rational`] out of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseRationalError;

impl core::fmt::Display for ParseRationalError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Text was neither an integer nor a `numerator/denominator` pair.")
    }
}

impl core::error::Error for ParseRationalError {}

impl core::str::FromStr for Rational {
    type Err = ParseRationalError;

    /// Accepts `"n/d"` or a bare integer `"n"` (read as `n/1`), with no
    /// surrounding whitespace, same as `i64`'s own parsing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| part.parse::<i64>().map_err(|_| ParseRationalError);

        match s.split_once('/') {
            Some((numerator, denominator)) => Ok(Self::new(parse(numerator)?, parse(denominator)?)),
            None => Ok(Self::new(parse(s)?, 1)),
        }
    }
}
