#![warn(missing_docs)]
#![crate_name = "magnitude"]

//! A saturating big-number library for incremental games.
//!
//! Values are stored as `mantissa * 10^exponent`, so exponentially growing
//! currencies never overflow to `Infinity`. Out-of-range results saturate to
//! a finite MAX sentinel or collapse to zero instead of raising.
//!
//! # Examples
//!
//! ```
//! use magnitude::Magnitude;
//!
//! let a = Magnitude::from_number(999.0);
//! let b = Magnitude::from_number(1.0);
//!
//! let c = a + b;
//! assert_eq!(c.format(2), "1.00K");
//! ```

use custom_error::custom_error;
use std::{
    convert::TryFrom,
    fmt::{Display, LowerExp},
    num::ParseFloatError,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};


custom_error! {
    /// Error type for all errors in this crate.
    pub MagnitudeError
        /// An error that occurs when taking the square root of a negative value
        NegativeSqrt {
            /// The mantissa of the offending value
            mantissa: f64,
            /// The exponent of the offending value
            exponent: i32
        } = "square root of a negative value: {mantissa}e{exponent}",
        /// An error that occurs when a String cannot be parsed to a Magnitude
        ParseError {
            /// The string that failed to parse
            parsed: String,
            /// The error that occurred
            error: ParseFloatError
        } = "Error while parsing \"{parsed}\": {error}",
        /// An error that occurs when a persisted pair cannot be restored
        MalformedParts {
            /// The mantissa of the persisted pair
            mantissa: f64,
            /// The exponent of the persisted pair
            exponent: i32
        } = "malformed persisted pair: {mantissa}e{exponent}"
}

type Number = f64;

/// Largest exponent a Magnitude can carry.
///
/// Results scaled beyond this saturate to [`Magnitude::max_value`].
pub const EXPONENT_MAX: i32 = 308;
/// Smallest exponent a Magnitude can carry.
///
/// Results scaled below this collapse to [`Magnitude::zero`].
pub const EXPONENT_MIN: i32 = -308;
/// Exponent gap beyond which the smaller operand of an addition is discarded.
///
/// An f64 mantissa holds about 15 significant decimal digits, so an operand
/// more than 15 exponents below the other cannot affect the sum.
pub const ADD_PRECISION_CUTOFF: i32 = 15;
/// Mantissa of the MAX sentinel, the largest f64 below 10.
pub const MAX_MANTISSA: Number = 9.999999999999998;
/// Tolerance used by equality comparisons.
///
/// Repeated normalization rounds the mantissa; two values whose mantissas
/// agree within this tolerance at the same exponent count as equal.
pub const EQ_TOLERANCE: Number = 1e-4;
/// Magnitude abbreviations used by [`Magnitude::format`], one per exponent group of three.
pub const SUFFIXES: [&str; 23] = [
    "", "K", "M", "B", "T", "Qa", "Qi", "Sx", "Sp", "Oc", "No", "Dc", "Ud", "Dd", "Td", "Qad",
    "Qid", "Sxd", "Spd", "Ocd", "Nod", "Vg", "Uvg",
];
/// Maximum number of powers of 10 that will be cached.
pub const MAX_POWERS_OF_TEN: usize = (EXPONENT_MAX - EXPONENT_MIN + 1) as usize;

lazy_static::lazy_static! {
    /// A cache of powers of 10 from EXPONENT_MIN to EXPONENT_MAX.
    static ref POWERS_OF_TEN: Vec<f64> = {
        let mut powers_of_ten: Vec<f64> = Vec::new();
        for i in EXPONENT_MIN..=EXPONENT_MAX {
            powers_of_ten.push(format!("1e{}", i).parse().unwrap());
        }
        powers_of_ten
    };
    /// A flag if commas in a String representation should be ignored
    static ref IGNORE_COMMAS: bool = true;
}

/// Returns the sign of the number.
///
/// This implementation is different from f64::signum() because it returns 0 for 0.0 and NaN.
pub fn sign(num: f64) -> i8 {
    if num.is_nan() {
        return 0;
    }

    if num == 0.0 {
        return 0;
    }

    if num > 0.0 {
        return 1;
    }

    -1
}

/// Formats the given number with the given number of fractional digits.
pub fn to_fixed(num: f64, places: usize) -> String {
    format!("{:.*}", places, num)
}

fn power_of_10(exp: i32) -> Number {
    POWERS_OF_TEN[(exp - EXPONENT_MIN) as usize]
}

/// An arbitrary-magnitude decimal quantity stored as `mantissa * 10^exponent`.
///
/// Nonzero values keep `1 <= |mantissa| < 10`; the sign of the value lives on
/// the mantissa. The type is always finite: results past `10^308` saturate to
/// [`Magnitude::max_value`] and results below `10^-308` collapse to
/// [`Magnitude::zero`]. Every operation returns a new value; callers that
/// accumulate reassign the result.
#[derive(Clone, Copy, Debug, Default)]
pub struct Magnitude {
    mantissa: Number,
    exponent: i32,
}

/// The persisted form of a [`Magnitude`]: the raw `{mantissa, exponent}` pair.
///
/// String forms are lossy and for display only; saves always carry the pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnitudeParts {
    /// Significant digits; the sign carries the sign of the value.
    pub mantissa: f64,
    /// Power-of-ten scale.
    pub exponent: i32,
}

impl Magnitude {
    /// Creates a Magnitude from anything convertible into one.
    ///
    /// Fallible sources (strings, persisted pairs) go through
    /// [`TryFrom`] and [`Magnitude::from_parts`] instead.
    pub fn of<T: Into<Magnitude>>(value: T) -> Magnitude {
        value.into()
    }

    /// Returns the mantissa of the Magnitude
    pub fn mantissa(&self) -> Number {
        self.mantissa
    }

    /// Returns the exponent of the Magnitude
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Creates a Magnitude from a mantissa and an exponent
    ///
    /// This function normalizes the inputs
    pub fn from_mantissa_exponent(m: Number, e: i32) -> Magnitude {
        Magnitude::default().set_from_mantissa_exponent(m, e)
    }

    /// Creates a Magnitude from a mantissa and an exponent
    ///
    /// This function does not normalize the inputs; the caller guarantees
    /// they already satisfy the canonical form.
    pub fn from_mantissa_exponent_no_normalize(m: Number, e: i32) -> Magnitude {
        Magnitude {
            mantissa: m,
            exponent: e,
        }
    }

    /// Creates a Magnitude from a number (f64)
    ///
    /// Non-finite input is a fault upstream: `NaN` and negative infinity
    /// clamp to zero, positive infinity clamps to the MAX sentinel. The
    /// caller owns surfacing where the non-finite value came from.
    pub fn from_number(n: Number) -> Magnitude {
        if n.is_nan() {
            return Magnitude::zero();
        }

        if n.is_infinite() && n.is_sign_positive() {
            return Magnitude::max_value();
        }

        if n.is_infinite() && n.is_sign_negative() {
            return Magnitude::zero();
        }

        Magnitude::default().set_from_number(n)
    }

    fn set_from_mantissa_exponent(&mut self, m: Number, e: i32) -> Magnitude {
        self.mantissa = m;
        self.exponent = e;

        self.normalize();
        *self
    }

    fn set_from_number(&mut self, n: Number) -> Magnitude {
        if n == 0.0 {
            self.mantissa = 0.0;
            self.exponent = 0;
            return *self;
        }

        let exp = n.abs().log10().floor();
        if exp < EXPONENT_MIN as f64 {
            self.mantissa = 0.0;
            self.exponent = 0;
            return *self;
        }

        self.exponent = exp as i32;
        self.mantissa = n / power_of_10(self.exponent);

        self.normalize();
        *self
    }

    /// Normalizes the Magnitude as follows:
    ///
    /// * A zero mantissa zeroes the exponent (canonical zero).
    /// * The mantissa is shifted into `1 <= |mantissa| < 10`, moving the
    ///   difference onto the exponent.
    /// * An exponent above EXPONENT_MAX saturates to the MAX sentinel,
    ///   keeping the sign; one below EXPONENT_MIN collapses to zero.
    /// * A non-finite mantissa is a fault upstream: positive infinity
    ///   saturates to MAX, NaN and negative infinity collapse to zero.
    ///
    /// The shift loops terminate within a few hundred steps since a finite
    /// f64 is within 10^324 of the canonical range.
    fn normalize(&mut self) -> Magnitude {
        if !self.mantissa.is_finite() {
            *self = if self.mantissa == f64::INFINITY {
                Magnitude::max_value()
            } else {
                Magnitude::zero()
            };
            return *self;
        }

        if self.mantissa == 0.0 {
            // drops a negative zero left over from exact cancellation
            self.mantissa = 0.0;
            self.exponent = 0;
            return *self;
        }

        let mut exponent = i64::from(self.exponent);
        while self.mantissa.abs() >= 10.0 {
            self.mantissa /= 10.0;
            exponent += 1;
        }
        while self.mantissa.abs() < 1.0 {
            self.mantissa *= 10.0;
            exponent -= 1;
        }

        if exponent > i64::from(EXPONENT_MAX) {
            self.mantissa = MAX_MANTISSA.copysign(self.mantissa);
            self.exponent = EXPONENT_MAX;
            return *self;
        }

        if exponent < i64::from(EXPONENT_MIN) {
            self.mantissa = 0.0;
            self.exponent = 0;
            return *self;
        }

        self.exponent = exponent as i32;
        *self
    }

    /// Returns a zero Magnitude
    pub fn zero() -> Magnitude {
        Magnitude::from_mantissa_exponent_no_normalize(0.0, 0)
    }

    /// Returns a one Magnitude
    pub fn one() -> Magnitude {
        Magnitude::from_mantissa_exponent_no_normalize(1.0, 0)
    }

    /// Returns the MAX sentinel, the largest representable Magnitude.
    ///
    /// Overflowing results saturate here instead of reaching `Infinity`.
    pub fn max_value() -> Magnitude {
        Magnitude::from_mantissa_exponent_no_normalize(MAX_MANTISSA, EXPONENT_MAX)
    }

    /// Returns `true` if the Magnitude is canonical zero.
    pub fn is_zero(&self) -> bool {
        self.mantissa == 0.0
    }

    /// Returns the absolute value of the Magnitude
    pub fn abs(&self) -> Magnitude {
        Magnitude::from_mantissa_exponent_no_normalize(self.mantissa.abs(), self.exponent)
    }

    /// Compares the absolute value of the Magnitude to the absolute value of
    /// the other Magnitude. Both operands must be nonzero and normalized.
    pub fn cmpabs(&self, rhs: &Magnitude) -> i8 {
        if self.exponent > rhs.exponent {
            return 1;
        }

        if self.exponent < rhs.exponent {
            return -1;
        }

        if self.mantissa.abs() > rhs.mantissa.abs() {
            return 1;
        }

        if self.mantissa.abs() < rhs.mantissa.abs() {
            return -1;
        }

        0
    }

    /// Returns the bigger of the two Magnitudes
    pub fn max(&self, other: Magnitude) -> Magnitude {
        if self > &other {
            *self
        } else {
            other
        }
    }

    /// Returns the smaller of the two Magnitudes
    pub fn min(&self, other: Magnitude) -> Magnitude {
        if self < &other {
            *self
        } else {
            other
        }
    }

    /// Clamps the Magnitude to the given range
    pub fn clamp(&self, min: Magnitude, max: Magnitude) -> Magnitude {
        self.max(min).min(max)
    }

    /// Raises the Magnitude to an integer power.
    ///
    /// `pow(0)` is one for every base including zero; zero to a positive
    /// power is zero, and zero to a negative power saturates to MAX like
    /// division by zero does. Computed on log10 of the value so that large
    /// exponents cannot overflow an intermediate float before
    /// renormalization.
    pub fn pow(&self, n: i32) -> Magnitude {
        if n == 0 {
            return Magnitude::one();
        }

        if self.is_zero() {
            return if n > 0 {
                Magnitude::zero()
            } else {
                Magnitude::max_value()
            };
        }

        let result_sign = if self.mantissa < 0.0 && n % 2 != 0 {
            -1.0
        } else {
            1.0
        };

        let log = self.mantissa.abs().log10() + f64::from(self.exponent);
        let total = log * f64::from(n);

        if total > f64::from(EXPONENT_MAX) + 1.0 {
            return Magnitude::from_mantissa_exponent_no_normalize(
                MAX_MANTISSA * result_sign,
                EXPONENT_MAX,
            );
        }

        if total < f64::from(EXPONENT_MIN) - 1.0 {
            return Magnitude::zero();
        }

        let exponent = total.floor();
        let mantissa = result_sign * 10.0_f64.powf(total - exponent);
        Magnitude::from_mantissa_exponent(mantissa, exponent as i32)
    }

    /// Returns the square root of the Magnitude.
    ///
    /// A negative value is a domain error and is reported to the caller
    /// rather than turned into a fabricated result.
    pub fn sqrt(&self) -> Result<Magnitude, MagnitudeError> {
        if self.mantissa < 0.0 {
            return Err(MagnitudeError::NegativeSqrt {
                mantissa: self.mantissa,
                exponent: self.exponent,
            });
        }

        if self.is_zero() {
            return Ok(Magnitude::zero());
        }

        // Shift one decimal place onto the mantissa when the exponent is odd
        // so the halved exponent stays an integer.
        if self.exponent % 2 == 0 {
            Ok(Magnitude::from_mantissa_exponent(
                self.mantissa.sqrt(),
                self.exponent / 2,
            ))
        } else {
            Ok(Magnitude::from_mantissa_exponent(
                (self.mantissa * 10.0).sqrt(),
                (self.exponent - 1) / 2,
            ))
        }
    }

    /// Returns the largest integer Magnitude less than or equal to the Magnitude.
    ///
    /// Values outside the native float range are returned unchanged, since
    /// flooring is a no-op at that granularity.
    pub fn floor(&self) -> Magnitude {
        let native = self.to_native();
        if !native.is_finite() {
            return *self;
        }

        Magnitude::from_number(native.floor())
    }

    /// Returns the Magnitude as a native f64.
    ///
    /// Saturates to native `Infinity` past the float range and to `0` below
    /// it, for callers that only need an approximate scalar (progress bars,
    /// HP ratios).
    pub fn to_native(&self) -> Number {
        if self.exponent > EXPONENT_MAX {
            return if self.mantissa < 0.0 {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
        }

        if self.exponent < EXPONENT_MIN {
            return 0.0;
        }

        self.mantissa * power_of_10(self.exponent)
    }

    /// Formats the Magnitude as a human-readable suffixed string.
    ///
    /// Values below 1000 print as a plain number, with fewer fractional
    /// digits as the value grows. Larger values print a mantissa rescaled
    /// into `1..1000` with the matching suffix, and values past the suffix
    /// table fall back to scientific notation. Total: every value, the MAX
    /// sentinel included, produces a string.
    pub fn format(&self, decimals: usize) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        if self.exponent < 3 {
            let native = self.to_native();
            let abs = native.abs();
            return if abs < 10.0 {
                to_fixed(native, decimals)
            } else if abs < 100.0 {
                to_fixed(native, decimals.saturating_sub(1))
            } else {
                to_fixed(native.floor(), 0)
            };
        }

        let suffix_index = (self.exponent / 3) as usize;
        if suffix_index >= SUFFIXES.len() {
            return format!("{}e{}", to_fixed(self.mantissa, decimals), self.exponent);
        }

        let display_mantissa = self.mantissa * power_of_10(self.exponent % 3);
        format!(
            "{}{}",
            to_fixed(display_mantissa, decimals),
            SUFFIXES[suffix_index]
        )
    }

    /// Returns the persisted form of the Magnitude.
    pub fn to_parts(&self) -> MagnitudeParts {
        MagnitudeParts {
            mantissa: self.mantissa,
            exponent: self.exponent,
        }
    }

    /// Restores a Magnitude from its persisted form.
    ///
    /// A pair whose mantissa is not finite cannot describe a value and is
    /// reported to the caller, which typically substitutes zero.
    pub fn from_parts(parts: MagnitudeParts) -> Result<Magnitude, MagnitudeError> {
        if !parts.mantissa.is_finite() {
            return Err(MagnitudeError::MalformedParts {
                mantissa: parts.mantissa,
                exponent: parts.exponent,
            });
        }

        Ok(Magnitude::from_mantissa_exponent(
            parts.mantissa,
            parts.exponent,
        ))
    }
}

impl PartialEq for Magnitude {
    fn eq(&self, other: &Self) -> bool {
        self.exponent == other.exponent && (self.mantissa - other.mantissa).abs() < EQ_TOLERANCE
    }
}

impl Eq for Magnitude {}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Magnitude {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;

        if self.eq(other) {
            return Ordering::Equal;
        }

        let sign_a = sign(self.mantissa);
        let sign_b = sign(other.mantissa);
        if sign_a != sign_b {
            return sign_a.cmp(&sign_b);
        }

        // Same sign: the exponent orders the magnitude, the mantissa breaks
        // ties. For negative values the magnitude order is reversed.
        let magnitude_order = if self.exponent != other.exponent {
            self.exponent.cmp(&other.exponent)
        } else if self.mantissa.abs() > other.mantissa.abs() {
            Ordering::Greater
        } else {
            Ordering::Less
        };

        if sign_a < 0 {
            magnitude_order.reverse()
        } else {
            magnitude_order
        }
    }
}

impl Add<Magnitude> for Magnitude {
    type Output = Magnitude;

    fn add(self, rhs: Magnitude) -> Self::Output {
        if self.is_zero() {
            return rhs;
        }

        if rhs.is_zero() {
            return self;
        }

        let (larger, smaller) = if self.cmpabs(&rhs) >= 0 {
            (self, rhs)
        } else {
            (rhs, self)
        };

        // The smaller operand is beyond the float precision of the larger;
        // dropping it is the documented trade-off, not an error.
        let delta = larger.exponent - smaller.exponent;
        if delta > ADD_PRECISION_CUTOFF {
            return larger;
        }

        let scaled = smaller.mantissa * power_of_10(-delta);
        Magnitude::from_mantissa_exponent(larger.mantissa + scaled, larger.exponent)
    }
}

impl Sub<Magnitude> for Magnitude {
    type Output = Magnitude;

    /// Subtraction clamps at zero: currencies and boss HP never go negative.
    fn sub(self, rhs: Magnitude) -> Self::Output {
        let difference = self + (-rhs);
        if difference.mantissa < 0.0 {
            return Magnitude::zero();
        }

        difference
    }
}

impl Mul<Magnitude> for Magnitude {
    type Output = Magnitude;

    fn mul(self, rhs: Magnitude) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Magnitude::zero();
        }

        Magnitude::from_mantissa_exponent(
            self.mantissa * rhs.mantissa,
            self.exponent.saturating_add(rhs.exponent),
        )
    }
}

impl Div<Magnitude> for Magnitude {
    type Output = Magnitude;

    fn div(self, rhs: Magnitude) -> Self::Output {
        if rhs.is_zero() {
            // Saturate instead of faulting; callers tolerate seeing MAX.
            return Magnitude::max_value();
        }

        if self.is_zero() {
            return Magnitude::zero();
        }

        Magnitude::from_mantissa_exponent(
            self.mantissa / rhs.mantissa,
            self.exponent.saturating_sub(rhs.exponent),
        )
    }
}

impl Neg for Magnitude {
    type Output = Magnitude;

    fn neg(self) -> Magnitude {
        Magnitude::from_mantissa_exponent_no_normalize(-self.mantissa, self.exponent)
    }
}

impl AddAssign<Magnitude> for Magnitude {
    fn add_assign(&mut self, rhs: Magnitude) {
        *self = *self + rhs;
    }
}

impl SubAssign<Magnitude> for Magnitude {
    fn sub_assign(&mut self, rhs: Magnitude) {
        *self = *self - rhs;
    }
}

impl MulAssign<Magnitude> for Magnitude {
    fn mul_assign(&mut self, rhs: Magnitude) {
        *self = *self * rhs;
    }
}

impl DivAssign<Magnitude> for Magnitude {
    fn div_assign(&mut self, rhs: Magnitude) {
        *self = *self / rhs;
    }
}

impl num_traits::Zero for Magnitude {
    fn zero() -> Self {
        Magnitude::zero()
    }

    fn is_zero(&self) -> bool {
        Magnitude::is_zero(self)
    }
}

impl num_traits::One for Magnitude {
    fn one() -> Self {
        Magnitude::one()
    }
}

#[cfg(feature = "serde")]
mod serde {
    use super::*;
    use serde_crate::de::{self, MapAccess, SeqAccess, Visitor};
    use serde_crate::ser::SerializeStruct;

    impl serde_crate::Serialize for Magnitude {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde_crate::Serializer,
        {
            let mut state = serializer.serialize_struct("Magnitude", 2)?;
            state.serialize_field("mantissa", &self.mantissa())?;
            state.serialize_field("exponent", &self.exponent())?;
            state.end()
        }
    }

    impl<'de> serde_crate::Deserialize<'de> for Magnitude {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde_crate::Deserializer<'de>,
        {
            struct PartsVisitor;

            impl<'de> Visitor<'de> for PartsVisitor {
                type Value = Magnitude;

                fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                    formatter.write_str("a {mantissa, exponent} pair")
                }

                fn visit_map<A>(self, mut map: A) -> Result<Magnitude, A::Error>
                where
                    A: MapAccess<'de>,
                {
                    let mut mantissa: Option<f64> = None;
                    let mut exponent: Option<i32> = None;
                    while let Some(key) = map.next_key::<String>()? {
                        match key.as_str() {
                            "mantissa" => mantissa = Some(map.next_value()?),
                            "exponent" => exponent = Some(map.next_value()?),
                            _ => {
                                let _ = map.next_value::<de::IgnoredAny>()?;
                            }
                        }
                    }

                    let mantissa = mantissa.ok_or_else(|| de::Error::missing_field("mantissa"))?;
                    let exponent = exponent.ok_or_else(|| de::Error::missing_field("exponent"))?;
                    Magnitude::from_parts(MagnitudeParts { mantissa, exponent })
                        .map_err(de::Error::custom)
                }

                fn visit_seq<A>(self, mut seq: A) -> Result<Magnitude, A::Error>
                where
                    A: SeqAccess<'de>,
                {
                    let mantissa = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                    let exponent = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                    Magnitude::from_parts(MagnitudeParts { mantissa, exponent })
                        .map_err(de::Error::custom)
                }
            }

            deserializer.deserialize_struct("Magnitude", &["mantissa", "exponent"], PartsVisitor)
        }
    }
}

impl LowerExp for Magnitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(f, "{}e{}", to_fixed(self.mantissa, precision), self.exponent)
    }
}

impl Display for Magnitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let decimals = f.precision().unwrap_or(2);
        write!(f, "{}", self.format(decimals))
    }
}

macro_rules! impl_from_primitive {
    ($prim_type:ty) => {
        impl From<$prim_type> for Magnitude {
            fn from(prim: $prim_type) -> Self {
                Magnitude::from_number(prim as f64)
            }
        }
    };
}

macro_rules! impl_ops_primitive {
    ($prim_type:ty) => {
        impl Add<$prim_type> for Magnitude {
            type Output = Magnitude;

            fn add(self, rhs: $prim_type) -> Self::Output {
                self + Magnitude::from_number(rhs as f64)
            }
        }

        impl Sub<$prim_type> for Magnitude {
            type Output = Magnitude;

            fn sub(self, rhs: $prim_type) -> Self::Output {
                self - Magnitude::from_number(rhs as f64)
            }
        }

        impl Mul<$prim_type> for Magnitude {
            type Output = Magnitude;

            fn mul(self, rhs: $prim_type) -> Self::Output {
                self * Magnitude::from_number(rhs as f64)
            }
        }

        impl Div<$prim_type> for Magnitude {
            type Output = Magnitude;

            fn div(self, rhs: $prim_type) -> Self::Output {
                self / Magnitude::from_number(rhs as f64)
            }
        }

        impl AddAssign<$prim_type> for Magnitude {
            fn add_assign(&mut self, rhs: $prim_type) {
                *self = *self + rhs;
            }
        }

        impl SubAssign<$prim_type> for Magnitude {
            fn sub_assign(&mut self, rhs: $prim_type) {
                *self = *self - rhs;
            }
        }

        impl MulAssign<$prim_type> for Magnitude {
            fn mul_assign(&mut self, rhs: $prim_type) {
                *self = *self * rhs;
            }
        }

        impl DivAssign<$prim_type> for Magnitude {
            fn div_assign(&mut self, rhs: $prim_type) {
                *self = *self / rhs;
            }
        }
    };
}

impl_from_primitive!(i8);
impl_from_primitive!(i16);
impl_from_primitive!(i32);
impl_from_primitive!(i64);
impl_from_primitive!(u8);
impl_from_primitive!(u16);
impl_from_primitive!(u32);
impl_from_primitive!(u64);
impl_from_primitive!(f32);
impl_from_primitive!(f64);

impl_ops_primitive!(i8);
impl_ops_primitive!(i16);
impl_ops_primitive!(i32);
impl_ops_primitive!(i64);
impl_ops_primitive!(u8);
impl_ops_primitive!(u16);
impl_ops_primitive!(u32);
impl_ops_primitive!(u64);
impl_ops_primitive!(f32);
impl_ops_primitive!(f64);

impl TryFrom<&str> for Magnitude {
    type Error = MagnitudeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut value = s.to_string();
        if *IGNORE_COMMAS {
            value = value.replace(',', "");
        }

        match value.parse::<Number>() {
            Ok(number) => Ok(Magnitude::from_number(number)),
            Err(parse_error) => Err(MagnitudeError::ParseError {
                parsed: s.to_string(),
                error: parse_error,
            }),
        }
    }
}
