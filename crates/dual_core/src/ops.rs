use crate::dual::Dual;
use crate::error::DualError;
use num_traits::{FromPrimitive, Num, NumCast, One, ToPrimitive, Zero};
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

impl Add for Dual {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Dual {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for Dual {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.x * rhs.y + self.y * rhs.x)
    }
}

impl Div for Dual {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        let denom = rhs.x * rhs.x;
        Self::new(self.x / rhs.x, (self.y * rhs.x - self.x * rhs.y) / denom)
    }
}

impl Neg for Dual {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Rem for Dual {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self {
        // a % b = a - trunc(a / b) * b, with trunc held constant.
        let q = (self.x / rhs.x).trunc();
        Self::new(self.x % rhs.x, self.y - q * rhs.y)
    }
}

impl AddAssign for Dual {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl SubAssign for Dual {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl MulAssign for Dual {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
impl DivAssign for Dual {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}
impl RemAssign for Dual {
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

// Mixed scalar/dual arithmetic: the scalar goes through `From` first.
macro_rules! impl_scalar_ops {
    (@op $scalar:ty, $op:ident, $method:ident, $assign:ident, $assign_method:ident) => {
        impl $op<$scalar> for Dual {
            type Output = Dual;
            fn $method(self, rhs: $scalar) -> Dual {
                $op::$method(self, <Dual as From<$scalar>>::from(rhs))
            }
        }

        impl $op<Dual> for $scalar {
            type Output = Dual;
            fn $method(self, rhs: Dual) -> Dual {
                $op::$method(<Dual as From<$scalar>>::from(self), rhs)
            }
        }

        impl $assign<$scalar> for Dual {
            fn $assign_method(&mut self, rhs: $scalar) {
                $assign::$assign_method(self, <Dual as From<$scalar>>::from(rhs));
            }
        }
    };
    ($($scalar:ty),*) => {$(
        impl_scalar_ops!(@op $scalar, Add, add, AddAssign, add_assign);
        impl_scalar_ops!(@op $scalar, Sub, sub, SubAssign, sub_assign);
        impl_scalar_ops!(@op $scalar, Mul, mul, MulAssign, mul_assign);
        impl_scalar_ops!(@op $scalar, Div, div, DivAssign, div_assign);
        impl_scalar_ops!(@op $scalar, Rem, rem, RemAssign, rem_assign);
    )*};
}

impl_scalar_ops!(f64, i32);

impl Dual {
    /// Division that refuses a zero real part in the denominator.
    pub fn checked_div(self, rhs: impl Into<Dual>) -> Result<Self, DualError> {
        let rhs = rhs.into();
        if rhs.x == 0.0 {
            return Err(DualError::undefined("division", rhs.x));
        }
        Ok(self / rhs)
    }
}

impl Sum for Dual {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| acc + v)
    }
}

impl<'a> Sum<&'a Dual> for Dual {
    fn sum<I: Iterator<Item = &'a Dual>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for Dual {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, v| acc * v)
    }
}

impl<'a> Product<&'a Dual> for Dual {
    fn product<I: Iterator<Item = &'a Dual>>(iter: I) -> Self {
        iter.copied().product()
    }
}

// num-traits interop so Dual can flow through generic numeric code.

impl Zero for Dual {
    fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl One for Dual {
    fn one() -> Self {
        Self::new(1.0, 0.0)
    }
}

impl Num for Dual {
    type FromStrRadixErr = DualError;
    fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        if radix == 10 && str.contains(crate::format::INDETERMINATE) {
            return str.parse();
        }
        <f64 as Num>::from_str_radix(str, radix)
            .map(Self::constant)
            .map_err(|e| DualError::construction(format!("{str:?}: {e}")))
    }
}

impl ToPrimitive for Dual {
    fn to_i64(&self) -> Option<i64> {
        self.x.to_i64()
    }
    fn to_u64(&self) -> Option<u64> {
        self.x.to_u64()
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.x)
    }
}

impl FromPrimitive for Dual {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::constant(n as f64))
    }
    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::constant(n as f64))
    }
    fn from_f64(n: f64) -> Option<Self> {
        Some(Self::constant(n))
    }
}

impl NumCast for Dual {
    fn from<T: ToPrimitive>(n: T) -> Option<Self> {
        n.to_f64().map(Self::constant)
    }
}

#[cfg(test)]
mod tests {
    use crate::dual::{Dual, EPSILON};
    use num_traits::{FromPrimitive, Num, One, ToPrimitive, Zero};

    fn a() -> Dual {
        Dual::new(1.0, 2.0)
    }

    fn b() -> Dual {
        Dual::new(3.0, 4.0)
    }

    #[test]
    fn field_operations_match_literal_values() {
        assert_eq!(a() + b(), Dual::new(4.0, 6.0));
        assert_eq!(a() - b(), Dual::new(-2.0, -2.0));
        assert_eq!(b() - a(), Dual::new(2.0, 2.0));
        assert_eq!(a() * b(), Dual::new(3.0, 10.0));
        assert_eq!(a() / b(), Dual::new(1.0 / 3.0, 2.0 / 9.0));
        assert_eq!(b() / a(), Dual::new(3.0, -2.0));
        assert_eq!(-a(), Dual::new(-1.0, -2.0));
    }

    #[test]
    fn algebraic_laws_hold_within_tolerance() {
        assert_eq!(a() + b(), b() + a());
        assert_eq!(a() * b(), b() * a());
        assert_eq!(a() - b(), -(b() - a()));
        assert_eq!((a() / b()) * b(), a());
    }

    #[test]
    fn scalars_mix_on_either_side() {
        assert_eq!(a() + 1.0, Dual::new(2.0, 2.0));
        assert_eq!(1.0 + a(), Dual::new(2.0, 2.0));
        assert_eq!(a() * 3, Dual::new(3.0, 6.0));
        assert_eq!(2.0 - a(), Dual::new(1.0, -2.0));
        assert_eq!(a() / 2.0, Dual::new(0.5, 1.0));
        assert_eq!(1.0 / b(), b().inv());
    }

    #[test]
    fn compound_assignment_updates_in_place() {
        let mut c = a();
        c += b();
        assert_eq!(c, Dual::new(4.0, 6.0));
        c -= b();
        assert_eq!(c, a());
        c *= b();
        assert_eq!(c, Dual::new(3.0, 10.0));
        c /= b();
        assert_eq!(c, a());
        c += 2.0;
        assert_eq!(c, Dual::new(3.0, 2.0));
        c *= 2;
        assert_eq!(c, Dual::new(6.0, 4.0));
    }

    #[test]
    fn remainder_keeps_linear_derivative() {
        let r = Dual::new(7.5, 1.0) % Dual::new(2.0, 0.5);
        assert_eq!(r, Dual::new(1.5, 1.0 - 3.0 * 0.5));
    }

    #[test]
    fn division_by_zero_is_ieee_unless_checked() {
        let q = a() / Dual::new(0.0, 1.0);
        assert!(q.x.is_infinite());
        let err = a().checked_div(0.0).expect_err("zero denominator");
        assert!(format!("{err}").contains("division"));
        assert_eq!(a().checked_div(b()).expect("nonzero"), a() / b());
    }

    #[test]
    fn iterators_sum_and_multiply() {
        let values = [a(), b(), Dual::new(-1.0, 0.5)];
        let total: Dual = values.iter().sum();
        assert_eq!(total, Dual::new(3.0, 6.5));
        let product: Dual = values.iter().copied().product();
        assert_eq!(product, a() * b() * Dual::new(-1.0, 0.5));
    }

    #[test]
    fn num_traits_interop() {
        assert!(Dual::zero().is_zero());
        assert!(!EPSILON.is_zero());
        assert_eq!(Dual::one(), 1.0);
        assert_eq!(Dual::from_i64(4), Some(Dual::new(4.0, 0.0)));
        assert_eq!(Dual::from_f64(0.25).and_then(|d| d.to_f64()), Some(0.25));
        assert_eq!(Dual::new(3.9, 1.0).to_i64(), Some(3));
        assert_eq!(
            Dual::from_str_radix("1+2ε", 10).expect("canonical"),
            Dual::new(1.0, 2.0)
        );
        assert_eq!(Dual::from_str_radix("ff", 16).expect("hex"), 255.0);
        assert!(Dual::from_str_radix("zz", 10).is_err());
        let generic: Dual = num_traits::pow(a(), 3);
        assert_eq!(generic, a() * a() * a());
    }
}
