//! Length units for page geometry.
//!
//! All drawing ultimately happens in PDF points ([`Pt`]); [`In`] and [`Mm`]
//! exist so sizes can be specified in friendlier units and converted into
//! points.
//!
//! ```
//! use grid_gen::{In, Mm, Pt};
//!
//! let margin: Pt = In(0.5).into();
//! assert_eq!(margin, Pt(36.0));
//!
//! let spacing: Pt = Mm(25.4).into();
//! assert!((*spacing - 72.0).abs() < 1e-4);
//! ```

use derive_more::{
    Add, AddAssign, Deref, DerefMut, Display, Div, From, Into, Mul, MulAssign, Sub, SubAssign, Sum,
};

/// A distance in PDF points. There are 72 points in one inch.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, AddAssign, SubAssign, Mul, Div,
    MulAssign, Sum, Deref, DerefMut, Display, From, Into,
)]
pub struct Pt(pub f32);

/// A distance in inches.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, AddAssign, SubAssign, Mul, Div,
    MulAssign, Deref, DerefMut, Display, From, Into,
)]
pub struct In(pub f32);

/// A distance in millimetres.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, AddAssign, SubAssign, Mul, Div,
    MulAssign, Deref, DerefMut, Display, From, Into,
)]
pub struct Mm(pub f32);

impl From<In> for Pt {
    fn from(value: In) -> Pt {
        Pt(*value * 72.0)
    }
}

impl From<Mm> for Pt {
    fn from(value: Mm) -> Pt {
        Pt(*value * 72.0 / 25.4)
    }
}

impl From<Pt> for In {
    fn from(value: Pt) -> In {
        In(*value / 72.0)
    }
}

impl From<Pt> for Mm {
    fn from(value: Pt) -> Mm {
        Mm(*value * 25.4 / 72.0)
    }
}

impl From<Mm> for In {
    fn from(value: Mm) -> In {
        In(*value / 25.4)
    }
}

impl From<In> for Mm {
    fn from(value: In) -> Mm {
        Mm(*value * 25.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_units() {
        let pt: Pt = In(1.0).into();
        assert_eq!(pt, Pt(72.0));
        let pt: Pt = Mm(10.0).into();
        assert!((*pt - 28.346457).abs() < 1e-4);
        let inches: In = Pt(36.0).into();
        assert_eq!(inches, In(0.5));
    }

    #[test]
    fn arithmetic_stays_in_points() {
        let a = Pt(10.0) + Pt(5.0) - Pt(3.0);
        assert_eq!(a, Pt(12.0));
        let b = Pt(10.0) / 2.0;
        assert_eq!(b, Pt(5.0));
        let c: Pt = [Pt(1.0), Pt(2.0), Pt(3.0)].into_iter().sum();
        assert_eq!(c, Pt(6.0));
    }
}
