// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Coefficient functions C₀..C₄ of the Riemann-Siegel remainder term.
//!
//! Each Cₙ(z) is a fitted polynomial on z ∈ [-1, 1], where z = 2p - 1 and p is
//! the fractional part of sqrt(t/2π). C₀, C₂ and C₄ are even in z; C₁ and C₃
//! are odd. The tables below hold only the nonzero coefficients, lowest degree
//! first, so every polynomial is evaluated in Horner form over w = z²:
//!
//! - even: Cₙ(z) = a₀ + a₁w + a₂w² + ...
//! - odd:  Cₙ(z) = z(a₀ + a₁w + a₂w² + ...)
//!
//! The values come from Pugh's thesis (1992) and are reproduced verbatim.

#![allow(clippy::excessive_precision)]

use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// Coefficients of C₀: powers z⁰, z², ..., z⁴².
pub const C0: [f64; 22] = [
    0.38268343236508977173,
    0.43724046807752044936,
    0.13237657548034352332,
    -0.01360502604767418865,
    -0.01356762197010358089,
    -0.00162372532314446528,
    0.00029705353733379691,
    0.00007943300879521470,
    0.00000046556124614505,
    -0.00000143272516309551,
    -0.00000010354847112313,
    0.00000001235792708386,
    0.00000000178810838580,
    -0.00000000003391414390,
    -0.00000000001632663390,
    -0.00000000000037851093,
    0.00000000000009327423,
    0.00000000000000522184,
    -0.00000000000000033507,
    -0.00000000000000003412,
    0.00000000000000000058,
    0.00000000000000000015,
];

/// Coefficients of C₁: powers z¹, z³, ..., z⁴⁵.
pub const C1: [f64; 23] = [
    -0.02682510262837534703,
    0.01378477342635185305,
    0.03849125048223508223,
    0.00987106629906207647,
    -0.00331075976085840433,
    -0.00146478085779541508,
    -0.00001320794062487696,
    0.00005922748701847141,
    0.00000598024258537345,
    -0.00000096413224561698,
    -0.00000018334733722714,
    0.00000000446708756272,
    0.00000000270963508218,
    0.00000000007785288654,
    -0.00000000002343762601,
    -0.00000000000158301728,
    0.00000000000012119942,
    0.00000000000001458378,
    -0.00000000000000028786,
    -0.00000000000000008663,
    -0.00000000000000000084,
    0.00000000000000000036,
    0.00000000000000000001,
];

/// Coefficients of C₂: powers z⁰, z², ..., z⁴⁶.
pub const C2: [f64; 24] = [
    0.00518854283029316849,
    0.00030946583880634746,
    -0.01133594107822937338,
    0.00223304574195814477,
    0.00519663740886233021,
    0.00034399144076208337,
    -0.00059106484274705828,
    -0.00010229972547935857,
    0.00002088839221699276,
    0.00000592766549309654,
    -0.00000016423838362436,
    -0.00000015161199700941,
    -0.00000000590780369821,
    0.00000000209115148595,
    0.00000000017815649583,
    -0.00000000001616407246,
    -0.00000000000238069625,
    0.00000000000005398265,
    0.00000000000001975014,
    0.00000000000000023333,
    -0.00000000000000011188,
    -0.00000000000000000416,
    0.00000000000000000044,
    0.00000000000000000003,
];

/// Coefficients of C₃: powers z¹, z³, ..., z⁴⁷.
pub const C3: [f64; 24] = [
    -0.00133971609071945690,
    0.00374421513637939370,
    -0.00133031789193214681,
    -0.00226546607654717871,
    0.00095484999985067304,
    0.00060100384589636039,
    -0.00010128858286776622,
    -0.00006865733449299826,
    0.00000059853667915386,
    0.00000333165985123995,
    0.00000021919289102435,
    -0.00000007890884245681,
    -0.00000000941468508130,
    0.00000000095701162109,
    0.00000000018763137453,
    -0.00000000000443783768,
    -0.00000000000224267385,
    -0.00000000000003627687,
    0.00000000000001763981,
    0.00000000000000079608,
    -0.00000000000000009420,
    -0.00000000000000000713,
    0.00000000000000000033,
    0.00000000000000000004,
];

/// Coefficients of C₄: powers z⁰, z², ..., z⁴⁸.
pub const C4: [f64; 25] = [
    0.00046483389361763382,
    -0.00100566073653404708,
    0.00024044856573725793,
    0.00102830861497023219,
    -0.00076578610717556442,
    -0.00020365286803084818,
    0.00023212290491068728,
    0.00003260214424386520,
    -0.00002557906251794953,
    -0.00000410746443891574,
    0.00000117811136403713,
    0.00000024456561422485,
    -0.00000002391582476734,
    -0.00000000750521420704,
    0.00000000013312279416,
    0.00000000013440626754,
    0.00000000000351377004,
    -0.00000000000151915445,
    -0.00000000000008915418,
    0.00000000000001119589,
    0.00000000000000105160,
    -0.00000000000000005179,
    -0.00000000000000000807,
    0.00000000000000000011,
    0.00000000000000000004,
];

/// One of the five remainder coefficient functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCountMacro, EnumIter)]
#[repr(u8)]
pub enum Coefficient {
    C0,
    C1,
    C2,
    C3,
    C4,
}

impl Coefficient {
    /// Map an order `n` to its coefficient function.
    ///
    /// Orders 0 to 3 each have their own polynomial; every order from 4 up
    /// shares C₄, since the expansion is truncated there.
    pub fn select(n: usize) -> Self {
        match n {
            0 => Coefficient::C0,
            1 => Coefficient::C1,
            2 => Coefficient::C2,
            3 => Coefficient::C3,
            _ => Coefficient::C4,
        }
    }

    /// Nonzero coefficients, lowest degree first.
    pub fn table(self) -> &'static [f64] {
        match self {
            Coefficient::C0 => &C0,
            Coefficient::C1 => &C1,
            Coefficient::C2 => &C2,
            Coefficient::C3 => &C3,
            Coefficient::C4 => &C4,
        }
    }

    /// True for the odd polynomials C₁ and C₃.
    pub fn is_odd(self) -> bool {
        matches!(self, Coefficient::C1 | Coefficient::C3)
    }

    /// Evaluate the polynomial at `z`.
    #[inline]
    pub fn eval(self, z: f64) -> f64 {
        let w = z * z;
        let even_part = horner(self.table(), w);
        if self.is_odd() {
            z * even_part
        } else {
            even_part
        }
    }
}

/// Evaluate `Σ coeffs[k]·w^k`.
#[inline]
fn horner(coeffs: &[f64], w: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * w + c)
}

/// Remainder coefficient Cₙ(z); any `n >= 4` evaluates C₄.
#[inline]
pub fn c(n: usize, z: f64) -> f64 {
    Coefficient::select(n).eval(z)
}
