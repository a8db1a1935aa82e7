//! Fundamental arguments for the nutation series and the CIO locator.
//!
//! Fundamental arguments are the mean anomalies, elongations and longitudes of
//! the Moon, Sun and planets, each a low-order polynomial in Julian centuries
//! (TT) since J2000.0. Two flavors are needed:
//!
//! - [`IERS2003FundamentalArgs`]: expressions from the IERS Conventions (2003).
//!   The lunisolar ones are evaluated in arcseconds and reduced modulo one turn
//!   (1 296 000″) *before* conversion to radians, which keeps the large secular
//!   rates from eroding precision far from J2000.0.
//!
//! - [`MHB2000FundamentalArgs`]: the slightly different expressions the
//!   MHB2000 series was fitted against.
//!
//! The IAU 2000A luni-solar series uses IERS 2003 l, F and Ω together with
//! MHB2000 l' and D; the planetary series uses its own MHB2000 linear
//! arguments for l, F, D and Ω together with IERS 2003 planetary longitudes.
//! [`LunisolarArguments`] and [`PlanetaryArguments`] fix these combinations so
//! callers never assemble them by hand.
//!
//! All methods are implemented on `f64` holding the time in Julian centuries.
//! Every argument except pA is returned in [0, 2π).
//!
//! # References
//!
//! - IERS Conventions (2003), Chapter 5
//! - Mathews, Herring, & Buffett 2002, J. Geophys. Res. 107(B4)

use crate::angle::wrap_0_2pi;
use crate::constants::{ARCSEC_TO_RAD, CIRCULAR_ARCSECONDS};
use crate::math::fmod;

/// Fundamental arguments from IERS Conventions (2003).
///
/// ```
/// use sidereal_core::nutation::IERS2003FundamentalArgs;
///
/// let t: f64 = 0.1; // Julian centuries from J2000.0
/// let l = t.moon_mean_anomaly();
/// let f = t.mean_argument_of_latitude();
/// assert!(l >= 0.0 && f >= 0.0);
/// ```
pub trait IERS2003FundamentalArgs {
    /// Mean anomaly of the Moon, l (radians).
    fn moon_mean_anomaly(&self) -> f64;

    /// Mean anomaly of the Sun, l' (radians).
    fn sun_mean_anomaly(&self) -> f64;

    /// Mean argument of latitude of the Moon, F (radians).
    fn mean_argument_of_latitude(&self) -> f64;

    /// Mean elongation of the Moon from the Sun, D (radians).
    fn mean_elongation(&self) -> f64;

    /// Mean longitude of the Moon's ascending node, Ω (radians).
    fn moon_ascending_node_longitude(&self) -> f64;

    fn mercury_lng(&self) -> f64;

    fn venus_lng(&self) -> f64;

    fn earth_lng(&self) -> f64;

    fn mars_lng(&self) -> f64;

    fn jupiter_lng(&self) -> f64;

    fn saturn_lng(&self) -> f64;

    fn uranus_lng(&self) -> f64;

    /// General accumulated precession in longitude, pA (radians).
    ///
    /// Not reduced to [0, 2π).
    fn precession(&self) -> f64;
}

#[inline]
fn lunisolar_arcsec(t: f64, c0: f64, c1: f64, c2: f64, c3: f64, c4: f64) -> f64 {
    let arcsec = c0 + t * (c1 + t * (c2 + t * (c3 + t * c4)));
    wrap_0_2pi(fmod(arcsec, CIRCULAR_ARCSECONDS) * ARCSEC_TO_RAD)
}

impl IERS2003FundamentalArgs for f64 {
    #[inline]
    fn moon_mean_anomaly(&self) -> f64 {
        lunisolar_arcsec(
            *self,
            485868.249036,
            1717915923.2178,
            31.8792,
            0.051635,
            -0.00024470,
        )
    }

    #[inline]
    fn sun_mean_anomaly(&self) -> f64 {
        lunisolar_arcsec(
            *self,
            1287104.793048,
            129596581.0481,
            -0.5532,
            0.000136,
            -0.00001149,
        )
    }

    #[inline]
    fn mean_argument_of_latitude(&self) -> f64 {
        lunisolar_arcsec(
            *self,
            335779.526232,
            1739527262.8478,
            -12.7512,
            -0.001037,
            0.00000417,
        )
    }

    #[inline]
    fn mean_elongation(&self) -> f64 {
        lunisolar_arcsec(
            *self,
            1072260.703692,
            1602961601.2090,
            -6.3706,
            0.006593,
            -0.00003169,
        )
    }

    #[inline]
    fn moon_ascending_node_longitude(&self) -> f64 {
        lunisolar_arcsec(
            *self,
            450160.398036,
            -6962890.5431,
            7.4722,
            0.007702,
            -0.00005939,
        )
    }

    #[inline]
    fn mercury_lng(&self) -> f64 {
        wrap_0_2pi(4.402608842 + 2608.7903141574 * self)
    }

    #[inline]
    fn venus_lng(&self) -> f64 {
        wrap_0_2pi(3.176146697 + 1021.3285546211 * self)
    }

    #[inline]
    fn earth_lng(&self) -> f64 {
        wrap_0_2pi(1.753470314 + 628.3075849991 * self)
    }

    #[inline]
    fn mars_lng(&self) -> f64 {
        wrap_0_2pi(6.203480913 + 334.0612426700 * self)
    }

    #[inline]
    fn jupiter_lng(&self) -> f64 {
        wrap_0_2pi(0.599546497 + 52.9690962641 * self)
    }

    #[inline]
    fn saturn_lng(&self) -> f64 {
        wrap_0_2pi(0.874016757 + 21.3299104960 * self)
    }

    #[inline]
    fn uranus_lng(&self) -> f64 {
        wrap_0_2pi(5.481293872 + 7.4781598567 * self)
    }

    #[inline]
    fn precession(&self) -> f64 {
        (0.024381750 + 0.00000538691 * self) * self
    }
}

/// Fundamental arguments specific to the MHB2000 nutation series.
///
/// The `_mhb` suffix distinguishes these from the IERS 2003 versions where the
/// expressions differ.
///
/// ```
/// use sidereal_core::nutation::MHB2000FundamentalArgs;
///
/// let t: f64 = 0.1;
/// let lp = t.sun_mean_anomaly_mhb();
/// let d = t.mean_elongation_mhb();
/// assert!(lp >= 0.0 && d >= 0.0);
/// ```
pub trait MHB2000FundamentalArgs {
    /// Mean anomaly of the Sun, l' (radians), luni-solar series flavor.
    fn sun_mean_anomaly_mhb(&self) -> f64;

    /// Mean elongation of the Moon from the Sun, D (radians), luni-solar series flavor.
    fn mean_elongation_mhb(&self) -> f64;

    /// Mean anomaly of the Moon, linear planetary-series flavor.
    fn moon_mean_anomaly_planetary_mhb(&self) -> f64;

    /// Mean argument of latitude of the Moon, linear planetary-series flavor.
    fn mean_argument_of_latitude_planetary_mhb(&self) -> f64;

    /// Mean elongation of the Moon from the Sun, linear planetary-series flavor.
    fn mean_elongation_planetary_mhb(&self) -> f64;

    /// Mean longitude of the ascending node of the Moon, linear planetary-series flavor.
    fn moon_ascending_node_planetary_mhb(&self) -> f64;

    fn neptune_longitude_mhb(&self) -> f64;
}

impl MHB2000FundamentalArgs for f64 {
    #[inline]
    fn sun_mean_anomaly_mhb(&self) -> f64 {
        lunisolar_arcsec(
            *self,
            1287104.79305,
            129596581.0481,
            -0.5532,
            0.000136,
            -0.00001149,
        )
    }

    #[inline]
    fn mean_elongation_mhb(&self) -> f64 {
        lunisolar_arcsec(
            *self,
            1072260.70369,
            1602961601.2090,
            -6.3706,
            0.006593,
            -0.00003169,
        )
    }

    #[inline]
    fn moon_mean_anomaly_planetary_mhb(&self) -> f64 {
        wrap_0_2pi(2.35555598 + 8328.6914269554 * self)
    }

    #[inline]
    fn mean_argument_of_latitude_planetary_mhb(&self) -> f64 {
        wrap_0_2pi(1.627905234 + 8433.466158131 * self)
    }

    #[inline]
    fn mean_elongation_planetary_mhb(&self) -> f64 {
        wrap_0_2pi(5.198466741 + 7771.3771468121 * self)
    }

    #[inline]
    fn moon_ascending_node_planetary_mhb(&self) -> f64 {
        wrap_0_2pi(2.18243920 - 33.757045 * self)
    }

    #[inline]
    fn neptune_longitude_mhb(&self) -> f64 {
        wrap_0_2pi(5.321159000 + 3.8127774000 * self)
    }
}

/// The five arguments of the luni-solar series, in table column order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunisolarArguments {
    pub l: f64,
    pub lp: f64,
    pub f: f64,
    pub d: f64,
    pub om: f64,
}

impl LunisolarArguments {
    /// IERS 2003 l, F, Ω with MHB2000 l', D.
    pub fn at(t: f64) -> Self {
        Self {
            l: t.moon_mean_anomaly(),
            lp: t.sun_mean_anomaly_mhb(),
            f: t.mean_argument_of_latitude(),
            d: t.mean_elongation_mhb(),
            om: t.moon_ascending_node_longitude(),
        }
    }
}

/// The arguments of the planetary series.
///
/// The table carries a column for l' that the planetary series does not use,
/// so there is no field for it here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetaryArguments {
    pub l: f64,
    pub f: f64,
    pub d: f64,
    pub om: f64,
    pub me: f64,
    pub ve: f64,
    pub ea: f64,
    pub ma: f64,
    pub ju: f64,
    pub sa: f64,
    pub ur: f64,
    pub ne: f64,
    pub pa: f64,
}

impl PlanetaryArguments {
    /// MHB2000 linear l, F, D, Ω and Neptune with IERS 2003 planets and pA.
    pub fn at(t: f64) -> Self {
        Self {
            l: t.moon_mean_anomaly_planetary_mhb(),
            f: t.mean_argument_of_latitude_planetary_mhb(),
            d: t.mean_elongation_planetary_mhb(),
            om: t.moon_ascending_node_planetary_mhb(),
            me: t.mercury_lng(),
            ve: t.venus_lng(),
            ea: t.earth_lng(),
            ma: t.mars_lng(),
            ju: t.jupiter_lng(),
            sa: t.saturn_lng(),
            ur: t.uranus_lng(),
            ne: t.neptune_longitude_mhb(),
            pa: t.precession(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TWOPI;

    // SOFA reference values at t = 0.80 Julian centuries.
    #[test]
    fn iers2003_lunisolar_match_sofa() {
        let t: f64 = 0.80;
        assert!((t.moon_mean_anomaly() - 5.132369751108684150).abs() < 1e-11);
        assert!((t.sun_mean_anomaly() - 6.226797973505507345).abs() < 1e-11);
        assert!((t.mean_argument_of_latitude() - 0.2597711366745499518).abs() < 1e-11);
        assert!((t.mean_elongation() - 1.946709205396925672).abs() < 1e-11);
        // SOFA gives Ω = -5.973618440951302183, one turn below.
        assert!((t.moon_ascending_node_longitude() - 0.309566866228284).abs() < 1e-11);
    }

    #[test]
    fn iers2003_planets_match_sofa() {
        let t: f64 = 0.80;
        assert!((t.mercury_lng() - 5.417338184297289661).abs() < 1e-11);
        assert!((t.venus_lng() - 3.424900460533758000).abs() < 1e-11);
        assert!((t.earth_lng() - 1.744713738913081846).abs() < 1e-11);
        assert!((t.mars_lng() - 3.275506840277781492).abs() < 1e-11);
        assert!((t.jupiter_lng() - 5.275711665202481138).abs() < 1e-11);
        assert!((t.saturn_lng() - 5.371574539440827046).abs() < 1e-11);
        assert!((t.uranus_lng() - 5.180636450180413523).abs() < 1e-11);
        assert!((t.precession() - 0.1950884762240000000e-1).abs() < 1e-11);
    }

    #[test]
    fn neptune_mhb_at_point_eight() {
        let t: f64 = 0.80;
        assert!((t.neptune_longitude_mhb() - 2.0881956128204138).abs() < 1e-11);
    }

    #[test]
    fn mhb_and_iers_variants_differ_only_slightly() {
        let t: f64 = 0.3;
        let dlp = (t.sun_mean_anomaly_mhb() - t.sun_mean_anomaly()).abs();
        let dd = (t.mean_elongation_mhb() - t.mean_elongation()).abs();
        assert!(dlp > 0.0 && dlp < 1e-10);
        assert!(dd > 0.0 && dd < 1e-10);
    }

    #[test]
    fn reduction_happens_before_conversion() {
        // Forty centuries out, the secular term alone is ~7e12 arcsec; the
        // reduced value must still be a proper in-turn angle.
        let t: f64 = 40.0;
        let l = t.moon_mean_anomaly();
        assert!((0.0..TWOPI).contains(&l));
        let f = t.mean_argument_of_latitude();
        assert!((0.0..TWOPI).contains(&f));
    }

    #[test]
    fn arguments_stay_in_one_turn_before_j2000() {
        for t in [-0.5, -3.0, -20.0] {
            let ls = LunisolarArguments::at(t);
            let pl = PlanetaryArguments::at(t);
            let angles = [
                ls.l, ls.lp, ls.f, ls.d, ls.om, pl.l, pl.f, pl.d, pl.om, pl.me, pl.ve, pl.ea,
                pl.ma, pl.ju, pl.sa, pl.ur, pl.ne,
            ];
            for a in angles {
                assert!((0.0..TWOPI).contains(&a), "{} outside [0, 2π) at t = {}", a, t);
            }
        }
    }

    #[test]
    fn wrapping_preserves_the_angle_mod_one_turn() {
        let t: f64 = -0.5;
        let raw = fmod(485868.249036 + t * 1717915923.2178, CIRCULAR_ARCSECONDS) * ARCSEC_TO_RAD;
        let l = t.moon_mean_anomaly();
        assert!(raw < 0.0);
        assert!((libm::sin(l) - libm::sin(raw)).abs() < 1e-9);
        assert!((libm::cos(l) - libm::cos(raw)).abs() < 1e-9);
    }

    #[test]
    fn argument_sets_use_the_right_flavors() {
        let t = 0.16680358081222907;
        let ls = LunisolarArguments::at(t);
        assert_eq!(ls.l, t.moon_mean_anomaly());
        assert_eq!(ls.lp, t.sun_mean_anomaly_mhb());
        assert_eq!(ls.d, t.mean_elongation_mhb());

        let pl = PlanetaryArguments::at(t);
        assert_eq!(pl.l, t.moon_mean_anomaly_planetary_mhb());
        assert_eq!(pl.ne, t.neptune_longitude_mhb());
        assert_eq!(pl.pa, t.precession());
    }
}
