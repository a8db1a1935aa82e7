//! Coefficient rows of the IAU 2000A nutation series.
//!
//! Amplitudes are held in units of 0.1 µas, the resolution of the published
//! tables. Conversion to radians happens once per series sum, not per term.

use super::fundamental_args::{LunisolarArguments, PlanetaryArguments};

/// One row of the luni-solar series.
///
/// ```text
/// Δψ += (A + A_t·t)·sin(arg) + A'·cos(arg)
/// Δε += (B + B_t·t)·cos(arg) + B'·sin(arg)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunisolarTerm {
    /// Multipliers of (l, l', F, D, Ω).
    pub multipliers: [i32; 5],
    pub psi_sin: f64,
    pub psi_sin_t: f64,
    pub psi_cos: f64,
    pub eps_cos: f64,
    pub eps_cos_t: f64,
    pub eps_sin: f64,
}

impl LunisolarTerm {
    /// Linear combination of the five arguments; not reduced.
    #[inline]
    pub fn argument(&self, args: &LunisolarArguments) -> f64 {
        let [nl, nlp, nf, nd, nom] = self.multipliers;
        nl as f64 * args.l
            + nlp as f64 * args.lp
            + nf as f64 * args.f
            + nd as f64 * args.d
            + nom as f64 * args.om
    }
}

/// One row of the planetary series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetaryTerm {
    /// Multipliers of (l, l', F, D, Ω, Me, Ve, E, Ma, J, Sa, U, Ne, pA).
    ///
    /// The l' column is carried as read but never enters the argument.
    pub multipliers: [i32; 14],
    pub psi_sin: f64,
    pub psi_cos: f64,
    pub eps_sin: f64,
    pub eps_cos: f64,
}

impl PlanetaryTerm {
    /// Linear combination of the planetary arguments; not reduced.
    #[inline]
    pub fn argument(&self, args: &PlanetaryArguments) -> f64 {
        let [nl, _nlp, nf, nd, nom, nme, nve, nea, nma, nju, nsa, nur, nne, npa] =
            self.multipliers;
        nl as f64 * args.l
            + nf as f64 * args.f
            + nd as f64 * args.d
            + nom as f64 * args.om
            + nme as f64 * args.me
            + nve as f64 * args.ve
            + nea as f64 * args.ea
            + nma as f64 * args.ma
            + nju as f64 * args.ju
            + nsa as f64 * args.sa
            + nur as f64 * args.ur
            + nne as f64 * args.ne
            + npa as f64 * args.pa
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunisolar_args() -> LunisolarArguments {
        LunisolarArguments {
            l: 1.0,
            lp: 10.0,
            f: 100.0,
            d: 1000.0,
            om: 10000.0,
        }
    }

    #[test]
    fn lunisolar_argument_is_dot_product() {
        let term = LunisolarTerm {
            multipliers: [1, -1, 2, -2, 1],
            psi_sin: 0.0,
            psi_sin_t: 0.0,
            psi_cos: 0.0,
            eps_cos: 0.0,
            eps_cos_t: 0.0,
            eps_sin: 0.0,
        };
        assert_eq!(term.argument(&lunisolar_args()), 1.0 - 10.0 + 200.0 - 2000.0 + 10000.0);
    }

    #[test]
    fn planetary_argument_ignores_sun_anomaly_column() {
        let args = PlanetaryArguments {
            l: 1.0,
            f: 2.0,
            d: 3.0,
            om: 4.0,
            me: 5.0,
            ve: 6.0,
            ea: 7.0,
            ma: 8.0,
            ju: 9.0,
            sa: 10.0,
            ur: 11.0,
            ne: 12.0,
            pa: 13.0,
        };
        let mut term = PlanetaryTerm {
            multipliers: [1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            psi_sin: 0.0,
            psi_cos: 0.0,
            eps_sin: 0.0,
            eps_cos: 0.0,
        };
        let base = term.argument(&args);
        assert_eq!(base, (1..=13).sum::<i32>() as f64);

        term.multipliers[1] = 7;
        assert_eq!(term.argument(&args), base);
    }
}
