//! Helpers shared by unit tests, integration tests and doctests.
//!
//! The fixture tables are the 77-term IAU 2000B luni-solar subset and the
//! first three planetary rows. They reproduce full IAU 2000A nutation to
//! about 1 mas (5e-9 rad), which is enough to pin pipeline behavior but not
//! to check against published SOFA values tighter than ~1e-8 rad.

use crate::nutation::CoefficientTables;

pub const FIXTURE_LUNISOLAR: &str = include_str!("../../testdata/nut_ls_2000b.txt");
pub const FIXTURE_PLANETARY: &str = include_str!("../../testdata/nut_pl_head.txt");

/// Parses the bundled fixture tables.
///
/// # Panics
///
/// If the bundled fixtures fail to parse.
pub fn fixture_tables() -> CoefficientTables {
    CoefficientTables::from_strs(FIXTURE_LUNISOLAR, FIXTURE_PLANETARY)
        .expect("bundled fixture tables parse")
}

#[inline]
pub fn f64_to_ordered_u64(x: f64) -> u64 {
    let bits = x.to_bits();
    if bits & 0x8000_0000_0000_0000 != 0 {
        !bits
    } else {
        bits | 0x8000_0000_0000_0000
    }
}

/// Distance between two floats in units in the last place.
#[inline]
pub fn ulp_diff(a: f64, b: f64) -> u64 {
    f64_to_ordered_u64(a).abs_diff(f64_to_ordered_u64(b))
}

#[track_caller]
pub fn assert_ulp_le(a: f64, b: f64, max_ulp: u64, ctx: &str) {
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(
        a.is_finite() && b.is_finite(),
        "non-finite value in {}",
        ctx
    );
    let d = ulp_diff(a, b);
    assert!(
        d <= max_ulp,
        "{}: ULP={} exceeds {}, a={} (0x{:016x}) b={} (0x{:016x})",
        ctx,
        d,
        max_ulp,
        a,
        a.to_bits(),
        b,
        b.to_bits()
    );
}

#[macro_export]
macro_rules! assert_ulp_lt {
    ($a:expr, $b:expr, $max_ulp:expr) => {
        $crate::test_helpers::assert_ulp_le(
            $a,
            $b,
            $max_ulp,
            &format!(
                "ULP check failed: {} vs {} (max_ulp={})",
                stringify!($a),
                stringify!($b),
                $max_ulp
            ),
        )
    };
    ($a:expr, $b:expr, $max_ulp:expr, $($arg:tt)*) => {
        $crate::test_helpers::assert_ulp_le($a, $b, $max_ulp, &format!($($arg)*))
    };
}
