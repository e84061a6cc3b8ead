use gsw as gsw_teos10;

/// Practical Salinity (PSS-78) from conductivity.
///
/// # Arguments
/// * `c` - Conductivity [mS/cm]
/// * `t` - In-situ temperature [°C, ITS-90]
/// * `p` - Sea pressure [dbar]
///
/// # Returns
/// * SP (unitless), including the Hill et al. (1986) extension below SP = 2.
///   NaN inputs come back as `Ok(NaN)`.
///
/// # Errors
/// * A short reason when TEOS-10 rejects the value (negative conductivity
///   ratio or negative salinity).
pub fn sp_from_c(c: f64, t: f64, p: f64) -> Result<f64, &'static str> {
    gsw_teos10::practical_salinity::sp_from_c(c, t, p).map_err(|e| match e {
        gsw_teos10::Error::Undefined => "negative conductivity ratio",
        gsw_teos10::Error::NegativeSalinity => "negative practical salinity",
        gsw_teos10::Error::OutOfBounds => "input out of bounds",
    })
}

/// Reference Salinity [g/kg] from Practical Salinity.
///
/// TEOS-10 `SR = SP · 35.16504/35`, the standard-composition approximation of
/// Absolute Salinity. No location-based correction is applied.
pub fn sr_from_sp(sp: f64) -> f64 {
    gsw_teos10::conversions::sr_from_sp(sp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) {
        assert!((a - b).abs() <= tol, "{a} != {b} (tol {tol})");
    }

    #[test]
    fn reproduces_gsw_check_values() {
        // gsw_check_functions: C, t, p -> SP
        let cases = [
            (34.5487, 28.7856, 10.0, 20.009_869_599_086_951),
            (34.7275, 28.4329, 50.0, 20.265_511_864_874_270),
            (34.8605, 22.8103, 125.0, 22.981_513_062_527_689),
            (34.6810, 10.2600, 250.0, 31.204_503_263_727_982),
        ];
        for (c, t, p, want) in cases {
            close(sp_from_c(c, t, p).unwrap(), want, 1e-10);
        }
    }

    #[test]
    fn standard_seawater_is_close_to_35() {
        let sp = sp_from_c(42.914, 15.0, 0.0).unwrap();
        // 15 °C ITS-90 is slightly above 15 °C IPTS-68, hence 34.9968 not 35.0000.
        close(sp, 34.996_770_111_355, 1e-10);
    }

    #[test]
    fn low_salinity_uses_hill_extension() {
        let cases = [
            (1.0, 0.0, 0.0, 0.952_296_562_696_264_2),
            (1.0, 10.0, 0.0, 0.706_444_144_071_686_7),
            (2.0, 20.0, 0.0, 1.136_486_604_234_944_4),
            (3.0, 30.0, 0.0, 1.405_049_537_425_416_2),
            (3.0, 35.0, 0.0, 1.275_834_318_938_353),
            (4.8, 37.0, 2000.0, 1.994_231_035_100_649_6),
        ];
        for (c, t, p, want) in cases {
            close(sp_from_c(c, t, p).unwrap(), want, 1e-10);
        }
    }

    #[test]
    fn zero_conductivity_is_fresh_water() {
        let sp = sp_from_c(0.0, 10.0, 0.0).unwrap();
        assert!((0.0..1e-12).contains(&sp));
    }

    #[test]
    fn negative_conductivity_is_rejected() {
        assert_eq!(sp_from_c(-5.0, 10.0, 0.0), Err("negative conductivity ratio"));
    }

    #[test]
    fn nan_inputs_propagate() {
        assert!(sp_from_c(f64::NAN, 10.0, 0.0).unwrap().is_nan());
    }

    #[test]
    fn reference_salinity_scales_practical_salinity() {
        assert!((sr_from_sp(35.0) - 35.165_04).abs() < 1e-9);
        assert_eq!(sr_from_sp(0.0), 0.0);
    }
}
