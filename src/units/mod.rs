//! Compile-time dimensional quantities (spec §2.1, §4.1).
//!
//! Every numeric interface in the cascade core takes and returns a
//! [`Quantity<S, D>`]; mixing dimensions is rejected by the type checker,
//! not at runtime.

mod constants;
mod dimension;
mod hep;
mod quantity;
mod quantities_and_units;

pub use constants::*;
pub use dimension::Dimension;
pub use dimension::NONE;
pub use quantities_and_units::*;
pub use quantity::Quantity;

/// The crate's default floating point representation.
pub type Float = f64;
/// The crate's default 3D vector representation.
pub type MVec = glam::DVec3;

#[cfg(test)]
pub(crate) fn assert_is_close<const D: Dimension>(x: Quantity<f64, D>, y: Quantity<f64, D>) {
    const EPSILON: f64 = 1e-9;
    let scale = x.value_unchecked().abs().max(y.value_unchecked().abs()).max(1.0);
    assert!(
        (x - y).abs().value_unchecked() < EPSILON * scale,
        "{} != {}",
        x.value_unchecked(),
        y.value_unchecked()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_same_unit() {
        let x = Length::meters(1.0);
        let y = Length::meters(10.0);
        assert_is_close(x + y, Length::meters(11.0));
    }

    #[test]
    fn add_different_units() {
        let x = Length::meters(1.0);
        let y = Length::kilometers(10.0);
        assert_is_close(x + y, Length::meters(10001.0));
    }

    #[test]
    fn div_same_unit_is_dimensionless() {
        let x = Length::meters(1.0);
        let y = Length::meters(10.0);
        assert_is_close(x / y, Dimensionless::dimensionless(0.1));
    }

    #[test]
    fn mul_length_by_grammage_conversion_dimension() {
        let density = MassDensity::kilograms_per_cubic_meter(2.0);
        let length = Length::meters(3.0);
        let grammage: Grammage = density * length;
        assert_is_close(grammage, Grammage::kilograms_per_square_meter(6.0));
    }

    #[test]
    fn inverse_grammage_times_grammage_is_dimensionless() {
        let g = Grammage::kilograms_per_square_meter(4.0);
        let inv = InverseGrammage::square_meters_per_kilogram(0.25);
        assert_is_close(g * inv, Dimensionless::dimensionless(1.0));
    }

    #[test]
    fn hep_energy_round_trips_through_si() {
        let e = HepEnergy::giga_electron_volts(100.0);
        let si = e.to_si_energy();
        let back = si.to_hep_energy();
        assert_is_close(
            Dimensionless::dimensionless(back.value_unchecked() / e.value_unchecked()),
            Dimensionless::dimensionless(1.0),
        );
    }

    #[test]
    fn hep_energy_to_length_and_time_are_positive_and_finite() {
        let e = HepEnergy::mega_electron_volts(100.0);
        let l = e.to_length();
        let t = e.to_time();
        assert!(l.value_unchecked() > 0.0 && l.value_unchecked().is_finite());
        assert!(t.value_unchecked() > 0.0 && t.value_unchecked().is_finite());
    }

    #[test]
    fn vector_quantity_components() {
        let v = Vec3Length::meters(1.0, 2.0, 3.0);
        assert_is_close(v.x(), Length::meters(1.0));
        assert_is_close(v.y(), Length::meters(2.0));
        assert_is_close(v.z(), Length::meters(3.0));
    }

    #[test]
    fn vector_quantity_length() {
        let v = Vec3Length::meters(3.0, 4.0, 0.0);
        assert_is_close(v.length(), Length::meters(5.0));
    }
}
