use crate::environment::material::NuclearComposition;
use crate::environment::medium::MediumModel;
use crate::geometry::Line;
use crate::geometry::Point;
use crate::geometry::Vector;
use crate::units::Grammage;
use crate::units::Length;
use crate::units::MassDensity;
use crate::units::NONE;

/// Constant mass density everywhere (spec §3: "homogeneous (constant
/// density, trivial conversions)").
#[derive(Debug, Clone)]
pub struct Homogeneous {
    pub density: MassDensity,
    composition: NuclearComposition,
}

impl Homogeneous {
    pub fn new(density: MassDensity, composition: NuclearComposition) -> Self {
        Self { density, composition }
    }
}

impl MediumModel for Homogeneous {
    fn mass_density(&self, _point: &Point) -> MassDensity {
        self.density
    }

    fn nuclear_composition(&self) -> &NuclearComposition {
        &self.composition
    }

    fn integrated_grammage(&self, _line: &Line, length: Length) -> Grammage {
        self.density * length
    }

    fn arclength_from_grammage(&self, _line: &Line, grammage: Grammage) -> Length {
        grammage / self.density
    }
}

/// Density falling off exponentially along a fixed axis:
/// `rho(point) = rho0 * exp(-height(point) / scale_height)`, where `height`
/// is the signed distance of `point` from `reference_point` along `axis`
/// (spec §3: "flat exponential along an axis (analytic conversions with a
/// degenerate orthogonal case)").
#[derive(Debug, Clone)]
pub struct FlatExponential {
    pub reference_point: Point,
    pub axis: Vector<NONE>,
    pub rho0: MassDensity,
    pub scale_height: Length,
    composition: NuclearComposition,
}

/// Lines nearly perpendicular to the axis have a grammage integral that
/// diverges numerically (division by a near-zero cosine); below this
/// threshold the density is treated as constant along the step instead.
const DEGENERATE_COSINE_THRESHOLD: f64 = 1e-9;

impl FlatExponential {
    pub fn new(
        reference_point: Point,
        axis: Vector<NONE>,
        rho0: MassDensity,
        scale_height: Length,
        composition: NuclearComposition,
    ) -> Self {
        Self {
            reference_point,
            axis,
            rho0,
            scale_height,
            composition,
        }
    }

    fn height(&self, point: &Point) -> Length {
        (*point - self.reference_point).dot(&self.axis)
    }

    fn density_at_height(&self, height: Length) -> MassDensity {
        self.rho0 * (-height / self.scale_height).value_unchecked().exp()
    }
}

impl MediumModel for FlatExponential {
    fn mass_density(&self, point: &Point) -> MassDensity {
        self.density_at_height(self.height(point))
    }

    fn nuclear_composition(&self) -> &NuclearComposition {
        &self.composition
    }

    fn integrated_grammage(&self, line: &Line, length: Length) -> Grammage {
        let h0 = self.height(&line.r0);
        let cos_theta = line.direction().dot(&self.axis);
        let rho_start = self.density_at_height(h0);
        if cos_theta.value_unchecked().abs() < DEGENERATE_COSINE_THRESHOLD {
            return rho_start * length;
        }
        let h = self.scale_height;
        rho_start * h / cos_theta * (1.0 - (-length * cos_theta / h).value_unchecked().exp())
    }

    fn arclength_from_grammage(&self, line: &Line, grammage: Grammage) -> Length {
        let h0 = self.height(&line.r0);
        let cos_theta = line.direction().dot(&self.axis);
        let rho_start = self.density_at_height(h0);
        if cos_theta.value_unchecked().abs() < DEGENERATE_COSINE_THRESHOLD {
            return grammage / rho_start;
        }
        let h = self.scale_height;
        let ratio = 1.0 - (grammage * cos_theta / (rho_start * h)).value_unchecked();
        assert!(
            ratio > 0.0,
            "requested grammage exceeds what is reachable along this line before the density vanishes"
        );
        -h / cos_theta * ratio.ln()
    }
}

/// A [`FlatExponential`]-like model whose axis is re-derived at every query
/// to point away from a fixed pole towards the query location, approximating
/// a spherical (curved) atmosphere locally as a flat exponential (spec §3:
/// "slides the exponential axis to follow the line-of-sight from a fixed
/// pole"). Grammage integrals have no closed form in this approximation, so
/// they are evaluated by quadrature and inverted by bisection.
#[derive(Debug, Clone)]
pub struct SphericalExponential {
    pub pole: Point,
    pub reference_radius: Length,
    pub rho0: MassDensity,
    pub scale_height: Length,
    composition: NuclearComposition,
}

impl SphericalExponential {
    pub fn new(
        pole: Point,
        reference_radius: Length,
        rho0: MassDensity,
        scale_height: Length,
        composition: NuclearComposition,
    ) -> Self {
        Self {
            pole,
            reference_radius,
            rho0,
            scale_height,
            composition,
        }
    }

    fn density_at_radius(&self, radius: Length) -> MassDensity {
        self.rho0
            * (-(radius - self.reference_radius) / self.scale_height)
                .value_unchecked()
                .exp()
    }
}

impl MediumModel for SphericalExponential {
    fn mass_density(&self, point: &Point) -> MassDensity {
        let radius = (*point - self.pole).length();
        self.density_at_radius(radius)
    }

    fn integrated_grammage(&self, line: &Line, length: Length) -> Grammage {
        const STEPS: usize = 256;
        let dl = length / (STEPS as f64);
        let mut total = Grammage::kilograms_per_square_meter(0.0);
        for i in 0..STEPS {
            let s_mid = dl * (i as f64 + 0.5);
            let point = line.position_from_arclength(s_mid);
            let radius = (point - self.pole).length();
            total += self.density_at_radius(radius) * dl;
        }
        total
    }

    fn arclength_from_grammage(&self, line: &Line, grammage: Grammage) -> Length {
        if grammage.value_unchecked() <= 0.0 {
            return Length::meters(0.0);
        }
        let mut lo = Length::meters(0.0);
        let mut hi = Length::meters(1.0);
        while self.integrated_grammage(line, hi) < grammage {
            hi = hi * 2.0;
            assert!(
                hi.value_unchecked() < 1e30,
                "grammage unreachable along this line: density vanishes to zero"
            );
        }
        for _ in 0..64 {
            let mid = (lo + hi) / 2.0;
            if self.integrated_grammage(line, mid) < grammage {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        (lo + hi) / 2.0
    }

    fn nuclear_composition(&self) -> &NuclearComposition {
        &self.composition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CoordinateSystems;
    use crate::units::assert_is_close;
    use crate::units::Vec3Length;
    use crate::units::Vec3Speed;

    fn nitrogen() -> NuclearComposition {
        NuclearComposition::new(vec![7], vec![14.0], vec![1.0])
    }

    #[test]
    fn homogeneous_grammage_round_trips() {
        let systems = CoordinateSystems::new();
        let root = systems.root();
        let model = Homogeneous::new(MassDensity::kilograms_per_cubic_meter(1.2), nitrogen());
        let line = Line::new(
            Point::new(root, Vec3Length::meters(0.0, 0.0, 0.0)),
            Vector::new(root, Vec3Speed::meters_per_second(0.0, 0.0, -1.0)),
        );
        let length = Length::meters(100.0);
        let grammage = model.integrated_grammage(&line, length);
        let recovered = model.arclength_from_grammage(&line, grammage);
        assert_is_close(recovered, length);
    }

    #[test]
    fn flat_exponential_round_trips_non_degenerate() {
        let systems = CoordinateSystems::new();
        let root = systems.root();
        let axis = Vector::new(root, crate::units::Quantity::new_unchecked(glam::DVec3::Z));
        let model = FlatExponential::new(
            Point::new(root, Vec3Length::meters(0.0, 0.0, 0.0)),
            axis,
            MassDensity::kilograms_per_cubic_meter(1.0),
            Length::meters(8000.0),
            nitrogen(),
        );
        let line = Line::new(
            Point::new(root, Vec3Length::meters(0.0, 0.0, 1000.0)),
            Vector::new(root, Vec3Speed::meters_per_second(0.3, 0.1, -0.9)),
        );
        let length = Length::meters(500.0);
        let grammage = model.integrated_grammage(&line, length);
        let recovered = model.arclength_from_grammage(&line, grammage);
        assert_is_close(recovered, length);
    }

    #[test]
    fn flat_exponential_degenerate_orthogonal_case() {
        let systems = CoordinateSystems::new();
        let root = systems.root();
        let axis = Vector::new(root, crate::units::Quantity::new_unchecked(glam::DVec3::Z));
        let model = FlatExponential::new(
            Point::new(root, Vec3Length::meters(0.0, 0.0, 0.0)),
            axis,
            MassDensity::kilograms_per_cubic_meter(1.0),
            Length::meters(8000.0),
            nitrogen(),
        );
        let line = Line::new(
            Point::new(root, Vec3Length::meters(0.0, 0.0, 1000.0)),
            Vector::new(root, Vec3Speed::meters_per_second(1.0, 0.0, 0.0)),
        );
        let length = Length::meters(500.0);
        let grammage = model.integrated_grammage(&line, length);
        assert_is_close(
            grammage,
            model.mass_density(&line.r0) * length,
        );
    }

    #[test]
    fn spherical_exponential_round_trips_approximately() {
        let systems = CoordinateSystems::new();
        let root = systems.root();
        let pole = Point::new(root, Vec3Length::meters(0.0, 0.0, -6_371_000.0));
        let model = SphericalExponential::new(
            pole,
            Length::meters(6_371_000.0),
            MassDensity::kilograms_per_cubic_meter(1.2),
            Length::meters(8000.0),
            nitrogen(),
        );
        let line = Line::new(
            Point::new(root, Vec3Length::meters(0.0, 0.0, 0.0)),
            Vector::new(root, Vec3Speed::meters_per_second(0.0, 0.0, -1.0)),
        );
        let length = Length::meters(2000.0);
        let grammage = model.integrated_grammage(&line, length);
        let recovered = model.arclength_from_grammage(&line, grammage);
        assert!((recovered.value_unchecked() - length.value_unchecked()).abs() < 1.0);
    }
}
