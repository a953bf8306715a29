use rand::Rng;

use crate::units::CrossSection;

/// Nuclear composition of a medium: a list of species with matched number
/// fractions summing to 1 (spec §3 `NuclearComposition`).
///
/// `species` holds an opaque per-component identifier (an element's atomic
/// number, or a PDG-style nuclear code); `mass_numbers` the matching average
/// mass number `A` of that component, used to precompute the composition's
/// overall average `A`.
#[derive(Debug, Clone)]
pub struct NuclearComposition {
    species: Vec<i32>,
    mass_numbers: Vec<f64>,
    fractions: Vec<f64>,
    average_mass_number: f64,
}

const FRACTION_SUM_TOLERANCE: f64 = 1e-3;

impl NuclearComposition {
    pub fn new(species: Vec<i32>, mass_numbers: Vec<f64>, fractions: Vec<f64>) -> Self {
        assert_eq!(
            species.len(),
            fractions.len(),
            "species and fractions must have matching lengths"
        );
        assert_eq!(
            species.len(),
            mass_numbers.len(),
            "species and mass numbers must have matching lengths"
        );
        let sum: f64 = fractions.iter().sum();
        assert!(
            (sum - 1.0).abs() < FRACTION_SUM_TOLERANCE,
            "nuclear composition fractions must sum to 1 within {FRACTION_SUM_TOLERANCE}, got {sum}"
        );
        let average_mass_number = fractions
            .iter()
            .zip(&mass_numbers)
            .map(|(f, a)| f * a)
            .sum();
        Self {
            species,
            mass_numbers,
            fractions,
            average_mass_number,
        }
    }

    pub fn species(&self) -> &[i32] {
        &self.species
    }

    pub fn fractions(&self) -> &[f64] {
        &self.fractions
    }

    pub fn mass_numbers(&self) -> &[f64] {
        &self.mass_numbers
    }

    pub fn average_mass_number(&self) -> f64 {
        self.average_mass_number
    }

    /// `sum_i fraction_i * f(i)` over components, e.g. a weighted molar mass.
    pub fn weighted_sum(&self, f: impl Fn(usize) -> f64) -> f64 {
        self.fractions
            .iter()
            .enumerate()
            .map(|(i, frac)| frac * f(i))
            .sum()
    }

    /// Samples one component index, weighted by `fraction_i * cross_section_i`
    /// (spec §3, §B: target selection for an interaction generator).
    pub fn sample_target(&self, cross_sections: &[CrossSection], rng: &mut impl Rng) -> usize {
        assert_eq!(
            cross_sections.len(),
            self.species.len(),
            "one cross section is required per composition component"
        );
        let weights: Vec<f64> = self
            .fractions
            .iter()
            .zip(cross_sections)
            .map(|(f, cs)| f * cs.value_unchecked())
            .collect();
        let total: f64 = weights.iter().sum();
        assert!(total > 0.0, "sample_target called with all-zero weights");
        let sample = rng.gen::<f64>() * total;
        let mut accum = 0.0;
        for (i, w) in weights.iter().enumerate() {
            accum += w;
            if sample < accum {
                return i;
            }
        }
        weights.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn average_mass_number_is_weighted() {
        let comp = NuclearComposition::new(vec![7, 8], vec![14.0, 16.0], vec![0.8, 0.2]);
        assert!((comp.average_mass_number() - (0.8 * 14.0 + 0.2 * 16.0)).abs() < 1e-9);
    }

    #[test]
    #[should_panic]
    fn fractions_must_sum_to_one() {
        NuclearComposition::new(vec![7, 8], vec![14.0, 16.0], vec![0.5, 0.2]);
    }

    #[test]
    fn sample_target_respects_zero_cross_section() {
        let comp = NuclearComposition::new(vec![7, 8], vec![14.0, 16.0], vec![0.5, 0.5]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..100 {
            let idx = comp.sample_target(
                &[CrossSection::square_meters(0.0), CrossSection::square_meters(1.0)],
                &mut rng,
            );
            assert_eq!(idx, 1);
        }
    }
}
