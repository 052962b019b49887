use super::residues::{
    C_TERMINAL_PKA, C_TERMINUS_PKA, Charge, N_TERMINAL_PKA, N_TERMINUS_PKA, RESIDUE_MASSES,
    SIDE_CHAIN_PKA, WATER_MASS,
};
use thiserror::Error;

pub const PH_MIN: f64 = 0.0;
pub const PH_MAX: f64 = 14.0;
/// Width of the pH bracket at which bisection stops.
pub const PI_TOLERANCE: f64 = 1e-4;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PropertyError {
    #[error("Unsupported residue '{residue}' at position {position}")]
    UnsupportedResidue { residue: char, position: usize },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProteinProperties {
    pub length: usize,
    pub molecular_weight: f64,
    pub isoelectric_point: f64,
}

impl ProteinProperties {
    /// Computes length, molecular weight and isoelectric point of `sequence`.
    ///
    /// # Errors
    ///
    /// Fails with [`PropertyError::UnsupportedResidue`] on the first symbol outside the
    /// 20 standard amino acids.
    pub fn compute(sequence: &str) -> Result<Self, PropertyError> {
        Ok(Self {
            length: sequence.chars().count(),
            molecular_weight: molecular_weight(sequence)?,
            isoelectric_point: isoelectric_point(sequence)?,
        })
    }
}

fn validate(sequence: &str) -> Result<(), PropertyError> {
    match sequence
        .chars()
        .enumerate()
        .find(|(_, c)| !RESIDUE_MASSES.contains_key(c))
    {
        Some((i, residue)) => Err(PropertyError::UnsupportedResidue {
            residue,
            position: i + 1,
        }),
        None => Ok(()),
    }
}

/// Average molecular weight in Daltons: residue masses minus one water per peptide bond.
/// The empty sequence weighs one water.
pub fn molecular_weight(sequence: &str) -> Result<f64, PropertyError> {
    validate(sequence)?;
    let mut total = 0.0;
    let mut residues = 0usize;
    for code in sequence.chars() {
        total += RESIDUE_MASSES.get(&code).copied().unwrap_or_default();
        residues += 1;
    }
    Ok(total - (residues as f64 - 1.0) * WATER_MASS)
}

/// Henderson-Hasselbalch charge model of a peptide.
#[derive(Debug, Clone)]
pub struct ChargeModel {
    positive: Vec<(f64, f64)>, // (pKa, count)
    negative: Vec<(f64, f64)>,
}

impl ChargeModel {
    pub fn new(sequence: &str) -> Result<Self, PropertyError> {
        validate(sequence)?;

        let first = sequence.chars().next();
        let last = sequence.chars().next_back();
        let n_term = first
            .and_then(|c| N_TERMINAL_PKA.get(&c).copied())
            .unwrap_or(N_TERMINUS_PKA);
        let c_term = last
            .and_then(|c| C_TERMINAL_PKA.get(&c).copied())
            .unwrap_or(C_TERMINUS_PKA);

        let mut positive = vec![(n_term, 1.0)];
        let mut negative = vec![(c_term, 1.0)];
        for (code, &(pka, charge)) in SIDE_CHAIN_PKA.entries() {
            let count = sequence.chars().filter(|c| c == code).count();
            if count == 0 {
                continue;
            }
            match charge {
                Charge::Positive => positive.push((pka, count as f64)),
                Charge::Negative => negative.push((pka, count as f64)),
            }
        }

        Ok(Self { positive, negative })
    }

    /// Net charge at `ph`. Strictly decreasing in `ph`.
    pub fn charge_at(&self, ph: f64) -> f64 {
        let positive: f64 = self
            .positive
            .iter()
            .map(|&(pka, count)| count / (10f64.powf(ph - pka) + 1.0))
            .sum();
        let negative: f64 = self
            .negative
            .iter()
            .map(|&(pka, count)| count / (10f64.powf(pka - ph) + 1.0))
            .sum();
        positive - negative
    }

    /// Bisects [`PH_MIN`, `PH_MAX`] for the pH at which the net charge crosses zero.
    pub fn isoelectric_point(&self) -> f64 {
        let (mut low, mut high) = (PH_MIN, PH_MAX);
        while high - low > PI_TOLERANCE {
            let mid = (low + high) / 2.0;
            if self.charge_at(mid) > 0.0 {
                low = mid;
            } else {
                high = mid;
            }
        }
        (low + high) / 2.0
    }
}

pub fn isoelectric_point(sequence: &str) -> Result<f64, PropertyError> {
    Ok(ChargeModel::new(sequence)?.isoelectric_point())
}
