use phf::{Map, phf_map};

/// Mass of one water molecule (average isotopic composition), lost per peptide bond.
pub const WATER_MASS: f64 = 18.0153;

/// Average masses of the free amino acids in Daltons.
#[rustfmt::skip]
pub static RESIDUE_MASSES: Map<char, f64> = phf_map! {
    // --- Aliphatic ---
    'A' => 89.0932,  'G' => 75.0666,  'I' => 131.1729, 'L' => 131.1729,
    'P' => 115.1305, 'V' => 117.1463,
    // --- Aromatic ---
    'F' => 165.1891, 'W' => 204.2252, 'Y' => 181.1885,
    // --- Polar, uncharged ---
    'C' => 121.1582, 'M' => 149.2113, 'N' => 132.1179, 'Q' => 146.1445,
    'S' => 105.0926, 'T' => 119.1192,
    // --- Charged ---
    'D' => 133.1027, 'E' => 147.1293, 'H' => 155.1546, 'K' => 146.1876,
    'R' => 174.2010,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charge {
    Positive,
    Negative,
}

pub const N_TERMINUS_PKA: f64 = 7.5;
pub const C_TERMINUS_PKA: f64 = 3.55;

/// Side-chain pKa values of the ionisable residues (Bjellqvist scale).
#[rustfmt::skip]
pub static SIDE_CHAIN_PKA: Map<char, (f64, Charge)> = phf_map! {
    'K' => (10.0, Charge::Positive),
    'R' => (12.0, Charge::Positive),
    'H' => (5.98, Charge::Positive),
    'D' => (4.05, Charge::Negative),
    'E' => (4.45, Charge::Negative),
    'C' => (9.0, Charge::Negative),
    'Y' => (10.0, Charge::Negative),
};

/// N-terminal amine pKa, keyed by the first residue of the chain.
#[rustfmt::skip]
pub static N_TERMINAL_PKA: Map<char, f64> = phf_map! {
    'A' => 7.59, 'M' => 7.0, 'S' => 6.93, 'P' => 8.36,
    'T' => 6.82, 'V' => 7.44, 'E' => 7.7,
};

/// C-terminal carboxyl pKa, keyed by the last residue of the chain.
pub static C_TERMINAL_PKA: Map<char, f64> = phf_map! {
    'D' => 4.55,
    'E' => 4.75,
};

/// Returns `true` for the 20 standard one-letter amino-acid codes.
#[inline]
pub fn is_standard_residue(code: char) -> bool {
    RESIDUE_MASSES.contains_key(&code)
}
