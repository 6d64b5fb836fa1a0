//! Standard IUB/IUPAC Nucleic Acid Codes
//!
//! Code =>  Nucleic Acid(s)
//!  A   =>  Adenine
//!  C   =>  Cytosine
//!  G   =>  Guanine
//!  T   =>  Thymine
//!  U   =>  Uracil
//!  M   =>  A or C (amino)
//!  R   =>  A or G (purine)
//!  W   =>  A or T (weak)
//!  S   =>  C or G (strong)
//!  Y   =>  C or T (pyrimidine)
//!  K   =>  G or T (keto)
//!  V   =>  A or C or G
//!  H   =>  A or C or T
//!  D   =>  A or G or T
//!  B   =>  C or G or T
//!  N   =>  A or G or C or T (any)

use itertools::iproduct;

/// Maps an ASCII char to a base index
///
/// A = 65, a = 97  => 0
/// C = 67, c = 99  => 1
/// G = 71, g = 103 => 2
/// T = 84, t = 116 => 3
/// U = 85, u = 117 => 3
/// Ambiguous codes => 4
/// Invalid => 255
pub static NT_VAL: &'static [u8; 256] = &{
    let mut array = [255; 256];

    array[b'A' as usize] = 0;
    array[b'a' as usize] = 0;

    array[b'C' as usize] = 1;
    array[b'c' as usize] = 1;

    array[b'G' as usize] = 2;
    array[b'g' as usize] = 2;

    array[b'T' as usize] = 3;
    array[b't' as usize] = 3;
    array[b'U' as usize] = 3;
    array[b'u' as usize] = 3;

    array[b'M' as usize] = 4;
    array[b'm' as usize] = 4;
    array[b'R' as usize] = 4;
    array[b'r' as usize] = 4;
    array[b'W' as usize] = 4;
    array[b'w' as usize] = 4;
    array[b'S' as usize] = 4;
    array[b's' as usize] = 4;
    array[b'Y' as usize] = 4;
    array[b'y' as usize] = 4;
    array[b'K' as usize] = 4;
    array[b'k' as usize] = 4;
    array[b'V' as usize] = 4;
    array[b'v' as usize] = 4;
    array[b'H' as usize] = 4;
    array[b'h' as usize] = 4;
    array[b'D' as usize] = 4;
    array[b'd' as usize] = 4;
    array[b'B' as usize] = 4;
    array[b'b' as usize] = 4;
    array[b'N' as usize] = 4;
    array[b'n' as usize] = 4;

    array
};

/// Watson-Crick complement of every IUPAC code, case preserved
///
/// A<->T, C<->G, R<->Y, K<->M, B<->V, D<->H; S, W and N are their own
/// complements. U maps to A, so reverse-complementing RNA yields DNA.
/// Every other byte maps to the sentinel `.`.
pub static COMPLEMENT: &'static [u8; 256] = &{
    let mut array = [b'.'; 256];

    array[b'A' as usize] = b'T';
    array[b'a' as usize] = b't';
    array[b'T' as usize] = b'A';
    array[b't' as usize] = b'a';
    array[b'U' as usize] = b'A';
    array[b'u' as usize] = b'a';

    array[b'C' as usize] = b'G';
    array[b'c' as usize] = b'g';
    array[b'G' as usize] = b'C';
    array[b'g' as usize] = b'c';

    array[b'R' as usize] = b'Y';
    array[b'r' as usize] = b'y';
    array[b'Y' as usize] = b'R';
    array[b'y' as usize] = b'r';

    array[b'K' as usize] = b'M';
    array[b'k' as usize] = b'm';
    array[b'M' as usize] = b'K';
    array[b'm' as usize] = b'k';

    array[b'B' as usize] = b'V';
    array[b'b' as usize] = b'v';
    array[b'V' as usize] = b'B';
    array[b'v' as usize] = b'b';

    array[b'D' as usize] = b'H';
    array[b'd' as usize] = b'h';
    array[b'H' as usize] = b'D';
    array[b'h' as usize] = b'd';

    array[b'S' as usize] = b'S';
    array[b's' as usize] = b's';
    array[b'W' as usize] = b'W';
    array[b'w' as usize] = b'w';
    array[b'N' as usize] = b'N';
    array[b'n' as usize] = b'n';

    array
};

/// Complement of a single base
///
/// ```
/// # use norf::complement;
/// assert_eq!(complement(b'A'), b'T');
/// assert_eq!(complement(b'u'), b'a');
/// assert_eq!(complement(b'@'), b'.');
/// ```
pub fn complement(base: u8) -> u8 {
    COMPLEMENT[base as usize]
}

/// Reverse complement of a byte slice, case preserved
///
/// Fails on any byte outside the IUPAC alphabet.
///
/// ```
/// # use norf::rev_comp;
/// assert_eq!(rev_comp(b"ACGTU").unwrap(), b"AACGT");
/// assert!(rev_comp(b"AC GT").is_err());
/// ```
pub fn rev_comp(seq: &[u8]) -> anyhow::Result<Vec<u8>> {
    let mut out = Vec::with_capacity(seq.len());
    for &base in seq.iter().rev() {
        let comp = complement(base);
        if comp == b'.' {
            anyhow::bail!("cannot complement byte {:?}", base as char);
        }
        out.push(comp);
    }
    Ok(out)
}

/// The standard genetic code, block -> row -> column
pub static AA_TAB: &'static [[[char; 4]; 4]; 4] = &[
    [
        ['K', 'N', 'K', 'N'], // AAA, AAC, AAG, AAU/AAT
        ['T', 'T', 'T', 'T'], // ACA, ACC, ACG, ACU/ACT
        ['R', 'S', 'R', 'S'], // AGA, AGC, AGG, AGU/AGT
        ['I', 'I', 'M', 'I'], // AUA/ATA, AUC/ATC, AUG/ATG, AUU/ATT
    ],
    [
        ['Q', 'H', 'Q', 'H'], // CAA, CAC, CAG, CAU/CAT
        ['P', 'P', 'P', 'P'], // CCA, CCC, CCG, CCU/CCT
        ['R', 'R', 'R', 'R'], // CGA, CGC, CGG, CGU/CGT
        ['L', 'L', 'L', 'L'], // CUA/CTA, CUC/CTC, CUG/CTG, CUU/CTT
    ],
    [
        ['E', 'D', 'E', 'D'], // GAA, GAC, GAG, GAU/GAT
        ['A', 'A', 'A', 'A'], // GCA, GCC, GCG, GCU/GCT
        ['G', 'G', 'G', 'G'], // GGA, GGC, GGG, GGU/GGT
        ['V', 'V', 'V', 'V'], // GUA/GTA, GUC/GTC, GUG/GTG, GUU/GTT
    ],
    [
        ['*', 'Y', '*', 'Y'], // UAA/TAA, UAC/TAC, UAG/TAG, UAU/TAT
        ['S', 'S', 'S', 'S'], // UCA/TCA, UCC/TCC, UCG/TCG, UCU/TCT
        ['*', 'C', 'W', 'C'], // UGA/TGA, UGC/TGC, UGG/TGG, UGU/TGT
        ['L', 'F', 'L', 'F'], // UUA/TTA, UUC/TTC, UUG/TTG, UUU/TTT
    ],
];

/// Translates one codon; ambiguous or invalid codons yield 'X'
///
/// ```
/// # use norf::codon_to_aa;
/// assert_eq!(codon_to_aa(b"ATG"), 'M');
/// assert_eq!(codon_to_aa(b"UGA"), '*');
/// assert_eq!(codon_to_aa(b"ANG"), 'X');
/// ```
pub fn codon_to_aa(codon: &[u8; 3]) -> char {
    let block = NT_VAL[codon[0] as usize];
    let row = NT_VAL[codon[1] as usize];
    let col = NT_VAL[codon[2] as usize];

    if block > 3 || row > 3 || col > 3 {
        return 'X';
    }

    AA_TAB[block as usize][row as usize][col as usize]
}

/// Stop codons of the standard genetic code: TAA, TAG, TGA
pub fn stop_codons() -> Vec<[u8; 3]> {
    const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

    iproduct!(BASES, BASES, BASES)
        .filter(|&(b0, b1, b2)| codon_to_aa(&[b0, b1, b2]) == '*')
        .map(|(b0, b1, b2)| [b0, b1, b2])
        .collect()
}

/// Three bases starting at `pos`, NUL-filled past the end of the buffer
pub fn codon_at(seq: &[u8], pos: usize) -> [u8; 3] {
    std::array::from_fn(|i| seq.get(pos + i).copied().unwrap_or(0))
}

/// A codon that ran off the end of the buffer
pub fn is_incomplete(codon: &[u8; 3]) -> bool {
    codon.contains(&0)
}

/// ATG, or AUG for RNA
pub fn is_start(codon: &[u8; 3]) -> bool {
    matches!(*codon, [b'A', b'T', b'G'] | [b'A', b'U', b'G'])
}

/// Matches against a caller-supplied stop table, folding U to T first
///
/// ```
/// # use norf::{is_stop, stop_codons};
/// let stops = stop_codons();
/// assert!(is_stop(b"UGA", &stops));
/// assert!(!is_stop(b"TGG", &stops));
/// ```
pub fn is_stop(codon: &[u8; 3], stop_codons: &[[u8; 3]]) -> bool {
    let folded = codon.map(|base| if base == b'U' { b'T' } else { base });
    stop_codons.iter().any(|stop| *stop == folded)
}

/// Any base that is N or has no defined complement
pub fn is_gap_or_n(codon: &[u8; 3]) -> bool {
    codon
        .iter()
        .any(|&base| base == b'N' || complement(base) == b'.')
}
