use crate::libs::nt::{
    codon_at, complement, is_gap_or_n, is_incomplete, is_start, is_stop, stop_codons,
};
use anyhow::bail;
use regex::Regex;

pub const FRAME_1: u32 = 1;
pub const FRAME_2: u32 = 2;
pub const FRAME_3: u32 = 4;
pub const FRAME_ALL: u32 = FRAME_1 | FRAME_2 | FRAME_3;

pub const EXTEND_START: u32 = 1;
pub const EXTEND_END: u32 = 2;

/// Strand codes as they appear in headers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    Plus = 1,
    Minus = 2,
}

/// One located open reading frame
///
/// `from`/`to` are offsets within the strand buffer the ORF was found on, so
/// minus-strand locations index into the reverse complement, not the forward
/// sequence. `to` is exclusive. `id` is left at zero by the scanner; callers
/// number their ORFs themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceLocation {
    pub id: u32,
    pub from: usize,
    pub to: usize,
    pub strand: Strand,
    pub has_incomplete_start: bool,
    pub has_incomplete_end: bool,
}

lazy_static! {
    static ref ORF_RE: Regex =
        Regex::new(r"(?:^|\s)\[Orf: (\d+), (\d+), (\d+), (\d+), (\d+), (\d+)\]").unwrap();
}

impl std::fmt::Display for SequenceLocation {
    /// The bracketed header token
    ///
    /// ```
    /// # use norf::{SequenceLocation, Strand};
    /// let loc = SequenceLocation {
    ///     id: 5,
    ///     from: 3,
    ///     to: 12,
    ///     strand: Strand::Minus,
    ///     has_incomplete_start: false,
    ///     has_incomplete_end: true,
    /// };
    /// assert_eq!(loc.to_string(), "[Orf: 5, 3, 12, 2, 0, 1]");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "[Orf: {}, {}, {}, {}, {}, {}]",
            self.id,
            self.from,
            self.to,
            self.strand as i32,
            self.has_incomplete_start as i32,
            self.has_incomplete_end as i32,
        )
    }
}

impl SequenceLocation {
    /// Recovers a location from the first `[Orf: ...]` token in a header
    ///
    /// The token must be a whitespace-delimited word with all six numeric
    /// fields present.
    ///
    /// ```
    /// # use norf::{SequenceLocation, Strand};
    /// let loc = SequenceLocation::parse("seq1 [Orf: 5, 3, 12, 2, 0, 1] len=9").unwrap();
    /// assert_eq!(loc.from, 3);
    /// assert_eq!(loc.strand, Strand::Minus);
    /// assert!(SequenceLocation::parse("seq1 plain header").is_err());
    /// ```
    pub fn parse(text: &str) -> anyhow::Result<SequenceLocation> {
        let caps = ORF_RE.captures(text).ok_or_else(|| {
            anyhow::anyhow!("could not find Orf information in header: {}", text)
        })?;

        let strand = match caps[4].parse::<i32>()? {
            1 => Strand::Plus,
            2 => Strand::Minus,
            code => bail!("could not parse Orf strand {} in header: {}", code, text),
        };

        Ok(SequenceLocation {
            id: caps[1].parse()?,
            from: caps[2].parse()?,
            to: caps[3].parse()?,
            strand,
            has_incomplete_start: caps[5].parse::<i32>()? != 0,
            has_incomplete_end: caps[6].parse::<i32>()? != 0,
        })
    }
}

/// Owns one nucleotide sequence plus its reverse complement and scans both
/// strands for open reading frames
pub struct OrfFinder {
    forward: Vec<u8>,
    reverse: Vec<u8>,
    stop_codons: Vec<[u8; 3]>,
}

impl Default for OrfFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl OrfFinder {
    pub fn new() -> Self {
        Self {
            forward: Vec::new(),
            reverse: Vec::new(),
            stop_codons: stop_codons(),
        }
    }

    /// Loads a sequence, replacing any previous contents
    ///
    /// The forward buffer is the uppercased input; the reverse buffer is its
    /// complement read end to start. Returns false, with nothing loaded, if
    /// the input is shorter than one codon or contains a byte outside the
    /// IUPAC alphabet.
    pub fn set(&mut self, seq: &[u8]) -> bool {
        self.forward.clear();
        self.reverse.clear();

        if seq.len() < 3 {
            return false;
        }

        self.forward = seq.to_ascii_uppercase();
        self.reverse = Vec::with_capacity(self.forward.len());
        for i in (0..self.forward.len()).rev() {
            let comp = complement(self.forward[i]);
            if comp == b'.' {
                self.forward.clear();
                self.reverse.clear();
                return false;
            }
            self.reverse.push(comp);
        }

        true
    }

    /// Bases covered by a location, copied out of its strand buffer
    ///
    /// Empty when no sequence is loaded.
    pub fn view(&self, loc: &SequenceLocation) -> Vec<u8> {
        assert!(loc.to > loc.from);

        let buf = match loc.strand {
            Strand::Plus => &self.forward,
            Strand::Minus => &self.reverse,
        };
        if buf.is_empty() {
            return Vec::new();
        }

        buf[loc.from..loc.to].to_vec()
    }

    /// Scans the requested frames of both strands
    ///
    /// Length thresholds are codon counts: an emitted ORF spans more than
    /// `min_length` and at most `max_length` codons and contains at most
    /// `max_gaps` ambiguous codons. A zero frame mask disables that strand.
    pub fn find_all(
        &self,
        min_length: usize,
        max_length: usize,
        max_gaps: usize,
        forward_frames: u32,
        reverse_frames: u32,
        extend_mode: u32,
    ) -> Vec<SequenceLocation> {
        let mut result = Vec::new();

        if forward_frames != 0 {
            self.scan_strand(
                &self.forward,
                min_length,
                max_length,
                max_gaps,
                forward_frames,
                extend_mode,
                Strand::Plus,
                &mut result,
            );
        }
        if reverse_frames != 0 {
            self.scan_strand(
                &self.reverse,
                min_length,
                max_length,
                max_gaps,
                reverse_frames,
                extend_mode,
                Strand::Minus,
                &mut result,
            );
        }

        result
    }

    /// Walks one strand buffer once, running the three frame automata in
    /// lockstep
    ///
    /// A position belongs to the frame `pos % 3`:
    ///   Frame 1:  AGA ATT GCC TGA ...
    ///   Frame 2: A GAA TTG CCT GAA ...
    ///   Frame 3: AG AAT TGC CTG AAT ...
    #[allow(clippy::too_many_arguments)]
    fn scan_strand(
        &self,
        seq: &[u8],
        min_length: usize,
        max_length: usize,
        max_gaps: usize,
        frames: u32,
        extend_mode: u32,
        strand: Strand,
        result: &mut Vec<SequenceLocation>,
    ) {
        const FRAME_BITS: [u32; 3] = [FRAME_1, FRAME_2, FRAME_3];

        if seq.len() < 3 {
            return;
        }

        // Every frame starts out inside an open region, so a stop codon
        // with no start codon before it still yields the leading fragment.
        let mut inside_orf = [true; 3];
        let mut has_start = [false; 3];
        let mut from: [usize; 3] = [0, 1, 2];
        let mut count_gaps = [0usize; 3];
        let mut count_codons = [0usize; 3];

        for pos in 0..=(seq.len() - 3) {
            let frame = pos % 3;
            if frames & FRAME_BITS[frame] == 0 {
                continue;
            }

            let codon = codon_at(seq, pos);
            // the last complete codon of this frame before the buffer ends
            let is_last = is_incomplete(&codon_at(seq, pos + 3));

            // the initial region opened implicitly at the frame offset;
            // record whether it opened on a start codon
            if pos == frame {
                has_start[frame] = is_start(&codon);
            }

            let should_start = if extend_mode & EXTEND_START != 0 {
                !inside_orf[frame] && is_start(&codon)
            } else {
                // reopen right after every stop, start codon or not
                !inside_orf[frame]
            };

            // never open a region on the last codon
            if should_start && !is_last {
                inside_orf[frame] = true;
                has_start[frame] = is_start(&codon);
                from[frame] = pos;
                count_gaps[frame] = 0;
                count_codons[frame] = 0;
            }

            if inside_orf[frame] {
                count_codons[frame] += 1;
                if is_gap_or_n(&codon) {
                    count_gaps[frame] += 1;
                }
            }

            let stop = is_stop(&codon, &self.stop_codons);
            if inside_orf[frame] && (stop || is_last) {
                // keep scanning past a premature stop, looking for a later one
                if extend_mode & EXTEND_END != 0 && stop && count_codons[frame] <= min_length {
                    continue;
                }

                inside_orf[frame] = false;

                // a stop codon is excluded from the region; a region cut off
                // by the buffer end keeps its three terminal bases
                let to = if stop { pos } else { pos + 3 };

                // the first codon of a frame may itself be a stop
                if to == from[frame] {
                    continue;
                }
                debug_assert!(to > from[frame]);

                if count_gaps[frame] > max_gaps
                    || count_codons[frame] > max_length
                    || count_codons[frame] <= min_length
                {
                    continue;
                }

                result.push(SequenceLocation {
                    id: 0,
                    from: from[frame],
                    to,
                    strand,
                    has_incomplete_start: !has_start[frame],
                    has_incomplete_end: !stop,
                });
            }
        }
    }
}
