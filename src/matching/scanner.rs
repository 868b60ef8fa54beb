//! Similarity-matrix construction and diagonal run extraction.

use log::{debug, trace};

use crate::config::MatcherConfig;
use crate::segment::Segment;

use super::segment_match::SegmentMatch;
use super::similarity::similarity;

/// Dense matrix of pairwise line similarities between two segments.
///
/// Row `i` holds the first segment's line `i` scored against every line
/// of the second segment. Scores are angle-invariant: the rotation
/// between the chains is unknown at this stage.
pub struct SimilarityMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<f32>,
}

impl SimilarityMatrix {
    /// Score every line of `segment1` (rows) against every line of
    /// `segment2` (columns).
    pub fn build(segment1: &Segment, segment2: &Segment, config: &MatcherConfig) -> Self {
        let rows = segment1.len();
        let cols = segment2.len();
        let mut cells = Vec::with_capacity(rows * cols);
        for line1 in segment1.lines() {
            for line2 in segment2.lines() {
                cells.push(similarity(line1, line2, true, &config.similarity));
            }
        }
        Self { rows, cols, cells }
    }

    /// Number of rows (lines of the first segment).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (lines of the second segment).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Similarity at `(row, col)`.
    ///
    /// # Panics
    /// Panics when the position is out of bounds.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col]
    }
}

/// Find all valid aligned sub-chain pairs between two segments.
///
/// Builds the similarity matrix with `segment1` on the rows, walks every
/// diagonal of both families, and turns every run of cells at or above
/// the similarity threshold, of at least the effective minimum length,
/// into a candidate. Candidates that fail offset estimation are dropped.
///
/// The down-right family pairs both chains walked in the same direction.
/// The down-left family pairs `segment1` walked forward with `segment2`
/// walked backward, which is how reversed sub-chains are found.
pub fn compare_segments(
    segment1: &Segment,
    segment2: &Segment,
    config: &MatcherConfig,
) -> Vec<SegmentMatch> {
    let mut matches = Vec::new();

    let rows = segment1.len();
    let cols = segment2.len();
    // A single line pair has no neighbours to agree with.
    if rows == 0 || cols == 0 || (rows == 1 && cols == 1) {
        return matches;
    }

    let matrix = SimilarityMatrix::build(segment1, segment2, config);
    for row in 0..rows {
        trace!(
            "[Scan] row {}: {:?}",
            row,
            (0..cols).map(|col| matrix.at(row, col)).collect::<Vec<_>>()
        );
    }

    let scanner = DiagonalScanner {
        matrix: &matrix,
        segment1,
        segment2,
        config,
    };

    // Down-right diagonals: seeds along the first row, then down the
    // first column.
    for col in 0..cols {
        scanner.scan((0, col), 1, &mut matches);
    }
    for row in 1..rows {
        scanner.scan((row, 0), 1, &mut matches);
    }

    // Down-left diagonals: seeds along the first row, then down the last
    // column.
    for col in 0..cols {
        scanner.scan((0, col), -1, &mut matches);
    }
    for row in 1..rows {
        scanner.scan((row, cols - 1), -1, &mut matches);
    }

    debug!(
        "[Scan] {}x{} matrix produced {} valid matches",
        rows,
        cols,
        matches.len()
    );
    matches
}

struct DiagonalScanner<'a> {
    matrix: &'a SimilarityMatrix,
    segment1: &'a Segment,
    segment2: &'a Segment,
    config: &'a MatcherConfig,
}

impl DiagonalScanner<'_> {
    /// Walk one diagonal from `seed`, accumulating runs of cells at or
    /// above the similarity threshold and emitting each long-enough run.
    fn scan(&self, seed: (usize, usize), col_step: isize, matches: &mut Vec<SegmentMatch>) {
        let threshold = self.config.scanning.similarity_threshold;
        let rows = self.matrix.rows() as isize;
        let cols = self.matrix.cols() as isize;

        let mut row = seed.0 as isize;
        let mut col = seed.1 as isize;
        let mut run_start = (0usize, 0usize);
        let mut run_len = 0usize;

        while row < rows && (0..cols).contains(&col) {
            if self.matrix.at(row as usize, col as usize) >= threshold {
                if run_len == 0 {
                    run_start = (row as usize, col as usize);
                }
                run_len += 1;
            } else {
                self.emit(run_start, run_len, col_step, matches);
                run_len = 0;
            }
            row += 1;
            col += col_step;
        }
        self.emit(run_start, run_len, col_step, matches);
    }

    /// Turn a finished run into a candidate and keep it when offset
    /// estimation succeeds.
    fn emit(
        &self,
        run_start: (usize, usize),
        run_len: usize,
        col_step: isize,
        matches: &mut Vec<SegmentMatch>,
    ) {
        if run_len < self.config.scanning.effective_min_run_length() {
            return;
        }

        let end_row = run_start.0 + run_len - 1;
        let end_col = (run_start.1 as isize + col_step * (run_len as isize - 1)) as usize;
        let mut candidate = SegmentMatch::from_ranges(
            self.segment1,
            run_start.0,
            end_row,
            self.segment2,
            run_start.1,
            end_col,
        );
        match candidate.compute_offsets(&self.config.validation) {
            Ok(()) => {
                debug!(
                    "[Scan] accepted rows {}-{} cols {}-{}: rotation {:.3}, flipped {}",
                    run_start.0,
                    end_row,
                    run_start.1,
                    end_col,
                    candidate.rotation(),
                    candidate.flipped()
                );
                matches.push(candidate);
            }
            Err(err) => {
                trace!(
                    "[Scan] dropped rows {}-{} cols {}-{}: {}",
                    run_start.0,
                    end_row,
                    run_start.1,
                    end_col,
                    err
                );
            }
        }
    }
}
