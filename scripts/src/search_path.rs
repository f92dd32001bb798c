//! Square-spiral search path generation
//!
//! The path is a sequence of angular offsets, not absolute positions: each
//! step is added to the current pointing to reach the next search point.

/// One step of the search path: signed RA/Dec deltas.
///
/// RA is in hours, Dec in degrees, matching the mount's coordinate items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetStep {
    pub ra: f64,
    pub dec: f64,
}

/// An ordered, immutable sequence of offset steps.
#[derive(Debug, Clone)]
pub struct SearchPath {
    steps: Vec<OffsetStep>,
}

// Segment directions in walk order: +RA, -Dec, -RA, +Dec. Each direction
// moves along exactly one axis; segment lengths grow 1, 1, 2, 2, ... so
// every pair of segments pushes the walk one ring further out.
const DIRECTIONS: [(f64, f64); 4] = [(1.0, 0.0), (0.0, -1.0), (-1.0, 0.0), (0.0, 1.0)];

impl SearchPath {
    /// Generate an outward square spiral of `loops` rings.
    ///
    /// The walk runs segments of length 1, 1, 2, 2, ... up to 2·loops+1
    /// twice, then one homing step that cancels the accumulated offset so
    /// the mount finishes back on its starting point and the whole path sums
    /// to zero on both axes. Total length is (2·loops+1)(2·loops+2)+1 — 57
    /// steps for the default 3 loops.
    ///
    /// A zero step magnitude collapses that axis of every step to zero; the
    /// spiral degenerates to a line (or a single point) and that is fine.
    pub fn generate(loops: u32, step_ra: f64, step_dec: f64) -> Self {
        let max_len = (2 * loops + 1) as usize;
        let mut steps = Vec::with_capacity(max_len * (max_len + 1) + 1);
        let mut sum_ra = 0.0_f64;
        let mut sum_dec = 0.0_f64;

        let mut segment = 0usize;
        loop {
            let length = segment / 2 + 1;
            if length > max_len {
                break;
            }
            let (dir_ra, dir_dec) = DIRECTIONS[segment % 4];
            for _ in 0..length {
                let step = OffsetStep {
                    ra: dir_ra * step_ra,
                    dec: dir_dec * step_dec,
                };
                sum_ra += step.ra;
                sum_dec += step.dec;
                steps.push(step);
            }
            segment += 1;
        }

        // Homing step: back to the origin for a final frame at the GOTO point.
        steps.push(OffsetStep {
            ra: -sum_ra,
            dec: -sum_dec,
        });

        Self { steps }
    }

    /// Wrap an externally built sequence of steps.
    pub fn from_steps(steps: Vec<OffsetStep>) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<OffsetStep> {
        self.steps.get(index).copied()
    }

    pub fn steps(&self) -> &[OffsetStep] {
        &self.steps
    }
}
