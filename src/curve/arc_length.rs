use std::cell::Ref;

use log::debug;

use super::constants::EPSILON;
use super::mode::EndMode;
use super::result::SplineEvalResult;
use super::spline::Spline;
use super::strategy::Curve;

/// Settings a table was built under. A mismatch makes the table stale.
#[derive(Debug, Copy, Clone, PartialEq)]
struct TableKey {
    end_mode: EndMode,
    curve: Curve,
    samples_per_segment: usize,
}

/// Chord-sampled arc lengths for every segment of a spline.
///
/// `cumulative[i]` is the distance from the start to segment `i`
/// (`cumulative[0] == 0`, last entry == total). `chords` holds, per segment,
/// `samples_per_segment + 1` running lengths at evenly spaced local `t`.
#[derive(Debug, Clone, Default)]
pub(crate) struct ArcLengthTable {
    key: Option<TableKey>,
    samples_per_segment: usize,
    segment_lengths: Vec<f32>,
    cumulative: Vec<f32>,
    chords: Vec<f32>,
}

impl ArcLengthTable {
    fn build(spline: &Spline, key: TableKey) -> Self {
        let segments = spline.segment_count();
        let samples = key.samples_per_segment;

        let mut segment_lengths = Vec::with_capacity(segments);
        let mut cumulative = Vec::with_capacity(segments + 1);
        let mut chords = Vec::with_capacity(segments * (samples + 1));
        let mut total = 0.0;
        cumulative.push(0.0);

        for segment in 0..segments {
            let mut length = 0.0;
            let mut prev = spline.segment_position(segment, 0.0);
            chords.push(0.0);
            for i in 1..=samples {
                let curr = spline.segment_position(segment, i as f32 / samples as f32);
                length += prev.distance(curr);
                chords.push(length);
                prev = curr;
            }
            segment_lengths.push(length);
            total += length;
            cumulative.push(total);
        }

        Self {
            key: Some(key),
            samples_per_segment: samples,
            segment_lengths,
            cumulative,
            chords,
        }
    }

    pub(crate) fn invalidate(&mut self) {
        self.key = None;
    }

    fn is_valid_for(&self, key: &TableKey) -> bool {
        self.key.as_ref() == Some(key)
    }

    pub(crate) fn total(&self) -> f32 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    pub(crate) fn segment_lengths(&self) -> &[f32] {
        &self.segment_lengths
    }

    fn segment_chords(&self, segment: usize) -> &[f32] {
        let stride = self.samples_per_segment + 1;
        &self.chords[segment * stride..(segment + 1) * stride]
    }

    /// Distance from the start of the curve to `local_t` within `segment`.
    fn length_at(&self, segment: usize, local_t: f32) -> f32 {
        let chords = self.segment_chords(segment);
        let samples = self.samples_per_segment;
        let scaled = local_t.clamp(0.0, 1.0) * samples as f32;
        let k = (scaled.floor() as usize).min(samples - 1);
        let frac = scaled - k as f32;
        self.cumulative[segment] + chords[k] + (chords[k + 1] - chords[k]) * frac
    }

    /// Inverse of [`length_at`](Self::length_at) for a distance in `[0, total]`.
    fn locate(&self, distance: f32) -> (usize, f32) {
        let segments = self.segment_lengths.len();
        let segment = self
            .cumulative
            .partition_point(|&c| c <= distance)
            .saturating_sub(1)
            .min(segments - 1);

        let local_distance = distance - self.cumulative[segment];
        let chords = self.segment_chords(segment);
        let samples = self.samples_per_segment;
        let k = chords
            .partition_point(|&c| c <= local_distance)
            .saturating_sub(1)
            .min(samples - 1);

        let span = chords[k + 1] - chords[k];
        let frac = if span > f32::EPSILON {
            ((local_distance - chords[k]) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        (segment, (k as f32 + frac) / samples as f32)
    }
}

impl Spline {
    fn table_key(&self) -> TableKey {
        TableKey {
            end_mode: self.end_mode,
            curve: self.curve,
            samples_per_segment: self.sampling.arc_samples_per_segment.max(1),
        }
    }

    /// Rebuilds the arc-length table if points or settings changed since the last build.
    pub fn update_cache(&self) {
        let key = self.table_key();
        if self.cache.borrow().is_valid_for(&key) {
            return;
        }
        let table = ArcLengthTable::build(self, key);
        debug!(
            "rebuilt arc-length table: {} segments, {} samples each, length {:.4}",
            table.segment_lengths.len(),
            key.samples_per_segment,
            table.total()
        );
        *self.cache.borrow_mut() = table;
    }

    pub(crate) fn length_table(&self) -> Ref<'_, ArcLengthTable> {
        self.update_cache();
        self.cache.borrow()
    }

    pub fn get_length(&self) -> f32 {
        self.length_table().total()
    }

    /// Per-segment arc lengths, in segment order.
    pub fn segment_lengths(&self) -> Vec<f32> {
        self.length_table().segment_lengths().to_vec()
    }

    /// Arc length from the start of the curve to `t`, with `t` clamped to `[0, 1]`.
    pub fn get_length_to(&self, t: f32) -> f32 {
        let table = self.length_table();
        if self.point_count() < 2 || t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return table.total();
        }
        let (segment, local_t) = self.get_segment(t);
        table.length_at(segment, local_t)
    }

    /// Global parameter at arc length `distance` from the start.
    ///
    /// Distances outside `[0, length]` wrap on a Loop spline and clamp otherwise.
    pub fn get_t_at_distance(&self, distance: f32) -> f32 {
        let table = self.length_table();
        let total = table.total();
        if self.point_count() < 2 || total < EPSILON || !distance.is_finite() {
            return 0.0;
        }

        let distance = match self.end_mode {
            EndMode::Loop => distance.rem_euclid(total),
            EndMode::Clamp | EndMode::PingPong => distance.clamp(0.0, total),
        };
        let (segment, local_t) = table.locate(distance);
        (segment as f32 + local_t) / self.segment_count() as f32
    }

    pub fn evaluate_at_distance(&self, distance: f32) -> SplineEvalResult {
        self.evaluate(self.get_t_at_distance(distance))
    }
}
