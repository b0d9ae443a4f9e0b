// Temporal module - time-domain statistics
//
// Zero trimming, equal-split segmentation and the framed zero-crossing
// rate median. Everything here is pure and deterministic.

/// Number of contiguous segments the trimmed signal is split into for the
/// zero-crossing statistic
pub const SEGMENT_COUNT: usize = 50;

/// Frame length for the per-segment zero-crossing rate
const ZCR_FRAME_LEN: usize = 2048;

/// Hop between successive zero-crossing frames
const ZCR_HOP_LEN: usize = 512;

/// Strip leading and trailing runs of exact-zero samples
///
/// Interior zeros are preserved. Returns an empty slice for an all-zero
/// input; callers treat that as invalid input.
pub fn trim_zeros(samples: &[f32]) -> &[f32] {
    let start = match samples.iter().position(|&s| s != 0.0) {
        Some(idx) => idx,
        None => return &[],
    };
    // A non-zero sample exists, so rposition cannot fail here
    let end = samples.iter().rposition(|&s| s != 0.0).unwrap_or(start);
    &samples[start..=end]
}

/// Median per-segment zero-crossing rate over [`SEGMENT_COUNT`] segments
///
/// The signal is split into SEGMENT_COUNT contiguous segments of
/// as-equal-as-possible length, remainder samples going to the trailing
/// segments. Each segment reduces to one scalar (its mean framed ZCR) and
/// the median of those scalars is returned.
pub fn zcr_median(samples: &[f32]) -> f32 {
    let rates: Vec<f32> = split_points(samples.len(), SEGMENT_COUNT)
        .windows(2)
        .map(|bounds| segment_zcr(&samples[bounds[0]..bounds[1]]))
        .collect();
    median(&rates)
}

/// Segment boundaries for an as-equal-as-possible split
///
/// Returns `count + 1` offsets; segment `i` is `[points[i], points[i+1])`.
/// The `len % count` remainder samples go to the trailing segments.
fn split_points(len: usize, count: usize) -> Vec<usize> {
    let base = len / count;
    let remainder = len % count;
    let mut points = Vec::with_capacity(count + 1);
    let mut offset = 0;
    points.push(offset);
    for i in 0..count {
        offset += base;
        if i >= count - remainder {
            offset += 1;
        }
        points.push(offset);
    }
    points
}

/// Mean framed zero-crossing rate of one segment
///
/// Frames of ZCR_FRAME_LEN samples advance by ZCR_HOP_LEN; each frame's
/// rate is its fraction of sign changes between consecutive samples, and
/// the frame rates are averaged. A segment shorter than one frame is
/// treated as a single frame; an empty segment (possible when the signal
/// has fewer samples than SEGMENT_COUNT) contributes zero.
fn segment_zcr(segment: &[f32]) -> f32 {
    if segment.len() < 2 {
        return 0.0;
    }
    if segment.len() <= ZCR_FRAME_LEN {
        return frame_zcr(segment);
    }

    let mut sum = 0.0;
    let mut frames = 0;
    let mut start = 0;
    while start + ZCR_FRAME_LEN <= segment.len() {
        sum += frame_zcr(&segment[start..start + ZCR_FRAME_LEN]);
        frames += 1;
        start += ZCR_HOP_LEN;
    }
    // Cover the tail when the hop does not land exactly on the end
    if start < segment.len() && segment.len() - start >= 2 {
        sum += frame_zcr(&segment[start..]);
        frames += 1;
    }
    sum / frames as f32
}

/// Fraction of sign changes between consecutive samples in one frame
fn frame_zcr(frame: &[f32]) -> f32 {
    let mut crossings = 0;
    for pair in frame.windows(2) {
        if (pair[1] >= 0.0 && pair[0] < 0.0) || (pair[1] < 0.0 && pair[0] >= 0.0) {
            crossings += 1;
        }
    }
    crossings as f32 / (frame.len() - 1) as f32
}

/// Median of a slice; even-length inputs average the two middle values
pub fn median(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
