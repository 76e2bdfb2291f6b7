//! Length-concealing envelope: duplicated boundary markers between two
//! disturbance runs.

use log::debug;
use rand::Rng;
use rand::distributions::{Distribution, Uniform};
use rand_core::CryptoRng;

/// Pads `buffer` in place to exactly `target_len` indices.
///
/// The first and last payload elements are duplicated as boundary markers,
/// then the remaining slack is split at random into two disturbance runs,
/// one on each side of the payload. Each disturbance index is redrawn until
/// it differs from its neighbor, so the only adjacent equal pairs in the
/// result are the markers themselves.
///
/// Callers enforce the preconditions: non-empty buffer, `target_len`
/// greater than the payload length plus both markers, `radix >= 2`.
pub fn wide<R: Rng + CryptoRng + ?Sized>(
    buffer: &mut Vec<usize>,
    target_len: usize,
    radix: usize,
    rng: &mut R,
) {
    debug_assert!(!buffer.is_empty(), "payload must not be empty");
    debug_assert!(target_len > buffer.len() + 2, "target leaves no slack");
    debug_assert!(radix >= 2, "rejection sampling needs two symbols");

    buffer.insert(0, buffer[0]);
    buffer.push(buffer[buffer.len() - 1]);

    let extra = target_len - buffer.len();
    let near = rng.gen_range(0..extra);
    let far = extra - near;
    debug!("wide payload={} near={} far={}", buffer.len() - 2, near, far);

    let dist = Uniform::from(0..radix);
    for run in [near, far] {
        let mut tail = buffer[buffer.len() - 1];
        for _ in 0..run {
            let mut draw = dist.sample(rng);
            while draw == tail {
                draw = dist.sample(rng);
            }
            buffer.push(draw);
            tail = draw;
        }
        buffer.reverse();
    }
}

/// Strips one `wide` envelope.
///
/// Two passes, each locating the first adjacent equal pair, dropping
/// everything before its second element and reversing the remainder. A
/// buffer that never yields a pair was not padded under this key and
/// alphabet; the result is then empty rather than an error.
///
/// The first pair found is trusted to be the genuine marker. For buffers
/// `wide` itself produced that always holds; foreign input can present a
/// coincidental pair and silently decode to garbage.
pub fn unwide(mut buffer: Vec<usize>) -> Vec<usize> {
    for _ in 0..2 {
        match buffer.windows(2).position(|pair| pair[0] == pair[1]) {
            Some(marker) => {
                buffer.drain(..=marker);
                buffer.reverse();
            }
            None => return Vec::new(),
        }
    }
    buffer
}
