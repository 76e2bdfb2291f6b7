//! Additive key-stream arithmetic over alphabet indices.

/// Direction of a key-stream pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// Applies the repeating key to `buffer` in place.
///
/// `out[i] = (buffer[i] +/- key[i mod k]) mod radix`, with the reduction done
/// as a single conditional wrap. Operands must already lie in `[0, radix)`,
/// which keeps the full modulo unnecessary.
pub fn transform(buffer: &mut [usize], key: &[usize], radix: usize, direction: Direction) {
    debug_assert!(!key.is_empty(), "key stream must not be empty");
    debug_assert!(radix > 0);
    for (offset, slot) in buffer.iter_mut().enumerate() {
        let step = key[offset % key.len()];
        debug_assert!(*slot < radix && step < radix, "operand outside alphabet");
        *slot = match direction {
            Direction::Forward => {
                let sum = *slot + step;
                if sum < radix { sum } else { sum - radix }
            }
            Direction::Reverse => {
                if *slot >= step {
                    *slot - step
                } else {
                    *slot + radix - step
                }
            }
        };
    }
}
