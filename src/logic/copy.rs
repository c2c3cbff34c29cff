use core::cmp;

use super::CircularBuffer;

struct Parameters {
    dst: usize,
    src: usize,
    len: usize,
    src_pre_wrap_len: usize,
    dst_pre_wrap_len: usize,
}

/// Moves a block of `len` slots from `src` to `dst`, where either block may
/// run past the end of the buffer and continue at slot 0.
///
/// The blocks may overlap in at most one continuous region, i.e.
/// `min(|dst - src|, array_len - |dst - src|) + len <= array_len`.
pub fn wrap_copy<B: CircularBuffer + ?Sized>(buffer: &mut B, dst: usize, src: usize, len: usize) {
    let array_len = buffer.array_len();
    debug_assert!(
        cmp::min(diff(dst, src), array_len - diff(dst, src)) + len <= array_len,
        "wrc dst={} src={} len={} cap={}",
        dst,
        src,
        len,
        array_len
    );

    if src == dst || len == 0 {
        return;
    }

    let dst_after_src = buffer.wrap_sub(dst, src) < len;

    let params = Parameters {
        dst,
        src,
        len,
        src_pre_wrap_len: array_len - src,
        dst_pre_wrap_len: array_len - dst,
    };
    let src_wraps = params.src_pre_wrap_len < len;
    let dst_wraps = params.dst_pre_wrap_len < len;

    match (dst_after_src, src_wraps, dst_wraps) {
        (_, false, false) => buffer.copy(dst, src, len),
        (false, false, true) => dst_wraps_forward(buffer, params),
        (true, false, true) => dst_wraps_backward(buffer, params),
        (false, true, false) => src_wraps_forward(buffer, params),
        (true, true, false) => src_wraps_backward(buffer, params),
        (false, true, true) => both_wrap_forward(buffer, params),
        (true, true, true) => both_wrap_backward(buffer, params),
    }
}

fn diff(a: usize, b: usize) -> usize {
    if a <= b { b - a } else { a - b }
}

// In the pictures below `S` marks the source block, `D` the destination,
// and each numbered row is the buffer after one `copy`.

fn dst_wraps_forward<B: CircularBuffer + ?Sized>(buffer: &mut B, params: Parameters) {
    //    S . . .
    // 1 [a b c d _ _ _ _ _]
    // 2 [_ _ c d _ _ _ a b]
    // 3 [c d _ _ _ _ _ a b]
    //    . .           D .
    let Parameters { dst, src, len, dst_pre_wrap_len, .. } = params;
    buffer.copy(dst, src, dst_pre_wrap_len);
    buffer.copy(0, src + dst_pre_wrap_len, len - dst_pre_wrap_len);
}

fn dst_wraps_backward<B: CircularBuffer + ?Sized>(buffer: &mut B, params: Parameters) {
    //              S . . .
    // 1 [_ _ _ _ _ a b c d]
    // 2 [c d _ _ _ a b _ _]
    // 3 [c d _ _ _ _ _ a b]
    //    . .           D .
    let Parameters { dst, src, len, dst_pre_wrap_len, .. } = params;
    buffer.copy(0, src + dst_pre_wrap_len, len - dst_pre_wrap_len);
    buffer.copy(dst, src, dst_pre_wrap_len);
}

fn src_wraps_forward<B: CircularBuffer + ?Sized>(buffer: &mut B, params: Parameters) {
    //    . .           S .
    // 1 [c d _ _ _ _ _ a b]
    // 2 [c d _ _ _ a b _ _]
    // 3 [_ _ _ _ _ a b c d]
    //              D . . .
    let Parameters { dst, src, len, src_pre_wrap_len, .. } = params;
    buffer.copy(dst, src, src_pre_wrap_len);
    buffer.copy(dst + src_pre_wrap_len, 0, len - src_pre_wrap_len);
}

fn src_wraps_backward<B: CircularBuffer + ?Sized>(buffer: &mut B, params: Parameters) {
    //    . .           S .
    // 1 [c d _ _ _ _ _ a b]
    // 2 [_ _ c d _ _ _ a b]
    // 3 [a b c d _ _ _ _ _]
    //    D . . .
    let Parameters { dst, src, len, src_pre_wrap_len, .. } = params;
    buffer.copy(dst + src_pre_wrap_len, 0, len - src_pre_wrap_len);
    buffer.copy(dst, src, src_pre_wrap_len);
}

fn both_wrap_forward<B: CircularBuffer + ?Sized>(buffer: &mut B, params: Parameters) {
    //    . . .         S .
    // 1 [c d e _ _ _ _ a b]
    // 2 [c d e _ _ _ a b _]
    // 3 [_ d e _ _ _ a b c]
    // 4 [d e _ _ _ _ a b c]
    //    . .         D . .
    let Parameters { dst, src, len, src_pre_wrap_len, dst_pre_wrap_len } = params;
    debug_assert!(dst_pre_wrap_len > src_pre_wrap_len);
    let delta = dst_pre_wrap_len - src_pre_wrap_len;
    buffer.copy(dst, src, src_pre_wrap_len);
    buffer.copy(dst + src_pre_wrap_len, 0, delta);
    buffer.copy(0, delta, len - dst_pre_wrap_len);
}

fn both_wrap_backward<B: CircularBuffer + ?Sized>(buffer: &mut B, params: Parameters) {
    //    . .         S . .
    // 1 [d e _ _ _ _ a b c]
    // 2 [_ d e _ _ _ a b c]
    // 3 [c d e _ _ _ a b _]
    // 4 [c d e _ _ _ _ a b]
    //    . . .         D .
    let Parameters { dst, src, len, src_pre_wrap_len, dst_pre_wrap_len } = params;
    debug_assert!(src_pre_wrap_len > dst_pre_wrap_len);
    let array_len = buffer.array_len();
    let delta = src_pre_wrap_len - dst_pre_wrap_len;
    buffer.copy(delta, 0, len - src_pre_wrap_len);
    buffer.copy(0, array_len - delta, delta);
    buffer.copy(dst, src, dst_pre_wrap_len);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils;

    /// Bare slot array; `head` and `len` are irrelevant to copying.
    struct Slots(Vec<Option<char>>);

    impl Slots {
        fn parse(layout: &str) -> Slots {
            Slots(layout.chars().map(|c| if c == '_' { None } else { Some(c) }).collect())
        }

        fn render(&self) -> String {
            self.0.iter().map(|slot| slot.unwrap_or('_')).collect()
        }
    }

    impl CircularBuffer for Slots {
        fn array_len(&self) -> usize {
            self.0.len()
        }

        fn len(&self) -> usize {
            self.0.iter().filter(|slot| slot.is_some()).count()
        }

        fn head(&self) -> usize {
            0
        }

        fn set_head(&mut self, _head: usize) {}

        fn copy(&mut self, dst: usize, src: usize, len: usize) {
            if dst < src {
                for k in 0..len {
                    self.0[dst + k] = self.0[src + k].take();
                }
            } else {
                for k in (0..len).rev() {
                    self.0[dst + k] = self.0[src + k].take();
                }
            }
        }
    }

    /// Reference: move slot by slot in the order that never clobbers
    /// unread input.
    fn naive(layout: &str, dst: usize, src: usize, len: usize) -> String {
        let mut slots = Slots::parse(layout);
        let cap = slots.0.len();
        let moved: Vec<_> = (0..len)
            .map(|k| slots.0[utils::wrap_add(src, k, cap)].take())
            .collect();
        for (k, slot) in moved.into_iter().enumerate() {
            slots.0[utils::wrap_add(dst, k, cap)] = slot;
        }
        slots.render()
    }

    #[test]
    fn every_wrap_case_matches_naive_move() {
        let layout = "abcdefghi";
        let cap = layout.len();
        for src in 0..cap {
            for dst in 0..cap {
                for len in 0..cap {
                    let gap = cmp::min(diff(dst, src), cap - diff(dst, src));
                    if gap + len > cap {
                        continue;
                    }
                    let mut slots = Slots::parse(layout);
                    wrap_copy(&mut slots, dst, src, len);
                    assert_eq!(
                        slots.render(),
                        naive(layout, dst, src, len),
                        "dst={} src={} len={}",
                        dst,
                        src,
                        len
                    );
                }
            }
        }
    }
}
