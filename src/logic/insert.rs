use super::CircularBuffer;

/// How room is made for an element inserted at a logical index.
///
/// Key for the pictures: H - head, I - insertion point, A - the element
/// that ends up after the inserted one, o - element, M - moved.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Placement {
    /// Insertion at `len`; the slot after the last element is already free.
    Append,
    /// Insertion at 0; the head steps back onto the free slot before it.
    Prepend,
    /// The insertion point lies between the head and the end of the buffer
    /// and the head is off slot 0, so the prefix moves one slot left.
    ShiftHeadward,
    /// The suffix from the insertion point moves one slot right.
    ShiftTailward,
}

impl Placement {
    /// Picks the placement for inserting at `index`.
    ///
    /// The buffer must already have a free slot, so any growth has happened
    /// and `head` is the post-growth head.
    pub fn choose<B: CircularBuffer + ?Sized>(buffer: &B, index: usize) -> Placement {
        debug_assert!(index <= buffer.len());
        debug_assert!(buffer.len() < buffer.array_len());

        if index == buffer.len() {
            return Placement::Append;
        }
        if index == 0 {
            return Placement::Prepend;
        }
        let head = buffer.head();
        if buffer.real_index(index) > head && head != 0 {
            Placement::ShiftHeadward
        } else {
            Placement::ShiftTailward
        }
    }
}

/// Opens a vacant slot at logical `index` and returns its physical position.
///
/// Only the head may change; the caller writes the element and accounts for
/// the new length.
pub fn open_slot<B: CircularBuffer + ?Sized>(buffer: &mut B, index: usize) -> usize {
    match Placement::choose(buffer, index) {
        Placement::Append => buffer.real_index(index),
        Placement::Prepend => {
            //       H
            //      [A o o o . . . .]
            //
            //                     H
            //      [A o o o . . . I]
            let new_head = buffer.wrap_sub(buffer.head(), 1);
            buffer.set_head(new_head);
            new_head
        }
        Placement::ShiftHeadward => {
            //               H   I
            //      [o o . . o o A o o o]
            //
            //             H   I
            //      [o o . o o I A o o o]
            //             M M
            //
            // `head != 0` and `real > head`, so the run `head..real` neither
            // wraps nor lands on the wrap point.
            let head = buffer.head();
            let real = buffer.real_index(index);
            buffer.copy(head - 1, head, real - head);
            buffer.set_head(head - 1);
            real - 1
        }
        Placement::ShiftTailward => {
            //       H     I
            //      [o o o A o o . . .]
            //
            //       H     I
            //      [o o o I A o o . .]
            //               M M M
            let real = buffer.real_index(index);
            let dst = buffer.wrap_add(real, 1);
            let count = buffer.len() - index;
            buffer.wrap_copy(dst, real, count);
            real
        }
    }
}
