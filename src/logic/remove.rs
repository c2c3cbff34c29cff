use super::CircularBuffer;

/// How the hole left by a removed element is closed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Closing {
    /// The first element went away; the head steps forward.
    Front,
    /// The last element went away; nothing moves.
    Back,
    /// Everything after the hole moves one slot left, across the wrap point
    /// if need be.
    ShiftSuffix,
}

impl Closing {
    pub fn choose<B: CircularBuffer + ?Sized>(buffer: &B, index: usize) -> Closing {
        debug_assert!(index < buffer.len());

        if index == 0 {
            Closing::Front
        } else if index == buffer.len() - 1 {
            Closing::Back
        } else {
            Closing::ShiftSuffix
        }
    }
}

/// Closes the vacant slot at logical `index`, whose element the caller has
/// already taken out. The caller still owns the length bookkeeping.
pub fn close_slot<B: CircularBuffer + ?Sized>(buffer: &mut B, index: usize) {
    match Closing::choose(buffer, index) {
        Closing::Front => {
            let new_head = buffer.wrap_add(buffer.head(), 1);
            buffer.set_head(new_head);
        }
        Closing::Back => {}
        Closing::ShiftSuffix => {
            //               H     R
            //      [o o . . o o o x o o o]
            //
            //               H
            //      [o . . . o o o o o o o]
            //       M             M M M M
            let real = buffer.real_index(index);
            let src = buffer.wrap_add(real, 1);
            let count = buffer.len() - index - 1;
            buffer.wrap_copy(real, src, count);
        }
    }
}
