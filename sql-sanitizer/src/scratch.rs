//! Process-wide reusable scratch buffers for the sanitize engine. The
//! scanner needs two growable text buffers per call (`sanitized` and
//! `summary`); allocating fresh `String`s on every call would dominate the
//! cost for short, frequently-repeated statements, so each buffer is backed
//! by a process-wide `String` that callers attempt to claim for the
//! duration of a call.
//!
//! A claim is a `Mutex::try_lock`: success clears and reuses the buffer,
//! released via `Drop` when the guard goes out of scope; failure (another
//! call already holds it) falls back to a private, input-sized allocation.
//! The two buffers are claimed independently, so `sanitized` and `summary`
//! of the same call never contend with each other.

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard};

/// Lower bound on the shared buffers' capacity once first claimed.
const SCRATCH_CAPACITY_HINT: usize = 1000;

static SANITIZED_SCRATCH: Mutex<String> = Mutex::new(String::new());
static SUMMARY_SCRATCH: Mutex<String> = Mutex::new(String::new());

/// A text buffer that is either a claimed slot in the process-wide pool or
/// a private, per-call allocation. Either way it derefs to `String` so
/// callers don't need to care which.
pub(crate) enum ScratchBuffer {
    Pooled(MutexGuard<'static, String>),
    Private(String),
}

impl ScratchBuffer {
    /// Extracts the accumulated text as an owned, independent `String`,
    /// leaving a pooled buffer cleared and ready for its next claimant.
    pub(crate) fn into_owned(mut self) -> String {
        let owned = self.clone();
        self.clear();
        owned
    }
}

impl Deref for ScratchBuffer {
    type Target = String;

    fn deref(&self) -> &String {
        match self {
            ScratchBuffer::Pooled(guard) => guard,
            ScratchBuffer::Private(s) => s,
        }
    }
}

impl DerefMut for ScratchBuffer {
    fn deref_mut(&mut self) -> &mut String {
        match self {
            ScratchBuffer::Pooled(guard) => guard,
            ScratchBuffer::Private(s) => s,
        }
    }
}

fn claim(slot: &'static Mutex<String>, hint_capacity: usize) -> ScratchBuffer {
    match slot.try_lock() {
        Ok(mut guard) => {
            guard.clear();
            if guard.capacity() < SCRATCH_CAPACITY_HINT {
                guard.reserve(SCRATCH_CAPACITY_HINT - guard.capacity());
            }
            ScratchBuffer::Pooled(guard)
        }
        Err(_) => ScratchBuffer::Private(String::with_capacity(hint_capacity)),
    }
}

/// Claims the shared `sanitized` buffer, or a private one sized for `input_len`.
pub(crate) fn claim_sanitized(input_len: usize) -> ScratchBuffer {
    claim(&SANITIZED_SCRATCH, input_len)
}

/// Claims the shared `summary` buffer, or a private one sized for `input_len`.
pub(crate) fn claim_summary(input_len: usize) -> ScratchBuffer {
    claim(&SUMMARY_SCRATCH, input_len.min(SCRATCH_CAPACITY_HINT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pooled_buffer_is_cleared_on_claim() {
        {
            let mut buf = claim_sanitized(16);
            buf.push_str("leftover");
        }
        let buf = claim_sanitized(16);
        assert_eq!(buf.as_str(), "");
    }

    #[test]
    fn concurrent_claim_falls_back_to_private() {
        let first = claim_sanitized(16);
        let second = claim_sanitized(16);
        assert!(matches!(first, ScratchBuffer::Pooled(_)));
        assert!(matches!(second, ScratchBuffer::Private(_)));
    }

    #[test]
    fn into_owned_detaches_from_the_pool() {
        let mut buf = claim_summary(16);
        buf.push_str("SELECT t");
        let owned = buf.into_owned();
        assert_eq!(owned, "SELECT t");
        // the slot should be clear and reusable again immediately
        let next = claim_summary(16);
        assert_eq!(next.as_str(), "");
    }
}
