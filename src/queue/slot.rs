/*!
 * Alarm Slot
 * Single-capacity storage for the pending alarm payload
 *
 * State machine: Empty -> Occupied on a completed alarm send,
 * Occupied -> Empty on a completed alarm receive.
 */

/// Slot state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Empty,
    Occupied,
}

/// Holds at most one alarm payload
#[derive(Debug)]
pub struct AlarmSlot<T> {
    payload: Option<T>,
}

impl<T> AlarmSlot<T> {
    pub const fn new() -> Self {
        Self { payload: None }
    }

    #[inline]
    pub fn state(&self) -> SlotState {
        if self.payload.is_some() {
            SlotState::Occupied
        } else {
            SlotState::Empty
        }
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.payload.is_some()
    }

    /// 1 if occupied, else 0
    #[inline]
    pub fn pending(&self) -> usize {
        usize::from(self.is_occupied())
    }

    /// Install a payload into an empty slot
    ///
    /// Hands the payload back if the slot is occupied.
    pub fn install(&mut self, payload: T) -> Result<(), T> {
        if self.payload.is_some() {
            return Err(payload);
        }
        self.payload = Some(payload);
        Ok(())
    }

    /// Install a payload into a slot the caller has observed empty
    #[inline]
    pub fn fill(&mut self, payload: T) {
        debug_assert!(self.payload.is_none(), "alarm slot filled while occupied");
        self.payload = Some(payload);
    }

    /// Vacate the slot
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        self.payload.take()
    }
}

impl<T> Default for AlarmSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
