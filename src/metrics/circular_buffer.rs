use std::fmt;

/// Fixed-capacity ring of `T` that is default-filled up front, so it always
/// holds exactly `capacity` slots. Once every slot has been written, each push
/// overwrites the oldest one.
#[derive(Clone)]
pub struct RollingBuffer<T> {
    buffer: Vec<T>,
    write_pos: usize,
}

impl<T: Clone + Default> RollingBuffer<T> {
    /// A zero capacity is bumped to one slot so the ring index stays valid.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: vec![T::default(); capacity.max(1)],
            write_pos: 0,
        }
    }

    pub fn push(&mut self, item: T) {
        self.buffer[self.write_pos] = item;
        self.write_pos = (self.write_pos + 1) % self.buffer.len();
    }

    /// Default-fills every slot and rewinds the write index.
    pub fn reset(&mut self) {
        self.buffer.fill(T::default());
        self.write_pos = 0;
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn write_pos(&self) -> usize {
        self.write_pos
    }

    /// Slots in chronological order, oldest first. Unwritten slots come first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let (newer, older) = self.buffer.split_at(self.write_pos);
        older.iter().chain(newer)
    }

    /// The most recently written slot.
    pub fn last(&self) -> &T {
        let idx = (self.write_pos + self.buffer.len() - 1) % self.buffer.len();
        &self.buffer[idx]
    }

    pub fn as_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug + Clone + Default> fmt::Debug for RollingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zero_filled_at_full_length() {
        let buffer: RollingBuffer<f32> = RollingBuffer::new(4);
        assert_eq!(buffer.as_vec(), vec![0.0; 4]);
        assert_eq!(buffer.write_pos(), 0);
    }

    #[test]
    fn partial_fill_reads_padding_before_data() {
        let mut buffer = RollingBuffer::new(4);
        buffer.push(1);
        buffer.push(2);
        assert_eq!(buffer.as_vec(), vec![0, 0, 1, 2]);
        assert_eq!(*buffer.last(), 2);
    }

    #[test]
    fn wraps_and_keeps_last_n_in_order() {
        let mut buffer = RollingBuffer::new(3);
        for i in 1..=7 {
            buffer.push(i);
        }
        assert_eq!(buffer.as_vec(), vec![5, 6, 7]);
        assert_eq!(buffer.capacity(), 3);
        assert_eq!(buffer.write_pos(), 1);
    }

    #[test]
    fn zero_capacity_still_holds_one_slot() {
        let mut buffer = RollingBuffer::new(0);
        buffer.push(3);
        buffer.push(8);
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.as_vec(), vec![8]);
    }

    #[test]
    fn reset_zero_fills_and_rewinds() {
        let mut buffer = RollingBuffer::new(3);
        buffer.push(4.5);
        buffer.push(9.0);
        buffer.reset();
        assert_eq!(buffer.as_vec(), vec![0.0; 3]);
        assert_eq!(buffer.write_pos(), 0);
    }
}
