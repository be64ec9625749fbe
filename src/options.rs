//! Caller overrides for UUIDv1 generation.

/// Optional overrides for the fields of a generated UUIDv1.
///
/// Fields left unset are filled in by the generator: the node and clock sequence come from the
/// generator state, and the timestamp comes from its time source.
///
/// # Examples
///
/// ```rust
/// use optimized_uuid::V1Options;
///
/// let options = V1Options::new()
///     .node([0x08, 0x00, 0x20, 0x0c, 0x9a, 0x66])
///     .clock_seq(0x1669)
///     .unix_ts_ms(1_093_300_000_000)
///     .nsecs(0);
/// assert_eq!(options.get_clock_seq(), Some(0x1669));
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct V1Options {
    node: Option<[u8; 6]>,
    clock_seq: Option<u16>,
    unix_ts_ms: Option<u64>,
    nsecs: Option<u16>,
}

impl V1Options {
    /// Creates an object with no overrides.
    pub const fn new() -> Self {
        Self {
            node: None,
            clock_seq: None,
            unix_ts_ms: None,
            nsecs: None,
        }
    }

    /// Pins the 48-bit node identifier.
    pub const fn node(mut self, node: [u8; 6]) -> Self {
        self.node = Some(node);
        self
    }

    /// Pins the 14-bit clock sequence.
    ///
    /// # Panics
    ///
    /// Panics if `clock_seq` does not fit in 14 bits.
    pub const fn clock_seq(mut self, clock_seq: u16) -> Self {
        assert!(clock_seq < 1 << 14, "`clock_seq` must be a 14-bit integer");
        self.clock_seq = Some(clock_seq);
        self
    }

    /// Pins the timestamp, in milliseconds since the Unix epoch.
    pub const fn unix_ts_ms(mut self, unix_ts_ms: u64) -> Self {
        self.unix_ts_ms = Some(unix_ts_ms);
        self
    }

    /// Pins the number of 100-nanosecond intervals added to the millisecond timestamp.
    ///
    /// # Panics
    ///
    /// Panics if `nsecs` is 10,000 or greater.
    pub const fn nsecs(mut self, nsecs: u16) -> Self {
        assert!(nsecs < 10_000, "`nsecs` must be less than 10,000");
        self.nsecs = Some(nsecs);
        self
    }

    /// Returns the pinned node, if any.
    pub const fn get_node(&self) -> Option<[u8; 6]> {
        self.node
    }

    /// Returns the pinned clock sequence, if any.
    pub const fn get_clock_seq(&self) -> Option<u16> {
        self.clock_seq
    }

    /// Returns the pinned Unix timestamp in milliseconds, if any.
    pub const fn get_unix_ts_ms(&self) -> Option<u64> {
        self.unix_ts_ms
    }

    /// Returns the pinned sub-millisecond intervals, if any.
    pub const fn get_nsecs(&self) -> Option<u16> {
        self.nsecs
    }
}

#[cfg(test)]
mod tests {
    use super::V1Options;

    /// Starts with no overrides
    #[test]
    fn starts_with_no_overrides() {
        assert_eq!(V1Options::new(), V1Options::default());
        let e = V1Options::new();
        assert_eq!(e.get_node(), None);
        assert_eq!(e.get_clock_seq(), None);
        assert_eq!(e.get_unix_ts_ms(), None);
        assert_eq!(e.get_nsecs(), None);
    }

    /// Rejects clock sequence wider than 14 bits
    #[test]
    #[should_panic]
    fn rejects_clock_sequence_wider_than_14_bits() {
        let _ = V1Options::new().clock_seq(1 << 14);
    }

    /// Rejects nsecs of 10,000 or greater
    #[test]
    #[should_panic]
    fn rejects_nsecs_of_10000_or_greater() {
        let _ = V1Options::new().nsecs(10_000);
    }
}
