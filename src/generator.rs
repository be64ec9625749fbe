//! UUIDv1 generator and related types.

use crate::{Uuid, V1Options};

pub mod with_rand08;


/// Number of 100-nanosecond intervals per millisecond.
const TICKS_PER_MS: u64 = 10_000;

/// Number of 100-nanosecond intervals between 1582-10-15 (the Gregorian reform) and the Unix
/// epoch.
const GREGORIAN_OFFSET: u64 = 0x01b2_1dd2_1381_4000;

/// Largest `unix_ts_ms` whose timestamp still fits in the 60-bit UUIDv1 timestamp field.
pub const MAX_UNIX_TS_MS: u64 = ((1 << 60) - GREGORIAN_OFFSET) / TICKS_PER_MS - 1;

/// Amount of timestamp rollback, in 100-nanosecond intervals, that the generator absorbs by
/// continuing from the previous timestamp instead of changing the clock sequence.
const ROLLBACK_ALLOWANCE: u64 = 10_000 * TICKS_PER_MS;

/// Largest timestamp, in 100-nanosecond intervals since the Unix epoch, that fits in 60 bits.
const MAX_TICKS: u64 = (1 << 60) - 1 - GREGORIAN_OFFSET;

/// A trait that defines the minimum random number generator interface for [`V1Generator`].
pub trait RandSource {
    /// Returns the next random `u32`.
    fn next_u32(&mut self) -> u32;

    /// Returns the next random `u64`.
    fn next_u64(&mut self) -> u64;
}

/// A trait that defines the minimum system clock interface for [`V1Generator`].
pub trait TimeSource {
    /// Returns the current Unix timestamp in milliseconds.
    fn unix_ts_ms(&mut self) -> u64;
}

/// The default [`TimeSource`] that uses [`std::time::SystemTime`].
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

#[cfg(feature = "std")]
impl TimeSource for StdSystemTime {
    fn unix_ts_ms(&mut self) -> u64 {
        use std::time;
        time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .expect("clock may have gone backwards")
            .as_millis() as u64
    }
}

/// Represents a UUIDv1 generator that encapsulates the timestamp, clock sequence, and node of
/// the RFC 4122 time-based UUID and guarantees that consecutive UUIDs never share a timestamp
/// and clock sequence pair.
///
/// The timestamp counts 100-nanosecond intervals, so up to 10,000 UUIDs fit in one millisecond
/// of the time source; beyond that the generator borrows ticks from the following millisecond.
/// The clock sequence and node are drawn from the random number generator on first use, the
/// node carrying the multicast bit to mark it as a random node rather than a MAC address.
///
/// This type provides the interface to customize the random number generator and system clock.
/// It also helps control the scope of guaranteed uniqueness. The following example shares one
/// generator across threads using Rust's standard synchronization mechanism.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use std::{sync, thread};
/// use optimized_uuid::{OptimizedUuid, V1Generator};
///
/// let g = sync::Arc::new(sync::Mutex::new(V1Generator::with_rand08(OsRng)));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 let e = OptimizedUuid::from(g.lock().unwrap().generate());
///                 println!("{} by thread {}", e, i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
///
/// # Clock rollback
///
/// When the timestamp passed is not greater than the previous one, the generator goes on with
/// the previous timestamp plus one interval as long as the rollback is within ten seconds. A
/// larger rollback makes the generator adopt the given timestamp and increment the clock
/// sequence instead.
///
/// Pinned timestamps are always used as they are. A millisecond pinned through
/// [`V1Options::unix_ts_ms`] that equals the previous one gets the next free sub-millisecond
/// interval; an earlier one, or a non-increasing timestamp whose sub-millisecond part was pinned
/// through [`V1Options::nsecs`], increments the clock sequence. The clock sequence is also
/// incremented when the previous timestamp is the largest one UUIDv1 can hold. A clock sequence
/// pinned through [`V1Options::clock_seq`] still goes into that UUID as it is.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V1Generator<R, T> {
    /// Last timestamp in 100-nanosecond intervals since the Unix epoch.
    ticks: u64,
    clock_seq: Option<u16>,
    node: Option<[u8; 6]>,

    /// The random number generator used by the generator.
    rand_source: R,

    /// The system clock used by the generator.
    time_source: T,
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<R> V1Generator<R, StdSystemTime> {
    /// Creates a generator object that reads the system clock.
    pub const fn new(rand_source: R) -> Self {
        Self::with_rand_and_time_sources(rand_source, StdSystemTime)
    }
}

impl<R, T> V1Generator<R, T> {
    /// Creates a generator object with specified random number generator and system clock.
    pub const fn with_rand_and_time_sources(rand_source: R, time_source: T) -> Self {
        Self {
            ticks: 0,
            clock_seq: None,
            node: None,
            rand_source,
            time_source,
        }
    }
}

impl<R: RandSource, T: TimeSource> V1Generator<R, T> {
    /// Generates a new UUIDv1 object from the current timestamp.
    ///
    /// See the [`V1Generator`] type documentation for the description.
    pub fn generate(&mut self) -> Uuid {
        self.generate_with(&V1Options::new())
    }

    /// Generates a new UUIDv1 object, taking the fields pinned by `options` as they are.
    ///
    /// See the [`V1Generator`] type documentation for the description.
    ///
    /// # Panics
    ///
    /// Panics if the timestamp is greater than [`MAX_UNIX_TS_MS`].
    pub fn generate_with(&mut self, options: &V1Options) -> Uuid {
        let unix_ts_ms = match options.get_unix_ts_ms() {
            Some(unix_ts_ms) => unix_ts_ms,
            None => self.time_source.unix_ts_ms(),
        };
        self.generate_core(unix_ts_ms, options)
    }
}

impl<R: RandSource, T> V1Generator<R, T> {
    /// Generates a new UUIDv1 object from the `unix_ts_ms` passed.
    ///
    /// If `options` pins a timestamp, its value is ignored in favor of `unix_ts_ms`, which is then
    /// treated as pinned; the other pinned fields are used as they are.
    ///
    /// # Panics
    ///
    /// Panics if `unix_ts_ms` is greater than [`MAX_UNIX_TS_MS`].
    pub fn generate_core(&mut self, unix_ts_ms: u64, options: &V1Options) -> Uuid {
        assert!(
            unix_ts_ms <= MAX_UNIX_TS_MS,
            "`unix_ts_ms` out of the UUIDv1 timestamp range"
        );

        let mut clock_seq = *self
            .clock_seq
            .get_or_insert_with(|| (self.rand_source.next_u32() & 0x3fff) as u16);
        let node = *self.node.get_or_insert_with(|| {
            let [_, _, n0, n1, n2, n3, n4, n5] = self.rand_source.next_u64().to_be_bytes();
            [n0 | 0x01, n1, n2, n3, n4, n5]
        });

        let ticks = unix_ts_ms * TICKS_PER_MS + options.get_nsecs().unwrap_or(0) as u64;
        let continues = options.get_nsecs().is_none()
            && self.ticks < MAX_TICKS
            && match options.get_unix_ts_ms() {
                // a pinned millisecond may only gain sub-millisecond intervals
                Some(_) => (self.ticks + 1) / TICKS_PER_MS == unix_ts_ms,
                None => ticks + ROLLBACK_ALLOWANCE >= self.ticks,
            };
        if ticks > self.ticks {
            self.ticks = ticks;
        } else if continues {
            // go on with previous timestamp if new one is not much smaller
            self.ticks += 1;
        } else {
            // a pinned clock sequence only affects this UUID, so the state changes regardless
            clock_seq = (clock_seq + 1) & 0x3fff;
            self.clock_seq = Some(clock_seq);
            self.ticks = ticks;
            tracing::debug!(clock_seq, "timestamp went backwards; clock sequence incremented");
        }

        let timestamp = self.ticks + GREGORIAN_OFFSET;
        Uuid::from_fields_v1(
            timestamp as u32,
            (timestamp >> 32) as u16,
            ((timestamp >> 48) & 0xfff) as u16,
            options.get_clock_seq().unwrap_or(clock_seq),
            options.get_node().unwrap_or(node),
        )
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv1 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use optimized_uuid::V1Generator;
///
/// V1Generator::with_rand08(rand::thread_rng())
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
impl<R: RandSource, T: TimeSource> Iterator for V1Generator<R, T> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource, T: TimeSource> core::iter::FusedIterator for V1Generator<R, T> {}
