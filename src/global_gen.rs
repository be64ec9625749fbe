//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::{OptimizedUuid, Uuid, V1Options};
use inner::GlobalGenInner;

/// Returns the lock handle of process-wide global generator, creating one if none exists.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        // the generator state is updated in place and stays usable after a panic elsewhere
        .unwrap_or_else(sync::PoisonError::into_inner)
}

/// Generates a UUIDv1 object.
///
/// This function employs a global generator and guarantees the process-wide uniqueness of the
/// timestamp and clock sequence pair. On Unix, this function resets the generator when the
/// process ID changes (i.e., upon process forks) to prevent collisions across processes.
///
/// # Examples
///
/// ```rust
/// let uuid = optimized_uuid::uuid1();
/// println!("{}", uuid); // e.g., "58e0a7d7-eebc-11d8-9669-0800200c9a66"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// ```
pub fn uuid1() -> Uuid {
    lock_global_gen().get_mut().generate()
}

/// Generates a UUIDv1 object, taking the fields pinned by `options` as they are.
///
/// # Examples
///
/// ```rust
/// use optimized_uuid::V1Options;
///
/// let options = V1Options::new().node([0x08, 0x00, 0x20, 0x0c, 0x9a, 0x66]);
/// let uuid = optimized_uuid::uuid1_with(&options);
/// assert!(uuid.to_string().ends_with("-0800200c9a66"));
/// ```
///
/// # Panics
///
/// Panics if the pinned timestamp is out of the UUIDv1 range.
pub fn uuid1_with(options: &V1Options) -> Uuid {
    lock_global_gen().get_mut().generate_with(options)
}

/// Generates a UUIDv1 object in the optimized layout.
///
/// # Examples
///
/// ```rust
/// let id = optimized_uuid::optimized_uuid();
/// println!("{}", id); // e.g., "11D8EEBC58E0A7D796690800200C9A66"
/// println!("{:?}", id.as_bytes()); // as stored in a BINARY(16) column
/// ```
pub fn optimized_uuid() -> OptimizedUuid {
    OptimizedUuid::from(uuid1())
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use crate::generator::{RandSource, StdSystemTime, V1Generator};

    /// The random number generator that draws the clock sequence and node of the global
    /// generator: [`ChaCha12Core`] reseeded from the OS every 64 KiB, as [`rand::rngs::ThreadRng`]
    /// does.
    #[derive(Debug)]
    pub struct GlobalGenRng(ReseedingRng<ChaCha12Core, OsRng>);

    impl RandSource for GlobalGenRng {
        fn next_u32(&mut self) -> u32 {
            rand::RngCore::next_u32(&mut self.0)
        }

        fn next_u64(&mut self) -> u64 {
            rand::RngCore::next_u64(&mut self.0)
        }
    }

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    #[derive(Debug)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: V1Generator<GlobalGenRng, StdSystemTime>,
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            tracing::debug!("initializing global UUIDv1 generator");
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator: V1Generator::new(GlobalGenRng(ReseedingRng::new(
                    ChaCha12Core::from_entropy(),
                    1024 * 64,
                    OsRng,
                ))),
            }
        }
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner [`V1Generator`] instance, reseting the
        /// generator state on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut V1Generator<GlobalGenRng, StdSystemTime> {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                tracing::debug!(pid = self.pid, "process ID changed; resetting global generator");
                *self = Default::default();
            }
            &mut self.generator
        }
    }
}
