//! Time-based wrappers driven by a caller-supplied clock.
//!
//! Nothing here reads a real clock: every operation takes `now_ms`, a
//! monotonic millisecond timestamp chosen by the host. The same engine code
//! therefore runs against `performance.now()` in a browser, a scripted clock
//! in the simulator, and literal numbers in tests.

pub mod debounce;
pub mod throttle;
pub mod timers;

pub use debounce::Debounce;
pub use throttle::Throttle;
pub use timers::TimerQueue;
