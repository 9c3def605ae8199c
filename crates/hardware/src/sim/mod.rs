//! Simulation driver, program loading, and trace capture.
//!
//! Provides the pieces around the CPU that turn an object listing into an
//! execution trace:
//! 1. **Loader:** Parses `.yo` listings into an address-to-byte image.
//! 2. **Simulator:** The run loop with its step ceiling.
//! 3. **Trace:** Immutable per-instruction state snapshots.

/// Object-listing (`.yo`) loader.
pub mod loader;

/// Run loop.
pub mod simulator;

/// Snapshots and traces.
pub mod trace;

pub use simulator::{Simulator, simulate};
pub use trace::{Snapshot, Trace};
