//! Memory tests.
