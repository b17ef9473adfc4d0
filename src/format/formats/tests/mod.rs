//! Unit tests for detection format implementations.
//!
//! These tests verify document parsing, validation failures, frame
//! iteration, and round-trip conversions against real files on disk.
