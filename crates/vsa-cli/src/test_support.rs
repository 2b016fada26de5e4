//! Shared test utilities for command and dashboard tests.
