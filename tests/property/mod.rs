// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Property-based tests using proptest to verify the resolver against a
//! straightforward model of the two-phase lookup.

mod lookup_order;
