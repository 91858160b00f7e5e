//! Tests for request construction and wire encoding
