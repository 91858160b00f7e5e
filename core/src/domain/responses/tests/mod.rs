//! Tests for response parsing
