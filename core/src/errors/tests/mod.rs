//! Tests for failure shapes
