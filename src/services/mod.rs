// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod footprint;
pub mod tips;

pub use footprint::{classify, compute, Assessment, Level};
pub use tips::{RandomSource, SystemRandomSource};
