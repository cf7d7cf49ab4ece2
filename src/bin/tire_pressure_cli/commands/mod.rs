// ABOUTME: Subcommand implementations for the tire-pressure CLI
// ABOUTME: estimate, convert, and health
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

pub mod convert;
pub mod estimate;
pub mod health;
