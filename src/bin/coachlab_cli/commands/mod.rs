// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for coachlab-cli
// ABOUTME: Provides access to bloodwork panel and roster commands

pub mod bloodwork;
pub mod roster;
