// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(clippy::all)]

//! Mancala client UI library

pub mod app;
pub mod board_widget;
pub mod msg;
pub mod notices;
pub mod theme;
pub mod toast_manager;
pub mod worker;
