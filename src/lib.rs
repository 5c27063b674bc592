// SPDX-License-Identifier: MPL-2.0
//! `toastbox` is a headless user-feedback core for interactive front-ends.
//!
//! It provides single-slot toast notifications with an explicit lifecycle,
//! trailing-edge input debouncing, and permissive contact-form validation.
//! Rendering stays on the host side: the notification manager issues opaque
//! display commands through an injected [`notifications::Presenter`].

#![doc(html_root_url = "https://docs.rs/toastbox/0.2.0")]

pub mod config;
pub mod debounce;
pub mod diagnostics;
pub mod error;
pub mod notifications;
pub mod validation;
