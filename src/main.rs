// SPDX-License-Identifier: MPL-2.0
//! Terminal demo for the toastbox feedback core.
//!
//! Shows a toast through its full lifecycle, demonstrates replacement and
//! the contact-form validation path, and finishes with a debounced burst.

use std::time::Duration;
use toastbox::config;
use toastbox::debounce::Debouncer;
use toastbox::diagnostics::{ActivityKind, DiagnosticsCollector};
use toastbox::notifications::{Kind, Manager, TerminalPresenter};
use toastbox::validation::ContactForm;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let mut args = pico_args::Arguments::from_env();

    let kind: Kind = args
        .opt_value_from_str("--kind")
        .unwrap()
        .unwrap_or_default();
    let message: Option<String> = args.opt_value_from_str("--message").unwrap();
    let display_ms: Option<u64> = args.opt_value_from_str("--display-ms").unwrap();

    let mut cfg = config::load().unwrap_or_default();
    if display_ms.is_some() {
        cfg.display_ms = display_ms;
    }

    let (mut collector, handle) = DiagnosticsCollector::new();
    let mut manager = Manager::with_timings(TerminalPresenter, cfg.timings());
    manager.set_diagnostics(handle.clone());

    let message = message.unwrap_or_else(|| "Welcome! Thanks for stopping by.".to_string());
    manager.notify(message, kind);
    run_to_completion(&mut manager).await;

    // A submission with a malformed address, surfaced the way the contact
    // form does it.
    let form = ContactForm {
        name: "Ada".to_string(),
        email: "ada@example".to_string(),
        subject: "Hello".to_string(),
        message: "Just saying hi.".to_string(),
    };
    match form.validate() {
        Ok(()) => {
            manager.notify(
                "Message sent successfully! I'll get back to you soon.",
                Kind::Success,
            );
        }
        Err(err) => {
            handle.log(ActivityKind::ValidationFailed {
                reason: err.to_string(),
            });
            manager.notify(err.user_message(), Kind::Error);
        }
    }
    run_to_completion(&mut manager).await;

    // A resize burst collapsing into one trailing layout pass.
    let mut debouncer = Debouncer::new(cfg.resize_debounce());
    for width in [1080, 960, 768] {
        let handle = handle.clone();
        debouncer.trigger(move || {
            handle.log(ActivityKind::DebounceFired);
            println!("[resize] layout recomputed at {width}px");
        });
        tokio::time::sleep(Duration::from_millis(40)).await;
    }
    tokio::time::sleep(cfg.resize_debounce() + Duration::from_millis(50)).await;

    collector.drain();
    println!("{} diagnostic events captured", collector.len());
}

/// Drives the manager's tick loop until the slot empties.
async fn run_to_completion(manager: &mut Manager<TerminalPresenter>) {
    let mut interval = tokio::time::interval(Duration::from_millis(25));
    while manager.is_showing() {
        interval.tick().await;
        manager.tick();
    }
}
