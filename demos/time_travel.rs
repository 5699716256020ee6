//! Scrubbing back through the key history and branching off.
//!
//! Types `12 + 8 =`, rewinds to just after the `+`, then types `9 =`,
//! printing the projections a front end would redraw after each step.

use calcfold::{Event, History, Operator, Snapshot};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut history = History::new();

    for label in ["1", "2", "+", "8", "="] {
        let snap = history.apply(label.parse()?);
        show(&format!("press {label}"), &snap);
    }

    // Walk the slider all the way back and forward again
    for index in (0..=history.total_count()).rev() {
        let snap = history.scrub(index)?;
        show(&format!("scrub {index}"), &snap);
    }

    let snap = history.scrub(3)?;
    show("scrub 3", &snap);
    println!("  redo kept: {:?}", history.pending_redo());

    // New input branches off and drops the redo events
    history.apply(Event::Digit(9));
    let snap = history.apply(Event::Operator(Operator::Equal));
    show("press 9 =", &snap);

    println!("\nas JSON: {}", serde_json::to_string_pretty(&snap)?);
    Ok(())
}

fn show(step: &str, snap: &Snapshot) {
    println!(
        "{step:<10} display {:>6}   history {:<8} [{}/{}]",
        snap.output, snap.history, snap.cursor, snap.total_count
    );
}
