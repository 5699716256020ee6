//! A line-driven terminal calculator.
//!
//! Each line holds space-separated keys (`1 2 + 8 =`, `AC`, `+/-`, `%`) or
//! one of the commands below. Run with `cargo run --example calc_repl`.
//!
//! ```text
//! :scrub N    move the history cursor to event N
//! :slide X    same, from a fractional slider position
//! :history    show committed and redo events
//! :json       print the current projections as JSON
//! :quit       exit
//! ```

use calcfold::{Event, History, Snapshot};
use std::io::{self, BufRead, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut history = History::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print_keypad();
    prompt(&mut stdout, &history.snapshot())?;

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        let mut words = line.split_whitespace();

        match words.next() {
            None => {}
            Some(":quit") | Some(":q") => break,
            Some(":scrub") => match words.next().map(str::parse::<usize>) {
                Some(Ok(index)) => report(history.scrub(index)),
                _ => println!("usage: :scrub N"),
            },
            Some(":slide") => match words.next().map(str::parse::<f64>) {
                Some(Ok(position)) => report(history.slide(position)),
                _ => println!("usage: :slide X"),
            },
            Some(":history") => {
                println!("  committed: {}", join(history.committed()));
                println!("  redo:      {}", join(history.pending_redo()));
            }
            Some(":json") => println!("{}", serde_json::to_string_pretty(&history.snapshot())?),
            Some(_) => {
                for word in line.split_whitespace() {
                    match word.parse::<Event>() {
                        Ok(event) => {
                            history.apply(event);
                        }
                        Err(e) => println!("  {e}"),
                    }
                }
            }
        }

        prompt(&mut stdout, &history.snapshot())?;
    }

    Ok(())
}

fn report(result: calcfold::Result<Snapshot>) {
    if let Err(e) = result {
        println!("  {e}");
    }
}

fn join(events: &[Event]) -> String {
    events.iter().map(Event::label).collect::<Vec<_>>().join(" ")
}

fn print_keypad() {
    for row in Event::KEYPAD {
        let keys: Vec<String> = row.iter().map(|e| format!("{:^5}", e.label())).collect();
        println!("[{}]", keys.join("|"));
    }
    println!();
}

fn prompt(out: &mut impl Write, snap: &Snapshot) -> io::Result<()> {
    if snap.total_count > 0 {
        println!("  {}  [{}/{}]", snap.history, snap.cursor, snap.total_count);
    }
    write!(out, "{:>16} > ", snap.output)?;
    out.flush()
}
