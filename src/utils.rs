//! Some utility functions

use std::io::{stdin, stdout, Read, Write};

use chrono::Datelike;

use crate::session::MonthView;
use crate::task::Task;

/// A debug utility that pretty-prints a month, one week per block
pub fn print_month_view(view: &MonthView<'_>) {
    println!("{}  ({} completed)", view.month().format("%B %Y"), view.counters());
    for week in view.weeks() {
        println!("{}", "-".repeat(7 * 4));
        for cell in week {
            let day = cell.day();
            let marker = if day.is_today() {
                "*"
            } else if day.is_current_month() == false {
                "."
            } else {
                " "
            };
            print!("{}{:>2} ", marker, day.date().day());
        }
        println!();
        for cell in week.iter().filter(|c| c.tasks().is_empty() == false) {
            for task in cell.tasks() {
                print!("    {}: ", cell.day().date());
                print_task(task);
            }
        }
    }
}

pub fn print_task(task: &Task) {
    let completion = if task.completed() { "✓" } else { " " };
    println!("{} {}\t{}", completion, task, task.id());
}

/// Wait for the user to press enter
pub fn pause() {
    let mut stdout = stdout();
    let _ = stdout.write_all(b"Press Enter to continue...");
    let _ = stdout.flush();
    let _ = stdin().read_exact(&mut [0]);
}
