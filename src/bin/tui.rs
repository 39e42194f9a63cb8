use anyhow::Result;
use std::env;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // Handle help flag
    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h" || args[1] == "help") {
        print_help();
        return Ok(());
    }

    flowboard::tui::run()
}

fn print_help() {
    println!(
        "Flowboard v{} - A fast in-memory task board (TUI)",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    flowboard               Start interactive TUI");
    println!("    flowboard --help        Show this help message");
    println!();
    println!("KEYBINDINGS:");
    println!("    Press '?' inside the app for full interactive help");
    println!();
    println!("    a                 Open the New Task form");
    println!("    d                 Delete the selected task");
    println!("    j / k, arrows     Move the selection (wraps around)");
    println!("    PgUp / PgDn       Jump several tasks at once");
    println!("    q                 Quit");
    println!();
    println!("NEW TASK FORM:");
    println!("    Tab / Shift-Tab   Move between fields");
    println!("    Space or 1-4      Pick a category (urgent/important/normal/low)");
    println!("    Enter             Add the task (all three fields required)");
    println!("    Esc               Close the form, keeping the draft");
    println!();
    println!("MORE INFO:");
    println!("    Tasks live in memory for the session; nothing is written to disk.");
    println!("    License:    GPL-3.0");
}
