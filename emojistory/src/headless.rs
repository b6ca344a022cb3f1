//! Headless mode for Emojistory.
//!
//! A line-oriented interface for running the story without a TUI, meant for
//! scripting and automated testing.

use std::io::{self, BufRead};

use emojistory_core::{Applied, FinderConfig, HeadlessStory, LookupTrigger, Resolver, Story};

/// Run the story in headless mode.
///
/// Protocol:
/// - Lines starting with `#` are commands (quit, story, names, status, help)
/// - Any other line is story text
/// - Output lines are tagged `[EMOJI]`, `[ERROR]`, `[STORY]` or `[STATUS]`
pub async fn run_headless(config: FinderConfig, resolver: Resolver) -> io::Result<()> {
    let trigger = config.trigger;
    let mut story = HeadlessStory::new(config, resolver);

    println!("=== Emojistory Headless Mode ===");
    match trigger {
        LookupTrigger::Implicit => println!("Type text; every finished word is looked up."),
        LookupTrigger::Explicit => println!("Enter one word per line."),
    }
    println!();
    print_commands();
    println!();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        // A blank line is an empty query under the explicit trigger
        if line.is_empty() && trigger == LookupTrigger::Implicit {
            continue;
        }

        if let Some(command) = line.strip_prefix('#') {
            let parts: Vec<&str> = command.split_whitespace().collect();
            match parts.first().copied() {
                Some("quit") | Some("exit") => {
                    println!("Goodbye!");
                    break;
                }
                Some("story") => {
                    let as_json = parts.get(1) == Some(&"json");
                    println!("{}", format_story(story.session().story(), as_json));
                }
                Some("names") => {
                    let shown = story.session_mut().toggle_names();
                    println!("[STATUS] Names {}", if shown { "shown" } else { "hidden" });
                }
                Some("status") => {
                    let session = story.session();
                    println!("[STATUS]");
                    println!("  Trigger: {}", session.config().trigger);
                    println!("  Not found: {}", session.config().on_not_found);
                    println!("  Words: {}", session.story().len());
                    if let Some(error) = session.state().error() {
                        println!("  Last error: {error}");
                    }
                }
                Some("help") => {
                    println!("[HELP]");
                    print_commands();
                }
                _ => println!("[ERROR] Unknown command: {line}"),
            }
            continue;
        }

        for output in handle_text(&mut story, line).await {
            println!("{output}");
        }
    }

    Ok(())
}

/// Feed one line of story text and collect the tagged output lines.
async fn handle_text(story: &mut HeadlessStory, line: &str) -> Vec<String> {
    match story.send(line).await {
        Ok(applied) => {
            let show_names = story.session().show_names();
            applied
                .iter()
                .map(|result| format_applied(result, show_names))
                .collect()
        }
        Err(e) => vec![format!("[ERROR] {e}")],
    }
}

fn print_commands() {
    println!("Commands:");
    println!("  #quit         - Exit");
    println!("  #story [json] - Print the story so far");
    println!("  #names        - Show/hide emoji names");
    println!("  #status       - Show session settings");
    println!("  #help         - Show this help");
}

/// Render one applied lookup as a tagged output line.
fn format_applied(applied: &Applied, show_names: bool) -> String {
    match applied {
        Applied::Appended { word, entry, .. } if show_names => {
            format!("[EMOJI] {word} -> {} ({})", entry.glyph, entry.name)
        }
        Applied::Appended { word, entry, .. } => format!("[EMOJI] {word} -> {}", entry.glyph),
        Applied::Rejected { word, message, .. } => format!("[ERROR] {word}: {message}"),
    }
}

fn format_story(story: &Story, as_json: bool) -> String {
    if as_json {
        match serde_json::to_string(story) {
            Ok(json) => format!("[STORY] {json}"),
            Err(e) => format!("[ERROR] Could not encode story: {e}"),
        }
    } else {
        format!("[STORY] {}", story.glyphs().join(" "))
    }
}
