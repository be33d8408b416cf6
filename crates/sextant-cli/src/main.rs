//! Sextant CLI - interactive driver for a bounded navigation session
//!
//! Usage:
//!   sextant <root-dir>
//!
//! Opens a session confined to `<root-dir>` and reads commands from stdin:
//! `ls`, `cd <name>`, `up`, `pwd`, `trail`, `touch <name>`, `rm <name>`,
//! `mv <old> <new>`, `help`, `exit`.

use std::io::{self, BufRead, Write};

use serde_json::json;
use sextant::{NavigatorSession, ToolDefinition, navigation_tools};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args: Vec<String> = std::env::args().collect();

    let root = match args.get(1).map(String::as_str) {
        Some("-h") | Some("--help") | None => {
            eprintln!("usage: sextant <root-dir>");
            std::process::exit(2);
        }
        Some(root) => root.to_string(),
    };

    let session = match NavigatorSession::open(&root) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("sextant: {}: {}", root, e);
            std::process::exit(1);
        }
    };

    println!(
        "exploring {} (type 'help' for commands)",
        session.root().await.display()
    );

    let stdin = io::stdin();
    loop {
        print!("sextant> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };

        let output = match command {
            "exit" | "quit" | "q" => break,
            "help" => help(),
            "ls" => session.invoke("list", &json!({})).await,
            "up" => session.invoke("ascend", &json!({})).await,
            "trail" => session.invoke("current_trail", &json!({})).await,
            "pwd" => session.current_path().await.display().to_string(),
            "cd" => match parts.next() {
                Some(target) => session.invoke("descend", &json!({"target": target})).await,
                None => "usage: cd <name>".to_string(),
            },
            "touch" => match parts.next() {
                Some(name) => session.invoke("create_file", &json!({"name": name})).await,
                None => "usage: touch <name>".to_string(),
            },
            "rm" => match parts.next() {
                Some(name) => session.invoke("remove_file", &json!({"name": name})).await,
                None => "usage: rm <name>".to_string(),
            },
            "mv" => match (parts.next(), parts.next()) {
                (Some(old), Some(new)) => {
                    session
                        .invoke("rename_file", &json!({"old": old, "new": new}))
                        .await
                }
                _ => "usage: mv <old> <new>".to_string(),
            },
            other => format!("unknown command: {} (type 'help')", other),
        };

        println!("{output}");
    }
}

/// Command overview plus the underlying session actions, names left-padded
/// so descriptions line up.
fn help() -> String {
    let mut out = String::from(
        "commands:\n\
         \x20 ls               list the current directory\n\
         \x20 cd <name>        enter a child directory\n\
         \x20 up               go back to the parent directory\n\
         \x20 pwd              print the current directory path\n\
         \x20 trail            print the path taken from the root\n\
         \x20 touch <name>     create an empty file here\n\
         \x20 rm <name>        delete a file here\n\
         \x20 mv <old> <new>   rename a file here\n\
         \x20 exit             leave\n\
         \nunderlying session actions:\n",
    );

    let summaries: Vec<_> = navigation_tools().iter().map(ToolDefinition::summary).collect();
    let padding = summaries.iter().map(|s| s.name.len()).max().unwrap_or(0) + 4;
    for summary in summaries {
        out.push_str("  ");
        out.push_str(&summary.name);
        out.push_str(&" ".repeat(padding - summary.name.len()));
        out.push_str(&summary.description);
        out.push('\n');
    }
    out
}
