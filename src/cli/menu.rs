//! Interactive menu loop.
//!
//! Thin glue over the tree engine: reads a choice per line, prompts for keys
//! where needed, calls into `Tree`, and formats the returned sequences. No
//! tree logic lives here.

use std::io::{self, BufRead};

use itertools::Itertools;
use tracing::debug;

use crate::cli::output;
use crate::config::Settings;
use crate::display::TreeRender;
use crate::errors::{AppError, AppResult};
use crate::search::Strategy;
use crate::traverse::Order;
use crate::tree::Tree;

pub fn run(settings: &Settings, start_empty: bool) -> AppResult<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut tree = Tree::new();
    if !start_empty {
        for &key in &settings.seed_keys {
            tree.insert(key);
        }
        debug!(seed_keys = ?settings.seed_keys, "seeded tree");
    }

    show_menu();
    while let Some(line) = lines.next() {
        let line = line?;
        let choice = line.trim();
        if matches!(choice, "q" | "quit" | "exit") {
            break;
        }

        match dispatch(choice, &mut tree, &mut lines) {
            Ok(()) => {}
            // a typo should not end the session
            Err(AppError::InvalidNumber(input)) => {
                output::failure(&format!("not a number: {}", input))
            }
            Err(e) => return Err(e),
        }

        println!();
        show_menu();
    }

    Ok(())
}

fn dispatch(
    choice: &str,
    tree: &mut Tree,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> AppResult<()> {
    match choice {
        "1" => {
            let key = read_number("Number to insert:", lines)?;
            tree.insert(key);
            output::success(&format!("inserted {}", key));
        }
        "2" => print_keys("pre-order", &tree.keys(Order::Pre)),
        "3" => output::info(&format!("Depth: {}", tree.depth())),
        "4" => {
            for level in 0..tree.depth() {
                let keys = tree.keys_at_level(level);
                output::info(&format!("Level {}: {}", level, keys.iter().join(" ")));
            }
        }
        "5" => search(tree, Strategy::Breadth, lines)?,
        "6" => {
            tree.clear();
            output::success("cleared the tree");
        }
        "7" => {
            tree.balance();
            output::success(&format!("balanced, depth is now {}", tree.depth()));
        }
        "8" => {
            if tree.is_valid() {
                output::success("the tree is a valid BST");
            } else {
                output::failure("the tree is not a valid BST");
            }
        }
        "9" => output::info(&format!("{} nodes in the tree", tree.size())),
        "10" => search(tree, Strategy::Depth, lines)?,
        "11" => {
            let path = tree.max_sum_path();
            let sum: i64 = path.iter().sum();
            output::info(&format!("{} = {}", path.iter().join(" "), sum));
        }
        "12" => print_keys("in-order", &tree.keys(Order::In)),
        "13" => print_keys("post-order", &tree.keys(Order::Post)),
        "14" => {
            let a = read_number("First key:", lines)?;
            let b = read_number("Second key:", lines)?;
            match tree.first_common_ancestor(a, b) {
                Some(ancestor) => {
                    output::info(&format!("first common ancestor of {} and {}: {}", a, b, ancestor))
                }
                None => output::failure("both keys must be present in the tree"),
            }
        }
        "15" => print!("{}", tree.to_tree_string()),
        "" => {}
        other => output::failure(&format!("unknown choice: {}", other)),
    }
    Ok(())
}

fn search(
    tree: &Tree,
    strategy: Strategy,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> AppResult<()> {
    let key = read_number("What number are we looking for?:", lines)?;
    match tree.search(key, strategy) {
        Some(found) => output::success(&format!("found {}", found)),
        None => output::failure(&format!("{} was not found in the tree", key)),
    }
    Ok(())
}

fn print_keys(label: &str, keys: &[i64]) {
    output::info(&format!("{}: {}", label, keys.iter().join(" ")));
}

fn read_number(
    prompt_text: &str,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> AppResult<i64> {
    output::prompt(prompt_text);
    let line = lines.next().transpose()?.ok_or_else(|| {
        AppError::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))
    })?;
    line.trim()
        .parse()
        .map_err(|_| AppError::InvalidNumber(line.trim().to_string()))
}

fn show_menu() {
    output::header("What would you like to do?");
    output::detail("1.  Insert a new node");
    output::detail("2.  Print the tree pre-order");
    output::detail("3.  Calculate the depth of the tree");
    output::detail("4.  Print the tree level order");
    output::detail("5.  Breadth-first search");
    output::detail("6.  Clear the tree");
    output::detail("7.  Balance the tree");
    output::detail("8.  Validate the BST");
    output::detail("9.  Count nodes in the tree");
    output::detail("10. Depth-first search");
    output::detail("11. Find the maximum sum path");
    output::detail("12. Print the tree in-order");
    output::detail("13. Print the tree post-order");
    output::detail("14. Find the first common ancestor of two keys");
    output::detail("15. Show the tree shape");
    output::detail("q.  Quit");
}
