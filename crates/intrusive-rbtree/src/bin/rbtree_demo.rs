//! `rbtree-demo`: insert a run of integers, delete one, print the tree.
//!
//! Usage:
//!   rbtree-demo [COUNT] [KEY]
//!
//! Inserts `0..COUNT` (default 10), looks up and deletes `KEY` (default 5),
//! then prints every node in order with its parent, color and side.
//! Log level comes from `RBTREE_LOG` (default `warn`).

use std::io::{self, Write};
use std::process;

use intrusive_rbtree::{KeyedNode, Link, Node, RbTree};
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

struct Item {
    link: Link,
    value: i64,
}

impl Node for Item {
    fn link(&self) -> &Link {
        &self.link
    }

    fn link_mut(&mut self) -> &mut Link {
        &mut self.link
    }
}

impl KeyedNode for Item {
    type Key = i64;

    fn key(&self) -> &i64 {
        &self.value
    }
}

fn initialize_logging() {
    let level = std::env::var("RBTREE_LOG")
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);
    // Keeps any logger installed earlier.
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);
}

fn parse_arg(args: &[String], i: usize, default: i64, name: &str) -> Result<i64, String> {
    match args.get(i) {
        None => Ok(default),
        Some(s) => s
            .parse()
            .map_err(|_| format!("{name} must be an integer, got \"{s}\".")),
    }
}

/// Builds the tree, deletes `key` and writes the report to `out`.
fn run(count: i64, key: i64, out: &mut impl Write) -> io::Result<()> {
    let mut items: Vec<Item> = (0..count)
        .map(|value| Item {
            link: Link::new(),
            value,
        })
        .collect();

    let mut tree = RbTree::new();
    for i in 0..items.len() as u32 {
        if let Err(e) = tree.insert(&mut items, i) {
            eprintln!("insert {}: {e}", items[i as usize].value);
        }
    }
    info!("inserted {} items", tree.len(&items));

    match tree.lookup(&items, &key) {
        Some(n) => {
            writeln!(out, "Find {}.", items[n as usize].value)?;
            tree.delete(&mut items, n);
        }
        None => writeln!(out, "{key} not exist.")?,
    }

    if let Err(e) = tree.assert_valid(&items) {
        return Err(io::Error::new(io::ErrorKind::Other, format!("tree invariant broken: {e}")));
    }

    writeln!(out, "parent node color   dir")?;
    tree.foreach_inorder(&items, |items, i| {
        let n = &items[i as usize];
        match n.p() {
            None => writeln!(out, "       {:4} {:>5}", n.value, n.color().as_str()),
            Some(p) => {
                let parent = &items[p as usize];
                let dir = if parent.r() == Some(i) { "right" } else { "left" };
                writeln!(
                    out,
                    "{:6} {:4} {:>5} {:>5}",
                    parent.value,
                    n.value,
                    n.color().as_str(),
                    dir
                )
            }
        }
    })?;

    let mut released = 0usize;
    tree.teardown(&mut items, |_, _| released += 1);
    info!("released {released} items");
    Ok(())
}

fn main() {
    initialize_logging();

    let args: Vec<String> = std::env::args().collect();
    let parsed = parse_arg(&args, 1, 10, "COUNT").and_then(|count| {
        let key = parse_arg(&args, 2, 5, "KEY")?;
        if !(0..=u32::MAX as i64).contains(&count) {
            return Err(format!("COUNT must be between 0 and {}.", u32::MAX));
        }
        Ok((count, key))
    });
    let (count, key) = match parsed {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("{msg}");
            process::exit(1);
        }
    };

    if let Err(e) = run(count, key, &mut io::stdout().lock()) {
        eprintln!("{e}");
        process::exit(1);
    }
}
