//! `tagweave edit` — apply selection edits to a prompt file.

use clap::Args;
use std::path::PathBuf;
use std::str::FromStr;
use tagweave_selection::Placement;
use tagweave_session::{EditSession, FileHost, SessionOptions};

use super::{catalog_or_empty, load_config};

#[derive(Args, Debug, Default)]
pub struct EditArgs {
    /// Prompt file to edit (created on commit if missing)
    #[arg(short, long)]
    pub file: PathBuf,

    /// Add a tag (repeatable)
    #[arg(long, value_name = "TAG")]
    pub add: Vec<String>,

    /// Remove a tag (repeatable)
    #[arg(long, value_name = "TAG")]
    pub remove: Vec<String>,

    /// Add the tag if absent, remove it if present (repeatable)
    #[arg(long, value_name = "TAG")]
    pub toggle: Vec<String>,

    /// Like or unlike a catalog alias (repeatable)
    #[arg(long, value_name = "ALIAS")]
    pub like: Vec<String>,

    /// Raise a tag's weight by one step (repeatable)
    #[arg(long, value_name = "TAG")]
    pub increase: Vec<String>,

    /// Lower a tag's weight by one step (repeatable)
    #[arg(long, value_name = "TAG")]
    pub decrease: Vec<String>,

    /// Move a tag: `NAME:before:TARGET` or `NAME:after:TARGET`
    #[arg(long = "move", value_name = "MOVE")]
    pub moves: Vec<MoveSpec>,

    /// Sort the selection into catalog order
    #[arg(long)]
    pub sort: bool,

    /// Print the result without writing the file
    #[arg(long)]
    pub dry_run: bool,
}

/// One `--move` argument.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveSpec {
    pub name: String,
    pub placement: Placement,
}

impl FromStr for MoveSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let (Some(name), Some(side), Some(target)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(format!("expected NAME:before|after:TARGET, got '{s}'"));
        };
        let (name, target) = (name.trim(), target.trim());
        if name.is_empty() || target.is_empty() {
            return Err(format!("empty tag name in '{s}'"));
        }

        let placement = match side.trim() {
            "before" => Placement::Before(target.to_string()),
            "after" => Placement::After(target.to_string()),
            other => return Err(format!("unknown placement '{other}', use before or after")),
        };
        Ok(Self {
            name: name.to_string(),
            placement,
        })
    }
}

pub fn run(args: EditArgs, data_dir: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(data_dir)?;
    let catalog = catalog_or_empty(&config);

    let host = FileHost::new(&args.file);
    let mut session = EditSession::open(Box::new(host), catalog)?.with_options(SessionOptions {
        sort_on_commit: config.editor.sort_on_commit,
    });

    apply(&mut session, &args);

    let text = if args.dry_run {
        session.stage()
    } else {
        session.commit()?
    };

    println!("📝 {} ({} tags)", args.file.display(), session.store().len());
    for label in session.labels(config.editor.label_precision) {
        println!("   {label}");
    }
    println!();
    println!("{text}");
    if args.dry_run {
        println!();
        println!("   (dry run, file not written)");
    }
    Ok(())
}

/// Apply every requested edit in a fixed order. Edits naming tags that are
/// not selected are logged and skipped.
fn apply(session: &mut EditSession, args: &EditArgs) {
    for name in &args.remove {
        if !session.remove(name) {
            tracing::warn!(tag = %name, "Not selected, nothing to remove");
        }
    }
    for name in &args.add {
        if !session.add(name) {
            tracing::debug!(tag = %name, "Already selected or blank");
        }
    }
    for name in &args.toggle {
        session.store_mut().toggle(name, None);
    }
    for alias in &args.like {
        session.like(alias);
    }
    for (names, increase) in [(&args.increase, true), (&args.decrease, false)] {
        for name in names {
            if session.adjust_weight(name, increase).is_none() {
                tracing::warn!(tag = %name, "Not selected, weight unchanged");
            }
        }
    }
    for spec in &args.moves {
        if !session.reorder(&spec.name, &spec.placement) {
            tracing::warn!(tag = %spec.name, "Move skipped, tag or target not selected");
        }
    }
    if args.sort {
        session.sort_by_catalog();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagweave_core::EmptyCatalog;
    use tagweave_session::MemoryHost;

    fn session(text: &str) -> EditSession {
        EditSession::open(Box::new(MemoryHost::new(text)), Box::new(EmptyCatalog)).unwrap()
    }

    #[test]
    fn move_spec_parses_both_sides() {
        let spec: MoveSpec = "a:before:b".parse().unwrap();
        assert_eq!(spec.name, "a");
        assert_eq!(spec.placement, Placement::Before("b".into()));

        let spec: MoveSpec = " x : after : y ".parse().unwrap();
        assert_eq!(spec.name, "x");
        assert_eq!(spec.placement, Placement::After("y".into()));
    }

    #[test]
    fn move_spec_rejects_malformed_input() {
        assert!("a:b".parse::<MoveSpec>().is_err());
        assert!("a:over:b".parse::<MoveSpec>().is_err());
        assert!(":before:b".parse::<MoveSpec>().is_err());
    }

    #[test]
    fn apply_runs_edits_in_order() {
        let mut session = session("a, b:1.2, c");
        let args = EditArgs {
            remove: vec!["c".into()],
            add: vec!["d".into()],
            toggle: vec!["a".into(), "e".into()],
            increase: vec!["b".into()],
            decrease: vec!["d".into()],
            moves: vec!["e:before:b".parse().unwrap()],
            ..EditArgs::default()
        };
        apply(&mut session, &args);
        assert_eq!(session.preview(), "e, b:1.25, d:0.95");
    }

    #[test]
    fn apply_skips_unknown_tags() {
        let mut session = session("a");
        let args = EditArgs {
            remove: vec!["zzz".into()],
            increase: vec!["zzz".into()],
            moves: vec!["a:after:zzz".parse().unwrap()],
            ..EditArgs::default()
        };
        apply(&mut session, &args);
        assert_eq!(session.preview(), "a");
    }
}
