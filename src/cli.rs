use crate::prelude::*;
use clap::Parser;
use itertools::Itertools;
use serde::Serialize;
use std::fmt::Write;

/// Print the cheapest edit script that turns FROM into TO.
///
/// Each output line is one step: `SKP`, `DEL`, `INS` or `REP`, followed by
/// the symbol(s) involved.
///
/// Put `--` before FROM when it starts with a dash: `optedit -- -ab ab`.
#[derive(Parser, Serialize, Debug)]
#[clap(version, about)]
pub struct Cli {
    /// The source string.
    #[arg(value_name = "FROM")]
    pub from: String,

    /// The target string.
    #[arg(value_name = "TO")]
    pub to: String,

    #[clap(flatten)]
    pub costs: CostArgs,

    /// Print both symbols for SKP and REP lines.
    #[arg(short, long)]
    pub both: bool,

    /// Also print the run-length compressed summary of the script.
    #[arg(long, conflicts_with = "json")]
    pub cigar: bool,

    /// Print the script as JSON instead of one line per step.
    #[arg(long)]
    pub json: bool,

    /// Log more. Pass twice for a line per traceback step.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Parser, Serialize, Debug, Default)]
#[clap(next_help_heading = "Costs")]
pub struct CostArgs {
    /// Start from unit costs (skip=0, others 1) instead of skip=1 delete=10 insert=10 replace=2.
    #[arg(long)]
    pub unit: bool,

    /// Cost of keeping an equal symbol.
    #[arg(long, value_name = "COST")]
    pub skip: Option<Cost>,

    /// Cost of dropping a FROM symbol.
    #[arg(long, value_name = "COST")]
    pub delete: Option<Cost>,

    /// Cost of adding a TO symbol.
    #[arg(long, value_name = "COST")]
    pub insert: Option<Cost>,

    /// Cost of substituting a symbol by a different one.
    #[arg(long, value_name = "COST")]
    pub replace: Option<Cost>,
}

impl CostArgs {
    /// The base table with the given overrides applied.
    pub fn resolve(&self) -> CostTable {
        let base = if self.unit {
            CostTable::unit()
        } else {
            CostTable::default()
        };
        CostTable {
            skip: self.skip.unwrap_or(base.skip),
            delete: self.delete.unwrap_or(base.delete),
            insert: self.insert.unwrap_or(base.insert),
            replace: self.replace.unwrap_or(base.replace),
        }
    }
}

/// One output line for a record.
///
/// The minimal form shows a single symbol: the deleted one for DEL, the target
/// one otherwise. With `both`, SKP and REP show the source and the target symbol.
pub fn format_record(r: &EditRecord<char>, both: bool) -> String {
    let symbols = match (r.kind, both) {
        (Skip | Replace, true) => [r.source, r.target].into_iter().flatten().join(" "),
        _ => r.symbol().map(|c| c.to_string()).unwrap_or_default(),
    };
    format!("{} {symbols}", r.kind)
}

/// Everything `--json` prints.
#[derive(Serialize)]
pub struct JsonOutput<'a> {
    pub costs: CostTable,
    pub cost: Cost,
    pub cigar: String,
    pub records: &'a [EditRecord<char>],
}

/// Render the full output of the tool for `script`.
pub fn render(script: &EditScript<char>, costs: &CostTable, args: &Cli) -> String {
    if args.json {
        let out = JsonOutput {
            costs: *costs,
            cost: script.cost(),
            cigar: script.cigar().to_string(),
            records: script.records(),
        };
        // Serializing plain structs of chars and integers does not fail.
        return serde_json::to_string_pretty(&out).unwrap() + "\n";
    }
    let mut s = String::new();
    for r in script {
        writeln!(s, "{}", format_record(r, args.both)).unwrap();
    }
    if args.cigar {
        writeln!(s, "{}", script.cigar()).unwrap();
    }
    s
}
