//! delve: item generator driver
//!
//! Generates items, gold and artifacts from the standard data set (or a
//! JSON data file) and samples the allocation tables for balance work.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use strum::IntoEnumIterator;
use tracing::{debug, info};

use delve_core::alloc::AllocationTable;
use delve_core::object::{GameData, GeneratedItem, KindId, Payload, Season, Tval};
use delve_core::select::{artifact_probabilities, ego_probabilities_for_kind};
use delve_core::{
    GameRng, GenConfig, GenerationContext, ObjectRequest, RunState, make_artifact, make_gold,
    make_object, make_object_named,
};

/// Procedural item generator
#[derive(Parser, Debug)]
#[command(name = "delve")]
#[command(author, version, about = "Generate dungeon items, gold and artifacts", long_about = None)]
struct Cli {
    /// RNG seed (random when omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Tuning constants as JSON
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Item data as JSON (standard data set when omitted)
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Season for seasonal kinds, overriding the configuration
    #[arg(long, global = true, value_parser = parse_season)]
    season: Option<Season>,

    /// Never generate artifacts
    #[arg(long, global = true)]
    no_artifacts: bool,

    /// Print items as JSON lines
    #[arg(long, global = true)]
    json: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate objects
    Make(MakeArgs),
    /// Generate piles of money
    Gold(GoldArgs),
    /// Generate artifacts until none are left or the count is reached
    Artifact(ArtifactArgs),
    /// Sample the distributions without building items
    Stats(StatsArgs),
    /// List the item categories accepted by --tval
    Tvals,
}

#[derive(Args, Debug)]
struct MakeArgs {
    #[arg(short, long, default_value_t = 1)]
    depth: i32,

    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// At least good quality
    #[arg(long)]
    good: bool,

    /// Great quality (implies --good)
    #[arg(long)]
    great: bool,

    /// Two extra artifact rolls
    #[arg(long)]
    extra_roll: bool,

    /// Generate inside a vault
    #[arg(long)]
    vault: bool,

    /// Restrict to one item category
    #[arg(long, value_parser = parse_tval)]
    tval: Option<Tval>,

    /// Generate a named kind (exact, prefix or close match)
    #[arg(long, conflicts_with = "tval")]
    name: Option<String>,
}

#[derive(Args, Debug)]
struct GoldArgs {
    #[arg(short, long, default_value_t = 1)]
    depth: i32,

    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Coin kind to use regardless of amount
    #[arg(long)]
    coin: Option<String>,

    /// Double the average amount
    #[arg(long)]
    greedy: bool,
}

#[derive(Args, Debug)]
struct ArtifactArgs {
    #[arg(short, long, default_value_t = 1)]
    depth: i32,

    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    #[arg(long, value_parser = parse_tval)]
    tval: Option<Tval>,
}

#[derive(Args, Debug)]
struct StatsArgs {
    #[arg(short, long, default_value_t = 1)]
    depth: i32,

    /// Kind draws to take
    #[arg(long, default_value_t = 10_000)]
    samples: usize,

    /// Only count good kinds
    #[arg(long)]
    good: bool,

    #[arg(long, value_parser = parse_tval)]
    tval: Option<Tval>,

    /// Rows to print per table
    #[arg(long, default_value_t = 15)]
    top: usize,
}

fn parse_tval(s: &str) -> Result<Tval, String> {
    Tval::from_str(s).map_err(|_| format!("unknown item category '{s}' (see `delve tvals`)"))
}

fn parse_season(s: &str) -> Result<Season, String> {
    Season::from_str(s).map_err(|_| format!("unknown season '{s}'"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let mut ctx = load_context(&cli)?;
    let mut rng = match cli.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!(seed = rng.seed(), "rng ready");

    let run = RunState {
        no_artifacts: cli.no_artifacts,
        ..RunState::default()
    };

    match &cli.command {
        Command::Make(args) => cmd_make(&mut ctx, &mut rng, &run, args, cli.json),
        Command::Gold(args) => cmd_gold(&ctx, &mut rng, &run, args, cli.json),
        Command::Artifact(args) => cmd_artifact(&mut ctx, &mut rng, &run, args, cli.json),
        Command::Stats(args) => cmd_stats(&ctx, &mut rng, args),
        Command::Tvals => {
            for tval in Tval::iter() {
                println!("{tval}");
            }
            Ok(())
        }
    }
}

fn setup_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("delve_core=debug,delve=debug,info"),
        _ => EnvFilter::new("delve_core=trace,delve=trace,debug"),
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn load_context(cli: &Cli) -> Result<GenerationContext> {
    let data = match &cli.data {
        Some(path) => GameData::from_json(&read_file(path)?)
            .with_context(|| format!("loading item data from {}", path.display()))?,
        None => delve_data::standard_data().context("standard data set is invalid")?,
    };
    let mut config = match &cli.config {
        Some(path) => GenConfig::from_json(&read_file(path)?)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => GenConfig::default(),
    };
    if let Some(season) = cli.season {
        config.season = season;
    }
    debug!(
        kinds = data.kinds().len(),
        egos = data.egos().len(),
        artifacts = data.artifacts().len(),
        season = %config.season,
        "loaded data"
    );
    Ok(GenerationContext::new(data, config)?)
}

// ============================================================================
// Commands
// ============================================================================

fn cmd_make(
    ctx: &mut GenerationContext,
    rng: &mut GameRng,
    run: &RunState,
    args: &MakeArgs,
    json: bool,
) -> Result<()> {
    let run = RunState {
        depth: args.depth,
        ..*run
    };
    let mut req = ObjectRequest::for_run(&run);
    if args.great {
        req = req.great();
    } else if args.good {
        req = req.good();
    }
    if args.extra_roll {
        req = req.extra_roll();
    }
    if args.vault {
        req = req.in_vault();
    }
    if let Some(tval) = args.tval {
        req = req.of_tval(tval);
    }

    if let Some(name) = &args.name
        && delve_core::find_kind_by_name(ctx.data(), ctx.config().season, name).is_none()
    {
        bail!("no kind matches '{name}'");
    }

    let mut made = 0;
    for _ in 0..args.count {
        let item = match &args.name {
            Some(name) => make_object_named(ctx, rng, &run, &req, name),
            None => make_object(ctx, rng, &run, &req),
        };
        match item {
            Some(item) => {
                made += 1;
                print_item(ctx.data(), &item, json)?;
            }
            None if !json => println!("(nothing)"),
            None => {}
        }
    }
    info!(requested = args.count, made, "done");
    Ok(())
}

fn cmd_gold(
    ctx: &GenerationContext,
    rng: &mut GameRng,
    run: &RunState,
    args: &GoldArgs,
    json: bool,
) -> Result<()> {
    let run = RunState {
        greedy: args.greedy,
        ..*run
    };
    for _ in 0..args.count {
        let gold = make_gold(ctx, rng, &run, args.depth, args.coin.as_deref());
        print_item(ctx.data(), &gold, json)?;
    }
    Ok(())
}

fn cmd_artifact(
    ctx: &mut GenerationContext,
    rng: &mut GameRng,
    run: &RunState,
    args: &ArtifactArgs,
    json: bool,
) -> Result<()> {
    for i in 0..args.count {
        let Some(item) = make_artifact(ctx, rng, run, args.depth, args.tval) else {
            if !json {
                println!("(no artifact left after {i})");
            }
            break;
        };
        print_item(ctx.data(), &item, json)?;
    }
    Ok(())
}

fn cmd_stats(ctx: &GenerationContext, rng: &mut GameRng, args: &StatsArgs) -> Result<()> {
    let data = ctx.data();
    let table: &AllocationTable = ctx.alloc();
    let mass = match args.tval {
        Some(tval) => table.tval_total(args.depth, args.good, tval),
        None => table.total(args.depth, args.good),
    };
    if mass <= 0.0 {
        bail!("nothing can be generated at depth {} with these constraints", args.depth);
    }

    let mut counts: BTreeMap<KindId, usize> = BTreeMap::new();
    for _ in 0..args.samples {
        if let Some(kind) = table.select_kind(data, rng, args.depth, args.good, args.tval) {
            *counts.entry(kind).or_default() += 1;
        }
    }
    let mut kinds: Vec<(KindId, usize)> = counts.into_iter().collect();
    kinds.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    println!("kinds at depth {} ({} samples):", args.depth, args.samples);
    for &(kind, n) in kinds.iter().take(args.top) {
        let expected = table.weight(args.depth, args.good, kind) / mass;
        println!(
            "  {:<32} {:>6.2}%  (expected {:>6.2}%)",
            data.kind(kind).name,
            100.0 * n as f64 / args.samples as f64,
            100.0 * expected
        );
    }

    if let Some(&(kind, _)) = kinds.first() {
        let egos = ego_probabilities_for_kind(ctx, args.depth, kind);
        println!("egos for {}:", data.kind(kind).name);
        print_probabilities(&egos, args.top, |i| data.egos()[i].name.clone());
    }

    let arts = artifact_probabilities(ctx, args.depth, args.tval);
    println!("artifacts:");
    print_probabilities(&arts, args.top, |i| data.artifacts()[i].name.clone());
    Ok(())
}

fn print_probabilities(
    table: &delve_core::alloc::SparseTable,
    top: usize,
    name: impl Fn(usize) -> String,
) {
    if table.is_empty() {
        println!("  (none)");
        return;
    }
    let mut rows: Vec<(usize, f64)> = (0..table.slots().len())
        .map(|i| (i, table.probability(i)))
        .filter(|&(_, p)| p > 0.0)
        .collect();
    rows.sort_by(|a, b| b.1.total_cmp(&a.1));
    for (i, p) in rows.into_iter().take(top) {
        println!("  {:<32} {:>6.2}%", name(i), 100.0 * p);
    }
}

// ============================================================================
// Output
// ============================================================================

fn print_item(data: &GameData, item: &GeneratedItem, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(item)?);
    } else {
        println!("{}", describe(data, item));
    }
    Ok(())
}

/// One-line description, e.g. `3 Arrows of Burning (+4,+6) [12 gold]`
fn describe(data: &GameData, item: &GeneratedItem) -> String {
    let kind = data.kind(item.kind);
    if item.is_cash() {
        return format!("{} {} pieces", item.pval, kind.name.to_lowercase());
    }

    let mut name = if item.number > 1 {
        format!("{} {}s", item.number, kind.name)
    } else {
        kind.name.clone()
    };
    if let Some(art) = item.artifact() {
        name = format!("{} {}", name, data.artifact(art).name);
    }
    for &ego in item.egos() {
        name = format!("{} {}", name, data.ego(ego).name);
    }

    let mut extras = Vec::new();
    if kind.tval.is_weapon() && item.dd > 0 {
        extras.push(format!("({}d{})", item.dd, item.ds));
    }
    if item.to_h != 0 || item.to_d != 0 {
        extras.push(format!("({:+},{:+})", item.to_h, item.to_d));
    }
    if kind.tval.is_armour() || item.to_a != 0 {
        extras.push(format!("[{},{:+}]", item.ac, item.to_a));
    }
    if item.pval != 0 {
        extras.push(format!("<{}>", item.pval));
    }
    if let Payload::Chest(traps) = item.payload
        && !traps.is_empty()
    {
        extras.push(format!("{{trapped: {traps:?}}}"));
    }
    if item.is_faulty() {
        extras.push("{faulty}".to_string());
    }

    let mut line = name;
    for extra in extras {
        line.push(' ');
        line.push_str(&extra);
    }
    format!("{line} [{} gold]", item.value)
}
