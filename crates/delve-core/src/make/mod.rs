//! Item creation
//!
//! One request walks a fixed ladder: artifact, multi-ego, single ego,
//! mundane. A single draw in `0..10000` picks the starting rung and any rung
//! that finds no candidate falls through to the next one.

mod enchant;
mod money;
mod prep;
mod value;

pub use enchant::{
    apply_magic, copy_artifact_data, ego_apply_magic, ego_apply_minima, pick_chest_traps,
};
pub use money::{average_gold, coin_rank, find_coin, make_gold, roll_gold_value};
pub use prep::{apply_random_powers, object_prep};
pub use value::{item_value, roll_stack_size, unit_value};

use strsim::jaro_winkler;
use tracing::{debug, trace};

use crate::alloc::is_structurally_excluded;
use crate::context::GenerationContext;
use crate::object::{
    ArtifactId, Aspect, EgoId, GameData, GeneratedItem, KindFlags, KindId, Season, Tval,
};
use crate::rng::GameRng;
use crate::select::{
    MultiEgoTable, select_artifact, select_artifact_for_kind, select_ego, select_ego_for_kind,
    select_kind_for_ego, select_kind_for_ego_set,
};
use crate::world::RunState;

/// Width of the ladder draw
const LADDER_SCALE: u32 = 10_000;
/// Lowest similarity accepted by fuzzy name matching
const FUZZY_THRESHOLD: f64 = 0.85;

// ============================================================================
// Requests
// ============================================================================

/// What the caller wants generated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjectRequest {
    pub depth: i32,
    /// Draw from the good table and roll at least good bonuses
    pub good: bool,
    /// Roll great bonuses; implies `good`
    pub great: bool,
    /// Two extra artifact rolls
    pub extra_roll: bool,
    /// Restrict to one category
    pub tval: Option<Tval>,
    /// Vault-only kinds may be produced
    pub in_vault: bool,
}

impl ObjectRequest {
    pub fn at(depth: i32) -> Self {
        Self {
            depth,
            ..Default::default()
        }
    }

    /// A plain request at the run's current depth
    pub fn for_run(run: &RunState) -> Self {
        Self::at(run.depth)
    }

    pub fn good(mut self) -> Self {
        self.good = true;
        self
    }

    pub fn great(mut self) -> Self {
        self.good = true;
        self.great = true;
        self
    }

    pub fn extra_roll(mut self) -> Self {
        self.extra_roll = true;
        self
    }

    pub fn of_tval(mut self, tval: Tval) -> Self {
        self.tval = Some(tval);
        self
    }

    pub fn in_vault(mut self) -> Self {
        self.in_vault = true;
        self
    }
}

/// Rungs of the decision ladder, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rung {
    Artifact,
    MultiEgo,
    Ego,
    Mundane,
}

impl Rung {
    /// Where a failed rung falls to; ego rungs need a great item
    fn next(self, power: i32) -> Option<Rung> {
        match self {
            Rung::Artifact if power >= 2 => Some(Rung::MultiEgo),
            Rung::Artifact => Some(Rung::Mundane),
            Rung::MultiEgo => Some(Rung::Ego),
            Rung::Ego => Some(Rung::Mundane),
            Rung::Mundane => None,
        }
    }
}

/// Quality of the item: 0 ordinary, 1 good, 2 great
fn roll_power(ctx: &GenerationContext, rng: &mut GameRng, req: &ObjectRequest) -> i32 {
    let config = ctx.config();
    let mut power = 0;
    if req.good || rng.randint0(100) < config.good_chance(req.depth) {
        power = 1;
        if req.great || rng.randint0(100) < config.great_chance {
            power = 2;
        }
    }
    power
}

fn artifact_rolls(req: &ObjectRequest, run: &RunState, power: i32) -> u32 {
    if run.no_artifacts {
        return 0;
    }
    let mut rolls = if req.great {
        4
    } else if power >= 2 {
        1
    } else {
        0
    };
    if req.extra_roll {
        rolls += 2;
    }
    rolls
}

fn pick_rung(
    ctx: &GenerationContext,
    rng: &mut GameRng,
    req: &ObjectRequest,
    run: &RunState,
    power: i32,
) -> Rung {
    let config = ctx.config();
    let r = rng.rn2(LADDER_SCALE);
    let mut threshold = artifact_rolls(req, run, power) * config.artifact_roll_chance;
    if r < threshold {
        return Rung::Artifact;
    }
    if power < 2 {
        return Rung::Mundane;
    }
    threshold += config.multi_ego_chance(req.depth);
    if r < threshold {
        Rung::MultiEgo
    } else {
        Rung::Ego
    }
}

fn is_vault_only(data: &GameData, kind: KindId) -> bool {
    data.kind(kind).kind_flags.contains(KindFlags::VAULT_ONLY)
}

// ============================================================================
// Assembly
// ============================================================================

/// Build a non-artifact item of `kind` carrying `egos`
fn assemble(
    ctx: &GenerationContext,
    rng: &mut GameRng,
    kind: KindId,
    depth: i32,
    power: i32,
    egos: &[EgoId],
) -> GeneratedItem {
    let data = ctx.data();
    let config = ctx.config();
    let mut item = object_prep(data, config, rng, kind, depth, Aspect::Randomise);

    let mut gen_flags = data.kind(kind).kind_flags;
    for &ego in egos {
        if item.attach_ego(ego) {
            gen_flags |= data.ego(ego).gen_flags;
        }
    }
    apply_random_powers(rng, &mut item, gen_flags, config.extra_power_continue);
    for ego in item.egos().to_vec() {
        ego_apply_magic(data, config, rng, &mut item, ego, depth);
    }

    let level = apply_magic(data, config, rng, &mut item, depth, power);
    ego_apply_minima(data, &mut item);
    roll_stack_size(data, config, rng, &mut item, level);
    item.value = item_value(data, &item, depth);
    item
}

/// Mark an artifact created and build its item
fn build_artifact(
    ctx: &mut GenerationContext,
    rng: &mut GameRng,
    id: ArtifactId,
    depth: i32,
) -> Option<GeneratedItem> {
    let art = ctx.data().artifact(id);
    let kind = art.kind?;
    let level = art.alloc.min;
    assert!(!ctx.is_created(id), "artifact {} generated twice", art.name);
    ctx.mark_created(id);

    let data = ctx.data();
    let mut item = object_prep(data, ctx.config(), rng, kind, level, Aspect::Randomise);
    item.origin_depth = depth;
    item.attach_artifact(id);
    copy_artifact_data(data, &mut item, id);
    item.value = item_value(data, &item, depth);
    debug!(artifact = %data.artifact(id).name, depth, "created artifact");
    Some(item)
}

// ============================================================================
// Entry points
// ============================================================================

/// Generate an uncreated artifact for `depth`
///
/// Returns `None` when artifacts are disabled or none is left.
pub fn make_artifact(
    ctx: &mut GenerationContext,
    rng: &mut GameRng,
    run: &RunState,
    depth: i32,
    tval: Option<Tval>,
) -> Option<GeneratedItem> {
    if run.no_artifacts {
        return None;
    }
    let id = select_artifact(ctx, rng, depth, tval)?;
    build_artifact(ctx, rng, id, depth)
}

/// Generate one item for the request
///
/// `None` is an ordinary outcome: nothing eligible, or every retry drew a
/// kind that cannot appear here.
pub fn make_object(
    ctx: &mut GenerationContext,
    rng: &mut GameRng,
    run: &RunState,
    req: &ObjectRequest,
) -> Option<GeneratedItem> {
    let power = roll_power(ctx, rng, req);
    let mut rung = Some(pick_rung(ctx, rng, req, run, power));
    let depth = req.depth;

    while let Some(current) = rung {
        trace!(?current, power, depth, "trying rung");
        let made = match current {
            Rung::Artifact => select_artifact(ctx, rng, depth, req.tval)
                .and_then(|id| build_artifact(ctx, rng, id, depth)),
            Rung::MultiEgo => make_multi_ego(ctx, rng, req, power),
            Rung::Ego => make_single_ego(ctx, rng, req, power),
            Rung::Mundane => make_mundane(ctx, rng, req, power),
        };
        if made.is_some() {
            debug!(?current, depth, "made object");
            return made;
        }
        rung = current.next(power);
    }
    None
}

fn make_multi_ego(
    ctx: &GenerationContext,
    rng: &mut GameRng,
    req: &ObjectRequest,
    power: i32,
) -> Option<GeneratedItem> {
    let table = MultiEgoTable::build(ctx, req.depth, req.tval);
    for attempt in 0..ctx.config().make_tries {
        let egos = table.select(rng)?.egos();
        let Some(kind) = select_kind_for_ego_set(ctx, rng, req.depth, egos, req.tval) else {
            continue;
        };
        if !req.in_vault && is_vault_only(ctx.data(), kind) {
            trace!(attempt, kind = %ctx.data().kind(kind).name, "discarded ego pair base");
            continue;
        }
        return Some(assemble(ctx, rng, kind, req.depth, power, &egos));
    }
    None
}

fn make_single_ego(
    ctx: &GenerationContext,
    rng: &mut GameRng,
    req: &ObjectRequest,
    power: i32,
) -> Option<GeneratedItem> {
    for attempt in 0..ctx.config().make_tries {
        let ego = select_ego(ctx, rng, req.depth, req.tval)?;
        let Some(kind) = select_kind_for_ego(ctx, rng, req.depth, ego, req.tval) else {
            continue;
        };
        if !req.in_vault && is_vault_only(ctx.data(), kind) {
            trace!(attempt, kind = %ctx.data().kind(kind).name, "discarded ego base");
            continue;
        }
        return Some(assemble(ctx, rng, kind, req.depth, power, &[ego]));
    }
    None
}

fn make_mundane(
    ctx: &GenerationContext,
    rng: &mut GameRng,
    req: &ObjectRequest,
    power: i32,
) -> Option<GeneratedItem> {
    let data = ctx.data();
    let season = ctx.config().season;
    for attempt in 0..ctx.config().make_tries {
        let kind = ctx
            .alloc()
            .select_kind(data, rng, req.depth, req.good, req.tval)?;
        if is_structurally_excluded(data.kind(kind), season) || (!req.in_vault && is_vault_only(data, kind)) {
            trace!(attempt, kind = %data.kind(kind).name, "discarded kind");
            continue;
        }
        return Some(assemble(ctx, rng, kind, req.depth, power, &[]));
    }
    debug!(depth = req.depth, "gave up after repeated exclusions");
    None
}

// ============================================================================
// Named requests
// ============================================================================

/// Resolve a kind name: exact, then prefix, then fuzzy
///
/// Case is ignored. Kinds no selector may produce are never matched.
pub fn find_kind_by_name(data: &GameData, season: Season, name: &str) -> Option<KindId> {
    let wanted = name.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    let candidates: Vec<(KindId, String)> = data
        .kinds()
        .iter()
        .enumerate()
        .filter(|(_, k)| k.tval != Tval::Gold && !is_structurally_excluded(k, season))
        .map(|(i, k)| (KindId(i), k.name.to_lowercase()))
        .collect();

    if let Some((id, _)) = candidates.iter().find(|(_, n)| *n == wanted) {
        return Some(*id);
    }
    if let Some((id, _)) = candidates
        .iter()
        .filter(|(_, n)| n.starts_with(&wanted))
        .min_by_key(|(_, n)| n.len())
    {
        return Some(*id);
    }

    let (id, score) = candidates
        .iter()
        .map(|(id, n)| (*id, jaro_winkler(&wanted, n)))
        .max_by(|a, b| a.1.total_cmp(&b.1))?;
    trace!(name, score, "fuzzy kind match");
    (score > FUZZY_THRESHOLD).then_some(id)
}

/// Generate an item of a named kind, walking the same ladder
///
/// Artifacts and egos are restricted to those built on that kind. Vault
/// restrictions do not apply to named requests.
pub fn make_object_named(
    ctx: &mut GenerationContext,
    rng: &mut GameRng,
    run: &RunState,
    req: &ObjectRequest,
    name: &str,
) -> Option<GeneratedItem> {
    let kind = find_kind_by_name(ctx.data(), ctx.config().season, name)?;
    let req = ObjectRequest {
        tval: Some(ctx.data().kind(kind).tval),
        ..*req
    };
    let power = roll_power(ctx, rng, &req);
    let mut rung = Some(pick_rung(ctx, rng, &req, run, power));
    let depth = req.depth;

    while let Some(current) = rung {
        let made = match current {
            Rung::Artifact => select_artifact_for_kind(ctx, rng, depth, kind)
                .and_then(|id| build_artifact(ctx, rng, id, depth)),
            Rung::MultiEgo => MultiEgoTable::build_for_kind(ctx, depth, kind)
                .select(rng)
                .map(|entry| {
                    let egos = entry.egos();
                    assemble(ctx, rng, kind, depth, power, &egos)
                }),
            Rung::Ego => select_ego_for_kind(ctx, rng, depth, kind)
                .map(|ego| assemble(ctx, rng, kind, depth, power, &[ego])),
            Rung::Mundane => Some(assemble(ctx, rng, kind, depth, power, &[])),
        };
        if made.is_some() {
            debug!(?current, kind = %ctx.data().kind(kind).name, depth, "made named object");
            return made;
        }
        rung = current.next(power);
    }
    None
}
