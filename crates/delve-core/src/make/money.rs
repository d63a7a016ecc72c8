//! Cash piles
//!
//! The amount is drawn first, from a depth-scaled average with a rare
//! exponential tail. The coin kind follows from the amount unless the
//! caller asks for a specific coin.

use tracing::{debug, trace};

use crate::context::GenerationContext;
use crate::object::{GameData, GeneratedItem, KindId, Payload};
use crate::rng::GameRng;
use crate::world::{GenConfig, RunState};

/// Average pile size at `depth`, before the spread
pub fn average_gold(config: &GenConfig, depth: i32, greedy: bool) -> i32 {
    let depth = i64::from(depth.max(0));
    let scaled = depth + depth * depth / 25;
    let mut avg = i64::from(config.gold_avg_base)
        .saturating_add(i64::from(config.gold_avg_mult).saturating_mul(scaled) / 100);
    if greedy {
        avg = avg.saturating_mul(2);
    }
    // Keep part of the spread below the cap so a draw always terminates
    avg.clamp(0, i64::from(config.max_cash / 2)) as i32
}

/// Draw a pile amount in `1..max_cash`
pub fn roll_gold_value(config: &GenConfig, rng: &mut GameRng, depth: i32, greedy: bool) -> i32 {
    let avg = average_gold(config, depth, greedy);
    let spread = depth.max(0).saturating_add(10);
    let tail_start = config
        .gold_tail_base
        .saturating_sub(depth.max(0) as u32)
        .max(config.gold_tail_min);

    loop {
        let mut value = rng.rand_spread(avg, spread).max(1);
        let mut chance = tail_start;
        while rng.one_in(chance) && value <= i32::MAX / 10 {
            value *= 10;
            chance = chance.saturating_mul(2);
        }
        if value < config.max_cash {
            return value;
        }
        trace!(value, max = config.max_cash, "rejected cash pile");
    }
}

/// Coin rank for an amount: log scale over the coin list, sometimes one up
pub fn coin_rank(config: &GenConfig, rng: &mut GameRng, value: i32, num_coins: usize) -> usize {
    if num_coins == 0 {
        return 0;
    }
    let scale = f64::from(value.max(1)).log10() / f64::from(config.max_cash).log10();
    let mut rank = ((scale * num_coins as f64).floor().max(0.0) as usize).min(num_coins - 1);
    if rank + 1 < num_coins && rng.one_in(config.coin_bump_chance) {
        rank += 1;
    }
    rank
}

/// Coin kind whose name matches `name`, ignoring case
pub fn find_coin(data: &GameData, name: &str) -> Option<usize> {
    data.coins()
        .iter()
        .position(|&c| data.kind(c).name.eq_ignore_ascii_case(name))
}

/// Make a pile of money for `depth`
///
/// A known `coin_name` fixes the coin kind; otherwise it follows the amount.
pub fn make_gold(
    ctx: &GenerationContext,
    rng: &mut GameRng,
    run: &RunState,
    depth: i32,
    coin_name: Option<&str>,
) -> GeneratedItem {
    let data = ctx.data();
    let config = ctx.config();
    let value = roll_gold_value(config, rng, depth, run.greedy);

    let coins = data.coins();
    let rank = match coin_name.and_then(|name| find_coin(data, name)) {
        Some(rank) => rank,
        None => coin_rank(config, rng, value, coins.len()),
    };
    let id: KindId = coins[rank];
    let kind = data.kind(id);

    let mut item = GeneratedItem::new(id, kind.tval, kind.sval);
    item.origin_depth = depth;
    item.weight = kind.weight;
    item.pval = value;
    item.payload = Payload::Cash;
    item.value = i64::from(value);

    debug!(depth, value, coin = %kind.name, "made gold");
    item
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn test_average_curve() {
        let config = GenConfig::default();
        assert_eq!(average_gold(&config, 0, false), 16);
        assert_eq!(average_gold(&config, 50, false), 16 + 160 * 150 / 100);
        assert_eq!(average_gold(&config, 50, true), 2 * (16 + 160 * 150 / 100));
    }

    #[test]
    fn test_never_reaches_cap() {
        let config = GenConfig {
            max_cash: 300,
            gold_tail_base: 2,
            gold_tail_min: 2,
            ..GenConfig::default()
        };
        let mut rng = GameRng::new(1);
        for depth in [0, 20, 127] {
            for _ in 0..300 {
                let v = roll_gold_value(&config, &mut rng, depth, true);
                assert!((1..300).contains(&v));
            }
        }
    }

    #[test]
    fn test_huge_depth_stays_under_cap() {
        let ctx = testing::context();
        let config = ctx.config();
        let mut rng = GameRng::new(4);
        assert_eq!(average_gold(config, i32::MAX, true), config.max_cash / 2);
        for greedy in [false, true] {
            let run = RunState {
                greedy,
                ..RunState::default()
            };
            for depth in [20_000, 100_000, i32::MAX] {
                for _ in 0..20 {
                    let gold = make_gold(&ctx, &mut rng, &run, depth, None);
                    assert!((1..config.max_cash).contains(&gold.pval));
                }
            }
        }
    }

    #[test]
    fn test_coin_rank_scale() {
        let config = GenConfig {
            coin_bump_chance: u32::MAX,
            ..GenConfig::default()
        };
        let mut rng = GameRng::new(2);
        assert_eq!(coin_rank(&config, &mut rng, 1, 3), 0);
        assert_eq!(coin_rank(&config, &mut rng, config.max_cash - 1, 3), 2);
        assert_eq!(coin_rank(&config, &mut rng, 1000, 3), 1);
    }

    #[test]
    fn test_named_coin() {
        let ctx = testing::context();
        let mut rng = GameRng::new(3);
        let run = RunState::default();
        for _ in 0..50 {
            let item = make_gold(&ctx, &mut rng, &run, 5, Some("GOLD"));
            assert_eq!(item.kind, testing::GOLD_COINS);
            assert!(item.is_cash());
            assert_eq!(item.value, i64::from(item.pval));
        }
        let item = make_gold(&ctx, &mut rng, &run, 5, Some("mithril"));
        assert!(ctx.data().coins().contains(&item.kind));
    }
}
