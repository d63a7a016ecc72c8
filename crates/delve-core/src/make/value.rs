//! Stack size and item value

use tracing::trace;

use crate::object::{Aspect, GameData, GeneratedItem};
use crate::rng::GameRng;
use crate::world::GenConfig;

/// Value of one point of to-hit, to-dam or to-armour
const BONUS_VALUE: i64 = 100;

/// Roll how many items the stack holds. Artifacts are always single.
pub fn roll_stack_size(
    data: &GameData,
    config: &GenConfig,
    rng: &mut GameRng,
    item: &mut GeneratedItem,
    level: i32,
) {
    if item.is_artifact() {
        item.number = 1;
        return;
    }
    let kind = data.kind(item.kind);
    if kind.gen_mult_prob > 0 && rng.randint1(100) <= kind.gen_mult_prob as i32 {
        let rolled = kind
            .stack_size
            .calc(rng, level, config.max_depth, Aspect::Randomise);
        item.number = rolled.clamp(1, kind.max_stack.max(1));
        trace!(kind = %kind.name, number = item.number, "rolled stack");
    }
}

/// Worth of a single item before any depth bonus
pub fn unit_value(data: &GameData, item: &GeneratedItem) -> i64 {
    if item.is_cash() {
        return i64::from(item.pval);
    }
    if let Some(id) = item.artifact() {
        return i64::from(data.artifact(id).cost);
    }

    let mut value = i64::from(data.kind(item.kind).cost);
    value += item
        .egos()
        .iter()
        .map(|&e| i64::from(data.ego(e).cost))
        .sum::<i64>();
    value += BONUS_VALUE * i64::from(item.to_h + item.to_d + item.to_a);
    if item.is_faulty() {
        value /= 2;
    }
    value.max(0)
}

/// Stack value, with 20% per level for fault-free items found shallower than
/// their kind's native level
pub fn item_value(data: &GameData, item: &GeneratedItem, depth: i32) -> i64 {
    let mut value = unit_value(data, item) * i64::from(item.number);
    let native = data.kind(item.kind).level;
    if !item.is_faulty() && !item.is_cash() && depth < native {
        value += i64::from(native - depth) * (value / 5);
    }
    value
}
