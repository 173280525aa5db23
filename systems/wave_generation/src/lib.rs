#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic wave plan generation.
//!
//! Wave contents are a closed-form function of the 1-based wave index and the
//! configured wave count: no randomness, no world access. The authoritative
//! world installs the returned plan into its spawn queue at wave start.

use castle_defence_core::{BossKind, EnemySpec, BOSS_ENEMY_SIZE, REGULAR_ENEMY_SIZE};

const BASE_REGULAR_COUNT: u32 = 5;
const REGULAR_COUNT_PER_WAVE: u32 = 2;
const BASE_REGULAR_HEALTH: u32 = 50;
const REGULAR_HEALTH_PER_WAVE: u32 = 10;
const BASE_REGULAR_REWARD: u32 = 10;
const REGULAR_REWARD_PER_WAVE: u32 = 2;
const BASE_BOSS_HEALTH: u32 = 200;
const BOSS_HEALTH_PER_WAVE: u32 = 50;
const BASE_BOSS_REWARD: u32 = 100;
const BOSS_REWARD_PER_WAVE: u32 = 20;
const BOSS_WAVE_PERIOD: u32 = 5;

/// Ordered enemy specifications for a single wave, regulars first.
#[derive(Clone, Debug, PartialEq)]
pub struct WavePlan {
    specs: Vec<EnemySpec>,
}

impl WavePlan {
    /// Number of enemies the plan will spawn in total.
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Reports whether the plan contains no enemies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Iterator over the planned enemies in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &EnemySpec> {
        self.specs.iter()
    }

    /// Boss specification appended to the plan, if the wave has one.
    #[must_use]
    pub fn boss(&self) -> Option<&EnemySpec> {
        self.specs.iter().find(|spec| spec.boss.is_some())
    }

    /// Consumes the plan, yielding the specifications in spawn order.
    #[must_use]
    pub fn into_specs(self) -> Vec<EnemySpec> {
        self.specs
    }
}

/// Produces the enemy queue contents for the provided wave.
///
/// Regular enemies scale linearly with the wave index. A single boss is
/// appended on every [`BOSS_WAVE_PERIOD`]th wave and on the final wave; when
/// both rules apply the periodic rule wins and the boss is [`BossKind::Mini`].
#[must_use]
pub fn generate_wave(wave: u32, max_waves: u32) -> WavePlan {
    let count = BASE_REGULAR_COUNT + REGULAR_COUNT_PER_WAVE * wave;
    let mut specs = Vec::with_capacity(count as usize + 1);

    let regular = EnemySpec {
        health: BASE_REGULAR_HEALTH + REGULAR_HEALTH_PER_WAVE * wave,
        speed: 1.0 + 0.2 * wave as f32,
        reward: BASE_REGULAR_REWARD + REGULAR_REWARD_PER_WAVE * wave,
        boss: None,
        size: REGULAR_ENEMY_SIZE,
    };
    for _ in 0..count {
        specs.push(regular);
    }

    if let Some(kind) = boss_kind(wave, max_waves) {
        specs.push(EnemySpec {
            health: BASE_BOSS_HEALTH + BOSS_HEALTH_PER_WAVE * wave,
            speed: 0.8 + 0.1 * wave as f32,
            reward: BASE_BOSS_REWARD + BOSS_REWARD_PER_WAVE * wave,
            boss: Some(kind),
            size: BOSS_ENEMY_SIZE,
        });
    }

    WavePlan { specs }
}

fn boss_kind(wave: u32, max_waves: u32) -> Option<BossKind> {
    if wave > 0 && wave % BOSS_WAVE_PERIOD == 0 {
        Some(BossKind::Mini)
    } else if wave == max_waves {
        Some(BossKind::Final)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_wave, WavePlan};
    use castle_defence_core::{BossKind, EnemySpec, MAX_WAVES};

    fn regulars(plan: &WavePlan) -> Vec<EnemySpec> {
        plan.iter()
            .filter(|spec| spec.boss.is_none())
            .copied()
            .collect()
    }

    #[test]
    fn regular_count_scales_with_wave() {
        for wave in 1..=20 {
            let plan = generate_wave(wave, MAX_WAVES);
            assert_eq!(
                regulars(&plan).len() as u32,
                5 + 2 * wave,
                "wave {wave} regular count",
            );
        }
    }

    #[test]
    fn regular_stats_follow_formulas() {
        let plan = generate_wave(3, MAX_WAVES);
        let spec = regulars(&plan)[0];
        assert_eq!(spec.health, 80);
        assert!((spec.speed - 1.6).abs() < 1e-6);
        assert_eq!(spec.reward, 16);
    }

    #[test]
    fn boss_appears_only_on_qualifying_waves() {
        for wave in 1..=20 {
            let plan = generate_wave(wave, MAX_WAVES);
            let expected = wave % 5 == 0 || wave == MAX_WAVES;
            assert_eq!(plan.boss().is_some(), expected, "wave {wave} boss presence");
            let boss_count = plan.iter().filter(|spec| spec.boss.is_some()).count();
            assert_eq!(boss_count, usize::from(expected), "wave {wave} boss count");
        }
    }

    #[test]
    fn boss_stats_follow_formulas() {
        let plan = generate_wave(5, MAX_WAVES);
        let boss = plan.boss().expect("wave 5 has a boss");
        assert_eq!(boss.health, 450);
        assert!((boss.speed - 1.3).abs() < 1e-6);
        assert_eq!(boss.reward, 200);
    }

    #[test]
    fn periodic_rule_takes_precedence_on_final_wave() {
        let plan = generate_wave(10, 10);
        assert_eq!(plan.boss().and_then(|spec| spec.boss), Some(BossKind::Mini));
    }

    #[test]
    fn fifth_wave_boss_is_mini() {
        let plan = generate_wave(5, 10);
        assert_eq!(plan.boss().and_then(|spec| spec.boss), Some(BossKind::Mini));
    }

    #[test]
    fn final_wave_boss_is_final_when_not_periodic() {
        let plan = generate_wave(7, 7);
        assert_eq!(
            plan.boss().and_then(|spec| spec.boss),
            Some(BossKind::Final)
        );
    }

    #[test]
    fn boss_spawns_after_all_regulars() {
        let plan = generate_wave(5, 10);
        let specs = plan.into_specs();
        let boss_index = specs
            .iter()
            .position(|spec| spec.boss.is_some())
            .expect("boss present");
        assert_eq!(boss_index, specs.len() - 1);
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(generate_wave(4, 10), generate_wave(4, 10));
    }
}
