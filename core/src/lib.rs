#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Castle Defence engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values describing what
//! actually happened. Rendering collaborators never mutate state directly:
//! they read snapshot views from the world's query module and issue commands.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Resources granted to the player when a fresh game begins.
pub const STARTING_RESOURCES: u32 = 1_000;

/// Lives the player starts with; the game is lost when they reach zero.
pub const STARTING_LIVES: u32 = 20;

/// Number of waves the player must clear to win.
pub const MAX_WAVES: u32 = 10;

/// Simulated time that must accumulate between successive enemy spawns.
pub const SPAWN_INTERVAL: Duration = Duration::from_millis(2_000);

/// Nominal duration of one driver frame.
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Discrete speed multipliers the player cycles through.
pub const SPEED_LEVELS: [u32; 5] = [1, 2, 3, 4, 5];

/// Travel speed of cosmetic projectiles in world units per tick.
pub const PROJECTILE_SPEED: f32 = 8.0;

/// Radius within which a click selects an existing tower.
pub const TOWER_PICK_RADIUS: f32 = 20.0;

/// Radius within which a click resolves to a build site in build mode.
pub const BUILD_SITE_RADIUS: f32 = 30.0;

/// Flat range increase granted by each tower upgrade.
pub const UPGRADE_RANGE_BONUS: f32 = 15.0;

/// Visual radius of a regular enemy.
pub const REGULAR_ENEMY_SIZE: f32 = 8.0;

/// Visual radius of a boss enemy.
pub const BOSS_ENEMY_SIZE: f32 = 15.0;

/// Score granted per unit of reward when an enemy dies.
pub const SCORE_PER_REWARD: u64 = 10;

/// Location in continuous world units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    x: f32,
    y: f32,
}

impl WorldPoint {
    /// Creates a new world point from explicit coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate of the point.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Vertical coordinate of the point.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Computes the Euclidean distance between two points.
    #[must_use]
    pub fn distance_to(self, other: WorldPoint) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Moves the point toward `target` along the normalized direction vector.
    ///
    /// Callers are expected to have verified that the remaining distance is at
    /// least `step`; a degenerate zero-distance pair returns the point
    /// unchanged so the caller never observes NaN coordinates.
    #[must_use]
    pub fn step_toward(self, target: WorldPoint, step: f32) -> WorldPoint {
        let distance = self.distance_to(target);
        if distance <= f32::EPSILON {
            return self;
        }
        let dx = (target.x - self.x) / distance;
        let dy = (target.y - self.y) / distance;
        WorldPoint::new(self.x + dx * step, self.y + dy * step)
    }
}

/// Unique identifier assigned to a tower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TowerId(u32);

impl TowerId {
    /// Creates a new tower identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(u32);

impl EnemyId {
    /// Creates a new enemy identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a cosmetic projectile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectileId(u32);

impl ProjectileId {
    /// Creates a new projectile identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Display color carried by catalog entries for rendering collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl DisplayColor {
    /// Creates a new display color from byte RGB components.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Red component of the color.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green component of the color.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue component of the color.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }
}

/// Types of towers that can be constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    /// Cheap all-round tower with a short fire interval.
    Basic,
    /// Expensive tower trading fire rate for damage and range.
    Heavy,
    /// Top-tier tower with the highest damage and longest range.
    Magic,
}

impl TowerKind {
    /// Construction cost in resources.
    #[must_use]
    pub const fn cost(self) -> u32 {
        match self {
            Self::Basic => 50,
            Self::Heavy => 120,
            Self::Magic => 200,
        }
    }

    /// Damage dealt per shot at level 1.
    #[must_use]
    pub const fn base_damage(self) -> u32 {
        match self {
            Self::Basic => 10,
            Self::Heavy => 25,
            Self::Magic => 40,
        }
    }

    /// Targeting range in world units at level 1.
    #[must_use]
    pub const fn base_range(self) -> f32 {
        match self {
            Self::Basic => 60.0,
            Self::Heavy => 80.0,
            Self::Magic => 100.0,
        }
    }

    /// Minimum simulated time between consecutive shots.
    #[must_use]
    pub const fn fire_interval(self) -> Duration {
        match self {
            Self::Basic => Duration::from_millis(1_000),
            Self::Heavy => Duration::from_millis(1_500),
            Self::Magic => Duration::from_millis(2_000),
        }
    }

    /// Display color used by rendering collaborators.
    #[must_use]
    pub const fn color(self) -> DisplayColor {
        match self {
            Self::Basic => DisplayColor::from_rgb(0x34, 0x98, 0xdb),
            Self::Heavy => DisplayColor::from_rgb(0xe6, 0x7e, 0x22),
            Self::Magic => DisplayColor::from_rgb(0x9b, 0x59, 0xb6),
        }
    }

    /// Cost of upgrading a tower of this kind from the provided level.
    ///
    /// Matches `floor(cost * 0.5 * level)` using integer arithmetic.
    #[must_use]
    pub const fn upgrade_cost(self, level: u32) -> u32 {
        self.cost() * level / 2
    }

    /// Damage added by each upgrade, `floor(base_damage * 0.3)`.
    #[must_use]
    pub const fn upgrade_damage_bonus(self) -> u32 {
        self.base_damage() * 3 / 10
    }

    /// Refund granted when selling a tower of this kind at the provided
    /// level, `floor(cost * level * 0.7)`.
    #[must_use]
    pub const fn sell_refund(self, level: u32) -> u32 {
        self.cost() * level * 7 / 10
    }
}

/// Boss subtypes appended to qualifying waves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BossKind {
    /// Periodic boss appearing on every fifth wave.
    Mini,
    /// Boss guarding the final wave, unless the periodic rule already applies.
    Final,
}

/// Progress of a game through its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// No game is in progress; waiting for [`Command::StartGame`].
    NotStarted,
    /// The simulation advances on every tick.
    Running,
    /// A game is in progress but ticks mutate nothing.
    Paused,
    /// All waves were cleared; terminal until restart.
    Won,
    /// Lives reached zero; terminal until restart.
    Lost,
}

impl GamePhase {
    /// Reports whether the phase is one of the terminal outcomes.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Reports whether a game is in progress, paused or not.
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::Running | Self::Paused)
    }
}

/// Specification of a single not-yet-spawned enemy within a wave plan.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemySpec {
    /// Health the enemy spawns with; also its maximum.
    pub health: u32,
    /// Distance covered per unsped tick.
    pub speed: f32,
    /// Resources granted when the enemy dies.
    pub reward: u32,
    /// Boss subtype, if the entry describes a boss.
    pub boss: Option<BossKind>,
    /// Visual radius used by rendering collaborators.
    pub size: f32,
}

/// Tunable parameters applied when constructing or restarting a world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Resources the player starts with.
    pub starting_resources: u32,
    /// Lives the player starts with.
    pub starting_lives: u32,
    /// Number of waves that must be cleared to win.
    pub max_waves: u32,
    /// Milliseconds of simulated time between enemy spawns.
    pub spawn_interval_ms: u64,
}

impl GameConfig {
    /// Spawn interval as a [`Duration`].
    #[must_use]
    pub const fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_resources: STARTING_RESOURCES,
            starting_lives: STARTING_LIVES,
            max_waves: MAX_WAVES,
            spawn_interval_ms: SPAWN_INTERVAL.as_millis() as u64,
        }
    }
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Advances the simulation by one frame of the provided duration.
    Tick {
        /// Duration of simulated time that elapsed since the previous tick.
        dt: Duration,
    },
    /// Starts a new game, or restarts one from a terminal phase.
    StartGame,
    /// Flips the paused flag of a game in progress.
    TogglePause,
    /// Enters build mode with the provided tower kind selected.
    SelectTowerKind {
        /// Catalog entry the player intends to build.
        kind: TowerKind,
    },
    /// Resolves a pointer click against towers, build sites, and selection.
    Click {
        /// Click location in world units.
        at: WorldPoint,
    },
    /// Upgrades the currently selected tower, if any and affordable.
    UpgradeTower,
    /// Sells the currently selected tower, if any.
    SellTower,
    /// Collapses or expands the tower shop panel.
    ToggleShop,
    /// Cycles to the next speed multiplier.
    ToggleSpeed,
    /// Resets all game state to its initial values.
    Restart,
}

/// Reasons a build request may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildError {
    /// The player cannot afford the requested tower kind.
    InsufficientResources,
    /// The resolved build site already hosts a tower.
    SiteOccupied,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// A game transitioned into the running phase.
    GameStarted {
        /// Wave the game begins on.
        wave: u32,
    },
    /// The paused flag flipped.
    PauseToggled {
        /// Whether the game is now paused.
        paused: bool,
    },
    /// A new wave plan was installed and its queue armed.
    WaveStarted {
        /// 1-based index of the wave that started.
        wave: u32,
    },
    /// An enemy left the wave queue and entered the field.
    EnemySpawned {
        /// Identifier assigned to the spawned enemy.
        enemy: EnemyId,
    },
    /// A boss enemy entered the field.
    BossEmerged {
        /// Identifier of the boss enemy.
        enemy: EnemyId,
        /// Subtype of the boss.
        kind: BossKind,
    },
    /// An enemy reached the goal and cost the player a life.
    LifeLost {
        /// Identifier of the arriving enemy.
        enemy: EnemyId,
        /// Lives remaining after the arrival.
        remaining: u32,
    },
    /// A tower fired at an enemy; damage is already applied.
    TowerFired {
        /// Identifier of the firing tower.
        tower: TowerId,
        /// Identifier of the enemy that was hit.
        enemy: EnemyId,
        /// Damage applied by the shot.
        damage: u32,
    },
    /// An enemy died to tower fire.
    EnemyKilled {
        /// Identifier of the dead enemy.
        enemy: EnemyId,
        /// Resources granted to the player.
        reward: u32,
        /// Score granted to the player.
        score: u64,
    },
    /// Both the wave queue and the field emptied out.
    WaveCleared {
        /// 1-based index of the wave that was cleared.
        wave: u32,
    },
    /// The final wave was cleared.
    GameWon {
        /// Final score.
        score: u64,
    },
    /// Lives reached zero.
    GameLost {
        /// Final score.
        score: u64,
    },
    /// A tower was constructed.
    TowerBuilt {
        /// Identifier assigned to the tower.
        tower: TowerId,
        /// Kind of tower that was built.
        kind: TowerKind,
        /// Build site the tower occupies.
        at: WorldPoint,
    },
    /// A build request was rejected.
    BuildRejected {
        /// Kind of tower requested.
        kind: TowerKind,
        /// Specific reason the build failed.
        reason: BuildError,
    },
    /// The selected tower was upgraded.
    TowerUpgraded {
        /// Identifier of the upgraded tower.
        tower: TowerId,
        /// Level the tower reached.
        level: u32,
    },
    /// An upgrade request was rejected for lack of resources.
    UpgradeRejected {
        /// Identifier of the tower that was not upgraded.
        tower: TowerId,
        /// Cost the player could not afford.
        cost: u32,
    },
    /// The selected tower was sold.
    TowerSold {
        /// Identifier of the sold tower.
        tower: TowerId,
        /// Resources refunded to the player.
        refund: u32,
    },
    /// A click selected an existing tower.
    TowerSelected {
        /// Identifier of the selected tower.
        tower: TowerId,
    },
    /// The tower selection was cleared.
    SelectionCleared,
    /// Build mode switched to a new tower kind.
    BuildSelectionChanged {
        /// Kind now armed for building.
        kind: TowerKind,
    },
    /// The speed multiplier cycled to a new value.
    SpeedChanged {
        /// Multiplier now in effect.
        multiplier: u32,
    },
    /// The shop panel was collapsed or expanded.
    ShopToggled {
        /// Whether the shop is now collapsed.
        collapsed: bool,
    },
    /// All game state was reset to initial values.
    GameRestarted,
}

/// Immutable representation of a single tower's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TowerSnapshot {
    /// Identifier allocated to the tower by the world.
    pub id: TowerId,
    /// Kind of tower that was constructed.
    pub kind: TowerKind,
    /// Build site the tower occupies.
    pub position: WorldPoint,
    /// Upgrade level, starting at 1.
    pub level: u32,
    /// Damage dealt per shot after upgrades.
    pub damage: u32,
    /// Targeting range in world units after upgrades.
    pub range: f32,
    /// Simulated time remaining until the tower may fire again.
    pub ready_in: Duration,
}

/// Immutable representation of a single enemy's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemySnapshot {
    /// Unique identifier assigned to the enemy.
    pub id: EnemyId,
    /// Current location in world units.
    pub position: WorldPoint,
    /// Index of the path point the enemy is approaching.
    pub path_index: usize,
    /// Current health.
    pub health: u32,
    /// Health the enemy spawned with.
    pub max_health: u32,
    /// Distance covered per unsped tick.
    pub speed: f32,
    /// Resources granted when the enemy dies.
    pub reward: u32,
    /// Boss subtype, if the enemy is a boss.
    pub boss: Option<BossKind>,
    /// Visual radius used by rendering collaborators.
    pub size: f32,
}

/// Immutable representation of a cosmetic projectile used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectileSnapshot {
    /// Unique identifier assigned to the projectile.
    pub id: ProjectileId,
    /// Current location in world units.
    pub position: WorldPoint,
    /// Fixed impact point captured at fire time.
    pub target: WorldPoint,
    /// Travel speed in world units per tick.
    pub speed: f32,
}

/// Describes a build site together with its derived occupancy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuildSiteSnapshot {
    /// Location of the site in world units.
    pub position: WorldPoint,
    /// Tower occupying the site, if any.
    pub tower: Option<TowerId>,
}

impl BuildSiteSnapshot {
    /// Reports whether the site currently hosts a tower.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.tower.is_some()
    }
}

/// Read-only snapshot describing all live towers.
#[derive(Clone, Debug, Default)]
pub struct TowerView {
    snapshots: Vec<TowerSnapshot>,
}

impl TowerView {
    /// Creates a new tower view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<TowerSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured tower snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &TowerSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<TowerSnapshot> {
        self.snapshots
    }
}

/// Read-only snapshot describing all active enemies.
#[derive(Clone, Debug, Default)]
pub struct EnemyView {
    snapshots: Vec<EnemySnapshot>,
}

impl EnemyView {
    /// Creates a new enemy view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<EnemySnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured enemy snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &EnemySnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<EnemySnapshot> {
        self.snapshots
    }
}

/// Read-only snapshot describing all live projectiles.
#[derive(Clone, Debug, Default)]
pub struct ProjectileView {
    snapshots: Vec<ProjectileSnapshot>,
}

impl ProjectileView {
    /// Creates a new projectile view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<ProjectileSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured projectile snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &ProjectileSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<ProjectileSnapshot> {
        self.snapshots
    }
}

#[cfg(test)]
mod tests {
    use super::{
        BossKind, BuildError, EnemySpec, GameConfig, GamePhase, TowerId, TowerKind, WorldPoint,
    };
    use serde::{de::DeserializeOwned, Serialize};
    use std::time::Duration;

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn tower_id_round_trips_through_bincode() {
        assert_round_trip(&TowerId::new(42));
    }

    #[test]
    fn tower_kind_round_trips_through_bincode() {
        assert_round_trip(&TowerKind::Magic);
    }

    #[test]
    fn build_error_round_trips_through_bincode() {
        assert_round_trip(&BuildError::SiteOccupied);
    }

    #[test]
    fn enemy_spec_round_trips_through_bincode() {
        let spec = EnemySpec {
            health: 250,
            speed: 0.9,
            reward: 120,
            boss: Some(BossKind::Mini),
            size: 15.0,
        };
        assert_round_trip(&spec);
    }

    #[test]
    fn game_config_round_trips_through_bincode() {
        assert_round_trip(&GameConfig::default());
    }

    #[test]
    fn catalog_matches_tuning_table() {
        assert_eq!(TowerKind::Basic.cost(), 50);
        assert_eq!(TowerKind::Basic.base_damage(), 10);
        assert!((TowerKind::Basic.base_range() - 60.0).abs() < f32::EPSILON);
        assert_eq!(
            TowerKind::Basic.fire_interval(),
            Duration::from_millis(1_000)
        );

        assert_eq!(TowerKind::Heavy.cost(), 120);
        assert_eq!(TowerKind::Heavy.base_damage(), 25);
        assert!((TowerKind::Heavy.base_range() - 80.0).abs() < f32::EPSILON);
        assert_eq!(
            TowerKind::Heavy.fire_interval(),
            Duration::from_millis(1_500)
        );

        assert_eq!(TowerKind::Magic.cost(), 200);
        assert_eq!(TowerKind::Magic.base_damage(), 40);
        assert!((TowerKind::Magic.base_range() - 100.0).abs() < f32::EPSILON);
        assert_eq!(
            TowerKind::Magic.fire_interval(),
            Duration::from_millis(2_000)
        );
    }

    #[test]
    fn upgrade_cost_floors_half_cost_times_level() {
        assert_eq!(TowerKind::Basic.upgrade_cost(1), 25);
        assert_eq!(TowerKind::Basic.upgrade_cost(3), 75);
        assert_eq!(TowerKind::Heavy.upgrade_cost(1), 60);
        assert_eq!(TowerKind::Magic.upgrade_cost(2), 200);
    }

    #[test]
    fn upgrade_damage_bonus_floors_thirty_percent() {
        assert_eq!(TowerKind::Basic.upgrade_damage_bonus(), 3);
        assert_eq!(TowerKind::Heavy.upgrade_damage_bonus(), 7);
        assert_eq!(TowerKind::Magic.upgrade_damage_bonus(), 12);
    }

    #[test]
    fn sell_refund_floors_seventy_percent() {
        assert_eq!(TowerKind::Basic.sell_refund(1), 35);
        assert_eq!(TowerKind::Basic.sell_refund(2), 70);
        assert_eq!(TowerKind::Heavy.sell_refund(1), 84);
        assert_eq!(TowerKind::Magic.sell_refund(3), 420);
    }

    #[test]
    fn distance_matches_expectation() {
        let origin = WorldPoint::new(0.0, 0.0);
        let other = WorldPoint::new(3.0, 4.0);
        assert!((origin.distance_to(other) - 5.0).abs() < f32::EPSILON);
        assert!((other.distance_to(origin) - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn step_toward_preserves_direction() {
        let origin = WorldPoint::new(0.0, 0.0);
        let target = WorldPoint::new(10.0, 0.0);
        let moved = origin.step_toward(target, 4.0);
        assert!((moved.x() - 4.0).abs() < f32::EPSILON);
        assert!(moved.y().abs() < f32::EPSILON);
    }

    #[test]
    fn step_toward_handles_degenerate_pair() {
        let point = WorldPoint::new(2.0, 2.0);
        let moved = point.step_toward(point, 4.0);
        assert_eq!(moved, point);
    }

    #[test]
    fn default_config_matches_starting_values() {
        let config = GameConfig::default();
        assert_eq!(config.starting_resources, 1_000);
        assert_eq!(config.starting_lives, 20);
        assert_eq!(config.max_waves, 10);
        assert_eq!(config.spawn_interval(), Duration::from_millis(2_000));
    }

    #[test]
    fn terminal_phases_are_flagged() {
        assert!(GamePhase::Won.is_terminal());
        assert!(GamePhase::Lost.is_terminal());
        assert!(!GamePhase::Running.is_terminal());
        assert!(GamePhase::Paused.is_in_progress());
        assert!(!GamePhase::NotStarted.is_in_progress());
    }
}
