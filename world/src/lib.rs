#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Castle Defence.
//!
//! The world owns every piece of mutable game state. Adapters submit
//! [`Command`] values through [`apply`]; the world validates them, mutates
//! itself, and pushes [`Event`] values describing what actually happened.
//! Read access goes through the [`query`] module, which hands out snapshot
//! views instead of references into live state.

use std::{collections::VecDeque, time::Duration};

use castle_defence_core::{
    BossKind, BuildError, Command, EnemyId, EnemySpec, Event, GameConfig, GamePhase, ProjectileId,
    TowerId, TowerKind, WorldPoint, BUILD_SITE_RADIUS, PROJECTILE_SPEED, SCORE_PER_REWARD,
    SPEED_LEVELS, TOWER_PICK_RADIUS, UPGRADE_RANGE_BONUS,
};
use castle_defence_system_tower_targeting::select_target;
use castle_defence_system_wave_generation::generate_wave;

const DEFAULT_PATH: [WorldPoint; 7] = [
    WorldPoint::new(70.0, 200.0),
    WorldPoint::new(150.0, 180.0),
    WorldPoint::new(250.0, 200.0),
    WorldPoint::new(350.0, 200.0),
    WorldPoint::new(450.0, 200.0),
    WorldPoint::new(500.0, 220.0),
    WorldPoint::new(550.0, 200.0),
];

const DEFAULT_BUILD_SITES: [WorldPoint; 8] = [
    WorldPoint::new(150.0, 150.0),
    WorldPoint::new(200.0, 120.0),
    WorldPoint::new(300.0, 140.0),
    WorldPoint::new(350.0, 110.0),
    WorldPoint::new(400.0, 160.0),
    WorldPoint::new(150.0, 250.0),
    WorldPoint::new(250.0, 280.0),
    WorldPoint::new(350.0, 260.0),
];

#[derive(Clone, Copy, Debug)]
struct Tower {
    id: TowerId,
    kind: TowerKind,
    position: WorldPoint,
    level: u32,
    damage: u32,
    range: f32,
    last_fire: Duration,
}

#[derive(Clone, Copy, Debug)]
struct Enemy {
    id: EnemyId,
    position: WorldPoint,
    path_index: usize,
    health: u32,
    max_health: u32,
    speed: f32,
    reward: u32,
    boss: Option<BossKind>,
    size: f32,
}

#[derive(Clone, Copy, Debug)]
struct Projectile {
    id: ProjectileId,
    position: WorldPoint,
    target: WorldPoint,
    speed: f32,
}

/// Container holding the complete authoritative state of one game.
#[derive(Debug)]
pub struct World {
    config: GameConfig,
    path: Vec<WorldPoint>,
    build_sites: Vec<WorldPoint>,
    phase: GamePhase,
    clock: Duration,
    spawn_timer: Duration,
    speed_index: usize,
    resources: u32,
    lives: u32,
    score: u64,
    wave: u32,
    shop_collapsed: bool,
    towers: Vec<Tower>,
    enemies: Vec<Enemy>,
    projectiles: Vec<Projectile>,
    wave_queue: VecDeque<EnemySpec>,
    selected_tower: Option<TowerId>,
    build_selection: Option<TowerKind>,
    next_tower_id: u32,
    next_enemy_id: u32,
    next_projectile_id: u32,
}

impl World {
    /// Creates a world with the default configuration and layout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Creates a world with the provided configuration and the default layout.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self::with_layout(config, DEFAULT_PATH.to_vec(), DEFAULT_BUILD_SITES.to_vec())
    }

    /// Creates a world with an explicit enemy path and build site layout.
    #[must_use]
    pub fn with_layout(
        config: GameConfig,
        path: Vec<WorldPoint>,
        build_sites: Vec<WorldPoint>,
    ) -> Self {
        Self {
            config,
            path,
            build_sites,
            phase: GamePhase::NotStarted,
            clock: Duration::ZERO,
            spawn_timer: Duration::ZERO,
            speed_index: 0,
            resources: config.starting_resources,
            lives: config.starting_lives,
            score: 0,
            wave: 1,
            shop_collapsed: false,
            towers: Vec::new(),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            wave_queue: VecDeque::new(),
            selected_tower: None,
            build_selection: None,
            next_tower_id: 0,
            next_enemy_id: 0,
            next_projectile_id: 0,
        }
    }

    fn speed_multiplier(&self) -> u32 {
        SPEED_LEVELS[self.speed_index]
    }

    fn allocate_tower_id(&mut self) -> TowerId {
        let id = TowerId::new(self.next_tower_id);
        self.next_tower_id += 1;
        id
    }

    fn allocate_enemy_id(&mut self) -> EnemyId {
        let id = EnemyId::new(self.next_enemy_id);
        self.next_enemy_id += 1;
        id
    }

    fn allocate_projectile_id(&mut self) -> ProjectileId {
        let id = ProjectileId::new(self.next_projectile_id);
        self.next_projectile_id += 1;
        id
    }

    /// Returns game state to its pre-game values, keeping the shop flag and
    /// identifier counters.
    fn reset(&mut self) {
        self.phase = GamePhase::NotStarted;
        self.clock = Duration::ZERO;
        self.spawn_timer = Duration::ZERO;
        self.speed_index = 0;
        self.resources = self.config.starting_resources;
        self.lives = self.config.starting_lives;
        self.score = 0;
        self.wave = 1;
        self.towers.clear();
        self.enemies.clear();
        self.projectiles.clear();
        self.wave_queue.clear();
        self.selected_tower = None;
        self.build_selection = None;
    }

    fn start_wave(&mut self, out_events: &mut Vec<Event>) {
        let plan = generate_wave(self.wave, self.config.max_waves);
        self.wave_queue = plan.into_specs().into();
        self.spawn_timer = Duration::ZERO;
        out_events.push(Event::WaveStarted { wave: self.wave });
    }

    fn handle_start_game(&mut self, out_events: &mut Vec<Event>) {
        match self.phase {
            GamePhase::NotStarted => {}
            GamePhase::Won | GamePhase::Lost => self.reset(),
            GamePhase::Running | GamePhase::Paused => return,
        }
        self.phase = GamePhase::Running;
        out_events.push(Event::GameStarted { wave: self.wave });
        self.start_wave(out_events);
    }

    fn handle_toggle_pause(&mut self, out_events: &mut Vec<Event>) {
        if !self.phase.is_in_progress() {
            return;
        }
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            _ => GamePhase::Running,
        };
        out_events.push(Event::PauseToggled {
            paused: self.phase == GamePhase::Paused,
        });
    }

    fn handle_select_tower_kind(&mut self, kind: TowerKind, out_events: &mut Vec<Event>) {
        if self.selected_tower.take().is_some() {
            out_events.push(Event::SelectionCleared);
        }
        self.build_selection = Some(kind);
        out_events.push(Event::BuildSelectionChanged { kind });
    }

    fn handle_click(&mut self, at: WorldPoint, out_events: &mut Vec<Event>) {
        if !self.phase.is_in_progress() {
            return;
        }

        if let Some(tower) = self
            .towers
            .iter()
            .find(|tower| tower.position.distance_to(at) < TOWER_PICK_RADIUS)
        {
            let id = tower.id;
            self.selected_tower = Some(id);
            self.build_selection = None;
            out_events.push(Event::TowerSelected { tower: id });
            return;
        }

        if let Some(kind) = self.build_selection {
            let mut nearest = None;
            let mut best_distance = BUILD_SITE_RADIUS;
            for site in &self.build_sites {
                let distance = site.distance_to(at);
                if distance < best_distance {
                    best_distance = distance;
                    nearest = Some(*site);
                }
            }
            let Some(site) = nearest else {
                return;
            };
            if self.towers.iter().any(|tower| tower.position == site) {
                out_events.push(Event::BuildRejected {
                    kind,
                    reason: BuildError::SiteOccupied,
                });
                return;
            }
            let cost = kind.cost();
            if self.resources < cost {
                out_events.push(Event::BuildRejected {
                    kind,
                    reason: BuildError::InsufficientResources,
                });
                return;
            }
            self.resources -= cost;
            let id = self.allocate_tower_id();
            self.towers.push(Tower {
                id,
                kind,
                position: site,
                level: 1,
                damage: kind.base_damage(),
                range: kind.base_range(),
                last_fire: Duration::ZERO,
            });
            out_events.push(Event::TowerBuilt {
                tower: id,
                kind,
                at: site,
            });
            return;
        }

        if self.selected_tower.take().is_some() {
            out_events.push(Event::SelectionCleared);
        }
    }

    fn handle_upgrade(&mut self, out_events: &mut Vec<Event>) {
        let Some(id) = self.selected_tower else {
            return;
        };
        let Some(index) = self.towers.iter().position(|tower| tower.id == id) else {
            return;
        };
        let (kind, level) = (self.towers[index].kind, self.towers[index].level);
        let cost = kind.upgrade_cost(level);
        if self.resources < cost {
            out_events.push(Event::UpgradeRejected { tower: id, cost });
            return;
        }
        self.resources -= cost;
        let tower = &mut self.towers[index];
        tower.level += 1;
        tower.damage += kind.upgrade_damage_bonus();
        tower.range += UPGRADE_RANGE_BONUS;
        out_events.push(Event::TowerUpgraded {
            tower: id,
            level: tower.level,
        });
    }

    fn handle_sell(&mut self, out_events: &mut Vec<Event>) {
        let Some(id) = self.selected_tower.take() else {
            return;
        };
        let Some(index) = self.towers.iter().position(|tower| tower.id == id) else {
            return;
        };
        let tower = self.towers.remove(index);
        let refund = tower.kind.sell_refund(tower.level);
        self.resources = self.resources.saturating_add(refund);
        out_events.push(Event::TowerSold { tower: id, refund });
    }

    fn handle_toggle_shop(&mut self, out_events: &mut Vec<Event>) {
        self.shop_collapsed = !self.shop_collapsed;
        out_events.push(Event::ShopToggled {
            collapsed: self.shop_collapsed,
        });
    }

    fn handle_toggle_speed(&mut self, out_events: &mut Vec<Event>) {
        self.speed_index = (self.speed_index + 1) % SPEED_LEVELS.len();
        out_events.push(Event::SpeedChanged {
            multiplier: self.speed_multiplier(),
        });
    }

    fn handle_restart(&mut self, out_events: &mut Vec<Event>) {
        self.reset();
        out_events.push(Event::GameRestarted);
    }

    fn tick(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        if self.phase != GamePhase::Running {
            return;
        }
        // The simulated clock is never scaled; speed multiplies movement and
        // spawn accumulation but not the fire-cooldown timeline.
        self.clock += dt;
        self.update_spawning(dt, out_events);
        self.update_movement(out_events);
        self.update_towers(out_events);
        self.update_projectiles();
        self.check_wave_progress(out_events);
        self.check_defeat(out_events);
    }

    fn update_spawning(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        if self.wave_queue.is_empty() {
            return;
        }
        let Some(origin) = self.path.first().copied() else {
            return;
        };
        if self.spawn_timer >= self.config.spawn_interval() {
            // At most one enemy per tick; the spawn tick itself does not
            // accumulate toward the next interval.
            if let Some(spec) = self.wave_queue.pop_front() {
                self.spawn_timer = Duration::ZERO;
                let id = self.allocate_enemy_id();
                self.enemies.push(Enemy {
                    id,
                    position: origin,
                    path_index: 1,
                    health: spec.health,
                    max_health: spec.health,
                    speed: spec.speed,
                    reward: spec.reward,
                    boss: spec.boss,
                    size: spec.size,
                });
                out_events.push(Event::EnemySpawned { enemy: id });
                if let Some(kind) = spec.boss {
                    out_events.push(Event::BossEmerged { enemy: id, kind });
                }
            }
        } else {
            self.spawn_timer += dt * self.speed_multiplier();
        }
    }

    fn update_movement(&mut self, out_events: &mut Vec<Event>) {
        let multiplier = self.speed_multiplier() as f32;
        let goal = self.path.len();
        let path = &self.path;
        for enemy in &mut self.enemies {
            let Some(&target) = path.get(enemy.path_index) else {
                continue;
            };
            let step = enemy.speed * multiplier;
            if enemy.position.distance_to(target) < step {
                enemy.position = target;
                enemy.path_index += 1;
            } else {
                enemy.position = enemy.position.step_toward(target, step);
            }
        }

        let mut arrived = Vec::new();
        self.enemies.retain(|enemy| {
            if enemy.path_index >= goal {
                arrived.push(enemy.id);
                false
            } else {
                true
            }
        });
        for enemy in arrived {
            self.lives = self.lives.saturating_sub(1);
            out_events.push(Event::LifeLost {
                enemy,
                remaining: self.lives,
            });
        }
    }

    fn update_towers(&mut self, out_events: &mut Vec<Event>) {
        // Towers act in build order; a kill becomes visible to the towers
        // that act after it within the same tick.
        for tower_index in 0..self.towers.len() {
            let tower = self.towers[tower_index];
            if self.clock.saturating_sub(tower.last_fire) < tower.kind.fire_interval() {
                continue;
            }
            let candidates = self.enemies.iter().map(|enemy| (enemy.id, enemy.position));
            let Some(enemy_id) = select_target(tower.position, tower.range, candidates) else {
                continue;
            };
            let Some(enemy_index) = self.enemies.iter().position(|enemy| enemy.id == enemy_id)
            else {
                continue;
            };
            self.towers[tower_index].last_fire = self.clock;

            let impact = self.enemies[enemy_index].position;
            let projectile_id = self.allocate_projectile_id();
            self.projectiles.push(Projectile {
                id: projectile_id,
                position: tower.position,
                target: impact,
                speed: PROJECTILE_SPEED,
            });

            let (killed, reward) = {
                let enemy = &mut self.enemies[enemy_index];
                enemy.health = enemy.health.saturating_sub(tower.damage);
                (enemy.health == 0, enemy.reward)
            };
            out_events.push(Event::TowerFired {
                tower: tower.id,
                enemy: enemy_id,
                damage: tower.damage,
            });
            if killed {
                let score = u64::from(reward) * SCORE_PER_REWARD;
                self.resources = self.resources.saturating_add(reward);
                self.score += score;
                out_events.push(Event::EnemyKilled {
                    enemy: enemy_id,
                    reward,
                    score,
                });
                let _ = self.enemies.remove(enemy_index);
            }
        }
    }

    fn update_projectiles(&mut self) {
        let multiplier = self.speed_multiplier() as f32;
        self.projectiles.retain_mut(|projectile| {
            let step = projectile.speed * multiplier;
            if projectile.position.distance_to(projectile.target) < step {
                false
            } else {
                projectile.position = projectile.position.step_toward(projectile.target, step);
                true
            }
        });
    }

    fn check_wave_progress(&mut self, out_events: &mut Vec<Event>) {
        if !self.wave_queue.is_empty() || !self.enemies.is_empty() {
            return;
        }
        out_events.push(Event::WaveCleared { wave: self.wave });
        self.wave += 1;
        if self.wave <= self.config.max_waves {
            self.start_wave(out_events);
        } else {
            self.phase = GamePhase::Won;
            out_events.push(Event::GameWon { score: self.score });
        }
    }

    fn check_defeat(&mut self, out_events: &mut Vec<Event>) {
        // Runs after the wave check so that running out of lives on the same
        // tick the last wave clears still counts as a loss.
        if self.lives == 0 {
            self.phase = GamePhase::Lost;
            out_events.push(Event::GameLost { score: self.score });
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Executes the provided command against the world, pushing resulting events.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Tick { dt } => world.tick(dt, out_events),
        Command::StartGame => world.handle_start_game(out_events),
        Command::TogglePause => world.handle_toggle_pause(out_events),
        Command::SelectTowerKind { kind } => world.handle_select_tower_kind(kind, out_events),
        Command::Click { at } => world.handle_click(at, out_events),
        Command::UpgradeTower => world.handle_upgrade(out_events),
        Command::SellTower => world.handle_sell(out_events),
        Command::ToggleShop => world.handle_toggle_shop(out_events),
        Command::ToggleSpeed => world.handle_toggle_speed(out_events),
        Command::Restart => world.handle_restart(out_events),
    }
}

/// Read-only accessors that expose world state as snapshots.
pub mod query {
    use std::time::Duration;

    use castle_defence_core::{
        BuildSiteSnapshot, EnemySnapshot, EnemyView, GamePhase, ProjectileSnapshot, ProjectileView,
        TowerId, TowerKind, TowerSnapshot, TowerView, WorldPoint,
    };

    use crate::World;

    /// Current lifecycle phase of the game.
    #[must_use]
    pub fn phase(world: &World) -> GamePhase {
        world.phase
    }

    /// Resources currently held by the player.
    #[must_use]
    pub fn resources(world: &World) -> u32 {
        world.resources
    }

    /// Lives remaining before the game is lost.
    #[must_use]
    pub fn lives(world: &World) -> u32 {
        world.lives
    }

    /// Score accumulated from enemy kills.
    #[must_use]
    pub fn score(world: &World) -> u64 {
        world.score
    }

    /// 1-based index of the current wave.
    #[must_use]
    pub fn wave(world: &World) -> u32 {
        world.wave
    }

    /// Number of waves that must be cleared to win.
    #[must_use]
    pub fn max_waves(world: &World) -> u32 {
        world.config.max_waves
    }

    /// Speed multiplier currently in effect.
    #[must_use]
    pub fn speed_multiplier(world: &World) -> u32 {
        world.speed_multiplier()
    }

    /// Whether the shop panel is collapsed.
    #[must_use]
    pub fn shop_collapsed(world: &World) -> bool {
        world.shop_collapsed
    }

    /// Tower currently selected by the player, if any.
    #[must_use]
    pub fn selected_tower(world: &World) -> Option<TowerId> {
        world.selected_tower
    }

    /// Tower kind armed for building, if the player is in build mode.
    #[must_use]
    pub fn build_selection(world: &World) -> Option<TowerKind> {
        world.build_selection
    }

    /// Waypoints enemies travel along, in traversal order.
    #[must_use]
    pub fn path(world: &World) -> &[WorldPoint] {
        &world.path
    }

    /// Total simulated time the current game has been running.
    #[must_use]
    pub fn clock(world: &World) -> Duration {
        world.clock
    }

    /// Number of enemies still waiting in the active wave queue.
    #[must_use]
    pub fn wave_queue_len(world: &World) -> usize {
        world.wave_queue.len()
    }

    /// Snapshot view of all live towers, sorted by identifier.
    #[must_use]
    pub fn towers(world: &World) -> TowerView {
        let snapshots = world
            .towers
            .iter()
            .map(|tower| TowerSnapshot {
                id: tower.id,
                kind: tower.kind,
                position: tower.position,
                level: tower.level,
                damage: tower.damage,
                range: tower.range,
                ready_in: (tower.last_fire + tower.kind.fire_interval())
                    .saturating_sub(world.clock),
            })
            .collect();
        TowerView::from_snapshots(snapshots)
    }

    /// Snapshot view of all enemies on the field, sorted by identifier.
    #[must_use]
    pub fn enemies(world: &World) -> EnemyView {
        let snapshots = world
            .enemies
            .iter()
            .map(|enemy| EnemySnapshot {
                id: enemy.id,
                position: enemy.position,
                path_index: enemy.path_index,
                health: enemy.health,
                max_health: enemy.max_health,
                speed: enemy.speed,
                reward: enemy.reward,
                boss: enemy.boss,
                size: enemy.size,
            })
            .collect();
        EnemyView::from_snapshots(snapshots)
    }

    /// Snapshot view of all live projectiles, sorted by identifier.
    #[must_use]
    pub fn projectiles(world: &World) -> ProjectileView {
        let snapshots = world
            .projectiles
            .iter()
            .map(|projectile| ProjectileSnapshot {
                id: projectile.id,
                position: projectile.position,
                target: projectile.target,
                speed: projectile.speed,
            })
            .collect();
        ProjectileView::from_snapshots(snapshots)
    }

    /// Build sites together with their derived occupancy.
    #[must_use]
    pub fn build_sites(world: &World) -> Vec<BuildSiteSnapshot> {
        world
            .build_sites
            .iter()
            .map(|&position| BuildSiteSnapshot {
                position,
                tower: world
                    .towers
                    .iter()
                    .find(|tower| tower.position == position)
                    .map(|tower| tower.id),
            })
            .collect()
    }

    /// Cost of upgrading the selected tower, if one is selected.
    #[must_use]
    pub fn upgrade_cost(world: &World) -> Option<u32> {
        let id = world.selected_tower?;
        let tower = world.towers.iter().find(|tower| tower.id == id)?;
        Some(tower.kind.upgrade_cost(tower.level))
    }

    /// Refund the selected tower would yield if sold, if one is selected.
    #[must_use]
    pub fn sell_value(world: &World) -> Option<u32> {
        let id = world.selected_tower?;
        let tower = world.towers.iter().find(|tower| tower.id == id)?;
        Some(tower.kind.sell_refund(tower.level))
    }
}
