//! The farm: one owned aggregate of plots, stock and gold.
//!
//! RULES:
//!   - Every operation validates first and mutates second.
//!   - A rejected operation leaves the farm exactly as it was.
//!   - Plots stay in planting order. A single-crop harvest always takes
//!     the oldest ready plot of that crop.
//!   - The catalog is read, never written.

use crate::{
    catalog::{normalize_id, CropCatalog, CropSpec},
    clock::FarmClock,
    command::FarmCommand,
    config::FarmConfig,
    error::{FarmError, FarmResult},
    event::FarmEvent,
    inventory::Inventory,
    plot::Plot,
    snapshot::FarmSnapshot,
    types::{Day, Gold},
};

#[derive(Debug, Clone)]
pub struct FarmState {
    catalog:         CropCatalog,
    config:          FarmConfig,
    clock:           FarmClock,
    gold:            Gold,
    inventory:       Inventory,
    plot_capacity:   u32,
    plots_purchased: u32,
    plots:           Vec<Plot>,
    events:          Vec<FarmEvent>,
}

impl FarmState {
    pub fn new(catalog: CropCatalog, config: FarmConfig) -> FarmResult<Self> {
        config.validate(&catalog)?;
        Ok(Self::assemble(catalog, config))
    }

    /// Built-in catalog and default starting conditions (20 gold, 3 pepper seeds).
    pub fn standard() -> Self {
        Self::assemble(CropCatalog::standard(), FarmConfig::default())
    }

    /// Built-in catalog with an empty seed bag. Used by tests.
    pub fn build_test() -> Self {
        Self::assemble(CropCatalog::standard(), FarmConfig::default_test())
    }

    fn assemble(catalog: CropCatalog, config: FarmConfig) -> Self {
        let mut inventory = Inventory::new();
        for (crop, &qty) in &config.starting_seeds {
            inventory.add_seeds(&normalize_id(crop), qty);
        }
        Self {
            gold:            config.starting_gold,
            plot_capacity:   config.starting_plot_capacity,
            plots_purchased: 0,
            clock:           FarmClock::new(),
            plots:           Vec::new(),
            events:          Vec::new(),
            inventory,
            catalog,
            config,
        }
    }

    // ── Queries ────────────────────────────────────────────────

    pub fn catalog(&self) -> &CropCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &FarmConfig {
        &self.config
    }

    pub fn day(&self) -> Day {
        self.clock.current_day
    }

    pub fn gold(&self) -> Gold {
        self.gold
    }

    pub fn plot_capacity(&self) -> u32 {
        self.plot_capacity
    }

    pub fn plots_purchased(&self) -> u32 {
        self.plots_purchased
    }

    /// Active plots, oldest first.
    pub fn plots(&self) -> &[Plot] {
        &self.plots
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Seed count for a crop id in any case. Unknown crops hold nothing.
    pub fn seeds(&self, crop: &str) -> u32 {
        self.inventory.seeds(&normalize_id(crop))
    }

    /// Harvested-crop count for a crop id in any case.
    pub fn crops(&self, crop: &str) -> u32 {
        self.inventory.crops(&normalize_id(crop))
    }

    /// Number of active plots growing `crop`.
    pub fn plots_of(&self, crop: &str) -> usize {
        let crop = normalize_id(crop);
        self.plots.iter().filter(|p| p.crop_type() == crop).count()
    }

    /// Every successful operation so far, oldest first.
    pub fn events(&self) -> &[FarmEvent] {
        &self.events
    }

    pub fn snapshot(&self) -> FarmSnapshot {
        FarmSnapshot::capture(self)
    }

    /// Price of the next `buy_plot`: base cost plus one increment per
    /// plot already bought.
    pub fn next_plot_cost(&self) -> Gold {
        Gold::from(self.plots_purchased)
            .saturating_mul(self.config.plot_cost_increment)
            .saturating_add(self.config.plot_base_cost)
    }

    // ── Plot lifecycle ─────────────────────────────────────────

    /// Spend one seed to start a new plot at stage 0.
    pub fn plant(&mut self, crop: &str) -> FarmResult<FarmEvent> {
        let spec = self.spec(crop)?.clone();
        let day = self.day();

        if self.plots.len() >= self.plot_capacity as usize {
            return self.reject(FarmError::NoCapacity { capacity: self.plot_capacity });
        }
        if self.inventory.seeds(&spec.id) == 0 {
            return self.reject(FarmError::NoSeeds { crop: spec.id });
        }
        let limit = self.config.max_plots_per_crop;
        if self.plots_of(&spec.id) >= limit as usize {
            return self.reject(FarmError::PerCropLimitReached { crop: spec.id, limit });
        }

        let seeds_left = self.inventory.take_seed(&spec.id);
        self.plots.push(Plot::new(&spec));

        log::info!(
            "day={day} farm: planted {} ({}/{} plots, {seeds_left} seeds left)",
            spec.id,
            self.plots.len(),
            self.plot_capacity
        );
        Ok(self.record(FarmEvent::Planted { day, crop: spec.id, seeds_left }))
    }

    /// Let `days` days pass. Each growing plot gains one stage per day
    /// and stops at its crop's grow time.
    pub fn advance(&mut self, days: Day) -> FarmResult<FarmEvent> {
        if days < 1 {
            return self.reject(FarmError::InvalidDuration { days });
        }

        let mut newly_ready = 0u32;
        for elapsed in 0..days {
            if self.plots.iter().all(Plot::is_ready) {
                self.clock.advance_by(days - elapsed);
                break;
            }
            let day = self.clock.advance();
            for plot in &mut self.plots {
                if plot.grow() {
                    newly_ready += 1;
                    log::debug!("day={day} farm: {} plot is ready", plot.crop_type());
                }
            }
        }

        let day = self.day();
        log::info!("day={day} farm: {days} day(s) passed, {newly_ready} plot(s) ripened");
        Ok(self.record(FarmEvent::TimeAdvanced { day, days, newly_ready }))
    }

    /// Harvest the oldest ready plot of `crop`. Finding none is not an
    /// error: the result is `FarmEvent::NothingReady` and nothing changes.
    pub fn harvest_one(&mut self, crop: &str) -> FarmResult<FarmEvent> {
        let crop = self.spec(crop)?.id.clone();
        let day = self.day();

        let found = self
            .plots
            .iter()
            .position(|p| p.crop_type() == crop && p.is_ready());
        let Some(index) = found else {
            log::debug!("day={day} farm: no ready {crop} to harvest");
            return Ok(self.record(FarmEvent::NothingReady { day, crop }));
        };
        let Some(stored) = self.inventory.crops(&crop).checked_add(1) else {
            return self.reject(FarmError::InventoryOverflow { crop });
        };

        self.plots.remove(index);
        self.inventory.add_crop(&crop);

        log::info!("day={day} farm: harvested 1 {crop} ({stored} stored)");
        Ok(self.record(FarmEvent::Harvested { day, crop, stored }))
    }

    /// Harvest every ready plot. Returns how many were taken.
    ///
    /// A ready plot whose crop count is already at `u32::MAX` stays in
    /// the field, still ready, instead of losing its yield.
    pub fn harvest_all_ready(&mut self) -> u32 {
        self.collect_ready().0
    }

    fn collect_ready(&mut self) -> (u32, FarmEvent) {
        let day = self.day();
        let mut count = 0u32;
        let mut left_full = 0u32;

        let inventory = &mut self.inventory;
        self.plots.retain(|plot| {
            if !plot.is_ready() {
                return true;
            }
            if inventory.add_crop(plot.crop_type()).is_none() {
                left_full += 1;
                return true;
            }
            count += 1;
            false
        });

        if left_full > 0 {
            log::warn!("day={day} farm: {left_full} ready plot(s) left in place, crop stock is full");
        }
        if count > 0 {
            log::info!("day={day} farm: harvested {count} ready plot(s)");
        } else {
            log::debug!("day={day} farm: no plots ready");
        }
        (count, self.record(FarmEvent::HarvestedAll { day, count }))
    }

    // ── Economy ────────────────────────────────────────────────

    pub fn buy_seeds(&mut self, crop: &str, qty: u32) -> FarmResult<FarmEvent> {
        let spec = self.spec(crop)?.clone();
        let day = self.day();

        if qty == 0 {
            return self.reject(FarmError::InvalidQuantity { qty });
        }
        let cost = Gold::from(spec.seed_cost) * Gold::from(qty);
        if self.gold < cost {
            return self.reject(FarmError::InsufficientGold {
                needed:    cost,
                available: self.gold,
            });
        }
        if self.inventory.seeds(&spec.id).checked_add(qty).is_none() {
            return self.reject(FarmError::InventoryOverflow { crop: spec.id });
        }

        self.gold -= cost;
        let stock = self.inventory.add_seeds(&spec.id, qty);

        log::info!(
            "day={day} farm: bought {qty} {} seeds for {cost} gold ({stock} in stock, {} gold left)",
            spec.id,
            self.gold
        );
        Ok(self.record(FarmEvent::SeedsBought {
            day,
            crop:      spec.id,
            qty,
            cost,
            gold_left: self.gold,
        }))
    }

    pub fn sell_crops(&mut self, crop: &str, qty: u32) -> FarmResult<FarmEvent> {
        let spec = self.spec(crop)?.clone();
        let day = self.day();

        if qty == 0 {
            return self.reject(FarmError::InvalidQuantity { qty });
        }
        let available = self.inventory.crops(&spec.id);
        if available < qty {
            return self.reject(FarmError::InsufficientInventory {
                crop: spec.id,
                requested: qty,
                available,
            });
        }
        let revenue = Gold::from(spec.sell_price) * Gold::from(qty);
        let Some(gold_now) = self.gold.checked_add(revenue) else {
            return self.reject(FarmError::GoldOverflow);
        };

        self.inventory.remove_crops(&spec.id, qty);
        self.gold = gold_now;

        log::info!(
            "day={day} farm: sold {qty} {} for {revenue} gold ({gold_now} gold now)",
            spec.id
        );
        Ok(self.record(FarmEvent::CropsSold {
            day,
            crop: spec.id,
            qty,
            revenue,
            gold_now,
        }))
    }

    /// Raise plot capacity by one. Each purchase makes the next one dearer.
    pub fn buy_plot(&mut self) -> FarmResult<FarmEvent> {
        let day = self.day();
        let cost = self.next_plot_cost();

        if self.gold < cost {
            return self.reject(FarmError::InsufficientGold {
                needed:    cost,
                available: self.gold,
            });
        }

        self.gold -= cost;
        self.plot_capacity += 1;
        self.plots_purchased += 1;
        let next_cost = self.next_plot_cost();

        log::info!(
            "day={day} farm: bought plot #{} for {cost} gold (capacity {})",
            self.plots_purchased,
            self.plot_capacity
        );
        Ok(self.record(FarmEvent::PlotBought {
            day,
            cost,
            capacity: self.plot_capacity,
            next_cost,
        }))
    }

    // ── Commands ───────────────────────────────────────────────

    /// Run one player command and return the event it produced.
    pub fn apply(&mut self, command: FarmCommand) -> FarmResult<FarmEvent> {
        match command {
            FarmCommand::Plant { crop }          => self.plant(&crop),
            FarmCommand::Advance { days }        => self.advance(days),
            FarmCommand::Harvest { crop }        => self.harvest_one(&crop),
            FarmCommand::HarvestAll              => Ok(self.collect_ready().1),
            FarmCommand::BuySeeds { crop, qty }  => self.buy_seeds(&crop, qty),
            FarmCommand::SellCrops { crop, qty } => self.sell_crops(&crop, qty),
            FarmCommand::BuyPlot                 => self.buy_plot(),
        }
    }

    // ── Internals ──────────────────────────────────────────────

    fn spec(&self, crop: &str) -> FarmResult<&CropSpec> {
        match self.catalog.lookup(crop) {
            Ok(spec) => Ok(spec),
            Err(e) => self.reject(e),
        }
    }

    fn reject<T>(&self, err: FarmError) -> FarmResult<T> {
        log::warn!("day={} farm: rejected: {err}", self.day());
        Err(err)
    }

    fn record(&mut self, event: FarmEvent) -> FarmEvent {
        self.events.push(event.clone());
        event
    }
}
