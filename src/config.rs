pub mod constant {
    pub const DEFAULT_STRATEGY: &str = "greedy";
    pub const OUTPUT_EXTENSION: &str = "out";

    // Environment overrides, read by the CLI after `.env` is loaded
    pub const STRATEGY_ENV: &str = "RIDE_DISPATCH_STRATEGY";
    pub const COMPLETION_BONUS_ENV: &str = "RIDE_DISPATCH_COMPLETION_BONUS";

    // Instance generator defaults
    pub const GENERATOR_SEED: u64 = 12345;
    pub const GENERATOR_ROWS: u32 = 100;
    pub const GENERATOR_COLS: u32 = 100;
    pub const GENERATOR_VEHICLES: usize = 10;
    pub const GENERATOR_RIDES: usize = 200;
    pub const GENERATOR_BONUS: u64 = 25;
    pub const GENERATOR_STEPS: u64 = 1_000;
}

/// Load `.env` into the process environment. Returns whether a file was found.
pub fn load_env() -> bool {
    dotenv::dotenv().is_ok()
}
