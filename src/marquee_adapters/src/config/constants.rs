pub mod env {
    /// Overrides the path of the optional settings file.
    pub const CONFIG_FILE_ENV_VAR: &str = "MARQUEE_CONFIG";
    /// Prefix for environment overrides, e.g. `MARQUEE__AUTH__JWT_SECRET`.
    pub const SETTINGS_PREFIX: &str = "MARQUEE";
    pub const SETTINGS_SEPARATOR: &str = "__";
}

pub mod defaults {
    pub const APP_HOST: &str = "0.0.0.0";
    pub const APP_PORT: u16 = 8080;

    pub const PG_MAX_CONNECTIONS: u32 = 5;
    pub const PG_TIMEOUT_MILLIS: u64 = 5_000;

    pub const TOKEN_TTL_SECONDS: i64 = 4 * 60 * 60;

    // Argon2id work factor, fixed at startup.
    pub const HASHER_M_COST: u32 = 15_000;
    pub const HASHER_T_COST: u32 = 2;
    pub const HASHER_P_COST: u32 = 1;
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";

    // Cheap work factor so test suites are not dominated by hashing.
    pub const HASHER_M_COST: u32 = 1_024;
    pub const HASHER_T_COST: u32 = 1;
    pub const HASHER_P_COST: u32 = 1;
}
