use wildestone::{KoRule, MAX_SIZE, Rules};

pub const DEFAULT_BOARD_SIZE: u8 = 19;
pub const DEFAULT_KOMI: f64 = 6.5;

/// Startup settings for a session, read from `WILDESTONE_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub board_size: u8,
    pub komi: f64,
    pub rules: Rules,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            board_size: DEFAULT_BOARD_SIZE,
            komi: DEFAULT_KOMI,
            rules: Rules::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Unset variables keep their defaults; malformed ones are an error.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let mut config = Config::default();

        if let Some(v) = var("WILDESTONE_BOARD_SIZE") {
            let size: u8 = v
                .parse()
                .map_err(|_| format!("WILDESTONE_BOARD_SIZE is not a number: {v}"))?;
            if size == 0 || size > MAX_SIZE {
                return Err(format!(
                    "WILDESTONE_BOARD_SIZE must be between 1 and {MAX_SIZE}, got {size}"
                ));
            }
            config.board_size = size;
        }

        if let Some(v) = var("WILDESTONE_KOMI") {
            config.komi = v
                .parse()
                .map_err(|_| format!("WILDESTONE_KOMI is not a number: {v}"))?;
        }

        if let Some(v) = var("WILDESTONE_KO_RULE") {
            config.rules.ko = v.parse::<KoRule>()?;
        }

        Ok(config)
    }
}
