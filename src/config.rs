use chrono::NaiveDate;

const DEFAULT_START_DATE: &str = "2026-02-08";
const DEFAULT_RACE_DATE: &str = "2026-10-11";
const DEFAULT_BUILD_START: &str = "2026-05-01";
const DEFAULT_PEAK_START: &str = "2026-08-01";
const DEFAULT_BASE_RAMP_END: &str = "2026-04-30";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// First day of the season (inclusive).
    pub start_date: NaiveDate,
    /// Race day, the last day of the season (inclusive).
    pub race_date: NaiveDate,
    /// First day of the strength block.
    pub build_start: NaiveDate,
    /// First day of the taper block.
    pub peak_start: NaiveDate,
    /// Date the base-phase long run reaches its cap.
    pub base_ramp_end: NaiveDate,
    /// Weeks over which the strength-phase long run ramps to its cap.
    pub build_ramp_weeks: i64,
    /// Weeks over which the taper-phase long run ramps to its cap.
    pub peak_ramp_weeks: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            start_date: parse_date(DEFAULT_START_DATE),
            race_date: parse_date(DEFAULT_RACE_DATE),
            build_start: parse_date(DEFAULT_BUILD_START),
            peak_start: parse_date(DEFAULT_PEAK_START),
            base_ramp_end: parse_date(DEFAULT_BASE_RAMP_END),
            build_ramp_weeks: 13,
            peak_ramp_weeks: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);

        let build_ramp_weeks = std::env::var("BUILD_RAMP_WEEKS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.build_ramp_weeks);

        let peak_ramp_weeks = std::env::var("PEAK_RAMP_WEEKS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.peak_ramp_weeks);

        Self {
            port,
            start_date: env_date("PLAN_START_DATE", defaults.start_date),
            race_date: env_date("RACE_DATE", defaults.race_date),
            build_start: env_date("BUILD_PHASE_START", defaults.build_start),
            peak_start: env_date("PEAK_PHASE_START", defaults.peak_start),
            base_ramp_end: env_date("BASE_RAMP_END", defaults.base_ramp_end),
            build_ramp_weeks,
            peak_ramp_weeks,
        }
    }
}

fn env_date(key: &str, default: NaiveDate) -> NaiveDate {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn parse_date(s: &str) -> NaiveDate {
    s.parse().unwrap_or_default()
}
