use std::path::Path;
use std::time::Duration;

pub const APP_URL: &str = "http://localhost:8000";
pub const COMPOSE_FILE: &str = "docker-compose.yml";
pub const BACKEND_ARCHIVE: &str = "backend.tar";
pub const FRONTEND_ARCHIVE: &str = "frontend.tar";
pub const CREDENTIAL_VAR: &str = "OPENAI_API_KEY";

const DEFAULT_STARTUP_DELAY_MS: u64 = 3000;

pub fn resolve_docker_binary() -> String {
    std::env::var("DOCKER_BIN").unwrap_or_else(|_| "docker".to_string())
}

/// Heuristic pause between `compose up -d` and the browser open; there is no
/// readiness check against the service itself.
pub fn startup_delay() -> Duration {
    parse_delay_ms(std::env::var("STARTUP_DELAY_MS").ok().as_deref())
}

fn parse_delay_ms(raw: Option<&str>) -> Duration {
    let ms = raw
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_STARTUP_DELAY_MS);
    Duration::from_millis(ms)
}

/// Preload .env from the working directory so OPENAI_API_KEY can be
/// preconfigured instead of prompted for.
pub fn load_env(cwd: &Path) {
    let base = cwd.join(".env");
    if base.exists() {
        dotenvy::from_path(&base).ok();
    }
}
