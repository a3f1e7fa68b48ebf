use crate::config;
use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::path::Path;
use tokio::process::Command;

#[derive(Debug, Clone)]
pub struct RuntimeMeta {
    pub context_name: String,
    pub backend: String,
    pub available: bool,
    pub docker_bin: String,
}

impl RuntimeMeta {
    /// One-shot detection: `docker info` decides availability, the context
    /// commands only enrich the diagnostics. Nothing here is retried or
    /// revisited later in the run.
    pub async fn detect(cwd: &Path, docker_bin: &str) -> Self {
        let docker_bin = docker_bin.to_string();
        let cwd_buf = cwd.to_path_buf();

        let context_check = async {
            let mut ctx_name = "default".to_string();
            let mut backend = "docker".to_string();

            if let Ok(ctx_out) = cmd_out(&docker_bin, &cwd_buf, &["context", "show"]).await {
                let ctx = ctx_out.trim().to_string();
                if !ctx.is_empty() {
                    ctx_name = ctx.clone();
                }
                if let Ok(info) = cmd_out(&docker_bin, &cwd_buf, &["context", "inspect", &ctx]).await
                {
                    if let Ok(v) = serde_json::from_str::<Value>(&info) {
                        let host = v
                            .get(0)
                            .and_then(|x| x.get("Endpoints"))
                            .and_then(|x| x.get("docker"))
                            .and_then(|x| x.get("Host"))
                            .and_then(|x| x.as_str())
                            .unwrap_or("");
                        backend = classify(&ctx, host);
                    }
                }
            }
            (ctx_name, backend)
        };

        let availability_check = async {
            Command::new(&docker_bin)
                .current_dir(&cwd_buf)
                .args(["info"])
                .output()
                .await
                .map(|o| o.status.success())
                .unwrap_or(false)
        };

        let ((context_name, backend), available) = tokio::join!(context_check, availability_check);

        RuntimeMeta {
            context_name,
            backend,
            available,
            docker_bin,
        }
    }
}

fn classify(context_name: &str, socket_path: &str) -> String {
    let s = format!("{context_name} {socket_path}").to_lowercase();
    if s.contains("colima") {
        "colima".to_string()
    } else {
        "docker".to_string()
    }
}

async fn cmd_out(bin: &str, cwd: &Path, args: &[&str]) -> Result<String> {
    let out = Command::new(bin).current_dir(cwd).args(args).output().await?;
    if !out.status.success() {
        bail!("command failed: {bin} {args:?}");
    }
    Ok(String::from_utf8_lossy(&out.stdout).trim_end().to_string())
}

/// `docker load -i <archive>`, child output streaming straight to the
/// console. On success the archive is a spent temporary and gets removed;
/// removal failure is ignored.
pub async fn load_image(meta: &RuntimeMeta, cwd: &Path, archive: &Path) -> Result<()> {
    let status = Command::new(&meta.docker_bin)
        .current_dir(cwd)
        .args(["load", "-i"])
        .arg(archive)
        .status()
        .await
        .with_context(|| format!("failed to run {} load", meta.docker_bin))?;
    if !status.success() {
        bail!("{} load -i {} failed ({status})", meta.docker_bin, archive.display());
    }

    let _ = std::fs::remove_file(archive);
    Ok(())
}

/// `docker compose up -d` against the just-written descriptor. The credential
/// travels only through the child's environment, on top of everything
/// inherited from this process.
pub async fn compose_up(meta: &RuntimeMeta, cwd: &Path, credential: &str) -> Result<()> {
    let status = Command::new(&meta.docker_bin)
        .current_dir(cwd)
        .args(["compose", "-f", config::COMPOSE_FILE, "up", "-d"])
        .envs(std::env::vars())
        .env(config::CREDENTIAL_VAR, credential)
        .status()
        .await
        .with_context(|| format!("failed to run {} compose up", meta.docker_bin))?;
    if !status.success() {
        bail!("{} compose up failed ({status})", meta.docker_bin);
    }
    Ok(())
}
