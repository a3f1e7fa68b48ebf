mod assets;
mod browser;
mod config;
mod docker;
mod prompt;

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cwd = std::env::current_dir()?;
    config::load_env(&cwd);

    let Some(credential) = prompt::acquire_credential()? else {
        println!("No OpenAI API key entered. Exiting.");
        return Ok(());
    };

    let docker_bin = config::resolve_docker_binary();
    let meta = docker::RuntimeMeta::detect(&cwd, &docker_bin).await;
    if !meta.available {
        println!(
            "Docker does not seem to be installed or running (context: {}, backend: {}).",
            meta.context_name, meta.backend
        );
        println!("Please install/start Docker and try again.");
        return Ok(());
    }

    println!("Loading Docker images from embedded archives...");
    for (name, bytes) in [
        (config::BACKEND_ARCHIVE, assets::BACKEND_IMAGE),
        (config::FRONTEND_ARCHIVE, assets::FRONTEND_IMAGE),
    ] {
        let path = cwd.join(name);
        assets::write_asset(&path, bytes)?;
        docker::load_image(&meta, &cwd, &path).await?;
    }

    assets::write_asset(&cwd.join(config::COMPOSE_FILE), assets::COMPOSE_DESCRIPTOR)?;

    println!("Docker images loaded. Starting containers...");
    docker::compose_up(&meta, &cwd, &credential).await?;

    println!("Containers are starting. Please wait a few seconds...");
    tokio::time::sleep(config::startup_delay()).await;
    browser::open_browser(std::env::consts::OS, config::APP_URL);

    println!("Done! Press Ctrl+C to stop if needed (or run 'docker compose down').");
    Ok(())
}
