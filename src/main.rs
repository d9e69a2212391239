mod cli;
mod config;
mod gateways;
mod prompt;

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    cli::run()
}
