mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use crs_roadmap::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
