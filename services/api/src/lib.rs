mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use supplier_eval::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
