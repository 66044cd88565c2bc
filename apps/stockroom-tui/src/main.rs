//! # Stockroom Entry Point
//!
//! Everything lives in the library; see [`stockroom_tui::run`].

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockroom_tui::run().await
}
