use vtplay::{
    logging,
    ui::{app::App, hook},
};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    dotenv::dotenv().ok();
    hook::install_hooks()?;
    logging::init()?;

    // No decoding happens here; the timeline length and title come from
    // the command line until a media backend is wired in.
    let duration = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(600.0);
    let title = std::env::args()
        .nth(2)
        .unwrap_or_else(|| String::from("untitled clip"));
    let standalone = std::env::var("VTPLAY_STANDALONE")
        .map(|v| v != "0")
        .unwrap_or(true);

    let mut app = App::new(title, duration, standalone);
    app.run().await
}
