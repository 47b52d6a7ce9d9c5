/*
 * Bingo Overlay
 *
 * Shows a bingo card with an animated particle field on top of it. Chips
 * are placed with a left click, dragged while the button is held and
 * removed with a right click. The settings panel loads the card and chip
 * images, clears the board and toggles the particle field.
 */

use bingo_overlay::app;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bingo_overlay=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("starting bingo overlay");

    nannou::app(app::model).update(app::update).run();
}
