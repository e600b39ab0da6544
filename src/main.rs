use folio::ui::app::App;
use tracing::Level;

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("failed to init logger: {err}");
    }

    #[cfg(feature = "desktop")]
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::WindowBuilder::new()
                    .with_title(folio::ui::app::WINDOW_TITLE)
                    .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0)),
            ),
        )
        .launch(App);

    #[cfg(not(feature = "desktop"))]
    dioxus::launch(App);
}
