use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use drill_core::model::practice_summary;
use services::DrillService;
use ui::{App, UiApp, build_app_context};

struct DesktopApp {
    drill: Arc<DrillService>,
}

impl UiApp for DesktopApp {
    fn drill_service(&self) -> Arc<DrillService> {
        Arc::clone(&self.drill)
    }

    fn on_finished(&self, practiced: u32) {
        println!("{}", practice_summary(practiced));
        dioxus::desktop::window().close();
    }
}

/// Open the practice window. Blocks until it is closed.
pub fn launch(service: DrillService) {
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        drill: Arc::new(service),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Typing practice")
            .with_inner_size(LogicalSize::new(800.0, 400.0))
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}
