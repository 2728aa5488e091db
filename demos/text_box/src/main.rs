use std::error::Error;

use framed::prelude::*;
use framed_core::text_render::TextMetrics;
use framed_services::SettingsRegistry;

const ACTIVITY_MAIN: &str = include_str!("../res/activity_main.toml");
const TEXT_BOX_ID: &str = "mycustomview";
const BUTTON_ID: &str = "buttonSize";
const CLICKED_TEXT_SIZE: f32 = 36.0;

/// Shows the text box and a button that enlarges its text.
#[derive(Default)]
struct MainScreen {
    text_metrics: Option<fn() -> Box<dyn TextMetrics>>,
    menu: Vec<MenuItem>,
}

impl MainScreen {
    fn with_text_metrics(text_metrics: fn() -> Box<dyn TextMetrics>) -> Self {
        Self {
            text_metrics: Some(text_metrics),
            menu: Vec::new(),
        }
    }
}

impl Screen for MainScreen {
    fn on_create(&mut self, context: &AppContext) -> Result<WidgetTree, Box<dyn Error + Send + Sync>> {
        let mut inflater = Inflater::new(context);
        if let Some(text_metrics) = self.text_metrics {
            inflater = inflater.with_text_metrics(text_metrics);
        }

        let inflated = inflater.inflate_str(ACTIVITY_MAIN)?;
        let mut tree = inflated.tree;

        if tree.find::<TextBox>(TEXT_BOX_ID).is_none() {
            return Err(format!("layout has no text box '{}'", TEXT_BOX_ID).into());
        }
        if !tree.set_on_click_listener(BUTTON_ID) {
            return Err(format!("layout has no button '{}'", BUTTON_ID).into());
        }

        self.menu = inflated.menu;
        Ok(tree)
    }

    fn on_click(&mut self, source: &str, tree: &mut WidgetTree, _context: &AppContext) {
        if source != BUTTON_ID {
            return;
        }

        if let Some(text_box) = tree.find_mut::<TextBox>(TEXT_BOX_ID) {
            text_box.set_text_size(CLICKED_TEXT_SIZE);
        }
    }

    fn options_menu(&self) -> Vec<MenuItem> {
        self.menu.clone()
    }
}

fn main() -> anyhow::Result<()> {
    let settings = smol::block_on(SettingsRegistry::new())?;

    let level = settings
        .get()
        .general
        .log_level
        .clone()
        .unwrap_or_else(|| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = FramedConfig::from_settings(&settings);

    let mut runner = FrameRunner::new(config, MainScreen::default())?;
    runner.run_frame()?;

    for item in runner.menu() {
        log::info!("Menu item '{}': {}", item.id, item.title);
    }

    let Some(button) = runner.layout().and_then(|layout| layout.children.get(1)) else {
        anyhow::bail!("button was not laid out");
    };
    let center = button.bounds().center();

    runner.push_pointer(PointerEvent::new(PointerAction::Down, center));
    runner.push_pointer(PointerEvent::new(PointerAction::Up, center));
    let report = runner.run_frame()?;

    if let Some(text_box) = runner.tree().find::<TextBox>(TEXT_BOX_ID) {
        log::info!(
            "Text size is now {} ({} px), relaid out: {}",
            text_box.text_size(),
            text_box.resolved_text_size(),
            report.laid_out
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use framed_core::text_render::FixedAdvanceMetrics;

    fn fixed_metrics() -> Box<dyn TextMetrics> {
        Box::new(FixedAdvanceMetrics::new(0.5, 0.25))
    }

    fn runner() -> FrameRunner<MainScreen> {
        FrameRunner::new(
            FramedConfig::default(),
            MainScreen::with_text_metrics(fixed_metrics),
        )
        .unwrap()
    }

    fn click_button(runner: &mut FrameRunner<MainScreen>) -> FrameReport {
        let center = runner.layout().unwrap().children[1].bounds().center();
        runner.push_pointer(PointerEvent::new(PointerAction::Down, center));
        runner.push_pointer(PointerEvent::new(PointerAction::Up, center));
        runner.run_frame().unwrap()
    }

    #[test]
    fn test_screen_inflates_layout() {
        let mut runner = runner();
        runner.run_frame().unwrap();

        let text_box = runner.tree().find::<TextBox>(TEXT_BOX_ID).unwrap();
        assert_eq!(text_box.text(), "Marco");
        assert_eq!(text_box.text_size(), 24.0);
        assert!(runner.tree().find::<Button>(BUTTON_ID).is_some());

        let text_box_layout = &runner.layout().unwrap().children[0].layout;
        assert_eq!(text_box_layout.size.width, 360.0);
        assert_eq!(text_box_layout.size.height, 24.0);

        assert_eq!(runner.menu(), &[MenuItem::new("menu_settings", "Settings")]);
    }

    #[test]
    fn test_click_sets_text_size() {
        let mut runner = runner();
        runner.run_frame().unwrap();

        let report = click_button(&mut runner);
        assert!(report.laid_out);
        assert!(report.drawn);

        let text_box = runner.tree().find::<TextBox>(TEXT_BOX_ID).unwrap();
        assert_eq!(text_box.text_size(), 36.0);
        assert_eq!(text_box.resolved_text_size(), 36.0);
        assert_eq!(text_box.text_width(), 5.0 * 18.0);

        let text_box_layout = &runner.layout().unwrap().children[0].layout;
        assert_eq!(text_box_layout.size.height, 36.0);
    }

    #[test]
    fn test_click_uses_display_density() {
        let mut runner = runner();
        runner.set_display_metrics(DisplayMetrics::new(2.0));
        runner.run_frame().unwrap();

        click_button(&mut runner);

        let text_box = runner.tree().find::<TextBox>(TEXT_BOX_ID).unwrap();
        assert_eq!(text_box.text_size(), 36.0);
        assert_eq!(text_box.resolved_text_size(), 72.0);
    }

    #[test]
    fn test_pressing_the_text_box_changes_nothing() {
        let mut runner = runner();
        runner.run_frame().unwrap();

        let center = runner.layout().unwrap().children[0].bounds().center();
        runner.push_pointer(PointerEvent::new(PointerAction::Down, center));
        runner.push_pointer(PointerEvent::new(PointerAction::Up, center));

        let report = runner.run_frame().unwrap();
        assert_eq!(report, FrameReport::default());
        assert_eq!(runner.tree().find::<TextBox>(TEXT_BOX_ID).unwrap().text_size(), 24.0);
    }
}
