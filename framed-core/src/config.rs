use framed_services::SettingsRegistry;
use framed_theme::palette::Palette;
use nalgebra::Vector2;

/// framed Application Configuration Structure.
#[derive(Clone, Debug, Default)]
pub struct FramedConfig {
    /// Window Configuration
    pub window: WindowConfig,
    /// Display metrics of the target screen.
    pub display: DisplayMetrics,
    /// Default colors handed to widgets.
    pub palette: Palette,
}

impl FramedConfig {
    /// Build a configuration from loaded settings, keeping defaults for anything unset.
    pub fn from_settings(settings: &SettingsRegistry) -> Self {
        let config = settings.get();
        let mut window = WindowConfig::default();

        if let Some(title) = &config.window.title {
            window.title = title.clone();
        }
        if let Some(width) = config.window.width {
            window.size.x = width;
        }
        if let Some(height) = config.window.height {
            window.size.y = height;
        }

        let display = match config.display.density {
            Some(density) => DisplayMetrics::new(density),
            None => DisplayMetrics::default(),
        };

        Self {
            window,
            display,
            palette: settings.palette,
        }
    }
}

/// Window configuration.
#[derive(Clone, Debug)]
pub struct WindowConfig {
    /// The title of the window.
    pub title: String,
    /// The inner size of the window, in pixels.
    pub size: Vector2<f64>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "New App".to_string(),
            size: Vector2::new(360.0, 640.0),
        }
    }
}

/// Physical characteristics of the display the widgets are drawn on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayMetrics {
    /// Multiplier from density-independent units to pixels.
    pub density: f32,
}

impl DisplayMetrics {
    /// Create metrics with the given density multiplier.
    pub fn new(density: f32) -> Self {
        Self { density }
    }

    /// Convert density-independent units to pixels.
    pub fn scale(&self, units: f32) -> f32 {
        units * self.density
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self { density: 1.0 }
    }
}
