//! Status bar icon resolution.
//!
//! The icon ships inside the UI toolkit's framework bundle, so its path is
//! composed from the host's private frameworks directory. What ends up on
//! the status button is described by [`IconAppearance`].

use std::path::{Path, PathBuf};

use crate::config::IconConfig;

/// Compose `<frameworks>/<relative_path>`.
pub fn resolve_icon_path(frameworks_dir: &Path, icon: &IconConfig) -> PathBuf {
    frameworks_dir.join(&icon.relative_path)
}

/// What the status button currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum IconAppearance {
    /// A loaded image, resized and optionally marked as template.
    Image {
        width: f64,
        height: f64,
        template: bool,
    },
    /// Text fallback when no image could be loaded.
    Title(String),
}

impl IconAppearance {
    /// Square template image of the configured size.
    pub fn template_image(icon: &IconConfig) -> Self {
        IconAppearance::Image {
            width: icon.size,
            height: icon.size,
            template: true,
        }
    }

    pub fn fallback(icon: &IconConfig) -> Self {
        IconAppearance::Title(icon.fallback_title.clone())
    }

    pub fn is_image(&self) -> bool {
        matches!(self, IconAppearance::Image { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_path_composition() {
        let icon = IconConfig::default();
        let path = resolve_icon_path(Path::new("/Applications/TxtPocket.app/Contents/Frameworks"), &icon);
        assert_eq!(
            path,
            PathBuf::from(
                "/Applications/TxtPocket.app/Contents/Frameworks/App.framework/Resources/flutter_assets/assets/app_icon.png"
            )
        );
    }

    #[test]
    fn test_template_image_is_square() {
        let appearance = IconAppearance::template_image(&IconConfig::default());
        assert_eq!(
            appearance,
            IconAppearance::Image {
                width: 18.0,
                height: 18.0,
                template: true
            }
        );
        assert!(appearance.is_image());
    }

    #[test]
    fn test_fallback_uses_title() {
        let appearance = IconAppearance::fallback(&IconConfig::default());
        assert_eq!(appearance, IconAppearance::Title("T".to_string()));
        assert!(!appearance.is_image());
    }
}
