//! In-memory host shared by the integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use txtpocket_shell::model::ContextMenu;
use txtpocket_shell::{AppHost, ClickKind, StatusBarHost};

/// First bytes of every PNG file.
pub const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Every host operation the controllers performed, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CenterWindow,
    MakeKeyAndOrderFront,
    Activate,
    Terminate,
    CreateStatusItem(f64),
    SetVisible(bool),
    SetImage {
        path: PathBuf,
        width: f64,
        height: f64,
        template: bool,
    },
    SetTitle(String),
    BindClicks(Vec<ClickKind>),
    InstallMenu(ContextMenu),
    PopupMenu(f64),
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    pub has_window: bool,
    pub frameworks_dir: Option<PathBuf>,
    pub current_event: Option<ClickKind>,
    pub calls: Vec<Call>,
}

impl RecordingHost {
    pub fn with_window() -> Self {
        Self {
            has_window: true,
            ..Self::default()
        }
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn status_items_created(&self) -> usize {
        self.count(|c| matches!(c, Call::CreateStatusItem(_)))
    }

    pub fn popups(&self) -> usize {
        self.count(|c| matches!(c, Call::PopupMenu(_)))
    }

    pub fn window_calls(&self) -> usize {
        self.count(|c| {
            matches!(
                c,
                Call::CenterWindow | Call::MakeKeyAndOrderFront | Call::Activate
            )
        })
    }

    pub fn images_set(&self) -> Vec<&Call> {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::SetImage { .. }))
            .collect()
    }

    pub fn titles_set(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::SetTitle(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl AppHost for RecordingHost {
    type Window = ();

    fn primary_window(&self) -> Option<()> {
        self.has_window.then_some(())
    }

    fn center_window(&mut self, _window: &()) {
        self.calls.push(Call::CenterWindow);
    }

    fn make_key_and_order_front(&mut self, _window: &()) {
        self.calls.push(Call::MakeKeyAndOrderFront);
    }

    fn activate_ignoring_other_apps(&mut self) {
        self.calls.push(Call::Activate);
    }

    fn terminate(&mut self) {
        self.calls.push(Call::Terminate);
    }
}

impl StatusBarHost for RecordingHost {
    /// The "decoded" image is just the path it came from.
    type Image = PathBuf;

    fn private_frameworks_dir(&self) -> Option<PathBuf> {
        self.frameworks_dir.clone()
    }

    fn load_image(&mut self, path: &Path) -> Option<PathBuf> {
        let bytes = fs::read(path).ok()?;
        bytes.starts_with(PNG_MAGIC).then(|| path.to_path_buf())
    }

    fn create_status_item(&mut self, length: f64) {
        self.calls.push(Call::CreateStatusItem(length));
    }

    fn set_status_item_visible(&mut self, visible: bool) {
        self.calls.push(Call::SetVisible(visible));
    }

    fn set_status_image(&mut self, image: PathBuf, width: f64, height: f64, template: bool) {
        self.calls.push(Call::SetImage {
            path: image,
            width,
            height,
            template,
        });
    }

    fn set_status_title(&mut self, title: &str) {
        self.calls.push(Call::SetTitle(title.to_string()));
    }

    fn bind_status_clicks(&mut self, kinds: &[ClickKind]) {
        self.calls.push(Call::BindClicks(kinds.to_vec()));
    }

    fn install_status_menu(&mut self, menu: &ContextMenu) {
        self.calls.push(Call::InstallMenu(menu.clone()));
    }

    fn popup_status_menu(&mut self, vertical_offset: f64) {
        self.calls.push(Call::PopupMenu(vertical_offset));
    }

    fn current_event(&self) -> Option<ClickKind> {
        self.current_event
    }
}

/// Lay out `<root>/App.framework/Resources/flutter_assets/assets/app_icon.png`
/// with `contents` and return `root`.
pub fn write_icon(root: &Path, contents: &[u8]) -> PathBuf {
    let icon = root.join("App.framework/Resources/flutter_assets/assets/app_icon.png");
    fs::create_dir_all(icon.parent().unwrap()).unwrap();
    fs::write(&icon, contents).unwrap();
    root.to_path_buf()
}

/// A minimal byte string the recording host accepts as an image.
pub fn fake_png() -> Vec<u8> {
    let mut bytes = PNG_MAGIC.to_vec();
    bytes.extend_from_slice(b"\0\0\0\rIHDR");
    bytes
}
