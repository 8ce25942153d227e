use std::path::PathBuf;

use crate::states::ViewSettings;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode an image and scale it to `target_width` physical pixels.
    LoadImage { path: PathBuf, target_width: u32 },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    ImageLoaded {
        path: PathBuf,
        image: egui::ColorImage,
        /// Dimensions of the file before display scaling.
        source_size: [u32; 2],
    },
    SettingsImported {
        path: PathBuf,
        settings: ViewSettings,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
