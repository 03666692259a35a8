//! Fehlertypen der Info-Controls.

use std::path::PathBuf;

/// Fehler bei Konstruktion und Konfiguration der Info-Controls
#[derive(Debug, thiserror::Error)]
pub enum InfoControlError {
    /// Unbekannte Distanz-Einheit in der Konfiguration
    #[error("Nicht unterstützte Distanz-Einheit '{0}' (erlaubt: miles, kilometers)")]
    UnsupportedUnit(String),
    /// Optionen-TOML fehlerhaft (inkl. unbekannter Einheit)
    #[error("Optionen fehlerhaft: {0}")]
    MalformedOptions(#[from] toml::de::Error),
    /// Optionen konnten nicht serialisiert werden
    #[error("Optionen nicht serialisierbar: {0}")]
    OptionsSerialization(#[from] toml::ser::Error),
    /// Datei-I/O beim Lesen oder Schreiben der Optionen
    #[error("Datei {path} nicht lesbar/schreibbar: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// GeoJSON fehlerhaft
    #[error("GeoJSON fehlerhaft: {0}")]
    MalformedGeoJson(#[from] serde_json::Error),
}
