use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// A collection of icons used throughout the terminal UI.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    /// The delete operation symbol (✗).
    Delete,
    /// The download operation symbol (↓).
    Download,
    /// A file entry symbol (·).
    File,
    /// A directory entry symbol (▸).
    Folder,
    /// A spinner symbol frame.
    Spinner(usize),
}

impl Icon {
    /// Returns the listing icon for an entry of the given kind.
    pub fn for_entry(is_file: bool) -> Self {
        if is_file { Icon::File } else { Icon::Folder }
    }

    /// Returns a `Spinner` icon with the frame index calculated based on
    /// current time.
    pub fn current_spinner() -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        Icon::Spinner((now / 100) as usize)
    }

    /// Returns the string representation of the icon.
    pub fn as_str(self) -> &'static str {
        match self {
            Icon::Delete => "✗",
            Icon::Download => "↓",
            Icon::File => "·",
            Icon::Folder => "▸",
            Icon::Spinner(frame) => SPINNER_FRAMES[frame % SPINNER_FRAMES.len()],
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        // Arrange & Act & Assert
        assert_eq!(Icon::Delete.as_str(), "✗");
        assert_eq!(Icon::Download.as_str(), "↓");
        assert_eq!(Icon::File.as_str(), "·");
        assert_eq!(Icon::Folder.as_str(), "▸");
    }

    #[test]
    fn test_for_entry() {
        // Arrange & Act & Assert
        assert_eq!(Icon::for_entry(true), Icon::File);
        assert_eq!(Icon::for_entry(false), Icon::Folder);
    }

    #[test]
    fn test_current_spinner() {
        // Arrange & Act
        let icon = Icon::current_spinner();

        // Assert
        assert!(matches!(icon, Icon::Spinner(_)));
    }

    #[test]
    fn test_spinner_wraps() {
        // Arrange & Act & Assert
        assert_eq!(Icon::Spinner(10).as_str(), Icon::Spinner(0).as_str());
        assert_eq!(Icon::Spinner(15).as_str(), Icon::Spinner(5).as_str());
    }

    #[test]
    fn test_display_matches_as_str() {
        // Arrange
        let icons = [Icon::Delete, Icon::Download, Icon::File, Icon::Folder];

        // Act & Assert
        for icon in icons {
            assert_eq!(format!("{icon}"), icon.as_str());
        }
    }
}
