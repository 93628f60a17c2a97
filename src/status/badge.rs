//! Presentation tokens for status badges

use super::taxonomy::StatusColor;

impl StatusColor {
    /// CSS utility classes used to render a badge of this color
    pub fn badge_classes(&self) -> &'static str {
        match self {
            StatusColor::Gray => "bg-gray-100 text-gray-800",
            StatusColor::Red => "bg-red-100 text-red-800",
            StatusColor::Yellow => "bg-yellow-100 text-yellow-800",
            StatusColor::Green => "bg-green-100 text-green-800",
            StatusColor::Blue => "bg-blue-100 text-blue-800",
            StatusColor::Indigo => "bg-indigo-100 text-indigo-800",
            StatusColor::Purple => "bg-purple-100 text-purple-800",
            StatusColor::Orange => "bg-orange-100 text-orange-800",
        }
    }
}

/// Badge classes for a color name; unrecognized names get the gray token
pub fn get_status_badge_classes(color: &str) -> &'static str {
    StatusColor::parse(color)
        .unwrap_or(StatusColor::Gray)
        .badge_classes()
}
