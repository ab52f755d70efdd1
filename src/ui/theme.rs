use crate::snapshot::{Level, Role};
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub function: Color,
    pub type_name: Color, // Cyan for type names
    pub bar: Color,       // Unmarked array bars and nodes
    pub visiting: Color,  // Pink for in-progress tree nodes
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),        // Blue for keywords
    string: Color::Rgb(250, 179, 135),         // Orange for strings
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    function: Color::Rgb(249, 226, 175),       // Yellow for functions
    type_name: Color::Rgb(148, 226, 213),      // Cyan/teal for type names
    bar: Color::Rgb(116, 199, 236),            // Sapphire
    visiting: Color::Rgb(245, 194, 231),       // Pink
};

impl Theme {
    /// Color of a highlighted index or node
    pub fn role(&self, role: Role) -> Color {
        match role {
            Role::Comparing | Role::Front => self.function,
            Role::Swapping | Role::Dequeue => self.error,
            Role::Sorted | Role::Found | Role::Enqueue => self.success,
            Role::Active | Role::Rear => self.secondary,
            Role::Visiting => self.visiting,
            Role::Visited => self.type_name,
            Role::Occupied => self.primary,
        }
    }

    /// Color for an optional strongest role, falling back to the plain bar color
    pub fn role_or_bar(&self, role: Option<Role>) -> Color {
        role.map_or(self.bar, |role| self.role(role))
    }

    pub fn level(&self, level: Level) -> Color {
        match level {
            Level::Info => self.fg,
            Level::Success => self.success,
            Level::Error => self.error,
        }
    }
}
