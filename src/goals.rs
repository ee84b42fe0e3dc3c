//! Goal chart data: the types and the compiled-in sample dataset.
//!
//! The chart is authored once and compiled in, like a filled-out mandala
//! worksheet: one main theme, eight sub-themes, eight detail items per
//! sub-theme. The 8x8 shape is encoded in the types; the loose constructors
//! exist so hand-assembled input fails at startup instead of rendering a
//! grid with holes.

use thiserror::Error;

use crate::chart::RING;

/// Shape errors when building a chart from loose input.
#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("sub-theme {name:?} has {got} detail items, expected {RING}")]
    DetailCount { name: String, got: usize },
    #[error("chart has {got} sub-themes, expected {RING}")]
    SubThemeCount { got: usize },
}

/// One sub-theme and its eight detail items.
#[derive(Debug, Clone)]
pub struct SubTheme {
    pub name: String,
    pub details: [String; RING],
}

impl SubTheme {
    /// Build from a loose detail list. Fails unless exactly eight items.
    pub fn new(name: impl Into<String>, details: Vec<String>) -> Result<Self, ChartError> {
        let name = name.into();
        let got = details.len();
        let details: [String; RING] = details.try_into().map_err(|_| ChartError::DetailCount {
            name: name.clone(),
            got,
        })?;
        Ok(Self { name, details })
    }
}

/// The complete goal hierarchy shown by the app.
#[derive(Debug, Clone)]
pub struct GoalChart {
    /// Label of the outermost center cell.
    pub main_theme: String,
    /// Deadline badge shown in the header.
    pub deadline: String,
    /// The eight sub-themes, in display and palette order.
    pub sub_themes: [SubTheme; RING],
}

impl GoalChart {
    /// Build from a loose sub-theme list. Fails unless exactly eight.
    pub fn new(
        main_theme: impl Into<String>,
        deadline: impl Into<String>,
        sub_themes: Vec<SubTheme>,
    ) -> Result<Self, ChartError> {
        let got = sub_themes.len();
        let sub_themes: [SubTheme; RING] = sub_themes
            .try_into()
            .map_err(|_| ChartError::SubThemeCount { got })?;
        Ok(Self {
            main_theme: main_theme.into(),
            deadline: deadline.into(),
            sub_themes,
        })
    }
}

fn sub(name: &str, details: [&str; RING]) -> SubTheme {
    SubTheme {
        name: name.to_string(),
        details: details.map(String::from),
    }
}

/// The compiled-in sample chart.
pub fn sample() -> GoalChart {
    GoalChart {
        main_theme: "Personal Growth".to_string(),
        deadline: "Target: end of 2026".to_string(),
        sub_themes: [
            sub(
                "Health",
                [
                    "Sleep 7+ hours",
                    "Morning stretch",
                    "Run 3x a week",
                    "Strength days",
                    "Annual checkup",
                    "Drink water",
                    "Less alcohol",
                    "Walk after meals",
                ],
            ),
            sub(
                "Career",
                [
                    "Ship a project",
                    "Mentor a junior",
                    "Speak at meetup",
                    "Own a feature",
                    "Grow network",
                    "Ask for feedback",
                    "Learn the domain",
                    "Update resume",
                ],
            ),
            sub(
                "Learning",
                [
                    "Read 24 books",
                    "Daily flashcards",
                    "Finish a course",
                    "Take notes",
                    "Weekly review",
                    "Learn Rust",
                    "Write summaries",
                    "Teach it back",
                ],
            ),
            sub(
                "Finance",
                [
                    "Track expenses",
                    "Save 20%",
                    "Index funds",
                    "Emergency fund",
                    "No impulse buys",
                    "Trim subscriptions",
                    "Side income",
                    "Yearly budget",
                ],
            ),
            sub(
                "Family & Friends",
                [
                    "Call parents",
                    "Date nights",
                    "Remember birthdays",
                    "Listen first",
                    "Host dinners",
                    "Write letters",
                    "Shared trips",
                    "Say thank you",
                ],
            ),
            sub(
                "Mindfulness",
                [
                    "Meditate daily",
                    "Keep a journal",
                    "Offline Sundays",
                    "Gratitude list",
                    "Breathing drills",
                    "Early mornings",
                    "Less doomscroll",
                    "Be patient",
                ],
            ),
            sub(
                "Creativity",
                [
                    "Draw weekly",
                    "Photo walks",
                    "Keep an idea log",
                    "Learn guitar",
                    "Share work",
                    "Finish pieces",
                    "Try new tools",
                    "Small zines",
                ],
            ),
            sub(
                "Community",
                [
                    "Volunteer monthly",
                    "Open source PRs",
                    "Join a club",
                    "Help neighbors",
                    "Donate blood",
                    "Local events",
                    "Run a workshop",
                    "Pick up litter",
                ],
            ),
        ],
    }
}
