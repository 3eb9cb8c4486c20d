use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TipCategory {
    Shoes,
    Nutrition,
    Pacing,
}

#[derive(Debug, Clone, Serialize)]
pub struct Tip {
    pub category: TipCategory,
    pub content: &'static str,
}

pub const TIPS: &[Tip] = &[
    Tip {
        category: TipCategory::Shoes,
        content: "Never wear brand new shoes on race day. Break them in for at least 50km first.",
    },
    Tip {
        category: TipCategory::Shoes,
        content: "Visit a specialty running store for a gait analysis to find the right support for your feet.",
    },
    Tip {
        category: TipCategory::Nutrition,
        content: "Practice your race-day breakfast during your long Sunday runs.",
    },
    Tip {
        category: TipCategory::Nutrition,
        content: "Stay hydrated throughout the week, not just on the mornings of your runs.",
    },
    Tip {
        category: TipCategory::Pacing,
        content: "Start slow. If you feel like you are going too slow in the first 3km, you are probably at the right pace.",
    },
    Tip {
        category: TipCategory::Pacing,
        content: "Use the \"Talk Test\": You should be able to hold a conversation during your easy runs.",
    },
    Tip {
        category: TipCategory::Nutrition,
        content: "Post-run recovery starts with a mix of protein and carbohydrates within 30 minutes of finishing.",
    },
    Tip {
        category: TipCategory::Pacing,
        content: "The goal of the long run is time on feet, not speed. Don't worry about your pace.",
    },
];
